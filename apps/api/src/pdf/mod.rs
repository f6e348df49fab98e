//! Document assembler: turns a `TextLayout` into PDF bytes with `pdf-writer`.
//!
//! One page object per paginated page, the base-14 Helvetica Type1 font with
//! WinAnsi encoding (no embedding — the metric table in `layout` mirrors its
//! AFM widths), and the logo PNG as a flate-compressed RGB image XObject
//! (plus a soft mask when the PNG carries alpha) drawn on the first page.
//! Content streams are flate-compressed.

use std::io::{BufReader, Cursor};

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::errors::AppError;
use crate::layout::{LayoutParams, TextLayout};

/// Fixed scale applied to the logo's pixel dimensions on the page.
pub const LOGO_SCALE: f32 = 0.3;
/// Vertical gap between the logo and the first text line.
pub const LOGO_GAP: f32 = 20.0;

const FONT_NAME: Name = Name(b"F1");
const LOGO_NAME: Name = Name(b"Im1");

// ────────────────────────────────────────────────────────────────────────────
// Logo
// ────────────────────────────────────────────────────────────────────────────

/// The decoded, pre-compressed logo ready for embedding.
#[derive(Debug)]
pub struct Logo {
    rgb_flate: Vec<u8>,
    alpha_flate: Option<Vec<u8>>,
    pixel_width: u32,
    pixel_height: u32,
    pub display_width: f32,
    pub display_height: f32,
}

impl Logo {
    /// Decodes a PNG and prepares the flate-compressed RGB channel (and the
    /// alpha channel as a separate gray soft mask, when present).
    pub fn from_png_bytes(data: &[u8]) -> Result<Self, AppError> {
        let reader = image::ImageReader::with_format(
            BufReader::new(Cursor::new(data)),
            image::ImageFormat::Png,
        );
        let decoded = reader
            .decode()
            .map_err(|e| AppError::Asset(format!("failed to decode logo PNG: {e}")))?;
        let rgba = decoded.to_rgba8();
        let (w, h) = (rgba.width(), rgba.height());

        let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);
        let rgb_data: Vec<u8> = rgba
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        let rgb_flate = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

        let alpha_flate = if has_alpha {
            let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
            Some(miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6))
        } else {
            None
        };

        Ok(Logo {
            rgb_flate,
            alpha_flate,
            pixel_width: w,
            pixel_height: h,
            display_width: w as f32 * LOGO_SCALE,
            display_height: h as f32 * LOGO_SCALE,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Serializes the layout to a complete PDF. Pure and deterministic: identical
/// inputs produce identical bytes.
pub fn assemble(layout: &TextLayout, params: &LayoutParams, logo: &Logo) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let smask_id = match &logo.alpha_flate {
        Some(alpha) => {
            let mask_ref = alloc();
            let mut mask = pdf.image_xobject(mask_ref, alpha);
            mask.filter(Filter::FlateDecode);
            mask.width(logo.pixel_width as i32);
            mask.height(logo.pixel_height as i32);
            mask.color_space().device_gray();
            mask.bits_per_component(8);
            Some(mask_ref)
        }
        None => None,
    };

    let image_id = alloc();
    {
        let mut xobj = pdf.image_xobject(image_id, &logo.rgb_flate);
        xobj.filter(Filter::FlateDecode);
        xobj.width(logo.pixel_width as i32);
        xobj.height(logo.pixel_height as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        if let Some(mask_ref) = smask_id {
            xobj.s_mask(mask_ref);
        }
    }

    let n = layout.page_count;
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for page_idx in 0..n {
        let mut content = Content::new();

        // Logo sits above the text block on the first page only; every other
        // page is blank apart from drawn text.
        if page_idx == 0 {
            content.save_state();
            content.transform([
                logo.display_width,
                0.0,
                0.0,
                logo.display_height,
                params.margin,
                params.top_cursor() - logo.display_height,
            ]);
            content.x_object(LOGO_NAME);
            content.restore_state();
        }

        for placement in layout.placements.iter().filter(|p| p.page == page_idx) {
            content
                .begin_text()
                .set_font(FONT_NAME, params.font_size)
                .next_line(params.margin, placement.y)
                .show(Str(placement.text.as_bytes()))
                .end_text();
        }

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&content.finish(), 6);
        pdf.stream(content_ids[page_idx], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, params.page_width, params.page_height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        resources.fonts().pair(FONT_NAME, font_id);
        resources.x_objects().pair(LOGO_NAME, image_id);
    }

    pdf.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Placement;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn png_bytes(opaque: bool) -> Vec<u8> {
        let alpha = if opaque { 255 } else { 128 };
        let img = image::RgbaImage::from_pixel(6, 4, image::Rgba([40, 80, 160, alpha]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn two_page_layout() -> TextLayout {
        TextLayout {
            placements: vec![
                Placement {
                    page: 0,
                    y: 700.0,
                    text: "This Sale Deed is executed".to_string(),
                },
                Placement {
                    page: 1,
                    y: 750.0,
                    text: "IN WITNESS WHEREOF".to_string(),
                },
            ],
            page_count: 2,
        }
    }

    #[test]
    fn test_logo_decodes_and_scales() {
        let logo = Logo::from_png_bytes(&png_bytes(true)).unwrap();
        assert_eq!(logo.pixel_width, 6);
        assert_eq!(logo.pixel_height, 4);
        assert!((logo.display_width - 1.8).abs() < 1e-4);
        assert!((logo.display_height - 1.2).abs() < 1e-4);
        assert!(logo.alpha_flate.is_none(), "opaque PNG needs no soft mask");
    }

    #[test]
    fn test_translucent_logo_gets_soft_mask() {
        let logo = Logo::from_png_bytes(&png_bytes(false)).unwrap();
        assert!(logo.alpha_flate.is_some());
    }

    #[test]
    fn test_invalid_png_is_an_asset_error() {
        let err = Logo::from_png_bytes(b"not a png").unwrap_err();
        assert!(matches!(err, AppError::Asset(_)));
    }

    #[test]
    fn test_assemble_produces_pdf_with_page_count() {
        let params = LayoutParams::deed_default();
        let logo = Logo::from_png_bytes(&png_bytes(true)).unwrap();
        let bytes = assemble(&two_page_layout(), &params, &logo);

        assert!(bytes.starts_with(b"%PDF-"), "output must be a PDF blob");
        assert!(contains(&bytes, b"/Count 2"), "page tree must count 2 pages");
        assert!(contains(&bytes, b"/Helvetica"));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let params = LayoutParams::deed_default();
        let logo_a = Logo::from_png_bytes(&png_bytes(true)).unwrap();
        let logo_b = Logo::from_png_bytes(&png_bytes(true)).unwrap();
        let a = assemble(&two_page_layout(), &params, &logo_a);
        let b = assemble(&two_page_layout(), &params, &logo_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_layout_still_yields_one_page() {
        let params = LayoutParams::deed_default();
        let logo = Logo::from_png_bytes(&png_bytes(true)).unwrap();
        let layout = TextLayout {
            placements: vec![],
            page_count: 1,
        };
        let bytes = assemble(&layout, &params, &logo);
        assert!(contains(&bytes, b"/Count 1"));
    }
}
