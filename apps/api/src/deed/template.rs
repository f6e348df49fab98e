//! Sale-deed text template: field substitution, sanitization, line splitting.
//!
//! The renderer is a black box as far as the pagination engine is concerned —
//! it produces a flat text blob with explicit line breaks. Substitution uses
//! `{placeholder}` markers replaced field by field; sanitization then reduces
//! the blob to what the embedded font (and its metric table) can encode.

use crate::deed::fields::SaleDeedFields;

/// The legal text of the deed. Placeholders match the wire names of the form
/// fields; `sellerName` and `buyerName` appear twice (body and signature).
const SALE_DEED_TEMPLATE: &str = "\
SALE DEED OF ELECTRONIC DEVICE

This Sale Deed is executed on the {executionDay} day of {executionMonth} at {executionPlace},

BETWEEN

{sellerName}, son/daughter of {sellerFatherName}, residing at {sellerAddress}, holding Aadhaar number {sellerAadhaar} (hereinafter referred to as the \"SELLER\", which expression shall include his/her heirs, legal representatives and assigns) of the ONE PART,

AND

{buyerName}, son/daughter of {buyerFatherName}, residing at {buyerAddress}, holding Aadhaar number {buyerAadhaar} (hereinafter referred to as the \"BUYER\", which expression shall include his/her heirs, legal representatives and assigns) of the OTHER PART.

WHEREAS the Seller is the sole and absolute owner of the electronic device more fully described below, and has agreed to sell the said device to the Buyer, and the Buyer has agreed to purchase it on the terms set out herein.

DESCRIPTION OF THE DEVICE

Model: {deviceModel}
Serial Number: {serialNumber}
Colour: {deviceColor}
Storage Capacity: {storageCapacity}

NOW THIS DEED WITNESSES AS FOLLOWS:

1. In consideration of a sum of Rs. {salePriceInFigures} ({salePriceInWords} only), paid by the Buyer to the Seller by {paymentMode}, drawn on {bankName} from the account of {accountHolderName} bearing account number {accountNumber} (IFSC: {ifscCode}), the receipt of which the Seller hereby acknowledges, the Seller transfers and conveys unto the Buyer the said device absolutely.

2. The Seller hereby delivers to the Buyer, along with the device, the following accessories: {accessoriesList}.

3. The Seller further hands over the following documents relating to the device: {documentsList}.

4. The Seller covenants that the said device is free from all encumbrances, liens and charges, that it has not been reported lost or stolen, and that the Seller has full right and absolute authority to sell the same.

5. The Buyer shall hold and enjoy the said device as its absolute owner from the date of execution of this deed, and the Seller shall have no claim over it thereafter.

IN WITNESS WHEREOF the Seller and the Buyer have set their hands to this deed on the day, month and place first above written.

SELLER: {sellerName}

BUYER: {buyerName}

WITNESS 1: ____________________

WITNESS 2: ____________________
";

/// Substitutes all 24 fields into the deed template.
pub fn render(fields: &SaleDeedFields) -> String {
    SALE_DEED_TEMPLATE
        .replace("{executionDay}", &fields.execution_day)
        .replace("{executionMonth}", &fields.execution_month)
        .replace("{executionPlace}", &fields.execution_place)
        .replace("{sellerName}", &fields.seller_name)
        .replace("{sellerFatherName}", &fields.seller_father_name)
        .replace("{sellerAddress}", &fields.seller_address)
        .replace("{sellerAadhaar}", &fields.seller_aadhaar)
        .replace("{buyerName}", &fields.buyer_name)
        .replace("{buyerFatherName}", &fields.buyer_father_name)
        .replace("{buyerAddress}", &fields.buyer_address)
        .replace("{buyerAadhaar}", &fields.buyer_aadhaar)
        .replace("{deviceModel}", &fields.device_model)
        .replace("{serialNumber}", &fields.serial_number)
        .replace("{deviceColor}", &fields.device_color)
        .replace("{storageCapacity}", &fields.storage_capacity)
        .replace("{salePriceInWords}", &fields.sale_price_in_words)
        .replace("{salePriceInFigures}", &fields.sale_price_in_figures)
        .replace("{paymentMode}", &fields.payment_mode)
        .replace("{bankName}", &fields.bank_name)
        .replace("{accountHolderName}", &fields.account_holder_name)
        .replace("{accountNumber}", &fields.account_number)
        .replace("{ifscCode}", &fields.ifsc_code)
        .replace("{accessoriesList}", &fields.accessories_list)
        .replace("{documentsList}", &fields.documents_list)
}

/// Reduces rendered text to what the Helvetica metric table and WinAnsi
/// string encoding can handle: tabs become spaces, line breaks survive, any
/// other character outside printable ASCII is dropped.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            '\n' => Some('\n'),
            ' '..='~' => Some(c),
            _ => None,
        })
        .collect()
}

/// Splits sanitized text into the non-blank source lines the pagination
/// engine consumes.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let rendered = render(&SaleDeedFields::sample());
        assert!(
            !rendered.contains('{') && !rendered.contains('}'),
            "no placeholder may survive substitution"
        );
    }

    #[test]
    fn test_render_contains_field_values() {
        let fields = SaleDeedFields::sample();
        let rendered = render(&fields);
        assert!(rendered.contains("Rohan Mehta"));
        assert!(rendered.contains("Pixel 8 Pro"));
        assert!(rendered.contains("SBIN0001234"));
        assert!(rendered.contains("Forty Five Thousand Rupees"));
    }

    #[test]
    fn test_signature_block_repeats_party_names() {
        let rendered = render(&SaleDeedFields::sample());
        assert!(rendered.contains("SELLER: Rohan Mehta"));
        assert!(rendered.contains("BUYER: Anita Desai"));
        assert_eq!(rendered.matches("Rohan Mehta").count(), 2);
    }

    #[test]
    fn test_sanitize_replaces_tabs_and_drops_non_ascii() {
        assert_eq!(sanitize("a\tb"), "a b");
        assert_eq!(sanitize("price ₹45,000 — done"), "price 45,000  done");
        assert_eq!(sanitize("line1\nline2"), "line1\nline2");
    }

    #[test]
    fn test_source_lines_drops_blank_lines() {
        let lines = source_lines("first\n\n   \nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_rendered_deed_has_expected_sections() {
        let text = sanitize(&render(&SaleDeedFields::sample()));
        let lines = source_lines(&text);
        assert_eq!(lines[0], "SALE DEED OF ELECTRONIC DEVICE");
        assert!(lines.iter().any(|l| l.starts_with("DESCRIPTION OF THE DEVICE")));
        assert!(lines.iter().any(|l| l.starts_with("IN WITNESS WHEREOF")));
    }
}
