// Text layout: measurement capability + the pagination engine.
// Pagination is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod paginator;

// Re-export the public API consumed by other modules (handlers, pdf).
pub use font_metrics::{HelveticaMetrics, TextMeasure};
pub use paginator::{paginate, LayoutParams, Placement, TextLayout};
