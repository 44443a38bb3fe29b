pub mod glyph;
pub mod kpi_card;

pub use glyph::Glyph;
pub use kpi_card::KpiCard;
