//! Производные величины: теоретические кривые и практический вердикт

mod practical;
mod theory;

pub use practical::{analyze, ComparisonVerdict};
pub use theory::{theoretical_curve, theoretical_point, TheoreticalPoint, STRASSEN_EXPONENT};
