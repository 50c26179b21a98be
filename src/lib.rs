//! Сравнительные отчёты по замерам умножения матриц
//!
//! Конвейер одного прогона: чтение CSV с замерами (обязательный от C++
//! бенчмарка и необязательный эталонный) → теоретические кривые сложности
//! и практический вердикт → фиксированный каталог PNG-артефактов.

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;
pub mod timings;

// Реэкспорт основных типов для удобства
pub use analysis::{analyze, theoretical_curve, ComparisonVerdict, TheoreticalPoint};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use report::{Artifact, RenderOutcome, ReportRenderer};
pub use timings::{MergedSeries, ReferenceTimingRecord, TimingRecord};
