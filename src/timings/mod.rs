//! Загрузка и выравнивание табличных замеров
//!
//! Предоставляет:
//! - Типизированные записи замеров
//! - Чтение обязательного и необязательного CSV
//! - Объединение серий по точному совпадению размера

mod loader;
mod types;

pub use loader::{load, load_optional, merge};
pub use types::{MergedRecord, MergedSeries, ReferenceTimingRecord, TimingRecord};
