//! Конфигурация путей конвейера
//!
//! Пути передаются явно в загрузчик и отрисовщик, вместо глобальных
//! констант каталогов. По умолчанию используется то же дерево, что и
//! у бенчмарков: `data/csv` для таблиц и `data/png` для графиков.

use std::path::{Path, PathBuf};

/// Пути к входным таблицам и каталогу выходных изображений
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Обязательный CSV от C++ бенчмарка: n, standard_ms, strassen_ms
    pub primary_csv: PathBuf,
    /// Необязательный CSV с эталонными замерами: n, reference_ms
    pub reference_csv: PathBuf,
    /// Каталог для PNG-артефактов
    pub png_dir: PathBuf,
    /// Корень проекта: бенчмарк мог оставить timings.csv прямо здесь
    pub project_root: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::with_data_dir("data")
    }
}

impl ReportConfig {
    /// Конфигурация со стандартной структурой подкаталогов csv/ и png/
    /// внутри указанного каталога данных
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            primary_csv: data_dir.join("csv").join("timings.csv"),
            reference_csv: data_dir.join("csv").join("timings_numpy.csv"),
            png_dir: data_dir.join("png"),
            project_root: PathBuf::from("."),
        }
    }
}
