//! Ошибки конвейера отчётов

use std::path::PathBuf;
use thiserror::Error;

/// Ошибки, возможные при построении отчётов
#[derive(Debug, Error)]
pub enum ReportError {
    /// Обязательный входной файл с замерами отсутствует
    #[error("не найден файл с замерами {}: сначала нужно запустить C++ benchmark (./benchmark)", .path.display())]
    MissingRequiredInput { path: PathBuf },

    /// Строка CSV с нечитаемыми или недопустимыми полями.
    /// Загрузка прерывается целиком, частичного чтения нет.
    #[error("{}, строка {line}: {message}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Ошибка файловой системы: каталоги, чтение и запись файлов
    #[error("ошибка файловой системы: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка графического бэкенда при отрисовке артефакта
    #[error("не удалось построить {artifact}: {message}")]
    Render { artifact: String, message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
