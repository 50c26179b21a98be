//! Чтение, проверка и объединение CSV с замерами

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};

use super::types::{MergedRecord, MergedSeries, ReferenceTimingRecord, TimingRecord};

/// Сырая строка основного CSV до проверки значений
#[derive(Debug, Deserialize)]
struct RawTimingRow {
    n: i64,
    standard_ms: f64,
    strassen_ms: f64,
}

/// Сырая строка эталонного CSV до проверки значений
#[derive(Debug, Deserialize)]
struct RawReferenceRow {
    n: i64,
    reference_ms: f64,
}

fn malformed(path: &Path, line: u64, message: String) -> ReportError {
    ReportError::MalformedRow {
        path: path.to_path_buf(),
        line,
        message,
    }
}

fn validate_size(path: &Path, line: u64, n: i64) -> Result<u32> {
    if n >= 1 && n <= i64::from(u32::MAX) {
        Ok(n as u32)
    } else {
        Err(malformed(
            path,
            line,
            format!("n должно быть положительным целым, получено {n}"),
        ))
    }
}

fn validate_ms(path: &Path, line: u64, field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(malformed(
            path,
            line,
            format!("{field} должно быть неотрицательным числом, получено {value}"),
        ))
    }
}

/// Переносит timings.csv из корня проекта в каталог данных, если C++
/// бенчмарк оставил его там. Возврат Ok ничего не гарантирует про
/// существование файла, это проверяется дальше в load().
fn relocate_primary(config: &ReportConfig) -> Result<()> {
    if config.primary_csv.exists() {
        return Ok(());
    }
    let root_csv = config.project_root.join("timings.csv");
    if root_csv.exists() {
        if let Some(dir) = config.primary_csv.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::rename(&root_csv, &config.primary_csv)?;
        println!(
            "Перенёс {} -> {}",
            root_csv.display(),
            config.primary_csv.display()
        );
    }
    Ok(())
}

/// Загружает обязательный CSV от C++ бенчмарка.
///
/// Результат отсортирован по возрастанию n независимо от порядка строк
/// в файле. Любая нечитаемая строка или повторяющийся размер прерывает
/// загрузку целиком.
pub fn load(config: &ReportConfig) -> Result<Vec<TimingRecord>> {
    relocate_primary(config)?;
    let path = &config.primary_csv;
    if !path.exists() {
        return Err(ReportError::MissingRequiredInput { path: path.clone() });
    }

    let contents = fs::read_to_string(path)?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut records = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, row) in reader.deserialize::<RawTimingRow>().enumerate() {
        // строка 1 занята заголовком
        let line = index as u64 + 2;
        let raw = row.map_err(|e| malformed(path, line, e.to_string()))?;
        let size = validate_size(path, line, raw.n)?;
        let standard_ms = validate_ms(path, line, "standard_ms", raw.standard_ms)?;
        let strassen_ms = validate_ms(path, line, "strassen_ms", raw.strassen_ms)?;
        if !seen.insert(size) {
            return Err(malformed(
                path,
                line,
                format!("повторяющийся размер n = {size}"),
            ));
        }
        records.push(TimingRecord {
            size,
            standard_ms,
            strassen_ms,
        });
    }

    records.sort_by_key(|r| r.size);
    Ok(records)
}

/// Загружает необязательный CSV с эталонными замерами.
///
/// Отсутствие файла не ошибка: возвращается пустая последовательность,
/// и зависящие от эталона артефакты просто пропускаются.
pub fn load_optional(path: &Path) -> Result<Vec<ReferenceTimingRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut records = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, row) in reader.deserialize::<RawReferenceRow>().enumerate() {
        let line = index as u64 + 2;
        let raw = row.map_err(|e| malformed(path, line, e.to_string()))?;
        let size = validate_size(path, line, raw.n)?;
        let reference_ms = validate_ms(path, line, "reference_ms", raw.reference_ms)?;
        if !seen.insert(size) {
            return Err(malformed(
                path,
                line,
                format!("повторяющийся размер n = {size}"),
            ));
        }
        records.push(ReferenceTimingRecord { size, reference_ms });
    }

    records.sort_by_key(|r| r.size);
    Ok(records)
}

/// Сопоставляет эталонные замеры основной серии по точному совпадению n.
///
/// Размеры, которые есть только в эталонном файле, в объединённую серию
/// не попадают, поэтому её длина всегда равна длине основной.
pub fn merge(primary: &[TimingRecord], reference: &[ReferenceTimingRecord]) -> MergedSeries {
    let by_size: BTreeMap<u32, f64> = reference
        .iter()
        .map(|r| (r.size, r.reference_ms))
        .collect();

    MergedSeries {
        records: primary
            .iter()
            .map(|r| MergedRecord {
                size: r.size,
                standard_ms: r.standard_ms,
                strassen_ms: r.strassen_ms,
                reference_ms: by_size.get(&r.size).copied(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ReportConfig {
        let data = dir.path().join("data");
        ReportConfig {
            primary_csv: data.join("csv").join("timings.csv"),
            reference_csv: data.join("csv").join("timings_numpy.csv"),
            png_dir: data.join("png"),
            project_root: dir.path().to_path_buf(),
        }
    }

    fn write_file(path: &PathBuf, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn load_sorts_by_size() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(
            &config.primary_csv,
            "n,standard_ms,strassen_ms\n128,90.0,70.0\n8,0.01,0.05\n64,10.0,12.0\n",
        );

        let records = load(&config).unwrap();
        let sizes: Vec<u32> = records.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![8, 64, 128]);
        assert_eq!(records[2].standard_ms, 90.0);
        assert_eq!(records[2].strassen_ms, 70.0);
    }

    #[test]
    fn load_missing_required_is_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let err = load(&config).unwrap_err();
        assert!(matches!(err, ReportError::MissingRequiredInput { .. }));
    }

    #[test]
    fn load_relocates_csv_from_project_root() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let root_csv = dir.path().join("timings.csv");
        write_file(&root_csv, "n,standard_ms,strassen_ms\n16,0.2,0.9\n");

        let records = load(&config).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].size, 16);
        assert!(!root_csv.exists());
        assert!(config.primary_csv.exists());
    }

    #[test]
    fn malformed_row_aborts_whole_load() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(
            &config.primary_csv,
            "n,standard_ms,strassen_ms\n8,0.01,0.05\n16,abc,0.2\n32,1.0,1.5\n",
        );

        let err = load(&config).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn negative_time_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(
            &config.primary_csv,
            "n,standard_ms,strassen_ms\n8,-0.5,0.05\n",
        );

        assert!(matches!(
            load(&config).unwrap_err(),
            ReportError::MalformedRow { .. }
        ));
    }

    #[test]
    fn zero_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(&config.primary_csv, "n,standard_ms,strassen_ms\n0,0.1,0.1\n");

        assert!(matches!(
            load(&config).unwrap_err(),
            ReportError::MalformedRow { .. }
        ));
    }

    #[test]
    fn duplicate_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(
            &config.primary_csv,
            "n,standard_ms,strassen_ms\n8,0.01,0.05\n8,0.02,0.06\n",
        );

        assert!(matches!(
            load(&config).unwrap_err(),
            ReportError::MalformedRow { .. }
        ));
    }

    #[test]
    fn load_optional_absent_returns_empty() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let records = load_optional(&config.reference_csv).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_optional_reads_and_sorts() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_file(
            &config.reference_csv,
            "n,reference_ms\n256,3.5\n16,0.05\n",
        );

        let records = load_optional(&config.reference_csv).unwrap();
        let sizes: Vec<u32> = records.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![16, 256]);
    }

    #[test]
    fn merge_aligns_by_exact_size_only() {
        let primary = vec![
            TimingRecord {
                size: 8,
                standard_ms: 0.01,
                strassen_ms: 0.05,
            },
            TimingRecord {
                size: 64,
                standard_ms: 10.0,
                strassen_ms: 12.0,
            },
        ];
        // 32 есть только в эталоне и не должен появиться в объединении
        let reference = vec![
            ReferenceTimingRecord {
                size: 32,
                reference_ms: 0.2,
            },
            ReferenceTimingRecord {
                size: 64,
                reference_ms: 0.9,
            },
        ];

        let merged = merge(&primary, &reference);
        assert_eq!(merged.len(), primary.len());
        assert_eq!(merged.records[0].reference_ms, None);
        assert_eq!(merged.records[1].reference_ms, Some(0.9));
        assert!(merged.sizes().iter().all(|&n| n != 32));
    }
}
