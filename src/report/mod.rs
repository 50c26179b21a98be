//! Отрисовка фиксированного каталога PNG-артефактов
//!
//! Один отрисовщик вместо трёх перекрывающихся скриптов построения:
//! вид артефакта задаётся замкнутым перечислением, каждый вызов
//! независим и полностью перезаписывает свой файл.

mod artifact;
mod charts;
mod panels;

pub use artifact::{Artifact, RenderOutcome};

use std::fs;

use plotters::style::colors::{BLUE, GREEN, RED};

use crate::analysis::{ComparisonVerdict, TheoreticalPoint};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::timings::{MergedSeries, ReferenceTimingRecord};

use charts::Series;

const STANDARD_LABEL: &str = "Стандартный алгоритм (O(n^3))";
const STRASSEN_LABEL: &str = "Алгоритм Штрассена (O(n^log2 7))";
const REFERENCE_LABEL: &str = "Векторизованная реализация (NumPy)";

/// Отрисовщик одного прогона: держит все входные серии и вердикт
pub struct ReportRenderer<'a> {
    config: &'a ReportConfig,
    merged: &'a MergedSeries,
    reference: &'a [ReferenceTimingRecord],
    theory: &'a [TheoreticalPoint],
    verdict: &'a ComparisonVerdict,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(
        config: &'a ReportConfig,
        merged: &'a MergedSeries,
        reference: &'a [ReferenceTimingRecord],
        theory: &'a [TheoreticalPoint],
        verdict: &'a ComparisonVerdict,
    ) -> Self {
        Self {
            config,
            merged,
            reference,
            theory,
            verdict,
        }
    }

    /// Отрисовывает все артефакты каталога по порядку
    pub fn render_all(&self) -> Result<Vec<RenderOutcome>> {
        Artifact::ALL.iter().map(|&a| self.render(a)).collect()
    }

    /// Отрисовывает один артефакт: создаёт каталоги при необходимости,
    /// перезаписывает файл и печатает однострочное сообщение
    pub fn render(&self, artifact: Artifact) -> Result<RenderOutcome> {
        if let Some(reason) = self.skip_reason(artifact) {
            println!("Пропущен {}: {}", artifact.file_name(), reason);
            return Ok(RenderOutcome::Skipped(reason));
        }

        fs::create_dir_all(&self.config.png_dir)?;
        let path = self.config.png_dir.join(artifact.file_name());

        let standard = self.standard_points();
        let strassen = self.strassen_points();
        let reference = self.reference_points();

        let drawn: charts::DrawResult = match artifact {
            Artifact::StandardTiming => charts::single_series(
                &path,
                "Время работы стандартного алгоритма",
                &Series {
                    label: STANDARD_LABEL,
                    color: BLUE,
                    points: &standard,
                },
            ),
            Artifact::StrassenTiming => charts::single_series(
                &path,
                "Время работы алгоритма Штрассена",
                &Series {
                    label: STRASSEN_LABEL,
                    color: RED,
                    points: &strassen,
                },
            ),
            Artifact::ReferenceTiming => charts::single_series(
                &path,
                "Время работы векторизованной реализации",
                &Series {
                    label: REFERENCE_LABEL,
                    color: GREEN,
                    points: &reference,
                },
            ),
            Artifact::TimingOverlay => charts::overlay(
                &path,
                "Сравнение времени работы алгоритмов умножения матриц",
                &self.timing_series(&standard, &strassen, &reference),
            ),
            Artifact::TimingOverlayLogLog => charts::overlay_loglog(
                &path,
                "Сравнение времени работы (логарифмические оси)",
                &self.timing_series(&standard, &strassen, &reference),
            ),
            Artifact::TheoryNormalized => charts::theory_normalized(
                &path,
                "Теоретические затраты и экономия Штрассена",
                self.theory,
            ),
            Artifact::TheoryLogLog => charts::theory_loglog(
                &path,
                "Теоретические затраты операций (лог-лог)",
                self.theory,
            ),
            Artifact::SavingsBar => charts::savings_bar(
                &path,
                "Экономия операций алгоритма Штрассена",
                self.theory,
            ),
            Artifact::RatioCurve => charts::ratio_curve(
                &path,
                "Отношение затрат n^3 / n^log2(7)",
                self.theory,
            ),
            Artifact::NarrativePanel => panels::narrative_panel(&path, self.verdict),
            Artifact::ComparisonTable => panels::comparison_table(&path),
        };

        drawn.map_err(|e| ReportError::Render {
            artifact: artifact.file_name().to_string(),
            message: e.to_string(),
        })?;

        println!("Сохранён график: {}", path.display());
        Ok(RenderOutcome::Written(path))
    }

    fn skip_reason(&self, artifact: Artifact) -> Option<&'static str> {
        match artifact {
            Artifact::ReferenceTiming if self.reference.is_empty() => {
                Some("нет данных эталонной реализации")
            }
            Artifact::TimingOverlayLogLog if !self.all_series_positive() => {
                Some("в сериях есть нулевые или отрицательные значения")
            }
            _ => None,
        }
    }

    /// Логарифмические оси определены только для положительных значений
    fn all_series_positive(&self) -> bool {
        self.merged
            .records
            .iter()
            .all(|r| r.standard_ms > 0.0 && r.strassen_ms > 0.0)
            && self.reference.iter().all(|r| r.reference_ms > 0.0)
    }

    fn standard_points(&self) -> Vec<(f64, f64)> {
        self.merged
            .records
            .iter()
            .map(|r| (f64::from(r.size), r.standard_ms))
            .collect()
    }

    fn strassen_points(&self) -> Vec<(f64, f64)> {
        self.merged
            .records
            .iter()
            .map(|r| (f64::from(r.size), r.strassen_ms))
            .collect()
    }

    /// Эталонная серия идёт со своими собственными размерами, без
    /// подгонки под основную сетку
    fn reference_points(&self) -> Vec<(f64, f64)> {
        self.reference
            .iter()
            .map(|r| (f64::from(r.size), r.reference_ms))
            .collect()
    }

    fn timing_series<'b>(
        &self,
        standard: &'b [(f64, f64)],
        strassen: &'b [(f64, f64)],
        reference: &'b [(f64, f64)],
    ) -> Vec<Series<'b>> {
        let mut series = vec![
            Series {
                label: STANDARD_LABEL,
                color: BLUE,
                points: standard,
            },
            Series {
                label: STRASSEN_LABEL,
                color: RED,
                points: strassen,
            },
        ];
        if !reference.is_empty() {
            series.push(Series {
                label: REFERENCE_LABEL,
                color: GREEN,
                points: reference,
            });
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::timings::{merge, TimingRecord};
    use tempfile::TempDir;

    fn renderer_inputs(
        rows: &[(u32, f64, f64)],
        reference: Vec<ReferenceTimingRecord>,
    ) -> (MergedSeries, Vec<ReferenceTimingRecord>, Vec<TheoreticalPoint>, ComparisonVerdict) {
        let primary: Vec<TimingRecord> = rows
            .iter()
            .map(|&(size, standard_ms, strassen_ms)| TimingRecord {
                size,
                standard_ms,
                strassen_ms,
            })
            .collect();
        let merged = merge(&primary, &reference);
        let theory = analysis::theoretical_curve(&merged.sizes());
        let verdict = analysis::analyze(&merged);
        (merged, reference, theory, verdict)
    }

    fn config_in(dir: &TempDir) -> ReportConfig {
        let data = dir.path().join("data");
        ReportConfig {
            primary_csv: data.join("csv").join("timings.csv"),
            reference_csv: data.join("csv").join("timings_numpy.csv"),
            png_dir: data.join("png"),
            project_root: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn loglog_overlay_skipped_on_zero_value() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let (merged, reference, theory, verdict) =
            renderer_inputs(&[(2, 0.0, 0.001), (64, 10.0, 12.0)], Vec::new());
        let renderer = ReportRenderer::new(&config, &merged, &reference, &theory, &verdict);

        let outcome = renderer.render(Artifact::TimingOverlayLogLog).unwrap();
        assert!(matches!(outcome, RenderOutcome::Skipped(_)));
        assert!(!config.png_dir.join("timings_overlay_loglog.png").exists());
    }

    #[test]
    fn reference_chart_skipped_without_reference_data() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let (merged, reference, theory, verdict) =
            renderer_inputs(&[(64, 10.0, 12.0)], Vec::new());
        let renderer = ReportRenderer::new(&config, &merged, &reference, &theory, &verdict);

        let outcome = renderer.render(Artifact::ReferenceTiming).unwrap();
        assert!(matches!(outcome, RenderOutcome::Skipped(_)));
    }

    #[test]
    fn zero_reference_value_also_blocks_loglog() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let reference = vec![ReferenceTimingRecord {
            size: 64,
            reference_ms: 0.0,
        }];
        let (merged, reference, theory, verdict) =
            renderer_inputs(&[(64, 10.0, 12.0)], reference);
        let renderer = ReportRenderer::new(&config, &merged, &reference, &theory, &verdict);

        let outcome = renderer.render(Artifact::TimingOverlayLogLog).unwrap();
        assert!(matches!(outcome, RenderOutcome::Skipped(_)));
    }
}
