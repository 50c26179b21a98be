//! Каталог артефактов отчёта

use std::path::PathBuf;

/// Виды артефактов; каждому соответствует ровно один PNG с
/// фиксированным именем внутри каталога изображений
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Время стандартного алгоритма от n
    StandardTiming,
    /// Время алгоритма Штрассена от n
    StrassenTiming,
    /// Время эталонной реализации от n; только при наличии её данных
    ReferenceTiming,
    /// Наложение всех доступных серий, линейные оси
    TimingOverlay,
    /// Наложение в лог-лог осях; только при строго положительных значениях
    TimingOverlayLogLog,
    /// Нормированные теоретические затраты слева, экономия в процентах справа
    TheoryNormalized,
    /// Теоретические затраты без нормировки, лог-лог оси
    TheoryLogLog,
    /// Экономия операций по размерам-категориям
    SavingsBar,
    /// Отношение n^3 / n^log2(7) от n
    RatioCurve,
    /// Текстовая панель с выводами
    NarrativePanel,
    /// Сравнительная таблица качественных характеристик
    ComparisonTable,
}

impl Artifact {
    /// Все артефакты в порядке отрисовки
    pub const ALL: [Artifact; 11] = [
        Artifact::StandardTiming,
        Artifact::StrassenTiming,
        Artifact::ReferenceTiming,
        Artifact::TimingOverlay,
        Artifact::TimingOverlayLogLog,
        Artifact::TheoryNormalized,
        Artifact::TheoryLogLog,
        Artifact::SavingsBar,
        Artifact::RatioCurve,
        Artifact::NarrativePanel,
        Artifact::ComparisonTable,
    ];

    /// Имя файла внутри каталога PNG
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::StandardTiming => "standard_timing.png",
            Artifact::StrassenTiming => "strassen_timing.png",
            Artifact::ReferenceTiming => "reference_timing.png",
            Artifact::TimingOverlay => "timings_overlay.png",
            Artifact::TimingOverlayLogLog => "timings_overlay_loglog.png",
            Artifact::TheoryNormalized => "theory_normalized.png",
            Artifact::TheoryLogLog => "theory_loglog.png",
            Artifact::SavingsBar => "theory_savings.png",
            Artifact::RatioCurve => "theory_ratio.png",
            Artifact::NarrativePanel => "conclusions.png",
            Artifact::ComparisonTable => "comparison_table.png",
        }
    }
}

/// Результат отрисовки одного артефакта
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// PNG записан по указанному пути
    Written(PathBuf),
    /// Артефакт пропущен, остальные это не затрагивает
    Skipped(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_unique() {
        for (i, a) in Artifact::ALL.iter().enumerate() {
            for b in &Artifact::ALL[i + 1..] {
                assert_ne!(a.file_name(), b.file_name());
            }
        }
    }
}
