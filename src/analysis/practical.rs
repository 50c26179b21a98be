//! Практическое сравнение алгоритмов по замеренному времени

use crate::timings::MergedSeries;

/// Итог практического сравнения за один прогон
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonVerdict {
    /// Наибольший замеренный размер
    pub max_size: u32,
    /// Наименьший размер, начиная с которого Штрассен быстрее по замерам
    pub crossover_size: Option<u32>,
    /// Текстовый вывод для панели заключений
    pub narrative: String,
}

/// Определяет размер, с которого Штрассен опережает стандартный алгоритм.
///
/// Эмпирическое отношение standard_ms / strassen_ms считается только для
/// записей со strassen_ms > 0: нулевой замер исключает точку из сравнения,
/// не прерывая прогон. Записи идут по возрастанию n, поэтому первая точка
/// с отношением больше единицы и есть минимальный размер перелома.
pub fn analyze(merged: &MergedSeries) -> ComparisonVerdict {
    let max_size = merged.max_size().unwrap_or(0);

    let crossover_size = merged
        .records
        .iter()
        .filter(|r| r.strassen_ms > 0.0)
        .find(|r| r.standard_ms / r.strassen_ms > 1.0)
        .map(|r| r.size);

    let narrative = match crossover_size {
        Some(n) => format!(
            "По замерам алгоритм Штрассена обгоняет стандартный начиная с n = {n}: \
             асимптотическое преимущество O(n^log2 7) перевешивает накладные расходы рекурсии."
        ),
        None => format!(
            "На всём замеренном диапазоне (до n = {max_size}) стандартный алгоритм \
             быстрее или сопоставим: на этих размерах доминируют накладные расходы \
             Штрассена на рекурсию и дополнительные сложения."
        ),
    };

    ComparisonVerdict {
        max_size,
        crossover_size,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timings::MergedRecord;

    fn series(rows: &[(u32, f64, f64)]) -> MergedSeries {
        MergedSeries {
            records: rows
                .iter()
                .map(|&(size, standard_ms, strassen_ms)| MergedRecord {
                    size,
                    standard_ms,
                    strassen_ms,
                    reference_ms: None,
                })
                .collect(),
        }
    }

    #[test]
    fn crossover_is_minimal_faster_size() {
        let verdict = analyze(&series(&[(64, 10.0, 12.0), (128, 90.0, 70.0)]));
        assert_eq!(verdict.crossover_size, Some(128));
        assert_eq!(verdict.max_size, 128);
        assert!(verdict.narrative.contains("128"));
    }

    #[test]
    fn no_crossover_reports_whole_range() {
        let verdict = analyze(&series(&[
            (16, 0.1, 0.5),
            (64, 10.0, 12.0),
            (256, 400.0, 450.0),
        ]));
        assert_eq!(verdict.crossover_size, None);
        assert_eq!(verdict.max_size, 256);
        assert!(verdict.narrative.contains("256"));
    }

    #[test]
    fn zero_strassen_time_is_excluded() {
        // standard_ms / 0 дал бы бесконечность; точка просто выпадает
        let verdict = analyze(&series(&[(64, 10.0, 0.0)]));
        assert_eq!(verdict.crossover_size, None);

        let verdict = analyze(&series(&[(64, 10.0, 0.0), (128, 90.0, 70.0)]));
        assert_eq!(verdict.crossover_size, Some(128));
    }

    #[test]
    fn equal_times_do_not_count_as_crossover() {
        let verdict = analyze(&series(&[(64, 10.0, 10.0)]));
        assert_eq!(verdict.crossover_size, None);
    }
}
