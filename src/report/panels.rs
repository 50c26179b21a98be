//! Текстовые панели: выводы и сравнительная таблица

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::analysis::ComparisonVerdict;

use super::charts::DrawResult;

const CANVAS: (u32, u32) = (1000, 700);

/// Качественное сравнение алгоритмов по фиксированным характеристикам.
/// Первая строка — заголовок таблицы.
const TABLE_ROWS: [(&str, &str, &str); 8] = [
    ("Характеристика", "Стандартный алгоритм", "Алгоритм Штрассена"),
    ("Сложность", "O(n^3)", "O(n^log2 7) ≈ O(n^2.81)"),
    ("Асимптотика", "хуже при больших n", "лучше при больших n"),
    ("Константный множитель", "малый", "большой"),
    ("Память", "O(n^2)", "O(n^2) + матрицы рекурсии"),
    ("Сложность реализации", "простая", "заметно сложнее"),
    ("Эффективность на практике", "быстрее при малых n", "быстрее при больших n"),
    ("Параллелизация", "легко по строкам", "по 7 рекурсивным ветвям"),
];

/// Разбивает текст на строки не длиннее max_chars символов по пробелам
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn compose_lines(verdict: &ComparisonVerdict) -> Vec<String> {
    let mut lines = vec![
        "Теория: стандартный алгоритм выполняет O(n^3) операций,".to_string(),
        "алгоритм Штрассена — O(n^log2 7) ≈ O(n^2.81).".to_string(),
        String::new(),
    ];
    lines.extend(wrap(&verdict.narrative, 76));
    lines.push(String::new());
    lines.push("Итого:".to_string());
    lines.push("1. Теоретически Штрассен асимптотически быстрее.".to_string());
    lines.push("2. На малых размерах его накладные расходы перевешивают выигрыш.".to_string());
    lines.push(match verdict.crossover_size {
        Some(n) => format!("3. По замерам выигрыш появляется начиная с n = {n}."),
        None => format!(
            "3. До n = {} выигрыш по замерам не достигнут.",
            verdict.max_size
        ),
    });
    lines
}

/// Панель с текстовыми выводами: фиксированная теоретическая справка,
/// практический вердикт и три пункта заключения
pub(super) fn narrative_panel(path: &Path, verdict: &ComparisonVerdict) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let title_style = TextStyle::from(("sans-serif", 32)).color(&BLACK);
    root.draw(&Text::new("Выводы", (40, 30), title_style))?;

    let body_style = TextStyle::from(("sans-serif", 20)).color(&BLACK);
    for (i, line) in compose_lines(verdict).iter().enumerate() {
        let y = 100 + i as i32 * 30;
        root.draw(&Text::new(line.as_str(), (40, y), body_style.clone()))?;
    }

    root.present()?;
    Ok(())
}

/// Сравнительная таблица качественных характеристик. Выравнивание текста
/// в ячейках задаётся только публичным стилем текста.
pub(super) fn comparison_table(path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let title_style = TextStyle::from(("sans-serif", 28)).color(&BLACK);
    root.draw(&Text::new(
        "Сравнительная таблица алгоритмов умножения матриц",
        (40, 25),
        title_style,
    ))?;

    let left = 40;
    let top = 90;
    let col_widths: [i32; 3] = [270, 320, 320];
    let total_width: i32 = col_widths.iter().sum();
    let row_height = 66;

    let cell_style = TextStyle::from(("sans-serif", 18))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (r, row) in TABLE_ROWS.iter().enumerate() {
        let y0 = top + r as i32 * row_height;
        if r == 0 {
            root.draw(&Rectangle::new(
                [(left, y0), (left + total_width, y0 + row_height)],
                RGBColor(225, 225, 225).filled(),
            ))?;
        }

        let cells = [row.0, row.1, row.2];
        let mut x = left;
        for (c, text) in cells.iter().enumerate() {
            root.draw(&Rectangle::new(
                [(x, y0), (x + col_widths[c], y0 + row_height)],
                BLACK.stroke_width(1),
            ))?;
            root.draw(&Text::new(
                *text,
                (x + 12, y0 + row_height / 2),
                cell_style.clone(),
            ))?;
            x += col_widths[c];
        }
    }

    root.present()?;
    Ok(())
}
