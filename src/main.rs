//! Построение всех отчётов по замерам умножения матриц

use anyhow::{Context, Result};
use prettytable::{row, Table};
use strassen_report::{
    analysis::{analyze, theoretical_curve},
    config::ReportConfig,
    error::ReportError,
    report::{Artifact, RenderOutcome, ReportRenderer},
    timings,
};

fn main() -> Result<()> {
    // Необязательный аргумент — каталог данных (по умолчанию data/)
    let config = match std::env::args().nth(1) {
        Some(dir) => ReportConfig::with_data_dir(dir),
        None => ReportConfig::default(),
    };

    println!("Чтение замеров из {}...", config.primary_csv.display());

    let primary = match timings::load(&config) {
        Ok(records) => records,
        Err(ReportError::MissingRequiredInput { path }) => {
            println!(
                "Не найден {}. Сначала запусти C++ benchmark (./benchmark).",
                path.display()
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("не удалось загрузить замеры"),
    };
    println!("Загружено {} замеров.", primary.len());

    let reference = timings::load_optional(&config.reference_csv)?;
    if reference.is_empty() {
        println!(
            "Файл {} не найден, графики эталонной реализации будут пропущены.",
            config.reference_csv.display()
        );
    } else {
        println!("Загружено {} эталонных замеров.", reference.len());
    }

    let merged = timings::merge(&primary, &reference);
    let theory = theoretical_curve(&merged.sizes());
    let verdict = analyze(&merged);

    let renderer = ReportRenderer::new(&config, &merged, &reference, &theory, &verdict);
    let outcomes = renderer
        .render_all()
        .context("не удалось построить артефакты")?;

    let written = outcomes
        .iter()
        .filter(|o| matches!(o, RenderOutcome::Written(_)))
        .count();
    println!(
        "\nГотово. Записано {} из {} артефактов в {}",
        written,
        Artifact::ALL.len(),
        config.png_dir.display()
    );

    // Краткий итог в консоль
    let mut summary = Table::new();
    summary.add_row(row!["Наибольший замеренный размер", verdict.max_size]);
    match verdict.crossover_size {
        Some(n) => {
            summary.add_row(row!["Штрассен быстрее начиная с", format!("n = {n}")]);
        }
        None => {
            summary.add_row(row!["Штрассен быстрее начиная с", "не достигнуто"]);
        }
    }
    summary.printstd();
    println!("{}", verdict.narrative);

    Ok(())
}
