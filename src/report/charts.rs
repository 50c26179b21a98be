//! Отрисовка графиков на plotters (растровый бэкенд)

use std::error::Error;
use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::prelude::*;

use crate::analysis::TheoreticalPoint;

pub(super) type DrawResult = Result<(), Box<dyn Error>>;

/// Размер всех изображений в пикселях
const CANVAS: (u32, u32) = (1000, 700);

const X_LABEL: &str = "Размер матрицы n (n x n)";
const Y_LABEL_MS: &str = "Время, мс";

/// Одна серия точек для линейных графиков и наложений
pub(super) struct Series<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub points: &'a [(f64, f64)],
}

fn linear_bounds(series: &[Series<'_>]) -> (f64, f64) {
    let mut x_max = 1.0f64;
    let mut y_max = 1.0f64;
    for s in series {
        for &(x, y) in s.points {
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    (x_max, y_max)
}

fn positive_bounds(series: &[Series<'_>]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::MAX;
    let mut x_max = 1.0f64;
    let mut y_min = f64::MAX;
    let mut y_max = 1.0f64;
    for s in series {
        for &(x, y) in s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if x_min == f64::MAX {
        x_min = 1.0;
    }
    if y_min == f64::MAX {
        y_min = 0.1;
    }
    ((x_min, x_max.max(x_min * 2.0)), (y_min, y_max.max(y_min * 2.0)))
}

fn draw_marked_series<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    series: &[Series<'_>],
) -> DrawResult
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(
                s.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(s.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart.draw_series(
            s.points.iter().map(|&p| Circle::new(p, 3, color.filled())),
        )?;
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

/// График «размер — время» для одной серии, с маркерами как в исходных
/// построениях
pub(super) fn single_series(path: &Path, title: &str, series: &Series<'_>) -> DrawResult {
    overlay(path, title, std::slice::from_ref(series))
}

/// Наложение всех доступных серий в линейных осях
pub(super) fn overlay(path: &Path, title: &str, series: &[Series<'_>]) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_max, y_max) = linear_bounds(series);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL_MS)
        .draw()?;

    draw_marked_series(&mut chart, series)?;
    root.present()?;
    Ok(())
}

/// Наложение в лог-лог осях. Вызывающий гарантирует, что все значения
/// строго положительны.
pub(super) fn overlay_loglog(path: &Path, title: &str, series: &[Series<'_>]) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = positive_bounds(series);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (x_min * 0.9..x_max * 1.1).log_scale(),
            (y_min * 0.5..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL_MS)
        .draw()?;

    draw_marked_series(&mut chart, series)?;
    root.present()?;
    Ok(())
}

/// Нормированные теоретические кривые слева, экономия в процентах справа,
/// общая легенда на обе оси
pub(super) fn theory_normalized(path: &Path, title: &str, theory: &[TheoreticalPoint]) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = theory.first().map_or(1.0, |p| f64::from(p.size));
    let x_max = theory
        .last()
        .map_or(2.0, |p| f64::from(p.size))
        .max(x_min + 1.0);
    let cubic_max = theory.iter().map(|p| p.cubic_ops).fold(1.0, f64::max);
    let strassen_max = theory.iter().map(|p| p.strassen_ops).fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .right_y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..1.05)?
        .set_secondary_coord(x_min..x_max, 0.0..100.0);

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("Затраты, доля от максимума серии")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Экономия, %")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            theory
                .iter()
                .map(|p| (f64::from(p.size), p.cubic_ops / cubic_max)),
            BLUE.stroke_width(2),
        ))?
        .label("n^3, нормировано")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            theory
                .iter()
                .map(|p| (f64::from(p.size), p.strassen_ops / strassen_max)),
            RED.stroke_width(2),
        ))?
        .label("n^log2(7), нормировано")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_secondary_series(LineSeries::new(
            theory.iter().map(|p| (f64::from(p.size), p.saving_percent)),
            GREEN.stroke_width(2),
        ))?
        .label("Экономия Штрассена, %")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Теоретические затраты без нормировки в лог-лог осях
pub(super) fn theory_loglog(path: &Path, title: &str, theory: &[TheoreticalPoint]) -> DrawResult {
    let cubic: Vec<(f64, f64)> = theory
        .iter()
        .map(|p| (f64::from(p.size), p.cubic_ops))
        .collect();
    let strassen: Vec<(f64, f64)> = theory
        .iter()
        .map(|p| (f64::from(p.size), p.strassen_ops))
        .collect();

    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let series = [
        Series {
            label: "n^3 (стандартный)",
            color: BLUE,
            points: &cubic,
        },
        Series {
            label: "n^log2(7) (Штрассен)",
            color: RED,
            points: &strassen,
        },
    ];
    let ((x_min, x_max), (y_min, y_max)) = positive_bounds(&series);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (x_min * 0.9..x_max * 1.1).log_scale(),
            (y_min * 0.5..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("Операции, шт.")
        .draw()?;

    draw_marked_series(&mut chart, &series)?;
    root.present()?;
    Ok(())
}

/// Столбчатая диаграмма экономии; размеры отложены как дискретные
/// категории, а не непрерывная ось
pub(super) fn savings_bar(path: &Path, title: &str, theory: &[TheoreticalPoint]) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = theory.iter().map(|p| p.size.to_string()).collect();
    let y_max = theory
        .iter()
        .map(|p| p.saving_percent)
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..theory.len()).into_segmented(), 0.0..y_max * 1.15)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("Экономия, %")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(theory.iter().enumerate().map(|(i, p)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), p.saving_percent),
            ],
            BLUE.mix(0.6).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Отношение теоретических затрат n^3 / n^log2(7)
pub(super) fn ratio_curve(path: &Path, title: &str, theory: &[TheoreticalPoint]) -> DrawResult {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = theory.first().map_or(1.0, |p| f64::from(p.size));
    let x_max = theory
        .last()
        .map_or(2.0, |p| f64::from(p.size))
        .max(x_min + 1.0);
    let y_max = theory.iter().map(|p| p.ratio).fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("n^3 / n^log2(7)")
        .draw()?;

    let points: Vec<(f64, f64)> = theory
        .iter()
        .map(|p| (f64::from(p.size), p.ratio))
        .collect();
    let series = Series {
        label: "Во сколько раз Штрассен дешевле",
        color: BLUE,
        points: &points,
    };
    draw_marked_series(&mut chart, std::slice::from_ref(&series))?;

    root.present()?;
    Ok(())
}
