use std::path::Path;

use anyhow::{ensure, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::color::Rgb;
use crate::date::DateValue;

pub const CHART_SIZE: (u32, u32) = (1280, 760);

const MAX_X_LABELS: usize = 20;
const Y_LABELS: usize = 20;
/// Room above the highest value, as a multiple of it
const Y_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// One line with markers per series.
    Lines,
    /// Series stacked on top of each other as filled areas.
    Stacked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: Rgb,
    pub values: Vec<f64>,
}

/// Everything needed to draw a chart: one value per date for every series, no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    style: ChartStyle,
    dates: Vec<DateValue>,
    series: Vec<ChartSeries>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        style: ChartStyle,
        dates: Vec<DateValue>,
        series: Vec<ChartSeries>,
    ) -> Result<Self> {
        ensure!(!dates.is_empty(), "There is no data to plot");
        for series in &series {
            ensure!(
                series.values.len() == dates.len(),
                "Series '{}' has {} values but the chart has {} dates",
                series.label,
                series.values.len(),
                dates.len(),
            );
        }
        Ok(Self {
            title: title.into(),
            style,
            dates,
            series,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn dates(&self) -> &[DateValue] {
        &self.dates
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Highest value the y axis has to show; for stacked charts the highest per-date sum.
    fn y_max(&self) -> f64 {
        let max = match self.style {
            ChartStyle::Lines => self
                .series
                .iter()
                .flat_map(|series| series.values.iter().copied())
                .fold(0.0, f64::max),
            ChartStyle::Stacked => stacked_tops(&self.series)
                .last()
                .map(|tops| tops.iter().copied().fold(0.0, f64::max))
                .unwrap_or(0.0),
        };
        if max.is_finite() && max > 0.0 {
            max
        } else {
            1.0
        }
    }

    fn day_offsets(&self) -> Vec<i64> {
        let first = self.dates[0];
        self.dates.iter().map(|date| date.days_since(first)).collect()
    }
}

/// Upper edge of every layer of a stacked chart: the running sum over the series.
fn stacked_tops(series: &[ChartSeries]) -> Vec<Vec<f64>> {
    let mut sum: Vec<f64> = Vec::new();
    series
        .iter()
        .map(|series| {
            sum.resize(series.values.len(), 0.0);
            for (sum, value) in sum.iter_mut().zip(&series.values) {
                *sum += value;
            }
            sum.clone()
        })
        .collect()
}

pub fn render_svg(chart: &Chart, path: &Path) -> Result<()> {
    log::info!("Writing chart to {}...", path.display());
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, chart)?;
    root.present()?;
    log::info!("Writing chart to {}...done", path.display());
    Ok(())
}

pub fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let first_date = chart.dates[0];
    let offsets = chart.day_offsets();
    let x_end = offsets.last().copied().unwrap_or(0).max(1);
    let y_end = chart.y_max() * Y_HEADROOM;

    let mut context = ChartBuilder::on(root)
        .caption(chart.title(), ("sans-serif", 28).into_font())
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 90)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0i64..x_end, 0.0..y_end)?;

    let date_label = |offset: &i64| {
        u64::try_from(*offset)
            .ok()
            .and_then(|offset| first_date.checked_add_days(offset))
            .map(|date| date.to_string())
            .unwrap_or_default()
    };
    let dollar_label = |value: &f64| format!("${:.0}", value);
    context
        .configure_mesh()
        .x_labels(chart.dates.len().min(MAX_X_LABELS))
        .y_labels(Y_LABELS)
        .x_label_formatter(&date_label)
        .y_label_formatter(&dollar_label)
        .label_style(FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal))
        .draw()?;

    match chart.style {
        ChartStyle::Lines => {
            for series in &chart.series {
                let color = RGBColor::from(series.color);
                let points: Vec<(i64, f64)> = offsets
                    .iter()
                    .copied()
                    .zip(series.values.iter().copied())
                    .collect();
                context
                    .draw_series(LineSeries::new(
                        points.iter().copied(),
                        color.stroke_width(2),
                    ))?
                    .label(series.label.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
                context.draw_series(
                    points
                        .iter()
                        .map(|point| Circle::new(*point, 3, color.filled())),
                )?;
            }
        }
        ChartStyle::Stacked => {
            let tops = stacked_tops(&chart.series);
            // Highest layer first, so every lower layer is painted over it
            for (series, tops) in chart.series.iter().zip(tops).rev() {
                let color = RGBColor::from(series.color);
                context
                    .draw_series(AreaSeries::new(
                        offsets.iter().copied().zip(tops),
                        0.0,
                        color.filled(),
                    ))?
                    .label(series.label.clone())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                    });
            }
        }
    }

    context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}
