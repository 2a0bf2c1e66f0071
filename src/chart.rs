use std::fs;
use std::path::{Path, PathBuf};

use charming::component::{Axis, Grid, Legend, Title};
use charming::datatype::{CompositeValue, DataPoint};
use charming::element::{AxisLabel, AxisType, Tooltip, Trigger};
use charming::series::Line;
use charming::{Chart, ImageRenderer};
use log::info;

use crate::error::RatesError;
use crate::exchange_rate::RatePoint;
use crate::fetcher::DATE_FORMAT;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

pub fn chart_file_name(name1: &str, name2: &str) -> String {
    format!("{}_{}_plot.svg", underscored(name1), underscored(name2))
}

fn underscored(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

// Overwrites any previous chart with the same name.
pub fn draw_chart_for_rates_of(
    rates1: &[RatePoint],
    name1: &str,
    rates2: &[RatePoint],
    name2: &str,
    out_dir: &Path,
) -> Result<PathBuf, RatesError> {
    if rates1.is_empty() || rates2.is_empty() {
        return Err(RatesError::EmptySeries);
    }

    let chart = build_chart(rates1, name1, rates2, name2);
    let svg = ImageRenderer::new(WIDTH, HEIGHT)
        .render(&chart)
        .map_err(|e| RatesError::Render(format!("{e:?}")))?;

    let path = out_dir.join(chart_file_name(name1, name2));
    fs::write(&path, svg)?;
    info!("Chart written to {}", path.display());

    Ok(path)
}

pub fn build_chart(rates1: &[RatePoint], name1: &str, rates2: &[RatePoint], name2: &str) -> Chart {
    let mut chart = build_base_chart(name1, name2);
    chart = add_x_axis(chart);
    chart = add_y_axis(chart);
    chart = add_series(chart, name1, rates1);
    chart = add_series(chart, name2, rates2);
    chart
}

fn build_base_chart(name1: &str, name2: &str) -> Chart {
    Chart::new()
        .title(
            Title::new()
                .text(format!("{name1} and {name2} average exchange rate over time"))
                .left("center"),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(
            Legend::new()
                .data(vec![name1.to_string(), name2.to_string()])
                .bottom(0),
        )
        .grid(Grid::new().left(70).right(30).bottom(80))
}

fn add_x_axis(chart: Chart) -> Chart {
    chart.x_axis(
        Axis::new()
            .type_(AxisType::Time)
            .name("Date [YYYY-MM-DD]")
            .axis_label(AxisLabel::new().formatter("{yyyy}-{MM}-{dd}")),
    )
}

fn add_y_axis(chart: Chart) -> Chart {
    chart.y_axis(
        Axis::new()
            .type_(AxisType::Value)
            .name("Exchange rate [PLN]")
            .scale(true),
    )
}

fn add_series(chart: Chart, name: &str, rates: &[RatePoint]) -> Chart {
    let data: Vec<DataPoint> = rates
        .iter()
        .map(|point| {
            DataPoint::from(vec![
                CompositeValue::from(point.date.format(DATE_FORMAT).to_string()),
                CompositeValue::from(point.rate_f64()),
            ])
        })
        .collect();

    chart.series(Line::new().name(name).show_symbol(false).data(data))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn series(values: &[(u32, i64)]) -> Vec<RatePoint> {
        values
            .iter()
            .map(|&(day, mid)| RatePoint {
                date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                rate: Decimal::new(mid, 4),
            })
            .collect()
    }

    #[test]
    fn file_name_replaces_whitespace() {
        assert_eq!(chart_file_name("USD", "EUR"), "USD_EUR_plot.svg");
        assert_eq!(
            chart_file_name("US dollar", "euro\tzone"),
            "US_dollar_euro_zone_plot.svg"
        );
    }

    #[test]
    fn chart_carries_labels_and_both_series() {
        let usd = series(&[(7, 39512), (8, 39347)]);
        let eur = series(&[(7, 43011), (8, 42987)]);

        let json = build_chart(&usd, "USD", &eur, "EUR").to_string();

        assert!(json.contains("USD and EUR average exchange rate over time"));
        assert!(json.contains("Date [YYYY-MM-DD]"));
        assert!(json.contains("Exchange rate [PLN]"));
        assert!(json.contains("2024-03-08"));
        assert_eq!(json.matches("\"line\"").count(), 2);
    }

    #[test]
    fn empty_series_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let usd = series(&[(7, 39512)]);
        let empty = Vec::new();

        for (a, b) in [(&usd, &empty), (&empty, &usd)] {
            let err = draw_chart_for_rates_of(a, "USD", b, "EUR", dir.path()).unwrap_err();
            assert!(matches!(err, RatesError::EmptySeries));
        }
        assert!(!dir.path().join("USD_EUR_plot.svg").exists());
    }

    #[test]
    fn writes_svg_and_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("USD_EUR_plot.svg");
        fs::write(&target, "stale").unwrap();

        let usd = series(&[(7, 39512), (8, 39347)]);
        let eur = series(&[(7, 43011), (8, 42987)]);
        let path = draw_chart_for_rates_of(&usd, "USD", &eur, "EUR", dir.path()).unwrap();

        assert_eq!(path, target);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }
}
