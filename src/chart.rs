use crate::aggregate::DailyTotals;
use serde::Serialize;

pub const CANVAS: Canvas = Canvas {
    width: 860.0,
    height: 280.0,
};

pub const PADDING: Padding = Padding {
    top: 18.0,
    right: 20.0,
    bottom: 45.0,
    left: 45.0,
};

/// Horizontal space between adjacent bars, in canvas units.
const BAR_GUTTER: f64 = 18.0;
/// Vertical space reserved above the tallest bar so its value label is not clipped.
const LABEL_HEADROOM: f64 = 10.0;
/// Scale floor: keeps small or empty datasets from producing oversized bars.
const MAX_VALUE_FLOOR: u64 = 100;

const GRIDLINE_RATIOS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gridline {
    pub y: f64,
    pub label_value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    pub canvas: Canvas,
    pub padding: Padding,
    pub bars: Vec<Bar>,
    pub gridlines: Vec<Gridline>,
    pub max_value: u64,
    pub is_empty: bool,
}

pub fn layout(daily_totals: &DailyTotals) -> ChartLayout {
    layout_with(daily_totals, CANVAS, PADDING)
}

pub fn layout_with(daily_totals: &DailyTotals, canvas: Canvas, padding: Padding) -> ChartLayout {
    let plot_width = canvas.width - padding.left - padding.right;
    let plot_height = canvas.height - padding.top - padding.bottom;

    let max_value = daily_totals
        .values()
        .copied()
        .max()
        .unwrap_or(0)
        .max(MAX_VALUE_FLOOR);
    let slot_width = plot_width / daily_totals.len().max(1) as f64;

    let bars = daily_totals
        .iter()
        .enumerate()
        .map(|(index, (date, &value))| {
            let bar_height = (value as f64 / max_value as f64) * (plot_height - LABEL_HEADROOM);
            let x = padding.left + index as f64 * slot_width + BAR_GUTTER / 2.0;
            let y = padding.top + plot_height - bar_height;
            Bar {
                x,
                y,
                width: slot_width - BAR_GUTTER,
                height: bar_height,
                value,
                date: date.clone(),
            }
        })
        .collect();

    let gridlines = GRIDLINE_RATIOS
        .iter()
        .map(|&ratio| Gridline {
            y: padding.top + plot_height - ratio * plot_height,
            label_value: (max_value as f64 * ratio).round() as u64,
        })
        .collect();

    ChartLayout {
        canvas,
        padding,
        bars,
        gridlines,
        max_value,
        is_empty: daily_totals.is_empty(),
    }
}
