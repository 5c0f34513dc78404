//! Chart Components
//!
//! Line and bar charts drawn on an HTML5 Canvas. Both take an ordered list
//! of labelled values; the y axis starts at zero and ends on a rounded
//! ceiling above the largest value. An empty list draws the grid only.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crm_studio::kpi::{FunnelStep, ReliabilitySignal, TimeSeriesPoint};
use crm_studio::view::format_metric;

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 224;

/// Horizontal grid lines, excluding the baseline
const Y_TICKS: usize = 4;

const SERIES_COLOR: &str = "#0f172a"; // slate-900
const GRID_COLOR: &str = "#e2e8f0"; // slate-200
const LABEL_COLOR: &str = "#64748b"; // slate-500

/// One labelled value on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl From<&TimeSeriesPoint> for ChartPoint {
    fn from(p: &TimeSeriesPoint) -> Self {
        Self {
            label: p.period.clone(),
            value: p.events,
        }
    }
}

impl From<&FunnelStep> for ChartPoint {
    fn from(s: &FunnelStep) -> Self {
        Self {
            label: s.step.clone(),
            value: s.value,
        }
    }
}

impl From<&ReliabilitySignal> for ChartPoint {
    fn from(s: &ReliabilitySignal) -> Self {
        Self {
            label: s.key.clone(),
            value: s.value,
        }
    }
}

/// Line chart (events over time)
#[component]
pub fn LineChart(points: Vec<ChartPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw(&canvas, &points, ChartKind::Line);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=CANVAS_WIDTH
            height=CANVAS_HEIGHT
            class="w-full h-56"
        />
    }
}

/// Bar chart (funnel, reliability) with an optional series legend
#[component]
pub fn BarChart(
    points: Vec<ChartPoint>,
    #[prop(optional)]
    legend: Option<&'static str>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw(&canvas, &points, ChartKind::Bar);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-56"
            />
            {legend.map(|name| view! {
                <div class="flex justify-center items-center gap-2 mt-2 text-xs text-slate-600">
                    <span class="w-3 h-3 bg-slate-900 inline-block" />
                    <span>{name}</span>
                </div>
            })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Line,
    Bar,
}

/// Drawing area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let (left, right, top, bottom) = (56.0, 16.0, 12.0, 36.0);
        Self {
            left,
            top,
            width: (canvas_width - left - right).max(0.0),
            height: (canvas_height - top - bottom).max(0.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y for `value` on a `0..=max` axis
    fn y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - (value.clamp(0.0, max) / max) * self.height
    }

    /// Center x of slot `index` out of `count` equal slots
    fn slot_center(&self, index: usize, count: usize) -> f64 {
        let slot = self.width / count.max(1) as f64;
        self.left + slot * (index as f64 + 0.5)
    }

    fn slot_width(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }
}

/// Round `value` up to 1, 2 or 5 times a power of ten
fn nice_ceiling(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn axis_max(points: &[ChartPoint]) -> f64 {
    nice_ceiling(points.iter().map(|p| p.value).fold(0.0, f64::max))
}

fn draw(canvas: &HtmlCanvasElement, points: &[ChartPoint], kind: ChartKind) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot = Plot::new(width, height);
    let max = axis_max(points);

    ctx.clear_rect(0.0, 0.0, width, height);
    draw_grid(&ctx, &plot, max);

    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, plot.slot_center(i, points.len()), height - 14.0);
    }

    match kind {
        ChartKind::Line => draw_line(&ctx, &plot, points, max),
        ChartKind::Bar => draw_bars(&ctx, &plot, points, max),
    }
}

fn draw_grid(ctx: &CanvasRenderingContext2d, plot: &Plot, max: f64) {
    let dash = js_sys::Array::of2(&JsValue::from(3.0), &JsValue::from(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("right");

    for i in 0..=Y_TICKS {
        let value = max * i as f64 / Y_TICKS as f64;
        let y = plot.y(value, max);

        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.left + plot.width, y);
        ctx.stroke();

        let _ = ctx.fill_text(&format_metric(Some(value)), plot.left - 6.0, y + 4.0);
    }

    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_line(ctx: &CanvasRenderingContext2d, plot: &Plot, points: &[ChartPoint], max: f64) {
    if points.is_empty() {
        return;
    }

    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = plot.slot_center(i, points.len());
        let y = plot.y(point.value, max);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
}

fn draw_bars(ctx: &CanvasRenderingContext2d, plot: &Plot, points: &[ChartPoint], max: f64) {
    let bar_width = plot.slot_width(points.len()) * 0.6;

    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        let x = plot.slot_center(i, points.len()) - bar_width / 2.0;
        let y = plot.y(point.value, max);
        ctx.fill_rect(x, y, bar_width, plot.bottom() - y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
        assert_eq!(nice_ceiling(3.2), 5.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(1_780_000.0), 2_000_000.0);
        assert_eq!(nice_ceiling(3_000_000.0), 5_000_000.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
    }

    #[test]
    fn test_axis_max_of_empty_series() {
        assert_eq!(axis_max(&[]), 1.0);
    }

    #[test]
    fn test_plot_y_maps_range_to_height() {
        let plot = Plot::new(640.0, 224.0);
        assert_eq!(plot.y(0.0, 100.0), plot.bottom());
        assert_eq!(plot.y(100.0, 100.0), plot.top);
        assert_eq!(plot.y(50.0, 100.0), plot.top + plot.height / 2.0);
        assert_eq!(plot.y(500.0, 100.0), plot.top);
        assert_eq!(plot.y(5.0, 0.0), plot.bottom());
    }

    #[test]
    fn test_slots_split_width_evenly() {
        let plot = Plot::new(640.0, 224.0);
        assert_eq!(plot.slot_width(4), plot.width / 4.0);
        assert_eq!(plot.slot_center(0, 1), plot.left + plot.width / 2.0);
        assert_eq!(plot.slot_center(3, 4), plot.left + plot.width * 7.0 / 8.0);
    }

    #[test]
    fn test_chart_points_from_records() {
        let p = ChartPoint::from(&TimeSeriesPoint::new("Sep 24", 1_450_000.0));
        assert_eq!(p, ChartPoint { label: "Sep 24".into(), value: 1_450_000.0 });

        let p = ChartPoint::from(&FunnelStep::new("save note", 42.0));
        assert_eq!(p.label, "save note");

        let p = ChartPoint::from(&ReliabilitySignal::new("rematch loop", 1.4));
        assert_eq!(p.value, 1.4);
    }
}
