use eframe::egui::{Align2, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

use crate::color::{HIGHLIGHT_FILL, NEON_CYAN, NEON_MAGENTA};
use crate::ui::tables::format_count;
use crate::view::{BarPoint, VisualizationView};

// ---------------------------------------------------------------------------
// Installs bar chart (visualization tab)
// ---------------------------------------------------------------------------

/// Draw the top rows as plasma-coloured bars with the leading rows
/// overlaid in neon cyan, each labelled with its value.
///
/// Bars sit at their rank position; the X axis labels each position with
/// that row's install count.
pub fn installs_bar_chart(ui: &mut Ui, view: &VisualizationView) {
    let base = bars(&view.top, |bar, point| {
        bar.fill(point.color).stroke(Stroke::new(1.5, NEON_MAGENTA))
    });
    let highlight = bars(view.highlighted(), |bar, _| {
        bar.fill(HIGHLIGHT_FILL).stroke(Stroke::new(4.0, NEON_MAGENTA))
    });

    let labels: Vec<i64> = view.top.iter().map(|p| p.installs).collect();

    Plot::new("installs_bar_chart")
        .legend(Legend::default())
        .height(420.0)
        .x_axis_label(view.x_column.clone())
        .y_axis_label(view.y_column.clone())
        .x_axis_formatter(move |mark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                return String::new();
            }
            labels
                .get(pos as usize)
                .map(|n| format_count(*n))
                .unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(base)
                    .name(format!("Top {} by {}", view.top.len(), view.y_column))
                    .color(NEON_MAGENTA),
            );
            plot_ui.bar_chart(
                BarChart::new(highlight)
                    .name("Top 10 neon highlight")
                    .color(NEON_CYAN),
            );
            for (rank, point) in view.top.iter().enumerate() {
                let Some(value) = point.value else {
                    continue;
                };
                let color = if rank < view.highlight_len { NEON_CYAN } else { NEON_MAGENTA };
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(rank as f64, value),
                        RichText::new(point.value_label()).small().color(color),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// One bar per point with a present value, placed at the point's rank.
fn bars(points: &[BarPoint], style: impl Fn(Bar, &BarPoint) -> Bar) -> Vec<Bar> {
    points
        .iter()
        .enumerate()
        .filter_map(|(rank, point)| {
            let value = point.value?;
            let bar = Bar::new(rank as f64, value)
                .width(0.8)
                .name(format!("{} installs", format_count(point.installs)));
            Some(style(bar, point))
        })
        .collect()
}
