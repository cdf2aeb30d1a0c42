use {
    crate::{
        app::App,
        domain::HistoricalPoint,
        models::Strategy,
        ui::{styles::apply_opacity, theme::Theme},
        utils::format::{format_compact, format_dollars, long_date, short_date},
    },
    chrono::NaiveDate,
    eframe::egui::{
        Align, Color32, ComboBox, Id, LayerId, Layout, Order::Tooltip, RichText, Stroke, Ui, Vec2b,
    },
    egui_plot::{
        Axis, AxisHints, GridInput, GridMark, HPlacement, Line, Plot, PlotPoints, PlotUi, Points,
        Polygon, VPlacement,
    },
    strum::IntoEnumIterator,
};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

/// Bar fill for the single-stock chart.
const BAR_COLOR: Color32 = Color32::from_rgb(14, 165, 233);

impl App {
    /// Area chart of the selected strategy's month of history, with the
    /// strategy dropdown in the card header.
    pub(crate) fn render_performance_card(&mut self, ui: &mut Ui) {
        let theme = Theme::of(self.dark_mode);

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Portfolio Performance")
                        .size(15.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ComboBox::from_id_salt("strategy_selector")
                        .selected_text(self.selected_strategy.to_string())
                        .width(180.0)
                        .show_ui(ui, |ui| {
                            for strategy in Strategy::iter() {
                                ui.selectable_value(
                                    &mut self.selected_strategy,
                                    strategy,
                                    strategy.to_string(),
                                );
                            }
                        });
                });
            });
            ui.add_space(8.0);

            let history = self.model.strategy_history(self.selected_strategy);
            area_plot(ui, "performance_plot", history, theme);
        });
    }

    /// Bar chart of one holding's price history.
    pub(crate) fn render_symbol_card(&mut self, ui: &mut Ui) {
        let theme = Theme::of(self.dark_mode);

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Apple Inc. (AAPL)")
                    .size(15.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);
            bar_plot(ui, "aapl_plot", self.model.symbol_history("AAPL"), theme);
        });
    }
}

fn area_plot(ui: &mut Ui, id: &str, history: &[HistoricalPoint], theme: &Theme) {
    let Some(y_max) = max_value(history) else {
        ui.label("No data.");
        return;
    };
    let last_idx = (history.len() - 1) as f64;

    let series: Vec<[f64; 2]> = history
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.value])
        .collect();

    let accent = theme.accent;
    let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
    let tooltip_points = history.to_vec();
    let theme_copy = *theme;

    base_plot(id, dates)
        .height(260.0)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=last_idx);
            plot_ui.set_plot_bounds_y(0.0..=y_max * 1.06);

            // Fill to the baseline one trapezoid per segment, so each
            // polygon stays convex.
            let fill = apply_opacity(accent, 0.25);
            for pair in series.windows(2) {
                let [x0, y0] = pair[0];
                let [x1, y1] = pair[1];
                plot_ui.polygon(
                    Polygon::new(
                        "",
                        PlotPoints::new(vec![[x0, 0.0], [x1, 0.0], [x1, y1], [x0, y0]]),
                    )
                    .fill_color(fill)
                    .stroke(Stroke::NONE),
                );
            }
            plot_ui.line(
                Line::new("", PlotPoints::new(series))
                    .color(accent)
                    .width(2.0),
            );

            if let Some(idx) = hovered_index(plot_ui, tooltip_points.len()) {
                let point = &tooltip_points[idx];
                plot_ui.points(
                    Points::new("", PlotPoints::new(vec![[idx as f64, point.value]]))
                        .radius(4.0)
                        .color(accent),
                );
                point_tooltip(plot_ui, id, point, &theme_copy);
            }
        });
}

fn bar_plot(ui: &mut Ui, id: &str, history: &[HistoricalPoint], theme: &Theme) {
    let Some(y_max) = max_value(history) else {
        ui.label("No data.");
        return;
    };
    let last_idx = (history.len() - 1) as f64;

    let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
    let tooltip_points = history.to_vec();
    let theme_copy = *theme;

    base_plot(id, dates)
        .height(220.0)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-0.6..=last_idx + 0.6);
            plot_ui.set_plot_bounds_y(0.0..=y_max * 1.06);

            let hovered = hovered_index(plot_ui, tooltip_points.len());
            let half = 0.32;
            for (i, point) in tooltip_points.iter().enumerate() {
                let x = i as f64;
                let fill = if hovered == Some(i) {
                    BAR_COLOR
                } else {
                    apply_opacity(BAR_COLOR, 0.8)
                };
                plot_ui.polygon(
                    Polygon::new(
                        "",
                        PlotPoints::new(vec![
                            [x - half, 0.0],
                            [x + half, 0.0],
                            [x + half, point.value],
                            [x - half, point.value],
                        ]),
                    )
                    .fill_color(fill)
                    .stroke(Stroke::NONE),
                );
            }

            if let Some(idx) = hovered {
                point_tooltip(plot_ui, id, &tooltip_points[idx], &theme_copy);
            }
        });
}

/// Shared plot scaffolding: date ticks along the bottom, compact dollar
/// ticks on the left, all interaction off.
fn base_plot(id: &str, dates: Vec<NaiveDate>) -> Plot<'static> {
    let x_axis = AxisHints::new(Axis::X)
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.01 || idx < 0.0 {
                return String::new();
            }
            dates
                .get(idx as usize)
                .map(|d| short_date(*d))
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom);

    let y_axis = AxisHints::new_y()
        .formatter(|mark, _range| format_compact(mark.value))
        .placement(HPlacement::Left);

    Plot::new(id.to_owned())
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(index_marks)
        .show_grid(Vec2b { x: false, y: true })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
}

fn index_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = nice_step(max - min, 8.0);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    let mut marks = Vec::new();
    for i in start..=end {
        marks.push(GridMark {
            value: i as f64 * step,
            step_size: step,
        });
    }
    marks
}

// Snap a raw step to a human-friendly size (1, 2, 5, 10, 20, 50...)
fn nice_step(range: f64, target_count: f64) -> f64 {
    let raw = range / target_count.max(1.0);
    let mag = 10.0_f64.powi(raw.log10().floor() as i32);
    let normalized = raw / mag;
    let snapped = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    (snapped * mag).max(1.0)
}

fn max_value(history: &[HistoricalPoint]) -> Option<f64> {
    history
        .iter()
        .map(|p| p.value)
        .max_by(|a, b| a.total_cmp(b))
}

fn hovered_index(plot_ui: &PlotUi, len: usize) -> Option<usize> {
    let pointer = plot_ui.pointer_coordinate()?;
    let idx = pointer.x.round();
    if idx < 0.0 || idx > (len.saturating_sub(1)) as f64 {
        return None;
    }
    Some(idx as usize)
}

fn point_tooltip(plot_ui: &PlotUi, id: &str, point: &HistoricalPoint, theme: &Theme) {
    let layer = LayerId::new(Tooltip, Id::new("chart_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        layer,
        Id::new(id.to_owned()).with("tooltip"),
        |ui: &mut Ui| {
            ui.label(
                RichText::new(long_date(point.date))
                    .small()
                    .color(theme.text_muted),
            );
            ui.label(
                RichText::new(format_dollars(point.value))
                    .strong()
                    .color(theme.positive),
            );
        },
    );
}
