use {
    crate::{
        app::App,
        models::AssetAllocationSlice,
        ui::{styles::apply_opacity, theme::Theme},
    },
    eframe::egui::{
        Color32, Id, LayerId, Order::Tooltip, Pos2, Response, RichText, Sense, Shape, Stroke, Ui,
        Vec2,
    },
    std::f32::consts::{FRAC_PI_2, TAU},
};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

const GAP_ANGLE: f32 = 0.035;

impl App {
    /// Donut of sector weights with a legend down the right side.
    pub(crate) fn render_allocation_card(&mut self, ui: &mut Ui) {
        let theme = Theme::of(self.dark_mode);

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Asset Allocation")
                    .size(15.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                donut(ui, &self.model.allocation, theme);
                ui.add_space(8.0);
                legend(ui, &self.model.allocation, theme);
            });
        });
    }
}

fn donut(ui: &mut Ui, slices: &[AssetAllocationSlice], theme: &Theme) {
    let size = 210.0;
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let total: f64 = slices.iter().map(|s| s.weight_pct).sum();
    if !ui.is_rect_visible(rect) || total <= 0.0 {
        return;
    }

    let center = rect.center();
    let outer_r = size * 0.40;
    let inner_r = size * 0.28;

    let sweeps: Vec<f32> = slices
        .iter()
        .map(|s| (s.weight_pct / total) as f32 * TAU)
        .collect();
    let hovered = hovered_slice(&response, center, inner_r, outer_r + 4.0, &sweeps);

    // Wedges run clockwise from 12 o'clock.
    let mut start = -FRAC_PI_2;
    for (idx, (slice, sweep)) in slices.iter().zip(&sweeps).enumerate() {
        let (color, radius) = if hovered == Some(idx) {
            (slice.color, outer_r + 4.0)
        } else {
            (apply_opacity(slice.color, 0.85), outer_r)
        };
        paint_ring_segment(
            ui,
            center,
            inner_r,
            radius,
            start + GAP_ANGLE / 2.0,
            start + sweep - GAP_ANGLE / 2.0,
            color,
        );
        start += sweep;
    }

    if let Some(idx) = hovered {
        let slice = &slices[idx];
        let layer = LayerId::new(Tooltip, Id::new("chart_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            ui.ctx(),
            layer,
            Id::new("allocation_tooltip"),
            |ui: &mut Ui| {
                ui.label(RichText::new(slice.sector).strong().color(slice.color));
                ui.label(
                    RichText::new(format!("{}%", slice.weight_pct))
                        .small()
                        .color(theme.text_muted),
                );
            },
        );
    }
}

fn hovered_slice(
    response: &Response,
    center: Pos2,
    inner_r: f32,
    outer_r: f32,
    sweeps: &[f32],
) -> Option<usize> {
    let pos = response.hover_pos()?;
    let offset = pos - center;
    let dist = offset.length();
    if dist < inner_r || dist > outer_r {
        return None;
    }

    // Normalize into [-PI/2, 3PI/2) so it lines up with the wedge walk.
    let mut angle = offset.y.atan2(offset.x);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }

    let mut start = -FRAC_PI_2;
    for (idx, sweep) in sweeps.iter().enumerate() {
        if angle < start + sweep {
            return Some(idx);
        }
        start += sweep;
    }
    None
}

/// Ring segments are built from short convex quads so the painter never
/// sees a concave shape.
fn paint_ring_segment(
    ui: &Ui,
    center: Pos2,
    inner_r: f32,
    outer_r: f32,
    a0: f32,
    a1: f32,
    color: Color32,
) {
    if a1 <= a0 {
        return;
    }
    let steps = (((a1 - a0) / 0.05).ceil() as usize).max(2);
    let step = (a1 - a0) / steps as f32;
    for i in 0..steps {
        let t0 = a0 + step * i as f32;
        let t1 = t0 + step;
        let points = vec![
            center + Vec2::angled(t0) * inner_r,
            center + Vec2::angled(t0) * outer_r,
            center + Vec2::angled(t1) * outer_r,
            center + Vec2::angled(t1) * inner_r,
        ];
        ui.painter()
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }
}

fn legend(ui: &mut Ui, slices: &[AssetAllocationSlice], theme: &Theme) {
    ui.vertical(|ui| {
        ui.add_space(24.0);
        for slice in slices {
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, slice.color);
                ui.label(
                    RichText::new(slice.sector)
                        .small()
                        .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(format!("{}%", slice.weight_pct))
                        .small()
                        .color(theme.text_muted),
                );
            });
        }
    });
}
