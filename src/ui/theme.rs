use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, Stroke, Visuals};

/// Palette for one color scheme. Both schemes share the accent and
/// gain/loss colors so charts read the same either way.
#[derive(Clone, Copy)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_faint: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
}

pub static DARK: Theme = Theme {
    background: Color32::from_rgb(17, 24, 39),
    panel: Color32::from_rgb(31, 41, 55),
    card: Color32::from_rgb(31, 41, 55),
    border: Color32::from_rgb(55, 65, 81),
    text_primary: Color32::from_rgb(249, 250, 251),
    text_muted: Color32::from_rgb(156, 163, 175),
    text_faint: Color32::from_rgb(107, 114, 128),
    accent: Color32::from_rgb(139, 92, 246),
    positive: Color32::from_rgb(16, 185, 129),
    negative: Color32::from_rgb(239, 68, 68),
};

pub static LIGHT: Theme = Theme {
    background: Color32::from_rgb(243, 244, 246),
    panel: Color32::WHITE,
    card: Color32::WHITE,
    border: Color32::from_rgb(229, 231, 235),
    text_primary: Color32::from_rgb(17, 24, 39),
    text_muted: Color32::from_rgb(107, 114, 128),
    text_faint: Color32::from_rgb(156, 163, 175),
    accent: Color32::from_rgb(139, 92, 246),
    positive: Color32::from_rgb(16, 185, 129),
    negative: Color32::from_rgb(239, 68, 68),
};

impl Theme {
    pub fn of(dark: bool) -> &'static Theme {
        if dark { &DARK } else { &LIGHT }
    }

    /// Frame for the navbar (standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Frame for the footer (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 6),
            ..Default::default()
        }
    }

    /// Frame for the watchlist panel
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the scrolling dashboard body
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Bordered card, the building block of every dashboard section
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.card,
            stroke: Stroke::new(1.0, self.border),
            corner_radius: CornerRadius::same(6),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}

pub fn apply_visuals(ctx: &Context, dark: bool) {
    let theme = Theme::of(dark);
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    visuals.window_fill = theme.card;
    visuals.panel_fill = theme.background;
    visuals.extreme_bg_color = theme.background;
    visuals.faint_bg_color = theme.card;
    visuals.window_stroke = Stroke::new(1.0, theme.border);
    visuals.widgets.noninteractive.bg_stroke.color = theme.border;
    visuals.widgets.noninteractive.fg_stroke.color = theme.text_muted;
    visuals.widgets.inactive.fg_stroke.color = theme.text_primary;
    visuals.widgets.inactive.bg_fill = theme.card;
    visuals.widgets.inactive.weak_bg_fill = theme.card;
    visuals.widgets.hovered.fg_stroke.color = theme.text_primary;
    visuals.widgets.hovered.weak_bg_fill = theme.border;
    visuals.widgets.active.fg_stroke.color = theme.text_primary;
    visuals.selection.bg_fill = theme.accent;
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
