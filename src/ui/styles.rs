use {
    crate::{models::NewsImpact, ui::theme::Theme},
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// Gain/loss color for a signed change. Zero counts as a gain.
pub fn change_color(value: f64, theme: &Theme) -> Color32 {
    if value >= 0.0 { theme.positive } else { theme.negative }
}

pub trait ImpactColor {
    fn color(&self, theme: &Theme) -> Color32;
}

impl ImpactColor for NewsImpact {
    fn color(&self, theme: &Theme) -> Color32 {
        match self {
            Self::Positive => theme.positive,
            Self::Negative => theme.negative,
            Self::Neutral => theme.text_muted,
        }
    }
}

pub(crate) trait UiStyleExt {
    /// Label acting as a tab button: transparent when idle, tinted bg on hover,
    /// accent text when selected.
    fn tab_label(&mut self, text: &str, is_selected: bool, theme: &Theme) -> Response;

    /// Rounded badge with a translucent fill derived from its text color.
    fn pill(&mut self, text: &str, color: Color32);

    fn label_muted(&mut self, text: impl Into<String>, theme: &Theme);
    fn label_faint(&mut self, text: impl Into<String>, theme: &Theme);
}

impl UiStyleExt for Ui {
    fn tab_label(&mut self, text: &str, is_selected: bool, theme: &Theme) -> Response {
        let padding = Vec2::new(10.0, 5.0);
        let galley = self.painter().layout_no_wrap(
            text.to_string(),
            FontId::proportional(13.0),
            theme.text_muted,
        );
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let (bg_fill, text_color) = if is_selected {
                (apply_opacity(theme.accent, 0.2), theme.accent)
            } else if response.hovered() || response.has_focus() {
                (apply_opacity(theme.border, 0.6), theme.text_primary)
            } else {
                (Color32::TRANSPARENT, theme.text_muted)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            self.painter()
                .galley(rect.left_top() + padding, galley, text_color);
        }
        response
    }

    fn pill(&mut self, text: &str, color: Color32) {
        let padding = Vec2::new(7.0, 2.0);
        let galley =
            self.painter()
                .layout_no_wrap(text.to_string(), FontId::proportional(10.0), color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, _response) = self.allocate_exact_size(desired_size, Sense::hover());

        if self.is_rect_visible(rect) {
            self.painter().rect(
                rect,
                CornerRadius::same(9),
                apply_opacity(color, 0.15),
                Stroke::NONE,
                StrokeKind::Inside,
            );
            self.painter()
                .galley(rect.left_top() + padding, galley, color);
        }
    }

    fn label_muted(&mut self, text: impl Into<String>, theme: &Theme) {
        self.label(RichText::new(text).small().color(theme.text_muted));
    }

    fn label_faint(&mut self, text: impl Into<String>, theme: &Theme) {
        self.label(RichText::new(text).small().color(theme.text_faint));
    }
}
