use {
    crate::{
        app::App,
        ui::{styles::UiStyleExt, theme::Theme},
    },
    eframe::egui::{Align, Context, Layout, RichText, TopBottomPanel},
};

/// Static screens. Only the dashboard view exists, so every item past the
/// first is decoration.
const NAV_ITEMS: &[&str] = &["Dashboard", "Portfolio", "Markets", "News"];

impl App {
    pub(crate) fn render_navbar(&mut self, ctx: &Context) {
        let theme = Theme::of(self.dark_mode);

        TopBottomPanel::top("navbar")
            .frame(theme.top_panel_frame())
            .min_height(44.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(
                            RichText::new("Quantum")
                                .size(18.0)
                                .strong()
                                .color(theme.accent),
                        );
                        ui.label(RichText::new("Finance").size(18.0).color(theme.text_primary));
                    });

                    ui.add_space(24.0);

                    for (idx, label) in NAV_ITEMS.iter().enumerate() {
                        let _ = ui.tab_label(label, idx == 0, theme);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let icon = if self.dark_mode { "☀" } else { "🌙" };
                        if ui
                            .button(icon)
                            .on_hover_text("Toggle color scheme (T)")
                            .clicked()
                        {
                            self.toggle_dark_mode(ctx);
                        }
                        ui.label(RichText::new("🔔").color(theme.text_muted));
                        ui.label(RichText::new("🔍").color(theme.text_muted));
                    });
                });
            });
    }
}
