use {
    crate::{
        app::App,
        models::{NewsImpact, NewsItem},
        ui::{
            styles::{ImpactColor, UiStyleExt},
            theme::Theme,
        },
    },
    eframe::egui::{CornerRadius, Frame, Margin, RichText, Stroke, Ui},
};

impl App {
    pub(crate) fn render_news_card(&mut self, ui: &mut Ui) {
        let theme = Theme::of(self.dark_mode);

        theme.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Financial News")
                    .size(15.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);
            for item in &self.model.news {
                news_row(ui, item, theme);
                ui.add_space(8.0);
            }
            ui.vertical_centered(|ui| {
                ui.label_faint("View all news", theme);
            });
        });
    }
}

fn news_row(ui: &mut Ui, item: &NewsItem, theme: &Theme) {
    let inner = Frame {
        fill: theme.background,
        stroke: Stroke::new(1.0, theme.border),
        corner_radius: CornerRadius::same(6),
        inner_margin: Margin::same(10),
        ..Default::default()
    };

    inner.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(item.title).strong().color(theme.text_primary));
        ui.horizontal(|ui| {
            ui.label(RichText::new(item.source).small().color(theme.text_primary));
            ui.label_faint("•", theme);
            ui.label_muted(item.published, theme);
        });
        ui.add_space(4.0);
        ui.label(RichText::new(item.summary).small().color(theme.text_muted));
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(impact_word(item.impact))
                    .small()
                    .color(item.impact.color(theme)),
            );
            for &symbol in item.related {
                ui.pill(symbol, theme.accent);
            }
        });
    });
}

fn impact_word(impact: NewsImpact) -> &'static str {
    match impact {
        NewsImpact::Positive => "Bullish",
        NewsImpact::Negative => "Bearish",
        NewsImpact::Neutral => "Neutral",
    }
}
