use {
    crate::{
        app::App,
        ui::{
            styles::{UiStyleExt, change_color},
            theme::Theme,
        },
        utils::format::{format_currency, format_pct, format_signed_pct},
    },
    eframe::egui::{Align, Layout, RichText, Ui},
};

struct MetricCard {
    title: &'static str,
    icon: &'static str,
    value: String,
    change: String,
    change_pct: f64,
}

impl App {
    /// Four headline cards across the top of the dashboard.
    pub(crate) fn render_summary_cards(&mut self, ui: &mut Ui) {
        let theme = Theme::of(self.dark_mode);
        let summary = &self.model.summary;

        let cards = [
            MetricCard {
                title: "Total Portfolio Value",
                icon: "💼",
                value: format_currency(summary.total_value),
                change: format_currency(summary.daily_change),
                change_pct: summary.daily_change_pct,
            },
            MetricCard {
                title: "Daily Change",
                icon: "🕒",
                value: format_currency(summary.daily_change),
                change: format_signed_pct(summary.daily_change_pct),
                change_pct: summary.daily_change_pct,
            },
            MetricCard {
                title: "Weekly Change",
                icon: "📈",
                value: format_currency(summary.weekly_change),
                change: format_signed_pct(summary.weekly_change_pct),
                change_pct: summary.weekly_change_pct,
            },
            MetricCard {
                title: "Total Profit/Loss",
                icon: "🏦",
                value: format_currency(summary.total_profit),
                change: format_signed_pct(summary.total_profit_pct),
                change_pct: summary.total_profit_pct,
            },
        ];

        ui.columns(cards.len(), |cols| {
            for (col, card) in cols.iter_mut().zip(&cards) {
                metric_card(col, card, theme);
            }
        });
    }
}

fn metric_card(ui: &mut Ui, card: &MetricCard, theme: &Theme) {
    theme.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label_muted(card.title, theme);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(card.icon).color(theme.text_faint));
            });
        });
        ui.add_space(4.0);
        ui.label(
            RichText::new(&card.value)
                .size(22.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(2.0);

        let color = change_color(card.change_pct, theme);
        let arrow = if card.change_pct >= 0.0 { "▲" } else { "▼" };
        ui.label(
            RichText::new(format!(
                "{} {} ({})",
                arrow,
                card.change,
                format_pct(card.change_pct.abs())
            ))
            .small()
            .color(color),
        );
    });
}
