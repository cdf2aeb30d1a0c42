use {
    crate::{
        app::App,
        models::{StockQuote, WatchlistTab},
        ui::{
            styles::{UiStyleExt, change_color},
            theme::Theme,
        },
        utils::format::{format_compact, format_count, format_currency, format_pct},
    },
    eframe::egui::{Align, Context, Layout, RichText, ScrollArea, SidePanel, Ui},
};

impl App {
    pub(crate) fn render_watchlist(&mut self, ctx: &Context) {
        let theme = Theme::of(self.dark_mode);

        SidePanel::right("watchlist")
            .frame(theme.side_panel_frame())
            .min_width(320.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Watchlist")
                            .size(15.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Right-to-left, so push Trending first.
                        for tab in [WatchlistTab::Trending, WatchlistTab::Portfolio] {
                            let selected = self.watchlist_tab == tab;
                            if ui.tab_label(&tab.to_string(), selected, theme).clicked() {
                                self.watchlist_tab = tab;
                            }
                        }
                    });
                });
                ui.separator();
                ui.add_space(4.0);

                let tab = self.watchlist_tab;
                ScrollArea::vertical()
                    .max_height(380.0)
                    .id_salt("watchlist_rows")
                    .show(ui, |ui| {
                        if tab == WatchlistTab::Trending {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("⭐").small().color(theme.accent));
                                ui.label_muted("Top movers today", theme);
                            });
                            ui.add_space(4.0);
                        }
                        let show_holdings = tab == WatchlistTab::Portfolio;
                        for quote in self.model.quotes(tab) {
                            quote_row(ui, quote, show_holdings, theme);
                        }
                    });

                ui.add_space(4.0);
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label_faint("View all stocks", theme);
                });
            });
    }
}

fn quote_row(ui: &mut Ui, quote: &StockQuote, show_holdings: bool, theme: &Theme) {
    let response = ui
        .horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(quote.symbol)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label_faint(quote.name, theme);
                });
                if show_holdings {
                    if let Some(position) = &quote.position {
                        ui.label_muted(
                            format!("Holdings: {}", format_currency(position.value)),
                            theme,
                        );
                    }
                }
            });

            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                ui.label(
                    RichText::new(format_currency(quote.price)).color(theme.text_primary),
                );
                let color = change_color(quote.change_pct, theme);
                let arrow = if quote.is_gaining() { "▲" } else { "▼" };
                ui.label(
                    RichText::new(format!(
                        "{} {:.2} ({})",
                        arrow,
                        quote.change,
                        format_pct(quote.change_pct.abs())
                    ))
                    .small()
                    .color(color),
                );
            });
        })
        .response;

    response.on_hover_ui(|ui| {
        ui.label(RichText::new(quote.name).strong());
        ui.label(format!(
            "Vol {} · Mkt Cap {}",
            format_count(quote.volume),
            format_compact(quote.market_cap)
        ));
        if let Some(position) = &quote.position {
            ui.label(format!("{} shares", position.shares));
        }
    });

    ui.add_space(6.0);
}
