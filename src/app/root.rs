use {
    crate::{
        Cli,
        config::{DF, constants::FRAME_BUDGET_MICROS},
        data,
        models::{DashboardModel, Strategy, WatchlistTab},
        ui::{Theme, apply_visuals},
    },
    eframe::egui::{CentralPanel, Context, Key, RichText, ScrollArea, TopBottomPanel},
    serde::{Deserialize, Serialize},
    std::time::Instant,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// The one preference that survives restarts.
    pub(crate) dark_mode: bool,

    #[serde(skip)]
    pub(crate) model: DashboardModel,
    #[serde(skip)]
    pub(crate) selected_strategy: Strategy,
    #[serde(skip)]
    pub(crate) watchlist_tab: WatchlistTab,
}

impl Default for App {
    fn default() -> Self {
        Self {
            dark_mode: true,
            model: DashboardModel::default(),
            selected_strategy: Strategy::default(),
            watchlist_tab: WatchlistTab::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if args.light {
            app.dark_mode = false;
        }

        app.model = data::generate_dashboard(&mut rand::rng());
        apply_visuals(&cc.egui_ctx, app.dark_mode);

        log::info!(
            "Dashboard ready: {} holdings, {} trending, {} news items",
            app.model.holdings.len(),
            app.model.trending.len(),
            app.model.news.len()
        );

        app
    }

    pub(crate) fn toggle_dark_mode(&mut self, ctx: &Context) {
        self.dark_mode = !self.dark_mode;
        apply_visuals(ctx, self.dark_mode);

        if DF.log_shortcuts {
            log::debug!(
                "🎨 Color scheme switched to {}",
                if self.dark_mode { "dark" } else { "light" }
            );
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a text box, don't trigger global hotkeys.
            return;
        }

        // Act outside the input lock so the toggle can touch the Context.
        let toggle_theme = ctx.input(|i| i.key_pressed(Key::T));
        if toggle_theme {
            self.toggle_dark_mode(ctx);
        }
    }

    pub(crate) fn render_footer(&mut self, ctx: &Context) {
        let theme = Theme::of(self.dark_mode);

        TopBottomPanel::bottom("footer")
            .frame(theme.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(
                            "© 2023 QuantumFinance. All data is simulated and for demonstration purposes only.",
                        )
                        .small()
                        .color(theme.text_muted),
                    );
                });
            });
    }

    fn render_dashboard(&mut self, ctx: &Context) {
        let theme = Theme::of(self.dark_mode);

        CentralPanel::default()
            .frame(theme.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .id_salt("dashboard_body")
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Financial Dashboard")
                                .size(26.0)
                                .strong()
                                .color(theme.accent),
                        );
                        ui.label(
                            RichText::new(
                                "Track your investments, monitor market trends, and stay updated with the latest financial news.",
                            )
                            .color(theme.text_muted),
                        );
                        ui.add_space(16.0);

                        self.render_summary_cards(ui);
                        ui.add_space(16.0);
                        self.render_performance_card(ui);
                        ui.add_space(16.0);
                        ui.columns(2, |cols| {
                            self.render_symbol_card(&mut cols[0]);
                            self.render_allocation_card(&mut cols[1]);
                        });
                        ui.add_space(16.0);
                        self.render_news_card(ui);
                    });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let start = Instant::now();

        self.handle_global_shortcuts(ctx);
        self.render_navbar(ctx);
        self.render_footer(ctx);
        self.render_watchlist(ctx);
        self.render_dashboard(ctx);

        let frame_time = start.elapsed().as_micros();
        if frame_time > FRAME_BUDGET_MICROS {
            if DF.log_performance {
                log::warn!("🐢 SLOW FRAME: {}us", frame_time);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if DF.log_persistence {
            log::debug!("💾 Saving preferences: dark_mode = {}", self.dark_mode);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
