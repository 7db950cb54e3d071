//! Main application state and update loop

use std::sync::{Arc, Mutex};

use eframe::egui;

use custodial_relay_adapters::{FullnodeViewAdapter, RelayAdapterConfig, WalletBridgeAdapter};
use custodial_relay_core::{Command, Relay, RelayStatus};

use crate::ui;

type AppRelay = Relay<WalletBridgeAdapter, FullnodeViewAdapter>;

/// The main application state
pub struct App {
    /// Wallet command relay shared with worker threads
    relay: Arc<AppRelay>,
    /// Latest round-trip outcome; last writer wins
    status_slot: Arc<Mutex<Option<RelayStatus>>>,
    /// Rendered status line
    status: Option<RelayStatus>,
    /// Cached connected address (display only)
    self_addr: String,

    // Input fields
    target: String,
    amount: String,
    new_amount: String,
    k_value: String,
}

impl App {
    /// Create a new App instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = RelayAdapterConfig::from_env();
        tracing::info!(
            fullnode = %config.fullnode_base_url,
            bridge = config.wallet_bridge_url.as_deref().unwrap_or("(deterministic)"),
            "relay configured"
        );

        let wallet = WalletBridgeAdapter::with_config(config.clone());
        let fullnode = FullnodeViewAdapter::with_config(config);

        Self {
            relay: Arc::new(Relay::new(wallet, fullnode)),
            status_slot: Arc::new(Mutex::new(None)),
            status: None,
            self_addr: String::new(),
            target: String::new(),
            amount: String::new(),
            new_amount: String::new(),
            k_value: String::new(),
        }
    }

    /// Run one relay operation on a worker thread; the result lands in the
    /// shared status slot. Concurrent operations race independently and
    /// whichever finishes last overwrites the slot.
    fn dispatch<J>(&self, ctx: &egui::Context, job: J)
    where
        J: FnOnce(&AppRelay) -> RelayStatus + Send + 'static,
    {
        let relay = Arc::clone(&self.relay);
        let slot = Arc::clone(&self.status_slot);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let status = job(&relay);
            tracing::debug!(%status, "relay round trip finished");
            let mut guard = slot.lock().unwrap();
            *guard = Some(status);
            ctx.request_repaint();
        });
    }

    fn check_status_slot(&mut self) {
        let arrived = {
            let mut guard = self.status_slot.lock().unwrap();
            guard.take()
        };

        if let Some(status) = arrived {
            if let RelayStatus::Connected(ref address) = status {
                self.self_addr = address.clone();
            }
            self.status = Some(status);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.check_status_slot();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("💱 Custodial Relay")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "v{} {}",
                            env!("CARGO_PKG_VERSION"),
                            env!("GIT_HASH")
                        ))
                        .weak()
                        .small(),
                    );
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(6.0);
            match self.status {
                Some(ref status) => ui::status_line(ui, status),
                None => {
                    ui.label(egui::RichText::new("Ready.").weak());
                }
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_wallet_section(ui, ctx);
                self.render_transfer_section(ui, ctx);
                self.render_admin_section(ui, ctx);
                self.render_balance_section(ui, ctx);
                ui.add_space(20.0);
            });
        });
    }
}

impl App {
    fn render_wallet_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::section_header(ui, "Wallet");

        ui.horizontal(|ui| {
            if ui.button("🔌 Connect").clicked() {
                self.dispatch(ctx, |relay| relay.connect());
            }

            if self.self_addr.is_empty() {
                ui.label(egui::RichText::new("not connected").weak());
            } else {
                ui::copyable_value(ui, &self.self_addr);
            }
        });

        ui.add_space(10.0);
    }

    fn render_transfer_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::section_header(ui, "Transfers");

        egui::Grid::new("transfer_inputs")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Target:");
                ui::address_input(ui, &mut self.target);
                ui.end_row();

                ui.label("Amount:");
                ui::number_input(ui, &mut self.amount, "e.g., 100");
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("⬇ Deposit").clicked() {
                let command = Command::Deposit {
                    target: self.target.clone(),
                    amount: self.amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
            if ui.button("⬆ Withdraw").clicked() {
                let command = Command::Withdraw {
                    amount: self.amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
            if ui.button("➡ Transfer").clicked() {
                let command = Command::Transfer {
                    target: self.target.clone(),
                    amount: self.amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
        });

        ui.add_space(10.0);
    }

    fn render_admin_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::section_header(ui, "Admin");

        egui::Grid::new("admin_inputs")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("New amount:");
                ui::number_input(ui, &mut self.new_amount, "e.g., 0");
                ui.end_row();

                ui.label("Top K:");
                ui::number_input(ui, &mut self.k_value, "e.g., 10");
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Reset One").clicked() {
                let command = Command::AdminResetOne {
                    target: self.target.clone(),
                    new_amount: self.new_amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
            if ui.button("Reset All").clicked() {
                let command = Command::AdminResetAll {
                    new_amount: self.new_amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
            if ui.button("Reset Top-K").clicked() {
                let command = Command::AdminResetTopK {
                    k: self.k_value.clone(),
                    new_amount: self.new_amount.clone(),
                };
                self.dispatch(ctx, move |relay| relay.invoke(&command));
            }
        });

        ui.add_space(10.0);
    }

    fn render_balance_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::section_header(ui, "Balance");
        ui.label(
            egui::RichText::new("Read-only view against the full node for the target address.")
                .weak(),
        );
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui.button("🔍 View Balance").clicked() {
                let address = self.target.clone();
                self.dispatch(ctx, move |relay| relay.query_balance(&address));
            }
        });

        if let Some(RelayStatus::Submitted(ref hash)) = self.status {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Last submission:").strong());
                ui::copyable_value(ui, hash);
                if ui.small_button("🌐").on_hover_text("Open in explorer").clicked() {
                    ui::open_url_new_tab(&ui::explorer_txn_url(hash));
                }
            });
        }
    }
}
