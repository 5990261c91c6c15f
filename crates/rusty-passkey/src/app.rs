//! Main application state and update loop

use eframe::egui;

use rusty_passkey_wallet_core::{explorer_tx_url, short_address, Cluster};
use rusty_passkey_wallet_adapters::WalletAdapterConfig;

use crate::bridge::{take_mailbox, WalletBridge};
use crate::state::{SignMessageState, TransferMode, TransferState};
use crate::ui;

/// The main application state
pub struct App {
    bridge: WalletBridge,
    sign_state: SignMessageState,
    transfer_state: TransferState,
}

impl App {
    /// Create a new App instance against the fixed devnet deployment.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bridge = WalletBridge::new(WalletAdapterConfig::default())?;
        Ok(Self {
            bridge,
            sign_state: SignMessageState::default(),
            transfer_state: TransferState::default(),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Drain flow results posted by background threads
        self.check_connect_result();
        self.check_disconnect_result();
        self.check_sign_result();
        self.check_send_result();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui::styled_heading(ui, "🔐 Rusty-Passkey");
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Passkeys + gasless transactions demo (devnet defaults)")
                        .weak(),
                );
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_connection_panel(ui, ctx);

                // The one shared status line, shown once above the action panels.
                if let Some(status) = self.bridge.status_message() {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(status).weak());
                }

                self.render_sign_panel(ui, ctx);
                self.render_transfer_panel(ui, ctx);
                ui.add_space(20.0);
            });
        });
    }
}

impl App {
    fn check_connect_result(&mut self) {
        if let Some(result) = take_mailbox(&self.bridge.connect_result) {
            match result {
                // The wallet record and any error live on the provider
                // snapshot; nothing else to store here.
                Ok(account) => tracing::info!(account = %account.account_name, "connected"),
                Err(e) => tracing::warn!(error = %e, "connect failed"),
            }
        }
    }

    fn check_disconnect_result(&mut self) {
        if let Some(result) = take_mailbox(&self.bridge.disconnect_result) {
            if let Err(e) = result {
                tracing::warn!(error = %e, "disconnect failed");
            }
        }
    }

    fn check_sign_result(&mut self) {
        if let Some(result) = take_mailbox(&self.bridge.sign_result) {
            match result {
                Ok(signed) => {
                    self.sign_state.signed = Some(signed);
                    self.sign_state.error = None;
                }
                Err(e) => self.sign_state.error = Some(e),
            }
        }
    }

    fn check_send_result(&mut self) {
        if let Some(result) = take_mailbox(&self.bridge.send_result) {
            match result {
                Ok(signature) => {
                    self.transfer_state.tx_signature = Some(signature);
                    self.transfer_state.error = None;
                }
                Err(e) => self.transfer_state.error = Some(e),
            }
        }
    }

    fn render_connection_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let snapshot = self.bridge.snapshot();

        ui::section_header(ui, "Wallet");
        ui::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Status:").strong());
                ui.label(snapshot.connection_status().label());
                if snapshot.is_loading {
                    ui.spinner();
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui::primary_button_enabled(ui, "Connect with Passkey", snapshot.can_connect())
                    .clicked()
                {
                    self.bridge.spawn_connect(ctx);
                }
                if ui::secondary_button_enabled(ui, "Disconnect", snapshot.can_disconnect())
                    .clicked()
                {
                    self.bridge.spawn_disconnect(ctx);
                }
            });

            if let Some(wallet) = &snapshot.wallet {
                ui.add_space(8.0);
                egui::Grid::new("wallet_details")
                    .num_columns(2)
                    .spacing([10.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Account name:");
                        ui.label(egui::RichText::new(&wallet.account_name).strong());
                        ui.end_row();

                        ui.label("Smart wallet:");
                        let address = wallet.smart_wallet.to_string();
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(short_address(&address)).monospace(),
                            );
                            if ui
                                .small_button("📋")
                                .on_hover_text("Copy full address")
                                .clicked()
                            {
                                ui::copy_to_clipboard(&address);
                            }
                        });
                        ui.end_row();
                    });
            }

            // Connection errors persist here until the next successful connect.
            if let Some(error) = &snapshot.error {
                ui.add_space(8.0);
                ui::error_message(ui, error);
            }
        });
    }

    fn render_sign_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let snapshot = self.bridge.snapshot();

        ui::section_header(ui, "Sign message with passkey");
        ui::card(ui, |ui| {
            ui.label(
                egui::RichText::new(
                    "Uses the portal dialog to sign a message via WebAuthn/passkeys.",
                )
                .weak(),
            );
            ui.add_space(6.0);

            ui::multiline_input(ui, &mut self.sign_state.message, "Message to sign", 3);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let can_sign = snapshot.can_sign(&self.sign_state.message);
                if ui::primary_button_enabled(ui, "Sign message", can_sign).clicked() {
                    self.sign_state.clear_results();
                    self.bridge.spawn_sign(ctx, self.sign_state.message.clone());
                }
                if snapshot.is_signing {
                    ui.label(egui::RichText::new("Signing…").weak().small());
                }
            });

            if let Some(signed) = &self.sign_state.signed {
                ui.add_space(8.0);
                ui::copyable_value(ui, "Signature", &signed.signature);
                ui::copyable_value(ui, "Signed payload", &signed.signed_payload);
            }

            if let Some(error) = &self.sign_state.error {
                ui.add_space(8.0);
                ui::error_message(ui, error);
            }
        });
    }

    fn render_transfer_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let snapshot = self.bridge.snapshot();

        ui::section_header(ui, "Send gasless transaction");
        ui::card(ui, |ui| {
            ui.label(
                egui::RichText::new(
                    "Builds a transfer instruction and asks the portal to sign and submit it. \
                     The paymaster pays the fee.",
                )
                .weak(),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.transfer_state.mode,
                    TransferMode::Parameterized,
                    "Custom transfer",
                );
                ui.selectable_value(
                    &mut self.transfer_state.mode,
                    TransferMode::FixedDemo,
                    "Self-transfer demo",
                );
            });
            ui.add_space(6.0);

            if self.transfer_state.mode == TransferMode::Parameterized {
                egui::Grid::new("transfer_inputs")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Recipient:");
                        ui::address_input(
                            ui,
                            &mut self.transfer_state.recipient,
                            "Recipient public key",
                        );
                        ui.end_row();

                        ui.label("Amount:");
                        ui::number_input(ui, &mut self.transfer_state.amount, "lamports, e.g. 1");
                        ui.end_row();
                    });
                ui.add_space(6.0);
            } else {
                ui.label(
                    egui::RichText::new(
                        "Sends 0 lamports from the smart wallet to itself, exercising the \
                         full authorization path without funds risk.",
                    )
                    .weak()
                    .small(),
                );
                ui.add_space(6.0);
            }

            ui.horizontal(|ui| {
                if ui::primary_button_enabled(ui, "Send gasless tx", snapshot.can_send()).clicked()
                {
                    self.transfer_state.clear_results();
                    match self.transfer_state.mode {
                        TransferMode::Parameterized => self.bridge.spawn_send(
                            ctx,
                            self.transfer_state.recipient.clone(),
                            self.transfer_state.amount.clone(),
                        ),
                        TransferMode::FixedDemo => self.bridge.spawn_send_demo(ctx),
                    }
                }
                if snapshot.is_signing {
                    ui.label(egui::RichText::new("Signing…").weak().small());
                }
            });

            if let Some(signature) = &self.transfer_state.tx_signature {
                ui.add_space(8.0);
                ui::copyable_value(ui, "Signature", signature);
                let url = explorer_tx_url(Cluster::Devnet, signature);
                if ui.link("View on Solana Explorer (devnet)").clicked() {
                    ui::open_url_new_tab(&url);
                }
            }

            if let Some(error) = &self.transfer_state.error {
                ui.add_space(8.0);
                ui::error_message(ui, error);
            }
        });
    }
}
