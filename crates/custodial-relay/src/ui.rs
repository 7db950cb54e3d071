//! UI helper components

use eframe::egui;

use custodial_relay_core::RelayStatus;

/// Explorer URL for a submitted transaction on the testnet the module
/// lives on.
pub fn explorer_txn_url(hash: &str) -> String {
    format!("https://explorer.aptoslabs.com/txn/{hash}?network=testnet")
}

/// Open URL in the default browser
pub fn open_url_new_tab(url: &str) {
    let _ = open::that(url);
}

/// Copy to clipboard
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Create a styled text edit for address input
pub fn address_input(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("0x...")
            .desired_width(400.0)
            .font(egui::TextStyle::Monospace),
    )
}

/// Create a styled text edit for number input
pub fn number_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(150.0)
            .font(egui::TextStyle::Monospace),
    )
}

/// Monospace value with a copy button
pub fn copyable_value(ui: &mut egui::Ui, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(value).monospace());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(value);
        }
    });
}

/// Render the latest relay outcome, colored by kind
pub fn status_line(ui: &mut egui::Ui, status: &RelayStatus) {
    let color = if status.is_failure() {
        egui::Color32::from_rgb(220, 80, 80)
    } else if matches!(status, RelayStatus::Balance(_)) {
        egui::Color32::from_rgb(110, 170, 240)
    } else {
        egui::Color32::from_rgb(80, 200, 120)
    };
    ui.label(egui::RichText::new(status.to_string()).color(color));
}
