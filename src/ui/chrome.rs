use crate::theme::Theme;
use crate::ui::event::UiAction;
use eframe::egui::{self, Align, Layout, RichText};
use url::Url;

pub const TITLE: &str = "💬 Chatbot Interface";

pub fn render_header(ctx: &egui::Context, theme: &Theme, actions: &mut Vec<UiAction>) {
    egui::TopBottomPanel::top("header")
        .frame(theme.header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(TITLE).heading().strong().color(theme.text_on_accent));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(theme.toggle_label()).clicked() {
                        actions.push(UiAction::ToggleTheme);
                    }
                });
            });
        });
}

pub fn render_footer(ctx: &egui::Context, theme: &Theme, endpoint: &Url) {
    egui::TopBottomPanel::bottom("footer")
        .frame(theme.footer_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("Responder: {endpoint}"))
                        .small()
                        .color(theme.text_muted),
                );
            });
        });
}
