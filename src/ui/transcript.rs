use crate::session::{ChatSession, Message, Role};
use crate::theme::Theme;
use eframe::egui::{self, Align, Label, Layout, RichText, ScrollArea};

pub const TYPING_INDICATOR: &str = "Bot is typing...";

pub fn typing_indicator(session: &ChatSession) -> Option<&'static str> {
    session.is_pending().then_some(TYPING_INDICATOR)
}

pub fn render_transcript(
    ui: &mut egui::Ui,
    session: &ChatSession,
    theme: &Theme,
    scroll_to_bottom: bool,
) {
    ScrollArea::vertical()
        .id_salt("chat_transcript")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in session.transcript().messages() {
                render_message(ui, message, theme);
            }

            if let Some(indicator) = typing_indicator(session) {
                ui.label(RichText::new(indicator).italics().color(theme.text_muted));
            }

            if scroll_to_bottom {
                ui.scroll_to_cursor(Some(Align::BOTTOM));
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message, theme: &Theme) {
    let (layout, fill, text_color) = match message.role {
        Role::User => (
            Layout::right_to_left(Align::Min),
            theme.accent_primary,
            theme.text_on_accent,
        ),
        Role::Bot => (
            Layout::left_to_right(Align::Min),
            theme.bot_bubble_fill,
            theme.bot_bubble_text,
        ),
    };

    ui.with_layout(layout, |ui| {
        theme.bubble_frame(fill).show(ui, |ui| {
            ui.set_max_width(theme.bubble_max_width);
            ui.vertical(|ui| {
                ui.add(Label::new(RichText::new(&message.content).color(text_color)).wrap());
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    ui.label(
                        RichText::new(message.clock_label())
                            .small()
                            .color(theme.text_muted),
                    );
                });
            });
        });
    });
}
