use crate::session::ChatSession;
use crate::ui::event::UiAction;
use eframe::egui::{self, Button, Key, TextEdit};

pub const HINT: &str = "Type your message...";
const SEND_BUTTON_WIDTH: f32 = 72.0;

/// Draft input plus the Send button. Enter submits as well.
pub fn render_composer(ui: &mut egui::Ui, session: &ChatSession, actions: &mut Vec<UiAction>) {
    let mut draft = session.draft().to_string();
    let mut send_now = false;

    ui.horizontal(|ui| {
        let input_width = (ui.available_width() - SEND_BUTTON_WIDTH).max(80.0);
        let response = ui.add(
            TextEdit::singleline(&mut draft)
                .desired_width(input_width)
                .hint_text(HINT),
        );
        if response.changed() {
            actions.push(UiAction::EditDraft(draft.clone()));
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            send_now = true;
            response.request_focus();
        }

        let can_send = !session.is_pending() && !draft.is_empty();
        send_now |= ui.add_enabled(can_send, Button::new("Send")).clicked();
    });

    if send_now {
        actions.push(UiAction::Submit);
    }
}
