use crate::event::AppEvent;
use crate::responder::ResponderClient;
use crate::session::ChatSession;
use crate::theme::Theme;
use crate::ui::chrome::{render_footer, render_header};
use crate::ui::composer::render_composer;
use crate::ui::event::UiAction;
use crate::ui::transcript::render_transcript;
use chrono::Local;
use eframe::egui;
use std::sync::mpsc::{Receiver, TryRecvError};

pub struct ChatApp {
    rx: Receiver<AppEvent>,
    responder: ResponderClient,
    session: ChatSession,
    theme: Theme,
    applied_dark_mode: Option<bool>,
    rendered_messages: usize,
}

impl ChatApp {
    pub fn new(rx: Receiver<AppEvent>, responder: ResponderClient) -> Self {
        let session = ChatSession::new();
        let theme = Theme::for_mode(session.dark_mode());
        Self {
            rx,
            responder,
            session,
            theme,
            applied_dark_mode: None,
            rendered_messages: 0,
        }
    }

    fn update_session(&mut self, update: impl FnOnce(ChatSession) -> ChatSession) {
        let session = std::mem::take(&mut self.session);
        self.session = update(session);
    }

    fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ExchangeSettled { id, outcome } => {
                self.update_session(|session| session.settle(id, outcome, Local::now()));
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        tracing::trace!(action = %action.to_log_line(), "ui action");
        match action {
            UiAction::EditDraft(text) => self.update_session(|session| session.set_draft(text)),
            UiAction::ToggleTheme => {
                self.update_session(ChatSession::toggle_theme);
                self.theme = Theme::for_mode(self.session.dark_mode());
                tracing::info!(dark_mode = self.session.dark_mode(), "theme toggled");
            }
            UiAction::Submit => {
                let session = std::mem::take(&mut self.session);
                let (session, exchange) = session.submit(Local::now());
                self.session = session;
                if let Some(exchange) = exchange {
                    tracing::info!(
                        exchange = %exchange.id,
                        endpoint = %self.responder.endpoint(),
                        "sending message"
                    );
                    self.responder.send(exchange);
                }
            }
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let dark_mode = self.session.dark_mode();
        if self.applied_dark_mode != Some(dark_mode) {
            self.theme.apply_visuals(ctx);
            self.applied_dark_mode = Some(dark_mode);
        }
    }

    fn transcript_changed(&self) -> bool {
        self.session.transcript().len() != self.rendered_messages
    }

    fn render(&mut self, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let scroll_to_bottom = self.transcript_changed();

        render_header(ctx, &self.theme, &mut actions);
        render_footer(ctx, &self.theme, self.responder.endpoint());
        egui::TopBottomPanel::bottom("composer")
            .frame(self.theme.composer_frame())
            .show(ctx, |ui| render_composer(ui, &self.session, &mut actions));
        egui::CentralPanel::default().show(ctx, |ui| {
            render_transcript(ui, &self.session, &self.theme, scroll_to_bottom);
        });

        self.rendered_messages = self.session.transcript().len();
        actions
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.sync_theme(ctx);

        let actions = self.render(ctx);
        if actions.is_empty() {
            return;
        }
        for action in actions {
            self.apply_action(action);
        }
        ctx.request_repaint();
    }
}
