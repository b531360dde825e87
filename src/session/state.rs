use crate::session::{Exchange, ExchangeId, ExchangeOutcome, Message, Transcript};
use chrono::{DateTime, Local};

/// Everything the window knows about the conversation.
///
/// Updates consume the session and hand back the next one; render code only
/// ever borrows it.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    draft: String,
    transcript: Transcript,
    pending: Option<ExchangeId>,
    dark_mode: bool,
    next_exchange: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<ExchangeId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_draft(mut self, text: impl Into<String>) -> Self {
        self.draft = text.into();
        self
    }

    pub fn toggle_theme(mut self) -> Self {
        self.dark_mode = !self.dark_mode;
        self
    }

    /// Moves the draft into the transcript and opens an exchange for it.
    ///
    /// An empty draft, or a submission made while another exchange is still
    /// outstanding, leaves the session untouched. The draft is sent as typed.
    pub fn submit(mut self, at: DateTime<Local>) -> (Self, Option<Exchange>) {
        if self.draft.is_empty() {
            return (self, None);
        }

        if let Some(pending) = self.pending {
            tracing::debug!(exchange = %pending, "submit ignored while an exchange is pending");
            return (self, None);
        }

        self.next_exchange += 1;
        let id = ExchangeId(self.next_exchange);

        let text = std::mem::take(&mut self.draft);
        self.transcript.push(Message::user(text.clone(), at));
        self.pending = Some(id);

        (self, Some(Exchange { id, text }))
    }

    /// Records the bot side of an exchange. Always appends exactly one message.
    pub fn settle(mut self, id: ExchangeId, outcome: ExchangeOutcome, at: DateTime<Local>) -> Self {
        if self.pending == Some(id) {
            self.pending = None;
        } else {
            tracing::warn!(exchange = %id, pending = ?self.pending, "settled exchange was not pending");
        }

        self.transcript.push(Message::bot(outcome.into_content(), at));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ChatSession;
    use crate::session::{ExchangeId, ExchangeOutcome, Role, ERROR_PLACEHOLDER};
    use chrono::{Local, TimeZone};

    fn at(minute: u32) -> chrono::DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 9, minute, 0)
            .single()
            .expect("fixture time should be unambiguous")
    }

    #[test]
    fn submit_appends_user_message_and_clears_draft() {
        let (session, exchange) = ChatSession::new().set_draft("hello").submit(at(0));

        let exchange = exchange.expect("non-empty draft should open an exchange");
        assert_eq!(exchange.text, "hello");
        assert_eq!(session.draft(), "");
        assert_eq!(session.transcript().len(), 1);
        let message = &session.transcript().messages()[0];
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "hello");
        assert_eq!(session.pending(), Some(exchange.id));
    }

    #[test]
    fn submit_with_empty_draft_changes_nothing() {
        let (session, exchange) = ChatSession::new().submit(at(0));
        assert!(exchange.is_none());
        assert!(session.transcript().is_empty());
        assert!(!session.is_pending());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn submit_sends_draft_with_surrounding_whitespace_intact() {
        let (session, exchange) = ChatSession::new().set_draft("  hi  ").submit(at(0));

        let exchange = exchange.expect("padded draft should open an exchange");
        assert_eq!(exchange.text, "  hi  ");
        assert_eq!(session.transcript().messages()[0].content, "  hi  ");
        assert_eq!(session.draft(), "");

        let (session, exchange) = session
            .settle(exchange.id, ExchangeOutcome::Reply("ok".into()), at(1))
            .set_draft(" ")
            .submit(at(2));
        let exchange = exchange.expect("whitespace-only draft is still a message");
        assert_eq!(exchange.text, " ");
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn submit_while_pending_keeps_draft_and_transcript() {
        let (session, first) = ChatSession::new().set_draft("one").submit(at(0));
        let first = first.expect("first submit should go out");

        let (session, second) = session.set_draft("two").submit(at(1));
        assert!(second.is_none());
        assert_eq!(session.draft(), "two");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.pending(), Some(first.id));
    }

    #[test]
    fn successful_exchange_appends_reply_and_clears_pending() {
        let (session, exchange) = ChatSession::new().set_draft("hello").submit(at(0));
        let exchange = exchange.expect("exchange should open");
        assert!(session.is_pending());

        let session = session.settle(
            exchange.id,
            ExchangeOutcome::Reply("hi there".to_string()),
            at(1),
        );

        assert!(!session.is_pending());
        let contents: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|message| (message.role, message.content.as_str()))
            .collect();
        assert_eq!(contents, vec![(Role::User, "hello"), (Role::Bot, "hi there")]);
    }

    #[test]
    fn failed_exchange_appends_error_placeholder() {
        let (session, exchange) = ChatSession::new().set_draft("hello").submit(at(0));
        let exchange = exchange.expect("exchange should open");

        let session = session.settle(
            exchange.id,
            ExchangeOutcome::Failed,
            at(1),
        );

        assert!(!session.is_pending());
        assert_eq!(session.transcript().len(), 2);
        let reply = &session.transcript().messages()[1];
        assert_eq!(reply.role, Role::Bot);
        assert_eq!(reply.content, ERROR_PLACEHOLDER);
    }

    #[test]
    fn stale_settle_still_appends_but_keeps_current_pending() {
        let (session, exchange) = ChatSession::new().set_draft("hello").submit(at(0));
        let exchange = exchange.expect("exchange should open");

        let session = session.settle(ExchangeId(99), ExchangeOutcome::Reply("late".into()), at(1));
        assert_eq!(session.pending(), Some(exchange.id));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn exchange_ids_increase_per_submission() {
        let (session, first) = ChatSession::new().set_draft("a").submit(at(0));
        let first = first.expect("first exchange");
        let session = session.settle(first.id, ExchangeOutcome::Reply("x".into()), at(0));
        let (_, second) = session.set_draft("b").submit(at(1));
        let second = second.expect("second exchange");
        assert!(second.id > first.id);
    }

    #[test]
    fn toggling_theme_twice_restores_original() {
        let session = ChatSession::new();
        assert!(!session.dark_mode());
        let session = session.toggle_theme();
        assert!(session.dark_mode());
        let session = session.toggle_theme();
        assert!(!session.dark_mode());
    }

    #[test]
    fn timestamps_are_fixed_at_append_time() {
        let (session, exchange) = ChatSession::new().set_draft("hello").submit(at(5));
        let exchange = exchange.expect("exchange should open");
        let session = session.settle(exchange.id, ExchangeOutcome::Reply("hi".into()), at(7));

        let labels: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|message| message.clock_label())
            .collect();
        assert_eq!(labels, vec!["09:05".to_string(), "09:07".to_string()]);
    }
}
