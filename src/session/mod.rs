use chrono::{DateTime, Local};

pub mod state;

pub use state::ChatSession;

pub const ERROR_PLACEHOLDER: &str = "Error: Could not fetch response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp,
        }
    }

    pub fn bot(content: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            timestamp,
        }
    }

    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only message history for one window session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeId(pub u64);

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outbound request produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub id: ExchangeId,
    pub text: String,
}

#[derive(Debug)]
pub enum ExchangeOutcome {
    Reply(String),
    Failed,
}

impl ExchangeOutcome {
    pub fn into_content(self) -> String {
        match self {
            Self::Reply(text) => text,
            Self::Failed => ERROR_PLACEHOLDER.to_string(),
        }
    }
}
