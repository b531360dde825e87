use crate::session::{ExchangeId, ExchangeOutcome};

#[derive(Debug)]
pub enum AppEvent {
    ExchangeSettled {
        id: ExchangeId,
        outcome: ExchangeOutcome,
    },
}
