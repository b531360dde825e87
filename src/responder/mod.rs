use crate::event::AppEvent;
use crate::session::{Exchange, ExchangeOutcome};
use eframe::egui;
use serde::Deserialize;
use std::sync::mpsc;
use tokio::runtime::Handle;
use url::Url;

const CHAT_PATH: &str = "chat/";

#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("invalid responder url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("responder returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

/// Relays exchanges to the remote responder on the background runtime.
///
/// Results come back to the window as [`AppEvent::ExchangeSettled`].
#[derive(Clone)]
pub struct ResponderClient {
    endpoint: Url,
    http: reqwest::Client,
    tx: mpsc::Sender<AppEvent>,
    runtime_handle: Handle,
    repaint: egui::Context,
}

impl ResponderClient {
    pub fn new(
        endpoint: Url,
        runtime_handle: Handle,
        tx: mpsc::Sender<AppEvent>,
        repaint: egui::Context,
    ) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
            tx,
            runtime_handle,
            repaint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn send(&self, exchange: Exchange) {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        self.runtime_handle.spawn(async move {
            let outcome = match request_reply(&http, &endpoint, &exchange.text).await {
                Ok(reply) => {
                    tracing::info!(exchange = %exchange.id, "responder replied");
                    ExchangeOutcome::Reply(reply)
                }
                Err(err) => {
                    tracing::warn!(
                        exchange = %exchange.id,
                        endpoint = %endpoint,
                        error = %err,
                        "error fetching response"
                    );
                    ExchangeOutcome::Failed
                }
            };

            if tx
                .send(AppEvent::ExchangeSettled {
                    id: exchange.id,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(exchange = %exchange.id, "window closed before exchange settled");
                return;
            }
            repaint.request_repaint();
        });
    }
}

fn chat_url(endpoint: &Url, message: &str) -> Result<Url, ResponderError> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(CHAT_PATH)?;
    url.set_query(None);
    url.query_pairs_mut().append_pair("message", message);
    Ok(url)
}

async fn request_reply(
    http: &reqwest::Client,
    endpoint: &Url,
    message: &str,
) -> Result<String, ResponderError> {
    let url = chat_url(endpoint, message)?;
    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResponderError::Status(status));
    }

    let reply = response.json::<ChatReply>().await.map_err(|err| {
        if err.is_decode() {
            ResponderError::Payload(err.to_string())
        } else {
            ResponderError::Transport(err)
        }
    })?;
    Ok(reply.response)
}
