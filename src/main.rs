mod app;
mod config;
mod event;
mod responder;
mod session;
mod theme;
mod ui;

use app::ChatApp;
use clap::Parser;
use config::{Cli, Config};
use eframe::egui;
use responder::ResponderClient;
use std::sync::mpsc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from_cli(Cli::parse())?;
    tracing::info!(endpoint = %config.endpoint, "responder configured");

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("chatbox-runtime")
        .build()?;
    let runtime_handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chatbox",
        native_options,
        Box::new(move |creation_context| {
            let responder = ResponderClient::new(
                config.endpoint,
                runtime_handle,
                tx,
                creation_context.egui_ctx.clone(),
            );
            Ok(Box::new(ChatApp::new(rx, responder)))
        }),
    )?;

    drop(runtime);
    Ok(())
}
