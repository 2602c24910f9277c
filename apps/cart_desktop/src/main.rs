use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod media;
mod ui;

use anyhow::{anyhow, Context};
use cart_core::{finalize_settings, load_layered_settings, CartSettings, ConfigError};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CartApp;

#[derive(Parser, Debug)]
#[command(about = "Shopping cart panel")]
struct Args {
    /// Cart feed URL; overrides cart.toml and the environment.
    #[arg(long)]
    feed_url: Option<String>,
    /// Settings file to read instead of ./cart.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_settings(args: &Args) -> anyhow::Result<CartSettings> {
    let layered =
        load_layered_settings(args.config.as_deref()).context("failed to load cart settings")?;
    Ok(apply_args(layered, args)?)
}

/// Command-line layer; flags take precedence over file and environment.
fn apply_args(layered: CartSettings, args: &Args) -> Result<CartSettings, ConfigError> {
    finalize_settings(layered, args.feed_url.as_deref())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    tracing::info!(feed_url = %settings.feed_url, "starting cart panel");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.feed_url.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(CartApp::new(cmd_tx, ui_rx, &settings)))),
    )
    .map_err(|err| anyhow!("cart window failed: {err}"))
}
