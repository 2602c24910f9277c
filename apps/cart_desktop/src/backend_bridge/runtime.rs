//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use cart_core::{CartFeedSource, HttpFeedSource};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::media::decode_thumbnail;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, feed_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let http = HttpClient::new();
        let feed = HttpFeedSource::with_client(http.clone(), feed_url);

        // Each command runs as its own task.
        while let Ok(cmd) = cmd_rx.recv() {
            let ui_tx = ui_tx.clone();
            match cmd {
                BackendCommand::LoadCart => {
                    let feed = feed.clone();
                    runtime.spawn(async move {
                        let result = feed.fetch_cart().await;
                        let _ = ui_tx.send(UiEvent::CartLoaded(result));
                    });
                }
                BackendCommand::FetchThumbnail { item_id, url } => {
                    let http = http.clone();
                    runtime.spawn(async move {
                        let event = match fetch_thumbnail(&http, &url).await {
                            Ok(image) => UiEvent::ThumbnailLoaded { item_id, image },
                            Err(reason) => {
                                tracing::warn!(item = %item_id, %url, "thumbnail unavailable: {reason}");
                                UiEvent::ThumbnailFailed { item_id, reason }
                            }
                        };
                        let _ = ui_tx.send(event);
                    });
                }
            }
        }
        tracing::debug!("ui command channel closed; backend worker exiting");
    });
}

async fn fetch_thumbnail(
    http: &HttpClient,
    url: &str,
) -> Result<crate::media::PreviewImage, String> {
    let bytes = http
        .get(url)
        .send()
        .await
        .map_err(|err| format!("failed to fetch image: {err}"))?
        .error_for_status()
        .map_err(|err| format!("image endpoint returned error: {err}"))?
        .bytes()
        .await
        .map_err(|err| format!("failed to read image body: {err}"))?;
    decode_thumbnail(&bytes)
}
