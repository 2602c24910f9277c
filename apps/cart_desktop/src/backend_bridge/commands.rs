//! Backend commands queued from UI to backend worker.

use shared::domain::LineItemId;

pub enum BackendCommand {
    LoadCart,
    FetchThumbnail { item_id: LineItemId, url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCart => "load_cart",
            BackendCommand::FetchThumbnail { .. } => "fetch_thumbnail",
        }
    }
}
