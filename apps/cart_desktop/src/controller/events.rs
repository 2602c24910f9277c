//! Backend → UI events.

use cart_core::LoadError;
use shared::{domain::LineItemId, protocol::CartFeed};

use crate::media::PreviewImage;

pub enum UiEvent {
    CartLoaded(Result<CartFeed, LoadError>),
    ThumbnailLoaded {
        item_id: LineItemId,
        image: PreviewImage,
    },
    ThumbnailFailed {
        item_id: LineItemId,
        reason: String,
    },
    BackendUnavailable(String),
}
