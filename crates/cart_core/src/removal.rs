use shared::domain::LineItemId;

/// Confirmation dialog gating item removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalFlow {
    #[default]
    Idle,
    Pending(LineItemId),
}

impl RemovalFlow {
    /// Opens the dialog for `id`. A second request while pending replaces the
    /// target.
    pub fn request(&mut self, id: LineItemId) {
        *self = RemovalFlow::Pending(id);
    }

    pub fn cancel(&mut self) {
        *self = RemovalFlow::Idle;
    }

    /// Closes the dialog and hands back the target to remove, if any.
    pub fn confirm(&mut self) -> Option<LineItemId> {
        match std::mem::take(self) {
            RemovalFlow::Pending(id) => Some(id),
            RemovalFlow::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RemovalFlow::Pending(_))
    }

    pub fn target(&self) -> Option<LineItemId> {
        match self {
            RemovalFlow::Pending(id) => Some(*id),
            RemovalFlow::Idle => None,
        }
    }
}
