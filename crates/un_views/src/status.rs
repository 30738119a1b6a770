use serde::Serialize;

/// What a list or detail view is currently showing.
///
/// `Empty` is a valid zero-item result and never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewStatus {
    Loading,
    Ready,
    Empty,
    Failed { message: String },
}

impl ViewStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, ViewStatus::Failed { .. })
    }
}
