//! Application state definitions

use super::fields::{group_range, GROUP_COUNT};
use super::form_state::FormState;

/// Outcome of the most recent submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionResult {
    /// No submission yet, or the last one was invalidated by an edit
    #[default]
    None,
    /// The endpoint returned a prediction label
    Success { label: String },
    /// Transport failure or an explicit server-side error
    Failure { message: String },
}

impl SubmissionResult {
    #[allow(dead_code)]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Positive-class heuristic on the prediction label
///
/// The endpoint returns a free-text label rather than a structured
/// verdict, so positive is "contains ckd but not notckd",
/// case-insensitive. Kept as a compatibility shim with the deployed
/// API.
pub fn is_ckd(label: &str) -> bool {
    let lower = label.to_lowercase();
    lower.contains("ckd") && !lower.contains("notckd")
}

/// Mutable state owned by the [`App`](crate::app::App) controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current values of all 24 fields
    pub form: FormState,
    /// Active display group, always in `[0, GROUP_COUNT - 1]`
    pub active_group: usize,
    /// Focused field, as an offset into the active group
    pub active_field: usize,
    /// Result of the last completed submission
    pub result: SubmissionResult,
    /// True while a submission is awaiting the network round trip
    pub in_flight: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute index into the field registry of the focused field
    pub fn active_field_index(&self) -> usize {
        group_range(self.active_group).start + self.active_field
    }

    /// Number of fields in the active group
    pub fn active_group_len(&self) -> usize {
        group_range(self.active_group).len()
    }

    pub fn on_last_group(&self) -> bool {
        self.active_group == GROUP_COUNT - 1
    }

    /// Move to the next display group, clamped at the last one
    pub fn advance_group(&mut self) {
        if self.active_group + 1 < GROUP_COUNT {
            self.active_group += 1;
            self.active_field = 0;
        }
    }

    /// Move to the previous display group, clamped at the first one
    pub fn retreat_group(&mut self) {
        if self.active_group > 0 {
            self.active_group -= 1;
            self.active_field = 0;
        }
    }

    /// Focus the next field in the active group (wraps)
    pub fn next_field(&mut self) {
        let len = self.active_group_len();
        self.active_field = (self.active_field + 1) % len;
    }

    /// Focus the previous field in the active group (wraps)
    pub fn prev_field(&mut self) {
        let len = self.active_group_len();
        self.active_field = (self.active_field + len - 1) % len;
    }

    /// Drop any live result; called whenever a field is edited
    pub fn clear_result(&mut self) {
        self.result = SubmissionResult::None;
    }
}
