//! Application state module

mod app_state;
pub mod fields;
mod form_state;

pub use app_state::*;
pub use fields::{FieldKind, FieldSpec, FIELDS, GROUP_COUNT, GROUP_TITLES};
pub use form_state::FormState;
