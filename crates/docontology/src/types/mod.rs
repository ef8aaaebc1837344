//! Validated value types.

mod base_url;
mod patch;

pub use base_url::BaseUrl;
pub use patch::Patch;
