pub mod handlers;
pub mod normalizer;
pub mod plain_text;
pub mod store;
pub mod view_model;

pub use normalizer::{normalize, PRESENT};
pub use plain_text::to_plain_text;
pub use view_model::{PersonalInfo, SanitizedViewModel};
