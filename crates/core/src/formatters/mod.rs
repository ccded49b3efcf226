pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, convert_to_json};
pub use text::{NAME_NOT_FOUND, TextConfig, TextFormatter, convert_to_text};
