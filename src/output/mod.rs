mod json;
mod preview;

pub use json::{report_json, write_json};
pub use preview::{block_color, render_preview, save_preview};
