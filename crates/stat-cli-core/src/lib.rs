pub mod render;
pub mod utils;

// Re-export render entry points for convenience
pub use render::{
    JsonRenderer, LessonRenderer, ReportRenderer, TableRenderer, render_to_string, renderer_for,
};
