pub mod header_box;
pub mod loading_indicator;

pub use header_box::*;
pub use loading_indicator::*;
