pub mod console_macros;
pub mod format;
