pub mod config;
pub mod data;
pub mod error;
pub mod geo;
pub mod logging;
pub mod output;
pub mod quiz;
pub mod session;
pub mod stderr_buffer;
pub mod tui;
