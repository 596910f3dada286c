pub mod charts;
pub mod config;
pub mod content;
pub mod output;
pub mod scoring;
pub mod session;
pub mod tui;
