pub mod formatter;

pub use formatter::{format_factor_table, format_json, format_report, should_use_colors};
