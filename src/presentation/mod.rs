// Presentation helpers: pure functions from computed numbers to display strings.

pub mod format;
pub mod text;

pub use format::{format_currency, format_number};
pub use text::{comparison_bars, render_report, BarColor, ComparisonBar};
