//! Output formatting for computed plans.

mod terminal;

pub use terminal::{format_line, format_plan, print_plan};
