//! Result reporting
//!
//! Renders the scored headlines as a console table with a label-frequency
//! summary, and persists them to the CSV flat file consumed by the
//! downstream visualization.

mod store;
mod table;

pub use store::{load_results, save_results};
pub use table::{render_summary, render_table};
