//! Rendering of the ranked summary into report artifacts.
//!
//! Both renderers consume the same immutable summary in the same order and
//! are independent of each other: the table renderer produces an HTML
//! string, the chart renderer a pie-chart pixel buffer.

mod chart;
mod table;

pub use chart::{Wedge, layout_wedges, render_chart};
pub use table::render_table;
