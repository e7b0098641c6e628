//! Report configuration.
//!
//! Renderer knobs are carried in an explicitly passed [`ReportConfig`] value
//! rather than process-wide defaults, so both renderers stay pure and
//! deterministic under test.

/// Default side length in pixels for the square pie-chart canvas.
pub const DEFAULT_CHART_SIZE: u32 = 600;

/// Default threshold below which a summary row receives the low-hours
/// highlight. Rows at exactly this value are not highlighted.
pub const DEFAULT_LOW_HOURS_THRESHOLD: u64 = 100;

/// Configuration for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Side length of the square chart canvas, in pixels.
    pub chart_size: u32,
    /// Totals strictly below this value get the low-hours table highlight.
    pub low_hours_threshold: u64,
    /// Seed for wedge color selection. `None` seeds from OS entropy, making
    /// colors vary per run; a fixed seed makes the layout reproducible.
    pub color_seed: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_size: DEFAULT_CHART_SIZE,
            low_hours_threshold: DEFAULT_LOW_HOURS_THRESHOLD,
            color_seed: None,
        }
    }
}
