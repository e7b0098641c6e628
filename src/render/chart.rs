//! Pie chart rendering.
//!
//! This module lays out one wedge per employee, angular size proportional to
//! that employee's share of the total recorded time, and rasterizes the
//! layout onto a square white canvas.
//!
//! Layout and rasterization are split so wedge geometry can be tested
//! without inspecting pixels. Wedge colors are sampled per run from a
//! mid-to-high brightness range, so every wedge stays distinguishable from
//! the white background; exact colors are not reproducible across runs
//! unless a seed is configured.

use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::EmployeeSummary;

/// Canvas background color.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Lower bound for each sampled RGB channel. Keeps every wedge color well
/// away from the white background.
const MIN_COLOR_CHANNEL: u8 = 100;

/// One angular slice of the pie chart, corresponding to one employee.
///
/// Angles are in degrees, measured clockwise from east (the positive x axis
/// with y pointing down), matching the raster coordinate system. A wedge
/// occupies `[start_angle, start_angle + sweep_angle)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Angle at which the wedge begins.
    pub start_angle: f64,
    /// Angular size of the wedge.
    pub sweep_angle: f64,
    /// Fill color for the wedge.
    pub color: Rgba<u8>,
}

impl Wedge {
    /// Returns the angle at which the wedge ends.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Computes the wedge layout for the given summary.
///
/// Each employee's sweep is `total_time / total * 360` degrees, accumulated
/// in summary order starting at 0°. The final wedge's sweep is recomputed as
/// `360 − cumulative_before_last` so the boundaries close at exactly 360°
/// instead of accumulating per-wedge rounding error.
///
/// Colors are drawn from `rng`, one per wedge, each RGB channel sampled from
/// `MIN_COLOR_CHANNEL..=255`.
///
/// # Errors
///
/// Returns [`ReportError::EmptyDataset`] when the summed total time is zero,
/// which covers both an empty summary and one where every employee has zero
/// recorded time.
pub fn layout_wedges(
    summary: &[EmployeeSummary],
    rng: &mut StdRng,
) -> ReportResult<Vec<Wedge>> {
    let total: u64 = summary.iter().map(|s| s.total_time).sum();
    if total == 0 {
        return Err(ReportError::EmptyDataset);
    }
    let total = total as f64;

    let mut wedges = Vec::with_capacity(summary.len());
    let mut cursor = 0.0_f64;

    for (i, employee) in summary.iter().enumerate() {
        let sweep = if i == summary.len() - 1 {
            // Close the final wedge exactly; max guards against the cursor
            // overshooting 360 by a rounding ulp.
            (360.0 - cursor).max(0.0)
        } else {
            employee.total_time as f64 / total * 360.0
        };
        wedges.push(Wedge {
            start_angle: cursor,
            sweep_angle: sweep,
            color: random_wedge_color(rng),
        });
        cursor += sweep;
    }

    Ok(wedges)
}

/// Rasterizes the pie chart for the given summary.
///
/// Produces a square `config.chart_size` canvas with a white background and
/// the pie disc centered, radius one third of the side length. Every pixel
/// inside the disc is classified by its angle against the cumulative wedge
/// boundaries, so rounding cannot leave gaps between wedges.
///
/// The color generator is seeded from `config.color_seed` when present,
/// otherwise from OS entropy.
///
/// # Errors
///
/// Returns [`ReportError::EmptyDataset`] when the summed total time is zero.
pub fn render_chart(
    summary: &[EmployeeSummary],
    config: &ReportConfig,
) -> ReportResult<RgbaImage> {
    let mut rng = match config.color_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let wedges = layout_wedges(summary, &mut rng)?;

    let size = config.chart_size;
    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND);

    let center = size as f64 / 2.0;
    let radius = size as f64 / 3.0;
    let radius_sq = radius * radius;

    for y in 0..size {
        for x in 0..size {
            // Sample at the pixel center.
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            // atan2 with y down gives degrees clockwise from east.
            let mut angle = dy.atan2(dx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            canvas.put_pixel(x, y, color_at(&wedges, angle));
        }
    }

    Ok(canvas)
}

/// Returns the fill color of the wedge covering `angle`.
///
/// Wedge end boundaries are non-decreasing and the last one reaches 360, so
/// the scan always finds a wedge; the final wedge absorbs any boundary
/// rounding.
fn color_at(wedges: &[Wedge], angle: f64) -> Rgba<u8> {
    for wedge in wedges {
        if angle < wedge.end_angle() {
            return wedge.color;
        }
    }
    wedges[wedges.len() - 1].color
}

/// Samples an opaque wedge color with every channel in the mid-to-high
/// brightness range.
fn random_wedge_color(rng: &mut StdRng) -> Rgba<u8> {
    Rgba([
        rng.gen_range(MIN_COLOR_CHANNEL..=255),
        rng.gen_range(MIN_COLOR_CHANNEL..=255),
        rng.gen_range(MIN_COLOR_CHANNEL..=255),
        255,
    ])
}
