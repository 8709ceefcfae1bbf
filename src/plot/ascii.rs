//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a plateau in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - effective-mass samples: `o`
//! - fitted constant: `-` line
//! - one-sigma band of the fit: `.` lines

use crate::domain::{FitResult, PlateauWindow};

/// Render the samples of a plateau window, optionally with the fitted constant.
///
/// Undefined samples are skipped (they are counted in the header).
pub fn render_mass_plot(window: &PlateauWindow<'_>, fit: Option<&FitResult>, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let samples: Vec<(f64, f64)> = window
        .points()
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.value().map(|v| ((window.start() + i) as f64, v)))
        .collect();

    let t_min = window.start() as f64;
    let t_max = (window.end().max(window.start() + 2) - 1) as f64;

    let band = fit.and_then(|f| {
        (f.uncertainty.is_finite() && f.uncertainty > 0.0).then(|| (f.mass - f.uncertainty, f.mass + f.uncertainty))
    });

    let mut extra = Vec::new();
    if let Some(f) = fit {
        extra.push(f.mass);
    }
    if let Some((lo, hi)) = band {
        extra.push(lo);
        extra.push(hi);
    }

    let (y_min, y_max) = y_range(&samples, &extra).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Lines first so samples overlay them.
    if let Some((lo, hi)) = band {
        for y in [lo, hi] {
            draw_hline(&mut grid, map_y(y, y_min, y_max, height), '.');
        }
    }
    if let Some(f) = fit {
        draw_hline(&mut grid, map_y(f.mass, y_min, y_max, height), '-');
    }

    for &(t, v) in &samples {
        let x = map_x(t, t_min, t_max, width);
        let y = map_y(v, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: t=[{}, {}] | m_eff=[{y_min:.4}, {y_max:.4}]",
        window.start(),
        window.end().saturating_sub(1),
    ));
    let skipped = window.len() - samples.len();
    if skipped > 0 {
        out.push_str(&format!(" | {skipped} undefined"));
    }
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn y_range(samples: &[(f64, f64)], extra: &[f64]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &y in samples.iter().map(|(_, y)| y).chain(extra) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y >= min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_hline(grid: &mut [Vec<char>], row: usize, ch: char) {
    if let Some(cells) = grid.get_mut(row) {
        cells.iter_mut().for_each(|c| *c = ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EffectiveMassCurve, MassPoint, MassStrategy};

    fn fit(mass: f64, uncertainty: f64) -> FitResult {
        FitResult {
            mass,
            variance: uncertainty * uncertainty,
            uncertainty,
            chi2: 0.0,
            dof: 1,
            n: 2,
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let curve = EffectiveMassCurve::new(MassStrategy::Log, vec![MassPoint::Valid(0.1), MassPoint::Valid(0.2)]);
        let window = curve.window(0..2).unwrap();

        let txt = render_mass_plot(&window, Some(&fit(0.15, 0.0)), 10, 5);
        let expected = concat!(
            "Plot: t=[0, 1] | m_eff=[0.0950, 0.2050]\n",
            "         o\n",
            "          \n",
            "----------\n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn plot_shows_band_and_undefined_count() {
        let curve = EffectiveMassCurve::new(
            MassStrategy::Log,
            vec![
                MassPoint::Valid(0.15),
                MassPoint::Undefined,
                MassPoint::Valid(0.16),
                MassPoint::Valid(0.14),
            ],
        );
        let window = curve.window(0..4).unwrap();

        let txt = render_mass_plot(&window, Some(&fit(0.15, 0.01)), 20, 11);
        let header = txt.lines().next().unwrap();
        assert!(header.ends_with("| 1 undefined"), "{header}");
        assert_eq!(txt.lines().filter(|l| l.starts_with('.')).count(), 2);
        let samples: usize = txt.lines().skip(1).map(|l| l.matches('o').count()).sum();
        assert_eq!(samples, 3);
    }

    #[test]
    fn plot_without_fit_or_samples_does_not_panic() {
        let curve = EffectiveMassCurve::new(MassStrategy::Log, vec![MassPoint::Undefined]);
        let window = curve.window(0..1).unwrap();
        let txt = render_mass_plot(&window, None, 3, 2);
        assert_eq!(txt.lines().count(), 6);
    }
}
