//! Bezier-based trajectory synthesis
//!
//! Generates a multi-point path between two screen coordinates that
//! approximates human pointer motion: randomized interior knots bend the
//! curve, an easing function shapes the point density, and occasional
//! gaussian distortion breaks up the otherwise perfectly smooth line.

use rand::Rng;

use super::{Point, Tween};

/// Interior knots grow with distance, one per this many pixels
const KNOT_DISTANCE_PX: f64 = 200.0;
/// Cap on auto-scaled knots; wider arcs look less plausible, not more
const MAX_AUTO_KNOTS: u32 = 3;

/// Default perpendicular slack for knot placement, in pixels
pub const DEFAULT_BOUNDARY_X: i32 = 75;
pub const DEFAULT_BOUNDARY_Y: i32 = 75;
/// Default gaussian distortion parameters
pub const DEFAULT_DISTORTION_MEAN: f64 = 1.0;
pub const DEFAULT_DISTORTION_STDEV: f64 = 1.2;
pub const DEFAULT_DISTORTION_FREQUENCY: f64 = 0.5;
/// Default trajectory length when no speed tier was resolved
pub const DEFAULT_POINTS: usize = 45;

/// Shape parameters for one trajectory
#[derive(Debug, Clone)]
pub struct CurveConfig {
    /// Interior knot count; None auto-scales with distance
    pub knots: Option<u32>,
    /// How far knots may stray from the start/end bounding box, per axis
    pub boundary_x: i32,
    pub boundary_y: i32,
    /// Gaussian distortion applied to a fraction of generated points
    pub distortion_mean: f64,
    pub distortion_stdev: f64,
    /// Per-point probability that distortion is applied
    pub distortion_frequency: f64,
    /// Easing function controlling point density
    pub tween: Tween,
    /// Output sequence length
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            knots: None,
            boundary_x: DEFAULT_BOUNDARY_X,
            boundary_y: DEFAULT_BOUNDARY_Y,
            distortion_mean: DEFAULT_DISTORTION_MEAN,
            distortion_stdev: DEFAULT_DISTORTION_STDEV,
            distortion_frequency: DEFAULT_DISTORTION_FREQUENCY,
            tween: Tween::default(),
            points: DEFAULT_POINTS,
        }
    }
}

/// Generate a trajectory from `start` to `end`.
///
/// The result is ordered, has exactly `config.points` entries and always
/// terminates exactly at `end`. A degenerate request (`start == end`, or a
/// point budget of 0 or 1) collapses to a single point.
pub fn generate<R: Rng>(start: Point, end: Point, config: &CurveConfig, rng: &mut R) -> Vec<Point> {
    if start == end {
        return vec![start];
    }
    if config.points <= 1 {
        return vec![end];
    }

    let knots = config.knots.unwrap_or_else(|| auto_knots(start, end));
    let controls = control_points(start, end, knots, config, rng);

    let last = config.points - 1;
    let mut path = Vec::with_capacity(config.points);
    for i in 0..config.points {
        let t = config.tween.apply(i as f64 / last as f64);
        let (x, y) = bezier_at(&controls, t);
        let mut point = Point::new(x.round() as i32, y.round() as i32);
        // Endpoints stay clean; only interior points get roughed up
        if i != 0 && i != last && rng.gen::<f64>() < config.distortion_frequency {
            let offset = gaussian(rng, config.distortion_mean, config.distortion_stdev);
            point.y += offset.round() as i32;
        }
        path.push(point);
    }
    path
}

/// Interior knot count scaled by distance, capped at a small maximum
fn auto_knots(start: Point, end: Point) -> u32 {
    ((start.distance_to(end) / KNOT_DISTANCE_PX) as u32).min(MAX_AUTO_KNOTS)
}

/// Bezier control polygon: start, randomized knots, end.
///
/// Knots are sampled inside the start/end bounding box expanded by the
/// boundary offsets, which bounds how wide the arc can swing.
fn control_points<R: Rng>(
    start: Point,
    end: Point,
    knots: u32,
    config: &CurveConfig,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    let left = start.x.min(end.x) - config.boundary_x.max(0);
    let right = start.x.max(end.x) + config.boundary_x.max(0);
    let top = start.y.min(end.y) - config.boundary_y.max(0);
    let bottom = start.y.max(end.y) + config.boundary_y.max(0);

    let mut controls = Vec::with_capacity(knots as usize + 2);
    controls.push((start.x as f64, start.y as f64));
    for _ in 0..knots {
        let x = rng.gen_range(left..=right);
        let y = rng.gen_range(top..=bottom);
        controls.push((x as f64, y as f64));
    }
    controls.push((end.x as f64, end.y as f64));
    controls
}

/// Evaluate the Bezier curve at parameter `t` using Bernstein polynomials
fn bezier_at(controls: &[(f64, f64)], t: f64) -> (f64, f64) {
    let n = controls.len() - 1;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, &(cx, cy)) in controls.iter().enumerate() {
        let basis = binomial(n, i) as f64 * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
        x += basis * cx;
        y += basis * cy;
    }
    (x, y)
}

/// Binomial coefficient; exact for the tiny degrees used here
fn binomial(n: usize, k: usize) -> u64 {
    (1..=k as u64).fold(1u64, |acc, i| acc * (n as u64 - k as u64 + i) / i)
}

/// Gaussian sample approximated by summed uniforms
fn gaussian<R: Rng>(rng: &mut R, mean: f64, stdev: f64) -> f64 {
    let unit: f64 = (0..12).map(|_| rng.gen::<f64>()).sum::<f64>() - 6.0;
    mean + unit * stdev
}
