//! Click orchestration
//!
//! Composes position memory, the curve generator and speed profiles into one
//! full click cycle: capture the origin, travel a human-like path to the
//! target, press and release with a short hold, then return along a fast
//! curve. The return leg runs even when the click itself failed.

use std::thread;
use std::time::Duration;

use log::warn;
use rand::Rng;

use crate::input::{MouseButton, PointerDevice, PointerError};
use crate::motion::{self, CurveConfig, Point, SpeedTier};

/// Pause between replayed trajectory points
const STEP_DELAY: Duration = Duration::from_millis(1);
/// How long the button stays down; a real click is never instantaneous
const HOLD_DURATION: Duration = Duration::from_millis(20);
/// Bound on the random offset applied to the configured click delay
const MAX_DELAY_JITTER_MS: i64 = 50;
/// Return-leg profile: quick and nearly straight
const RETURN_SPEED: SpeedTier = SpeedTier::Fastest;
const RETURN_KNOTS: u32 = 1;

/// One click cycle, built per invocation and discarded after use
#[derive(Debug, Clone)]
pub struct ClickPlan {
    /// Where to click; None clicks in place
    pub target: Option<Point>,
    pub button: MouseButton,
    /// Base delay before the button press
    pub delay: Duration,
    /// Speed tier for the outbound movement
    pub speed: SpeedTier,
    /// Interior knot count for the outbound curve; None auto-scales
    pub knots: Option<u32>,
    /// Return the cursor to its pre-click position afterwards
    pub restore: bool,
}

impl Default for ClickPlan {
    fn default() -> Self {
        Self {
            target: None,
            button: MouseButton::Left,
            delay: Duration::from_millis(50),
            speed: SpeedTier::Fast,
            knots: None,
            restore: true,
        }
    }
}

/// Captured cursor origin for one click cycle.
///
/// The snapshot lives for exactly one cycle and is cleared unconditionally
/// when the cycle ends, so a stale location can never be restored.
#[derive(Debug, Default)]
pub struct PositionMemory {
    origin: Option<Point>,
}

impl PositionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current cursor location as the origin
    pub fn capture<D: PointerDevice>(&mut self, device: &mut D) -> Result<(), PointerError> {
        self.origin = Some(device.position()?);
        Ok(())
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Move back to the captured origin along a fast, low-knot curve and
    /// clear the snapshot. A no-op without a prior capture. Failures are
    /// swallowed: a lost return trip must never break the action, and the
    /// snapshot is cleared either way.
    pub fn restore<D: PointerDevice, R: Rng>(&mut self, device: &mut D, rng: &mut R) {
        let Some(origin) = self.origin.take() else {
            return;
        };
        let current = match device.position() {
            Ok(point) => point,
            Err(e) => {
                warn!("Skipping cursor restore: {}", e);
                return;
            }
        };
        let config = CurveConfig {
            knots: Some(RETURN_KNOTS),
            points: RETURN_SPEED.sample_points(rng),
            ..Default::default()
        };
        for point in motion::generate(current, origin, &config, rng) {
            if let Err(e) = device.move_to(point) {
                warn!("Cursor restore failed: {}", e);
                return;
            }
            thread::sleep(STEP_DELAY);
        }
    }
}

/// Executes click plans against a pointer device
pub struct Clicker<D: PointerDevice> {
    device: D,
    memory: PositionMemory,
}

impl<D: PointerDevice> Clicker<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            memory: PositionMemory::new(),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Run one full click cycle.
    ///
    /// When the plan asks for restoration, the return leg and the snapshot
    /// cleanup run even if the movement or button events failed.
    pub fn click<R: Rng>(&mut self, plan: &ClickPlan, rng: &mut R) -> Result<(), PointerError> {
        if plan.restore {
            self.memory.capture(&mut self.device)?;
        }
        let result = self.perform(plan, rng);
        if plan.restore {
            self.memory.restore(&mut self.device, rng);
        }
        result
    }

    fn perform<R: Rng>(&mut self, plan: &ClickPlan, rng: &mut R) -> Result<(), PointerError> {
        if let Some(target) = plan.target {
            let start = self.device.position()?;
            let config = CurveConfig {
                knots: plan.knots,
                points: plan.speed.sample_points(rng),
                ..Default::default()
            };
            for point in motion::generate(start, target, &config, rng) {
                self.device.move_to(point)?;
                thread::sleep(STEP_DELAY);
            }
        }

        thread::sleep(jittered(plan.delay, rng));
        self.device.press(plan.button)?;
        thread::sleep(HOLD_DURATION);
        self.device.release(plan.button)?;
        Ok(())
    }
}

/// Offset the configured delay by up to +/-50ms, clamped at zero, so the
/// press cadence is never a fixed fingerprint
fn jittered<R: Rng>(delay: Duration, rng: &mut R) -> Duration {
    let jitter = rng.gen_range(-MAX_DELAY_JITTER_MS..=MAX_DELAY_JITTER_MS);
    let ms = delay.as_millis() as i64 + jitter;
    Duration::from_millis(ms.max(0) as u64)
}
