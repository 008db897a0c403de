//! Action dispatch
//!
//! Maps logical tavern actions to their configured screen regions and turns
//! them into click plans. Missing region configuration skips the action with
//! a warning rather than failing.

use std::time::Duration;

use log::warn;

use crate::click::{ClickPlan, Clicker};
use crate::config::ConfigHandle;
use crate::input::{MouseButton, PointerDevice};
use crate::motion::SpeedTier;

/// The tavern actions a hotkey can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Freeze,
    Upgrade,
    HeroPower,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Refresh,
        Action::Freeze,
        Action::Upgrade,
        Action::HeroPower,
    ];

    /// Key under `hotkeys` in the config file
    pub fn hotkey_key(self) -> &'static str {
        match self {
            Action::Refresh => "refresh_tavern",
            Action::Freeze => "freeze_tavern",
            Action::Upgrade => "upgrade_tavern",
            Action::HeroPower => "hero_power",
        }
    }

    /// Key under `positions` in the config file
    pub fn region_key(self) -> &'static str {
        match self {
            Action::Refresh => "refresh_button",
            Action::Freeze => "freeze_button",
            Action::Upgrade => "upgrade_button",
            Action::HeroPower => "hero_power_button",
        }
    }

    /// Human-readable name for status output
    pub fn label(self) -> &'static str {
        match self {
            Action::Refresh => "Refresh Tavern",
            Action::Freeze => "Freeze Tavern",
            Action::Upgrade => "Upgrade Tavern",
            Action::HeroPower => "Hero Power",
        }
    }
}

/// Resolves actions against the current config and drives the clicker
pub struct Dispatcher<D: PointerDevice> {
    config: ConfigHandle,
    clicker: Clicker<D>,
}

impl<D: PointerDevice> Dispatcher<D> {
    pub fn new(config: ConfigHandle, device: D) -> Self {
        Self {
            config,
            clicker: Clicker::new(device),
        }
    }

    pub fn clicker(&self) -> &Clicker<D> {
        &self.clicker
    }

    /// Perform one action: snapshot the config, resolve the jittered target
    /// and run a full click cycle. Never fatal; failures are logged.
    pub fn dispatch(&mut self, action: Action) {
        // Snapshot once so a concurrent reload cannot change the action
        // mid-flight
        let config = self.config.snapshot();
        let Some(region) = config.positions.get(action.region_key()) else {
            warn!("No position configured for {}", action.region_key());
            return;
        };

        let mut rng = rand::thread_rng();
        let settings = &config.mouse_settings;
        let plan = ClickPlan {
            target: Some(region.resolve(&mut rng)),
            button: MouseButton::Left,
            delay: Duration::from_secs_f64(settings.click_delay.max(0.0)),
            speed: SpeedTier::from_name(&settings.default_speed),
            knots: Some(settings.default_knots),
            restore: settings.return_to_original,
        };

        if let Err(e) = self.clicker.click(&plan, &mut rng) {
            warn!("{} click failed: {}", action.label(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TargetRegion};
    use crate::input::pointer::MockPointer;
    use crate::motion::Point;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.mouse_settings.click_delay = 0.0;
        config.mouse_settings.default_speed = "fastest".into();
        config
    }

    #[test]
    fn test_zero_variance_region_is_clicked_exactly() {
        let mut config = test_config();
        config.positions.insert(
            "freeze_button".into(),
            TargetRegion {
                x: 1245,
                y: 178,
                variance: 0,
            },
        );
        let mut dispatcher =
            Dispatcher::new(ConfigHandle::new(config), MockPointer::at(600, 600));

        for _ in 0..5 {
            dispatcher.dispatch(Action::Freeze);
            assert_eq!(
                dispatcher.clicker().device().position_at_press(),
                Some(Point::new(1245, 178))
            );
            dispatcher.clicker.device_mut().events.clear();
        }
    }

    #[test]
    fn test_jittered_region_stays_within_variance() {
        let mut dispatcher = Dispatcher::new(
            ConfigHandle::new(test_config()),
            MockPointer::at(600, 600),
        );

        // Default refresh_button is (1126, 204) with variance 10
        dispatcher.dispatch(Action::Refresh);
        let pressed = dispatcher
            .clicker()
            .device()
            .position_at_press()
            .expect("click was issued");
        assert!((1116..=1136).contains(&pressed.x));
        assert!((194..=214).contains(&pressed.y));
    }

    #[test]
    fn test_missing_region_skips_action() {
        let mut config = test_config();
        config.positions.remove("hero_power_button");
        let mut dispatcher =
            Dispatcher::new(ConfigHandle::new(config), MockPointer::at(600, 600));

        dispatcher.dispatch(Action::HeroPower);
        assert!(dispatcher.clicker().device().events.is_empty());
    }

    #[test]
    fn test_restore_flag_brings_cursor_back() {
        let mut dispatcher = Dispatcher::new(
            ConfigHandle::new(test_config()),
            MockPointer::at(77, 88),
        );

        dispatcher.dispatch(Action::Upgrade);
        assert_eq!(dispatcher.clicker().device().position, Point::new(77, 88));
    }
}
