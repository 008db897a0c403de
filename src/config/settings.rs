//! Config file schema, defaults and loading
//!
//! The config lives in a JSON file next to the binary by default. A missing
//! file is created from defaults; an unreadable or malformed file falls back
//! to defaults with a logged warning; a file missing individual keys gets
//! them backfilled section by section without touching user-supplied keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::motion::Point;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to write config file: {0}")]
    Write(#[from] std::io::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level configuration, mirroring the JSON file layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Action name -> key-combo string
    pub hotkeys: BTreeMap<String, String>,
    /// Region name -> click target with jitter radius
    pub positions: BTreeMap<String, TargetRegion>,
    pub mouse_settings: MouseSettings,
}

/// A named click target with a uniform jitter radius per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRegion {
    pub x: i32,
    pub y: i32,
    pub variance: i32,
}

impl TargetRegion {
    /// Resolve a concrete click point: base plus an independent uniform
    /// offset in [-variance, variance] per axis. Zero variance yields the
    /// base point exactly.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Point {
        let v = self.variance.max(0);
        if v == 0 {
            return Point::new(self.x, self.y);
        }
        Point::new(
            self.x + rng.gen_range(-v..=v),
            self.y + rng.gen_range(-v..=v),
        )
    }
}

/// Mouse behavior settings applied to every dispatched click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseSettings {
    /// Speed tier name for the outbound movement
    pub default_speed: String,
    /// Interior knot count for the outbound curve
    pub default_knots: u32,
    /// Base delay before the button press, in seconds
    pub click_delay: f64,
    /// Move the cursor back to where it was after each click
    pub return_to_original: bool,
}

impl Default for MouseSettings {
    fn default() -> Self {
        Self {
            default_speed: "fast".into(),
            default_knots: 2,
            click_delay: 0.05,
            return_to_original: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let hotkeys = [
            ("refresh_tavern", "r"),
            ("freeze_tavern", "f"),
            ("upgrade_tavern", "u"),
            ("hero_power", "h"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let positions = [
            ("refresh_button", 1126, 204),
            ("freeze_button", 1245, 178),
            ("upgrade_button", 792, 191),
            ("hero_power_button", 1140, 823),
        ]
        .into_iter()
        .map(|(name, x, y)| (name.to_string(), TargetRegion { x, y, variance: 10 }))
        .collect();

        Self {
            hotkeys,
            positions,
            mouse_settings: MouseSettings::default(),
        }
    }
}

impl Config {
    /// Load the config, creating the file from defaults when it is missing.
    ///
    /// Never fails: malformed files fall back to defaults with a warning,
    /// incomplete files get missing keys backfilled.
    pub fn load_or_create(path: &Path) -> Config {
        if !path.exists() {
            info!("Creating default config file: {}", path.display());
            let config = Config::default();
            if let Err(e) = config.save(path) {
                warn!("Failed to write default config: {}", e);
            }
            return config;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                return Config::default();
            }
        };

        let mut value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid config file, using defaults: {}", e);
                return Config::default();
            }
        };

        merge_defaults(&mut value, &default_value());
        match serde_json::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config has invalid values, using defaults: {}", e);
                Config::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

fn default_value() -> Value {
    serde_json::to_value(Config::default()).expect("default config serializes")
}

/// Backfill missing keys from the defaults, one level deep per section.
/// User-supplied keys are never overwritten.
fn merge_defaults(user: &mut Value, defaults: &Value) {
    let (Some(user), Some(defaults)) = (user.as_object_mut(), defaults.as_object()) else {
        return;
    };
    for (section, default_section) in defaults {
        match user.get_mut(section) {
            None => {
                user.insert(section.clone(), default_section.clone());
            }
            Some(user_section) => {
                let (Some(user_section), Some(default_section)) =
                    (user_section.as_object_mut(), default_section.as_object())
                else {
                    continue;
                };
                for (key, default_entry) in default_section {
                    user_section
                        .entry(key.clone())
                        .or_insert_with(|| default_entry.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_missing_file_writes_defaults_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::load_or_create(&path);
        assert_eq!(config, Config::default());

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(
            on_disk,
            serde_json::to_string_pretty(&Config::default()).unwrap()
        );
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(Config::load_or_create(&path), Config::default());
        // The broken file is left alone for the user to inspect
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_merge_is_idempotent_on_complete_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        assert_eq!(Config::load_or_create(&path), Config::default());
    }

    #[test]
    fn test_merge_backfills_only_missing_nested_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        // mouse_settings has a user value for default_speed but lacks the
        // other keys; hotkeys is missing entirely
        fs::write(
            &path,
            r#"{
                "positions": {"freeze_button": {"x": 1, "y": 2, "variance": 3}},
                "mouse_settings": {"default_speed": "slowest"}
            }"#,
        )
        .unwrap();

        let config = Config::load_or_create(&path);
        assert_eq!(config.mouse_settings.default_speed, "slowest");
        assert_eq!(config.mouse_settings.click_delay, 0.05);
        assert!(config.mouse_settings.return_to_original);
        assert_eq!(config.hotkeys, Config::default().hotkeys);
        // User region survives, default regions are backfilled beside it
        assert_eq!(
            config.positions["freeze_button"],
            TargetRegion {
                x: 1,
                y: 2,
                variance: 3
            }
        );
        assert_eq!(
            config.positions["refresh_button"],
            Config::default().positions["refresh_button"]
        );
    }

    #[test]
    fn test_region_jitter_stays_within_variance() {
        let region = TargetRegion {
            x: 1126,
            y: 204,
            variance: 10,
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let p = region.resolve(&mut rng);
            assert!((1116..=1136).contains(&p.x));
            assert!((194..=214).contains(&p.y));
        }
    }

    #[test]
    fn test_zero_variance_resolves_exactly() {
        let region = TargetRegion {
            x: 1245,
            y: 178,
            variance: 0,
        };
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            assert_eq!(region.resolve(&mut rng), Point::new(1245, 178));
        }
    }
}
