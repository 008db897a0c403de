//! Global hotkey registration
//!
//! Parses the config's key-combo strings ("r", "ctrl+shift+q") into
//! `global-hotkey` registrations and maps incoming event ids back to the
//! action they were bound to. The registry is generic over the action id so
//! the core never depends on what the caller binds.

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::GlobalHotKeyManager;
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error("Failed to create global hotkey manager: {0}")]
    Manager(String),
    #[error("Unknown key '{0}' in combo '{1}'")]
    UnknownKey(String, String),
    #[error("Combo '{0}' has no non-modifier key")]
    MissingKey(String),
    #[error("Failed to register hotkey '{0}': {1}")]
    Register(String, String),
    #[error("Failed to unregister hotkeys: {0}")]
    Unregister(String),
}

/// Parse a combo string like "r" or "ctrl+shift+q" into a hotkey
pub fn parse_combo(combo: &str) -> Result<HotKey, HotkeyError> {
    let mut modifiers = Modifiers::empty();
    let mut key = None;

    for token in combo.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "shift" => modifiers |= Modifiers::SHIFT,
            "alt" => modifiers |= Modifiers::ALT,
            "super" | "cmd" | "win" => modifiers |= Modifiers::SUPER,
            other => {
                let code = key_code(other)
                    .ok_or_else(|| HotkeyError::UnknownKey(other.into(), combo.into()))?;
                key = Some(code);
            }
        }
    }

    let code = key.ok_or_else(|| HotkeyError::MissingKey(combo.into()))?;
    let mods = (!modifiers.is_empty()).then_some(modifiers);
    Ok(HotKey::new(mods, code))
}

fn key_code(token: &str) -> Option<Code> {
    let code = match token {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "esc" | "escape" => Code::Escape,
        "up" => Code::ArrowUp,
        "down" => Code::ArrowDown,
        "left" => Code::ArrowLeft,
        "right" => Code::ArrowRight,
        _ => return None,
    };
    Some(code)
}

/// Registered hotkeys mapped to caller-supplied action ids
pub struct HotkeyBindings<A> {
    manager: GlobalHotKeyManager,
    bound: Vec<(HotKey, A)>,
}

impl<A: Copy> HotkeyBindings<A> {
    pub fn new() -> Result<Self, HotkeyError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| HotkeyError::Manager(e.to_string()))?;
        Ok(Self {
            manager,
            bound: Vec::new(),
        })
    }

    /// Parse and register a combo, remembering which action it fires
    pub fn register(&mut self, combo: &str, action: A) -> Result<(), HotkeyError> {
        let hotkey = parse_combo(combo)?;
        self.manager
            .register(hotkey)
            .map_err(|e| HotkeyError::Register(combo.into(), e.to_string()))?;
        debug!("Registered hotkey '{}'", combo);
        self.bound.push((hotkey, action));
        Ok(())
    }

    /// Full unhook pass, used before rebinding and at shutdown
    pub fn unregister_all(&mut self) -> Result<(), HotkeyError> {
        let hotkeys: Vec<HotKey> = self.bound.iter().map(|(hk, _)| *hk).collect();
        self.bound.clear();
        if hotkeys.is_empty() {
            return Ok(());
        }
        self.manager
            .unregister_all(&hotkeys)
            .map_err(|e| HotkeyError::Unregister(e.to_string()))
    }

    /// Resolve an incoming event id to its bound action
    pub fn action(&self, event_id: u32) -> Option<A> {
        self.bound
            .iter()
            .find(|(hk, _)| hk.id() == event_id)
            .map(|&(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let hotkey = parse_combo("r").unwrap();
        assert_eq!(hotkey, HotKey::new(None, Code::KeyR));
    }

    #[test]
    fn test_parse_with_modifiers() {
        let hotkey = parse_combo("ctrl+shift+q").unwrap();
        assert_eq!(
            hotkey,
            HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyQ)
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_combo("Ctrl+Shift+R").unwrap(),
            parse_combo("ctrl+shift+r").unwrap()
        );
    }

    #[test]
    fn test_parse_function_and_named_keys() {
        assert_eq!(parse_combo("f5").unwrap(), HotKey::new(None, Code::F5));
        assert_eq!(
            parse_combo("alt+space").unwrap(),
            HotKey::new(Some(Modifiers::ALT), Code::Space)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(matches!(
            parse_combo("ctrl+bogus"),
            Err(HotkeyError::UnknownKey(..))
        ));
    }

    #[test]
    fn test_parse_rejects_modifier_only_combo() {
        assert!(matches!(
            parse_combo("ctrl+shift"),
            Err(HotkeyError::MissingKey(..))
        ));
    }
}
