//! Hotkey application loop
//!
//! Wires the config, the global hotkey registry and the dispatcher together:
//! binds one hotkey per configured action plus the fixed control combos,
//! then idles on the hotkey event receiver until the quit combo fires.
//! Reloading rebinds everything from a freshly loaded config and falls back
//! to the previous config if rebinding fails.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use log::{error, info, warn};

use crate::config::{Config, ConfigHandle};
use crate::dispatch::{Action, Dispatcher};
use crate::input::{HotkeyBindings, SystemPointer};

/// Fixed control combos, not user-configurable
const QUIT_COMBO: &str = "ctrl+shift+q";
const RELOAD_COMBO: &str = "ctrl+shift+r";

/// Idle-loop poll interval
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a registered hotkey is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Game(Action),
    Quit,
    Reload,
}

pub struct App {
    config_path: PathBuf,
    config: ConfigHandle,
    bindings: HotkeyBindings<Binding>,
    dispatcher: Dispatcher<SystemPointer>,
    running: bool,
}

impl App {
    /// Load the config and claim the OS collaborators. Failing to reach the
    /// hotkey hook or the mouse backend is an unrecoverable startup error;
    /// anything already bound is unhooked before returning it.
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let config = ConfigHandle::new(Config::load_or_create(&config_path));
        let bindings = HotkeyBindings::new().context("Failed to create global hotkey manager")?;
        let device = SystemPointer::new().context("Failed to initialize mouse backend")?;

        let mut app = Self {
            config_path,
            dispatcher: Dispatcher::new(config.clone(), device),
            config,
            bindings,
            running: true,
        };
        if let Err(e) = app.bind_all() {
            let _ = app.bindings.unregister_all();
            return Err(e);
        }
        Ok(app)
    }

    /// Full unhook, then bind every configured action and the control
    /// combos. A single action failing to bind is a warning; losing the
    /// control combos is an error because the process would be unstoppable.
    fn bind_all(&mut self) -> Result<()> {
        if let Err(e) = self.bindings.unregister_all() {
            warn!("Failed to clear previous hotkeys: {}", e);
        }

        let config = self.config.snapshot();
        for action in Action::ALL {
            match config.hotkeys.get(action.hotkey_key()) {
                Some(combo) => {
                    if let Err(e) = self.bindings.register(combo, Binding::Game(action)) {
                        warn!("Failed to bind {}: {}", action.label(), e);
                    }
                }
                None => warn!("No hotkey configured for {}", action.hotkey_key()),
            }
        }

        self.bindings
            .register(QUIT_COMBO, Binding::Quit)
            .context("Failed to bind quit hotkey")?;
        self.bindings
            .register(RELOAD_COMBO, Binding::Reload)
            .context("Failed to bind reload hotkey")?;
        Ok(())
    }

    /// Reload the config file, swap the shared handle and rebind. If the new
    /// bindings cannot be applied, the previous config is restored.
    fn reload(&mut self) {
        info!("Reloading config...");
        let previous = self.config.snapshot();
        self.config.replace(Config::load_or_create(&self.config_path));

        if let Err(e) = self.bind_all() {
            error!("Failed to rebind hotkeys: {}", e);
            self.config.replace((*previous).clone());
            if let Err(e) = self.bind_all() {
                error!("Failed to restore previous bindings: {}", e);
            }
            return;
        }
        info!("Config reloaded successfully");
        self.print_keybinds();
    }

    /// Human-readable keybind listing, shown on startup and after reloads
    pub fn print_keybinds(&self) {
        let config = self.config.snapshot();
        println!("\nCurrent Keybinds:");
        println!("-----------------");
        for action in Action::ALL {
            let combo = config
                .hotkeys
                .get(action.hotkey_key())
                .map(String::as_str)
                .unwrap_or("<unbound>");
            println!("{:<15}: {}", action.label(), combo);
        }
        println!("\nControl Hotkeys:");
        println!("{}: Quit", QUIT_COMBO);
        println!("{}: Reload config", RELOAD_COMBO);
        println!("-----------------");
    }

    /// Idle loop: poll the hotkey event receiver until the quit combo flips
    /// the running flag, then unhook everything. In-flight actions always
    /// run to completion; key events only ever arrive between them.
    pub fn run(&mut self) {
        println!("\nTavern hotkeys running...");
        self.print_keybinds();

        let receiver = GlobalHotKeyEvent::receiver();
        while self.running {
            match receiver.recv_timeout(POLL_INTERVAL) {
                Ok(event) if event.state == HotKeyState::Pressed => self.handle(event.id),
                _ => {}
            }
        }

        if let Err(e) = self.bindings.unregister_all() {
            warn!("Failed to unbind hotkeys at shutdown: {}", e);
        }
    }

    fn handle(&mut self, event_id: u32) {
        match self.bindings.action(event_id) {
            Some(Binding::Game(action)) => self.dispatcher.dispatch(action),
            Some(Binding::Quit) => {
                info!("Stopping hotkey listener");
                self.running = false;
            }
            Some(Binding::Reload) => self.reload(),
            None => {}
        }
    }
}
