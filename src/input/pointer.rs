//! Pointer device abstraction
//!
//! Wraps the `enigo` backend behind a small trait so the click pipeline can
//! be exercised against a recording mock in tests.

use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

use crate::motion::Point;

/// Mouse button selection for click plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

#[derive(Debug, thiserror::Error)]
pub enum PointerError {
    #[error("Failed to initialize input backend: {0}")]
    Init(String),
    #[error("Failed to query cursor position: {0}")]
    Position(String),
    #[error("Failed to move cursor: {0}")]
    Move(String),
    #[error("Failed to send button event: {0}")]
    ButtonEvent(String),
}

/// Cursor position query, absolute move and button press/release primitives
pub trait PointerDevice {
    fn position(&mut self) -> Result<Point, PointerError>;
    fn move_to(&mut self, point: Point) -> Result<(), PointerError>;
    fn press(&mut self, button: MouseButton) -> Result<(), PointerError>;
    fn release(&mut self, button: MouseButton) -> Result<(), PointerError>;
}

/// Production pointer backed by enigo
pub struct SystemPointer {
    enigo: Enigo,
}

impl SystemPointer {
    pub fn new() -> Result<Self, PointerError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| PointerError::Init(e.to_string()))?;
        Ok(Self { enigo })
    }
}

impl PointerDevice for SystemPointer {
    fn position(&mut self) -> Result<Point, PointerError> {
        self.enigo
            .location()
            .map(|(x, y)| Point::new(x, y))
            .map_err(|e| PointerError::Position(e.to_string()))
    }

    fn move_to(&mut self, point: Point) -> Result<(), PointerError> {
        self.enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| PointerError::Move(e.to_string()))
    }

    fn press(&mut self, button: MouseButton) -> Result<(), PointerError> {
        self.enigo
            .button(map_button(button), Direction::Press)
            .map_err(|e| PointerError::ButtonEvent(e.to_string()))
    }

    fn release(&mut self, button: MouseButton) -> Result<(), PointerError> {
        self.enigo
            .button(map_button(button), Direction::Release)
            .map_err(|e| PointerError::ButtonEvent(e.to_string()))
    }
}

fn map_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

/// Recording pointer for tests. Tracks a virtual cursor and the full event
/// stream, and can inject button faults to exercise failure paths.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockPointer {
    pub position: Point,
    pub events: Vec<PointerEvent>,
    pub fail_buttons: bool,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    MoveTo(Point),
    Press(MouseButton),
    Release(MouseButton),
}

#[cfg(test)]
impl MockPointer {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            ..Default::default()
        }
    }

    /// The cursor position at the moment the first press was issued
    pub fn position_at_press(&self) -> Option<Point> {
        let mut cursor = None;
        for event in &self.events {
            match event {
                PointerEvent::MoveTo(p) => cursor = Some(*p),
                PointerEvent::Press(_) => return cursor,
                PointerEvent::Release(_) => {}
            }
        }
        None
    }
}

#[cfg(test)]
impl PointerDevice for MockPointer {
    fn position(&mut self) -> Result<Point, PointerError> {
        Ok(self.position)
    }

    fn move_to(&mut self, point: Point) -> Result<(), PointerError> {
        self.position = point;
        self.events.push(PointerEvent::MoveTo(point));
        Ok(())
    }

    fn press(&mut self, button: MouseButton) -> Result<(), PointerError> {
        if self.fail_buttons {
            return Err(PointerError::ButtonEvent("injected fault".into()));
        }
        self.events.push(PointerEvent::Press(button));
        Ok(())
    }

    fn release(&mut self, button: MouseButton) -> Result<(), PointerError> {
        if self.fail_buttons {
            return Err(PointerError::ButtonEvent("injected fault".into()));
        }
        self.events.push(PointerEvent::Release(button));
        Ok(())
    }
}
