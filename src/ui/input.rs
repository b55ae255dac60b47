//! Input events delivered to widgets, converted from crossterm events

use crate::state::Point;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Keys widgets react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Space,
    Escape,
    Tab,
    Char(char),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub modifiers: KeyModifiers,
}

impl KeyboardEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<KeyEvent> for KeyboardEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: event.code.into(),
            modifiers: event.modifiers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn left(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Left,
        }
    }
}

/// Everything a widget can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyboardEvent),
    PointerDown(PointerEvent),
    /// Wheel movement; positive scrolls up, negative scrolls down
    Scroll { position: Point, delta: i32 },
}

impl InputEvent {
    /// Convert a crossterm mouse event. Moves, drags and releases yield `None`.
    pub fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        let position = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(button) => Some(InputEvent::PointerDown(PointerEvent {
                position,
                button: button.into(),
            })),
            MouseEventKind::ScrollUp => Some(InputEvent::Scroll { position, delta: 1 }),
            MouseEventKind::ScrollDown => Some(InputEvent::Scroll {
                position,
                delta: -1,
            }),
            _ => None,
        }
    }

    /// Screen position for pointer-driven events
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::Key(_) => None,
            InputEvent::PointerDown(pointer) => Some(pointer.position),
            InputEvent::Scroll { position, .. } => Some(*position),
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event.into())
    }
}
