//! Keyboard Input
//!
//! Key events arrive from the host between ticks. Only three keys mean
//! anything; every other code is carried through and ignored.

use serde::{Deserialize, Serialize};

/// A keyboard key as seen by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Move left
    Left,
    /// Move right
    Right,
    /// Jump
    Jump,
    /// Any other key (raw host code)
    Other(u32),
}

impl Key {
    /// Host code for the left arrow.
    pub const CODE_LEFT: u32 = 65361;
    /// Host code for the up arrow (jump).
    pub const CODE_UP: u32 = 65362;
    /// Host code for the right arrow.
    pub const CODE_RIGHT: u32 = 65363;

    /// Map a raw host key code.
    pub fn from_code(code: u32) -> Self {
        match code {
            Self::CODE_LEFT => Key::Left,
            Self::CODE_RIGHT => Key::Right,
            Self::CODE_UP => Key::Jump,
            other => Key::Other(other),
        }
    }

    /// Raw host code for this key.
    pub fn code(self) -> u32 {
        match self {
            Key::Left => Self::CODE_LEFT,
            Key::Right => Self::CODE_RIGHT,
            Key::Jump => Self::CODE_UP,
            Key::Other(code) => code,
        }
    }
}

/// A single key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key went down
    KeyDown(Key),
    /// Key came up
    KeyUp(Key),
}

impl InputEvent {
    /// The key involved.
    pub fn key(&self) -> Key {
        match *self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key,
        }
    }
}
