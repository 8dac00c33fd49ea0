//! A single dart as entered by the scorer: face value and ring multiplier.

use crate::models::game::GameError;
use serde::{Deserialize, Serialize};

/// Outer bull face value.
pub const OUTER_BULL: u8 = 25;
/// Inner bull face value.
pub const INNER_BULL: u8 = 50;

/// Board numbers clockwise from the top.
pub const DARTBOARD_ORDER: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// A validated throw. Misses and bulls always carry multiplier 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Throw {
    pub face: u8,
    pub multiplier: u8,
}

impl Throw {
    /// Validate a raw (face, multiplier) pair.
    ///
    /// Faces are 0 (miss), 1..=20, 25 or 50; multipliers are 1..=3.
    pub fn new(face: u8, multiplier: u8) -> Result<Self, GameError> {
        let face_ok = matches!(face, 0..=20 | OUTER_BULL | INNER_BULL);
        if !face_ok || !(1..=3).contains(&multiplier) {
            return Err(GameError::InvalidThrowValue { face, multiplier });
        }
        let multiplier = if face == 0 || Self::is_bull_face(face) {
            1
        } else {
            multiplier
        };
        Ok(Self { face, multiplier })
    }

    /// Shorthand for a single-ring hit (or a miss with face 0).
    pub fn single(face: u8) -> Result<Self, GameError> {
        Self::new(face, 1)
    }

    fn is_bull_face(face: u8) -> bool {
        face == OUTER_BULL || face == INNER_BULL
    }

    pub fn is_miss(&self) -> bool {
        self.face == 0
    }

    pub fn is_bull(&self) -> bool {
        Self::is_bull_face(self.face)
    }

    /// The board number hit (1..=20), if any.
    pub fn number(&self) -> Option<u8> {
        (1..=20).contains(&self.face).then_some(self.face)
    }

    /// Face times multiplier.
    pub fn points(&self) -> u32 {
        u32::from(self.face) * u32::from(self.multiplier)
    }

    /// Scoreboard label: `MISS`, `OUTER`, `BULL`, `7`, `D7`, `T7`.
    pub fn label(&self) -> String {
        match (self.face, self.multiplier) {
            (0, _) => "MISS".to_string(),
            (OUTER_BULL, _) => "OUTER".to_string(),
            (INNER_BULL, _) => "BULL".to_string(),
            (n, 2) => format!("D{n}"),
            (n, 3) => format!("T{n}"),
            (n, _) => n.to_string(),
        }
    }
}

/// The two numbers either side of `number` on the board, or None for a non-board number.
pub fn board_neighbors(number: u8) -> Option<(u8, u8)> {
    let pos = DARTBOARD_ORDER.iter().position(|&n| n == number)?;
    let len = DARTBOARD_ORDER.len();
    Some((
        DARTBOARD_ORDER[(pos + len - 1) % len],
        DARTBOARD_ORDER[(pos + 1) % len],
    ))
}
