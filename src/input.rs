//! Keyboard state snapshot and its mapping onto player intent.
//!
//! The harness polls keys once per frame into a [`MoveInput`] and applies it
//! before the player update. Both axes are reset first, then keys are applied
//! in the order `W`, `S`, `A`, `D`, so a later key wins when opposing keys are
//! held together.
use crate::player::{Axis, Player};

/// Directional key states for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of exactly four directional keys."
)]
pub struct MoveInput {
    /// Whether an "up" key (W) is held.
    pub up: bool,
    /// Whether a "down" key (S) is held.
    pub down: bool,
    /// Whether a "left" key (A) is held.
    pub left: bool,
    /// Whether a "right" key (D) is held.
    pub right: bool,
}

impl MoveInput {
    /// Builds a snapshot from a string of held `wasd` keys, ignoring case and
    /// any other characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use chase::input::MoveInput;
    /// let input = MoveInput::from_keys("Wd");
    /// assert!(input.up && input.right && !input.down && !input.left);
    /// ```
    #[must_use]
    pub fn from_keys(keys: &str) -> Self {
        keys.chars().fold(Self::default(), |mut input, key| {
            match key.to_ascii_lowercase() {
                'w' => input.up = true,
                's' => input.down = true,
                'a' => input.left = true,
                'd' => input.right = true,
                _ => {}
            }
            input
        })
    }

    /// Per-axis intent as `(horizontal, vertical)`.
    #[must_use]
    pub const fn intent(self) -> (i32, i32) {
        const fn axis(neg: bool, pos: bool) -> i32 {
            if pos {
                1
            } else if neg {
                -1
            } else {
                0
            }
        }
        (axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Resets the player's intent and applies the held keys.
    pub fn apply_to(self, player: &mut Player) {
        player.set_direction(Axis::Horizontal, 0);
        player.set_direction(Axis::Vertical, 0);

        if self.up {
            player.set_direction(Axis::Vertical, -1);
        }
        if self.down {
            player.set_direction(Axis::Vertical, 1);
        }
        if self.left {
            player.set_direction(Axis::Horizontal, -1);
        }
        if self.right {
            player.set_direction(Axis::Horizontal, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_keys(MoveInput::default(), (0, 0))]
    #[case::up(MoveInput { up: true, ..Default::default() }, (0, -1))]
    #[case::down(MoveInput { down: true, ..Default::default() }, (0, 1))]
    #[case::left(MoveInput { left: true, ..Default::default() }, (-1, 0))]
    #[case::right(MoveInput { right: true, ..Default::default() }, (1, 0))]
    #[case::down_wins(MoveInput { up: true, down: true, ..Default::default() }, (0, 1))]
    #[case::right_wins(MoveInput { left: true, right: true, ..Default::default() }, (1, 0))]
    #[case::diagonal(MoveInput { up: true, left: true, ..Default::default() }, (-1, -1))]
    fn apply_sets_intent(#[case] input: MoveInput, #[case] expected: (i32, i32)) {
        let mut player = Player::new(1500.0, 500.0, 50.0);
        player.set_direction(Axis::Horizontal, 1);
        player.set_direction(Axis::Vertical, 1);
        input.apply_to(&mut player);
        assert_eq!(
            (player.direction(Axis::Horizontal), player.direction(Axis::Vertical)),
            expected
        );
        assert_eq!(input.intent(), expected);
    }

    #[test]
    fn from_keys_ignores_unknown_characters() {
        assert_eq!(MoveInput::from_keys("x q!"), MoveInput::default());
        assert_eq!(
            MoveInput::from_keys("SA"),
            MoveInput {
                down: true,
                left: true,
                ..Default::default()
            }
        );
    }
}
