//! Keyboard input handling
//!
//! Tracks which movement keys are held per paddle so that releasing one key
//! while the opposite one is still down keeps the paddle moving.

use crate::{Direction, Session, Side};

/// Key names as reported by the host, e.g. `"q"` or `"ArrowUp"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "q".to_string(),
            left_down: "a".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
        }
    }
}

impl KeyBindings {
    /// Side and direction bound to `key`. Single letters match either case.
    fn lookup(&self, key: &str) -> Option<(Side, Direction)> {
        [
            (&self.left_up, Side::Left, Direction::Up),
            (&self.left_down, Side::Left, Direction::Down),
            (&self.right_up, Side::Right, Direction::Up),
            (&self.right_down, Side::Right, Direction::Down),
        ]
        .into_iter()
        .find(|(bound, _, _)| key_matches(bound.as_str(), key))
        .map(|(_, side, dir)| (side, dir))
    }
}

fn key_matches(bound: &str, key: &str) -> bool {
    if bound.chars().count() == 1 {
        bound.eq_ignore_ascii_case(key)
    } else {
        bound == key
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    up: bool,
    down: bool,
}

impl HeldKeys {
    fn direction(self) -> Direction {
        match (self.up, self.down) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            _ => Direction::None,
        }
    }
}

/// Turns key-down/key-up events into paddle directions
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
    left: HeldKeys,
    right: HeldKeys,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Handle key down event. Returns the paddle whose direction may have changed.
    pub fn key_down(&mut self, key: &str) -> Option<(Side, Direction)> {
        self.set_held(key, true)
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) -> Option<(Side, Direction)> {
        self.set_held(key, false)
    }

    pub fn direction(&self, side: Side) -> Direction {
        self.held(side).direction()
    }

    /// Push both paddles' current directions into `session`
    pub fn apply(&self, session: &mut Session) {
        for side in [Side::Left, Side::Right] {
            session.set_paddle_velocity(side, self.direction(side));
        }
    }

    /// Forget all held keys, e.g. when the host window loses focus
    pub fn release_all(&mut self) {
        self.left = HeldKeys::default();
        self.right = HeldKeys::default();
    }

    fn set_held(&mut self, key: &str, pressed: bool) -> Option<(Side, Direction)> {
        let (side, dir) = self.bindings.lookup(key)?;
        let held = self.held_mut(side);
        match dir {
            Direction::Up => held.up = pressed,
            Direction::Down => held.down = pressed,
            Direction::None => {}
        }
        Some((side, held.direction()))
    }

    fn held(&self, side: Side) -> HeldKeys {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn held_mut(&mut self, side: Side) -> &mut HeldKeys {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use glam::IVec2;

    #[test]
    fn test_default_bindings() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("q"), Some((Side::Left, Direction::Up)));
        assert_eq!(input.key_up("q"), Some((Side::Left, Direction::None)));
        assert_eq!(input.key_down("A"), Some((Side::Left, Direction::Down)));
        assert_eq!(
            input.key_down("ArrowUp"),
            Some((Side::Right, Direction::Up))
        );
        assert_eq!(input.key_down("x"), None, "Unbound keys are ignored");
    }

    #[test]
    fn test_named_keys_are_case_sensitive() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("arrowup"), None);
    }

    #[test]
    fn test_release_after_opposite_press_keeps_moving() {
        let mut input = InputMapper::default();
        input.key_down("q");
        // Opposite key pressed before the first is released
        assert_eq!(input.key_down("a"), Some((Side::Left, Direction::None)));
        assert_eq!(input.key_up("q"), Some((Side::Left, Direction::Down)));
        assert_eq!(input.direction(Side::Left), Direction::Down);
    }

    #[test]
    fn test_sides_are_independent() {
        let mut input = InputMapper::default();
        input.key_down("q");
        input.key_down("ArrowDown");
        input.key_up("q");
        assert_eq!(input.direction(Side::Left), Direction::None);
        assert_eq!(input.direction(Side::Right), Direction::Down);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputMapper::default();
        input.key_down("q");
        input.key_down("ArrowUp");
        input.release_all();
        assert_eq!(input.direction(Side::Left), Direction::None);
        assert_eq!(input.direction(Side::Right), Direction::None);
    }

    #[test]
    fn test_custom_bindings() {
        let mut input = InputMapper::new(KeyBindings {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            ..KeyBindings::default()
        });
        assert_eq!(input.key_down("W"), Some((Side::Left, Direction::Up)));
        assert_eq!(input.key_down("q"), None);
    }

    #[test]
    fn test_apply_to_session() {
        let mut session =
            Session::with_ball(Config::new(), IVec2::new(400, 200), IVec2::ZERO).unwrap();
        let mut input = InputMapper::default();
        input.key_down("a");
        input.key_down("ArrowUp");
        input.apply(&mut session);

        assert_eq!(session.left_paddle().velocity(), IVec2::new(0, 5));
        assert_eq!(session.right_paddle().velocity(), IVec2::new(0, -5));
    }
}
