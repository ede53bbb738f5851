//! Keyboard movement keys.

use input::intent::Direction;

/// Keyboard key that can move the camera.
///
/// Letter keys are named after their position on a US layout; hosts should
/// map physical key codes so other layouts keep the same hand position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The `W` key.
    W,
    /// The `A` key.
    A,
    /// The `S` key.
    S,
    /// The `D` key.
    D,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

bitflags! {
    /// Set of movement keys currently held down.
    #[derive(Default)]
    pub struct Keys: u8 {
        /// See [`Key::W`](enum.Key.html#variant.W).
        const W = 0b0000_0001;
        /// See [`Key::A`](enum.Key.html#variant.A).
        const A = 0b0000_0010;
        /// See [`Key::S`](enum.Key.html#variant.S).
        const S = 0b0000_0100;
        /// See [`Key::D`](enum.Key.html#variant.D).
        const D = 0b0000_1000;
        /// See [`Key::Up`](enum.Key.html#variant.Up).
        const UP = 0b0001_0000;
        /// See [`Key::Down`](enum.Key.html#variant.Down).
        const DOWN = 0b0010_0000;
        /// See [`Key::Left`](enum.Key.html#variant.Left).
        const LEFT = 0b0100_0000;
        /// See [`Key::Right`](enum.Key.html#variant.Right).
        const RIGHT = 0b1000_0000;
    }
}

impl Key {
    /// Every movement key.
    pub const ALL: [Key; 8] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
    ];

    /// Default binding: `W`/`S` and up/down arrows move forward and back,
    /// `A`/`D` and left/right arrows strafe.
    pub fn direction(self) -> Direction {
        match self {
            Key::W | Key::Up => Direction::Forward,
            Key::S | Key::Down => Direction::Back,
            Key::A | Key::Left => Direction::Left,
            Key::D | Key::Right => Direction::Right,
        }
    }

    /// Flag corresponding to this key.
    pub fn flag(self) -> Keys {
        match self {
            Key::W => Keys::W,
            Key::A => Keys::A,
            Key::S => Keys::S,
            Key::D => Keys::D,
            Key::Up => Keys::UP,
            Key::Down => Keys::DOWN,
            Key::Left => Keys::LEFT,
            Key::Right => Keys::RIGHT,
        }
    }
}

impl Keys {
    /// Returns `true` if any held key is bound to `direction`.
    pub fn holds(
        &self,
        direction: Direction,
    ) -> bool {
        Key::ALL
            .iter()
            .any(|key| key.direction() == direction && self.contains(key.flag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_share_directions() {
        assert_eq!(Key::W.direction(), Key::Up.direction());
        assert_eq!(Key::S.direction(), Direction::Back);
        assert_eq!(Key::A.direction(), Key::Left.direction());
        assert_eq!(Key::D.direction(), Direction::Right);
    }

    #[test]
    fn flags_are_distinct() {
        let all = Key::ALL.iter().fold(Keys::empty(), |acc, k| acc | k.flag());
        assert_eq!(all, Keys::all());
    }

    #[test]
    fn holds_any_bound_key() {
        let keys = Keys::UP | Keys::A;
        assert!(keys.holds(Direction::Forward));
        assert!(keys.holds(Direction::Left));
        assert!(!keys.holds(Direction::Back));
        assert!(!Keys::empty().holds(Direction::Right));
    }
}
