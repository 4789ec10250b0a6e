//! Clamped resource tracks (health counters).

/// A named numeric resource that is clamped between zero and max.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl Track {
    /// Create a new track starting at its maximum value.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        let max = max.max(0);
        Self {
            name: name.into(),
            current: max,
            max,
        }
    }

    /// Adjust the track by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
        self.current
    }

    /// Refill the track to its maximum.
    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Returns true once the track has been run down to zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_max() {
        let t = Track::new("Health", 3);
        assert_eq!(t.current, 3);
        assert_eq!(t.max, 3);
        assert!(t.is_full());
        assert!(!t.is_empty());
    }

    #[test]
    fn negative_max_is_floored() {
        let t = Track::new("Health", -4);
        assert_eq!(t.max, 0);
        assert!(t.is_empty());
    }

    #[test]
    fn adjust_clamps_to_max() {
        let mut t = Track::new("Health", 5);
        assert_eq!(t.adjust(10), 5);
        assert!(t.is_full());
    }

    #[test]
    fn adjust_clamps_to_zero() {
        let mut t = Track::new("Health", 5);
        assert_eq!(t.adjust(-20), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn restore_refills() {
        let mut t = Track::new("Health", 4);
        t.adjust(-3);
        t.restore();
        assert_eq!(t.current, 4);
    }

    #[test]
    fn display() {
        let t = Track::new("Mole Cricket", 3);
        assert_eq!(t.to_string(), "Mole Cricket: 3/3");
    }
}
