//! Per-session state: where the player is, what they carry, and which
//! story beats have happened.

use gw_mechanics::StatBlock;

/// A named story flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The gator has shown up on the dirt road.
    SawGator,
    /// The gator's tooth is lying in the mud, waiting to be picked up.
    ToothOnGround,
    /// The gas station intro has played.
    VisitedGasStation,
    /// The cashier told Travis about the shortcut.
    HeardShortcut,
    /// Mole Cricket has been beaten.
    BeatMoleCricket,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 5] = [
        Flag::SawGator,
        Flag::ToothOnGround,
        Flag::VisitedGasStation,
        Flag::HeardShortcut,
        Flag::BeatMoleCricket,
    ];

    /// The snake_case name of the flag.
    pub fn name(self) -> &'static str {
        match self {
            Self::SawGator => "saw_gator",
            Self::ToothOnGround => "tooth_on_ground",
            Self::VisitedGasStation => "visited_gas_station",
            Self::HeardShortcut => "heard_shortcut",
            Self::BeatMoleCricket => "beat_mole_cricket",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean story flags. All start unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// See [`Flag::SawGator`].
    pub saw_gator: bool,
    /// See [`Flag::ToothOnGround`].
    pub tooth_on_ground: bool,
    /// See [`Flag::VisitedGasStation`].
    pub visited_gas_station: bool,
    /// See [`Flag::HeardShortcut`].
    pub heard_shortcut: bool,
    /// See [`Flag::BeatMoleCricket`].
    pub beat_mole_cricket: bool,
}

impl Flags {
    /// Read a flag.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::SawGator => self.saw_gator,
            Flag::ToothOnGround => self.tooth_on_ground,
            Flag::VisitedGasStation => self.visited_gas_station,
            Flag::HeardShortcut => self.heard_shortcut,
            Flag::BeatMoleCricket => self.beat_mole_cricket,
        }
    }

    /// Write a flag.
    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::SawGator => &mut self.saw_gator,
            Flag::ToothOnGround => &mut self.tooth_on_ground,
            Flag::VisitedGasStation => &mut self.visited_gas_station,
            Flag::HeardShortcut => &mut self.heard_shortcut,
            Flag::BeatMoleCricket => &mut self.beat_mole_cricket,
        };
        *slot = value;
    }

    /// The flags that are currently set.
    pub fn raised(&self) -> Vec<Flag> {
        Flag::ALL.into_iter().filter(|f| self.get(*f)).collect()
    }
}

/// The player's state for one playthrough.
#[derive(Debug, Clone)]
pub struct GameState {
    current_scene: String,
    /// Carried item labels, in the order they were picked up. Duplicates
    /// are allowed.
    pub inventory: Vec<String>,
    /// Story flags.
    pub flags: Flags,
    /// Health and duel modifiers.
    pub stats: StatBlock,
}

impl GameState {
    /// Create a state standing in `scene`.
    pub fn new(scene: impl Into<String>, inventory: Vec<String>, stats: StatBlock) -> Self {
        Self {
            current_scene: scene.into(),
            inventory,
            flags: Flags::default(),
            stats,
        }
    }

    /// Name of the scene the player is in.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    pub(crate) fn set_current_scene(&mut self, name: impl Into<String>) {
        self.current_scene = name.into();
    }

    /// Check if the player carries at least one `item`.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// How many copies of `item` the player carries.
    pub fn item_count(&self, item: &str) -> usize {
        self.inventory.iter().filter(|i| *i == item).count()
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first copy of `item`. Returns false if none was carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            "trailer",
            vec!["Bag of gator jerky".to_string()],
            StatBlock::default(),
        )
    }

    #[test]
    fn new_state() {
        let state = state();
        assert_eq!(state.current_scene(), "trailer");
        assert_eq!(state.inventory.len(), 1);
        assert_eq!(state.flags, Flags::default());
        assert!(state.flags.raised().is_empty());
    }

    #[test]
    fn flag_round_trip() {
        let mut flags = Flags::default();
        for flag in Flag::ALL {
            assert!(!flags.get(flag));
            flags.set(flag, true);
            assert!(flags.get(flag));
        }
        assert_eq!(flags.raised().len(), Flag::ALL.len());

        flags.set(Flag::ToothOnGround, false);
        assert!(!flags.tooth_on_ground);
        assert!(flags.saw_gator);
    }

    #[test]
    fn flag_names() {
        assert_eq!(Flag::SawGator.to_string(), "saw_gator");
        assert_eq!(Flag::BeatMoleCricket.name(), "beat_mole_cricket");
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut state = state();
        state.add_item("Slim Jims");
        state.add_item("Slim Jims");
        assert_eq!(state.item_count("Slim Jims"), 2);
        assert_eq!(state.inventory.len(), 3);
    }

    #[test]
    fn remove_takes_first_copy_only() {
        let mut state = state();
        state.add_item("Slim Jims");
        state.add_item("Slim Jims");

        assert!(state.remove_item("Slim Jims"));
        assert_eq!(state.item_count("Slim Jims"), 1);
        assert!(state.remove_item("Bag of gator jerky"));
        assert!(!state.remove_item("Bag of gator jerky"));
        assert!(!state.has_item("Bag of gator jerky"));
    }
}
