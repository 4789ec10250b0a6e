//! Prose and settings shared by every revision.

use gw_fiction::{Action, Effect, StockLines};
use gw_mechanics::StatBlock;

pub(crate) const TRAILER: &str = "Travis jolts awake in his single-wide temple, walls plastered with \
     gator jaws and NASCAR posters. The swamp hums like a choir of mosquitoes outside.";

pub(crate) const DIRT_ROAD: &str = "The road outside is nothing but sun-baked mud leading back toward \
     civilization. The air tastes like fried humidity.";

pub(crate) fn starting_inventory() -> [&'static str; 2] {
    ["Half-empty flask of 'shine", "Bag of gator jerky"]
}

pub(crate) fn lines() -> StockLines {
    StockLines {
        farewell: "Even swamp gods need their beauty rest. Later, gator!".to_string(),
        unhandled: "Travis scratches his head, wonderin' what that even means.".to_string(),
        bad_move: "Mole Cricket blows a watermelon cloud in his face. That ain't a move, sugar."
            .to_string(),
    }
}

/// Travis: all lats, some charm, not much hustle.
pub(crate) fn travis() -> StatBlock {
    StatBlock::new(3).with_muscle(1).with_charm(2)
}

pub(crate) fn pockets() -> Action {
    Action::always(vec![Effect::ShowInventory {
        heading: "Travis checks his pockets:".to_string(),
    }])
}
