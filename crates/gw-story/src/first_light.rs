//! The earliest revision: wake up, step outside, go back to bed.

use gw_fiction::{FictionResult, Scene, SceneRegistry, Story};

use crate::swamp;

/// Two scenes joined by plain transitions.
pub fn first_light() -> FictionResult<Story> {
    let scenes = SceneRegistry::new([
        Scene::new("trailer", swamp::TRAILER)
            .go("step outside", "dirt_road")
            .go("leave", "dirt_road"),
        Scene::new("dirt_road", swamp::DIRT_ROAD)
            .go("go back", "trailer")
            .go("return", "trailer"),
    ])?;

    Ok(Story::new("First Light", scenes, "trailer")?
        .with_inventory(swamp::starting_inventory())
        .with_stats(swamp::travis())
        .with_lines(swamp::lines()))
}
