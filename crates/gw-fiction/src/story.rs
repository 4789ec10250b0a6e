//! Self-contained story configurations.
//!
//! A story bundles a scene registry with everything a new playthrough
//! starts from. Different revisions of the same adventure are different
//! stories on the same engine.

use std::sync::Arc;

use gw_mechanics::StatBlock;

use crate::error::{FictionError, FictionResult};
use crate::registry::SceneRegistry;

/// Lines the engine says on the story's behalf.
#[derive(Debug, Clone)]
pub struct StockLines {
    /// Said when the player quits.
    pub farewell: String,
    /// Said when a command is not in the scene's table.
    pub unhandled: String,
    /// Said when a duel move is not recognized.
    pub bad_move: String,
}

impl Default for StockLines {
    fn default() -> Self {
        Self {
            farewell: "Goodbye!".to_string(),
            unhandled: "Nothing happens.".to_string(),
            bad_move: "That's not a move.".to_string(),
        }
    }
}

/// A validated scene graph plus the starting conditions of a playthrough.
#[derive(Debug, Clone)]
pub struct Story {
    /// Display title.
    pub title: String,
    scenes: Arc<SceneRegistry>,
    start: String,
    /// Items the player starts with.
    pub inventory: Vec<String>,
    /// The player's starting stats.
    pub stats: StatBlock,
    /// Stock lines.
    pub lines: StockLines,
}

impl Story {
    /// Create a story. Fails if `start` is not registered or the registry
    /// does not validate.
    pub fn new(
        title: impl Into<String>,
        scenes: SceneRegistry,
        start: impl Into<String>,
    ) -> FictionResult<Self> {
        let start = start.into();
        if !scenes.contains(&start) {
            return Err(FictionError::UnknownScene(start));
        }
        scenes.validate()?;
        Ok(Self {
            title: title.into(),
            scenes: Arc::new(scenes),
            start,
            inventory: Vec::new(),
            stats: StatBlock::default(),
            lines: StockLines::default(),
        })
    }

    /// Set the starting inventory.
    pub fn with_inventory(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.inventory = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the starting stats.
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    /// Set the stock lines.
    pub fn with_lines(mut self, lines: StockLines) -> Self {
        self.lines = lines;
        self
    }

    /// The scene registry.
    pub fn scenes(&self) -> &SceneRegistry {
        &self.scenes
    }

    /// A shared handle to the scene registry.
    pub fn shared_scenes(&self) -> Arc<SceneRegistry> {
        Arc::clone(&self.scenes)
    }

    /// Name of the starting scene.
    pub fn start(&self) -> &str {
        &self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn registry() -> SceneRegistry {
        SceneRegistry::new([
            Scene::new("trailer", "").go("leave", "dirt_road"),
            Scene::new("dirt_road", "").go("return", "trailer"),
        ])
        .unwrap()
    }

    #[test]
    fn builds_with_defaults() {
        let story = Story::new("Test", registry(), "trailer").unwrap();
        assert_eq!(story.start(), "trailer");
        assert_eq!(story.scenes().len(), 2);
        assert!(story.inventory.is_empty());
        assert_eq!(story.lines.farewell, "Goodbye!");
    }

    #[test]
    fn unknown_start_rejected() {
        assert!(matches!(
            Story::new("Test", registry(), "swamp"),
            Err(FictionError::UnknownScene(name)) if name == "swamp"
        ));
    }

    #[test]
    fn dangling_graph_rejected() {
        let registry = SceneRegistry::new([Scene::new("trailer", "").go("leave", "dirt_road")])
            .unwrap();
        assert!(Story::new("Test", registry, "trailer").is_err());
    }

    #[test]
    fn clones_share_the_registry() {
        let story = Story::new("Test", registry(), "trailer")
            .unwrap()
            .with_inventory(["Bag of gator jerky"]);
        let copy = story.clone();
        assert!(Arc::ptr_eq(&story.shared_scenes(), &copy.shared_scenes()));
        assert_eq!(copy.inventory, vec!["Bag of gator jerky".to_string()]);
    }
}
