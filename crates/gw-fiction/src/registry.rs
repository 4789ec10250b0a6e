//! The scene registry: every scene of a story, keyed by name.

use std::collections::HashMap;

use crate::error::{FictionError, FictionResult};
use crate::scene::Scene;

/// An immutable name-to-scene mapping that keeps definition order.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    scenes: Vec<Scene>,
    index: HashMap<String, usize>,
}

impl SceneRegistry {
    /// Build a registry. Fails if two scenes share a name.
    pub fn new(scenes: impl IntoIterator<Item = Scene>) -> FictionResult<Self> {
        let mut registry = Self::default();
        for scene in scenes {
            if registry.index.contains_key(&scene.name) {
                return Err(FictionError::DuplicateScene(scene.name));
            }
            registry
                .index
                .insert(scene.name.clone(), registry.scenes.len());
            registry.scenes.push(scene);
        }
        Ok(registry)
    }

    /// Look up a scene by name.
    pub fn get(&self, name: &str) -> Option<&Scene> {
        self.index.get(name).map(|&i| &self.scenes[i])
    }

    /// Look up a scene that must exist.
    pub fn require(&self, name: &str) -> FictionResult<&Scene> {
        self.get(name)
            .ok_or_else(|| FictionError::UnknownScene(name.to_string()))
    }

    /// Check if a scene is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All scenes, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if there are no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Check that every transition lands on a registered scene and every
    /// encounter can be played.
    pub fn validate(&self) -> FictionResult<()> {
        for scene in &self.scenes {
            if let Some(target) = scene.targets().into_iter().find(|t| !self.contains(t)) {
                return Err(FictionError::DanglingTarget {
                    scene: scene.name.clone(),
                    target: target.to_string(),
                });
            }
            if let Some(reason) = scene.encounter_def().and_then(|e| e.problem()) {
                return Err(FictionError::InvalidEncounter {
                    scene: scene.name.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }
}
