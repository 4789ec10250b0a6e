//! Static checks and summaries over a story graph.
//!
//! Revisions of the same adventure drift: scenes lose their way in,
//! guards check for items nothing hands out. These checks surface that
//! without trying to fix it.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;
use tracing::warn;

use crate::choice::{Choice, Effect};
use crate::encounter::Encounter;
use crate::scene::Scene;
use crate::story::Story;

/// Findings of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Scenes no path from the start reaches, in definition order.
    pub unreachable: Vec<String>,
    /// Items that guards or takes ask for but no effect hands out and the
    /// player does not start with. Sorted.
    pub ungranted: Vec<String>,
}

impl Report {
    /// Returns true if nothing was found.
    pub fn is_clean(&self) -> bool {
        self.unreachable.is_empty() && self.ungranted.is_empty()
    }
}

/// Scene names reachable from the story's start, in discovery order.
pub fn reachable(story: &Story) -> Vec<&str> {
    let scenes = story.scenes();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([story.start()]);

    while let Some(name) = queue.pop_front() {
        if !seen.insert(name) {
            continue;
        }
        order.push(name);
        if let Some(scene) = scenes.get(name) {
            queue.extend(scene.targets());
        }
    }
    order
}

/// Run every check over the story.
pub fn check(story: &Story) -> Report {
    let reached: HashSet<&str> = reachable(story).into_iter().collect();
    let unreachable: Vec<String> = story
        .scenes()
        .iter()
        .filter(|s| !reached.contains(s.name.as_str()))
        .map(|s| s.name.clone())
        .collect();

    let mut granted: HashSet<&str> = story.inventory.iter().map(String::as_str).collect();
    let mut wanted: BTreeSet<&str> = BTreeSet::new();
    for scene in story.scenes().iter() {
        for effect in scene_effects(scene) {
            match effect {
                Effect::Give(item) => {
                    granted.insert(item.as_str());
                }
                Effect::Take(item) => {
                    wanted.insert(item.as_str());
                }
                _ => {}
            }
        }
        wanted.extend(scene_item_guards(scene));
    }
    let ungranted: Vec<String> = wanted
        .into_iter()
        .filter(|item| !granted.contains(item))
        .map(str::to_string)
        .collect();

    for name in &unreachable {
        warn!(story = %story.title, scene = %name, "scene is unreachable");
    }
    for item in &ungranted {
        warn!(story = %story.title, %item, "item is never granted");
    }

    Report {
        unreachable,
        ungranted,
    }
}

fn scene_effects(scene: &Scene) -> Vec<&Effect> {
    let mut effects: Vec<&Effect> = scene
        .choices()
        .iter()
        .filter_map(|(_, c)| match c {
            Choice::Action(action) => Some(action),
            Choice::Transition(_) => None,
        })
        .flat_map(|a| a.effects())
        .collect();
    if let Some(hook) = scene.hook() {
        effects.extend(hook.effects());
    }
    if let Some(encounter) = scene.encounter_def() {
        effects.extend(encounter.effects());
    }
    effects
}

fn scene_item_guards(scene: &Scene) -> Vec<&str> {
    let actions = scene
        .choices()
        .iter()
        .filter_map(|(_, c)| match c {
            Choice::Action(action) => Some(action),
            Choice::Transition(_) => None,
        })
        .chain(scene.hook());
    actions
        .flat_map(|a| a.conditions())
        .flat_map(|c| c.items())
        .collect()
}

/// One command of a scene, as listed by [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    /// The command.
    pub command: String,
    /// `transition` or `action`.
    pub kind: &'static str,
    /// Scenes the command can lead to.
    pub targets: Vec<String>,
}

/// A scene, as listed by [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneSummary {
    /// Scene name.
    pub name: String,
    /// Scene description.
    pub description: String,
    /// The command table.
    pub commands: Vec<CommandSummary>,
    /// `duel` or `refrain`, if the scene has an encounter.
    pub encounter: Option<&'static str>,
    /// True for ending scenes.
    pub ending: bool,
}

/// Summaries of every scene, in definition order.
pub fn summarize(story: &Story) -> Vec<SceneSummary> {
    story
        .scenes()
        .iter()
        .map(|scene| SceneSummary {
            name: scene.name.clone(),
            description: scene.description.clone(),
            commands: scene
                .choices()
                .iter()
                .map(|(command, choice)| CommandSummary {
                    command: command.clone(),
                    kind: match choice {
                        Choice::Transition(_) => "transition",
                        Choice::Action(_) => "action",
                    },
                    targets: choice.targets().into_iter().map(str::to_string).collect(),
                })
                .collect(),
            encounter: scene.encounter_def().map(|e| match e {
                Encounter::Duel(_) => "duel",
                Encounter::Refrain(_) => "refrain",
            }),
            ending: scene.is_ending(),
        })
        .collect()
}
