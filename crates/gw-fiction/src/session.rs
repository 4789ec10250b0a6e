//! Interactive session management.

use gw_mechanics::DiceSource;
use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::encounter::{ActiveEncounter, Step};
use crate::error::{FictionError, FictionResult};
use crate::narration::{Event, Narration};
use crate::scene::{Dispatch, Scene};
use crate::state::GameState;
use crate::story::Story;

/// The command that ends a session from anywhere.
pub const QUIT: &str = "quit";

/// How many hook redirects a single transition may follow.
const MAX_REDIRECTS: usize = 16;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Still taking input.
    Playing,
    /// An ending scene was reached.
    Ended,
    /// The player quit.
    Quit,
}

/// One playthrough of a story.
pub struct Session {
    story: Story,
    state: GameState,
    encounter: Option<ActiveEncounter>,
    dice: Box<dyn DiceSource>,
    status: Status,
}

impl Session {
    /// Start a session, rolling dice from the configured RNG.
    ///
    /// Returns the session and the narration of entering the first scene.
    pub fn start(story: Story, config: &SessionConfig) -> FictionResult<(Self, Narration)> {
        let rng = config.rng();
        Self::with_dice(story, config, Box::new(rng))
    }

    /// Start a session with an explicit dice source.
    pub fn with_dice(
        story: Story,
        config: &SessionConfig,
        dice: Box<dyn DiceSource>,
    ) -> FictionResult<(Self, Narration)> {
        let start = config
            .start
            .clone()
            .unwrap_or_else(|| story.start().to_string());
        story.scenes().require(&start)?;

        let state = GameState::new(start.clone(), story.inventory.clone(), story.stats.clone());
        let mut session = Self {
            story,
            state,
            encounter: None,
            dice,
            status: Status::Playing,
        };
        debug!(story = %session.story.title, %start, "session started");

        let mut out = Narration::new();
        session.move_to(&start, &mut out)?;
        Ok((session, out))
    }

    /// The story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The player's state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the player's state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Where the session stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The scene the player is in.
    pub fn current_scene(&self) -> FictionResult<&Scene> {
        self.story.scenes().require(self.state.current_scene())
    }

    /// Returns true while an encounter is taking input.
    pub fn in_encounter(&self) -> bool {
        self.encounter.is_some()
    }

    /// The active encounter's prompt, if one is running.
    pub fn prompt(&self) -> Option<&str> {
        self.encounter.as_ref().and_then(ActiveEncounter::prompt)
    }

    /// Process one line of player input.
    ///
    /// Input is trimmed and lowercased. `quit` always ends the session;
    /// otherwise the line goes to the active encounter, or to the current
    /// scene's command table. Blank lines are ignored unless an encounter
    /// is waiting for a reply.
    pub fn process(&mut self, input: &str) -> FictionResult<Narration> {
        let command = input.trim().to_lowercase();
        let mut out = Narration::new();
        if self.status != Status::Playing || (command.is_empty() && self.encounter.is_none()) {
            return Ok(out);
        }

        if command == QUIT {
            self.status = Status::Quit;
            out.push(Event::Farewell(self.story.lines.farewell.clone()));
            return Ok(out);
        }

        if let Some(mut encounter) = self.encounter.take() {
            let step = encounter.step(
                &command,
                &mut self.state,
                self.dice.as_mut(),
                &self.story.lines,
                &mut out,
            )?;
            match step {
                Step::Continue => self.encounter = Some(encounter),
                Step::Finished(Some(next)) => self.move_to(&next, &mut out)?,
                Step::Finished(None) => {}
            }
            return Ok(out);
        }

        if self.perform_action(&command, &mut out)? == Dispatch::Unhandled {
            out.push(Event::Unhandled {
                command,
                message: self.story.lines.unhandled.clone(),
            });
        }
        Ok(out)
    }

    /// Look `command` up in the current scene and run it, following any
    /// transition it asks for.
    pub fn perform_action(&mut self, command: &str, out: &mut Narration) -> FictionResult<Dispatch> {
        let scenes = self.story.shared_scenes();
        let scene = scenes.require(self.state.current_scene())?;
        let dispatch = scene.perform_action(command, &mut self.state, out);
        trace!(scene = %scene.name, command, ?dispatch, "dispatched");
        if let Dispatch::MoveTo(target) = &dispatch {
            self.move_to(target, out)?;
        }
        Ok(dispatch)
    }

    /// Make `name` the current scene and run its entry hook.
    ///
    /// Hooks that redirect are followed. Ending scenes end the session; a
    /// scene with an encounter starts it.
    pub fn move_to(&mut self, name: &str, out: &mut Narration) -> FictionResult<()> {
        let scenes = self.story.shared_scenes();
        let mut target = name.to_string();

        for _ in 0..MAX_REDIRECTS {
            let scene = scenes.require(&target)?;
            debug!(
                from = self.state.current_scene(),
                to = %scene.name,
                flags = ?self.state.flags.raised(),
                "moving"
            );
            self.state.set_current_scene(scene.name.clone());
            self.encounter = None;
            out.push(Event::Entered {
                scene: scene.name.clone(),
            });

            if let Some(next) = scene.enter(&mut self.state, out) {
                target = next;
                continue;
            }

            if scene.is_ending() {
                debug!(scene = %scene.name, "ending reached");
                self.status = Status::Ended;
                out.push(Event::Ending);
                return Ok(());
            }

            let Some(def) = scene.encounter_def() else {
                return Ok(());
            };
            debug!(scene = %scene.name, "encounter started");
            let encounter = ActiveEncounter::start(def);
            match encounter.settle(&mut self.state, out) {
                Some(Step::Finished(Some(next))) => target = next,
                Some(_) => return Ok(()),
                None => {
                    self.encounter = Some(encounter);
                    return Ok(());
                }
            }
        }

        Err(FictionError::TransitionLoop(name.to_string()))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("story", &self.story.title)
            .field("state", &self.state)
            .field("in_encounter", &self.encounter.is_some())
            .field("status", &self.status)
            .finish()
    }
}
