//! Encounters: input-driven mini-games attached to a scene.
//!
//! While an encounter is active it receives every line of input instead of
//! the scene's command table. A duel rolls dice until one side runs out of
//! health; a refrain makes the player echo a list of lines.

use gw_mechanics::{DiceSource, Duel, DuelOutcome, DuelSpec};
use tracing::debug;

use crate::choice::{Effect, apply_all};
use crate::error::FictionResult;
use crate::narration::{Event, Narration};
use crate::state::GameState;
use crate::story::StockLines;

/// A duel plus what happens when it is decided.
#[derive(Debug, Clone)]
pub struct DuelEncounter {
    /// The duel's parameters.
    pub spec: DuelSpec,
    /// Prompt shown while waiting for a move.
    pub prompt: String,
    /// Narrated after a landed move.
    pub hit_line: Option<String>,
    /// Narrated after a missed move.
    pub miss_line: Option<String>,
    /// Applied when the opponent runs out of health.
    pub on_victory: Vec<Effect>,
    /// Applied when the player runs out of health.
    pub on_defeat: Vec<Effect>,
}

impl DuelEncounter {
    /// Create a duel encounter with the default prompt and no outcomes.
    pub fn new(spec: DuelSpec) -> Self {
        Self {
            spec,
            prompt: "Your move?".to_string(),
            hit_line: None,
            miss_line: None,
            on_victory: Vec::new(),
            on_defeat: Vec::new(),
        }
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the lines narrated after each hit and miss.
    pub fn with_flavor(mut self, hit: impl Into<String>, miss: impl Into<String>) -> Self {
        self.hit_line = Some(hit.into());
        self.miss_line = Some(miss.into());
        self
    }

    /// Set the victory effects.
    pub fn on_victory(mut self, effects: Vec<Effect>) -> Self {
        self.on_victory = effects;
        self
    }

    /// Set the defeat effects.
    pub fn on_defeat(mut self, effects: Vec<Effect>) -> Self {
        self.on_defeat = effects;
        self
    }
}

/// A call-and-response: the player has to echo every line.
#[derive(Debug, Clone)]
pub struct Refrain {
    /// The lines, in order. Comparison ignores case.
    pub lines: Vec<String>,
    /// Applied once every line was echoed.
    pub on_success: Vec<Effect>,
    /// Applied on the first wrong line.
    pub on_failure: Vec<Effect>,
}

impl Refrain {
    /// Create a refrain over `lines` with no outcomes.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            on_success: Vec::new(),
            on_failure: Vec::new(),
        }
    }

    /// Set the success effects.
    pub fn on_success(mut self, effects: Vec<Effect>) -> Self {
        self.on_success = effects;
        self
    }

    /// Set the failure effects.
    pub fn on_failure(mut self, effects: Vec<Effect>) -> Self {
        self.on_failure = effects;
        self
    }
}

/// An encounter definition.
#[derive(Debug, Clone)]
pub enum Encounter {
    /// A dice duel.
    Duel(DuelEncounter),
    /// A call-and-response.
    Refrain(Refrain),
}

impl Encounter {
    /// Every effect either outcome can apply.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        let (a, b) = match self {
            Self::Duel(d) => (&d.on_victory, &d.on_defeat),
            Self::Refrain(r) => (&r.on_success, &r.on_failure),
        };
        a.iter().chain(b.iter())
    }

    /// Every scene either outcome can move to.
    pub fn targets(&self) -> Vec<&str> {
        self.effects()
            .filter_map(|e| match e {
                Effect::Goto(scene) => Some(scene.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Why the encounter cannot be played, if it cannot.
    pub fn problem(&self) -> Option<String> {
        match self {
            Self::Duel(d) => d.spec.validate().err().map(|e| e.to_string()),
            Self::Refrain(r) if r.lines.is_empty() => Some("refrain has no lines".to_string()),
            Self::Refrain(r) => r
                .lines
                .iter()
                .any(|l| l.trim().is_empty())
                .then(|| "refrain has a blank line".to_string()),
        }
    }
}

/// Whether an encounter wants more input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep feeding input.
    Continue,
    /// Decided. Carries the destination, if the outcome moves the player.
    Finished(Option<String>),
}

#[derive(Debug, Clone)]
enum Progress {
    Duel(Duel),
    Refrain { next: usize },
}

/// An encounter being played.
#[derive(Debug, Clone)]
pub(crate) struct ActiveEncounter {
    def: Encounter,
    progress: Progress,
}

impl ActiveEncounter {
    pub(crate) fn start(def: &Encounter) -> Self {
        let progress = match def {
            Encounter::Duel(d) => Progress::Duel(Duel::new(d.spec.clone())),
            Encounter::Refrain(_) => Progress::Refrain { next: 0 },
        };
        Self {
            def: def.clone(),
            progress,
        }
    }

    /// What to ask the player next.
    pub(crate) fn prompt(&self) -> Option<&str> {
        match (&self.def, &self.progress) {
            (Encounter::Duel(d), _) => Some(d.prompt.as_str()),
            (Encounter::Refrain(r), Progress::Refrain { next }) => {
                r.lines.get(*next).map(String::as_str)
            }
            (Encounter::Refrain(_), Progress::Duel(_)) => None,
        }
    }

    /// Resolve a duel that is decided before any move, e.g. when the player
    /// walks in with no health left.
    pub(crate) fn settle(&self, state: &mut GameState, out: &mut Narration) -> Option<Step> {
        let (Encounter::Duel(def), Progress::Duel(duel)) = (&self.def, &self.progress) else {
            return None;
        };
        duel.outcome(&state.stats)
            .map(|outcome| Step::Finished(finish_duel(def, outcome, state, out)))
    }

    /// Feed one normalized line of input.
    pub(crate) fn step(
        &mut self,
        input: &str,
        state: &mut GameState,
        dice: &mut dyn DiceSource,
        lines: &StockLines,
        out: &mut Narration,
    ) -> FictionResult<Step> {
        match (&self.def, &mut self.progress) {
            (Encounter::Duel(def), Progress::Duel(duel)) => {
                if duel.spec().find_move(input).is_none() {
                    out.push(Event::BadMove {
                        message: lines.bad_move.clone(),
                        moves: duel
                            .spec()
                            .move_commands()
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    });
                    return Ok(Step::Continue);
                }

                let exchange = duel.exchange(input, &mut state.stats, dice)?;
                let flavor = if exchange.hit {
                    &def.hit_line
                } else {
                    &def.miss_line
                };
                out.push(Event::Exchange(exchange));
                if let Some(line) = flavor {
                    out.say(line.clone());
                }

                Ok(match duel.outcome(&state.stats) {
                    Some(outcome) => Step::Finished(finish_duel(def, outcome, state, out)),
                    None => Step::Continue,
                })
            }
            (Encounter::Refrain(def), Progress::Refrain { next }) => {
                let Some(expected) = def.lines.get(*next) else {
                    return Ok(Step::Finished(None));
                };
                if input.trim().to_lowercase() != expected.trim().to_lowercase() {
                    debug!(line = *next, "refrain missed");
                    return Ok(Step::Finished(apply_all(&def.on_failure, state, out)));
                }
                *next += 1;
                if *next == def.lines.len() {
                    debug!("refrain completed");
                    return Ok(Step::Finished(apply_all(&def.on_success, state, out)));
                }
                Ok(Step::Continue)
            }
            _ => Ok(Step::Finished(None)),
        }
    }
}

fn finish_duel(
    def: &DuelEncounter,
    outcome: DuelOutcome,
    state: &mut GameState,
    out: &mut Narration,
) -> Option<String> {
    debug!(opponent = %def.spec.opponent, ?outcome, "duel decided");
    let effects = match outcome {
        DuelOutcome::Victory => &def.on_victory,
        DuelOutcome::Defeat => &def.on_defeat,
    };
    apply_all(effects, state, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_mechanics::{ScriptedDice, Stat, StatBlock};

    fn duel_def() -> Encounter {
        Encounter::Duel(
            DuelEncounter::new(
                DuelSpec::new("Possum", 2)
                    .with_threshold(4)
                    .with_move("hiss", Stat::Charm)
                    .with_move("swat", Stat::Muscle)
                    .with_move("bribe", Stat::Hustle),
            )
            .with_flavor("The possum flinches.", "The possum bites.")
            .on_victory(vec![Effect::give("Possum Tail"), Effect::goto("porch")])
            .on_defeat(vec![Effect::RestoreHealth, Effect::goto("trailer")]),
        )
    }

    fn state() -> GameState {
        GameState::new("yard", Vec::new(), StatBlock::new(2))
    }

    #[test]
    fn bad_move_costs_nothing() {
        let def = duel_def();
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut dice = ScriptedDice::new([6]);
        let mut out = Narration::new();

        let step = enc
            .step("run", &mut state, &mut dice, &StockLines::default(), &mut out)
            .unwrap();
        assert_eq!(step, Step::Continue);
        assert_eq!(dice.remaining(), 1);
        assert!(matches!(&out.events()[0], Event::BadMove { moves, .. } if moves.len() == 3));
    }

    #[test]
    fn duel_victory_applies_effects() {
        let def = duel_def();
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut dice = ScriptedDice::new([4, 5]);
        let lines = StockLines::default();

        let mut out = Narration::new();
        assert_eq!(
            enc.step("swat", &mut state, &mut dice, &lines, &mut out)
                .unwrap(),
            Step::Continue
        );
        assert!(out.mentions("flinches"));

        let mut out = Narration::new();
        let step = enc
            .step("swat", &mut state, &mut dice, &lines, &mut out)
            .unwrap();
        assert_eq!(step, Step::Finished(Some("porch".to_string())));
        assert!(state.has_item("Possum Tail"));
    }

    #[test]
    fn duel_defeat_applies_effects() {
        let def = duel_def();
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut dice = ScriptedDice::new([1, 2]);
        let lines = StockLines::default();

        let mut out = Narration::new();
        enc.step("bribe", &mut state, &mut dice, &lines, &mut out)
            .unwrap();
        assert!(out.mentions("bites"));
        let step = enc
            .step("bribe", &mut state, &mut dice, &lines, &mut out)
            .unwrap();
        assert_eq!(step, Step::Finished(Some("trailer".to_string())));
        assert!(state.stats.health.is_full());
    }

    #[test]
    fn settle_resolves_hopeless_duel() {
        let def = duel_def();
        let enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut out = Narration::new();
        assert!(enc.settle(&mut state, &mut out).is_none());

        state.stats.health.adjust(-5);
        assert_eq!(
            enc.settle(&mut state, &mut out),
            Some(Step::Finished(Some("trailer".to_string())))
        );
    }

    #[test]
    fn refrain_walks_lines() {
        let def = Encounter::Refrain(
            Refrain::new(["DO YOU WANNA DIE?", "MAKE UP YOUR MIND"])
                .on_success(vec![Effect::give("Zippo"), Effect::goto("club_exit")])
                .on_failure(vec![Effect::say("Sour note.")]),
        );
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut dice = ScriptedDice::default();
        let lines = StockLines::default();
        let mut out = Narration::new();

        assert_eq!(enc.prompt(), Some("DO YOU WANNA DIE?"));
        assert_eq!(
            enc.step("do you wanna die?", &mut state, &mut dice, &lines, &mut out)
                .unwrap(),
            Step::Continue
        );
        assert_eq!(enc.prompt(), Some("MAKE UP YOUR MIND"));
        assert_eq!(
            enc.step("make up your mind", &mut state, &mut dice, &lines, &mut out)
                .unwrap(),
            Step::Finished(Some("club_exit".to_string()))
        );
        assert!(state.has_item("Zippo"));
    }

    #[test]
    fn refrain_matches_non_ascii_lines() {
        let def = Encounter::Refrain(
            Refrain::new(["ÉCOUTE-MOI"]).on_success(vec![Effect::give("Zippo")]),
        );
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut out = Narration::new();

        let step = enc
            .step(
                "écoute-moi",
                &mut state,
                &mut ScriptedDice::default(),
                &StockLines::default(),
                &mut out,
            )
            .unwrap();
        assert_eq!(step, Step::Finished(None));
        assert!(state.has_item("Zippo"));
    }

    #[test]
    fn refrain_fails_on_wrong_line() {
        let def = Encounter::Refrain(
            Refrain::new(["DO YOU WANNA DIE?"]).on_failure(vec![Effect::say("Sour note.")]),
        );
        let mut enc = ActiveEncounter::start(&def);
        let mut state = state();
        let mut out = Narration::new();

        let step = enc
            .step(
                "no thanks",
                &mut state,
                &mut ScriptedDice::default(),
                &StockLines::default(),
                &mut out,
            )
            .unwrap();
        assert_eq!(step, Step::Finished(None));
        assert_eq!(out.texts(), vec!["Sour note."]);
    }

    #[test]
    fn problems_are_reported() {
        assert!(duel_def().problem().is_none());
        assert!(
            Encounter::Refrain(Refrain::new(Vec::<String>::new()))
                .problem()
                .is_some()
        );
        assert!(Encounter::Refrain(Refrain::new(["  "])).problem().is_some());
        let bad = Encounter::Duel(DuelEncounter::new(DuelSpec::new("Ghost", 0)));
        assert!(bad.problem().is_some());

        let one_move = Encounter::Duel(DuelEncounter::new(
            DuelSpec::new("Possum", 2).with_move("flex", Stat::Muscle),
        ));
        assert!(one_move.problem().is_some());
        let four_moves = Encounter::Duel(DuelEncounter::new(
            DuelSpec::new("Possum", 2)
                .with_move("a", Stat::Muscle)
                .with_move("b", Stat::Charm)
                .with_move("c", Stat::Hustle)
                .with_move("d", Stat::Muscle),
        ));
        assert!(four_moves.problem().is_some());
    }

    #[test]
    fn targets_cover_both_outcomes() {
        assert_eq!(duel_def().targets(), vec!["porch", "trailer"]);
    }
}
