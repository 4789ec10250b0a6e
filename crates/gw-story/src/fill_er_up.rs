//! The Fill-'Er-Up revision: the gas station, the strip club, Mole
//! Cricket and the backstage sing-along.

use gw_fiction::{
    Action, Condition, DuelEncounter, Effect, Encounter, FictionResult, Flag, Refrain, Scene,
    SceneRegistry, Story,
};
use gw_mechanics::{Die, DuelSpec, Stat};

use crate::swamp;

const TOOTH: &str = "Mysterious Gator Tooth";
const JERKY: &str = "Bag of gator jerky";
const LIP_GLOSS: &str = "Blood-Slicked Lip Gloss";
const ZIPPO: &str = "Zippo lighter with a naked lady on it";

/// The full morning, from the trailer to sunrise behind the club.
pub fn fill_er_up() -> FictionResult<Story> {
    let scenes = SceneRegistry::new([
        trailer(),
        dirt_road(),
        gas_station(),
        strip_club(),
        mole_cricket_showdown(),
        stage_backroom(),
        club_exit(),
        sunrise(),
    ])?;

    Ok(Story::new("Fill-'Er-Up", scenes, "trailer")?
        .with_inventory(swamp::starting_inventory())
        .with_stats(swamp::travis())
        .with_lines(swamp::lines()))
}

fn trailer() -> Scene {
    Scene::new("trailer", swamp::TRAILER)
        .go("step outside", "dirt_road")
        .go("leave", "dirt_road")
        .act("inventory", swamp::pockets())
        .act(
            "look in mirror",
            Action::always(vec![
                Effect::say("A golden mullet, gleaming like sunrise on the Suwannee"),
                Effect::say("Pit Viper sunglasses and a mustache sharp enough to slice jerky"),
                Effect::say(
                    "A flamingo tattoo on his right bicep with the words \u{201c}Saeva Venia\u{201d} \
                     inked beneath it",
                ),
                Effect::say("A lat spread so glorious, it was carved by ancient fanboat spirits"),
            ]),
        )
}

fn dirt_road() -> Scene {
    Scene::new("dirt_road", swamp::DIRT_ROAD)
        .go("go back", "trailer")
        .go("return", "trailer")
        .act(
            "pick up tooth",
            Action::new()
                .when(
                    Condition::Flag(Flag::ToothOnGround),
                    vec![
                        Effect::say(
                            "Travis snatches the Mysterious Gator Tooth. Probably cursed, \
                             definitely awesome.",
                        ),
                        Effect::give(TOOTH),
                        Effect::clear(Flag::ToothOnGround),
                    ],
                )
                .otherwise(vec![Effect::say("There ain't no tooth lyin' around here.")]),
        )
        .act("inventory", swamp::pockets())
        .go("go to gas station", "gas_station")
        .on_enter(Action::new().when(
            Condition::not(Condition::Flag(Flag::SawGator)),
            vec![
                Effect::say(
                    "A mysterious gator crawls from the ditch, gives Travis a wink, and coughs \
                     up a shiny tooth before disappearing back into the mud.",
                ),
                Effect::raise(Flag::SawGator),
                Effect::raise(Flag::ToothOnGround),
            ],
        ))
}

fn gas_station() -> Scene {
    Scene::new(
        "gas_station",
        "Dusty aisles of the local gas station stretch before Travis, lit by flickering \
         fluorescent tubes.",
    )
    .act(
        "buy jerky",
        Action::always(vec![
            Effect::say("Travis tosses a few crumpled bills on the counter for some Slim Jims."),
            Effect::give("Slim Jims"),
        ]),
    )
    .act(
        "talk to cashier",
        Action::new()
            .when(
                Condition::not(Condition::Flag(Flag::HeardShortcut)),
                vec![
                    Effect::say(
                        "The cashier leans in close, whisperin' about a dirt trail that'll get \
                         you to Ginnie Springs quicker than a gator on ice skates.",
                    ),
                    Effect::raise(Flag::HeardShortcut),
                ],
            )
            .otherwise(vec![Effect::say(
                "The cashier just nods, his secret already spilled.",
            )]),
    )
    .go("leave", "dirt_road")
    .act("inventory", swamp::pockets())
    .go("go to strip club", "strip_club")
    .on_enter(Action::new().when(
        Condition::not(Condition::Flag(Flag::VisitedGasStation)),
        vec![
            Effect::say(
                "Travis pushes open the smeared glass door of the Fill-'Er-Up. The air reeks of \
                 burnt coffee and diesel fumes. Behind the counter, a gap-toothed fella hawks \
                 lotto tickets and gator jerky with a grin.",
            ),
            Effect::raise(Flag::VisitedGasStation),
        ],
    ))
}

fn strip_club() -> Scene {
    Scene::new(
        "strip_club",
        "Neon signs flicker above sticky floors while the bass rattles Travis's ribs. \
         Half-interested dancers twirl as the crowd hollers.",
    )
    .act(
        "approach stage",
        Action::new()
            .when(
                Condition::Flag(Flag::BeatMoleCricket),
                vec![Effect::goto("stage_backroom")],
            )
            .otherwise(vec![Effect::goto("mole_cricket_showdown")]),
    )
    .go("leave", "dirt_road")
    .act("inventory", swamp::pockets())
}

fn mole_cricket_showdown() -> Scene {
    let spec = DuelSpec::new("Mole Cricket", 3)
        .with_die(Die::D6)
        .with_threshold(4)
        .with_move("flex lat spread", Stat::Muscle)
        .with_move("quote saeva", Stat::Charm)
        .with_move("offer jerky", Stat::Hustle);

    let duel = DuelEncounter::new(spec)
        .with_flavor(
            "Mole Cricket staggers back, vape cloud wobblin'.",
            "Mole Cricket cackles and flicks a flip-flop at Travis's shin.",
        )
        .on_victory(vec![
            Effect::say("Mole Cricket snarls: 'You ain\u{2019}t even worth suckin\u{2019} the soul out of.'"),
            Effect::give(LIP_GLOSS),
            Effect::raise(Flag::BeatMoleCricket),
            Effect::goto("stage_backroom"),
        ])
        .on_defeat(vec![
            Effect::take(JERKY),
            Effect::say("Travis moans her name in his sleep now. Saeva\u{2019}s gonna be pissed."),
            Effect::RestoreHealth,
            Effect::goto("strip_club"),
        ]);

    Scene::new(
        "mole_cricket_showdown",
        "Mole Cricket blocks the path to the stage, eyes glittering with menace.",
    )
    .on_enter(Action::always(vec![Effect::say(
        "The lights dim and a shadow slinks from the fog machine. Mole Cricket steps into \
         view: mud-slicked thighs, rhinestone flip-flops, daisy dukes from 2008, a bikini top \
         made of fishing net, and a vape cloud that smells like watermelon and shame.",
    )]))
    .encounter(Encounter::Duel(duel))
}

fn stage_backroom() -> Scene {
    let refrain = Refrain::new(["DO YOU WANNA DIE?", "MAKE UP YOUR MIND", "DO YOU WANNA HOLD HER?"])
        .on_success(vec![
            Effect::say(
                "The final chord rings out and Bubba whoops with pride, handing Travis a Zippo \
                 lighter with a naked lady on it.",
            ),
            Effect::give(ZIPPO),
            Effect::goto("club_exit"),
        ])
        .on_failure(vec![Effect::say(
            "Travis hits a sour note. Bubba frowns like a man betrayed by his own blood.",
        )]);

    Scene::new(
        "stage_backroom",
        "Heavy curtains close behind Travis as he slips into the backstage haze of cheap \
         perfume and spilled beer.",
    )
    .go("leave", "strip_club")
    .act("inventory", swamp::pockets())
    .on_enter(Action::always(vec![
        Effect::say(
            "The backstage reeks of spilled beer, sweat, and something that might be regret. \
             Bubba Slim is tuning his bass, dressed in a sleeveless tee that reads \
             \u{2018}WAP = Whiskey And Pickles.\u{2019}",
        ),
        Effect::say(
            "Bubba tells Travis he can get the lighter, but only if Travis plays \
             \u{201c}Possum Kingdom\u{201d} by the Toadies with the band.",
        ),
    ]))
    .encounter(Encounter::Refrain(refrain))
}

fn club_exit() -> Scene {
    Scene::new(
        "club_exit",
        "With the lighter in hand and the crowd still roaring, Travis steps into the muggy \
         night behind the club.",
    )
    .act(
        "head home",
        Action::new()
            .when(Condition::has_item(ZIPPO), vec![Effect::goto("sunrise")])
            .otherwise(vec![Effect::say(
                "Travis pats his pockets. No lighter, no leavin'.",
            )]),
    )
    .go("leave", "dirt_road")
    .act("inventory", swamp::pockets())
}

fn sunrise() -> Scene {
    Scene::new(
        "sunrise",
        "Travis sparks the Zippo on the trailer steps as the sun crawls up over the swamp. \
         Somewhere out in the mud, a gator winks back.",
    )
    .ending()
}
