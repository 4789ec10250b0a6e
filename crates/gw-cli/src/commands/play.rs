use std::io::{self, BufRead, Write};

use colored::Colorize;
use gw_fiction::{Event, Narration, Scene, Session, SessionConfig, Status};
use tracing::debug;

pub fn run(story_name: &str, config: &SessionConfig, no_color: bool) -> Result<(), String> {
    if no_color {
        colored::control::set_override(false);
    }
    let story = super::load_story(story_name)?;

    println!("  {} {}", "Playing".bold(), story.title);
    println!("  Type 'quit' to leave.");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let (mut session, intro) =
            Session::start(story.clone(), config).map_err(|e| e.to_string())?;
        render(&session, &intro)?;

        if play_through(&mut session, &mut reader)? != Status::Ended {
            break;
        }
        print!("{} ", "Play again? (y/n)".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;
        match read_line(&mut reader)? {
            Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {
                debug!(story = %story.title, "restarting");
            }
            _ => break,
        }
    }

    Ok(())
}

/// Run the read-decide-act-render loop until the session stops taking
/// input. EOF counts as quitting.
fn play_through(session: &mut Session, reader: &mut impl BufRead) -> Result<Status, String> {
    while session.status() == Status::Playing {
        let prompt = match session.prompt() {
            Some(prompt) => prompt.to_string(),
            None => {
                let scene = session.current_scene().map_err(|e| e.to_string())?;
                print_scene(scene, true);
                "What now?".to_string()
            }
        };

        print!("{} ", prompt.bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = read_line(reader)? else {
            println!();
            return Ok(Status::Quit);
        };
        let out = session.process(&line).map_err(|e| e.to_string())?;
        render(session, &out)?;
    }
    Ok(session.status())
}

fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line)),
        Err(e) => Err(e.to_string()),
    }
}

fn print_scene(scene: &Scene, with_commands: bool) {
    println!();
    println!("{}", format!("=== {} ===", scene.name.to_uppercase()).cyan().bold());
    println!("{}", scene.description);
    if with_commands && !scene.choices().is_empty() {
        println!("What now? You can:");
        for command in scene.commands() {
            println!("- {command}");
        }
    }
}

fn render(session: &Session, out: &Narration) -> Result<(), String> {
    for event in out {
        match event {
            Event::Text(text) => println!("{text}"),
            Event::Entered { .. } => {}
            Event::ItemGained(item) => println!("  {} {item}", "+".green().bold()),
            Event::ItemLost(item) => println!("  {} {item}", "-".red().bold()),
            Event::Inventory { heading, items } => {
                println!("{heading}");
                for item in items {
                    println!("- {item}");
                }
            }
            Event::Exchange(exchange) => {
                let line = exchange.to_string();
                let line = if exchange.hit { line.green() } else { line.red() };
                println!(
                    "  {line} {}",
                    format!(
                        "[you {} | them {}]",
                        exchange.player_health, exchange.opponent_health
                    )
                    .dimmed()
                );
            }
            Event::BadMove { message, moves } => {
                println!("{}", message.yellow());
                println!("  Moves: {}", moves.join(", "));
            }
            Event::Unhandled { message, .. } => println!("{}", message.yellow()),
            Event::Ending => {
                let scene = session.current_scene().map_err(|e| e.to_string())?;
                print_scene(scene, false);
                println!();
                println!("{}", "THE END".bold());
            }
            Event::Farewell(line) => println!("{line}"),
        }
    }
    Ok(())
}
