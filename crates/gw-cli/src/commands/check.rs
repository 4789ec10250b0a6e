use colored::Colorize;
use gw_fiction::analysis;

pub fn run(story_name: &str) -> Result<(), String> {
    let story = super::load_story(story_name)?;
    let report = analysis::check(&story);

    for scene in &report.unreachable {
        println!(
            "  {} scene '{scene}' cannot be reached from '{}'",
            "warning:".yellow().bold(),
            story.start()
        );
    }
    for item in &report.ungranted {
        println!(
            "  {} '{item}' is asked for but never handed out",
            "warning:".yellow().bold()
        );
    }

    if report.is_clean() {
        println!("  All checks passed for '{}'.", story.title);
    } else {
        let count = report.unreachable.len() + report.ungranted.len();
        println!(
            "  '{}' is playable with {count} warning{}.",
            story.title,
            if count == 1 { "" } else { "s" }
        );
    }
    println!(
        "  {} scenes, {} reachable",
        story.scenes().len(),
        analysis::reachable(&story).len()
    );

    Ok(())
}
