use comfy_table::{ContentArrangement, Table};
use gw_fiction::analysis::{self, SceneSummary};

pub fn run(story_name: &str, json: bool) -> Result<(), String> {
    let story = super::load_story(story_name)?;
    let summaries = analysis::summarize(&story);

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Commands", "Notes"]);

    for scene in &summaries {
        table.add_row(vec![scene.name.clone(), commands_cell(scene), notes_cell(scene)]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes, starting in '{}'", summaries.len(), story.start());

    Ok(())
}

fn commands_cell(scene: &SceneSummary) -> String {
    if scene.commands.is_empty() {
        return "-".to_string();
    }
    scene
        .commands
        .iter()
        .map(|c| {
            if c.targets.is_empty() {
                c.command.clone()
            } else {
                format!("{} -> {}", c.command, c.targets.join(" | "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn notes_cell(scene: &SceneSummary) -> String {
    let mut notes: Vec<&str> = scene.encounter.into_iter().collect();
    if scene.ending {
        notes.push("ending");
    }
    if notes.is_empty() {
        "-".to_string()
    } else {
        notes.join(", ")
    }
}
