pub mod check;
pub mod play;
pub mod scenes;

use gw_fiction::Story;

/// Build the named story, or explain which ones exist.
fn load_story(name: &str) -> Result<Story, String> {
    let entry = gw_story::find(name).ok_or_else(|| {
        format!(
            "unknown story '{name}' (available: {})",
            gw_story::names().join(", ")
        )
    })?;
    (entry.build)().map_err(|e| format!("story '{name}' is broken: {e}"))
}
