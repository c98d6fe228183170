//! Small readline helpers shared by the interactive commands.

use anyhow::Result;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

pub type Prompt = Editor<(), DefaultHistory>;

pub fn editor() -> Result<Prompt> {
    Ok(Editor::new()?)
}

/// Reads a single line, trimmed.
pub fn line(rl: &mut Prompt, label: &str) -> Result<String> {
    Ok(rl.readline(&format!("{label}: "))?.trim().to_string())
}

/// Reads a line pre-filled with the current value, for editing in place.
pub fn line_with_initial(rl: &mut Prompt, label: &str, current: &str) -> Result<String> {
    let input = rl.readline_with_initial(&format!("{label}: "), (current, ""))?;
    Ok(input.trim().to_string())
}

/// Asks a yes/no question; only an explicit "y"/"s" counts as yes.
pub fn confirm(rl: &mut Prompt, question: &str) -> Result<bool> {
    let answer = rl.readline(&format!("{question} [y/N]: "))?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes" || answer == "s" || answer == "si" || answer == "sí")
}
