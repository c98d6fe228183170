//! Public contact form submission.

use anyhow::Result;
use colored::Colorize;

use folio_core::message::MessageDraft;

use crate::app::App;
use crate::commands::prompt;

pub async fn run(app: &App) -> Result<()> {
    let mut rl = prompt::editor()?;

    let draft = MessageDraft {
        name: prompt::line(&mut rl, "Nombre")?,
        email: prompt::line(&mut rl, "Email")?,
        subject: prompt::line(&mut rl, "Asunto")?,
        message: prompt::line(&mut rl, "Mensaje")?,
    };

    match app.content.submit_message(&draft).await {
        Ok(()) => println!("{}", "Mensaje enviado con éxito".green()),
        Err(err) => println!("{}", err.display_message().red()),
    }
    Ok(())
}
