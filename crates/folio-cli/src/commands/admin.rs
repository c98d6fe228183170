//! The interactive admin console.
//!
//! Login form, then a small command loop over the admin controller:
//! listing, creating, editing, and deleting posts, plus reviewing and
//! deleting contact messages. Deletions ask for confirmation before
//! anything reaches the gateway.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;

use folio_core::admin::LoadReport;

use crate::app::App;
use crate::commands::prompt::{self, Prompt};

pub async fn run(app: &App) -> Result<()> {
    let mut rl = prompt::editor()?;

    if app.auth.restore().await {
        if let Some(identity) = app.auth.current_identity().await {
            println!(
                "{}",
                format!("Sesión restaurada como {}", identity.username).green()
            );
        }
    }

    while !app.auth.is_authenticated().await {
        println!("{}", "Admin Login".bold());
        let username = match read_or_break(&mut rl, "Usuario")? {
            Some(value) => value,
            None => return Ok(()),
        };
        let password = match read_or_break(&mut rl, "Contraseña")? {
            Some(value) => value,
            None => return Ok(()),
        };
        match app.auth.login(&username, &password).await {
            Ok(identity) => {
                println!("{}", format!("Bienvenido, {}", identity.username).green())
            }
            Err(err) => println!("{}", err.display_message().red()),
        }
    }

    let report = app.admin.enter().await?;
    print_report(&report);
    help();

    loop {
        let line = match rl.readline("folio> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let mut parts = line.trim().split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("posts"), _) => list_posts(app).await,
            (Some("messages"), _) => list_messages(app).await,
            (Some("new"), _) => {
                app.admin.begin_create().await;
                edit_and_save(app, &mut rl).await?;
            }
            (Some("edit"), Some(id)) => {
                let post = app.admin.posts().await.into_iter().find(|p| p.id == id);
                match post {
                    Some(post) => {
                        app.admin.begin_edit(&post).await;
                        edit_and_save(app, &mut rl).await?;
                    }
                    None => println!("{}", format!("No hay post con id {id}").red()),
                }
            }
            (Some("form"), _) => {
                if app.admin.form().await.is_some() {
                    edit_and_save(app, &mut rl).await?;
                } else {
                    println!("No hay formulario abierto");
                }
            }
            (Some("delete"), Some(id)) => {
                let confirmed =
                    prompt::confirm(&mut rl, "¿Estás seguro de que quieres eliminar este post?")?;
                match app.admin.delete_post(id, confirmed).await {
                    Ok(true) => println!("{}", "Post eliminado".green()),
                    Ok(false) => println!("Eliminación cancelada"),
                    Err(err) => println!("{}", err.display_message().red()),
                }
            }
            (Some("delmsg"), Some(id)) => {
                let confirmed = prompt::confirm(&mut rl, "¿Eliminar este mensaje?")?;
                match app.admin.delete_message(id, confirmed).await {
                    Ok(true) => println!("{}", "Mensaje eliminado".green()),
                    Ok(false) => println!("Eliminación cancelada"),
                    Err(err) => println!("{}", err.display_message().red()),
                }
            }
            (Some("reload"), _) => {
                let report = app.admin.enter().await?;
                print_report(&report);
            }
            (Some("logout"), _) => {
                app.admin.exit().await;
                app.auth.logout().await;
                println!("Sesión cerrada");
                break;
            }
            (Some("help"), _) => help(),
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => {}
            (Some(other), _) => {
                println!("Comando desconocido: {other} (prueba `help`)");
            }
        }
    }

    Ok(())
}

fn read_or_break(rl: &mut Prompt, label: &str) -> Result<Option<String>> {
    match prompt::line(rl, label) {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.downcast_ref::<ReadlineError>() {
            Some(ReadlineError::Interrupted) | Some(ReadlineError::Eof) => Ok(None),
            _ => Err(err),
        },
    }
}

/// Walks the open form field by field and saves it.
///
/// On a rejected save the controller keeps the form open with the entered
/// values, so `form` resumes exactly where the user left off.
async fn edit_and_save(app: &App, rl: &mut Prompt) -> Result<()> {
    let Some(mut form) = app.admin.form().await else {
        return Ok(());
    };
    let heading = if form.is_editing() {
        "Editar Post"
    } else {
        "Nuevo Post"
    };
    println!("{}", heading.bold());

    form.title = prompt::line_with_initial(rl, "Título", &form.title)?;
    form.excerpt = prompt::line_with_initial(rl, "Extracto", &form.excerpt)?;
    form.content = prompt::line_with_initial(rl, "Contenido", &form.content)?;
    form.category = prompt::line_with_initial(rl, "Categoría", &form.category)?;
    form.tags = prompt::line_with_initial(rl, "Tags (separados por comas)", &form.tags)?;
    form.image = prompt::line_with_initial(rl, "Imagen (URL)", &form.image)?;

    match app.admin.save(form).await {
        Ok(()) => println!("{}", "Post guardado con éxito".green()),
        Err(err) => {
            println!("{}", err.display_message().red());
            println!("Los datos ingresados se conservaron; usa `form` para reintentar");
        }
    }
    Ok(())
}

async fn list_posts(app: &App) {
    let posts = app.admin.posts().await;
    if posts.is_empty() {
        println!("No hay posts");
        return;
    }
    for post in posts {
        println!(
            "{}  {}  {}  [{}]",
            post.id.bright_cyan(),
            post.date,
            post.title.bold(),
            post.tags.join(", ")
        );
    }
}

async fn list_messages(app: &App) {
    let messages = app.admin.messages().await;
    if messages.is_empty() {
        println!("No hay mensajes");
        return;
    }
    for message in messages {
        println!(
            "{}  {}  {} <{}>  {}",
            message.id.bright_cyan(),
            message.date.format("%Y-%m-%d %H:%M"),
            message.name.bold(),
            message.email,
            message.subject
        );
    }
}

fn print_report(report: &LoadReport) {
    if let Some(err) = &report.posts_error {
        println!(
            "{}",
            format!("Error al cargar los posts: {}", err.display_message()).red()
        );
    }
    if let Some(err) = &report.messages_error {
        println!(
            "{}",
            format!("Error al cargar los mensajes: {}", err.display_message()).red()
        );
    }
}

fn help() {
    println!("Comandos:");
    println!("  posts          listar posts");
    println!("  messages       listar mensajes de contacto");
    println!("  new            crear un post");
    println!("  edit <id>      editar un post");
    println!("  form           reabrir el formulario pendiente");
    println!("  delete <id>    eliminar un post");
    println!("  delmsg <id>    eliminar un mensaje");
    println!("  reload         recargar desde el servidor");
    println!("  logout         cerrar sesión");
    println!("  quit           salir");
}
