//! Public blog listing.

use colored::Colorize;

use crate::app::App;

pub async fn run(app: &App, id: Option<&str>) {
    match id {
        Some(id) => show_post(app, id).await,
        None => list_posts(app).await,
    }
}

async fn list_posts(app: &App) {
    for post in app.content.posts().await {
        println!("{}  {}", post.id.bright_cyan(), post.title.bold());
        println!(
            "  {} · {} · {}",
            post.date,
            post.category.bright_cyan(),
            post.read_time
        );
        println!("  {}", post.excerpt);
        if !post.tags.is_empty() {
            println!("  [{}]", post.tags.join(", "));
        }
        println!();
    }
}

async fn show_post(app: &App, id: &str) {
    match app.content.post(id).await {
        Some(post) => {
            println!("{}", post.title.bold());
            println!(
                "{} · {} · {} · {}",
                post.author,
                post.date,
                post.category.bright_cyan(),
                post.read_time
            );
            println!();
            println!("{}", post.content);
        }
        None => println!("{}", format!("No hay post con id {id}").red()),
    }
}
