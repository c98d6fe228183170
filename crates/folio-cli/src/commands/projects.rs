//! Public projects listing.

use colored::Colorize;

use crate::app::App;

pub async fn run(app: &App) {
    for project in app.content.projects().await {
        println!("{}", project.title.bold());
        println!("  {}", project.description);
        println!("  {}", project.technologies.join(" · ").bright_cyan());
        println!("  {}  {}", project.live_url, project.github_url);
        println!();
    }
}
