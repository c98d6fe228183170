pub mod admin;
pub mod blog;
pub mod contact;
pub mod projects;
pub mod prompt;
