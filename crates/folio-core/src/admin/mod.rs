//! The admin panel: authenticated CRUD over posts and messages.

pub mod controller;
pub mod form;

pub use controller::{AdminController, LoadReport};
pub use form::{split_tags, EditForm, DEFAULT_POST_IMAGE, DEFAULT_READ_TIME};
