//! The post edit form.
//!
//! One form exists at a time, scoped to the admin controller. Tags are held
//! as a single comma-delimited string while editing and only split into a
//! sequence at the submission boundary.

use crate::post::{Post, PostDraft};

/// Placeholder cover image pre-filled on a blank create form.
pub const DEFAULT_POST_IMAGE: &str =
    "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop";

/// Read time stamped on drafts; the form does not ask for it.
pub const DEFAULT_READ_TIME: &str = "5 min";

/// Transient edit state for creating or updating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// `Some(id)` when editing an existing post, `None` when creating.
    pub editing_id: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    /// Comma-delimited while editing, split on save.
    pub tags: String,
    pub image: String,
}

impl EditForm {
    /// A blank create form with the placeholder image.
    pub fn create() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            tags: String::new(),
            image: DEFAULT_POST_IMAGE.to_string(),
        }
    }

    /// A form pre-populated from an existing post.
    pub fn edit(post: &Post) -> Self {
        Self {
            editing_id: Some(post.id.clone()),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category.clone(),
            tags: post.tags.join(", "),
            image: post.image.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Normalizes the form into a gateway payload.
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            read_time: DEFAULT_READ_TIME.to_string(),
            tags: split_tags(&self.tags),
        }
    }
}

/// Splits a comma-delimited tag string, trimming entries and dropping
/// the empty ones.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "66f0a1".to_string(),
            title: "Hola".to_string(),
            excerpt: "Resumen".to_string(),
            content: "Cuerpo".to_string(),
            image: "https://example.com/a.jpg".to_string(),
            author: "Ubaldino Ramos".to_string(),
            date: "2025-07-15".to_string(),
            category: "React".to_string(),
            read_time: "5 min".to_string(),
            tags: vec!["React".to_string(), "Frontend".to_string()],
        }
    }

    #[test]
    fn split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_tags("a,,  ,b"), vec!["a", "b"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn create_form_is_blank_with_placeholder_image() {
        let form = EditForm::create();
        assert!(!form.is_editing());
        assert!(form.title.is_empty());
        assert_eq!(form.image, DEFAULT_POST_IMAGE);
    }

    #[test]
    fn edit_form_joins_tags_for_display() {
        let form = EditForm::edit(&sample_post());
        assert_eq!(form.editing_id.as_deref(), Some("66f0a1"));
        assert_eq!(form.tags, "React, Frontend");
    }

    #[test]
    fn draft_round_trips_tags_through_the_comma_string() {
        let mut form = EditForm::edit(&sample_post());
        form.tags = "a, b ,c".to_string();
        let draft = form.to_draft();
        assert_eq!(draft.tags, vec!["a", "b", "c"]);
        assert_eq!(draft.read_time, DEFAULT_READ_TIME);
    }
}
