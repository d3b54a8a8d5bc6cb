use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RepoError;

/// Post entity - represents a blog post.
///
/// `id` and `created_at` are assigned once, on creation, and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated id and the current timestamp.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: new_post.author,
            title: new_post.title,
            content: new_post.content,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update. Identity and creation time are left untouched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// Candidate post supplied to a create operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Every field is required and must not be blank.
    pub fn validate(&self) -> Result<(), RepoError> {
        require_text("author", &self.author)?;
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

/// Partial update - `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }

    /// Fields that are present must not be blank.
    pub fn validate(&self) -> Result<(), RepoError> {
        if let Some(author) = &self.author {
            require_text("author", author)?;
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), RepoError> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
