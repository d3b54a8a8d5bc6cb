//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postboard_core::{NewPost, Post, PostChanges};

/// Request to create a post.
///
/// Missing fields deserialize as empty strings; rejecting them is up to the
/// data-access layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub author: String,
    pub title: String,
    pub content: String,
}

/// Request to update any subset of a post's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A post as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            author: req.author,
            title: req.title,
            content: req.content,
        }
    }
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            author: req.author,
            title: req.title,
            content: req.content,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            title: post.title,
            content: post.content,
            date: post.created_at,
        }
    }
}
