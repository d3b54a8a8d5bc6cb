//! # Postboard Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;

pub use dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
