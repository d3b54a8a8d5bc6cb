//! # Postboard Core
//!
//! The domain layer of the Postboard API.
//! This crate contains the Post model and the persistence ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{NewPost, Post, PostChanges};
pub use error::RepoError;
pub use ports::{BaseRepository, PostRepository};
