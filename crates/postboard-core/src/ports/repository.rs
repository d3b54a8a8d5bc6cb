use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the operations every store shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. `Ok(None)` means no such entity.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a fully built entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Post repository - the data-access operations behind the HTTP handlers.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// Validate the candidate, assign id and timestamp, and store it.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        new_post.validate()?;
        self.insert(Post::new(new_post)).await
    }

    /// Apply a partial update and return the full record.
    ///
    /// Fails with [`RepoError::NotFound`] when no post has this id.
    async fn update(&self, id: String, changes: PostChanges) -> Result<Post, RepoError>;

    /// All posts, oldest first.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;
}
