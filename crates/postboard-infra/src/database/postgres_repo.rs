//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

use postboard_core::domain::{Post, PostChanges};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, read_error, write_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn update(&self, id: String, changes: PostChanges) -> Result<Post, RepoError> {
        changes.validate()?;
        tracing::debug!(post_id = %id, "Updating post");

        let existing = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(read_error)?
            .ok_or(RepoError::NotFound)?;

        if changes.is_empty() {
            return Ok(existing.into());
        }

        let mut active = existing.into_active_model();
        if let Some(author) = changes.author {
            active.author = Set(author);
        }
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let model = active.update(self.db.as_ref()).await.map_err(write_error)?;
        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(read_error)?;

        tracing::debug!(count = result.len(), "Listed posts");
        Ok(result.into_iter().map(Into::into).collect())
    }
}
