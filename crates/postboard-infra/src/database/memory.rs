//! In-memory post repository - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{Post, PostChanges};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order, which is also creation order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        tracing::debug!(post_id = %post.id, "Storing post in memory");
        store.push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn update(&self, id: String, changes: PostChanges) -> Result<Post, RepoError> {
        changes.validate()?;

        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::domain::NewPost;

    fn candidate(title: &str) -> NewPost {
        NewPost {
            author: "stswenguser".to_string(),
            title: title.to_string(),
            content: "Random content".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(candidate("My first test post")).await.unwrap();

        let found = repo.find_by_id(created.id.clone()).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_absent() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.find_by_id("1234".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let repo = InMemoryPostRepository::new();
        let err = repo.create(candidate("")).await.unwrap_err();

        assert!(matches!(err, RepoError::Validation(_)));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(candidate("My first test post")).await.unwrap();

        let changes = PostChanges {
            title: Some("Updated Title".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id.clone(), changes).await.unwrap();

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(
            repo.find_by_id(created.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryPostRepository::new();
        let err = repo
            .update("1234".to_string(), PostChanges::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(candidate("first")).await.unwrap();
        let second = repo.create(candidate("second")).await.unwrap();

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
