//! Post handlers.
//!
//! Each handler extracts its inputs, makes exactly one repository call and
//! turns the outcome into a response through [`AppError`]:
//! a value becomes `200` with the post as JSON, an explicit absence becomes an
//! empty `404`, and any failure becomes an empty `500`.

use actix_web::{HttpResponse, web};

use postboard_core::ports::{BaseRepository, PostRepository};
use postboard_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner().into()).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), body.into_inner().into())
        .await?;

    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// GET /api/posts/{id}
pub async fn find(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list_all()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}
