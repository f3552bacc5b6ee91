use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestIdentifierResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{BlogError, BlogResult};
use crate::models::{BlogQuery, BlogResponse, CreateBlog, CreatedResponse, UpdateBlog};
use crate::repository::BlogRepository;
use crate::service::BlogService;

/// OpenAPI documentation for Posts API
#[derive(OpenApi)]
#[openapi(
    paths(list_blogs, create_blog, get_blog, update_blog, delete_blog),
    components(
        schemas(BlogResponse, CreateBlog, UpdateBlog, CreatedResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdentifierResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Posts", description = "Blog post management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the posts router with all HTTP endpoints
pub fn router<R: BlogRepository + 'static>(service: Arc<BlogService<R>>) -> Router {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/{id}", get(get_blog).put(update_blog).delete(delete_blog))
        .with_state(service)
}

/// Create the `/health` router backed by the repository's ping
pub fn health_router<R: BlogRepository + 'static>(service: Arc<BlogService<R>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

async fn health<R: BlogRepository>(State(service): State<Arc<BlogService<R>>>) -> Response {
    match service.health().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    error: Some(e.kind().to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// List blogs, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "",
    tag = "Posts",
    params(BlogQuery),
    responses(
        (status = 200, description = "Matching blogs", body = Vec<BlogResponse>),
        (status = 204, description = "No blogs matched"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_blogs<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Query(query): Query<BlogQuery>,
) -> BlogResult<Response> {
    match service.list_blogs(query.term.as_deref()).await {
        Ok(blogs) => {
            let body: Vec<BlogResponse> = blogs.into_iter().map(BlogResponse::from).collect();
            Ok(Json(body).into_response())
        }
        Err(BlogError::NotFound(_)) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(e) => Err(e),
    }
}

/// Create a new blog
#[utoipa::path(
    post,
    path = "",
    tag = "Posts",
    request_body = CreateBlog,
    responses(
        (status = 201, description = "Blog created", body = CreatedResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBlog>,
) -> BlogResult<impl IntoResponse> {
    let id = service.create_blog(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { data: id })))
}

/// Get a blog by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Blog ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Blog found", body = BlogResponse),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Path(id): Path<String>,
) -> BlogResult<Json<BlogResponse>> {
    let blog = service.get_blog(&id).await?;
    Ok(Json(blog.into()))
}

/// Partially update a blog
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Blog ID (24-character hex)")
    ),
    request_body = UpdateBlog,
    responses(
        (status = 200, description = "Blog after the update", body = BlogResponse),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBlog>, JsonRejection>,
) -> Result<Json<BlogResponse>, AppError> {
    let Json(input) = payload?;
    let blog = service.update_blog(input.with_id(id)).await?;
    Ok(Json(blog.into()))
}

/// Delete a blog
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Blog ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Blog as it was before deletion", body = BlogResponse),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Path(id): Path<String>,
) -> BlogResult<Json<BlogResponse>> {
    let blog = service.delete_blog(&id).await?;
    Ok(Json(blog.into()))
}
