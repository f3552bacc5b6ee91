//! Posts API routes

use axum::Router;
use domain_blogs::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.blogs.clone())
}
