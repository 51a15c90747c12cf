pub mod projects;
pub mod todos;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::SharedState;

pub fn project_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(projects::index))
        .route("/create_project", post(projects::create))
        .route("/project/{project_id}", get(projects::show))
}

pub fn todo_routes() -> Router<SharedState> {
    Router::new()
        .route("/upsert_todo", post(todos::upsert))
        .route("/toggle/{id}", post(todos::toggle))
        .route("/delete/{id}", delete(todos::delete))
        .route("/edit/{id}", get(todos::edit))
}
