use axum::Form;
use axum::extract::{Path, State};
use axum::response::Html;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::views;

#[derive(Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
}

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let projects = db::projects::list(&state.pool).await?;
    Ok(Html(views::projects_page(&projects)))
}

/// Blank names are ignored; the caller always gets the current list back.
pub async fn create(
    State(state): State<SharedState>,
    Form(req): Form<CreateProject>,
) -> Result<Html<String>, AppError> {
    db::projects::create(&state.pool, &req.name).await?;

    let projects = db::projects::list(&state.pool).await?;
    Ok(Html(views::render_project_list(&projects)))
}

pub async fn show(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let project = db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    let todos = db::todos::list_by_project(&state.pool, project.id).await?;
    Ok(Html(views::project_todos_page(&project, &todos, views::today())))
}
