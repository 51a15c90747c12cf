use std::fmt::Display;
use std::str::FromStr;

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Html;
use serde::{Deserialize, Deserializer, de};

use crate::db;
use crate::error::AppError;
use crate::models::TodoUpdate;
use crate::state::SharedState;
use crate::views::{self, TodoList};

#[derive(Deserialize)]
pub struct UpsertTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub due: String,
    pub project_id: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<i64>,
}

/// Create a todo, or update title and due date when `id` names a todo of
/// the submitted project.
///
/// A blank title writes nothing, as does a blank due date on create. Either
/// way the response is the project's current list plus a fresh add form.
pub async fn upsert(
    State(state): State<SharedState>,
    Form(req): Form<UpsertTodo>,
) -> Result<Html<String>, AppError> {
    let project = db::projects::find_by_id(&state.pool, req.project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", req.project_id)))?;

    let title = req.title.trim();
    let due = req.due.trim();

    if !title.is_empty() {
        match req.id {
            Some(id) => {
                let existing = db::todos::find_by_id(&state.pool, id).await?;
                if existing.is_some_and(|todo| todo.project_id == project.id) {
                    let mut changes = TodoUpdate::default().title(title);
                    if !due.is_empty() {
                        changes = changes.due(due);
                    }
                    db::todos::update(&state.pool, id, &changes).await?;
                } else {
                    tracing::debug!(todo_id = id, project_id = project.id, "Todo not in project");
                }
            }
            None if !due.is_empty() => {
                db::todos::create(&state.pool, title, due, project.id).await?;
            }
            None => tracing::debug!(project_id = project.id, "Skipping todo without due date"),
        }
    }

    let todos = db::todos::list_by_project(&state.pool, project.id).await?;
    Ok(Html(
        TodoList::new(project.id, &todos, views::today()).render_with_form_reset(),
    ))
}

/// Returns the refreshed card, or nothing if the todo is gone.
pub async fn toggle(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let todo = db::todos::toggle_done(&state.pool, id).await?;
    Ok(Html(
        todo.map(|t| views::render_todo_card(&t)).unwrap_or_default(),
    ))
}

/// Always answers with an empty body so the card is swapped away, even when
/// someone else already deleted it.
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    db::todos::delete(&state.pool, id).await?;
    Ok(Html(String::new()))
}

pub async fn edit(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let todo = db::todos::find_by_id(&state.pool, id).await?;
    Ok(Html(
        todo.map(|t| views::render_edit_todo(&t)).unwrap_or_default(),
    ))
}

/// Browsers submit absent hidden inputs as empty strings.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
