use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{Todo, TodoUpdate};

pub async fn list_by_project(pool: &SqlitePool, project_id: i64) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, done, due, project_id FROM todos
         WHERE project_id = ? ORDER BY due, id",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>("SELECT id, title, done, due, project_id FROM todos WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert an open todo and return its id. A blank title is skipped and yields `None`.
pub async fn create(
    pool: &SqlitePool,
    title: &str,
    due: &str,
    project_id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO todos (title, done, due, project_id) VALUES (?, 0, ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(due)
    .bind(project_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!(todo_id = id, project_id, "Todo created");
    Ok(Some(id))
}

/// Write the present fields of `changes` in one statement.
/// Returns the number of rows touched; an unknown id touches none.
pub async fn update(pool: &SqlitePool, id: i64, changes: &TodoUpdate) -> Result<u64, sqlx::Error> {
    if changes.is_empty() {
        return Ok(0);
    }

    let mut query = QueryBuilder::<Sqlite>::new("UPDATE todos SET ");
    let mut columns = query.separated(", ");
    if let Some(title) = &changes.title {
        columns.push("title = ").push_bind_unseparated(title.as_str());
    }
    if let Some(done) = changes.done {
        columns.push("done = ").push_bind_unseparated(done);
    }
    if let Some(due) = &changes.due {
        columns.push("due = ").push_bind_unseparated(due.as_str());
    }
    query.push(" WHERE id = ").push_bind(id);

    let affected = query.build().execute(pool).await?.rows_affected();
    tracing::debug!(todo_id = id, affected, "Todo updated");
    Ok(affected)
}

/// Remove a todo. Deleting an id that is already gone is not an error.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    tracing::debug!(todo_id = id, affected, "Todo deleted");
    Ok(affected)
}

/// Flip `done` and return the refreshed row, or `None` if the todo does not exist.
pub async fn toggle_done(pool: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    let todo = sqlx::query_as::<_, Todo>(
        "UPDATE todos SET done = NOT done WHERE id = ?
         RETURNING id, title, done, due, project_id",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(todo) = &todo {
        tracing::debug!(todo_id = id, done = todo.done, "Todo toggled");
    }
    Ok(todo)
}
