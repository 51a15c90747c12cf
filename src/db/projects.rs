use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Project;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, name, created FROM projects ORDER BY created DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT id, name, created FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a project and return its id. A blank name is skipped and yields `None`.
pub async fn create(pool: &SqlitePool, name: &str) -> Result<Option<i64>, sqlx::Error> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let id: i64 =
        sqlx::query_scalar("INSERT INTO projects (name, created) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;

    tracing::debug!(project_id = id, "Project created");
    Ok(Some(id))
}
