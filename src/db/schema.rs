use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;

use crate::db;

/// Create the tables if they do not exist yet.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Populate an empty store with a sample project so the board is not blank
/// on first launch. Returns the sample project's id when seeding happened.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    today: NaiveDate,
) -> Result<Option<i64>, sqlx::Error> {
    if !db::projects::list(pool).await?.is_empty() {
        return Ok(None);
    }

    let Some(project_id) = db::projects::create(pool, "Sample Project").await? else {
        return Ok(None);
    };

    let due = today.format("%Y-%m-%d").to_string();
    db::todos::create(pool, "Learn the project board", &due, project_id).await?;
    db::todos::create(pool, "Build something awesome", &due, project_id).await?;

    tracing::info!(project_id, "Seeded sample project");
    Ok(Some(project_id))
}
