use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
    /// ISO `YYYY-MM-DD`. Kept as text so a malformed value still loads.
    pub due: String,
    pub project_id: i64,
}

/// Partial update for a todo. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub done: Option<bool>,
    pub due: Option<String>,
}

impl TodoUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none() && self.due.is_none()
    }
}
