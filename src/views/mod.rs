//! HTML rendering. Every renderer is a pure function from records to markup;
//! handlers decide which fragment goes back over the wire.

pub mod cards;
pub mod forms;
pub mod lists;
pub mod pages;

use askama::Template;
use chrono::{Local, NaiveDate};

pub use cards::{ProjectCard, TodoCard, render_project_card, render_todo_card};
pub use forms::{TodoForm, render_edit_todo, render_project_form, render_todo_form};
pub use lists::{TodoList, render_project_list, render_todo_list};
pub use pages::{not_found_page, project_todos_page, projects_page};

/// Date format used for due dates and displayed creation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The local calendar date that overdue checks and new-todo defaults are relative to.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A due date strictly before `today` is overdue. Unparseable dates never are.
pub fn is_overdue(due: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(due.trim(), DATE_FORMAT).is_ok_and(|due| due < today)
}

/// Render a template, falling back to an empty fragment if rendering fails.
pub(crate) fn render(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template render failed: {e}");
        String::new()
    })
}
