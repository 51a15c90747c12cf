use askama::Template;
use chrono::NaiveDate;

use crate::models::{Project, Todo};
use crate::views::{ProjectCard, TodoCard, TodoForm, render, today};

#[derive(Template)]
#[template(path = "projects/list.html")]
struct ProjectListTemplate {
    cards: Vec<ProjectCard>,
}

#[derive(Template)]
#[template(path = "todos/list.html")]
struct TodoListTemplate {
    project_id: i64,
    cards: Vec<TodoCard>,
}

#[derive(Template)]
#[template(path = "todos/upserted.html")]
struct UpsertedTemplate {
    project_id: i64,
    cards: Vec<TodoCard>,
    form: TodoForm,
}

/// The todos of one project, resolved against a fixed date.
pub struct TodoList {
    project_id: i64,
    cards: Vec<TodoCard>,
    today: NaiveDate,
}

impl TodoList {
    pub fn new(project_id: i64, todos: &[Todo], today: NaiveDate) -> Self {
        TodoList {
            project_id,
            cards: todos.iter().map(|t| TodoCard::new(t, today)).collect(),
            today,
        }
    }

    pub fn render(self) -> String {
        render(&TodoListTemplate {
            project_id: self.project_id,
            cards: self.cards,
        })
    }

    /// The list followed by a blank add form swapped out-of-band, so a
    /// successful submit also clears the inputs.
    pub fn render_with_form_reset(self) -> String {
        render(&UpsertedTemplate {
            project_id: self.project_id,
            cards: self.cards,
            form: TodoForm::new(self.project_id, self.today).out_of_band(),
        })
    }
}

pub fn render_project_list(projects: &[Project]) -> String {
    render(&ProjectListTemplate {
        cards: projects.iter().map(ProjectCard::from).collect(),
    })
}

pub fn render_todo_list(project_id: i64, todos: &[Todo]) -> String {
    TodoList::new(project_id, todos, today()).render()
}
