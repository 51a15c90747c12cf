use askama::Template;
use chrono::NaiveDate;

use crate::models::Todo;
use crate::views::{DATE_FORMAT, render};

const ADD_FORM_ID: &str = "todo-input";

/// Field values for the todo add/edit form.
#[derive(Debug, Clone)]
pub struct TodoForm {
    pub form_id: String,
    pub project_id: i64,
    pub id: Option<i64>,
    pub title: String,
    pub due: String,
    pub button: String,
    pub oob: bool,
}

impl TodoForm {
    /// Blank add form with the due date defaulting to `today`.
    pub fn new(project_id: i64, today: NaiveDate) -> Self {
        TodoForm {
            form_id: ADD_FORM_ID.to_string(),
            project_id,
            id: None,
            title: String::new(),
            due: today.format(DATE_FORMAT).to_string(),
            button: "Add Todo".to_string(),
            oob: false,
        }
    }

    /// Form pre-filled from an existing todo. Submitting it updates in place.
    pub fn edit(todo: &Todo) -> Self {
        TodoForm {
            form_id: format!("todo-edit-{}", todo.id),
            project_id: todo.project_id,
            id: Some(todo.id),
            title: todo.title.clone(),
            due: todo.due.clone(),
            button: "Save".to_string(),
            oob: false,
        }
    }

    /// Mark the form for an out-of-band swap so it replaces the page's add form.
    pub fn out_of_band(mut self) -> Self {
        self.oob = true;
        self
    }

    pub fn render(self) -> String {
        render(&TodoFormTemplate { form: self })
    }
}

#[derive(Template)]
#[template(path = "projects/form.html")]
struct ProjectFormTemplate;

#[derive(Template)]
#[template(path = "todos/form.html")]
struct TodoFormTemplate {
    form: TodoForm,
}

#[derive(Template)]
#[template(path = "todos/edit.html")]
struct EditTodoTemplate {
    todo_id: i64,
    form: TodoForm,
}

pub fn render_project_form() -> String {
    render(&ProjectFormTemplate)
}

/// Add form for `project_id`, or an edit form when `todo` is given.
pub fn render_todo_form(project_id: i64, todo: Option<&Todo>, today: NaiveDate) -> String {
    match todo {
        Some(todo) => TodoForm::edit(todo).render(),
        None => TodoForm::new(project_id, today).render(),
    }
}

/// The edit form wrapped in a panel that takes over the card's element id.
pub fn render_edit_todo(todo: &Todo) -> String {
    render(&EditTodoTemplate {
        todo_id: todo.id,
        form: TodoForm::edit(todo),
    })
}
