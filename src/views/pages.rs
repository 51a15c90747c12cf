use askama::Template;
use chrono::NaiveDate;

use crate::models::{Project, Todo};
use crate::views::{ProjectCard, TodoCard, TodoForm, render};

#[derive(Template)]
#[template(path = "projects/index.html")]
struct ProjectsPage {
    cards: Vec<ProjectCard>,
}

#[derive(Template)]
#[template(path = "todos/index.html")]
struct ProjectTodosPage {
    project_name: String,
    project_id: i64,
    cards: Vec<TodoCard>,
    form: TodoForm,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage;

/// Landing page: project form and the list of projects.
pub fn projects_page(projects: &[Project]) -> String {
    render(&ProjectsPage {
        cards: projects.iter().map(ProjectCard::from).collect(),
    })
}

/// A project's page: add form and its todos.
pub fn project_todos_page(project: &Project, todos: &[Todo], today: NaiveDate) -> String {
    render(&ProjectTodosPage {
        project_name: project.name.clone(),
        project_id: project.id,
        cards: todos.iter().map(|t| TodoCard::new(t, today)).collect(),
        form: TodoForm::new(project.id, today),
    })
}

pub fn not_found_page() -> String {
    render(&NotFoundPage)
}
