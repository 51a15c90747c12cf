use askama::Template;
use chrono::{Local, NaiveDate};

use crate::models::{Project, Todo};
use crate::views::{DATE_FORMAT, is_overdue, render, today};

/// Display data for a single project card.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub id: i64,
    pub name: String,
    pub created: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        ProjectCard {
            id: project.id,
            name: project.name.clone(),
            created: project
                .created
                .with_timezone(&Local)
                .format(DATE_FORMAT)
                .to_string(),
        }
    }
}

/// Display data for a single todo card, with the overdue flag resolved
/// against a fixed date.
#[derive(Debug, Clone)]
pub struct TodoCard {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub due: String,
    pub overdue: bool,
}

impl TodoCard {
    pub fn new(todo: &Todo, today: NaiveDate) -> Self {
        TodoCard {
            id: todo.id,
            title: todo.title.clone(),
            done: todo.done,
            due: todo.due.clone(),
            // Finished work is never flagged.
            overdue: !todo.done && is_overdue(&todo.due, today),
        }
    }

    pub fn render(self) -> String {
        render(&TodoCardTemplate { card: self })
    }
}

#[derive(Template)]
#[template(path = "projects/card.html")]
struct ProjectCardTemplate {
    card: ProjectCard,
}

#[derive(Template)]
#[template(path = "todos/card.html")]
struct TodoCardTemplate {
    card: TodoCard,
}

pub fn render_project_card(project: &Project) -> String {
    render(&ProjectCardTemplate {
        card: ProjectCard::from(project),
    })
}

pub fn render_todo_card(todo: &Todo) -> String {
    TodoCard::new(todo, today()).render()
}
