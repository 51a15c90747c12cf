mod project;
mod todo;

pub use project::Project;
pub use todo::{Todo, TodoUpdate};
