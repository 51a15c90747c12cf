pub mod projects;
pub mod schema;
pub mod todos;
