pub mod forms;
pub mod models;

pub use models::{User, UserId};
