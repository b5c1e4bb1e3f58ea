//! Repositories for database operations

pub mod author;
pub mod user;

pub use author::AuthorRepository;
pub use user::UserRepository;
