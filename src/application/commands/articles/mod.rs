// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod fields;
mod publish;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
