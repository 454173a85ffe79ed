pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
