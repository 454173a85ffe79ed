use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, category::CategoryRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
        }
    }
}
