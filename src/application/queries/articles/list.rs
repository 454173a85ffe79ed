use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticlePageDto, PaginationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleStatus},
        category::CategoryId,
    },
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// `page` starts at 1. An explicit `status` wins over `include_unpublished`;
/// without either only published articles are listed.
pub struct ListArticlesQuery {
    pub status: Option<ArticleStatus>,
    pub include_unpublished: bool,
    pub page: u32,
    pub limit: u32,
}

/// Published articles filed under one category.
pub struct ListArticlesByCategoryQuery {
    pub category_id: i64,
    pub page: u32,
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePageDto> {
        let status = match (query.status, query.include_unpublished) {
            (Some(status), _) => Some(status),
            (None, true) => None,
            (None, false) => Some(ArticleStatus::Published),
        };
        let filter = ArticleFilter {
            status,
            category: None,
        };
        self.page(filter, query.page, query.limit).await
    }

    pub async fn list_articles_by_category(
        &self,
        query: ListArticlesByCategoryQuery,
    ) -> ApplicationResult<ArticlePageDto> {
        let category = CategoryId::new(query.category_id)?;
        let known = self.category_repo.find_by_ids(&[category]).await?;
        if known.is_empty() {
            return Err(ApplicationError::not_found(format!(
                "category not found: {category}"
            )));
        }

        let filter = ArticleFilter {
            status: Some(ArticleStatus::Published),
            category: Some(category),
        };
        self.page(filter, query.page, query.limit).await
    }

    async fn page(
        &self,
        filter: ArticleFilter,
        page: u32,
        limit: u32,
    ) -> ApplicationResult<ArticlePageDto> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let offset = u64::from(page - 1) * u64::from(limit);

        let total = self.read_repo.count(filter).await?;
        let articles = if offset < total {
            self.read_repo.list(filter, offset, limit).await?
        } else {
            Vec::new()
        };

        Ok(ArticlePageDto {
            articles: articles.into_iter().map(ArticleDto::from).collect(),
            pagination: PaginationDto {
                total,
                page,
                limit,
                total_pages: total.div_ceil(u64::from(limit)),
            },
        })
    }
}
