// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publishing::Platform;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

const ARTICLE_COLUMNS: &str = "SELECT a.id, a.title, a.slug, a.excerpt, a.content, a.status, \
     a.featured_image, a.video_path, a.tags, a.publish_platforms, a.published_at, a.created_at, a.updated_at, \
     COALESCE((SELECT array_agg(ac.category_id ORDER BY ac.category_id) \
               FROM article_categories ac WHERE ac.article_id = a.id), '{}') AS category_ids \
     FROM articles a";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    status: String,
    featured_image: Option<String>,
    video_path: Option<String>,
    tags: Vec<String>,
    publish_platforms: Vec<String>,
    category_ids: Vec<i64>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let publish_platforms = row
            .publish_platforms
            .iter()
            .map(|raw| {
                raw.parse::<Platform>()
                    .map_err(|err| DomainError::Persistence(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            excerpt: row.excerpt,
            content: ArticleContent::new(row.content)?,
            status: row.status.parse::<ArticleStatus>()?,
            featured_image: row.featured_image,
            video_path: row.video_path,
            tags: row.tags,
            category_ids: row
                .category_ids
                .into_iter()
                .map(CategoryId::new)
                .collect::<Result<Vec<_>, _>>()?,
            publish_platforms,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn platform_names(platforms: &[Platform]) -> Vec<String> {
    platforms.iter().map(|p| p.as_str().to_string()).collect()
}

fn raw_category_ids(ids: &[CategoryId]) -> Vec<i64> {
    ids.iter().map(|id| i64::from(*id)).collect()
}

impl PostgresArticleWriteRepository {
    async fn replace_categories(
        tx: &mut Transaction<'_, Postgres>,
        article_id: i64,
        category_ids: &[CategoryId],
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_categories WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        if category_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO article_categories (article_id, category_id)
             SELECT $1, UNNEST($2::BIGINT[]) ON CONFLICT DO NOTHING",
        )
        .bind(article_id)
        .bind(raw_category_ids(category_ids))
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn fetch_in_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_COLUMNS} WHERE a.id = $1"))
            .bind(id)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            excerpt,
            content,
            status,
            featured_image,
            video_path,
            tags,
            category_ids,
            publish_platforms,
            published_at,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, excerpt, content, status, featured_image, video_path,
                                   tags, publish_platforms, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content.as_str())
        .bind(status.as_str())
        .bind(featured_image)
        .bind(video_path)
        .bind(tags)
        .bind(platform_names(&publish_platforms))
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        Self::replace_categories(&mut tx, id, &category_ids).await?;
        let created = Self::fetch_in_tx(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            status,
            featured_image,
            video_path,
            tags,
            category_ids,
            publish_platforms,
            published_at,
            original_updated_at,
            updated_at,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);
        builder.push(", title = ");
        builder.push_bind(title.into_inner());
        builder.push(", slug = ");
        builder.push_bind(slug.into_inner());
        builder.push(", excerpt = ");
        builder.push_bind(excerpt);
        builder.push(", content = ");
        builder.push_bind(content.into_inner());
        builder.push(", status = ");
        builder.push_bind(status.as_str());
        builder.push(", featured_image = ");
        builder.push_bind(featured_image);
        builder.push(", video_path = ");
        builder.push_bind(video_path);
        builder.push(", tags = ");
        builder.push_bind(tags);
        builder.push(", publish_platforms = ");
        builder.push_bind(platform_names(&publish_platforms));
        builder.push(", published_at = ");
        builder.push_bind(published_at);
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING id");

        let updated = builder
            .build_query_scalar::<i64>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if updated.is_none() {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        Self::replace_categories(&mut tx, id, &category_ids).await?;
        let article = Self::fetch_in_tx(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_COLUMNS} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_COLUMNS} WHERE a.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(ARTICLE_COLUMNS);
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, filter: ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: ArticleFilter) {
    builder.push(" WHERE TRUE");
    if let Some(status) = filter.status {
        builder.push(" AND a.status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(category) = filter.category {
        builder.push(
            " AND EXISTS (SELECT 1 FROM article_categories ac \
             WHERE ac.article_id = a.id AND ac.category_id = ",
        );
        builder.push_bind(i64::from(category));
        builder.push(")");
    }
}
