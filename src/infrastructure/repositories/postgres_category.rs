// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();

        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE id = ANY($1) ORDER BY id",
        )
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
