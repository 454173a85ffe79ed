// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use tribune_core::domain::category::{Category, CategoryId, CategoryRepository};
use tribune_core::domain::errors::DomainResult;

/// 固定のカテゴリ一覧を返すリポジトリ
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepo {
    pub fn with(entries: &[(i64, &str)]) -> Self {
        let categories = entries
            .iter()
            .map(|(id, name)| Category {
                id: CategoryId::new(*id).unwrap(),
                name: (*name).to_string(),
                slug: slug::slugify(name),
            })
            .collect();
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|category| ids.contains(&category.id))
            .cloned()
            .collect())
    }
}
