use crate::domain::category::entity::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns the categories that exist among `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;

    /// Human-readable names for `ids`, used when mirroring taxonomy to remote platforms.
    async fn find_names_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<String>> {
        Ok(self
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect())
    }
}
