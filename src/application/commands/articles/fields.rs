// src/application/commands/articles/fields.rs
use std::collections::BTreeSet;

use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{category::CategoryId, publishing::Platform},
};

/// Trimmed, de-duplicated tag names in their original order.
pub(super) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty() && seen.insert(tag.to_lowercase()))
        .collect()
}

pub(super) fn parse_platforms(names: &[String]) -> ApplicationResult<Vec<Platform>> {
    let mut platforms = Vec::with_capacity(names.len());
    for name in names {
        let platform = name.parse::<Platform>()?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }
    Ok(platforms)
}

pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ArticleCommandService {
    /// Every id must name an existing category.
    pub(super) async fn resolve_categories(&self, ids: &[i64]) -> ApplicationResult<Vec<CategoryId>> {
        let mut wanted = Vec::with_capacity(ids.len());
        for raw in ids {
            let id = CategoryId::new(*raw)?;
            if !wanted.contains(&id) {
                wanted.push(id);
            }
        }
        if wanted.is_empty() {
            return Ok(wanted);
        }

        let found = self.category_repo.find_by_ids(&wanted).await?;
        if let Some(missing) = wanted
            .iter()
            .find(|id| !found.iter().any(|category| category.id == **id))
        {
            return Err(ApplicationError::not_found(format!(
                "category not found: {missing}"
            )));
        }
        Ok(wanted)
    }
}
