// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::ArticleId,
        publishing::{PublishDestination, PublishResults},
    },
};

/// Re-delivers a stored article to the given destinations, whatever its
/// saved platform selection is.
pub struct PublishArticleCommand {
    pub id: i64,
    pub destinations: Vec<PublishDestination>,
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        command: PublishArticleCommand,
    ) -> ApplicationResult<PublishResults> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.status.is_published() {
            return Err(ApplicationError::validation(
                "only published articles can be distributed",
            ));
        }

        Ok(self
            .publishing
            .publish(article.to_publish_content(), &command.destinations)
            .await)
    }
}
