use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the local article. Copies already sent to remote platforms stay where they are.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
