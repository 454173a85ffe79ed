use super::{
    ArticleCommandService,
    fields::{non_blank, normalize_tags, parse_platforms},
};
use crate::{
    application::{
        dto::{ArticleDto, ArticleWithPublishResults},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate,
    },
};

/// Partial update; `None` keeps the stored value. For the optional media
/// fields an empty string clears the stored value.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<i64>>,
    pub publish_platforms: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleWithPublishResults> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let original_updated_at = article.updated_at;

        self.apply_changes(&mut article, command).await?;

        let update = ArticleUpdate::from_article(&article, original_updated_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, status = %updated.status, "article updated");

        let results = self.publish_after_write(&updated).await;
        Ok(ArticleWithPublishResults {
            success: true,
            article: ArticleDto::from(updated),
            results: results.map(|r| r.into_iter().map(|(k, v)| (k, v.into())).collect()),
        })
    }

    async fn apply_changes(
        &self,
        article: &mut Article,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<()> {
        let UpdateArticleCommand {
            id: _,
            title,
            content,
            excerpt,
            status,
            tags,
            categories,
            publish_platforms,
            featured_image,
            video_url,
        } = command;
        let now = self.clock.now();

        if let Some(title) = title.map(ArticleTitle::new).transpose()? {
            if title != article.title {
                article.slug = self
                    .slug_service
                    .generate_unique_slug(&title, Some(article.id))
                    .await?;
                article.title = title;
            }
        }
        if let Some(content) = content.map(ArticleContent::new).transpose()? {
            article.content = content;
        }
        if let Some(excerpt) = excerpt {
            article.excerpt = excerpt.trim().to_string();
        }
        if let Some(tags) = tags {
            article.tags = normalize_tags(tags);
        }
        if let Some(categories) = categories {
            article.category_ids = self.resolve_categories(&categories).await?;
        }
        if let Some(platforms) = publish_platforms {
            article.publish_platforms = parse_platforms(&platforms)?;
        }
        if featured_image.is_some() {
            article.featured_image = non_blank(featured_image);
        }
        if video_url.is_some() {
            article.video_path = non_blank(video_url);
        }

        article.set_status(status.unwrap_or(article.status), now);
        Ok(())
    }
}
