// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService,
    fields::{non_blank, normalize_tags, parse_platforms},
};
use crate::{
    application::{
        dto::{ArticleDto, ArticleWithPublishResults},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleStatus, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub status: ArticleStatus,
    pub tags: Vec<String>,
    pub categories: Vec<i64>,
    pub publish_platforms: Vec<String>,
    pub featured_image: Option<String>,
    pub video_url: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    excerpt: String,
    status: ArticleStatus,
    tags: Vec<String>,
    categories: Vec<i64>,
    publish_platforms: Vec<String>,
    featured_image: Option<String>,
    video_url: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub const fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn categories(mut self, categories: Vec<i64>) -> Self {
        self.categories = categories;
        self
    }

    pub fn publish_to(mut self, platform: impl Into<String>) -> Self {
        self.publish_platforms.push(platform.into());
        self
    }

    pub fn featured_image(mut self, path: impl Into<String>) -> Self {
        self.featured_image = Some(path.into());
        self
    }

    pub fn video_url(mut self, path: impl Into<String>) -> Self {
        self.video_url = Some(path.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            excerpt: self.excerpt,
            status: self.status,
            tags: self.tags,
            categories: self.categories,
            publish_platforms: self.publish_platforms,
            featured_image: self.featured_image,
            video_url: self.video_url,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleWithPublishResults> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let publish_platforms = parse_platforms(&command.publish_platforms)?;
        let category_ids = self.resolve_categories(&command.categories).await?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        let new_article = NewArticle {
            title,
            slug,
            excerpt: command.excerpt.trim().to_string(),
            content,
            status: command.status,
            featured_image: non_blank(command.featured_image),
            video_path: non_blank(command.video_url),
            tags: normalize_tags(command.tags),
            category_ids,
            publish_platforms,
            published_at: command.status.is_published().then_some(now),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");

        let results = self.publish_after_write(&created).await;
        Ok(ArticleWithPublishResults {
            success: true,
            article: ArticleDto::from(created),
            results: results.map(|r| r.into_iter().map(|(k, v)| (k, v.into())).collect()),
        })
    }
}
