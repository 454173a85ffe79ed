pub mod articles;
pub mod publishing;

pub use articles::{ArticleDto, ArticlePageDto, ArticleWithPublishResults, PaginationDto};
pub use publishing::{
    FeaturedImageDto, PublishContentDto, PublishDestinationDto, PublishResponse,
    PublishResultDto, PublisherAvailabilityDto,
};
