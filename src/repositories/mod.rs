pub mod content_repository;
pub mod memory_repository;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::entities::{author, category, media, post, tag};
use crate::models::seed_model::{AuthorData, CategoryData, TagData};

pub use content_repository::ContentRepository;
pub use memory_repository::MemoryRepository;

/// Named content collections, for the generic count/delete operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Authors,
    Categories,
    Tags,
    Posts,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Authors => "authors",
            Collection::Categories => "categories",
            Collection::Tags => "tags",
            Collection::Posts => "posts",
        }
    }
}

/// A post write with all foreign keys already resolved.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published_date: Option<NaiveDate>,
    pub cover_image_id: Option<i64>,
    pub author_id: i64,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}

/// Persistence capability the seeders are written against.
///
/// Implemented by [`ContentRepository`] for a live database and by
/// [`MemoryRepository`] for tests, so the seeding logic can be exercised
/// without a running Postgres.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create_author(&self, data: &AuthorData) -> Result<author::Model, DbErr>;
    async fn create_category(&self, data: &CategoryData) -> Result<category::Model, DbErr>;
    async fn create_tag(&self, data: &TagData) -> Result<tag::Model, DbErr>;
    /// Creates the post and its tag links in one transaction.
    async fn create_post(&self, data: NewPost) -> Result<post::Model, DbErr>;

    async fn find_author_by_slug(&self, slug: &str) -> Result<Option<author::Model>, DbErr>;
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<category::Model>, DbErr>;
    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<tag::Model>, DbErr>;
    /// Exact-URL lookup against the pre-uploaded media library.
    async fn find_media_by_url(&self, url: &str) -> Result<Option<media::Model>, DbErr>;

    async fn count(&self, collection: Collection) -> Result<u64, DbErr>;
    async fn delete_all(&self, collection: Collection) -> Result<u64, DbErr>;
}
