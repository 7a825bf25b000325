use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use std::sync::Mutex;
use uuid::Uuid;

use crate::entities::{author, category, media, post, post_tag, tag};
use crate::models::seed_model::{AuthorData, CategoryData, TagData};
use crate::repositories::{Collection, ContentStore, NewPost};

#[derive(Default)]
struct Inner {
    authors: Vec<author::Model>,
    categories: Vec<category::Model>,
    tags: Vec<tag::Model>,
    posts: Vec<post::Model>,
    post_tags: Vec<post_tag::Model>,
    media: Vec<media::Model>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process [`ContentStore`] with the same observable behavior as the
/// database-backed one: generated ids, unique slugs per collection, foreign
/// key checks, and cascading deletes.
#[derive(Default)]
pub struct MemoryRepository {
    inner: Mutex<Inner>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pre-uploaded asset, the way an editor would have uploaded
    /// one before the seeder runs.
    pub fn add_media(&self, name: &str, url: &str) -> media::Model {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let row = media::Model {
            id,
            public_id: Uuid::now_v7(),
            name: name.to_string(),
            url: url.to_string(),
            mime_type: "image/png".to_string(),
            size: 0,
            alt_text: None,
            created_at: Utc::now(),
        };
        inner.media.push(row.clone());
        row
    }

    pub fn authors(&self) -> Vec<author::Model> {
        self.inner.lock().unwrap().authors.clone()
    }

    pub fn categories(&self) -> Vec<category::Model> {
        self.inner.lock().unwrap().categories.clone()
    }

    pub fn tags(&self) -> Vec<tag::Model> {
        self.inner.lock().unwrap().tags.clone()
    }

    pub fn posts(&self) -> Vec<post::Model> {
        self.inner.lock().unwrap().posts.clone()
    }

    /// Tag ids linked to a post, in link order.
    pub fn tag_ids_for(&self, post_id: i64) -> Vec<i64> {
        self.inner
            .lock()
            .unwrap()
            .post_tags
            .iter()
            .filter(|link| link.post_id == post_id)
            .map(|link| link.tag_id)
            .collect()
    }
}

#[async_trait]
impl ContentStore for MemoryRepository {
    async fn create_author(&self, data: &AuthorData) -> Result<author::Model, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        let slug = data.resolved_slug();
        if inner.authors.iter().any(|a| a.slug == slug) {
            return Err(DbErr::Custom(format!("duplicate slug '{}' in authors", slug)));
        }
        let id = inner.next_id();
        let row = author::Model {
            id,
            public_id: Uuid::now_v7(),
            name: data.name.clone(),
            slug,
            email: data.email.clone(),
            bio: data.bio.clone(),
            created_at: Utc::now(),
        };
        inner.authors.push(row.clone());
        Ok(row)
    }

    async fn create_category(&self, data: &CategoryData) -> Result<category::Model, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        let slug = data.resolved_slug();
        if inner.categories.iter().any(|c| c.slug == slug) {
            return Err(DbErr::Custom(format!(
                "duplicate slug '{}' in categories",
                slug
            )));
        }
        let id = inner.next_id();
        let row = category::Model {
            id,
            public_id: Uuid::now_v7(),
            name: data.name.clone(),
            slug,
            description: data.description.clone(),
            created_at: Utc::now(),
        };
        inner.categories.push(row.clone());
        Ok(row)
    }

    async fn create_tag(&self, data: &TagData) -> Result<tag::Model, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        let slug = data.resolved_slug();
        if inner.tags.iter().any(|t| t.slug == slug) {
            return Err(DbErr::Custom(format!("duplicate slug '{}' in tags", slug)));
        }
        let id = inner.next_id();
        let row = tag::Model {
            id,
            public_id: Uuid::now_v7(),
            name: data.name.clone(),
            slug,
            created_at: Utc::now(),
        };
        inner.tags.push(row.clone());
        Ok(row)
    }

    async fn create_post(&self, data: NewPost) -> Result<post::Model, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        if inner.posts.iter().any(|p| p.slug == data.slug) {
            return Err(DbErr::Custom(format!(
                "duplicate slug '{}' in posts",
                data.slug
            )));
        }
        if !inner.authors.iter().any(|a| a.id == data.author_id) {
            return Err(DbErr::Custom(format!(
                "foreign key violation: author {}",
                data.author_id
            )));
        }
        if !inner.categories.iter().any(|c| c.id == data.category_id) {
            return Err(DbErr::Custom(format!(
                "foreign key violation: category {}",
                data.category_id
            )));
        }
        if let Some(media_id) = data.cover_image_id {
            if !inner.media.iter().any(|m| m.id == media_id) {
                return Err(DbErr::Custom(format!(
                    "foreign key violation: media {}",
                    media_id
                )));
            }
        }
        for tag_id in &data.tag_ids {
            if !inner.tags.iter().any(|t| t.id == *tag_id) {
                return Err(DbErr::Custom(format!(
                    "foreign key violation: tag {}",
                    tag_id
                )));
            }
        }

        let id = inner.next_id();
        let row = post::Model {
            id,
            public_id: Uuid::now_v7(),
            title: data.title,
            slug: data.slug,
            content: data.content,
            published_date: data.published_date,
            published_at: Some(Utc::now()),
            cover_image_id: data.cover_image_id,
            author_id: data.author_id,
            category_id: data.category_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        for tag_id in data.tag_ids {
            inner.post_tags.push(post_tag::Model {
                post_id: id,
                tag_id,
            });
        }
        inner.posts.push(row.clone());
        Ok(row)
    }

    async fn find_author_by_slug(&self, slug: &str) -> Result<Option<author::Model>, DbErr> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.authors.iter().find(|a| a.slug == slug).cloned())
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<category::Model>, DbErr> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<tag::Model>, DbErr> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_media_by_url(&self, url: &str) -> Result<Option<media::Model>, DbErr> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.media.iter().find(|m| m.url == url).cloned())
    }

    async fn count(&self, collection: Collection) -> Result<u64, DbErr> {
        let inner = self.inner.lock().unwrap();
        let n = match collection {
            Collection::Authors => inner.authors.len(),
            Collection::Categories => inner.categories.len(),
            Collection::Tags => inner.tags.len(),
            Collection::Posts => inner.posts.len(),
        };
        Ok(n as u64)
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, DbErr> {
        let mut inner = self.inner.lock().unwrap();
        let deleted = match collection {
            Collection::Authors => {
                let n = inner.authors.len();
                inner.authors.clear();
                // Cascade, same as the schema's ON DELETE
                inner.posts.clear();
                inner.post_tags.clear();
                n
            }
            Collection::Categories => {
                let n = inner.categories.len();
                inner.categories.clear();
                inner.posts.clear();
                inner.post_tags.clear();
                n
            }
            Collection::Tags => {
                let n = inner.tags.len();
                inner.tags.clear();
                inner.post_tags.clear();
                n
            }
            Collection::Posts => {
                let n = inner.posts.len();
                inner.posts.clear();
                inner.post_tags.clear();
                n
            }
        };
        Ok(deleted as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, slug: &str) -> AuthorData {
        AuthorData {
            name: name.to_string(),
            slug: Some(slug.to_string()),
            email: format!("{}@example.com", slug),
            bio: None,
        }
    }

    #[tokio::test]
    async fn generates_distinct_ids() {
        let store = MemoryRepository::new();
        let a = store.create_author(&author("John Doe", "john-doe")).await.unwrap();
        let b = store.create_author(&author("Jane Smith", "jane-smith")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.count(Collection::Authors).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn rejects_duplicate_slug() {
        let store = MemoryRepository::new();
        store.create_author(&author("John Doe", "john-doe")).await.unwrap();
        let err = store.create_author(&author("John Two", "john-doe")).await;
        assert!(err.is_err());
        assert_eq!(store.count(Collection::Authors).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_post_enforces_foreign_keys() {
        let store = MemoryRepository::new();
        let err = store
            .create_post(NewPost {
                title: "Orphan".to_string(),
                slug: "orphan".to_string(),
                content: "No author exists yet".to_string(),
                published_date: None,
                cover_image_id: None,
                author_id: 99,
                category_id: 98,
                tag_ids: vec![],
            })
            .await;
        assert!(err.is_err());
        assert_eq!(store.count(Collection::Posts).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_all_posts_clears_tag_links() {
        let store = MemoryRepository::new();
        let a = store.create_author(&author("John Doe", "john-doe")).await.unwrap();
        let c = store
            .create_category(&CategoryData {
                name: "Tech".to_string(),
                slug: Some("tech".to_string()),
                description: None,
            })
            .await
            .unwrap();
        let t = store
            .create_tag(&TagData {
                name: "Rust".to_string(),
                slug: Some("rust".to_string()),
            })
            .await
            .unwrap();
        let p = store
            .create_post(NewPost {
                title: "Hello".to_string(),
                slug: "hello".to_string(),
                content: "Some content here".to_string(),
                published_date: None,
                cover_image_id: None,
                author_id: a.id,
                category_id: c.id,
                tag_ids: vec![t.id],
            })
            .await
            .unwrap();
        assert_eq!(store.tag_ids_for(p.id), vec![t.id]);

        store.delete_all(Collection::Posts).await.unwrap();
        assert_eq!(store.count(Collection::Posts).await.unwrap(), 0);
        assert!(store.tag_ids_for(p.id).is_empty());
        // Reference rows survive a posts-only wipe
        assert_eq!(store.count(Collection::Tags).await.unwrap(), 1);
    }
}
