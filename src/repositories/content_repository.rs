use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{author, category, media, post, post_tag, tag};
use crate::models::seed_model::{AuthorData, CategoryData, TagData};
use crate::repositories::{Collection, ContentStore, NewPost};

/// [`ContentStore`] backed by a live database connection.
#[derive(Clone)]
pub struct ContentRepository {
    db: DatabaseConnection,
}

impl ContentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore for ContentRepository {
    async fn create_author(&self, data: &AuthorData) -> Result<author::Model, DbErr> {
        let new_author = author::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(data.name.clone()),
            slug: Set(data.resolved_slug()),
            email: Set(data.email.clone()),
            bio: Set(data.bio.clone()),
            created_at: Set(Utc::now()),
        };
        new_author.insert(&self.db).await
    }

    async fn create_category(&self, data: &CategoryData) -> Result<category::Model, DbErr> {
        let new_category = category::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(data.name.clone()),
            slug: Set(data.resolved_slug()),
            description: Set(data.description.clone()),
            created_at: Set(Utc::now()),
        };
        new_category.insert(&self.db).await
    }

    async fn create_tag(&self, data: &TagData) -> Result<tag::Model, DbErr> {
        let new_tag = tag::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(data.name.clone()),
            slug: Set(data.resolved_slug()),
            created_at: Set(Utc::now()),
        };
        new_tag.insert(&self.db).await
    }

    async fn create_post(&self, data: NewPost) -> Result<post::Model, DbErr> {
        let txn = self.db.begin().await?;

        let new_post = post::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            title: Set(data.title),
            slug: Set(data.slug),
            content: Set(data.content),
            published_date: Set(data.published_date),
            published_at: Set(Some(Utc::now())),
            cover_image_id: Set(data.cover_image_id),
            author_id: Set(data.author_id),
            category_id: Set(data.category_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };
        let saved = new_post.insert(&txn).await?;

        for tag_id in data.tag_ids {
            let link = post_tag::ActiveModel {
                post_id: Set(saved.id),
                tag_id: Set(tag_id),
            };
            link.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(saved)
    }

    async fn find_author_by_slug(&self, slug: &str) -> Result<Option<author::Model>, DbErr> {
        author::Entity::find()
            .filter(author::Column::Slug.eq(slug))
            .one(&self.db)
            .await
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<category::Model>, DbErr> {
        category::Entity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await
    }

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<tag::Model>, DbErr> {
        tag::Entity::find()
            .filter(tag::Column::Slug.eq(slug))
            .one(&self.db)
            .await
    }

    async fn find_media_by_url(&self, url: &str) -> Result<Option<media::Model>, DbErr> {
        media::Entity::find()
            .filter(media::Column::Url.eq(url))
            .one(&self.db)
            .await
    }

    async fn count(&self, collection: Collection) -> Result<u64, DbErr> {
        match collection {
            Collection::Authors => author::Entity::find().count(&self.db).await,
            Collection::Categories => category::Entity::find().count(&self.db).await,
            Collection::Tags => tag::Entity::find().count(&self.db).await,
            Collection::Posts => post::Entity::find().count(&self.db).await,
        }
    }

    async fn delete_all(&self, collection: Collection) -> Result<u64, DbErr> {
        let res = match collection {
            Collection::Authors => author::Entity::delete_many().exec(&self.db).await?,
            Collection::Categories => category::Entity::delete_many().exec(&self.db).await?,
            Collection::Tags => tag::Entity::delete_many().exec(&self.db).await?,
            Collection::Posts => post::Entity::delete_many().exec(&self.db).await?,
        };
        Ok(res.rows_affected)
    }
}
