use std::collections::HashSet;

use crate::entities::post;
use crate::error::SeedError;
use crate::models::seed_model::PostData;
use crate::repositories::{ContentStore, NewPost};

/// Posts are created one at a time: each needs its relations fully resolved
/// first, and at seed-time scale (two lookups + one create per post) there is
/// nothing worth batching.
pub async fn seed_posts<S: ContentStore + ?Sized>(
    store: &S,
    rows: &[PostData],
) -> Result<Vec<post::Model>, SeedError> {
    println!("📝 Creating posts...");
    let mut created = Vec::with_capacity(rows.len());

    for row in rows {
        let author = store
            .find_author_by_slug(&row.author)
            .await?
            .ok_or_else(|| SeedError::UnresolvedReference {
                post: row.title.clone(),
                kind: "author",
                slug: row.author.clone(),
            })?;

        let category = store
            .find_category_by_slug(&row.category)
            .await?
            .ok_or_else(|| SeedError::UnresolvedReference {
                post: row.title.clone(),
                kind: "category",
                slug: row.category.clone(),
            })?;

        // Tags: dedup, keep input order, silently drop slugs that resolve to
        // nothing (a warning is enough; the post still goes in)
        let mut tag_ids = Vec::new();
        let mut seen = HashSet::new();
        for slug in &row.tags {
            if !seen.insert(slug.as_str()) {
                continue;
            }
            match store.find_tag_by_slug(slug).await? {
                Some(tag) => tag_ids.push(tag.id),
                None => tracing::warn!("Tag '{}' not found, skipped for post '{}'", slug, row.title),
            }
        }

        // Cover image: exact URL match against pre-uploaded media; a miss
        // means the post is created without one
        let cover_image_id = match &row.cover_image_url {
            Some(url) => {
                let media = store.find_media_by_url(url).await?;
                if media.is_none() {
                    tracing::warn!("No uploaded media matches '{}', post '{}' gets no cover", url, row.title);
                }
                media.map(|m| m.id)
            }
            None => None,
        };

        let saved = store
            .create_post(NewPost {
                title: row.title.clone(),
                slug: row.resolved_slug(),
                content: row.content.clone(),
                published_date: row.published_date,
                cover_image_id,
                author_id: author.id,
                category_id: category.id,
                tag_ids,
            })
            .await?;
        println!("  ✓ Created: {}", saved.title);
        created.push(saved);
    }

    println!("✅ Created {} posts", created.len());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_model::{AuthorData, CategoryData, TagData};
    use crate::repositories::MemoryRepository;

    async fn store_with_references() -> MemoryRepository {
        let store = MemoryRepository::new();
        store
            .create_author(&AuthorData {
                name: "John Doe".to_string(),
                slug: Some("john-doe".to_string()),
                email: "john@example.com".to_string(),
                bio: None,
            })
            .await
            .unwrap();
        store
            .create_category(&CategoryData {
                name: "Technology".to_string(),
                slug: Some("technology".to_string()),
                description: None,
            })
            .await
            .unwrap();
        store
            .create_tag(&TagData {
                name: "Rust".to_string(),
                slug: Some("rust".to_string()),
            })
            .await
            .unwrap();
        store
    }

    fn post(title: &str, tags: Vec<&str>) -> PostData {
        PostData {
            title: title.to_string(),
            slug: None,
            content: "Some content long enough.".to_string(),
            cover_image_url: None,
            published_date: None,
            author: "john-doe".to_string(),
            category: "technology".to_string(),
            tags: tags.into_iter().map(String::from).collect(),
        }
    }

    #[tokio::test]
    async fn unknown_tag_slug_is_dropped_not_fatal() {
        let store = store_with_references().await;
        let rows = vec![post("Tagged Post", vec!["rust", "no-such-tag", "rust"])];

        let created = seed_posts(&store, &rows).await.unwrap();
        assert_eq!(created.len(), 1);
        // Deduplicated and filtered to the one resolvable tag
        assert_eq!(store.tag_ids_for(created[0].id).len(), 1);
    }

    #[tokio::test]
    async fn missing_cover_image_leaves_post_without_one() {
        let store = store_with_references().await;
        let mut row = post("No Cover", vec![]);
        row.cover_image_url = Some("/uploads/missing.png".to_string());

        let created = seed_posts(&store, &[row]).await.unwrap();
        assert_eq!(created[0].cover_image_id, None);
    }

    #[tokio::test]
    async fn matching_cover_image_url_is_linked() {
        let store = store_with_references().await;
        let uploaded = store.add_media("css.png", "/uploads/css_55e24b692f.png");
        let mut row = post("With Cover", vec![]);
        row.cover_image_url = Some("/uploads/css_55e24b692f.png".to_string());

        let created = seed_posts(&store, &[row]).await.unwrap();
        assert_eq!(created[0].cover_image_id, Some(uploaded.id));
    }

    #[tokio::test]
    async fn slug_falls_back_to_title() {
        let store = store_with_references().await;
        let created = seed_posts(&store, &[post("Hello Rust World", vec![])])
            .await
            .unwrap();
        assert_eq!(created[0].slug, "hello-rust-world");
        assert!(created[0].published_at.is_some());
    }

    #[tokio::test]
    async fn unknown_category_is_fatal() {
        let store = store_with_references().await;
        let mut row = post("Bad Category", vec![]);
        row.category = "nonsense".to_string();

        let err = seed_posts(&store, &[row]).await.unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnresolvedReference {
                kind: "category",
                ..
            }
        ));
    }
}
