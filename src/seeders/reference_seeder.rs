use futures::future::try_join_all;

use crate::entities::{author, category, tag};
use crate::error::SeedError;
use crate::models::seed_model::{AuthorData, CategoryData, TagData};
use crate::repositories::ContentStore;

/// Reference entities have no ordering dependency among themselves, so every
/// creation within a stage is issued concurrently and joined. Created records
/// come back in input order. Any failure aborts the run — posts need the
/// complete reference set.

pub async fn seed_authors<S: ContentStore + ?Sized>(
    store: &S,
    rows: &[AuthorData],
) -> Result<Vec<author::Model>, SeedError> {
    println!("👤 Creating authors...");
    let created = try_join_all(rows.iter().map(|row| store.create_author(row))).await?;
    println!("✅ Created {} authors", created.len());
    Ok(created)
}

pub async fn seed_categories<S: ContentStore + ?Sized>(
    store: &S,
    rows: &[CategoryData],
) -> Result<Vec<category::Model>, SeedError> {
    println!("📚 Creating categories...");
    let created = try_join_all(rows.iter().map(|row| store.create_category(row))).await?;
    println!("✅ Created {} categories", created.len());
    Ok(created)
}

pub async fn seed_tags<S: ContentStore + ?Sized>(
    store: &S,
    rows: &[TagData],
) -> Result<Vec<tag::Model>, SeedError> {
    println!("🏷️  Creating tags...");
    let created = try_join_all(rows.iter().map(|row| store.create_tag(row))).await?;
    println!("✅ Created {} tags", created.len());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryRepository;

    #[tokio::test]
    async fn creates_authors_in_input_order() {
        let store = MemoryRepository::new();
        let rows = vec![
            AuthorData {
                name: "John Doe".to_string(),
                slug: Some("john-doe".to_string()),
                email: "john@example.com".to_string(),
                bio: None,
            },
            AuthorData {
                name: "Jane Smith".to_string(),
                slug: Some("jane-smith".to_string()),
                email: "jane@example.com".to_string(),
                bio: Some("UX designer".to_string()),
            },
        ];

        let created = seed_authors(&store, &rows).await.unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].slug, "john-doe");
        assert_eq!(created[1].slug, "jane-smith");
        assert_ne!(created[0].id, created[1].id);
    }

    #[tokio::test]
    async fn duplicate_slug_fails_the_stage() {
        let store = MemoryRepository::new();
        let rows = vec![
            TagData {
                name: "Rust".to_string(),
                slug: Some("rust".to_string()),
            },
            TagData {
                name: "Rust Lang".to_string(),
                slug: Some("rust".to_string()),
            },
        ];

        assert!(seed_tags(&store, &rows).await.is_err());
    }
}
