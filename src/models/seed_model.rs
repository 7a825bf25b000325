use chrono::NaiveDate;
use serde::Deserialize;
use slug::slugify;
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::SeedError;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthorData {
    #[validate(length(min = 1, message = "Author name cannot be empty"))]
    pub name: String,
    pub slug: Option<String>,
    #[validate(email(message = "Author email is invalid"))]
    pub email: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryData {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TagData {
    #[validate(length(min = 1, message = "Tag name cannot be empty"))]
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostData {
    #[validate(length(min = 3, message = "Title is required and must be at least 3 chars"))]
    pub title: String,
    pub slug: Option<String>,
    #[validate(length(min = 10, message = "Content is too short"))]
    pub content: String,
    #[serde(rename = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    pub published_date: Option<NaiveDate>,
    // Relations by slug, never by array position
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AuthorData {
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

impl CategoryData {
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

impl TagData {
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

impl PostData {
    pub fn resolved_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.title))
    }
}

/// The full seed payload: four flat record collections.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeedData {
    #[validate(nested)]
    pub authors: Vec<AuthorData>,
    #[validate(nested)]
    pub categories: Vec<CategoryData>,
    #[validate(nested)]
    pub tags: Vec<TagData>,
    #[validate(nested)]
    pub posts: Vec<PostData>,
}

impl SeedData {
    /// Load and validate a JSON fixture. Any failure here is fatal and
    /// happens before a single write is issued.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path)?;
        let data: SeedData = serde_json::from_str(&raw)?;
        data.validate()?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GOOD_FIXTURE: &str = r#"{
        "authors": [
            { "name": "John Doe", "slug": "john-doe", "email": "john@example.com", "bio": "Writer" }
        ],
        "categories": [
            { "name": "Technology", "description": "Tech stuff" }
        ],
        "tags": [
            { "name": "Rust", "slug": "rust" }
        ],
        "posts": [
            {
                "title": "Hello World",
                "content": "A first post with enough content.",
                "coverImageUrl": "/uploads/hello.png",
                "published_date": "2025-09-25",
                "author": "john-doe",
                "category": "technology",
                "tags": ["rust", "rust"]
            }
        ]
    }"#;

    #[test]
    fn parses_valid_fixture() {
        let data: SeedData = serde_json::from_str(GOOD_FIXTURE).unwrap();
        data.validate().unwrap();
        assert_eq!(data.authors.len(), 1);
        assert_eq!(data.posts[0].tags, vec!["rust", "rust"]);
        assert_eq!(
            data.posts[0].published_date,
            Some(NaiveDate::from_ymd_opt(2025, 9, 25).unwrap())
        );
        // Slug derived from the name when the fixture omits it
        assert_eq!(data.categories[0].resolved_slug(), "technology");
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"{ not json ").unwrap();

        let err = SeedData::from_file(&path).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_email() {
        let raw = GOOD_FIXTURE.replace("john@example.com", "not-an-email");
        let data: SeedData = serde_json::from_str(&raw).unwrap();
        assert!(data.validate().is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SeedData::from_file(Path::new("/nonexistent/seed-data.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }

    #[test]
    fn loads_fixture_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed-data.json");
        fs::write(&path, GOOD_FIXTURE).unwrap();

        let data = SeedData::from_file(&path).unwrap();
        assert_eq!(data.posts.len(), 1);
    }
}
