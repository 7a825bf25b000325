use sea_orm::DbErr;
use thiserror::Error;

/// Fatal seeding errors. Anything that reaches `main` as one of these
/// aborts the run with exit code 1; already-created rows are left as-is.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fixture failed validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("post '{post}' references unknown {kind} '{slug}'")]
    UnresolvedReference {
        post: String,
        kind: &'static str,
        slug: String,
    },
}
