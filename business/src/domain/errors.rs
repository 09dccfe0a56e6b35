/// Errors surfaced by store adapters.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// Adapters collapse every engine-specific failure (connectivity, malformed
/// ids, decode problems) into `DatabaseError`; only a missing document is
/// reported separately.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

