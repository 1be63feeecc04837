//! Common error taxonomy for the core crate
//!
//! Every fallible service and store operation returns [`Error`]. The API
//! server maps each variant to an HTTP status: `InvalidCredentials` → 401,
//! `NotFound` → 404, `Conflict` → 409, `Validation` → 422.

use uuid::Uuid;

/// Core result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Unified core error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No seeded credential matches the presented email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An entity referenced by id does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. "musician"
        entity: &'static str,

        /// The missing id
        id: Uuid,
    },

    /// The operation would break a cross-entity rule
    ///
    /// Raised when deleting a musician or song that a schedule still
    /// references.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A create/update payload failed validation
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// The storage backend failed
    ///
    /// The in-memory stores never raise this; it exists for the repository
    /// seam so alternative backends can report their own failures.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Builds a `NotFound` for an entity kind and id
    pub fn not_found(entity: &'static str, id: impl Into<Uuid>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }
}
