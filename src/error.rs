//! Error types for the pagination engine.

use thiserror::Error;

/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;

/// Errors raised while validating, decoding, or executing a paginated query.
///
/// Every variant maps to one of four machine-readable codes via
/// [`PaginationError::error_code`]: `INVALID_LIMIT`, `INVALID_SORT`,
/// `INVALID_TOKEN`, or `UNEXPECTED_ERROR`.
#[derive(Debug, Error)]
pub enum PaginationError {
   /// `limit` was not a positive integer.
   #[error("Invalid page size limit")]
   InvalidLimit,

   /// The sort set was empty, or had a duplicate output key.
   #[error("{0}")]
   InvalidSort(String),

   /// The incoming cursor was malformed, failed to decode, or was minted
   /// under a different sort order.
   #[error("{0}")]
   InvalidToken(String),

   /// Anything else: database failures, codec internal faults, predicate
   /// synthesis faults.
   #[error("{message}")]
   Unexpected {
      message: String,
      #[source]
      source: Option<Box<dyn std::error::Error + Send + Sync>>,
   },
}

impl PaginationError {
   pub fn invalid_sort(message: impl Into<String>) -> Self {
      PaginationError::InvalidSort(message.into())
   }

   pub fn invalid_token(message: impl Into<String>) -> Self {
      PaginationError::InvalidToken(message.into())
   }

   /// Wrap an underlying error, preserving it as `source()`.
   pub fn unexpected(message: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
      PaginationError::Unexpected {
         message: message.into(),
         source: Some(Box::new(source)),
      }
   }

   /// Construct an `UNEXPECTED_ERROR` with no underlying cause.
   pub fn unexpected_message(message: impl Into<String>) -> Self {
      PaginationError::Unexpected {
         message: message.into(),
         source: None,
      }
   }

   /// Machine-readable error code for this failure.
   pub fn error_code(&self) -> &'static str {
      match self {
         PaginationError::InvalidLimit => "INVALID_LIMIT",
         PaginationError::InvalidSort(_) => "INVALID_SORT",
         PaginationError::InvalidToken(_) => "INVALID_TOKEN",
         PaginationError::Unexpected { .. } => "UNEXPECTED_ERROR",
      }
   }
}
