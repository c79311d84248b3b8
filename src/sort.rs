//! Sort key specification and signature derivation.

use sha2::{Digest, Sha256};

use crate::error::PaginationError;

/// Ascending or descending order for a single sort item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
   #[default]
   Asc,
   Desc,
}

impl SortDirection {
   pub fn reversed(self) -> Self {
      match self {
         SortDirection::Asc => SortDirection::Desc,
         SortDirection::Desc => SortDirection::Asc,
      }
   }

   fn as_str(self) -> &'static str {
      match self {
         SortDirection::Asc => "asc",
         SortDirection::Desc => "desc",
      }
   }
}

/// One column in a sort set: the column reference passed to the query
/// builder, the output key it appears under in a selected row, and its
/// direction.
#[derive(Debug, Clone)]
pub struct SortItem {
   pub column: String,
   pub output_key: String,
   pub direction: SortDirection,
}

impl SortItem {
   /// `output_key` defaults to the substring of `column` after its last
   /// `.`, so `"users.id"` yields `"id"`.
   pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
      let column = column.into();
      let output_key = derive_output_key(&column);
      Self { column, output_key, direction }
   }

   pub fn asc(column: impl Into<String>) -> Self {
      Self::new(column, SortDirection::Asc)
   }

   pub fn desc(column: impl Into<String>) -> Self {
      Self::new(column, SortDirection::Desc)
   }

   /// Override the derived output key, e.g. when two sort items would
   /// otherwise collide (see [`SortSet::new`]).
   pub fn with_output_key(mut self, output_key: impl Into<String>) -> Self {
      self.output_key = output_key.into();
      self
   }

   fn reversed(&self) -> Self {
      Self {
         column: self.column.clone(),
         output_key: self.output_key.clone(),
         direction: self.direction.reversed(),
      }
   }
}

fn derive_output_key(column: &str) -> String {
   match column.rsplit_once('.') {
      Some((_, key)) => key.to_string(),
      None => column.to_string(),
   }
}

/// A non-empty, ordered list of sort items. The last item is expected
/// (by caller contract) to be unique and non-nullable so paging is
/// deterministic; the engine only enforces non-emptiness and the
/// absence of output-key collisions.
#[derive(Debug, Clone)]
pub struct SortSet {
   items: Vec<SortItem>,
}

impl SortSet {
   /// Fails with [`PaginationError::InvalidSort`] if `items` is empty or
   /// if two items resolve to the same output key.
   pub fn new(items: Vec<SortItem>) -> Result<Self, PaginationError> {
      if items.is_empty() {
         return Err(PaginationError::invalid_sort("Cannot paginate without sorting"));
      }

      let mut seen = std::collections::HashSet::new();
      for item in &items {
         if !seen.insert(item.output_key.as_str()) {
            return Err(PaginationError::invalid_sort(format!(
               "Duplicate output key \"{}\" in sort set",
               item.output_key
            )));
         }
      }

      Ok(Self { items })
   }

   pub fn items(&self) -> &[SortItem] {
      &self.items
   }

   /// Swap Asc/Desc on every item, preserving column and output key.
   pub fn reversed(&self) -> Self {
      Self {
         items: self.items.iter().map(SortItem::reversed).collect(),
      }
   }

   /// `"<key>:<dir>|<key>:<dir>|..."`, SHA-256 hashed and hex-truncated
   /// to 8 characters.
   pub fn signature(&self) -> String {
      let joined = self
         .items
         .iter()
         .map(|item| format!("{}:{}", item.output_key, item.direction.as_str()))
         .collect::<Vec<_>>()
         .join("|");

      let digest = Sha256::digest(joined.as_bytes());
      hex::encode(digest)[..8].to_string()
   }
}
