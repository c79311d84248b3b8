//! The external query-builder contract the paginator and dialects
//! collaborate with.

use async_trait::async_trait;

use crate::cursor::RowAccess;
use crate::error::PaginationError;
use crate::predicate::PredicateBuilder;
use crate::sort::SortDirection;

/// Ordering direction plus NULL placement, passed to `order_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSpec {
   Asc,
   Desc,
   AscNullsFirst,
   AscNullsLast,
   DescNullsFirst,
   DescNullsLast,
}

impl OrderSpec {
   pub fn from_direction(direction: SortDirection) -> Self {
      match direction {
         SortDirection::Asc => OrderSpec::AscNullsFirst,
         SortDirection::Desc => OrderSpec::DescNullsLast,
      }
   }
}

/// An opaque, lazy query handle. Every method returns a new, equivalent
/// handle; nothing executes until [`QueryBuilder::execute`].
#[async_trait]
pub trait QueryBuilder: Sized + Send {
   type Row: RowAccess + Send;
   type Predicate: PredicateBuilder + Send;

   fn order_by(self, column_reference: &str, order: OrderSpec) -> Self;

   /// Default no-op; dialects that use `LIMIT` call this.
   fn limit(self, _n: u64) -> Self {
      self
   }

   /// Default no-op; dialects that use `TOP` call this.
   fn top(self, _n: u64) -> Self {
      self
   }

   /// Default no-op; dialects that use `FETCH NEXT ... ROWS ONLY` call
   /// this.
   fn fetch(self, _n: u64) -> Self {
      self
   }

   fn offset(self, n: u64) -> Self;

   fn where_predicate(self, predicate: Self::Predicate) -> Self;

   async fn execute(self) -> Result<Vec<Self::Row>, PaginationError>;
}
