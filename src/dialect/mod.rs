//! Per-engine adapters for sort emission, limit syntax, and cursor
//! predicate application.

mod mssql;
mod mysql;
mod postgres;
mod sqlite;

pub use mssql::MsSql;
pub use mysql::MySql;
pub use postgres::Postgres;
pub use sqlite::Sqlite;

use crate::cursor::{CursorKind, DecodedCursor};
use crate::error::PaginationError;
use crate::predicate::build_cursor_predicate;
use crate::query::{OrderSpec, QueryBuilder};
use crate::sort::{SortDirection, SortSet};

/// A SQL dialect's opinions on NULL placement and row-limit syntax. The
/// cursor predicate is dialect-independent; only `order_spec` and
/// `apply_limit` meaningfully differ between implementations.
pub trait Dialect {
   /// How this dialect expresses a sort direction's NULL placement. The
   /// unified convention is Asc ⇒ NULLS FIRST, Desc ⇒ NULLS LAST;
   /// dialects whose engine default already matches can return the
   /// plain `Asc`/`Desc` variant, letting the database apply its default.
   fn order_spec(&self, direction: SortDirection) -> OrderSpec;

   fn apply_sort<Q: QueryBuilder>(&self, mut query: Q, sorts: &SortSet) -> Q {
      for item in sorts.items() {
         query = query.order_by(&item.column, self.order_spec(item.direction));
      }
      query
   }

   /// `limit` is already the over-fetch count (`requested + 1`).
   fn apply_limit<Q: QueryBuilder>(&self, query: Q, limit: u64, _cursor_kind: Option<CursorKind>) -> Q {
      query.limit(limit)
   }

   fn apply_offset<Q: QueryBuilder>(&self, query: Q, offset: u64) -> Q {
      query.offset(offset)
   }

   fn apply_cursor<Q: QueryBuilder>(
      &self,
      query: Q,
      sorts: &SortSet,
      decoded: &DecodedCursor,
   ) -> Result<Q, PaginationError> {
      let payload = match decoded.payload() {
         Some(payload) => payload,
         None => return Ok(query),
      };
      let predicate = build_cursor_predicate::<Q::Predicate>(sorts, payload)?;
      Ok(query.where_predicate(predicate))
   }
}
