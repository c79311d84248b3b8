use crate::query::OrderSpec;
use crate::sort::SortDirection;

use super::Dialect;

/// SQLite's engine default already matches the unified convention, so
/// no explicit NULL placement is emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
   fn order_spec(&self, direction: SortDirection) -> OrderSpec {
      match direction {
         SortDirection::Asc => OrderSpec::Asc,
         SortDirection::Desc => OrderSpec::Desc,
      }
   }
}
