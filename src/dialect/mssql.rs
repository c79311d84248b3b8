use crate::cursor::CursorKind;
use crate::query::{OrderSpec, QueryBuilder};
use crate::sort::SortDirection;

use super::Dialect;

/// Microsoft SQL Server's engine default already matches the unified
/// convention, so no explicit NULL placement is emitted. Row limiting
/// differs from the other dialects: `TOP n` for plain keyset paging,
/// `FETCH NEXT n ROWS ONLY` when combined with `OFFSET`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsSql;

impl Dialect for MsSql {
   fn order_spec(&self, direction: SortDirection) -> OrderSpec {
      match direction {
         SortDirection::Asc => OrderSpec::Asc,
         SortDirection::Desc => OrderSpec::Desc,
      }
   }

   fn apply_limit<Q: QueryBuilder>(&self, query: Q, limit: u64, cursor_kind: Option<CursorKind>) -> Q {
      match cursor_kind {
         Some(CursorKind::Offset) => query.fetch(limit),
         _ => query.top(limit),
      }
   }
}
