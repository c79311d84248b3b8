use crate::query::OrderSpec;
use crate::sort::SortDirection;

use super::Dialect;

/// MySQL's engine default (Asc ⇒ NULLS FIRST, Desc ⇒ NULLS LAST)
/// already matches the unified convention, so no explicit placement is
/// emitted; `LIMIT n` is used uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
   fn order_spec(&self, direction: SortDirection) -> OrderSpec {
      match direction {
         SortDirection::Asc => OrderSpec::Asc,
         SortDirection::Desc => OrderSpec::Desc,
      }
   }
}
