use crate::query::OrderSpec;
use crate::sort::SortDirection;

use super::Dialect;

/// PostgreSQL defaults Desc to NULLS FIRST, disagreeing with this
/// engine's Asc/NULLS FIRST, Desc/NULLS LAST convention, so NULL
/// placement is always emitted explicitly here.
#[derive(Debug, Default, Clone, Copy)]
pub struct Postgres;

impl Dialect for Postgres {
   fn order_spec(&self, direction: SortDirection) -> OrderSpec {
      match direction {
         SortDirection::Asc => OrderSpec::AscNullsFirst,
         SortDirection::Desc => OrderSpec::DescNullsLast,
      }
   }
}
