//! Synthesis of a keyset boolean predicate from a sort set and a decoded
//! cursor payload, built against an external predicate-builder contract
//! rather than a raw SQL string.

use crate::cursor::CursorPayload;
use crate::error::PaginationError;
use crate::sort::{SortDirection, SortSet};
use crate::value::CursorValue;

/// Comparison operator used by a single-column predicate leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
   Lt,
   Gt,
   Eq,
   IsNull,
   IsNotNull,
}

/// The contract a query builder's predicate type must satisfy so the
/// keyset predicate can be synthesized against it without knowledge of
/// the underlying SQL dialect.
pub trait PredicateBuilder: Sized {
   fn compare(column: &str, op: CompareOp, value: Option<&CursorValue>) -> Self;
   fn and(self, other: Self) -> Self;
   fn or(self, other: Self) -> Self;
}

/// Build the boolean predicate restricting results to rows strictly
/// beyond the boundary row described by `payload`, under `sorts`.
pub fn build_cursor_predicate<P: PredicateBuilder>(
   sorts: &SortSet,
   payload: &CursorPayload,
) -> Result<P, PaginationError> {
   let items = sorts.items();
   let mut values = Vec::with_capacity(items.len());
   for item in items {
      let value = payload
         .k
         .get(&item.output_key)
         .ok_or_else(|| PaginationError::invalid_token(format!("missing cursor value for \"{}\"", item.output_key)))?;
      values.push(value);
   }

   // Fold right-to-left iteratively: `level` starts as the tie-breaker's
   // predicate and each step wraps it with the next column out.
   let mut level: Option<P> = None;
   for i in (0..items.len()).rev() {
      level = Some(build_level(&items[i].column, items[i].direction, values[i], level));
   }

   Ok(level.expect("sort set is non-empty, validated at construction"))
}

fn build_level<P: PredicateBuilder>(column: &str, direction: SortDirection, value: &CursorValue, next: Option<P>) -> P {
   let cmp = match direction {
      SortDirection::Desc => CompareOp::Lt,
      SortDirection::Asc => CompareOp::Gt,
   };

   if value.is_null() {
      return match (direction, next) {
         (SortDirection::Asc, Some(next)) => {
            let is_null = P::compare(column, CompareOp::IsNull, None);
            let is_not_null = P::compare(column, CompareOp::IsNotNull, None);
            is_null.and(next).or(is_not_null)
         }
         (SortDirection::Asc, None) => P::compare(column, CompareOp::IsNotNull, None),
         (SortDirection::Desc, Some(next)) => {
            let is_null = P::compare(column, CompareOp::IsNull, None);
            is_null.and(next)
         }
         (SortDirection::Desc, None) => P::compare(column, CompareOp::IsNull, None),
      };
   }

   let base = P::compare(column, cmp, Some(value));
   let tie = match next {
      Some(next) => {
         let eq = P::compare(column, CompareOp::Eq, Some(value));
         Some(eq.and(next))
      }
      None => None,
   };

   let mut predicate = match tie {
      Some(tie) => base.or(tie),
      None => base,
   };

   if direction == SortDirection::Desc {
      predicate = predicate.or(P::compare(column, CompareOp::IsNull, None));
   }

   predicate
}
