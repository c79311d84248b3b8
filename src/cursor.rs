//! Cursor payload shape, incoming cursor decoding, and boundary-row
//! extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;
use crate::sort::SortSet;
use crate::value::CursorValue;

/// `{ sig, k }` — a sort-set fingerprint plus the boundary row's values
/// for each sort item, keyed by output key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorPayload {
   pub sig: String,
   pub k: BTreeMap<String, CursorValue>,
}

/// What an incoming cursor was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
   Next,
   Prev,
   Offset,
}

/// A cursor as the caller supplies it, before decoding the token string.
#[derive(Debug, Clone)]
pub enum IncomingCursor {
   NextPage(String),
   PrevPage(String),
   Offset(u64),
}

/// A cursor after token decoding (or the numeric offset fallback).
#[derive(Debug, Clone)]
pub enum DecodedCursor {
   Next(CursorPayload),
   Prev(CursorPayload),
   Offset(u64),
}

impl DecodedCursor {
   pub fn kind(&self) -> CursorKind {
      match self {
         DecodedCursor::Next(_) => CursorKind::Next,
         DecodedCursor::Prev(_) => CursorKind::Prev,
         DecodedCursor::Offset(_) => CursorKind::Offset,
      }
   }

   pub fn payload(&self) -> Option<&CursorPayload> {
      match self {
         DecodedCursor::Next(p) | DecodedCursor::Prev(p) => Some(p),
         DecodedCursor::Offset(_) => None,
      }
   }
}

/// A fetched row's ability to yield its value for a given output key,
/// used both to extract boundary cursors and to build predicates.
pub trait RowAccess {
   fn get(&self, output_key: &str) -> Option<CursorValue>;
}

/// `k[output_key] = row[output_key]` for each sort item, paired with the
/// sort set's signature.
pub fn extract_cursor_payload(row: &impl RowAccess, sorts: &SortSet) -> Result<CursorPayload, PaginationError> {
   let mut k = BTreeMap::new();
   for item in sorts.items() {
      let value = row.get(&item.output_key).ok_or_else(|| {
         PaginationError::unexpected_message(format!("row is missing value for \"{}\"", item.output_key))
      })?;
      k.insert(item.output_key.clone(), value);
   }
   Ok(CursorPayload {
      sig: sorts.signature(),
      k,
   })
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::sort::SortItem;
   use std::collections::HashMap;

   struct FakeRow(HashMap<String, CursorValue>);

   impl RowAccess for FakeRow {
      fn get(&self, output_key: &str) -> Option<CursorValue> {
         self.0.get(output_key).cloned()
      }
   }

   #[test]
   fn extracts_values_for_every_sort_item() {
      let sorts = SortSet::new(vec![SortItem::asc("created_at"), SortItem::asc("id")]).unwrap();
      let row = FakeRow(HashMap::from([
         ("created_at".to_string(), CursorValue::String("2026-01-01".to_string())),
         ("id".to_string(), CursorValue::Int(7)),
      ]));

      let payload = extract_cursor_payload(&row, &sorts).unwrap();
      assert_eq!(payload.sig, sorts.signature());
      assert_eq!(payload.k["id"], CursorValue::Int(7));
   }

   #[test]
   fn fails_when_row_is_missing_a_sort_column() {
      let sorts = SortSet::new(vec![SortItem::asc("id")]).unwrap();
      let row = FakeRow(HashMap::new());
      let err = extract_cursor_payload(&row, &sorts).unwrap_err();
      assert_eq!(err.error_code(), "UNEXPECTED_ERROR");
   }

   #[test]
   fn decoded_cursor_kind_matches_variant() {
      let payload = CursorPayload { sig: "abc".to_string(), k: BTreeMap::new() };
      assert_eq!(DecodedCursor::Next(payload.clone()).kind(), CursorKind::Next);
      assert_eq!(DecodedCursor::Prev(payload).kind(), CursorKind::Prev);
      assert_eq!(DecodedCursor::Offset(5).kind(), CursorKind::Offset);
   }
}
