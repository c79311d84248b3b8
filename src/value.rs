//! Heterogeneous cursor value type.
//!
//! Cursor payloads carry the boundary row's sort-column values. Those values
//! must round-trip through the token codec with their exact type intact — a
//! large integer must decode as a large integer, not a float — so this is a
//! tagged union rather than erased JSON.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single value captured from a boundary row's sort column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum CursorValue {
   #[serde(rename = "null")]
   Null,
   #[serde(rename = "bool")]
   Bool(bool),
   #[serde(rename = "int")]
   Int(i64),
   #[serde(rename = "bigint")]
   BigInt(i128),
   #[serde(rename = "float")]
   Float(f64),
   #[serde(rename = "string")]
   String(String),
   #[serde(rename = "timestamp")]
   Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
}

impl CursorValue {
   /// Whether this value represents SQL NULL.
   pub fn is_null(&self) -> bool {
      matches!(self, CursorValue::Null)
   }
}

impl From<&str> for CursorValue {
   fn from(value: &str) -> Self {
      CursorValue::String(value.to_string())
   }
}

impl From<String> for CursorValue {
   fn from(value: String) -> Self {
      CursorValue::String(value)
   }
}

impl From<i64> for CursorValue {
   fn from(value: i64) -> Self {
      CursorValue::Int(value)
   }
}

impl From<i128> for CursorValue {
   fn from(value: i128) -> Self {
      CursorValue::BigInt(value)
   }
}

impl From<f64> for CursorValue {
   fn from(value: f64) -> Self {
      CursorValue::Float(value)
   }
}

impl From<bool> for CursorValue {
   fn from(value: bool) -> Self {
      CursorValue::Bool(value)
   }
}

impl From<OffsetDateTime> for CursorValue {
   fn from(value: OffsetDateTime) -> Self {
      CursorValue::Timestamp(value)
   }
}

impl<T: Into<CursorValue>> From<Option<T>> for CursorValue {
   fn from(value: Option<T>) -> Self {
      match value {
         Some(v) => v.into(),
         None => CursorValue::Null,
      }
   }
}
