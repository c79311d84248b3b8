//! Dialect-agnostic keyset (cursor-based) pagination engine for SQL SELECT
//! queries.
//!
//! Given an ordered sort key specification, a row limit, and an optional
//! opaque cursor, [`Paginator`] fetches the next (or previous) page of rows
//! and emits opaque tokens the caller can hand back to continue navigation.
//! The engine never generates SQL itself — it collaborates with an external
//! [`QueryBuilder`] that knows how to append `ORDER BY`, `LIMIT`/`TOP`,
//! `OFFSET`, and `WHERE` clauses for its own backend. Four [`Dialect`]s ship
//! out of the box: [`dialect::Postgres`], [`dialect::MySql`],
//! [`dialect::MsSql`], and [`dialect::Sqlite`].
//!
//! # Example
//!
//! ```no_run
//! use keyset_paginate::{Paginator, SortItem, SortSet, dialect::Sqlite};
//!
//! # async fn run<Q: keyset_paginate::QueryBuilder>(query: Q) -> Result<(), keyset_paginate::PaginationError> {
//! let sorts = SortSet::new(vec![SortItem::asc("created_at"), SortItem::asc("id")])?;
//! let paginator = Paginator::new(Sqlite);
//! let page = paginator.paginate(query, &sorts, 20, None).await?;
//! # let _ = page;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod cursor;
pub mod dialect;
pub mod error;
pub mod paginator;
pub mod predicate;
pub mod query;
pub mod sort;
pub mod value;

pub use cursor::{CursorKind, CursorPayload, DecodedCursor, IncomingCursor, RowAccess};
pub use dialect::Dialect;
pub use error::PaginationError;
pub use paginator::{DefaultTokenCodec, Edge, EdgePage, Page, Paginator, default_token_codec};
pub use predicate::{CompareOp, PredicateBuilder};
pub use query::{OrderSpec, QueryBuilder};
pub use sort::{SortDirection, SortItem, SortSet};
pub use value::CursorValue;
