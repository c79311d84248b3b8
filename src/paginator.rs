//! Orchestration: validation, sort inversion for backward paging,
//! over-fetch, slice/reverse, and token emission.

use tracing::debug;

use crate::codec::armor::ArmorCodec;
use crate::codec::structured::StructuredCodec;
use crate::codec::{Codec, Pipe, pipe};
use crate::cursor::{CursorPayload, DecodedCursor, IncomingCursor, RowAccess, extract_cursor_payload};
use crate::dialect::Dialect;
use crate::error::PaginationError;
use crate::query::QueryBuilder;
use crate::sort::SortSet;

/// The paginator's default cursor codec: structured serialization piped
/// through URL-safe base64 armoring.
pub type DefaultTokenCodec = Pipe<StructuredCodec, ArmorCodec>;

pub fn default_token_codec() -> DefaultTokenCodec {
   pipe(StructuredCodec, ArmorCodec)
}

/// A single page of results.
#[derive(Debug, Clone)]
pub struct Page<Row> {
   pub items: Vec<Row>,
   pub has_next_page: bool,
   pub has_prev_page: bool,
   pub start_cursor: Option<String>,
   pub end_cursor: Option<String>,
   pub next_page: Option<String>,
   pub prev_page: Option<String>,
}

/// One row paired with the token that anchors a page starting there.
#[derive(Debug, Clone)]
pub struct Edge<Row> {
   pub node: Row,
   pub cursor: String,
}

/// A page with a per-row cursor attached to every item.
#[derive(Debug, Clone)]
pub struct EdgePage<Row> {
   pub edges: Vec<Edge<Row>>,
   pub has_next_page: bool,
   pub has_prev_page: bool,
   pub start_cursor: Option<String>,
   pub end_cursor: Option<String>,
   pub next_page: Option<String>,
   pub prev_page: Option<String>,
}

/// Ties a dialect to a cursor codec and exposes the `paginate` entry
/// point. `dialect` and `codec` are immutable and cheaply shared
/// (typically held behind an `Arc` by the caller).
pub struct Paginator<D, C = DefaultTokenCodec> {
   dialect: D,
   codec: C,
}

impl<D: Dialect> Paginator<D, DefaultTokenCodec> {
   pub fn new(dialect: D) -> Self {
      Self { dialect, codec: default_token_codec() }
   }
}

impl<D: Dialect, C: Codec<Input = CursorPayload, Output = String>> Paginator<D, C> {
   pub fn with_codec(dialect: D, codec: C) -> Self {
      Self { dialect, codec }
   }

   async fn decode_cursor(&self, cursor: IncomingCursor) -> Result<DecodedCursor, PaginationError> {
      match cursor {
         IncomingCursor::NextPage(token) => {
            let payload = self
               .codec
               .decode(token)
               .await
               .map_err(|_| PaginationError::invalid_token("Failed to paginate"))?;
            Ok(DecodedCursor::Next(payload))
         }
         IncomingCursor::PrevPage(token) => {
            let payload = self
               .codec
               .decode(token)
               .await
               .map_err(|_| PaginationError::invalid_token("Failed to paginate"))?;
            Ok(DecodedCursor::Prev(payload))
         }
         IncomingCursor::Offset(n) => Ok(DecodedCursor::Offset(n)),
      }
   }

   async fn resolve_cursor(&self, row: &impl RowAccess, sorts: &SortSet) -> Result<String, PaginationError> {
      let payload = extract_cursor_payload(row, sorts)?;
      self
         .codec
         .encode(payload)
         .await
         .map_err(|e| PaginationError::unexpected("Failed to generate a page token", e))
   }

   /// Fetch the next (or previous) page of rows for `query` under
   /// `sorts`, honoring `cursor` if given.
   pub async fn paginate<Q: QueryBuilder>(
      &self,
      query: Q,
      sorts: &SortSet,
      limit: u64,
      cursor: Option<IncomingCursor>,
   ) -> Result<Page<Q::Row>, PaginationError> {
      if limit == 0 {
         return Err(PaginationError::InvalidLimit);
      }

      let decoded = match cursor {
         Some(cursor) => Some(self.decode_cursor(cursor).await?),
         None => None,
      };

      let inverted = matches!(decoded, Some(DecodedCursor::Prev(_)));
      let sorts_applied = if inverted {
         debug!("inverting sort set for backward paging");
         sorts.reversed()
      } else {
         sorts.clone()
      };

      let mut q = self.dialect.apply_sort(query, &sorts_applied);
      q = self.dialect.apply_limit(q, limit + 1, decoded.as_ref().map(DecodedCursor::kind));

      q = match &decoded {
         Some(DecodedCursor::Offset(offset)) => self.dialect.apply_offset(q, *offset),
         Some(d @ (DecodedCursor::Next(payload) | DecodedCursor::Prev(payload))) => {
            if payload.sig != sorts.signature() {
               return Err(PaginationError::invalid_token("Page token does not match sort order"));
            }
            self.dialect.apply_cursor(q, &sorts_applied, d)?
         }
         None => q,
      };

      let rows = q.execute().await?;

      let over_fetched = rows.len() as u64 > limit;
      let take = (limit as usize).min(rows.len());
      let mut items: Vec<Q::Row> = rows.into_iter().take(take).collect();
      if inverted {
         items.reverse();
      }

      debug!(over_fetched, item_count = items.len(), "fetched page");

      if items.is_empty() {
         return Ok(Page {
            items,
            has_next_page: false,
            has_prev_page: false,
            start_cursor: None,
            end_cursor: None,
            next_page: None,
            prev_page: None,
         });
      }

      let start_cursor = self.resolve_cursor(&items[0], sorts).await?;
      let end_cursor = self.resolve_cursor(&items[items.len() - 1], sorts).await?;

      let is_first = decoded.is_none() || matches!(decoded, Some(DecodedCursor::Offset(0)));

      let prev_page = if (!inverted || over_fetched) && !is_first {
         Some(start_cursor.clone())
      } else {
         None
      };
      let next_page = if inverted || over_fetched { Some(end_cursor.clone()) } else { None };

      Ok(Page {
         items,
         has_next_page: next_page.is_some(),
         has_prev_page: prev_page.is_some(),
         start_cursor: Some(start_cursor),
         end_cursor: Some(end_cursor),
         next_page,
         prev_page,
      })
   }

   /// As [`Paginator::paginate`], but attaches a per-row cursor to every
   /// returned item.
   pub async fn paginate_with_edges<Q: QueryBuilder>(
      &self,
      query: Q,
      sorts: &SortSet,
      limit: u64,
      cursor: Option<IncomingCursor>,
   ) -> Result<EdgePage<Q::Row>, PaginationError> {
      let page = self.paginate(query, sorts, limit, cursor).await?;

      let mut edges = Vec::with_capacity(page.items.len());
      for node in page.items {
         let edge_cursor = self.resolve_cursor(&node, sorts).await?;
         edges.push(Edge { node, cursor: edge_cursor });
      }

      Ok(EdgePage {
         edges,
         has_next_page: page.has_next_page,
         has_prev_page: page.has_prev_page,
         start_cursor: page.start_cursor,
         end_cursor: page.end_cursor,
         next_page: page.next_page,
         prev_page: page.prev_page,
      })
   }
}
