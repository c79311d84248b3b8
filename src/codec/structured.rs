//! Lossless structured-to-string codec for cursor payloads.

use async_trait::async_trait;

use super::{Codec, CodecError};
use crate::cursor::CursorPayload;

/// Serializes a [`CursorPayload`] to a single string and back, preserving
/// exact value types (e.g. a large integer never decodes as a float).
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredCodec;

#[async_trait]
impl Codec for StructuredCodec {
   type Input = CursorPayload;
   type Output = String;

   async fn encode(&self, input: CursorPayload) -> Result<String, CodecError> {
      Ok(serde_json::to_string(&input)?)
   }

   async fn decode(&self, output: String) -> Result<CursorPayload, CodecError> {
      Ok(serde_json::from_str(&output)?)
   }
}
