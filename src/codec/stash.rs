//! Opaque-key indirection codec: swaps a cursor token for a short key,
//! keeping the real payload server-side.

use async_trait::async_trait;
use uuid::Uuid;

use super::{Codec, CodecError};

/// A server-side key-value store backing [`StashCodec`]. Implementations
/// typically wrap a cache (Redis, an in-process LRU) with a TTL; this
/// trait carries no expiry policy itself.
#[async_trait]
pub trait Stash: Send + Sync {
   async fn put(&self, key: &str, value: String) -> Result<(), CodecError>;
   async fn get(&self, key: &str) -> Result<Option<String>, CodecError>;
}

/// Replaces a token with a random UUID key, storing the token under that
/// key in `S`. Decoding looks the key back up; a missing key surfaces as
/// [`CodecError::StashMiss`].
pub struct StashCodec<S> {
   stash: S,
}

impl<S: Stash> StashCodec<S> {
   pub fn new(stash: S) -> Self {
      Self { stash }
   }
}

#[async_trait]
impl<S: Stash> Codec for StashCodec<S> {
   type Input = String;
   type Output = String;

   async fn encode(&self, input: String) -> Result<String, CodecError> {
      let key = Uuid::new_v4().to_string();
      self.stash.put(&key, input).await?;
      Ok(key)
   }

   async fn decode(&self, output: String) -> Result<String, CodecError> {
      self
         .stash
         .get(&output)
         .await?
         .ok_or(CodecError::StashMiss(output))
   }
}
