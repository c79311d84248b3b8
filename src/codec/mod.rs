//! A small composable codec abstraction used to build the token pipeline.
//!
//! A [`Codec`] is a pair of async transforms `encode: I -> O` and
//! `decode: O -> I`. [`pipe`] composes two codecs end-to-end so long as the
//! first's output type matches the second's input type; `encode` runs
//! left-to-right, `decode` runs right-to-left. Chaining `pipe` calls builds
//! longer pipelines (e.g. `pipe(pipe(structured, armor), stash)`).

pub mod armor;
pub mod crypto;
pub mod stash;
pub mod structured;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a codec stage.
#[derive(Debug, Error)]
pub enum CodecError {
   #[error("{0}")]
   Message(String),

   /// An encrypted token was shorter than the minimum valid length.
   #[error("too short")]
   TooShort,

   /// The leading version byte of an encrypted token was not recognized.
   #[error("unsupported version")]
   UnsupportedVersion,

   /// AEAD tag verification failed — tampering or a wrong secret.
   #[error("authentication failed")]
   AuthenticationFailed,

   #[error("key derivation failed: {0}")]
   KeyDerivation(String),

   #[error("no stashed value for key \"{0}\"")]
   StashMiss(String),

   #[error(transparent)]
   Json(#[from] serde_json::Error),

   #[error(transparent)]
   Base64(#[from] base64::DecodeError),
}

/// A bidirectional, composable, possibly-suspending transform `I <-> O`.
#[async_trait]
pub trait Codec: Send + Sync {
   type Input: Send;
   type Output: Send;

   async fn encode(&self, input: Self::Input) -> Result<Self::Output, CodecError>;
   async fn decode(&self, output: Self::Output) -> Result<Self::Input, CodecError>;
}

/// The result of composing two codecs end-to-end. Constructed via [`pipe`].
pub struct Pipe<A, B> {
   first: A,
   second: B,
}

#[async_trait]
impl<A, B> Codec for Pipe<A, B>
where
   A: Codec,
   B: Codec<Input = A::Output>,
{
   type Input = A::Input;
   type Output = B::Output;

   async fn encode(&self, input: Self::Input) -> Result<Self::Output, CodecError> {
      let mid = self.first.encode(input).await?;
      self.second.encode(mid).await
   }

   async fn decode(&self, output: Self::Output) -> Result<Self::Input, CodecError> {
      let mid = self.second.decode(output).await?;
      self.first.decode(mid).await
   }
}

/// Compose `first` and `second` into a single codec. `encode` runs
/// `first` then `second`; `decode` runs the reverse.
pub fn pipe<A, B>(first: A, second: B) -> Pipe<A, B>
where
   A: Codec,
   B: Codec<Input = A::Output>,
{
   Pipe { first, second }
}
