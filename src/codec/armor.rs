//! URL-safe base64 armor codec.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use super::{Codec, CodecError};

/// String &lt;-&gt; URL-safe base64. Encodes without padding; decodes both
/// padded and unpadded input.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArmorCodec;

#[async_trait]
impl Codec for ArmorCodec {
   type Input = String;
   type Output = String;

   async fn encode(&self, input: String) -> Result<String, CodecError> {
      Ok(URL_SAFE_NO_PAD.encode(input.as_bytes()))
   }

   async fn decode(&self, output: String) -> Result<String, CodecError> {
      let bytes = match URL_SAFE_NO_PAD.decode(&output) {
         Ok(bytes) => bytes,
         Err(_) => URL_SAFE.decode(&output)?,
      };
      String::from_utf8(bytes).map_err(|e| CodecError::Message(e.to_string()))
   }
}
