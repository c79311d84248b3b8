//! Authenticated-encryption codec: scrypt key derivation + AES-256-GCM.

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use scrypt::Params;
use tracing::trace;

use super::{Codec, CodecError};

const VERSION: u8 = 0x01;
const SALT_LEN: usize = 16;
const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;
/// ver(1) + salt(16) + iv(12) + tag(16), ciphertext may be empty.
const MIN_LEN: usize = 1 + SALT_LEN + IV_LEN + TAG_LEN;

// scrypt N=2^15, r=8, p=1
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Encrypts tokens with AES-256-GCM under a key derived from a caller
/// secret and a random per-token salt via scrypt.
///
/// Encoding is `base64(ver || salt || iv || tag || ciphertext)`. Decoding
/// rejects inputs shorter than 45 bytes or with an unrecognized version
/// byte, and fails on any authentication-tag mismatch (tampering or the
/// wrong secret).
pub struct AesCodec {
   secret: Vec<u8>,
}

impl AesCodec {
   pub fn new(secret: impl Into<Vec<u8>>) -> Self {
      Self { secret: secret.into() }
   }

   /// Load the secret from an environment variable.
   pub fn from_env(var: &str) -> Result<Self, CodecError> {
      let secret = std::env::var(var)
         .map_err(|_| CodecError::Message(format!("environment variable \"{var}\" is not set")))?;
      Ok(Self::new(secret.into_bytes()))
   }

   fn derive_key(&self, salt: &[u8]) -> Result<[u8; KEY_LEN], CodecError> {
      let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
         .map_err(|e| CodecError::KeyDerivation(e.to_string()))?;
      let mut key = [0u8; KEY_LEN];
      scrypt::scrypt(&self.secret, salt, &params, &mut key).map_err(|e| CodecError::KeyDerivation(e.to_string()))?;
      Ok(key)
   }
}

#[async_trait]
impl Codec for AesCodec {
   type Input = String;
   type Output = String;

   async fn encode(&self, input: String) -> Result<String, CodecError> {
      let mut salt = [0u8; SALT_LEN];
      rand::thread_rng().fill_bytes(&mut salt);
      let key_bytes = self.derive_key(&salt)?;
      let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));

      let mut iv = [0u8; IV_LEN];
      rand::thread_rng().fill_bytes(&mut iv);
      let nonce = Nonce::from_slice(&iv);

      let mut aad = Vec::with_capacity(1 + SALT_LEN);
      aad.push(VERSION);
      aad.extend_from_slice(&salt);

      // aes-gcm appends the tag after the ciphertext; the wire format here
      // places the tag before the ciphertext, so split and reorder.
      let sealed = cipher
         .encrypt(nonce, Payload { msg: input.as_bytes(), aad: &aad })
         .map_err(|e| CodecError::Message(format!("encryption failed: {e}")))?;
      let tag_at = sealed.len() - TAG_LEN;
      let (ciphertext, tag) = sealed.split_at(tag_at);

      let mut out = Vec::with_capacity(aad.len() + IV_LEN + TAG_LEN + ciphertext.len());
      out.extend_from_slice(&aad);
      out.extend_from_slice(&iv);
      out.extend_from_slice(tag);
      out.extend_from_slice(ciphertext);

      trace!("encoded authenticated cursor token");
      Ok(STANDARD.encode(out))
   }

   async fn decode(&self, output: String) -> Result<String, CodecError> {
      let raw = STANDARD.decode(output.as_bytes())?;
      if raw.len() < MIN_LEN {
         return Err(CodecError::TooShort);
      }

      let version = raw[0];
      if version != VERSION {
         return Err(CodecError::UnsupportedVersion);
      }

      let salt = &raw[1..1 + SALT_LEN];
      let iv = &raw[1 + SALT_LEN..1 + SALT_LEN + IV_LEN];
      let tag = &raw[1 + SALT_LEN + IV_LEN..MIN_LEN];
      let ciphertext = &raw[MIN_LEN..];

      let key_bytes = self.derive_key(salt)?;
      let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));
      let nonce = Nonce::from_slice(iv);

      let mut aad = Vec::with_capacity(1 + SALT_LEN);
      aad.push(version);
      aad.extend_from_slice(salt);

      let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_LEN);
      sealed.extend_from_slice(ciphertext);
      sealed.extend_from_slice(tag);

      let plaintext = cipher
         .decrypt(nonce, Payload { msg: &sealed, aad: &aad })
         .map_err(|_| CodecError::AuthenticationFailed)?;

      trace!("decoded authenticated cursor token");
      String::from_utf8(plaintext).map_err(|e| CodecError::Message(e.to_string()))
   }
}
