use std::fmt;
use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use serde::Serialize;
use serde_json::Value;

use crate::algorithm::Algorithm;
use crate::codec::{self, Mapping};
use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{self, DecodedToken, HEADER_ALGORITHM, HEADER_TYPE, Segments, TOKEN_TYPE};

/// Configuration for a [`TokenEngine`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    default_algorithm: Algorithm,
}

impl EngineConfig {
    /// Create a new config with defaults (HS256)
    pub fn new() -> Self {
        Self::default()
    }

    /// Algorithm written to `alg` when the caller does not override it
    pub fn default_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.default_algorithm = algorithm;
        self
    }

    /// The configured default algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.default_algorithm
    }
}

/// Issues, decodes and verifies tokens signed with one shared secret
///
/// The engine holds no mutable state. Clones share the secret, and a single
/// instance can be used from many threads at once.
///
/// ```
/// use jwtmint::TokenEngine;
/// use serde_json::json;
///
/// let engine = TokenEngine::new("secret");
/// let token = engine.encode(&json!({"foo": "bar"}))?;
/// assert!(engine.is_valid(&token));
/// # Ok::<(), jwtmint::Error>(())
/// ```
#[derive(Clone)]
pub struct TokenEngine {
    secret: Arc<[u8]>,
    config: EngineConfig,
}

impl TokenEngine {
    /// Create an engine signing with HS256 by default
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_config(secret, EngineConfig::default())
    }

    /// Create an engine with an explicit [`EngineConfig`]
    pub fn with_config(secret: impl AsRef<[u8]>, config: EngineConfig) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
            config,
        }
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `{"alg": <default algorithm>, "typ": "JWT"}`
    pub fn default_header(&self) -> Mapping {
        let mut header = Mapping::new();
        header.insert(
            HEADER_ALGORITHM.into(),
            Value::from(self.config.default_algorithm.as_str()),
        );
        header.insert(HEADER_TYPE.into(), Value::from(TOKEN_TYPE));
        header
    }

    /// Encode and sign `payload` under the default header
    pub fn encode<T>(&self, payload: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        self.encode_with_header(payload, &Mapping::new())
    }

    /// Encode and sign `payload`, merging `header` over the default header
    ///
    /// Keys in `header` replace the defaults; new keys are appended after
    /// `alg` and `typ`. The merged `alg` selects the signing algorithm.
    ///
    /// The size limits [`decode`](Self::decode) enforces apply here too, so
    /// every token this returns can be decoded and verified. A header or
    /// payload that would break them fails with [`Error::TokenTooLarge`]
    /// before anything is signed.
    pub fn encode_with_header<T, H>(&self, payload: &T, header: &H) -> Result<String>
    where
        T: Serialize + ?Sized,
        H: Serialize + ?Sized,
    {
        let payload = codec::to_mapping(payload, "payload")?;
        let overrides = codec::to_mapping(header, "header")?;

        let mut merged = self.default_header();
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        let algorithm = token::resolve_algorithm(&merged)?;

        let encoded_header = codec::encode_within(&merged, MAX_DECODED_HEADER_SIZE)?;
        let encoded_payload = codec::encode_within(&payload, MAX_DECODED_PAYLOAD_SIZE)?;

        let size = encoded_header.len() + encoded_payload.len() + 2 + algorithm.signature_len();
        if size > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size,
                max: MAX_TOKEN_LENGTH,
            });
        }

        let signature = algorithm.sign(&self.secret, &encoded_header, &encoded_payload)?;

        tracing::trace!(algorithm = %algorithm, "encoded token");

        Ok(format!("{encoded_header}.{encoded_payload}.{signature}"))
    }

    /// Decode a token without checking its signature
    ///
    /// See [`DecodedToken::parse`] for how missing and malformed segments are
    /// handled.
    pub fn decode(&self, token: &str) -> Result<DecodedToken> {
        DecodedToken::parse(token)
    }

    /// Sign pre-encoded segments with the named algorithm
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for anything other than
    /// `HS256`, `HS384` or `HS512`.
    pub fn sign(&self, algorithm: &str, encoded_header: &str, encoded_payload: &str) -> Result<String> {
        Algorithm::from_str(algorithm)?.sign(&self.secret, encoded_header, encoded_payload)
    }

    /// Decode a token and check its signature
    ///
    /// The signature is recomputed over the header and payload segments
    /// exactly as they appear in `token`, never over a re-encoding of the
    /// decoded values.
    pub fn verify(&self, token: &str) -> Result<DecodedToken> {
        let decoded = DecodedToken::parse(token)?;

        let segments = Segments::split(token);
        let (encoded_header, encoded_payload) =
            segments.signed_parts().ok_or(Error::InvalidFormat)?;

        let algorithm = decoded.algorithm()?;
        let expected = algorithm.sign(&self.secret, encoded_header, encoded_payload)?;

        if constant_time_eq(expected.as_bytes(), decoded.signature.as_bytes()) {
            Ok(decoded)
        } else {
            Err(Error::SignatureInvalid)
        }
    }

    /// Whether `token` carries a valid signature for this engine's secret
    ///
    /// Fails closed: malformed tokens, unsupported or missing algorithms and
    /// signature mismatches all return `false`.
    pub fn is_valid(&self, token: &str) -> bool {
        match self.verify(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "token rejected");
                false
            }
        }
    }
}

impl fmt::Debug for TokenEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenEngine")
            .field("secret", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}
