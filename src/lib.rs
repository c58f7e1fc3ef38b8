//! # jwtmint - HMAC-signed JSON Web Tokens
//!
//! **jwtmint** issues, decodes and verifies compact tokens of the form
//!
//! ```text
//! base64url(header-json) . base64url(payload-json) . hex(hmac(header.payload))
//! ```
//!
//! The header and payload segments are unpadded Base64URL. The signature is
//! the lowercase hex digest of an HMAC over the two encoded segments joined by
//! `.`, keyed by a secret fixed when the [`TokenEngine`] is created.
//!
//! ## Quick Start
//!
//! ```
//! use jwtmint::{Claims, TokenEngine};
//!
//! let engine = TokenEngine::new("secret");
//!
//! let claims = Claims::new().issuer("https://issuer.example").subject("user-1");
//! let token = engine.encode(&claims)?;
//!
//! assert!(engine.is_valid(&token));
//! assert!(!TokenEngine::new("wrong").is_valid(&token));
//!
//! let decoded = engine.verify(&token)?;
//! assert_eq!(decoded.claims["sub"], "user-1");
//! # Ok::<(), jwtmint::Error>(())
//! ```
//!
//! ## Algorithms
//!
//! Only HMAC is supported, and only with the SHA-2 family:
//!
//! - **HS256** - HMAC with SHA-256 (default)
//! - **HS384** - HMAC with SHA-384
//! - **HS512** - HMAC with SHA-512
//!
//! Any other `alg` value, including `"none"` and the empty string, is
//! rejected before a MAC is computed.
//!
//! ## Verification
//!
//! [`TokenEngine::is_valid`] answers yes or no and never returns an error: a
//! token that cannot be decoded, names an unsupported algorithm, or carries
//! the wrong signature is simply invalid. [`TokenEngine::verify`] performs the
//! same check and returns the decoded token or the reason it was rejected.
//!
//! The signature is always recomputed over the segments exactly as they
//! appear in the token, and compared in constant time.
//!
//! Claims such as `exp` and `nbf` are carried but never interpreted.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 2104](https://datatracker.ietf.org/doc/html/rfc2104) - HMAC

mod error;

pub mod algorithm;
pub mod claims;
pub mod codec;
pub mod engine;
pub mod token;
pub mod utils;

pub(crate) mod limits;

pub use algorithm::Algorithm;
pub use claims::{Claims, StandardClaims};
pub use codec::Mapping;
pub use engine::{EngineConfig, TokenEngine};
pub use error::{Error, Result};
pub use token::DecodedToken;
