//! HMAC signing algorithms
//!
//! The allow-list is closed: HS256, HS384 and HS512. Identifiers are matched
//! exactly, so `"hs256"`, `"none"` and the empty string are all rejected
//! before a MAC is ever computed.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Algorithm identifier from JWT header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Parse algorithm string from JWT header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(Error::UnsupportedAlgorithm(s.into())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Length of the hex-encoded signature this algorithm produces
    pub const fn signature_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 64,
            Algorithm::HS384 => 96,
            Algorithm::HS512 => 128,
        }
    }

    /// Compute the MAC of `message` keyed by `secret`
    pub(crate) fn mac(&self, secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Algorithm::HS256 => mac_with::<HmacSha256>(secret, message),
            Algorithm::HS384 => mac_with::<HmacSha384>(secret, message),
            Algorithm::HS512 => mac_with::<HmacSha512>(secret, message),
        }
    }

    /// Sign `encoded_header.encoded_payload` and return the lowercase hex digest
    pub fn sign(&self, secret: &[u8], encoded_header: &str, encoded_payload: &str) -> Result<String> {
        let signing_input = signing_input(encoded_header, encoded_payload);
        self.mac(secret, signing_input.as_bytes()).map(hex::encode)
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_str(s)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The exact bytes covered by the signature
pub(crate) fn signing_input(encoded_header: &str, encoded_payload: &str) -> String {
    let mut input = String::with_capacity(encoded_header.len() + encoded_payload.len() + 1);
    input.push_str(encoded_header);
    input.push('.');
    input.push_str(encoded_payload);
    input
}

fn mac_with<M: Mac + hmac::digest::KeyInit>(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    // HMAC takes keys of any length; the error arm is unreachable for these types
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|e| Error::InvalidKey(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
