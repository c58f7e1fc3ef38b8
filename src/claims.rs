//! Claims construction and reserved-claim access
//!
//! The engine signs any JSON object. [`Claims`] is a convenience for building
//! one that carries the registered claims of RFC 7519 Section 4.1, and
//! [`StandardClaims`] reads them back out of a decoded token.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::codec::{self, Mapping};
use crate::error::Result;
use crate::limits::JWT_ID_LENGTH;

/// Issuer claim key
pub const ISSUER: &str = "iss";
/// Subject claim key
pub const SUBJECT: &str = "sub";
/// Audience claim key
pub const AUDIENCE: &str = "aud";
/// Expiration time claim key
pub const EXPIRATION_TIME: &str = "exp";
/// Not-before claim key
pub const NOT_BEFORE: &str = "nbf";
/// Issued-at claim key
pub const ISSUED_AT: &str = "iat";
/// JWT ID claim key
pub const JWT_ID: &str = "jti";

/// Every registered claim key, in RFC order
pub const RESERVED_CLAIMS: [&str; 7] = [
    ISSUER,
    SUBJECT,
    AUDIENCE,
    EXPIRATION_TIME,
    NOT_BEFORE,
    ISSUED_AT,
    JWT_ID,
];

/// The `StandardClaims` trait reads the registered JWT claims.
///
/// Values of the wrong JSON type read as `None`.
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - every recipient, whether `aud` is a string or a list
    fn audience(&self) -> Vec<&str>;
    /// Expiration Time (exp) - seconds since Unix epoch
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - seconds since Unix epoch
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - seconds since Unix epoch
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
}

impl StandardClaims for Mapping {
    fn issuer(&self) -> Option<&str> {
        self.get(ISSUER).and_then(Value::as_str)
    }

    fn subject(&self) -> Option<&str> {
        self.get(SUBJECT).and_then(Value::as_str)
    }

    fn audience(&self) -> Vec<&str> {
        match self.get(AUDIENCE) {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn expiration(&self) -> Option<i64> {
        self.get(EXPIRATION_TIME).and_then(Value::as_i64)
    }

    fn not_before(&self) -> Option<i64> {
        self.get(NOT_BEFORE).and_then(Value::as_i64)
    }

    fn issued_at(&self) -> Option<i64> {
        self.get(ISSUED_AT).and_then(Value::as_i64)
    }

    fn jwt_id(&self) -> Option<&str> {
        self.get(JWT_ID).and_then(Value::as_str)
    }
}

/// Builder for a claims object
///
/// ```
/// use jwtmint::{Claims, StandardClaims};
///
/// let claims = Claims::new().issuer("https://issuer.example").subject("user-1");
/// assert_eq!(claims.as_mapping().subject(), Some("user-1"));
/// assert_eq!(claims.as_mapping().jwt_id().map(str::len), Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Claims {
    claims: Mapping,
}

impl Claims {
    /// Claims pre-populated with a random `jti` and the current `iat`
    pub fn new() -> Self {
        let mut claims = Mapping::new();
        claims.insert(JWT_ID.into(), Value::String(random_jwt_id()));
        claims.insert(ISSUED_AT.into(), Value::from(unix_now()));
        Self { claims }
    }

    /// Claims with nothing pre-populated
    pub fn empty() -> Self {
        Self {
            claims: Mapping::new(),
        }
    }

    /// Default `jti` and `iat`, overridden by whatever `claims` contains
    pub fn with_defaults<T>(claims: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let mut merged = Self::new();
        merged.claims.extend(codec::to_mapping(claims, "claims")?);
        Ok(merged)
    }

    pub fn issuer(self, issuer: impl Into<String>) -> Self {
        self.claim(ISSUER, issuer.into())
    }

    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.claim(SUBJECT, subject.into())
    }

    /// Single audience, stored as a string
    pub fn audience(self, audience: impl Into<String>) -> Self {
        self.claim(AUDIENCE, audience.into())
    }

    /// Several audiences, stored as a list
    pub fn audiences<I, S>(self, audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<Value> = audiences
            .into_iter()
            .map(|aud| Value::String(aud.into()))
            .collect();
        self.claim(AUDIENCE, list)
    }

    /// Expiration time in Unix seconds. Carried, never enforced.
    pub fn expiration(self, timestamp: i64) -> Self {
        self.claim(EXPIRATION_TIME, timestamp)
    }

    pub fn not_before(self, timestamp: i64) -> Self {
        self.claim(NOT_BEFORE, timestamp)
    }

    pub fn issued_at(self, timestamp: i64) -> Self {
        self.claim(ISSUED_AT, timestamp)
    }

    pub fn jwt_id(self, id: impl Into<String>) -> Self {
        self.claim(JWT_ID, id.into())
    }

    /// Set any claim, replacing an existing value for the same key
    pub fn claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.claims
    }

    pub fn into_mapping(self) -> Mapping {
        self.claims
    }
}

impl Default for Claims {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Claims> for Mapping {
    fn from(claims: Claims) -> Self {
        claims.claims
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.claims)
    }
}

impl fmt::Display for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display on Value is infallible compact JSON
        write!(f, "{}", Value::Object(self.claims.clone()))
    }
}

fn random_jwt_id() -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut rng = rand::rng();
    (0..JWT_ID_LENGTH)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_populates_defaults() {
        let before = unix_now();
        let claims = Claims::new();
        let mapping = claims.as_mapping();

        let jti = mapping.jwt_id().unwrap();
        assert_eq!(jti.len(), JWT_ID_LENGTH);
        assert!(jti.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let iat = mapping.issued_at().unwrap();
        assert!(iat >= before && iat <= unix_now());
    }

    #[test]
    fn test_empty_has_no_claims() {
        assert!(Claims::empty().as_mapping().is_empty());
    }

    #[test]
    fn test_random_ids_differ() {
        // 48 bits of randomness; a collision here means the generator is broken
        assert_ne!(random_jwt_id(), random_jwt_id());
    }

    #[test]
    fn test_with_defaults_caller_wins() {
        let claims = Claims::with_defaults(&json!({"jti": "fixed", "role": "admin"})).unwrap();
        let mapping = claims.as_mapping();
        assert_eq!(mapping.jwt_id(), Some("fixed"));
        assert_eq!(mapping.get("role"), Some(&json!("admin")));
        assert!(mapping.issued_at().is_some());

        assert!(Claims::with_defaults(&42).is_err());
    }

    #[test]
    fn test_builder_setters() {
        let claims = Claims::empty()
            .issuer("https://issuer.example")
            .subject("user-1")
            .audience("api")
            .expiration(2_000_000_000)
            .not_before(1_000_000_000)
            .issued_at(1_000_000_001)
            .jwt_id("abc")
            .claim("scope", "read write");
        let mapping = claims.as_mapping();

        assert_eq!(mapping.issuer(), Some("https://issuer.example"));
        assert_eq!(mapping.subject(), Some("user-1"));
        assert_eq!(mapping.audience(), vec!["api"]);
        assert_eq!(mapping.expiration(), Some(2_000_000_000));
        assert_eq!(mapping.not_before(), Some(1_000_000_000));
        assert_eq!(mapping.issued_at(), Some(1_000_000_001));
        assert_eq!(mapping.jwt_id(), Some("abc"));
        assert_eq!(mapping.get("scope"), Some(&json!("read write")));
    }

    #[test]
    fn test_audience_list() {
        let claims = Claims::empty().audiences(["a", "b"]);
        assert_eq!(claims.as_mapping().get(AUDIENCE), Some(&json!(["a", "b"])));
        assert_eq!(claims.as_mapping().audience(), vec!["a", "b"]);
    }

    #[test]
    fn test_wrong_types_read_as_none() {
        let mapping = codec::to_mapping(&json!({"iss": 1, "exp": "soon", "aud": 5}), "claims").unwrap();
        assert_eq!(mapping.issuer(), None);
        assert_eq!(mapping.expiration(), None);
        assert!(mapping.audience().is_empty());
    }

    #[test]
    fn test_display_is_json() {
        let claims = Claims::empty().subject("s").claim("n", 1);
        assert_eq!(claims.to_string(), r#"{"sub":"s","n":1}"#);
    }

    #[test]
    fn test_reserved_claims() {
        assert_eq!(
            RESERVED_CLAIMS,
            ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"]
        );
    }
}
