//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT payload JSON (48KB)
/// Bounded by what fits in a token of `MAX_TOKEN_LENGTH` characters
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 48 * 1024;

/// Length of the random `jti` generated by [`Claims::new`](crate::Claims::new)
pub(crate) const JWT_ID_LENGTH: usize = 12;
