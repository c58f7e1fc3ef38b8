pub mod base64url;
pub(crate) mod finite;

pub use base64url::{decode, decode_bytes, encode, encode_bytes};
