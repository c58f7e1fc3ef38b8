//! Basic example: issue a token, decode it, verify it, tamper with it
//!
//! Run with `RUST_LOG=jwtmint=debug` to see why rejected tokens fail.

use jwtmint::*;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtmint=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtmint - Basic Example ===\n");

    let engine = TokenEngine::new("your-256-bit-secret-key-here!");

    // Step 1: Build claims and encode
    let claims = Claims::new()
        .issuer("https://example.com")
        .subject("user-123")
        .audience("my-api")
        .claim("roles", json!(["reader"]));
    let token = engine.encode(&claims)?;
    println!("Token: {token}\n");

    // Step 2: Decode without verifying
    let decoded = engine.decode(&token)?;
    println!("Header: {}", serde_json::Value::Object(decoded.header.clone()));
    println!("Claims: {}", serde_json::Value::Object(decoded.claims.clone()));
    println!("Signature: {}\n", decoded.signature);

    // Step 3: Verify
    println!("Valid with correct secret: {}", engine.is_valid(&token));
    println!(
        "Valid with wrong secret:   {}",
        TokenEngine::new("wrong-secret").is_valid(&token)
    );

    // Step 4: Tamper with the payload
    let forged_payload = utils::base64url::encode(r#"{"sub":"admin"}"#);
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = &forged_payload;
    let forged = parts.join(".");
    println!("Valid after tampering:     {}", engine.is_valid(&forged));

    // Step 5: Other algorithms via header override
    let hs512 = engine.encode_with_header(&claims, &json!({"alg": "HS512"}))?;
    let verified = engine.verify(&hs512)?;
    println!(
        "\nHS512 token verified, subject: {:?}",
        verified.claims.subject()
    );

    Ok(())
}
