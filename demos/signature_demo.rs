//! Webhook Signature Demo
//!
//! This example signs a webhook request the way a sender does and verifies
//! it on the receiving side. Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run --example signature_demo
//! ```

use tracing_subscriber::EnvFilter;
use webhook_signature::{
    SIGNATURE_HEADER, Secrets, WebhookConfig, check_signature_with, create_signature_header_now,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🔐 Webhook Signature Demo");
    println!("=========================\n");

    // Fall back to a demo secret pair when nothing is configured
    let mut config = WebhookConfig::from_env();
    if !config.is_configured() {
        config.secret = "my-secret-key".to_string();
        config.old_secret = Some("my-old-secret-key".to_string());
    }
    let hook_url = config
        .hook_url
        .clone()
        .unwrap_or_else(|| "https://example.com/hook".to_string());
    let body = r#"{"id":"pay_8c1f2a","status":"COMPLETED"}"#;
    let secrets: Secrets = config.secrets();

    println!("Configuration:");
    println!("  Hook URL: {hook_url}");
    println!("  Body: {body}");
    println!("  Rotating: {}", secrets.is_rotating());

    let header = match create_signature_header_now(&secrets, &hook_url, body) {
        Ok(header) => header,
        Err(e) => {
            println!("❌ Error generating signature: {e}");
            return;
        }
    };

    println!("\n✅ Generated Signature:");
    println!("  {SIGNATURE_HEADER}: {header}");

    println!("\n📋 Example curl command:");
    println!("curl -X POST -H '{SIGNATURE_HEADER}: {header}' \\");
    println!("     -d '{body}' \\");
    println!("     {hook_url}");

    match check_signature_with(&header, &secrets, &hook_url, body) {
        Ok(true) => println!("\n🔍 Receiver accepted the signature"),
        Ok(false) => println!("\n🔍 Receiver rejected the signature"),
        Err(e) => println!("\n❌ Invalid signature header: {}", e.user_message()),
    }

    println!("\n⚙️  To use your own secrets, set environment variables:");
    println!("  export WEBHOOK_SECRET=...");
    println!("  export WEBHOOK_OLD_SECRET=...   # only during rotation");
    println!("  export WEBHOOK_HOOK_URL={hook_url}");
}
