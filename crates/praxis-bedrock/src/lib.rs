//! praxis-bedrock
//!
//! The AI drafting collaborator. One blocking Converse invocation turns an
//! aggregated response summary into report prose; the reply is an opaque
//! text blob the lifecycle stores as generated content. No retry policy
//! lives here — a failed generation is surfaced and the caller re-invokes
//! manually.

pub mod draft;
pub mod error;
pub mod prompt;
pub mod tokens;

use aws_sdk_bedrockruntime::Client;

/// Build a Bedrock runtime client from the ambient AWS environment.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
