use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use praxis_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::tokens;

/// The result of one drafting invocation, before it is persisted.
pub struct DraftResult {
    pub id: Uuid,
    pub model_id: String,
    pub content: String,
    pub usage: TokenCount,
}

/// Invoke Bedrock to draft report prose from aggregated responses.
///
/// Single blocking request/response; the reply is treated as an opaque text
/// blob and lands in the report record as generated content for the
/// clinician to edit.
pub async fn generate_report_draft(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<DraftResult, BedrockError> {
    let invocation_id = Uuid::new_v4();
    info!(invocation_id = %invocation_id, model = model_id, "starting report draft generation");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let content = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if content.trim().is_empty() {
        return Err(BedrockError::ResponseParse(
            "model returned an empty draft".to_string(),
        ));
    }

    let usage = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or(TokenCount {
            input: 0,
            output: 0,
        });

    info!(
        invocation_id = %invocation_id,
        input_tokens = usage.input,
        output_tokens = usage.output,
        "report draft generation complete"
    );

    Ok(DraftResult {
        id: invocation_id,
        model_id: model_id.to_string(),
        content,
        usage,
    })
}
