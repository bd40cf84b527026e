// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`CompletionProvider`] implementation mapping the neutral completion model
//! onto the Gemini wire format.

use async_trait::async_trait;
use voxbridge_core::{
    Candidate, ChatRole, CompletionProvider, CompletionRequest, CompletionResponse, TurnPart,
    VoxError,
};

use crate::client::GeminiClient;
use crate::types::{
    GenerateContentRequest, WireContent, WireFunctionDeclaration, WireGenerationConfig, WirePart,
    WireSystemInstruction, WireTools, default_safety_settings,
};

/// Maps a neutral [`CompletionRequest`] to the wire request shape.
fn to_wire(request: &CompletionRequest) -> GenerateContentRequest {
    let contents = request
        .turns
        .iter()
        .map(|turn| WireContent {
            role: match turn.role {
                ChatRole::Model => "model".to_string(),
                // Tool results are delivered in a user-role content entry.
                ChatRole::User | ChatRole::Tool => "user".to_string(),
            },
            parts: turn.parts.iter().map(part_to_wire).collect(),
        })
        .collect();

    let tools = if request.tools.is_empty() {
        None
    } else {
        Some(vec![WireTools {
            function_declarations: request
                .tools
                .iter()
                .map(|t| WireFunctionDeclaration {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    parameters: t.parameters.clone(),
                })
                .collect(),
        }])
    };

    GenerateContentRequest {
        contents,
        system_instruction: request.system.as_ref().map(|text| WireSystemInstruction {
            parts: vec![WirePart::text(text.clone())],
        }),
        tools,
        generation_config: WireGenerationConfig {
            temperature: request.sampling.temperature,
            top_k: request.sampling.top_k,
            top_p: request.sampling.top_p,
            max_output_tokens: request.sampling.max_output_tokens,
        },
        safety_settings: default_safety_settings(),
    }
}

fn part_to_wire(part: &TurnPart) -> WirePart {
    match part {
        TurnPart::Text { text } => WirePart::text(text.clone()),
        TurnPart::FunctionCall { name, args } => {
            WirePart::function_call(name.clone(), args.clone())
        }
        TurnPart::FunctionResult { name, result } => {
            // The API expects an object; non-object results are wrapped.
            let response = if result.is_object() {
                result.clone()
            } else {
                serde_json::json!({ "result": result })
            };
            WirePart::function_response(name.clone(), response)
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, VoxError> {
        let wire = to_wire(&request);
        let response = self.generate(&wire).await?;

        let candidates = response
            .candidates
            .into_iter()
            .map(|c| Candidate {
                parts: c
                    .content
                    .map(|content| {
                        content
                            .parts
                            .into_iter()
                            .filter_map(|p| {
                                if let Some(text) = p.text {
                                    Some(TurnPart::Text { text })
                                } else {
                                    p.function_call.map(|fc| TurnPart::FunctionCall {
                                        name: fc.name,
                                        args: fc.args,
                                    })
                                }
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Ok(CompletionResponse { candidates })
    }
}
