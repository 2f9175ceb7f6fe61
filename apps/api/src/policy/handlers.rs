//! Axum route handlers for the generation endpoints.
//!
//! Contract: `generatedAt` is computed once per request, before any other
//! processing, and echoed in every response shape — success or error — so
//! the caller can always display "as of" timing. These handlers therefore
//! build their responses directly instead of going through `AppError`.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::llm_client::LlmError;
use crate::models::answer_set::AnswerSet;
use crate::policy::assembler::{assemble, formatted_date};
use crate::policy::prompts::build_prompt;
use crate::policy::validation::{validate_for_generation, ValidationError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PolicyResponse {
    policy_content: String,
    generated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PolicyErrorResponse {
    error: String,
    generated_at: String,
}

fn success(policy_content: String, generated_at: String) -> Response {
    (
        StatusCode::OK,
        Json(PolicyResponse {
            policy_content,
            generated_at,
        }),
    )
        .into_response()
}

fn failure(status: StatusCode, error: String, generated_at: &str) -> Response {
    (
        status,
        Json(PolicyErrorResponse {
            error,
            generated_at: generated_at.to_string(),
        }),
    )
        .into_response()
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses and gates the submitted answers; shared by both generation
/// endpoints. Takes the raw body rather than an extracted value so that a
/// syntactically broken payload still gets the JSON error shape with the
/// already-computed timestamp. Unknown enum codes fail closed here, never
/// silently coerced.
fn parse_answers(body: &[u8], generated_at: &str) -> Result<AnswerSet, Box<Response>> {
    let answers: AnswerSet = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected malformed answer set: {e}");
        Box::new(failure(
            StatusCode::BAD_REQUEST,
            "Dados obrigatórios ausentes ou inválidos no formulário.".to_string(),
            generated_at,
        ))
    })?;

    if let Err(errors) = validate_for_generation(&answers) {
        return Err(Box::new(failure(
            StatusCode::BAD_REQUEST,
            join_messages(&errors),
            generated_at,
        )));
    }

    Ok(answers)
}

/// POST /api/v1/policies/generate
///
/// Generative variant: builds the prompt pair and calls the external
/// text-generation collaborator. Blank output after trimming is a 500, not
/// an empty document. Underlying causes are logged, never echoed to clients.
pub async fn handle_generate(State(state): State<AppState>, body: Bytes) -> Response {
    let generated_at = formatted_date(Utc::now().date_naive());

    let answers = match parse_answers(&body, &generated_at) {
        Ok(answers) => answers,
        Err(response) => return *response,
    };

    let parts = build_prompt(&answers, &generated_at);
    info!("Generating policy for project {:?}", answers.project_name);

    match state
        .generator
        .generate(&parts.system_instruction, &parts.user_prompt)
        .await
    {
        Ok(content) => success(content, generated_at),
        Err(LlmError::EmptyContent) => {
            warn!("Generation returned blank content for {:?}", answers.project_name);
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "O modelo não retornou conteúdo. Tente novamente.".to_string(),
                &generated_at,
            )
        }
        Err(e) => {
            error!("Generation call failed: {e}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao chamar o serviço de geração. Verifique a configuração ou os logs."
                    .to_string(),
                &generated_at,
            )
        }
    }
}

/// POST /api/v1/policies/assemble
///
/// Deterministic variant: same request and response contract, no external
/// call. Same inputs and same date always yield byte-identical output.
pub async fn handle_assemble(body: Bytes) -> Response {
    let today = Utc::now().date_naive();
    let generated_at = formatted_date(today);

    let answers = match parse_answers(&body, &generated_at) {
        Ok(answers) => answers,
        Err(response) => return *response,
    };

    success(assemble(&answers, today), generated_at)
}

/// Fallback for non-POST verbs on the generation routes.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({
            "error": "Method Not Allowed. Use POST to generate the policy."
        })),
    )
        .into_response()
}
