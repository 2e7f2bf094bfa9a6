//! AI flow endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::flows::chatbot::{answer_query, CHAT_APOLOGY, CHAT_MISSING_INPUT};
use crate::flows::resume_extract::{extract_resume_data, ExtractedProfile};
use crate::portfolio::models::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub portfolio_data: Option<Profile>,
    pub user_query: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub chatbot_response: String,
}

/// POST /api/v1/chat
///
/// Answers a visitor question from the submitted portfolio data. Always
/// replies 200 with a `chatbotResponse`: failures of any kind are logged
/// server-side and the body carries a generic apology instead.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let (Some(profile), Some(query)) = (req.portfolio_data, req.user_query) else {
        return Json(ChatResponse {
            chatbot_response: CHAT_MISSING_INPUT.to_string(),
        });
    };
    if query.is_empty() {
        return Json(ChatResponse {
            chatbot_response: CHAT_MISSING_INPUT.to_string(),
        });
    }

    let Some(llm) = &state.llm else {
        error!("Chat request received but GEMINI_API_KEY is not configured");
        return Json(ChatResponse {
            chatbot_response: CHAT_APOLOGY.to_string(),
        });
    };

    let chatbot_response = match answer_query(llm, &profile, &query).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Chatbot flow failed: {e}");
            CHAT_APOLOGY.to_string()
        }
    };

    Json(ChatResponse { chatbot_response })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResumeRequest {
    pub resume_text: String,
}

/// POST /api/v1/resume/extract
///
/// Extracts a partial profile from raw resume text. Model and transport
/// failures surface as the generic AI error response.
pub async fn extract_resume(
    State(state): State<AppState>,
    Json(req): Json<ExtractResumeRequest>,
) -> Result<Json<ExtractedProfile>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }

    let Some(llm) = &state.llm else {
        return Err(AppError::Llm("GEMINI_API_KEY is not configured".to_string()));
    };

    let extracted = extract_resume_data(llm, &req.resume_text)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(extracted))
}
