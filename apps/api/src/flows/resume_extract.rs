//! Resume extraction flow — structured portfolio data out of raw resume
//! text.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{RESUME_EXTRACT_PROMPT_TEMPLATE, RESUME_EXTRACT_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Partial profile extracted from a resume. Every field is optional; image
/// fields are absent because resume text never carries them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ExtractedProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ExtractedContactInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Extracts a partial profile from resume text. One LLM call; an empty
/// model reply yields the empty partial, the nothing-found result.
pub async fn extract_resume_data(
    llm: &LlmClient,
    resume_text: &str,
) -> Result<ExtractedProfile, LlmError> {
    let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    match llm
        .call_json::<ExtractedProfile>(&prompt, RESUME_EXTRACT_SYSTEM)
        .await
    {
        Ok(extracted) => Ok(extracted),
        Err(LlmError::EmptyContent) => Ok(ExtractedProfile::default()),
        Err(e) => Err(e),
    }
}
