//! Portfolio chatbot flow — answers visitor questions from the submitted
//! portfolio data, nothing else.

use crate::flows::prompts::{PORTFOLIO_CHAT_PROMPT_TEMPLATE, PORTFOLIO_CHAT_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::portfolio::models::Profile;

/// Fallback reply for any chat failure. Raw errors never reach visitors.
pub const CHAT_APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// In-band reply when the request carries no portfolio data or no query.
pub const CHAT_MISSING_INPUT: &str = "I need more information to answer that. \
    Please ensure the portfolio data and your query are provided.";

/// Runs one chat turn: render the portfolio context, fill the template,
/// one LLM call.
pub async fn answer_query(
    llm: &LlmClient,
    profile: &Profile,
    query: &str,
) -> Result<String, LlmError> {
    let context = render_portfolio_context(profile);
    let prompt = PORTFOLIO_CHAT_PROMPT_TEMPLATE
        .replace("{portfolio_context}", &context)
        .replace("{user_query}", query);

    let response = llm.call(&prompt, PORTFOLIO_CHAT_SYSTEM).await?;
    let text = response.text().ok_or(LlmError::EmptyContent)?;
    Ok(text.trim().to_string())
}

/// Renders the profile into the plain-text block interpolated into the chat
/// prompt. Absent optional fields render as blank or are dropped entirely.
pub fn render_portfolio_context(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", profile.name.as_deref().unwrap_or("")));
    out.push_str(&format!(
        "Title: {}\n",
        profile.title.as_deref().unwrap_or("")
    ));
    out.push_str(&format!("About Me: {}\n", profile.about_me));

    out.push_str("\nSkills:\n");
    for skill in &profile.skills {
        out.push_str(&format!("- {skill}\n"));
    }

    out.push_str("\nProjects:\n");
    for project in &profile.projects {
        out.push_str(&format!("- Project Name: {}\n", project.name));
        out.push_str(&format!("  Description: {}\n", project.description));
        if let Some(link) = &project.link {
            out.push_str(&format!("  Link: {link}\n"));
        }
    }

    out.push_str("\nContact Info:\n");
    out.push_str(&format!("Email: {}\n", profile.contact_info.email));
    if let Some(phone) = &profile.contact_info.phone {
        out.push_str(&format!("Phone: {phone}\n"));
    }

    out
}
