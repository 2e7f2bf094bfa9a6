// AI flows: chatbot over the submitted portfolio and resume extraction.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod chatbot;
pub mod handlers;
pub mod prompts;
pub mod resume_extract;
