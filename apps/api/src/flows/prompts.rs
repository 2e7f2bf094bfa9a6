// All LLM prompt constants for the AI flows.

/// System prompt for the portfolio chatbot — grounds answers in the
/// submitted portfolio data only.
pub const PORTFOLIO_CHAT_SYSTEM: &str =
    "You are a helpful AI assistant for a personal portfolio website. \
    Your goal is to answer questions based *only* on the provided portfolio data. \
    Do not make up information. If the answer is not in the data, say that you \
    don't have that information or ask the user to use the contact form. \
    Be concise and friendly.";

/// Chatbot prompt template. Replace `{portfolio_context}` and `{user_query}`
/// before sending.
pub const PORTFOLIO_CHAT_PROMPT_TEMPLATE: &str = r#"Portfolio Data:
{portfolio_context}

User's Question: {user_query}

Provide your answer to the user's question."#;

/// System prompt for resume extraction — enforces JSON-only output.
pub const RESUME_EXTRACT_SYSTEM: &str =
    "You are an expert resume parser. Your task is to extract structured \
    information from resume text to populate a personal portfolio website. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent information not present in the resume.";

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract structured portfolio information from the following resume text.

Return a JSON object with this EXACT schema (every field optional — omit anything the resume does not contain):
{
  "name": "Full name of the individual",
  "title": "Professional title or a suitable headline, e.g. \"Software Engineer\"",
  "aboutMe": "A concise summary, objective, or personal statement",
  "skills": ["skill", "..."],
  "projects": [
    {"name": "Project or role name", "description": "What it is and what was done", "link": "https://..."}
  ],
  "contactInfo": {"email": "address@example.com", "phone": "+1 ..."}
}

Rules for extraction:
- Focus on accuracy and completeness based *only* on the provided text. If a piece of information is not present, omit the field. Do not invent information.
- Skills can be technical skills, software proficiency, programming languages, or soft skills. Provide them as an array of strings.
- Projects cover both projects and significant work experiences. If specific project names are not clear, use the company name or a role title as the project name.
- The aboutMe text should be a summary, objective, or personal statement suitable for an "About Me" section.

RESUME TEXT:
{resume_text}"#;
