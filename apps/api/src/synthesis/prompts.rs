// All LLM prompt constants for the Field Synthesizer.

/// System prompt for field extraction — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str =
    "You are an expert document analyst. \
    Extract the total years of experience and the list of skills from a document. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Field extraction prompt template. Replace `{document_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract ONLY the total years of experience and the list of skills from the following document.

---------------------
{document_text}
---------------------

Return a JSON object with this EXACT schema (no extra fields):
{
  "years_of_experience": "5",
  "skills": "Python, Go, PostgreSQL"
}

Rules:
- "years_of_experience" is the total stated or implied years of professional experience. Use "N/A" if the document gives no basis for a number.
- "skills" is a comma-separated list of the technical skills named in the document. Use "N/A" if none are named.
- Do NOT invent values not supported by the document."#;
