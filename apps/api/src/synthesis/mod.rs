//! Field Synthesizer — asks the LLM for years-of-experience and skills,
//! then recovers the two fields from the response.
//!
//! The prompt requests a JSON object, which is the primary parse path. The
//! legacy labeled-line markers remain as a fallback for models that answer
//! in prose; if neither form can be recovered the request fails instead of
//! persisting empty fields.

pub mod prompts;

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::synthesis::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};

const NOT_AVAILABLE: &str = "N/A";
const EXPERIENCE_MARKER: &str = "Years of Experience:";
const SKILLS_MARKER: &str = "Skills:";

/// The two derived fields plus the raw response text returned to the caller.
#[derive(Debug, Clone)]
pub struct FieldExtraction {
    pub years_of_experience: String,
    pub skills: String,
    pub raw_answer: String,
}

#[derive(Debug, PartialEq)]
struct ParsedFields {
    years_of_experience: String,
    skills: String,
}

/// Sends the concatenated document text through the extraction prompt and
/// parses the two fields out of the single response. No retry.
pub async fn synthesize_fields(
    llm: &LlmClient,
    segments: &[String],
) -> Result<FieldExtraction, AppError> {
    let document_text = segments.join("\n");
    let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{document_text}", &document_text);

    let response = llm
        .call(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Field extraction failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?;

    let fields = parse_fields(text).ok_or_else(|| {
        AppError::Llm(format!("Unrecognized extraction response format: {text}"))
    })?;

    Ok(FieldExtraction {
        years_of_experience: fields.years_of_experience,
        skills: fields.skills,
        raw_answer: text.to_string(),
    })
}

fn parse_fields(text: &str) -> Option<ParsedFields> {
    parse_structured(text).or_else(|| parse_markers(text))
}

/// Primary path: the response is a JSON object with the two requested keys.
/// Values may come back as strings, numbers, or arrays of strings.
fn parse_structured(text: &str) -> Option<ParsedFields> {
    let value: Value = serde_json::from_str(strip_json_fences(text)).ok()?;
    let object = value.as_object()?;

    let years = object.get("years_of_experience").and_then(field_to_string);
    let skills = object.get("skills").and_then(field_to_string);
    if years.is_none() && skills.is_none() {
        return None;
    }

    Some(ParsedFields {
        years_of_experience: years.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        skills: skills.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}

fn field_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

/// Fallback path: locate the literal markers in a prose response. The
/// experience value runs to the next newline; the skills value is the
/// remainder of the response. A missing marker yields "N/A" for that field.
fn parse_markers(text: &str) -> Option<ParsedFields> {
    let years = text
        .split_once(EXPERIENCE_MARKER)
        .map(|(_, rest)| rest.split('\n').next().unwrap_or("").trim().to_string());
    let skills = text
        .split_once(SKILLS_MARKER)
        .map(|(_, rest)| rest.trim().to_string());

    if years.is_none() && skills.is_none() {
        return None;
    }

    Some(ParsedFields {
        years_of_experience: years.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        skills: skills.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_both_present() {
        let fields = parse_fields("Years of Experience: 5\nSkills: Python, Go").unwrap();
        assert_eq!(fields.years_of_experience, "5");
        assert_eq!(fields.skills, "Python, Go");
    }

    #[test]
    fn test_markers_missing_skills_resolves_to_na() {
        let fields = parse_fields("Years of Experience: 12").unwrap();
        assert_eq!(fields.years_of_experience, "12");
        assert_eq!(fields.skills, "N/A");
    }

    #[test]
    fn test_markers_missing_experience_resolves_to_na() {
        let fields = parse_fields("Skills: Rust, PostgreSQL, Docker").unwrap();
        assert_eq!(fields.years_of_experience, "N/A");
        assert_eq!(fields.skills, "Rust, PostgreSQL, Docker");
    }

    #[test]
    fn test_no_markers_no_json_is_unparseable() {
        assert!(parse_fields("The candidate seems experienced.").is_none());
    }

    #[test]
    fn test_structured_json_object() {
        let fields =
            parse_fields(r#"{"years_of_experience": "5", "skills": "Python, Go"}"#).unwrap();
        assert_eq!(fields.years_of_experience, "5");
        assert_eq!(fields.skills, "Python, Go");
    }

    #[test]
    fn test_structured_json_in_code_fences() {
        let fields = parse_fields(
            "```json\n{\"years_of_experience\": \"3\", \"skills\": \"Java\"}\n```",
        )
        .unwrap();
        assert_eq!(fields.years_of_experience, "3");
        assert_eq!(fields.skills, "Java");
    }

    #[test]
    fn test_structured_json_numeric_years() {
        let fields = parse_fields(r#"{"years_of_experience": 7, "skills": "C++"}"#).unwrap();
        assert_eq!(fields.years_of_experience, "7");
    }

    #[test]
    fn test_structured_json_skills_array_is_joined() {
        let fields =
            parse_fields(r#"{"years_of_experience": "4", "skills": ["Rust", "SQL"]}"#).unwrap();
        assert_eq!(fields.skills, "Rust, SQL");
    }

    #[test]
    fn test_structured_json_missing_one_key_resolves_to_na() {
        let fields = parse_fields(r#"{"skills": "Kotlin"}"#).unwrap();
        assert_eq!(fields.years_of_experience, "N/A");
        assert_eq!(fields.skills, "Kotlin");
    }

    #[test]
    fn test_json_without_known_keys_falls_back_to_markers() {
        // Valid JSON but no recognized fields; no markers either.
        assert!(parse_fields(r#"{"summary": "strong candidate"}"#).is_none());
    }

    #[test]
    fn test_marker_values_are_trimmed() {
        let fields = parse_fields("Years of Experience:   8  \nSkills:  Go, Terraform  ").unwrap();
        assert_eq!(fields.years_of_experience, "8");
        assert_eq!(fields.skills, "Go, Terraform");
    }
}
