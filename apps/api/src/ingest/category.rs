use crate::errors::AppError;

pub const JOB_DESCRIPTIONS_TABLE: &str = "job_descriptions";

/// Target collection for resume records, selected by the caller-supplied
/// `user_type` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeCollection {
    Students,
    Jobseekers,
}

impl ResumeCollection {
    pub const ALL: [ResumeCollection; 2] = [ResumeCollection::Students, ResumeCollection::Jobseekers];

    /// Accepts "student" or "jobseeker", case-insensitive, surrounding
    /// whitespace ignored. Anything else is rejected before any side effect.
    pub fn parse(user_type: &str) -> Result<Self, AppError> {
        match user_type.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(ResumeCollection::Students),
            "jobseeker" => Ok(ResumeCollection::Jobseekers),
            _ => Err(AppError::Validation(
                "Invalid user type. Must be 'student' or 'jobseeker'.".to_string(),
            )),
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            ResumeCollection::Students => "students",
            ResumeCollection::Jobseekers => "jobseekers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_values() {
        assert_eq!(
            ResumeCollection::parse("student").unwrap(),
            ResumeCollection::Students
        );
        assert_eq!(
            ResumeCollection::parse("jobseeker").unwrap(),
            ResumeCollection::Jobseekers
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            ResumeCollection::parse("  Student \n").unwrap(),
            ResumeCollection::Students
        );
        assert_eq!(
            ResumeCollection::parse("JOBSEEKER").unwrap(),
            ResumeCollection::Jobseekers
        );
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = ResumeCollection::parse("manager").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_tables_are_distinct() {
        assert_ne!(
            ResumeCollection::Students.table(),
            ResumeCollection::Jobseekers.table()
        );
    }
}
