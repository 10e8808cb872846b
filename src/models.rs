// src/models.rs
use serde::{Deserialize, Serialize};

/// One grading attempt: the program to run and what it should print.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub code: String,
    pub expected_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// The interpreter ran to completion and exited zero.
    pub success: bool,
    pub actual_output: String,
    /// Only ever true together with `success`.
    pub matched: bool,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn completed(actual_output: String, matched: bool) -> Self {
        Self {
            success: true,
            actual_output,
            matched,
            error: None,
        }
    }

    pub fn interpreter_failure(stderr: String) -> Self {
        Self {
            success: false,
            actual_output: String::new(),
            matched: false,
            error: Some(stderr),
        }
    }
}

/// Body of every non-200 response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_uses_camel_case() {
        let submission: Submission = serde_json::from_value(json!({
            "code": "halt",
            "expectedOutput": "5"
        }))
        .unwrap();

        assert_eq!(submission.code, "halt");
        assert_eq!(submission.expected_output, "5");
    }

    #[test]
    fn test_result_serializes_null_error() {
        let value = serde_json::to_value(ExecutionResult::completed("5".to_string(), true)).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "actualOutput": "5", "matched": true, "error": null})
        );
    }

    #[test]
    fn test_interpreter_failure_is_never_matched() {
        let result = ExecutionResult::interpreter_failure("bad opcode".to_string());
        assert!(!result.success);
        assert!(!result.matched);
        assert_eq!(result.actual_output, "");
        assert_eq!(result.error.as_deref(), Some("bad opcode"));
    }
}
