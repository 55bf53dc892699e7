//! Request validation: the first stage of the pipeline.

use crate::domain::AnalysisRequest;
use crate::error::AnalysisError;

pub const CONTENT_REQUIRED: &str = "content is required";

/// Checks that `request.content` holds something other than whitespace.
///
/// Returns the content untrimmed; the prompt embeds it verbatim.
pub fn validate(request: &AnalysisRequest) -> Result<&str, AnalysisError> {
    if request.content.trim().is_empty() {
        return Err(AnalysisError::Validation(CONTENT_REQUIRED.to_string()));
    }
    Ok(&request.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str) -> AnalysisRequest {
        AnalysisRequest {
            couple_id: "couple-1".to_string(),
            sender_id: "user-1".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn rejects_empty_and_blank_content() {
        for content in ["", " ", "\n\t  ", "\u{3000}"] {
            let err = validate(&request(content)).unwrap_err();
            assert!(err.is_client_error());
            assert_eq!(err.to_string(), CONTENT_REQUIRED);
        }
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let req = request("  오늘 정말 행복해!  ");
        assert_eq!(validate(&req).unwrap(), "  오늘 정말 행복해!  ");
    }

    #[test]
    fn ids_are_not_checked() {
        let req = AnalysisRequest {
            content: "hi".to_string(),
            ..Default::default()
        };
        assert!(validate(&req).is_ok());
    }
}
