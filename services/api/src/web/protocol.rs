//! services/api/src/web/protocol.rs
//!
//! Defines the JSON bodies exchanged between the messaging app and the API server.

use chrono::SecondsFormat;
use emotion_core::{AnalysisRequest, AnalysisResult, EmotionScoreMap};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

//=========================================================================================
// Request Bodies
//=========================================================================================

/// A message to analyze. Missing or `null` fields are treated as empty strings.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct AnalyzeMessageRequest {
    #[serde(default)]
    pub couple_id: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<AnalyzeMessageRequest> for AnalysisRequest {
    fn from(body: AnalyzeMessageRequest) -> Self {
        AnalysisRequest {
            couple_id: body.couple_id.unwrap_or_default(),
            sender_id: body.sender_id.unwrap_or_default(),
            content: body.content.unwrap_or_default(),
        }
    }
}

//=========================================================================================
// Response Bodies
//=========================================================================================

/// Serializes a score map as a JSON object keyed by label, in taxonomy order.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable(pub EmotionScoreMap);

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (label, score) in self.0.iter() {
            map.serialize_entry(label.as_str(), &score)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct EmotionScoreBody {
    /// The dominant emotion label, e.g. "기쁨".
    pub emotion: String,
    pub confidence: f64,
    /// Score in [0, 1] for each of the seven labels.
    #[schema(value_type = Object)]
    pub all_scores: ScoreTable,
}

/// The response payload for a successful analysis.
#[derive(Serialize, Debug, ToSchema)]
pub struct AnalyzeMessageResponse {
    pub emotion: EmotionScoreBody,
    pub topics: Vec<String>,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub processed_at: String,
}

impl From<AnalysisResult> for AnalyzeMessageResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            emotion: EmotionScoreBody {
                emotion: result.emotion.emotion.as_str().to_string(),
                confidence: result.emotion.confidence,
                all_scores: ScoreTable(result.emotion.all_scores),
            },
            topics: result.topics,
            processed_at: result
                .processed_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// The body of every error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use emotion_core::EmotionLabel;

    #[test]
    fn response_keeps_label_order_and_millisecond_timestamp() {
        let scores = EmotionScoreMap::new([0.89, 0.02, 0.01, 0.02, 0.03, 0.02, 0.01]);
        let processed_at = Utc.with_ymd_and_hms(2025, 1, 16, 10, 30, 0).unwrap();
        let body = AnalyzeMessageResponse::from(AnalysisResult::new(scores, Vec::new(), processed_at));

        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(
            json,
            r#"{"emotion":{"emotion":"기쁨","confidence":0.89,"all_scores":{"기쁨":0.89,"슬픔":0.02,"화남":0.01,"불안":0.02,"중립":0.03,"사랑":0.02,"피곤":0.01}},"topics":[],"processed_at":"2025-01-16T10:30:00.000Z"}"#
        );
    }

    #[test]
    fn all_scores_follow_the_map_order() {
        let scores = EmotionScoreMap::from_ordered(vec![
            (EmotionLabel::Sadness, 0.5),
            (EmotionLabel::Joy, 0.5),
            (EmotionLabel::Anger, 0.0),
            (EmotionLabel::Anxiety, 0.0),
            (EmotionLabel::Neutral, 0.0),
            (EmotionLabel::Love, 0.0),
            (EmotionLabel::Fatigue, 0.0),
        ])
        .unwrap();
        let body = AnalyzeMessageResponse::from(AnalysisResult::new(scores, Vec::new(), Utc::now()));

        let json = serde_json::to_string(&body.emotion).unwrap();

        assert!(json.starts_with(r#"{"emotion":"슬픔","confidence":0.5,"all_scores":{"슬픔":0.5,"기쁨":0.5,"화남":0.0"#));
    }

    #[test]
    fn null_and_missing_fields_become_empty() {
        let body: AnalyzeMessageRequest =
            serde_json::from_str(r#"{"couple_id": null, "content": "hi"}"#).unwrap();
        let request = AnalysisRequest::from(body);
        assert_eq!(request.couple_id, "");
        assert_eq!(request.sender_id, "");
        assert_eq!(request.content, "hi");
    }

    #[test]
    fn error_body_omits_absent_details() {
        let json = serde_json::to_value(ErrorBody::new("content is required")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "content is required" }));
    }
}
