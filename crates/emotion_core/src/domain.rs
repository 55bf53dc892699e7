//! crates/emotion_core/src/domain.rs
//!
//! Defines the pure, core data structures for emotion analysis.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};
use std::fmt;

/// A single inbound message to classify.
///
/// `couple_id` and `sender_id` are opaque passthrough identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub couple_id: String,
    pub sender_id: String,
    pub content: String,
}

/// The closed emotion taxonomy, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Joy,
    Sadness,
    Anger,
    Anxiety,
    Neutral,
    Love,
    Fatigue,
}

impl EmotionLabel {
    /// Every label, in the order the prompt lists them and the score map iterates them.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Anger,
        EmotionLabel::Anxiety,
        EmotionLabel::Neutral,
        EmotionLabel::Love,
        EmotionLabel::Fatigue,
    ];

    /// The label as it appears on the wire and in the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Joy => "기쁨",
            EmotionLabel::Sadness => "슬픔",
            EmotionLabel::Anger => "화남",
            EmotionLabel::Anxiety => "불안",
            EmotionLabel::Neutral => "중립",
            EmotionLabel::Love => "사랑",
            EmotionLabel::Fatigue => "피곤",
        }
    }

    /// One-line gloss of what the label covers, shown to the model.
    pub fn gloss(self) -> &'static str {
        match self {
            EmotionLabel::Joy => "행복, 즐거움, 기쁨",
            EmotionLabel::Sadness => "슬픔, 우울, 외로움",
            EmotionLabel::Anger => "화, 짜증, 분노",
            EmotionLabel::Anxiety => "걱정, 불안, 긴장",
            EmotionLabel::Neutral => "평범함, 사실 전달",
            EmotionLabel::Love => "애정, 사랑, 호감",
            EmotionLabel::Fatigue => "피곤함, 지침, 무기력",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score in [0,1] for every label. Scores are independent confidences
/// and are not expected to sum to 1.
///
/// Entries keep the order they were produced in (for a parsed reply, the
/// order the model listed them). Every label appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionScoreMap {
    entries: [(EmotionLabel, f64); 7],
}

impl EmotionScoreMap {
    /// Builds a map from scores given in `EmotionLabel::ALL` order.
    pub fn new(scores: [f64; 7]) -> Self {
        let mut entries = [(EmotionLabel::Joy, 0.0); 7];
        for ((entry, label), score) in entries.iter_mut().zip(EmotionLabel::ALL).zip(scores) {
            *entry = (label, score);
        }
        Self { entries }
    }

    /// Builds a map that keeps the given entry order. Returns `None` unless
    /// every label appears exactly once.
    pub fn from_ordered(entries: Vec<(EmotionLabel, f64)>) -> Option<Self> {
        let complete = EmotionLabel::ALL
            .iter()
            .all(|label| entries.iter().filter(|(l, _)| l == label).count() == 1);
        if !complete {
            return None;
        }
        let entries: [(EmotionLabel, f64); 7] = entries.try_into().ok()?;
        Some(Self { entries })
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, score)| *score)
            .unwrap_or_default()
    }

    /// Iterates `(label, score)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the highest-scoring entry. On a tie the entry that comes
    /// first in map order wins.
    pub fn dominant(&self) -> DominantEmotion {
        let (label, score) = self.entries[0];
        let mut best = DominantEmotion { label, score };
        for (label, score) in self.iter().skip(1) {
            if score > best.score {
                best = DominantEmotion { label, score };
            }
        }
        best
    }
}

/// The headline label and its score, derived from an `EmotionScoreMap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantEmotion {
    pub label: EmotionLabel,
    pub score: f64,
}

/// The emotion part of an analysis: dominant label, its confidence, and all scores.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub emotion: EmotionLabel,
    pub confidence: f64,
    pub all_scores: EmotionScoreMap,
}

impl From<EmotionScoreMap> for EmotionScore {
    fn from(all_scores: EmotionScoreMap) -> Self {
        let dominant = all_scores.dominant();
        Self {
            emotion: dominant.label,
            confidence: dominant.score,
            all_scores,
        }
    }
}

/// The outcome of one successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub emotion: EmotionScore,
    /// Reserved for topic extraction; empty until an extractor produces topics.
    pub topics: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(scores: EmotionScoreMap, topics: Vec<String>, processed_at: DateTime<Utc>) -> Self {
        Self {
            emotion: EmotionScore::from(scores),
            topics,
            processed_at,
        }
    }
}
