pub mod analyzer;
pub mod domain;
pub mod error;
pub mod extract;
pub mod ports;
pub mod prompt;
pub mod validation;

pub use analyzer::{EmotionAnalyzer, ANALYSIS_TEMPERATURE};
pub use domain::{
    AnalysisRequest, AnalysisResult, DominantEmotion, EmotionLabel, EmotionScore, EmotionScoreMap,
};
pub use error::AnalysisError;
pub use ports::{CompletionService, NoTopicExtraction, PortError, PortResult, TopicExtractionService};
