//! Builds the instruction sent to the model.
//!
//! The wording is the contract the reply parser relies on. Only the
//! message text varies between calls.

use crate::domain::EmotionLabel;

pub fn build_prompt(content: &str) -> String {
    let taxonomy = EmotionLabel::ALL
        .iter()
        .map(|label| format!("- {}: {}", label, label.gloss()))
        .collect::<Vec<_>>()
        .join("\n");

    let skeleton = EmotionLabel::ALL
        .iter()
        .map(|label| format!("  \"{}\": 0.0", label))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "다음 한국어 텍스트의 감정을 분석해주세요.\n\n\
         텍스트: \"{content}\"\n\n\
         다음 7가지 감정에 대해 0~1 사이의 점수를 매겨주세요:\n\
         {taxonomy}\n\n\
         반드시 아래 JSON 형식으로만 응답해주세요 (다른 텍스트 없이):\n\
         {{\n{skeleton}\n}}"
    )
}
