//! Answer generation with an extractive fallback

pub mod answer;
pub mod fallback;
pub mod prompt;
pub mod render;

pub use answer::AnswerGenerator;
pub use fallback::FALLBACK_MODEL_LABEL;
pub use prompt::PromptBuilder;
