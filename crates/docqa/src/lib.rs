//! docqa: question answering over a handful of uploaded text documents
//!
//! Each question is answered by chunking the session's documents into
//! paragraphs, scoring the paragraphs by overlap with the question's terms,
//! and sending the best ones to a generation model. When generation fails the
//! answer falls back to quoting the best paragraphs directly, so a question
//! always receives an answer with source citations.

pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::DocQaConfig;
pub use error::{Error, Result};
pub use generation::AnswerGenerator;
pub use types::{
    document::{Chunk, Document, ScoredChunk},
    query::{AskRequest, Query},
    response::{Answer, AnswerBlock, AskResponse, Citation},
    session::SessionKey,
};
