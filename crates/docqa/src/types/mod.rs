//! Core types for the Q&A service

pub mod document;
pub mod query;
pub mod response;
pub mod session;

pub use document::{Chunk, Document, ScoredChunk};
pub use query::{AskRequest, Query};
pub use response::{Answer, AnswerBlock, AskResponse, Citation};
pub use session::SessionKey;
