//! Pythia core - the guessing engine and the knowledge it learns into.
//!
//! One probability per candidate class, refreshed by a full Naive Bayes
//! pass over the session's answers; questions chosen by minimax entropy
//! lookahead. Around the engine: plain-text storage, TOML config, and a
//! starter dataset for first runs.

pub mod answer;
pub mod config;
pub mod correlation;
pub mod features;
pub mod knowledge;
pub mod likelihood;
pub mod posterior;
pub mod seed;
pub mod selector;
pub mod session;
pub mod storage;

pub use answer::Answer;
pub use config::{Config, GameConfig};
pub use features::{Feature, FeatureSet};
pub use knowledge::{Class, ClassId, Knowledge, Question, QuestionId, Registered};
pub use likelihood::EPS;
pub use posterior::Posteriors;
pub use selector::{EntropyBounds, Selection};
pub use session::Session;
pub use storage::StorageError;
