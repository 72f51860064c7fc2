use thiserror::Error;

/// Reasons an engine cannot be built from the given word bank and rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("word bank is empty")]
    EmptyWordBank,

    #[error("max_words must be at least 1")]
    InvalidMaxWords,

    #[error("a round needs {required} unique words but the word bank only has {available}")]
    NotEnoughWords { required: usize, available: usize },
}
