/// Topic-model defects. Recoverable: the builder retries with a reduced
/// topic count and a fresh seed, and the engine degrades to a skipped
/// topic analysis if retries are exhausted. Sentiment and thematic
/// results stay valid either way.
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    #[error("corpus is empty, nothing to fit")]
    EmptyCorpus,

    #[error(
        "degenerate corpus: pruned vocabulary has {vocab_size} terms, \
         fewer than {topic_count} topics"
    )]
    DegenerateVocabulary {
        vocab_size: usize,
        topic_count: usize,
    },

    #[error("topic analysis skipped after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: usize, last_error: String },
}
