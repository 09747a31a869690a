//! Comment sentiment classification for ytcs.
//!
//! Two interchangeable backends sit behind [`SentimentClassifier`]: a
//! lexicon and rule based compound scorer, and a pretrained three-class model
//! served by TEI. [`ClassificationPipeline`] pulls raw comments from a
//! [`ytcs_core::CommentSource`], labels them and appends them to a
//! [`ytcs_db::CommentStore`].

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod tei;

mod lexicon;

pub use classifier::{Classifier, LexicalClassifier, SentimentClassifier};
pub use error::{PipelineError, SentimentError};
pub use pipeline::ClassificationPipeline;
pub use scorer::{compound_score, label_for_compound, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use tei::TeiClassifier;
