//! View models mirroring the evaluation service's JSON.
//!
//! Nothing here is persisted; values live for the duration of one page view
//! or one CLI command.

mod evaluation;
mod filter;
mod library;
mod upload;
pub mod wire;

pub use evaluation::{
    format_score, verdict_color, Evaluation, EvaluationDetail, EvaluationOutcome, ScoreClass,
};
pub use filter::EvaluationFilter;
pub use library::{JobDescription, Resume};
pub use upload::{UploadFile, UploadForm, UploadKind, UploadReceipt, UploadRequest};
