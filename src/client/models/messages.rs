use crate::client::services::classify_service::ClassifyError;
use crate::common::protocol::Classification;

#[derive(Debug, Clone)]
pub enum Message {
    EmailTextChanged(String),
    FilePathChanged(String),
    SubmitRequested,
    /// The selected file could not be read from disk; the submission is aborted.
    FileUnreadable { path: String, error: String },
    ClassifyFinished(Result<Classification, ClassifyError>),
    ClearLog,
}
