pub mod format;
pub mod request;
pub mod response;

pub use format::ResumeFormat;
pub use request::AskRequest;
pub use response::{AskResponse, DeleteResponse, ErrorResponse, ResumeStatusResponse, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

/// Resume slot: POST creates, PUT replaces, DELETE removes, GET reports status.
pub const UPLOAD_PATH: &str = "/api/upload/";

/// Question answering over the uploaded resume.
pub const ASK_PATH: &str = "/api/ask/";

/// Multipart field carrying the resume file.
pub const UPLOAD_FIELD: &str = "file";

pub struct ResumeChat;

impl UseCaseMetadata for ResumeChat {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "resume_chat"
    }

    fn display_name() -> &'static str {
        "📄 Upload or Update Resume for CV Chatbot"
    }

    fn description() -> &'static str {
        "Upload a PDF or Word resume, then ask the chatbot about it"
    }
}
