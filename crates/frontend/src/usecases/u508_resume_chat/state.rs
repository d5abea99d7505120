//! Resume chat - State
//!
//! Plain state container for the page. All transitions live here so they can
//! be tested without a browser; the view model only wires them to signals
//! and to the network.
//!
//! Every request gets a [`Ticket`] from its [`Channel`]. A settled response
//! is applied unless a newer request on the same channel has already
//! succeeded. Failures never make older in-flight results stale: a failed
//! request changed nothing on the server.

use crate::shared::api_utils::ApiError;
use contracts::usecases::u508_resume_chat::{
    AskResponse, DeleteResponse, ResumeFormat, ResumeStatusResponse, UploadResponse,
};

/// Тексты, которые видит пользователь
pub mod messages {
    pub const SELECT_FILE_TO_UPLOAD: &str = "⚠️ Please select a file first.";
    pub const SELECT_FILE_TO_UPDATE: &str = "⚠️ Please select a file to update.";
    pub const ENTER_QUESTION: &str = "⚠️ Please enter a question.";

    pub const UPLOADED: &str = "✅ File uploaded successfully!";
    pub const UPDATED: &str = "✅ File updated successfully!";
    pub const DELETED: &str = "✅ Resume deleted and memory reset.";
    pub const NO_ANSWER: &str = "🤖 No answer returned.";

    pub const UPLOAD_FAILED: &str = "❌ Error uploading file. Check backend logs.";
    pub const UPDATE_FAILED: &str = "❌ Error updating file. Check backend logs.";
    pub const DELETE_FAILED: &str = "❌ Error deleting resume.";
    pub const ASK_FAILED: &str = "❌ Error asking question. Check backend logs.";
}

/// File picked by the user. The blob itself stays in the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub format: Option<ResumeFormat>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let format = ResumeFormat::from_file_name(&name);
        Self { name, size, format }
    }
}

/// Independent request streams. Probe/upload/update/delete share the resume slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Resume,
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    channel: Channel,
    seq: u64,
    /// Delete only: newest ask issued before it. A successful delete clears
    /// the answer, so those asks are void once it lands.
    ask_cutoff: u64,
}

impl Ticket {
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// Create (`POST`) or replace (`PUT`) the stored resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    Upload,
    Update,
}

impl ResumeAction {
    fn missing_file(self) -> &'static str {
        match self {
            ResumeAction::Upload => messages::SELECT_FILE_TO_UPLOAD,
            ResumeAction::Update => messages::SELECT_FILE_TO_UPDATE,
        }
    }

    fn succeeded(self) -> &'static str {
        match self {
            ResumeAction::Upload => messages::UPLOADED,
            ResumeAction::Update => messages::UPDATED,
        }
    }

    fn failed(self) -> &'static str {
        match self {
            ResumeAction::Upload => messages::UPLOAD_FAILED,
            ResumeAction::Update => messages::UPDATE_FAILED,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Sequence {
    latest: u64,
    /// Newest seq whose successful result has been applied.
    applied: u64,
    in_flight: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeChatState {
    pub selected_file: Option<SelectedFile>,
    pub question: String,
    pub answer: String,
    pub status: String,
    pub has_uploaded_file: bool,
    resume_seq: Sequence,
    ask_seq: Sequence,
}

impl ResumeChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.has_uploaded_file
    }

    pub fn can_update(&self) -> bool {
        self.selected_file.is_some() && self.has_uploaded_file
    }

    pub fn is_busy(&self) -> bool {
        self.resume_seq.in_flight > 0 || self.ask_seq.in_flight > 0
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.status.clear();
        self.answer.clear();
    }

    pub fn set_question(&mut self, question: String) {
        self.question = question;
    }

    /// Starts the status probe issued on page load.
    pub fn begin_probe(&mut self) -> Ticket {
        self.issue(Channel::Resume)
    }

    /// Probe failures are silent: the page keeps assuming no resume is stored.
    pub fn finish_probe(&mut self, ticket: Ticket, result: Result<ResumeStatusResponse, ApiError>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(response) => {
                self.mark_applied(ticket);
                self.has_uploaded_file = response.uploaded;
            }
            Err(e) => log::debug!("Resume status probe failed: {}", e),
        }
        true
    }

    /// Returns `None` (and shows a warning) when no file is selected.
    /// [`ResumeAction::Update`] deliberately does not look at `has_uploaded_file`.
    pub fn begin_resume_action(&mut self, action: ResumeAction) -> Option<Ticket> {
        if self.selected_file.is_none() {
            self.status = action.missing_file().to_string();
            return None;
        }
        Some(self.issue(Channel::Resume))
    }

    pub fn finish_resume_action(
        &mut self,
        action: ResumeAction,
        ticket: Ticket,
        result: Result<UploadResponse, ApiError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(response) => {
                self.mark_applied(ticket);
                self.has_uploaded_file = true;
                self.status = or_fallback(response.status, action.succeeded());
            }
            Err(e) => {
                self.status = error_text(&e, action.failed());
            }
        }
        true
    }

    /// Delete is unconditional.
    pub fn begin_delete(&mut self) -> Ticket {
        let ask_cutoff = self.ask_seq.latest;
        Ticket {
            ask_cutoff,
            ..self.issue(Channel::Resume)
        }
    }

    pub fn finish_delete(&mut self, ticket: Ticket, result: Result<DeleteResponse, ApiError>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match result {
            Ok(response) => {
                self.mark_applied(ticket);
                self.ask_seq.applied = self.ask_seq.applied.max(ticket.ask_cutoff);
                self.selected_file = None;
                self.question.clear();
                self.answer.clear();
                self.has_uploaded_file = false;
                self.status = or_fallback(response.message, messages::DELETED);
            }
            Err(e) => {
                self.status = error_text(&e, messages::DELETE_FAILED);
            }
        }
        true
    }

    /// Returns the question to send, untrimmed, or `None` if it is blank.
    pub fn begin_ask(&mut self) -> Option<(Ticket, String)> {
        if self.question.trim().is_empty() {
            self.answer = messages::ENTER_QUESTION.to_string();
            return None;
        }
        Some((self.issue(Channel::Ask), self.question.clone()))
    }

    pub fn finish_ask(&mut self, ticket: Ticket, result: Result<AskResponse, ApiError>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.answer = match result {
            Ok(response) => {
                self.mark_applied(ticket);
                or_fallback(response.answer, messages::NO_ANSWER)
            }
            Err(e) => error_text(&e, messages::ASK_FAILED),
        };
        true
    }

    fn sequence(&mut self, channel: Channel) -> &mut Sequence {
        match channel {
            Channel::Resume => &mut self.resume_seq,
            Channel::Ask => &mut self.ask_seq,
        }
    }

    fn issue(&mut self, channel: Channel) -> Ticket {
        let seq = self.sequence(channel);
        seq.latest += 1;
        seq.in_flight += 1;
        Ticket {
            channel,
            seq: seq.latest,
            ask_cutoff: 0,
        }
    }

    /// Marks the request as settled; `true` if its result should be applied.
    fn settle(&mut self, ticket: Ticket) -> bool {
        let seq = self.sequence(ticket.channel);
        seq.in_flight = seq.in_flight.saturating_sub(1);
        let current = ticket.seq > seq.applied;
        if !current {
            log::debug!(
                "Dropping stale {:?} response #{} (applied #{})",
                ticket.channel,
                ticket.seq,
                seq.applied
            );
        }
        current
    }

    fn mark_applied(&mut self, ticket: Ticket) {
        let seq = self.sequence(ticket.channel);
        seq.applied = seq.applied.max(ticket.seq);
    }
}

fn or_fallback(text: Option<String>, fallback: &str) -> String {
    text.filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn error_text(error: &ApiError, fallback: &str) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv() -> SelectedFile {
        SelectedFile::new("cv.pdf", 2048)
    }

    fn http_error(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Http {
            status,
            message: message.map(str::to_string),
        }
    }

    fn uploaded(status: Option<&str>) -> Result<UploadResponse, ApiError> {
        Ok(UploadResponse {
            status: status.map(str::to_string),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = ResumeChatState::new();
        assert!(!state.has_uploaded_file);
        assert!(!state.can_upload());
        assert!(!state.can_update());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_selected_file_detects_format() {
        assert_eq!(cv().format, Some(ResumeFormat::Pdf));
        assert_eq!(SelectedFile::new("notes.txt", 1).format, None);
    }

    #[test]
    fn test_select_file_clears_messages() {
        let mut state = ResumeChatState::new();
        state.status = "old status".into();
        state.answer = "old answer".into();
        state.question = "kept".into();

        state.select_file(cv());

        assert_eq!(state.selected_file, Some(cv()));
        assert!(state.status.is_empty());
        assert!(state.answer.is_empty());
        assert_eq!(state.question, "kept");
    }

    #[test]
    fn test_upload_without_file_warns() {
        let mut state = ResumeChatState::new();
        assert!(state.begin_resume_action(ResumeAction::Upload).is_none());
        assert_eq!(state.status, messages::SELECT_FILE_TO_UPLOAD);
        assert!(!state.has_uploaded_file);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_update_without_file_warns() {
        let mut state = ResumeChatState::new();
        assert!(state.begin_resume_action(ResumeAction::Update).is_none());
        assert_eq!(state.status, messages::SELECT_FILE_TO_UPDATE);
    }

    #[test]
    fn test_upload_success_uses_server_status() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        let ticket = state.begin_resume_action(ResumeAction::Upload).unwrap();
        assert!(state.is_busy());

        assert!(state.finish_resume_action(ResumeAction::Upload, ticket, uploaded(Some("ok"))));

        assert!(state.has_uploaded_file);
        assert_eq!(state.status, "ok");
        assert!(!state.is_busy());
        assert!(!state.can_upload());
        assert!(state.can_update());
    }

    #[test]
    fn test_upload_success_without_status_uses_default() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        let ticket = state.begin_resume_action(ResumeAction::Upload).unwrap();
        state.finish_resume_action(ResumeAction::Upload, ticket, uploaded(None));
        assert_eq!(state.status, messages::UPLOADED);

        let ticket = state.begin_resume_action(ResumeAction::Update).unwrap();
        state.finish_resume_action(ResumeAction::Update, ticket, uploaded(Some("")));
        assert_eq!(state.status, messages::UPDATED);
    }

    #[test]
    fn test_upload_failure_keeps_flag() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        let ticket = state.begin_resume_action(ResumeAction::Upload).unwrap();

        state.finish_resume_action(
            ResumeAction::Upload,
            ticket,
            Err(http_error(413, Some("too large"))),
        );

        assert_eq!(state.status, "too large");
        assert!(!state.has_uploaded_file);
    }

    #[test]
    fn test_failure_without_server_message_uses_fallback() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        state.has_uploaded_file = true;

        let ticket = state.begin_resume_action(ResumeAction::Update).unwrap();
        state.finish_resume_action(
            ResumeAction::Update,
            ticket,
            Err(ApiError::Network("connection refused".into())),
        );

        assert_eq!(state.status, messages::UPDATE_FAILED);
        assert!(state.has_uploaded_file);
    }

    #[test]
    fn test_update_does_not_require_uploaded_flag() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        assert!(!state.can_update());
        assert!(state.begin_resume_action(ResumeAction::Update).is_some());
    }

    #[test]
    fn test_repeated_upload_converges() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        for _ in 0..2 {
            let ticket = state.begin_resume_action(ResumeAction::Upload).unwrap();
            state.finish_resume_action(ResumeAction::Upload, ticket, uploaded(Some("ok")));
            assert!(state.has_uploaded_file);
        }
    }

    #[test]
    fn test_ask_blank_question_warns() {
        let mut state = ResumeChatState::new();
        for blank in ["", "   "] {
            state.set_question(blank.to_string());
            assert!(state.begin_ask().is_none());
            assert_eq!(state.answer, messages::ENTER_QUESTION);
        }
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ask_success() {
        let mut state = ResumeChatState::new();
        state.set_question("What is your experience?".into());

        let (ticket, question) = state.begin_ask().unwrap();
        assert_eq!(question, "What is your experience?");

        state.finish_ask(ticket, Ok(AskResponse { answer: Some("42".into()) }));
        assert_eq!(state.answer, "42");
    }

    #[test]
    fn test_ask_sends_untrimmed_question() {
        let mut state = ResumeChatState::new();
        state.set_question("  skills? ".into());
        let (_, question) = state.begin_ask().unwrap();
        assert_eq!(question, "  skills? ");
    }

    #[test]
    fn test_ask_without_answer_and_failure() {
        let mut state = ResumeChatState::new();
        state.set_question("Where did you study?".into());

        let (ticket, _) = state.begin_ask().unwrap();
        state.finish_ask(ticket, Ok(AskResponse::default()));
        assert_eq!(state.answer, messages::NO_ANSWER);

        let (ticket, _) = state.begin_ask().unwrap();
        state.finish_ask(ticket, Err(http_error(500, None)));
        assert_eq!(state.answer, messages::ASK_FAILED);

        let (ticket, _) = state.begin_ask().unwrap();
        state.finish_ask(ticket, Err(http_error(400, Some("No resume uploaded"))));
        assert_eq!(state.answer, "No resume uploaded");
    }

    #[test]
    fn test_delete_success_resets_everything() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        state.has_uploaded_file = true;
        state.question = "q".into();
        state.answer = "a".into();

        let ticket = state.begin_delete();
        state.finish_delete(ticket, Ok(DeleteResponse { message: None }));

        assert_eq!(state.selected_file, None);
        assert!(state.question.is_empty());
        assert!(state.answer.is_empty());
        assert!(!state.has_uploaded_file);
        assert_eq!(state.status, messages::DELETED);
    }

    #[test]
    fn test_delete_failure_changes_only_status() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        state.has_uploaded_file = true;
        state.question = "q".into();

        let ticket = state.begin_delete();
        state.finish_delete(ticket, Err(ApiError::Network("offline".into())));

        assert_eq!(state.status, messages::DELETE_FAILED);
        assert_eq!(state.selected_file, Some(cv()));
        assert_eq!(state.question, "q");
        assert!(state.has_uploaded_file);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());

        let upload = state.begin_resume_action(ResumeAction::Upload).unwrap();
        let delete = state.begin_delete();

        assert!(state.finish_delete(delete, Ok(DeleteResponse { message: Some("gone".into()) })));
        assert!(!state.finish_resume_action(ResumeAction::Upload, upload, uploaded(Some("ok"))));

        assert_eq!(state.status, "gone");
        assert!(!state.has_uploaded_file);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_older_answer_does_not_overwrite_newer() {
        let mut state = ResumeChatState::new();
        state.set_question("first".into());
        let (first, _) = state.begin_ask().unwrap();
        state.set_question("second".into());
        let (second, _) = state.begin_ask().unwrap();

        state.finish_ask(second, Ok(AskResponse { answer: Some("new".into()) }));
        assert!(!state.finish_ask(first, Ok(AskResponse { answer: Some("old".into()) })));
        assert_eq!(state.answer, "new");
    }

    #[test]
    fn test_delete_invalidates_pending_ask() {
        let mut state = ResumeChatState::new();
        state.set_question("q".into());
        let (ask, _) = state.begin_ask().unwrap();
        let delete = state.begin_delete();

        state.finish_delete(delete, Ok(DeleteResponse::default()));
        assert!(!state.finish_ask(ask, Ok(AskResponse { answer: Some("late".into()) })));
        assert!(state.answer.is_empty());
        assert_eq!(ask.channel(), Channel::Ask);
    }

    #[test]
    fn test_failed_delete_keeps_pending_answer() {
        let mut state = ResumeChatState::new();
        state.set_question("What is your experience?".into());
        let (ask, _) = state.begin_ask().unwrap();
        let delete = state.begin_delete();

        state.finish_delete(delete, Err(ApiError::Network("offline".into())));
        assert!(state.finish_ask(ask, Ok(AskResponse { answer: Some("42".into()) })));

        assert_eq!(state.answer, "42");
        assert_eq!(state.status, messages::DELETE_FAILED);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_failed_delete_keeps_pending_upload() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        let upload = state.begin_resume_action(ResumeAction::Upload).unwrap();
        let delete = state.begin_delete();

        state.finish_delete(delete, Err(http_error(500, None)));
        assert!(state.finish_resume_action(ResumeAction::Upload, upload, uploaded(Some("ok"))));

        assert!(state.has_uploaded_file);
        assert_eq!(state.status, "ok");
    }

    #[test]
    fn test_failed_newer_ask_does_not_void_older_one() {
        let mut state = ResumeChatState::new();
        state.set_question("first".into());
        let (first, _) = state.begin_ask().unwrap();
        let (second, _) = state.begin_ask().unwrap();

        state.finish_ask(second, Err(http_error(502, None)));
        assert!(state.finish_ask(first, Ok(AskResponse { answer: Some("late".into()) })));
        assert_eq!(state.answer, "late");
    }

    #[test]
    fn test_ask_issued_during_delete_survives_it() {
        let mut state = ResumeChatState::new();
        state.set_question("q".into());
        let delete = state.begin_delete();
        let (ask, _) = state.begin_ask().unwrap();

        state.finish_delete(delete, Ok(DeleteResponse::default()));
        assert!(state.finish_ask(ask, Ok(AskResponse { answer: Some("fresh".into()) })));
        assert_eq!(state.answer, "fresh");
    }

    #[test]
    fn test_probe_sets_flag_and_ignores_errors() {
        let mut state = ResumeChatState::new();
        let ticket = state.begin_probe();
        state.finish_probe(
            ticket,
            Ok(ResumeStatusResponse {
                uploaded: true,
                filename: Some("cv.pdf".into()),
            }),
        );
        assert!(state.has_uploaded_file);

        let ticket = state.begin_probe();
        state.finish_probe(ticket, Err(http_error(405, None)));
        assert!(state.has_uploaded_file);
        assert!(state.status.is_empty());
    }

    #[test]
    fn test_probe_loses_to_user_action() {
        let mut state = ResumeChatState::new();
        state.select_file(cv());
        let probe = state.begin_probe();
        let upload = state.begin_resume_action(ResumeAction::Upload).unwrap();

        state.finish_resume_action(ResumeAction::Upload, upload, uploaded(None));
        assert!(!state.finish_probe(probe, Ok(ResumeStatusResponse::default())));
        assert!(state.has_uploaded_file);
    }
}
