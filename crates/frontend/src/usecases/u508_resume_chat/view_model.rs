//! Resume chat - View Model

use super::api;
use super::state::{ResumeAction, ResumeChatState, SelectedFile};
use crate::shared::api_utils::ApiError;
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ResumeChatVm {
    pub state: RwSignal<ResumeChatState>,
    /// Blob for the next upload/update; `web_sys::File` is not `Send`, hence local storage.
    file: StoredValue<Option<File>, LocalStorage>,
}

impl ResumeChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ResumeChatState::new()),
            file: StoredValue::new_local(None),
        }
    }

    pub fn can_upload(&self) -> bool {
        self.state.with(|s| s.can_upload())
    }

    pub fn can_update(&self) -> bool {
        self.state.with(|s| s.can_update())
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy())
    }

    pub fn select_file(&self, file: File) {
        let selected = SelectedFile::new(file.name(), file.size() as u64);
        self.file.set_value(Some(file));
        self.state.update(|s| s.select_file(selected));
    }

    pub fn set_question(&self, question: String) {
        self.state.update(|s| s.set_question(question));
    }

    /// Asks the backend whether a resume is already stored (on page load)
    pub fn probe_status(&self) {
        let Some(ticket) = self.state.try_update(|s| s.begin_probe()) else {
            return;
        };
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_resume_status().await;
            state.update(|s| {
                s.finish_probe(ticket, result);
            });
        });
    }

    pub fn upload_command(&self) {
        self.resume_command(ResumeAction::Upload);
    }

    pub fn update_command(&self) {
        self.resume_command(ResumeAction::Update);
    }

    fn resume_command(&self, action: ResumeAction) {
        let Some(ticket) = self.state.try_update(|s| s.begin_resume_action(action)).flatten() else {
            return;
        };
        let state = self.state;
        let file = self.file.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match (&file, action) {
                (Some(file), ResumeAction::Upload) => api::upload_resume(file).await,
                (Some(file), ResumeAction::Update) => api::update_resume(file).await,
                (None, _) => Err(ApiError::Request("selected file is no longer available".to_string())),
            };
            match &result {
                Ok(_) => log::info!("{:?} succeeded", action),
                Err(e) => log::error!("{:?} error: {}", action, e),
            }
            state.update(|s| {
                s.finish_resume_action(action, ticket, result);
            });
        });
    }

    pub fn delete_command(&self) {
        let Some(ticket) = self.state.try_update(|s| s.begin_delete()) else {
            return;
        };
        let state = self.state;
        let file = self.file;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::delete_resume().await;
            match &result {
                Ok(_) => log::info!("Resume deleted"),
                Err(e) => log::error!("Delete error: {}", e),
            }
            state.update(|s| {
                s.finish_delete(ticket, result);
            });
            // Держим blob в синхроне с состоянием
            if state
                .try_with_untracked(|s| s.selected_file.is_none())
                .unwrap_or(false)
            {
                file.set_value(None);
            }
        });
    }

    pub fn ask_command(&self) {
        let Some((ticket, question)) = self.state.try_update(|s| s.begin_ask()).flatten() else {
            return;
        };
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::ask_question(&question).await;
            if let Err(e) = &result {
                log::error!("Ask error: {}", e);
            }
            state.update(|s| {
                s.finish_ask(ticket, result);
            });
        });
    }
}
