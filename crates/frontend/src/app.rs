use crate::usecases::u508_resume_chat::ResumeChatPage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ResumeChatPage />
        </ConfigProvider>
    }
}
