//! Resume chat - View Component

use super::view_model::ResumeChatVm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_resume_chat::{ResumeChat, ResumeFormat};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ResumeChatPage() -> impl IntoView {
    let vm = ResumeChatVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Узнать у бэкенда, загружено ли уже резюме
    Effect::new(move |_| vm.probe_status());

    // После удаления сбрасываем и сам <input type="file">
    Effect::new(move |_| {
        let cleared = vm.state.with(|s| s.selected_file.is_none());
        if cleared {
            if let Some(input) = file_input_ref.get() {
                input.set_value("");
            }
        }
    });

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            vm.select_file(file);
        }
    };

    view! {
        <PageFrame page_id=ResumeChat::page_id() category=PAGE_CAT_USECASE>
            <PageHeader
                title=ResumeChat::display_name()
                subtitle=ResumeChat::description().to_string()
            >
                {move || vm.is_busy().then(|| view! { <Spinner /> })}
            </PageHeader>

            <div class="page__content">
                <Flex align=FlexAlign::Center style="gap: 8px; flex-wrap: wrap;">
                    <input
                        type="file"
                        accept=ResumeFormat::accept_attribute()
                        node_ref=file_input_ref
                        on:change=handle_file_select
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=move || !vm.can_upload()
                        on_click=move |_| vm.upload_command()
                    >
                        {icon("upload")}
                        " Upload"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=move || !vm.can_update()
                        on_click=move |_| vm.update_command()
                    >
                        {icon("refresh")}
                        " Update"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        attr:style="margin-left: 10px;"
                        on_click=move |_| vm.delete_command()
                    >
                        {icon("delete")}
                        " Delete Resume"
                    </Button>
                </Flex>

                // Выбранный файл
                {move || {
                    vm.state
                        .with(|s| s.selected_file.clone())
                        .map(|file| {
                            let kind = file
                                .format
                                .map(|f| f.extension().trim_start_matches('.').to_uppercase())
                                .unwrap_or_else(|| "?".to_string());
                            view! {
                                <div class="resume-chat__file">
                                    {icon("document")}
                                    " "
                                    {file.name}
                                    <span class="resume-chat__file-meta">
                                        {format!(" {} · {}", kind, format_size(file.size))}
                                    </span>
                                </div>
                            }
                        })
                }}

                <Show when=move || vm.state.with(|s| !s.status.is_empty())>
                    <div class="resume-chat__status">
                        <strong>"Status:"</strong>
                        <p>{move || vm.state.with(|s| s.status.clone())}</p>
                    </div>
                </Show>

                <hr class="resume-chat__divider" />

                <h3>"💬 Ask the Chatbot"</h3>
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <input
                        type="text"
                        class="resume-chat__question"
                        placeholder="Ask something about your CV..."
                        prop:value=move || vm.state.with(|s| s.question.clone())
                        on:input=move |ev| vm.set_question(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                vm.ask_command();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.ask_command()
                    >
                        {icon("send")}
                        " Ask"
                    </Button>
                </Flex>

                <Show when=move || vm.state.with(|s| !s.answer.is_empty())>
                    <div class="resume-chat__answer">
                        <h4>"🤖 Chatbot Response:"</h4>
                        <p>{move || vm.state.with(|s| s.answer.clone())}</p>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
