//! API клиент для UseCase u508 (резюме + вопросы к чат-боту)

use crate::shared::api_utils::{api_url, read_response, ApiError};
use contracts::usecases::u508_resume_chat::{
    AskRequest, AskResponse, DeleteResponse, ResumeStatusResponse, UploadResponse, ASK_PATH,
    UPLOAD_FIELD, UPLOAD_PATH,
};
use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

fn resume_form(file: &File) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    Ok(form_data)
}

/// Sends the resume as multipart form data. The browser sets the boundary header itself.
async fn send_resume(builder: RequestBuilder, file: &File) -> Result<UploadResponse, ApiError> {
    let request = builder
        .body(resume_form(file)?)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}

/// Загрузить резюме (`POST /api/upload/`)
pub async fn upload_resume(file: &File) -> Result<UploadResponse, ApiError> {
    send_resume(Request::post(&api_url(UPLOAD_PATH)), file).await
}

/// Заменить резюме (`PUT /api/upload/`)
pub async fn update_resume(file: &File) -> Result<UploadResponse, ApiError> {
    send_resume(Request::put(&api_url(UPLOAD_PATH)), file).await
}

/// Удалить резюме и сбросить память чат-бота
pub async fn delete_resume() -> Result<DeleteResponse, ApiError> {
    let response = Request::delete(&api_url(UPLOAD_PATH))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}

/// Задать вопрос по загруженному резюме
pub async fn ask_question(question: &str) -> Result<AskResponse, ApiError> {
    let response = Request::post(&api_url(ASK_PATH))
        .json(&AskRequest::new(question))
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}

/// Ask the backend whether a resume is already stored.
pub async fn fetch_resume_status() -> Result<ResumeStatusResponse, ApiError> {
    let response = Request::get(&api_url(UPLOAD_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_response(response).await
}
