//! HTTP adapter for the PDF chat backend.
//!
//! Every call returns the text to show the user on failure; deciding what a
//! response means is left to `contracts::usecases::u601_pdf_chat::outcome`.

use crate::shared::api_utils::api_url;
use contracts::usecases::u601_pdf_chat::{
    interpret_ask, interpret_health, interpret_upload, AskRequest, HealthResponse, UploadAccepted,
    ASK_PATH, HEALTH_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use gloo_net::http::{Request, Response};
use web_sys::FormData;

async fn read_body(response: Response) -> Result<(bool, String), String> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    log::debug!("backend answered HTTP {} ({} bytes)", status, text.len());
    Ok((ok, text))
}

/// Send the PDF as multipart form data to `POST /upload-pdf`
pub async fn upload_pdf(file: web_sys::File) -> Result<UploadAccepted, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&api_url(UPLOAD_PATH))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let (ok, body) = read_body(response).await?;
    interpret_upload(ok, &body).map_err(|e| e.to_string())
}

/// Ask a question about the uploaded document via `POST /ask`
pub async fn ask(request: &AskRequest) -> Result<String, String> {
    let response = Request::post(&api_url(ASK_PATH))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let (ok, body) = read_body(response).await?;
    interpret_ask(ok, &body).map_err(|e| e.to_string())
}

/// `GET /health`
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&api_url(HEALTH_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let (ok, body) = read_body(response).await?;
    interpret_health(ok, &body).map_err(|e| e.to_string())
}
