use crate::{
    config::Endpoints,
    error::{Error, UploadError},
    response::{AnalysisRequest, AnalysisResponse, UploadResponse},
};
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use std::path::Path;
use tracing::info;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Posts `file` as the multipart field `file` and returns the hosted URL
/// exactly as the upload endpoint reported it.
pub async fn upload_image(
    client: &Client,
    endpoints: &Endpoints,
    file: &Path,
) -> Result<String, UploadError> {
    let bytes = tokio::fs::read(file)
        .await
        .map_err(|source| UploadError::Read {
            path: file.to_owned(),
            source,
        })?;

    let mime = infer::get(&bytes).map_or(FALLBACK_MIME, |info| info.mime_type());
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());

    info!("Uploading {file_name} ({mime}, {} bytes)", bytes.len());

    let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
    let form = Form::new().part("file", part);

    let response = client
        .post(endpoints.upload_url())
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UploadError::Status(status));
    }

    let UploadResponse { image_url } = response.json().await?;
    info!("Image hosted at {image_url}");

    Ok(image_url)
}

/// Asks the analysis service to process the image behind `image_url`.
/// A non-success status is reported without reading the body.
pub async fn analyze(
    client: &Client,
    endpoints: &Endpoints,
    image_url: &str,
) -> Result<AnalysisResponse, Error> {
    let url = endpoints.analysis_url();
    info!("Requesting analysis from {url}");

    let response = client
        .post(url)
        .json(&AnalysisRequest { image_url })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::AnalysisStatus(status));
    }

    Ok(response.json().await?)
}
