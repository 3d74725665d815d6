use crate::{
    client::{analyze, upload_image},
    config::Endpoints,
    error::Error,
    page::{self, Page},
    render::render,
    response::AnalysisResponse,
};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

const NO_FILE_MESSAGE: &str = "Please upload an image.";
const ANALYSIS_FAILED_MESSAGE: &str = "Error processing image.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Rendered,
    NoFileSelected,
    AnalysisFailed,
    /// Another activation was still in flight.
    Ignored,
}

/// Uploads the selected image, has it analyzed and renders the result.
pub struct UploadAndAnalyzeHandler {
    client: Client,
    endpoints: Endpoints,
    busy: AtomicBool,
}

impl UploadAndAnalyzeHandler {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self {
            client,
            endpoints,
            busy: AtomicBool::new(false),
        }
    }

    /// Runs one upload-and-analyze pass against `page`.
    ///
    /// Missing input and a rejected analysis are reported through
    /// [`Page::alert`]. Upload failures and transport errors are returned
    /// and end the activation without touching the page.
    pub async fn activate<P: Page>(&self, page: &P) -> Result<Activation, Error> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("{} is busy, ignoring activation", page::UPLOAD_BUTTON);
            return Ok(Activation::Ignored);
        };

        match self.run(page).await {
            Ok(analysis) => {
                render(page, &analysis);
                Ok(Activation::Rendered)
            }
            Err(Error::NoFileSelected) => {
                page.alert(NO_FILE_MESSAGE);
                Ok(Activation::NoFileSelected)
            }
            Err(Error::AnalysisStatus(status)) => {
                warn!("Analysis endpoint returned {status}");
                page.alert(ANALYSIS_FAILED_MESSAGE);
                Ok(Activation::AnalysisFailed)
            }
            Err(e) => Err(e),
        }
    }

    async fn run<P: Page>(&self, page: &P) -> Result<AnalysisResponse, Error> {
        let file = page.selected_files().first().ok_or_else(|| {
            debug!("{} is empty", page::IMAGE_INPUT);
            Error::NoFileSelected
        })?;

        let image_url = upload_image(&self.client, &self.endpoints, file).await?;
        let analysis = analyze(&self.client, &self.endpoints, &image_url).await?;
        info!(
            "Health status: {}",
            analysis.health_status.as_deref().unwrap_or("<missing>")
        );

        Ok(analysis)
    }
}

/// Holds the busy flag for the duration of one activation.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
