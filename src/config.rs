use envconfig::Envconfig;

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "HPI_UPLOAD_ORIGIN", default = "http://127.0.0.1:5000")]
    pub upload_origin: String,

    #[envconfig(from = "HPI_ANALYSIS_BASE_URL")]
    pub analysis_base_url: Option<String>,
}

/// Resolved endpoints the handler talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub upload_origin: String,
    pub analysis_base_url: String,
}

impl Endpoints {
    pub fn upload_url(&self) -> String {
        join(&self.upload_origin, "upload")
    }

    pub fn analysis_url(&self) -> String {
        join(&self.analysis_base_url, "process_image_url")
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}
