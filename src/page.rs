use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const UPLOAD_BUTTON: &str = "uploadButton";
pub const IMAGE_INPUT: &str = "imageInput";
pub const HEALTH_STATUS: &str = "healthStatus";
pub const AVERAGE_HPI: &str = "averageHpi";
pub const HPI_VALUES: &str = "hpiValues";
pub const HPI_IMAGE: &str = "hpiImage";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The surface the handler reads its input from and renders into.
pub trait Page {
    /// Files currently selected in the image input.
    fn selected_files(&self) -> &[PathBuf];

    /// Blocking notification shown to the user.
    fn alert(&self, message: &str);

    fn set_text(&self, element: &str, text: &str);

    fn set_image_src(&self, element: &str, src: &str);
}

pub struct TerminalPage {
    files: Vec<PathBuf>,
    image_out: Option<PathBuf>,
}

impl TerminalPage {
    pub fn new(files: Vec<PathBuf>, image_out: Option<PathBuf>) -> Self {
        Self { files, image_out }
    }

    fn write_image(&self, path: &Path, src: &str) -> anyhow::Result<()> {
        let encoded = src.strip_prefix(DATA_URI_PREFIX).unwrap_or(src);
        let bytes = base64::decode(encoded)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Page for TerminalPage {
    fn selected_files(&self) -> &[PathBuf] {
        &self.files
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn set_text(&self, element: &str, text: &str) {
        println!("{element}: {text}");
    }

    fn set_image_src(&self, element: &str, src: &str) {
        match &self.image_out {
            Some(path) => match self.write_image(path, src) {
                Ok(()) => {
                    info!("Wrote {element} to {path:?}");
                    println!("{element}: {}", path.display());
                }
                Err(e) => error!("Could not write {element} to {path:?}: {e}"),
            },
            None => println!("{element}: {src}"),
        }
    }
}

pub fn image_data_uri(base64_png: &str) -> String {
    format!("{DATA_URI_PREFIX}{base64_png}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_decoded_png_to_image_out() {
        let path = std::env::temp_dir().join(format!("hpi-client-{}.png", std::process::id()));
        let page = TerminalPage::new(Vec::new(), Some(path.clone()));

        page.set_image_src(HPI_IMAGE, &image_data_uri("QUJD"));

        assert_eq!(std::fs::read(&path).unwrap(), b"ABC");
        std::fs::remove_file(path).unwrap();
    }
}
