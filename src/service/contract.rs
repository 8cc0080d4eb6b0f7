use std::path::Path;

use crate::{
    foundation::error::{VidmarkError, VidmarkResult},
    media::metadata::MediaMetadata,
    model::annotation::Annotation,
};

/// Metadata returned by the upload endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    /// Server-assigned file name; later render requests refer to it.
    pub filename: String,
    /// Length in seconds.
    pub duration: f64,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: f64,
    /// Public location of the uploaded file.
    #[serde(default)]
    pub url: String,
}

impl From<UploadResponse> for MediaMetadata {
    fn from(r: UploadResponse) -> Self {
        Self {
            filename: r.filename,
            duration: r.duration,
            width: r.width,
            height: r.height,
            fps: r.fps,
            url: r.url,
        }
    }
}

fn default_keep_audio() -> bool {
    true
}

/// Body of a render call: the uploaded file plus every annotation to burn in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// Server-side file name from [`UploadResponse::filename`].
    pub filename: String,
    /// Annotations in creation order.
    pub annotations: Vec<Annotation>,
    /// Carry the source audio track into the output.
    #[serde(default = "default_keep_audio")]
    pub keep_audio: bool,
}

impl RenderRequest {
    /// Parse and validate a request from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> VidmarkResult<Self> {
        let req: Self =
            serde_json::from_reader(r).map_err(|e| VidmarkError::serde(e.to_string()))?;
        req.validate()?;
        Ok(req)
    }

    /// Parse and validate a request from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> VidmarkResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            VidmarkError::serde(format!("failed to open '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Check the file name and every annotation record.
    pub fn validate(&self) -> VidmarkResult<()> {
        if self.filename.trim().is_empty() {
            return Err(VidmarkError::validation(
                "render request filename must be non-empty",
            ));
        }
        for ann in &self.annotations {
            ann.validate(None)?;
        }
        Ok(())
    }
}

/// Result of a successful render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderResponse {
    /// Where the rendered video can be downloaded.
    pub url: String,
}

/// Uploads a selected video and reports its metadata.
pub trait UploadService {
    /// Upload `bytes` under `filename`.
    fn upload(&mut self, filename: &str, bytes: &[u8]) -> VidmarkResult<UploadResponse>;
}

/// Burns annotations into a copy of an uploaded video.
pub trait RenderService {
    /// Render `req`. Failures are reported as [`VidmarkError::Render`].
    fn render(&mut self, req: &RenderRequest) -> VidmarkResult<RenderResponse>;
}

#[cfg(test)]
#[path = "../../tests/unit/service/contract.rs"]
mod tests;
