use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::pipeline::face_hider::FaceHider;
use crate::raster::domain::image_writer::ImageWriter;
use crate::session::download::download_file_name;
use crate::session::preview::PreviewHandle;
use crate::session::upload_slot::{SlotRole, UploadSlot};
use crate::shared::constants::DEFAULT_MODE;
use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;
use crate::validation::image_validator::validate_image_file;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("no valid {0} image selected")]
    MissingUpload(SlotRole),
    #[error("there is no result to save")]
    NoResult,
    #[error("failed to create preview: {0}")]
    Preview(#[source] std::io::Error),
    #[error("failed to save result to {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// A finished run: the output image and how long the whole run took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessingResult {
    pub image: DataUrl,
    pub elapsed_ms: u64,
}

/// Global submission state. A result and an error are never live together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Succeeded(ProcessingResult),
    Failed(String),
}

/// Inputs captured when a submission starts.
#[derive(Clone, Debug)]
pub struct SubmissionRequest {
    pub face: ImageFile,
    pub target: ImageFile,
    pub mode: HideMode,
    pub mock_mode: bool,
}

/// Controller for one face-hiding session: two upload slots, the chosen
/// mode, the mock/remote switch and the submission lifecycle.
///
/// Every mutating action is refused while a submission is processing,
/// except [`start_over`](Self::start_over).
#[derive(Debug)]
pub struct FaceHiderSession {
    face: UploadSlot,
    target: UploadSlot,
    mode: HideMode,
    mock_mode: bool,
    submission: SubmissionState,
}

impl Default for FaceHiderSession {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FaceHiderSession {
    pub fn new(mock_mode: bool) -> Self {
        Self {
            face: UploadSlot::Empty,
            target: UploadSlot::Empty,
            mode: DEFAULT_MODE,
            mock_mode,
            submission: SubmissionState::Idle,
        }
    }

    // --- Queries ---

    pub fn slot(&self, role: SlotRole) -> &UploadSlot {
        match role {
            SlotRole::Face => &self.face,
            SlotRole::Target => &self.target,
        }
    }

    pub fn mode(&self) -> HideMode {
        self.mode
    }

    pub fn mock_mode(&self) -> bool {
        self.mock_mode
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_processing(&self) -> bool {
        self.submission == SubmissionState::Processing
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        match &self.submission {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Both uploads are valid and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.face.file().is_some() && self.target.file().is_some() && !self.is_processing()
    }

    /// Whether a file, a slot error or a result is present. A global error
    /// on its own does not count.
    pub fn has_any_state(&self) -> bool {
        !self.face.is_empty()
            || !self.target.is_empty()
            || matches!(self.submission, SubmissionState::Succeeded(_))
    }

    // --- Uploads and options ---

    /// Validates `file` and, if accepted, makes it the slot's file with a
    /// fresh preview, releasing the previous one.
    ///
    /// A rejected file never replaces an accepted one: the slot keeps its
    /// current file and shows the reason. Any global error is dismissed.
    pub fn select_file(&mut self, role: SlotRole, file: ImageFile) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.dismiss_error();

        match validate_image_file(&file) {
            Ok(()) => {
                let preview = PreviewHandle::create(&file).map_err(SessionError::Preview)?;
                log::debug!("Selected {role} image {} ({} bytes)", file.name(), file.size());
                *self.slot_mut(role) = UploadSlot::Selected {
                    file,
                    preview,
                    error: None,
                };
            }
            Err(reason) => {
                log::warn!("Rejected {role} image {}: {reason}", file.name());
                self.slot_mut(role).reject(reason);
            }
        }
        Ok(())
    }

    /// Returns the slot to its initial empty state.
    pub fn clear_slot(&mut self, role: SlotRole) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.dismiss_error();
        *self.slot_mut(role) = UploadSlot::Empty;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: HideMode) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.mode = mode;
        Ok(())
    }

    pub fn set_mock_mode(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.mock_mode = enabled;
        Ok(())
    }

    // --- Submission ---

    /// Enters `Processing` and snapshots the inputs for the run.
    ///
    /// Any previous result or error is discarded.
    pub fn begin_submission(&mut self) -> Result<SubmissionRequest, SessionError> {
        self.ensure_idle()?;
        let face = self
            .face
            .file()
            .cloned()
            .ok_or(SessionError::MissingUpload(SlotRole::Face))?;
        let target = self
            .target
            .file()
            .cloned()
            .ok_or(SessionError::MissingUpload(SlotRole::Target))?;

        self.submission = SubmissionState::Processing;
        Ok(SubmissionRequest {
            face,
            target,
            mode: self.mode,
            mock_mode: self.mock_mode,
        })
    }

    /// Leaves `Processing` with either a result or an error message.
    ///
    /// Ignored if no submission is in flight, e.g. after a start-over.
    pub fn finish_submission(&mut self, outcome: Result<DataUrl, FaceHideError>, elapsed: Duration) {
        if !self.is_processing() {
            log::debug!("Dropping outcome of a submission that is no longer current");
            return;
        }
        self.submission = match outcome {
            Ok(image) => {
                let elapsed_ms = (elapsed.as_secs_f64() * 1000.0).round() as u64;
                log::info!("Processing finished in {elapsed_ms} ms");
                SubmissionState::Succeeded(ProcessingResult { image, elapsed_ms })
            }
            Err(e) => {
                log::warn!("Processing failed: {e}");
                SubmissionState::Failed(e.to_string())
            }
        };
    }

    /// Runs one full submission with the mock or the remote hider,
    /// depending on the mock-mode switch.
    pub fn submit(
        &mut self,
        mock: &dyn FaceHider,
        remote: &dyn FaceHider,
    ) -> Result<&SubmissionState, SessionError> {
        let request = self.begin_submission()?;
        let hider = if request.mock_mode { mock } else { remote };

        let started = Instant::now();
        let outcome = hider.hide(&request.face, &request.target, request.mode);
        self.finish_submission(outcome, started.elapsed());
        Ok(&self.submission)
    }

    /// Clears both slots, any error and any result, and restores the default
    /// mode. The mock-mode switch is kept.
    pub fn start_over(&mut self) {
        self.face = UploadSlot::Empty;
        self.target = UploadSlot::Empty;
        self.submission = SubmissionState::Idle;
        self.mode = DEFAULT_MODE;
    }

    // --- Download ---

    /// Writes the live result into `dir` under the timestamped download name.
    pub fn save_result(
        &self,
        writer: &dyn ImageWriter,
        dir: &Path,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, SessionError> {
        let path = dir.join(download_file_name(now));
        self.save_result_as(writer, &path)?;
        Ok(path)
    }

    pub fn save_result_as(&self, writer: &dyn ImageWriter, path: &Path) -> Result<(), SessionError> {
        let result = self.result().ok_or(SessionError::NoResult)?;
        writer
            .write(path, &result.image)
            .map_err(|e| SessionError::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_processing() {
            Err(SessionError::Busy)
        } else {
            Ok(())
        }
    }

    fn dismiss_error(&mut self) {
        if matches!(self.submission, SubmissionState::Failed(_)) {
            self.submission = SubmissionState::Idle;
        }
    }

    fn slot_mut(&mut self, role: SlotRole) -> &mut UploadSlot {
        match role {
            SlotRole::Face => &mut self.face,
            SlotRole::Target => &mut self.target,
        }
    }
}
