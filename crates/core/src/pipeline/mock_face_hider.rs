use std::thread;
use std::time::Duration;

use crate::pipeline::face_hider::FaceHider;
use crate::pipeline::mock_hide_use_case::MockHideUseCase;
use crate::shared::constants::MOCK_DELAY;
use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;

/// Offline [`FaceHider`]: waits to simulate network latency, then runs the
/// mock processor on the target. The face reference is not used.
pub struct MockFaceHider {
    delay: Duration,
    use_case: MockHideUseCase,
}

impl MockFaceHider {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            use_case: MockHideUseCase::new(),
        }
    }
}

impl Default for MockFaceHider {
    fn default() -> Self {
        Self::new(MOCK_DELAY)
    }
}

impl FaceHider for MockFaceHider {
    fn hide(
        &self,
        _face: &ImageFile,
        target: &ImageFile,
        mode: HideMode,
    ) -> Result<DataUrl, FaceHideError> {
        log::info!("Mock mode: simulating {} ms of latency", self.delay.as_millis());
        thread::sleep(self.delay);
        let output = self.use_case.execute(target.bytes(), mode)?;
        Ok(output.image)
    }
}
