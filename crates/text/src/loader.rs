use crate::builder::{build_text_mesh, TextError};
use mimic_core::MeshData;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Background font-load-and-build task.
///
/// Reads the font file and builds the label mesh off the main thread. The
/// frame loop polls for the result and never blocks on font IO.
pub struct FontMeshTask {
    rx: Receiver<Result<MeshData, TextError>>,
    done: bool,
}

impl FontMeshTask {
    /// Spawn the build for `label` using the font file at `path`.
    pub fn spawn(path: PathBuf, label: String, size: f32, depth: f32) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            tracing::debug!("building text mesh for {label:?} from {}", path.display());
            let result = std::fs::read(&path)
                .map_err(TextError::from)
                .and_then(|data| build_text_mesh(&data, &label, size, depth));
            // The receiver may be gone if the app already shut down.
            let _ = tx.send(result);
        });
        Self { rx, done: false }
    }

    /// Non-blocking poll. Yields the build result exactly once, then
    /// always returns `None`.
    pub fn poll(&mut self) -> Option<Result<MeshData, TextError>> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.done = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_until_done(task: &mut FontMeshTask) -> Result<MeshData, TextError> {
        for _ in 0..500 {
            if let Some(result) = task.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("font task never completed");
    }

    #[test]
    fn missing_font_file_reports_io_error() {
        let mut task = FontMeshTask::spawn(
            PathBuf::from("/nonexistent/font.ttf"),
            "mimic".into(),
            1.0,
            0.2,
        );
        let result = poll_until_done(&mut task);
        assert!(matches!(result, Err(TextError::Io(_))));
    }

    #[test]
    fn result_is_yielded_exactly_once() {
        let mut task = FontMeshTask::spawn(
            PathBuf::from("/nonexistent/font.ttf"),
            "mimic".into(),
            1.0,
            0.2,
        );
        let _ = poll_until_done(&mut task);
        assert!(task.poll().is_none());
        assert!(task.poll().is_none());
    }
}
