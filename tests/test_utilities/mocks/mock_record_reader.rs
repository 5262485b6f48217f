use delimline::prelude::*;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ReaderState {
    records: VecDeque<(String, String)>,
    is_open: bool,
    should_fail_open: bool,
    opened_paths: Vec<PathBuf>,
    close_count: usize,
}

/// Mock RecordReader for testing that serves scripted records
///
/// State is shared behind Arc so a clone kept by the test can inspect the
/// mock after it has been moved into the facade.
#[derive(Default, Clone)]
pub struct MockRecordReader {
    state: Arc<Mutex<ReaderState>>,
}

impl MockRecordReader {
    pub fn new(records: Vec<(&str, &str)>) -> Self {
        let state = ReaderState {
            records: records
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_open_failure() -> Self {
        let mock = Self::new(vec![]);
        mock.state.lock().unwrap().should_fail_open = true;
        mock
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().opened_paths.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().is_open
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().unwrap().close_count
    }
}

impl RecordReader for MockRecordReader {
    fn open(&mut self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.should_fail_open {
            anyhow::bail!("Mock reader open failure");
        }
        state.opened_paths.push(path.to_path_buf());
        state.is_open = true;
        Ok(())
    }

    fn read(&mut self) -> Result<Option<(String, String)>> {
        let mut state = self.state.lock().unwrap();
        if !state.is_open {
            return Err(CodecError::StreamNotReady {
                operation: "read".to_string(),
            }
            .into());
        }
        Ok(state.records.pop_front())
    }

    fn close(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.is_open = false;
        state.close_count += 1;
    }
}
