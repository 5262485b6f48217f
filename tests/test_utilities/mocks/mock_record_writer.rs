use delimline::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct WriterState {
    rows: Vec<Vec<String>>,
    is_open: bool,
    opened_paths: Vec<PathBuf>,
    close_count: usize,
}

/// Mock RecordWriter for testing that captures written rows
#[derive(Default, Clone)]
pub struct MockRecordWriter {
    state: Arc<Mutex<WriterState>>,
}

impl MockRecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().rows.clone()
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

impl RecordWriter for MockRecordWriter {
    fn open(&mut self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.opened_paths.push(path.to_path_buf());
        state.is_open = true;
        Ok(())
    }

    fn write(&mut self, fields: &[&str]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.is_open {
            return Err(CodecError::StreamNotReady {
                operation: "write".to_string(),
            }
            .into());
        }
        state
            .rows
            .push(fields.iter().map(|f| f.to_string()).collect());
        Ok(())
    }

    fn close(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.is_open = false;
        state.close_count += 1;
    }
}
