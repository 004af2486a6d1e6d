use std::sync::{Arc, Mutex};

use crate::ports::{NativeShare, ShareError};

/// Native share stub that records `(title, text)` pairs and answers with a fixed result.
#[derive(Clone)]
pub struct FakeNativeShare {
    result: Result<(), ShareError>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeNativeShare {
    fn with_result(result: Result<(), ShareError>) -> Self {
        Self { result, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn accepting() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn cancelling() -> Self {
        Self::with_result(Err(ShareError::Cancelled))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_result(Err(ShareError::Failed(reason.to_string())))
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl NativeShare for FakeNativeShare {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError> {
        self.calls.lock().unwrap().push((title.to_string(), text.to_string()));
        self.result.clone()
    }
}
