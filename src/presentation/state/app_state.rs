use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::ReaderService;
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub reader_service: Arc<ReaderService<F, L>>,
    pub settings: Settings,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            reader_service: Arc::clone(&self.reader_service),
            settings: self.settings.clone(),
        }
    }
}
