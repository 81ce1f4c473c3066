use std::sync::Arc;

use diacare_core::application::DiacareService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DiacareService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DiacareService) -> Self {
        Self { args, service }
    }
}
