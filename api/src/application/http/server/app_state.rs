use std::sync::Arc;

use comidas_core::application::ComidasService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ComidasService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ComidasService) -> Self {
        Self { args, service }
    }
}
