use std::sync::Arc;

use crate::config::Config;
use crate::services::{ContactService, ProjectService};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub projects: ProjectService,
    pub contact: ContactService,
}
