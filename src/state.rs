use std::sync::Arc;

use crate::chat::ChatEngine;
use crate::session::SessionStore;

pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub sessions: Arc<SessionStore>,
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
