pub mod prompt;

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::llm::GeminiClient;

use prompt::{Persona, PromptTemplate};

/// Composes prompts and drives the external generation service.
pub struct ChatEngine {
    llm: Arc<GeminiClient>,
}

impl ChatEngine {
    pub fn new(llm: Arc<GeminiClient>) -> Self {
        Self { llm }
    }

    /// One question, one round trip. The completion comes back verbatim —
    /// no post-processing, no truncation, no retry. Upstream failures
    /// surface as `Err` for the caller to render.
    pub async fn respond(
        &self,
        question: &str,
        persona: Option<Persona>,
        context: &str,
    ) -> Result<String> {
        let prompt = PromptTemplate::new(context, persona, question).render();
        debug!(?persona, prompt_len = prompt.len(), "Dispatching prompt");

        self.llm.generate(&prompt).await
    }
}
