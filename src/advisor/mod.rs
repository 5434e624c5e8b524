//! Optional free-text advice from a hosted language model.
//!
//! The advisor sits at the edge of the system: it never fails from the
//! caller's point of view. Missing credentials, transport errors and empty
//! answers all resolve to a fixed, user-visible reply.

use crate::error::AdvisorError;
use async_trait::async_trait;
use tracing::{debug, warn};

mod config;
mod gemini;

pub use config::{
    API_KEY_VARS, AdvisorConfig, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT,
    MODEL_VAR,
};
pub use gemini::GeminiGenerator;

/// Reply used when no API key is configured. No request is made in that case.
pub const MISSING_KEY_REPLY: &str = "API Key not detected. Please provide a valid API_KEY in your environment to consult the Architect AI. (Simulated response: To visualize this, consider using a Hierarchical pattern if clear delegation is needed, or a Network pattern if collaboration is unstructured.)";

/// Reply used when the model answers with no text.
pub const SILENT_REPLY: &str = "The Architect is silent.";

/// Reply used when the request fails for any reason.
pub const ERROR_REPLY: &str =
    "Error connecting to the Architect. Please check your connection or API key.";

/// Fixed system instruction sent with every query.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert AI Architect specializing in visualizing multi-agent systems.
You adhere strictly to the framework \"Architecting the Invisible\".

Your advice should cover:
1. The recommended topology (Sequential, Hierarchical, or Network).
2. Specific nodes required (Agents, Tools, Routers).
3. How to handle state/memory visualization.
4. A semiotic recommendation (e.g., \"Use dashed lines for feedback loops\").

Keep the response concise and structured, suitable for a tooltip or sidebar advisor.";

/// Everything a transport needs for a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub system_instruction: &'a str,
    pub query: &'a str,
}

/// Transport seam for the advisory service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AdvisorError>;
}

/// Where an advisory reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Model,
    MissingCredentials,
    Silent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryReply {
    pub text: String,
    pub source: ReplySource,
}

impl AdvisoryReply {
    fn fixed(text: &str, source: ReplySource) -> Self {
        Self {
            text: text.to_string(),
            source,
        }
    }
}

/// Forwards user questions to a [`TextGenerator`] with the fixed system
/// instruction, shielding the caller from every failure.
pub struct Advisor<G: TextGenerator> {
    config: AdvisorConfig,
    generator: G,
}

impl Advisor<GeminiGenerator> {
    /// Builds an advisor talking to Gemini with the given configuration.
    pub fn gemini(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let generator = GeminiGenerator::new(&config)?;
        Ok(Self { config, generator })
    }
}

impl<G: TextGenerator> Advisor<G> {
    pub fn new(config: AdvisorConfig, generator: G) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Asks the advisor and returns the text to show.
    pub async fn ask(&self, query: &str) -> String {
        self.consult(query).await.text
    }

    /// Asks the advisor and reports where the reply came from.
    pub async fn consult(&self, query: &str) -> AdvisoryReply {
        let Some(api_key) = self.config.api_key() else {
            debug!("No advisory API key configured; using fallback reply");
            return AdvisoryReply::fixed(MISSING_KEY_REPLY, ReplySource::MissingCredentials);
        };

        let request = GenerateRequest {
            api_key,
            model: &self.config.model,
            system_instruction: SYSTEM_INSTRUCTION,
            query,
        };

        match self.generator.generate(&request).await {
            Ok(text) if text.trim().is_empty() => {
                AdvisoryReply::fixed(SILENT_REPLY, ReplySource::Silent)
            }
            Ok(text) => AdvisoryReply {
                text,
                source: ReplySource::Model,
            },
            Err(e) => {
                warn!(error = %e, model = %self.config.model, "Advisory request failed");
                AdvisoryReply::fixed(ERROR_REPLY, ReplySource::Failed)
            }
        }
    }
}
