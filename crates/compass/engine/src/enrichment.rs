//! Optional text enrichment.
//!
//! Welcome text, stage encouragement, result summaries and action plans may
//! come from an external capability. None of them is required: every call
//! goes through [`Enricher`], which applies a timeout and substitutes a
//! built-in default when the capability is absent, slow, empty or failing.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use compass_types::{AssessmentResult, Axis, Pole};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Encouragement for the first stage breaks, indexed by completed stage.
pub const DEFAULT_ENCOURAGEMENTS: [&str; 4] = [
    "Great start! You're building momentum.",
    "Excellent focus! Keep that energy going.",
    "Smart thinking! You're doing really well.",
    "Almost there! Finish strong!",
];

/// Encouragement past the end of the default list.
pub const GENERIC_ENCOURAGEMENT: &str = "You're doing great!";

/// Encouragement when the capability failed.
pub const ERROR_ENCOURAGEMENT: &str = "You're making great progress!";

pub const DEFAULT_WELCOME: &str =
    "Welcome! There are no right or wrong answers. Pick the option that sounds most like you at work.";

/// Default time allowed for one enrichment call.
pub const DEFAULT_ENRICHMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors reported by an enrichment capability
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("enrichment unavailable: {0}")]
    Unavailable(String),

    #[error("enrichment failed: {0}")]
    Failed(String),
}

/// External source of assessment text.
///
/// `Ok(None)` means "nothing to add" and selects the default text.
#[async_trait]
pub trait Enrichment: Send + Sync {
    async fn welcome(&self) -> Result<Option<String>, EnrichmentError>;

    async fn encouragement(&self, stage: usize) -> Result<Option<String>, EnrichmentError>;

    async fn summary(&self, result: &AssessmentResult) -> Result<Option<String>, EnrichmentError>;

    async fn action_plan(
        &self,
        result: &AssessmentResult,
    ) -> Result<Option<String>, EnrichmentError>;
}

/// Enrichment that never adds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEnrichment;

#[async_trait]
impl Enrichment for NoEnrichment {
    async fn welcome(&self) -> Result<Option<String>, EnrichmentError> {
        Ok(None)
    }

    async fn encouragement(&self, _stage: usize) -> Result<Option<String>, EnrichmentError> {
        Ok(None)
    }

    async fn summary(&self, _result: &AssessmentResult) -> Result<Option<String>, EnrichmentError> {
        Ok(None)
    }

    async fn action_plan(
        &self,
        _result: &AssessmentResult,
    ) -> Result<Option<String>, EnrichmentError> {
        Ok(None)
    }
}

/// Default encouragement for a completed stage (1-based).
pub fn default_encouragement(stage: usize) -> &'static str {
    stage
        .checked_sub(1)
        .and_then(|i| DEFAULT_ENCOURAGEMENTS.get(i))
        .copied()
        .unwrap_or(GENERIC_ENCOURAGEMENT)
}

fn pole_phrase(pole: Pole) -> &'static str {
    match pole {
        Pole::E => "draws energy from working with others",
        Pole::I => "recharges through focused, independent work",
        Pole::S => "trusts concrete facts and proven methods",
        Pole::N => "looks for patterns and future possibilities",
        Pole::T => "decides with logic and objective criteria",
        Pole::F => "weighs how decisions affect people",
        Pole::J => "likes plans and closure",
        Pole::P => "stays flexible as things change",
    }
}

/// Summary built from the type code alone.
pub fn default_summary(result: &AssessmentResult) -> String {
    let code = result.type_code;
    let phrases: Vec<&str> = Axis::ALL
        .iter()
        .map(|axis| pole_phrase(code.pole(*axis)))
        .collect();
    format!(
        "{code} work style: {}, {}, {} and {}.",
        phrases[0], phrases[1], phrases[2], phrases[3]
    )
}

/// Applies fallbacks around an optional [`Enrichment`].
#[derive(Clone)]
pub struct Enricher {
    inner: Option<Arc<dyn Enrichment>>,
    timeout: Duration,
}

impl Default for Enricher {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher")
            .field("enabled", &self.inner.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Enricher {
    /// Defaults only.
    pub fn none() -> Self {
        Self {
            inner: None,
            timeout: DEFAULT_ENRICHMENT_TIMEOUT,
        }
    }

    pub fn new(inner: Arc<dyn Enrichment>) -> Self {
        Self {
            inner: Some(inner),
            timeout: DEFAULT_ENRICHMENT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Run one call; `None` covers absence, emptiness, failure and timeout.
    async fn call<F>(&self, what: &'static str, fut: F) -> Outcome
    where
        F: std::future::Future<Output = Result<Option<String>, EnrichmentError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(Some(text))) if !text.trim().is_empty() => Outcome::Text(text),
            Ok(Ok(_)) => {
                debug!(call = what, "Enrichment returned nothing, using default");
                Outcome::Empty
            }
            Ok(Err(e)) => {
                warn!(call = what, error = %e, "Enrichment failed, using default");
                Outcome::Failed
            }
            Err(_) => {
                warn!(
                    call = what,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Enrichment timed out, using default"
                );
                Outcome::Failed
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn welcome(&self) -> String {
        let Some(inner) = &self.inner else {
            return DEFAULT_WELCOME.to_string();
        };
        match self.call("welcome", inner.welcome()).await {
            Outcome::Text(text) => text,
            _ => DEFAULT_WELCOME.to_string(),
        }
    }

    #[instrument(skip(self))]
    pub async fn encouragement(&self, stage: usize) -> String {
        let Some(inner) = &self.inner else {
            return default_encouragement(stage).to_string();
        };
        match self.call("encouragement", inner.encouragement(stage)).await {
            Outcome::Text(text) => text,
            Outcome::Empty => default_encouragement(stage).to_string(),
            Outcome::Failed => ERROR_ENCOURAGEMENT.to_string(),
        }
    }

    #[instrument(skip_all, fields(type_code = %result.type_code))]
    pub async fn summary(&self, result: &AssessmentResult) -> String {
        let Some(inner) = &self.inner else {
            return default_summary(result);
        };
        match self.call("summary", inner.summary(result)).await {
            Outcome::Text(text) => text,
            _ => default_summary(result),
        }
    }

    /// Action plans have no default; absent stays absent.
    #[instrument(skip_all, fields(type_code = %result.type_code))]
    pub async fn action_plan(&self, result: &AssessmentResult) -> Option<String> {
        let inner = self.inner.as_ref()?;
        match self.call("action_plan", inner.action_plan(result)).await {
            Outcome::Text(text) => Some(text),
            _ => None,
        }
    }
}

enum Outcome {
    Text(String),
    Empty,
    Failed,
}
