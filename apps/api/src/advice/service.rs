//! Advice pipeline — orchestrates one advice request end to end.
//!
//! Flow: build prompt → completion call → normalize → sample quotes →
//!       build search link → attach spiritual references.
//!
//! Once a valid `AdviceRequest` exists this never fails: completion errors
//! are folded into the advice text.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::advice::links::search_link;
use crate::advice::models::{AdviceRequest, AgeGroup, Concern};
use crate::advice::normalizer::{normalize, CompletionOutcome};
use crate::advice::references::{ReferenceLibrary, SpiritualSource, QUOTES_PER_RESPONSE};
use crate::llm_client::{CompletionService, ModelId};

/// Everything shown for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceReport {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub age_group: AgeGroup,
    pub concern: Concern,
    pub model: ModelId,
    pub advice: String,
    pub quotes: Vec<String>,
    pub video_link: String,
    pub spiritual_insights: Vec<SpiritualSource>,
}

/// Runs the advice pipeline for a validated request.
pub async fn generate_advice(
    llm: &dyn CompletionService,
    library: &ReferenceLibrary,
    request: AdviceRequest,
    model: ModelId,
) -> AdviceReport {
    let request_id = Uuid::new_v4();
    info!(
        "Advice request {request_id}: age_group={}, model={model}",
        request.age_group
    );

    let prompt = request.prompt();
    let outcome = CompletionOutcome::from_result(llm.complete(&prompt, model).await);

    match &outcome {
        CompletionOutcome::Success(_) => info!("Advice request {request_id}: completion ok"),
        CompletionOutcome::SuccessEmpty => {
            warn!("Advice request {request_id}: completion returned no text")
        }
        CompletionOutcome::Failure(detail) => {
            warn!("Advice request {request_id}: completion failed: {detail}")
        }
    }

    let advice = normalize(outcome);
    let quotes = library.sample_quotes(&mut rand::thread_rng(), QUOTES_PER_RESPONSE);
    let video_link = search_link(request.age_group.label(), request.concern.as_str());

    AdviceReport {
        request_id,
        generated_at: Utc::now(),
        age_group: request.age_group,
        concern: request.concern,
        model,
        advice,
        quotes,
        video_link,
        spiritual_insights: library.spiritual.clone(),
    }
}
