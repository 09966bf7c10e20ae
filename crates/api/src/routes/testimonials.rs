//! Testimonial endpoint handlers.

use axum::extract::{Path, State};
use domain::models::{Moderation, SubmitTestimonialRequest, Testimonial};
use domain::services::testimonials;

use super::parse_id;
use crate::app::AppState;
use crate::error::{ActionReply, ApiError};
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_testimonial_submitted;

/// GET /api/testimonials
pub async fn list_approved(State(state): State<AppState>) -> ActionReply<Vec<Testimonial>> {
    testimonials::get_approved_testimonials(&state.stores).await.into()
}

/// POST /api/testimonials
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitTestimonialRequest>,
) -> ActionReply<Testimonial> {
    let reply = ActionReply::created(testimonials::submit_testimonial(&state.stores, request).await);
    if reply.is_success() {
        record_testimonial_submitted();
    }
    reply
}

/// GET /api/admin/testimonials
pub async fn list_all(State(state): State<AppState>) -> ActionReply<Vec<Testimonial>> {
    testimonials::get_all_testimonials(&state.stores).await.into()
}

/// POST /api/admin/testimonials/:id/approve
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ActionReply<Testimonial>, ApiError> {
    moderate(state, &id, Moderation::Approve).await
}

/// POST /api/admin/testimonials/:id/reject
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ActionReply<Testimonial>, ApiError> {
    moderate(state, &id, Moderation::Reject).await
}

async fn moderate(
    state: AppState,
    raw_id: &str,
    decision: Moderation,
) -> Result<ActionReply<Testimonial>, ApiError> {
    let id = parse_id(raw_id, "testimonial")?;
    Ok(testimonials::moderate(&state.stores, id, decision).await.into())
}
