//! Testimonial submission and moderation.

use tracing::info;

use crate::error::ActionError;
use crate::models::{Moderation, SubmitTestimonialRequest, Testimonial};
use crate::result::ActionResult;
use crate::store::Stores;

/// Stores a new testimonial awaiting moderation.
pub async fn submit_testimonial(
    stores: &Stores,
    request: SubmitTestimonialRequest,
) -> ActionResult<Testimonial> {
    let result = stores
        .testimonials
        .insert(&request)
        .await
        .map_err(ActionError::storage("Failed to submit testimonial"));

    if let Ok(testimonial) = &result {
        info!(testimonial_id = testimonial.id, rating = testimonial.rating, "Testimonial submitted");
    }

    result.into()
}

pub async fn approve_testimonial(stores: &Stores, id: i64) -> ActionResult<Testimonial> {
    moderate(stores, id, Moderation::Approve).await
}

pub async fn reject_testimonial(stores: &Stores, id: i64) -> ActionResult<Testimonial> {
    moderate(stores, id, Moderation::Reject).await
}

/// Sets the approval flag. Either decision may be applied at any time.
pub async fn moderate(stores: &Stores, id: i64, decision: Moderation) -> ActionResult<Testimonial> {
    let message = match decision {
        Moderation::Approve => "Failed to approve testimonial",
        Moderation::Reject => "Failed to reject testimonial",
    };

    let result = stores
        .testimonials
        .set_approved(id, decision.approved())
        .await
        .map_err(ActionError::storage(message))
        .and_then(|t| t.ok_or(ActionError::NotFound("Testimonial")));

    if let Ok(testimonial) = &result {
        info!(
            testimonial_id = testimonial.id,
            approved = testimonial.approved,
            "Testimonial moderated"
        );
    }

    result.into()
}

pub async fn get_approved_testimonials(stores: &Stores) -> ActionResult<Vec<Testimonial>> {
    stores
        .testimonials
        .list_approved()
        .await
        .map_err(ActionError::storage("Failed to get testimonials"))
        .into()
}

pub async fn get_all_testimonials(stores: &Stores) -> ActionResult<Vec<Testimonial>> {
    stores
        .testimonials
        .list_all()
        .await
        .map_err(ActionError::storage("Failed to get testimonials"))
        .into()
}
