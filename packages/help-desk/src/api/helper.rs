use actix_web::HttpResponse;
use serde_json::json;
use tracing::error;

use crate::api::model::GetUserQuery;
use crate::lifecycle::model::LifecycleError;

/// Extracts a usable uid from the lookup query. Absent and empty both
/// count as missing.
pub fn required_uid(query: &GetUserQuery) -> Option<&str> {
    query.uid.as_deref().filter(|uid| !uid.is_empty())
}

/// Maps lifecycle failures onto the API's terse JSON error bodies.
/// Conflict on accept is deliberately indistinguishable from a missing
/// request; double-rating gets its own 409.
pub fn lifecycle_error_response(err: &LifecycleError) -> HttpResponse {
    match err {
        LifecycleError::InvalidRating(_) => HttpResponse::BadRequest().json(json!({
            "error": "Invalid rating. Must be between 1 and 10."
        })),
        LifecycleError::NoMentorsAssigned(_) => HttpResponse::NotFound().json(json!({
            "error": "No mentors assigned to this table"
        })),
        LifecycleError::RequestNotFound(_) => HttpResponse::NotFound().json(json!({
            "error": "Request not found or already accepted."
        })),
        LifecycleError::RequestNotResolved(_) => HttpResponse::NotFound().json(json!({
            "error": "Request not found or not resolved."
        })),
        LifecycleError::AlreadyRated(_) => HttpResponse::Conflict().json(json!({
            "error": "You have already rated this mentor."
        })),
        LifecycleError::MentorNotFound(_) => HttpResponse::NotFound().json(json!({
            "error": "Mentor not found."
        })),
        LifecycleError::Ledger(e) => {
            error!("Ledger error: {:#}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error",
                "details": e.to_string()
            }))
        }
        LifecycleError::Storage(e) => {
            error!("Storage error: {:#}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal Server Error"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use anyhow::anyhow;

    #[test]
    fn uid_extraction_rejects_missing_and_empty() {
        let query = GetUserQuery {
            uid: Some("ab12cd".to_string()),
        };
        assert_eq!(required_uid(&query), Some("ab12cd"));

        let query = GetUserQuery { uid: None };
        assert_eq!(required_uid(&query), None);

        let query = GetUserQuery {
            uid: Some(String::new()),
        };
        assert_eq!(required_uid(&query), None);
    }

    #[test]
    fn error_mapping_matches_status_codes() {
        let cases = [
            (
                lifecycle_error_response(&LifecycleError::InvalidRating(11)),
                StatusCode::BAD_REQUEST,
            ),
            (
                lifecycle_error_response(&LifecycleError::NoMentorsAssigned(5)),
                StatusCode::NOT_FOUND,
            ),
            (
                lifecycle_error_response(&LifecycleError::RequestNotFound(1)),
                StatusCode::NOT_FOUND,
            ),
            (
                lifecycle_error_response(&LifecycleError::RequestNotResolved(1)),
                StatusCode::NOT_FOUND,
            ),
            (
                lifecycle_error_response(&LifecycleError::AlreadyRated(1)),
                StatusCode::CONFLICT,
            ),
            (
                lifecycle_error_response(&LifecycleError::MentorNotFound("m".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                lifecycle_error_response(&LifecycleError::Ledger(anyhow!("boom"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                lifecycle_error_response(&LifecycleError::Storage(anyhow!("boom"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }
}
