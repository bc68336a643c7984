use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use crate::{
    AppState,
    api::{
        helper::{lifecycle_error_response, required_uid},
        model::{
            AcceptRequestBody, AttestRequest, AttestResponse, CheckRequestResponse, GetUserQuery,
            LeaderboardEntry, MessageResponse, RateMentorRequest, RequestHelpRequest,
            RequestHelpResponse, UserResponse,
        },
    },
    lifecycle::model::{LifecycleError, RatingProof},
};

// ============================================================================
// USER DIRECTORY
// ============================================================================

#[get("/get_user")]
pub async fn get_user(
    query: web::Query<GetUserQuery>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let Some(uid) = required_uid(&query) else {
        return HttpResponse::BadRequest().json(json!({
            "error": "UID is required"
        }));
    };

    match app_state.database.get_user(uid) {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse {
            uid: user.uid,
            name: user.name,
            tg_username: user.tg_username,
        }),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "User not found"
        })),
        Err(e) => {
            error!("Error fetching user {}: {}", uid, e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal Server Error",
                "details": e.to_string()
            }))
        }
    }
}

// ============================================================================
// REQUEST LIFECYCLE
// ============================================================================

#[post("/request-help")]
pub async fn request_help(
    body: web::Json<RequestHelpRequest>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    if body.table_no <= 0 || body.user_name.is_empty() || body.user_tg.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing required fields"
        }));
    }

    info!(
        "🚨 Help request at table {} from {}",
        body.table_no, body.user_name
    );

    match app_state
        .lifecycle
        .create_request(body.table_no, &body.user_name, &body.user_tg)
        .await
    {
        Ok(request_number) => HttpResponse::Ok().json(RequestHelpResponse {
            message: "Request sent to mentors".to_string(),
            request_number,
        }),
        Err(e) => lifecycle_error_response(&e),
    }
}

#[post("/accept-request/{request_number}")]
pub async fn accept_request(
    path: web::Path<i32>,
    body: web::Json<AcceptRequestBody>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let request_number = path.into_inner();

    if body.mentor_tg.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Mentor Telegram ID is required."
        }));
    }

    match app_state
        .lifecycle
        .accept_request(request_number, &body.mentor_tg)
        .await
    {
        Ok(acceptance) => HttpResponse::Ok().json(MessageResponse {
            message: format!(
                "Request {} accepted by {}",
                request_number, acceptance.mentor_username
            ),
        }),
        Err(e) => lifecycle_error_response(&e),
    }
}

#[post("/rate-mentor")]
pub async fn rate_mentor(
    body: web::Json<RateMentorRequest>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let proof = RatingProof {
        digest: body.halo_signature.input.digest.clone(),
        ether_address: body.halo_signature.ether_address.clone(),
    };

    match app_state
        .lifecycle
        .rate_mentor(body.request_number, body.rating, &proof)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: format!(
                "Request {} rated {}, signature saved, and mentor ratings updated.",
                body.request_number, body.rating
            ),
        }),
        Err(e) => lifecycle_error_response(&e),
    }
}

#[get("/check-request/{request_number}")]
pub async fn check_request(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let request_number = path.into_inner();

    match app_state.lifecycle.is_rated(request_number) {
        Ok(is_rated) => HttpResponse::Ok().json(CheckRequestResponse { is_rated }),
        Err(LifecycleError::RequestNotFound(_)) => HttpResponse::NotFound().json(json!({
            "error": "Request not found"
        })),
        Err(e) => lifecycle_error_response(&e),
    }
}

// ============================================================================
// ATTESTATION
// ============================================================================

#[post("/attest")]
pub async fn attest(
    body: web::Json<AttestRequest>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    if body.digest.is_empty() || body.ether_address.is_empty() || body.request_number <= 0 {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing required fields."
        }));
    }

    info!(
        "⚓ Attestation requested for request {}",
        body.request_number
    );

    match app_state
        .lifecycle
        .attest(
            app_state.attestor.as_ref(),
            &body.digest,
            &body.ether_address,
            body.request_number,
        )
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(AttestResponse {
            transaction_hash: outcome.transaction_hash,
            attestation_id: outcome.attestation_id,
            message: "Attestation completed and request updated successfully.".to_string(),
        }),
        Err(e) => lifecycle_error_response(&e),
    }
}

// ============================================================================
// LEADERBOARD & MONITORING
// ============================================================================

#[get("/leaderboard")]
pub async fn leaderboard(app_state: web::Data<AppState>) -> impl Responder {
    match app_state.lifecycle.leaderboard() {
        Ok(rows) => {
            let entries: Vec<LeaderboardEntry> =
                rows.into_iter().map(LeaderboardEntry::from).collect();
            HttpResponse::Ok().json(entries)
        }
        Err(e) => {
            error!("Error fetching leaderboard data: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal Server Error"
            }))
        }
    }
}

#[get("/health")]
pub async fn health_check(app_state: web::Data<AppState>) -> impl Responder {
    let db_healthy = app_state.database.health_check().is_ok();
    let ledger_healthy = app_state.attestor.health_check().await.is_ok();

    let overall_healthy = db_healthy && ledger_healthy;

    let status_code = if overall_healthy {
        actix_web::http::StatusCode::OK
    } else {
        actix_web::http::StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status_code).json(json!({
        "status": if overall_healthy { "healthy" } else { "unhealthy" },
        "timestamp": Utc::now().to_rfc3339(),
        "components": {
            "database": if db_healthy { "up" } else { "down" },
            "ledger": if ledger_healthy { "up" } else { "down" }
        }
    }))
}
