use serde::{Deserialize, Serialize};

use crate::models::model::LeaderboardRow;

// ============================================================================
// HELP REQUEST MODELS
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    pub uid: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub name: String,
    pub tg_username: String,
}

#[derive(Debug, Deserialize)]
pub struct RequestHelpRequest {
    pub table_no: i32,
    pub user_name: String,
    pub user_tg: String,
}

#[derive(Debug, Serialize)]
pub struct RequestHelpResponse {
    pub message: String,
    pub request_number: i32,
}

#[derive(Debug, Deserialize)]
pub struct AcceptRequestBody {
    pub mentor_tg: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// RATING MODELS
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RateMentorRequest {
    pub request_number: i32,
    pub rating: i32,
    pub halo_signature: HaloSignature,
}

#[derive(Debug, Deserialize)]
pub struct HaloSignature {
    pub input: HaloSignatureInput,
    #[serde(rename = "etherAddress")]
    pub ether_address: String,
}

#[derive(Debug, Deserialize)]
pub struct HaloSignatureInput {
    pub digest: String,
}

#[derive(Debug, Serialize)]
pub struct CheckRequestResponse {
    #[serde(rename = "isRated")]
    pub is_rated: bool,
}

// ============================================================================
// ATTESTATION MODELS
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AttestRequest {
    pub digest: String,
    #[serde(rename = "etherAddress")]
    pub ether_address: String,
    pub request_number: i32,
}

#[derive(Debug, Serialize)]
pub struct AttestResponse {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "attestationId")]
    pub attestation_id: Option<String>,
    pub message: String,
}

// ============================================================================
// LEADERBOARD MODELS
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub reputation: String,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            username: row.username,
            reputation: format!("{:.2}", row.reputation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reputation_is_formatted_to_two_decimals() {
        let entry = LeaderboardEntry::from(LeaderboardRow {
            username: "alice".to_string(),
            reputation: 23.0 / 3.0,
        });
        assert_eq!(entry.reputation, "7.67");

        let entry = LeaderboardEntry::from(LeaderboardRow {
            username: "bob".to_string(),
            reputation: 0.0,
        });
        assert_eq!(entry.reputation, "0.00");

        let entry = LeaderboardEntry::from(LeaderboardRow {
            username: "carol".to_string(),
            reputation: 8.0,
        });
        assert_eq!(entry.reputation, "8.00");
    }
}
