/// Failures surfaced by the request lifecycle. Infrastructure errors
/// are wrapped; everything else maps onto a client-visible outcome.
#[derive(Debug)]
pub enum LifecycleError {
    /// Rating outside the accepted 1..=10 range.
    InvalidRating(i32),
    /// No mentor covers the requested table. The request itself stays
    /// persisted as pending.
    NoMentorsAssigned(i32),
    /// The request does not exist or was already accepted; acceptance
    /// races collapse into this variant, so losers see the same answer
    /// as callers of a bogus number.
    RequestNotFound(i32),
    /// The request exists but is not in the accepted state.
    RequestNotResolved(i32),
    /// The request already carries a rating.
    AlreadyRated(i32),
    /// The acting identity has no mentor record.
    MentorNotFound(String),
    Ledger(anyhow::Error),
    Storage(anyhow::Error),
}

impl std::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleError::InvalidRating(rating) => {
                write!(f, "Invalid rating {}: must be between 1 and 10", rating)
            }
            LifecycleError::NoMentorsAssigned(table_no) => {
                write!(f, "No mentors assigned to table {}", table_no)
            }
            LifecycleError::RequestNotFound(number) => {
                write!(f, "Request {} not found or already accepted", number)
            }
            LifecycleError::RequestNotResolved(number) => {
                write!(f, "Request {} not found or not resolved", number)
            }
            LifecycleError::AlreadyRated(number) => {
                write!(f, "Request {} has already been rated", number)
            }
            LifecycleError::MentorNotFound(mentor_tg) => {
                write!(f, "Mentor {} not found", mentor_tg)
            }
            LifecycleError::Ledger(e) => write!(f, "Ledger error: {}", e),
            LifecycleError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for LifecycleError {}

impl From<anyhow::Error> for LifecycleError {
    fn from(e: anyhow::Error) -> Self {
        LifecycleError::Storage(e)
    }
}

/// Outcome of a winning accept.
#[derive(Debug, Clone)]
pub struct Acceptance {
    pub mentor_username: String,
}

/// Off-chain signed proof supplied by the attendee at rating time.
#[derive(Debug, Clone)]
pub struct RatingProof {
    pub digest: String,
    pub ether_address: String,
}
