use anyhow::Result;

use crate::models::model::AttestationOutcome;

/// Ledger-side attestation capability. The production implementation
/// submits a contract transaction; tests substitute a mock.
pub trait AttestationLedger {
    fn attest(
        &self,
        digest: &str,
        ether_address: &str,
        request_number: i32,
    ) -> impl std::future::Future<Output = Result<AttestationOutcome>> + Send;
}
