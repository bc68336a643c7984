use std::sync::Arc;

use anyhow::{Result, anyhow};
use ethers::{
    abi::{RawLog, Token},
    contract::{EthLogDecode, abigen},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, Bytes, U256},
    utils::to_checksum,
};
use tokio::time::{Duration, timeout};
use tracing::info;

use crate::models::{
    model::{AttestationOutcome, LedgerConfig},
    traits::AttestationLedger,
};

pub mod sign_portal {
    use super::abigen;

    abigen!(
        SignPortal,
        r#"[
            struct Attestation { uint64 schemaId; uint64 linkedAttestationId; uint64 attestTimestamp; uint64 revokeTimestamp; address attester; uint64 validUntil; uint8 dataLocation; bool revoked; bytes[] recipients; bytes data; }
            function attest(Attestation attestation, string indexingKey, bytes delegateSignature, bytes extraData) external returns (uint64)
            event AttestationMade(uint64 attestationId, string indexingKey)
        ]"#
    );
}

use sign_portal::{Attestation, AttestationMadeFilter, SignPortal};

pub type LedgerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

const ATTESTATION_SCHEMA_ID: u64 = 0x301;
const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Ethers-backed attestation bridge: one transaction per rating, one
/// confirmation, no retry.
pub struct EvmAttestor {
    portal: SignPortal<LedgerClient>,
    client: Arc<LedgerClient>,
    wallet_address: Address,
}

impl EvmAttestor {
    pub async fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        info!("🔗 Initializing attestation ledger client");

        let provider = Provider::<Http>::try_from(&config.rpc_url)
            .map_err(|e| anyhow!("Failed to create provider: {}", e))?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| anyhow!("Failed to get chain ID: {}", e))?
            .as_u64();

        let wallet: LocalWallet = config
            .private_key
            .parse::<LocalWallet>()
            .map_err(|e| anyhow!("Invalid private key: {}", e))?
            .with_chain_id(chain_id);

        let wallet_address = wallet.address();
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        let portal_address: Address = config
            .portal_address
            .parse()
            .map_err(|e| anyhow!("Invalid portal address: {}", e))?;

        let portal = SignPortal::new(portal_address, client.clone());

        Ok(Self {
            portal,
            client,
            wallet_address,
        })
    }

    pub async fn health_check(&self) -> Result<()> {
        self.client
            .get_block_number()
            .await
            .map_err(|e| anyhow!("Ledger RPC unhealthy: {}", e))?;
        Ok(())
    }

    async fn submit_attestation(
        &self,
        digest: &str,
        ether_address: &str,
        request_number: i32,
    ) -> Result<AttestationOutcome> {
        info!("⚓ Attesting rating for request {}", request_number);

        let normalized: Address = ether_address
            .parse()
            .map_err(|e| anyhow!("Invalid ether address: {}", e))?;

        let encoded = ethers::abi::encode(&[
            Token::String(digest.to_string()),
            Token::Address(normalized),
            Token::Uint(U256::from(request_number as u64)),
        ]);

        let attestation = Attestation {
            schema_id: ATTESTATION_SCHEMA_ID,
            linked_attestation_id: 0,
            attest_timestamp: 0,
            revoke_timestamp: 0,
            attester: self.wallet_address,
            valid_until: 0,
            data_location: 0,
            revoked: false,
            recipients: Vec::new(),
            data: Bytes::from(encoded),
        };

        let indexing_key = to_checksum(&normalized, None).to_lowercase();

        let tx = self.portal.attest(
            attestation,
            indexing_key,
            Bytes::default(),
            Bytes::from(vec![0u8]),
        );

        let pending = tx
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send transaction: {}", e))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        info!("📤 Attestation transaction sent: {}", tx_hash);

        let receipt = timeout(CONFIRMATION_TIMEOUT, pending)
            .await
            .map_err(|_| anyhow!("Timed out waiting for attestation confirmation"))?
            .map_err(|e| anyhow!("Transaction failed: {}", e))?
            .ok_or_else(|| anyhow!("Transaction dropped"))?;

        if receipt.status != Some(1.into()) {
            return Err(anyhow!("Transaction reverted"));
        }

        let attestation_id = receipt
            .logs
            .iter()
            .find_map(|log| {
                AttestationMadeFilter::decode_log(&RawLog {
                    topics: log.topics.clone(),
                    data: log.data.to_vec(),
                })
                .ok()
            })
            .map(|event| event.attestation_id.to_string());

        info!(
            "✅ Attestation confirmed: {} (id: {:?})",
            tx_hash, attestation_id
        );

        Ok(AttestationOutcome {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            attestation_id,
        })
    }
}

impl AttestationLedger for EvmAttestor {
    fn attest(
        &self,
        digest: &str,
        ether_address: &str,
        request_number: i32,
    ) -> impl std::future::Future<Output = Result<AttestationOutcome>> + Send {
        let digest = digest.to_string();
        let ether_address = ether_address.to_string();

        async move {
            self.submit_attestation(&digest, &ether_address, request_number)
                .await
        }
    }
}
