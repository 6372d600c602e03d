use async_trait::async_trait;
use ethers::prelude::*;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Errors surfaced by the RPC client layer.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("invalid RPC URL '{0}'")]
    InvalidUrl(String),

    #[error("could not build HTTP transport: {0}")]
    Transport(String),

    #[error("transaction submission failed: {0}")]
    Submission(String),
}

/// The RPC capabilities the tool handlers need.
///
/// Handlers only ever see this trait, so tests can substitute an offline
/// fake and production wires in [`MonadClient`].
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Native balance of an address, in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, ChainError>;

    /// Current network gas price, in wei.
    async fn get_gas_price(&self) -> Result<U256, ChainError>;

    /// Latest block number.
    async fn get_block_number(&self) -> Result<u64, ChainError>;

    /// Base fee of the given block, if the block exists and reports one.
    async fn get_block_base_fee(&self, number: u64) -> Result<Option<U256>, ChainError>;

    /// Sign a plain value transfer with `wallet` and submit it.
    ///
    /// Returns the transaction hash as soon as the node accepts the
    /// transaction; confirmation is not awaited.
    async fn send_transfer(
        &self,
        wallet: &LocalWallet,
        to: Address,
        value: U256,
        gas_price: U256,
    ) -> Result<TxHash, ChainError>;
}

/// JSON-RPC client for the Monad testnet endpoint.
#[derive(Clone)]
pub struct MonadClient {
    provider: Provider<Http>,
    chain_id: u64,
}

impl MonadClient {
    /// Build a client over an HTTP transport with a fixed request timeout.
    pub fn new(rpc_url: &str, chain_id: u64, timeout: Duration) -> Result<Self, ChainError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|_| ChainError::InvalidUrl(rpc_url.to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        let provider = Provider::new(Http::new_with_client(url, http_client));

        info!(rpc_url = %rpc_url, chain_id = chain_id, "initialized Monad RPC client");

        Ok(Self { provider, chain_id })
    }
}

#[async_trait]
impl ChainRpc for MonadClient {
    #[instrument(skip(self))]
    async fn get_balance(&self, address: Address) -> Result<U256, ChainError> {
        let balance = self.provider.get_balance(address, None).await?;
        debug!(address = ?address, balance_wei = %balance, "fetched balance");
        Ok(balance)
    }

    #[instrument(skip(self))]
    async fn get_gas_price(&self) -> Result<U256, ChainError> {
        let gas_price = self.provider.get_gas_price().await?;
        debug!(gas_price_wei = %gas_price, "fetched gas price");
        Ok(gas_price)
    }

    #[instrument(skip(self))]
    async fn get_block_number(&self) -> Result<u64, ChainError> {
        let number = self.provider.get_block_number().await?;
        debug!(block_number = %number, "fetched block number");
        Ok(number.as_u64())
    }

    #[instrument(skip(self))]
    async fn get_block_base_fee(&self, number: u64) -> Result<Option<U256>, ChainError> {
        let block = self.provider.get_block(BlockNumber::Number(number.into())).await?;
        Ok(block.and_then(|b| b.base_fee_per_gas))
    }

    #[instrument(skip(self, wallet))]
    async fn send_transfer(
        &self,
        wallet: &LocalWallet,
        to: Address,
        value: U256,
        gas_price: U256,
    ) -> Result<TxHash, ChainError> {
        let wallet = wallet.clone().with_chain_id(self.chain_id);
        let sender = wallet.address();
        let client = SignerMiddleware::new(self.provider.clone(), wallet);

        let tx = TransactionRequest::new()
            .to(to)
            .value(value)
            .gas_price(gas_price);

        let pending = client
            .send_transaction(tx, None)
            .await
            .map_err(|e| ChainError::Submission(e.to_string()))?;
        let tx_hash = *pending;

        info!(
            from = ?sender,
            to = ?to,
            value_wei = %value,
            tx_hash = ?tx_hash,
            "submitted transfer"
        );

        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_bad_url() {
        let result = MonadClient::new("not a url", 10143, Duration::from_secs(5));
        assert!(matches!(result, Err(ChainError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_accepts_valid_url() {
        let client = MonadClient::new(
            "https://testnet-rpc.monad.xyz",
            10143,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.chain_id, 10143);
    }

    #[test]
    fn test_chain_error_display() {
        assert_eq!(
            ChainError::Submission("nonce too low".to_string()).to_string(),
            "transaction submission failed: nonce too low"
        );
    }
}
