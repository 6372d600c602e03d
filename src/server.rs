use crate::chain::ChainRpc;
use crate::config::Config;
use crate::error::ToolError;
use crate::tools::{
    balance::{check_balance, CheckBalanceRequest},
    gas_price::{get_gas_price, GetGasPriceRequest},
    parse_address,
    send::{send_mon, SendMonRequest},
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

/// MCP server exposing the three Monad testnet tools over stdio.
#[derive(Clone)]
pub struct MonadServer {
    config: Arc<Config>,
    chain: Arc<dyn ChainRpc>,
    tool_router: ToolRouter<Self>,
}

/// Render a handler outcome as text content.
///
/// Both arms produce a normal tool result: handler failures come back as
/// descriptive text, never as protocol-level errors. Only malformed
/// arguments (caught before the handler runs) surface as `McpError`.
fn text_result(outcome: Result<String, ToolError>) -> CallToolResult {
    let text = match outcome {
        Ok(text) => text,
        Err(err) => err.to_string(),
    };
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl MonadServer {
    pub fn new(config: Arc<Config>, chain: Arc<dyn ChainRpc>) -> Self {
        Self {
            config,
            chain,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "get-gas-price",
        description = "Get the current gas price on Monad testnet in gwei. Set average=true to average the base fee over the last five blocks instead."
    )]
    async fn get_gas_price(
        &self,
        Parameters(request): Parameters<GetGasPriceRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(text_result(
            get_gas_price(self.chain.as_ref(), request).await,
        ))
    }

    #[tool(
        name = "check-balance",
        description = "Check the native MON balance of an address on Monad testnet."
    )]
    async fn check_balance(
        &self,
        Parameters(request): Parameters<CheckBalanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let address =
            parse_address(&request.address).map_err(|e| McpError::invalid_params(e, None))?;

        Ok(text_result(
            check_balance(self.chain.as_ref(), &self.config, address).await,
        ))
    }

    #[tool(
        name = "send-mon",
        description = "Send native MON from the configured account to another address on Monad testnet. Requires the MONAD_PRIVATE_KEY environment variable."
    )]
    async fn send_mon(
        &self,
        Parameters(request): Parameters<SendMonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let to =
            parse_address(&request.to_address).map_err(|e| McpError::invalid_params(e, None))?;

        Ok(text_result(
            send_mon(self.chain.as_ref(), &self.config, to, &request.amount).await,
        ))
    }
}

#[tool_handler]
impl ServerHandler for MonadServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "{}: query gas prices and MON balances on {} and send native MON transfers.",
                self.config.server.name, self.config.network.chain_name
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::MockChain;
    use ethers::types::U256;

    fn server_with(mock: MockChain) -> (MonadServer, Arc<MockChain>) {
        let mock = Arc::new(mock);
        let mut config = Config::from_env().unwrap();
        config.private_key = None;
        (MonadServer::new(Arc::new(config), mock.clone()), mock)
    }

    fn result_text(result: &CallToolResult) -> String {
        serde_json::to_string(result).unwrap()
    }

    #[tokio::test]
    async fn test_check_balance_formats_with_18_decimals() {
        let (server, mock) = server_with(MockChain {
            balance: U256::from_dec_str("1500000000000000000").unwrap(),
            ..Default::default()
        });

        let result = server
            .check_balance(Parameters(CheckBalanceRequest {
                address: format!("0x{}", "a".repeat(40)),
            }))
            .await
            .unwrap();

        assert!(result_text(&result).contains("1.5"));
        assert_eq!(mock.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_address_rejected_without_rpc_calls() {
        for bad in [
            "742d35Cc6634C0532925a3b844Bc9e7595f0bEbb",       // no prefix
            "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",       // 39 chars
            "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbbcc",    // 42 chars
            "0xzzzd35Cc6634C0532925a3b844Bc9e7595f0bEbb",      // non-hex
        ] {
            let (server, mock) = server_with(MockChain::default());

            let balance_result = server
                .check_balance(Parameters(CheckBalanceRequest {
                    address: bad.to_string(),
                }))
                .await;
            assert!(balance_result.is_err(), "address {:?} should be rejected", bad);

            let send_result = server
                .send_mon(Parameters(SendMonRequest {
                    to_address: bad.to_string(),
                    amount: "0.1".to_string(),
                }))
                .await;
            assert!(send_result.is_err(), "address {:?} should be rejected", bad);

            assert_eq!(mock.total_calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_send_without_credential_returns_error_text() {
        let (server, mock) = server_with(MockChain::default());

        let result = server
            .send_mon(Parameters(SendMonRequest {
                to_address: format!("0x{}", "c".repeat(40)),
                amount: "0.1".to_string(),
            }))
            .await
            .unwrap();

        // a normal (non-protocol-error) response carrying the error text
        assert!(result_text(&result).contains("MONAD_PRIVATE_KEY"));
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_gas_price_tool_returns_text() {
        let (server, mock) = server_with(MockChain {
            gas_price: U256::from(25_000_000_000u64),
            ..Default::default()
        });

        let result = server
            .get_gas_price(Parameters(GetGasPriceRequest { average: false }))
            .await
            .unwrap();

        assert!(result_text(&result).contains("25 gwei"));
        assert_eq!(mock.total_calls(), 1);
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let (server, _) = server_with(MockChain::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("Monad"));
    }
}
