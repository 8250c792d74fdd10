use std::sync::Arc;

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::{TransactionInput, TransactionRequest},
};
use serde_json::json;

use crate::{RpcError, RpcTransport, transport::dispatch};

/// The transaction submitting actions. Every transaction is signed by the node itself with one of
/// its unlocked development accounts, no key material ever leaves the container.
#[derive(Clone)]
pub struct WalletActions {
    transport: Arc<dyn RpcTransport>,
}

impl WalletActions {
    /// The JSON-RPC methods this capability set sends.
    pub const RPC_METHODS: &'static [&'static str] =
        &["eth_accounts", "eth_sendTransaction", "eth_sign"];

    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// The accounts the node holds the keys of, funded at genesis.
    pub async fn get_addresses(&self) -> Result<Vec<Address>, RpcError> {
        dispatch(self.transport.as_ref(), "eth_accounts", json!([])).await
    }

    pub async fn send_transaction(
        &self,
        transaction: TransactionRequest,
    ) -> Result<TxHash, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_sendTransaction",
            json!([transaction]),
        )
        .await
    }

    /// Submits a contract creation transaction of `bytecode` followed by the already ABI encoded
    /// constructor arguments.
    pub async fn deploy_contract(
        &self,
        from: Address,
        bytecode: Bytes,
        constructor_arguments: Bytes,
    ) -> Result<TxHash, RpcError> {
        let code = [bytecode.as_ref(), constructor_arguments.as_ref()].concat();
        let transaction = TransactionRequest::default()
            .from(from)
            .input(TransactionInput::both(code.into()));
        self.send_transaction(transaction).await
    }

    /// Submits a call of an already ABI encoded function to the contract at `to`.
    pub async fn write_contract(
        &self,
        from: Address,
        to: Address,
        calldata: Bytes,
        value: Option<U256>,
    ) -> Result<TxHash, RpcError> {
        let mut transaction = TransactionRequest::default()
            .from(from)
            .to(to)
            .input(TransactionInput::both(calldata));
        if let Some(value) = value {
            transaction = transaction.value(value);
        }
        self.send_transaction(transaction).await
    }

    pub async fn sign_message(&self, address: Address, message: Bytes) -> Result<Bytes, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_sign",
            json!([address, message]),
        )
        .await
    }
}
