use std::sync::Arc;

use alloy::{
    eips::BlockNumberOrTag,
    primitives::{Address, BlockNumber, Bytes, ChainId, TxHash, U64, U128, U256},
    rpc::types::{Block, Transaction, TransactionReceipt, TransactionRequest},
};
use serde_json::json;

use crate::{
    RpcError, RpcTransport,
    transport::dispatch,
};

/// The read-only chain queries.
#[derive(Clone)]
pub struct PublicActions {
    transport: Arc<dyn RpcTransport>,
}

impl PublicActions {
    /// The JSON-RPC methods this capability set sends.
    pub const RPC_METHODS: &'static [&'static str] = &[
        "eth_blockNumber",
        "eth_chainId",
        "eth_getBalance",
        "eth_getTransactionCount",
        "eth_getCode",
        "eth_getTransactionByHash",
        "eth_getTransactionReceipt",
        "eth_getBlockByNumber",
        "eth_gasPrice",
        "eth_call",
        "eth_estimateGas",
    ];

    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_block_number(&self) -> Result<BlockNumber, RpcError> {
        dispatch::<U64>(self.transport.as_ref(), "eth_blockNumber", json!([]))
            .await
            .map(|number| number.to::<u64>())
    }

    pub async fn get_chain_id(&self) -> Result<ChainId, RpcError> {
        dispatch::<U64>(self.transport.as_ref(), "eth_chainId", json!([]))
            .await
            .map(|chain_id| chain_id.to::<u64>())
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_getBalance",
            json!([address, BlockNumberOrTag::Latest]),
        )
        .await
    }

    /// The nonce of the next transaction `address` will send, pending transactions included.
    pub async fn get_transaction_count(&self, address: Address) -> Result<u64, RpcError> {
        dispatch::<U64>(
            self.transport.as_ref(),
            "eth_getTransactionCount",
            json!([address, BlockNumberOrTag::Pending]),
        )
        .await
        .map(|nonce| nonce.to::<u64>())
    }

    pub async fn get_code(&self, address: Address) -> Result<Bytes, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_getCode",
            json!([address, BlockNumberOrTag::Latest]),
        )
        .await
    }

    pub async fn get_transaction(&self, hash: TxHash) -> Result<Transaction, RpcError> {
        dispatch::<Option<Transaction>>(
            self.transport.as_ref(),
            "eth_getTransactionByHash",
            json!([hash]),
        )
        .await?
        .ok_or(RpcError::MissingTransaction(hash))
    }

    /// Returns [`None`] while the transaction is still pending.
    pub async fn get_transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_getTransactionReceipt",
            json!([hash]),
        )
        .await
    }

    pub async fn get_block_by_number(
        &self,
        number: BlockNumberOrTag,
        full_transactions: bool,
    ) -> Result<Option<Block>, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_getBlockByNumber",
            json!([number, full_transactions]),
        )
        .await
    }

    pub async fn get_gas_price(&self) -> Result<u128, RpcError> {
        dispatch::<U128>(self.transport.as_ref(), "eth_gasPrice", json!([]))
            .await
            .map(|price| price.to::<u128>())
    }

    pub async fn call(&self, transaction: TransactionRequest) -> Result<Bytes, RpcError> {
        dispatch(
            self.transport.as_ref(),
            "eth_call",
            json!([transaction, BlockNumberOrTag::Latest]),
        )
        .await
    }

    pub async fn estimate_gas(&self, transaction: TransactionRequest) -> Result<u64, RpcError> {
        dispatch::<U64>(
            self.transport.as_ref(),
            "eth_estimateGas",
            json!([transaction]),
        )
        .await
        .map(|gas| gas.to::<u64>())
    }
}
