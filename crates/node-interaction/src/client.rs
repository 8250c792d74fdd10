use std::{borrow::Cow, ops::ControlFlow, sync::Arc, time::Duration};

use alloy::{
    eips::BlockNumberOrTag,
    primitives::{Address, B256, BlockNumber, Bytes, ChainId, TxHash, U64, U256},
    rpc::types::{Block, Transaction, TransactionReceipt, TransactionRequest},
};
use hardhat_tc_common::{
    futures::{PollError, poll},
    types::Endpoint,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    HttpTransport, MineParameters, PublicActions, ResetForking, RpcError, RpcTransport,
    SnapshotId, TestActions, WalletActions, transport::dispatch,
};

const BLOCK_NUMBER_POLLING_INTERVAL: Duration = Duration::from_millis(200);

/// The capability set a JSON-RPC method belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    Public,
    Test,
    Wallet,
}

/// Generates the facade methods of [`HardhatClient`] that forward to one of its capability sets.
macro_rules! forward_to {
    (
        $field: ident => {
            $(
                $(#[$meta: meta])*
                fn $name: ident($($arg: ident: $ty: ty),* $(,)?) -> $ret: ty;
            )*
        }
    ) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, $($arg: $ty),*) -> Result<$ret, RpcError> {
                self.$field.$name($($arg),*).await
            }
        )*
    };
}

/// A client of a single hardhat node exposing the public, test, and wallet capability sets at
/// once.
///
/// All three sets share one transport. When a method name exists in more than one set, the
/// wallet set takes precedence over the test set which takes precedence over the public set.
#[derive(Clone)]
pub struct HardhatClient {
    transport: Arc<dyn RpcTransport>,
    public: PublicActions,
    test: TestActions,
    wallet: WalletActions,
}

impl HardhatClient {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            public: PublicActions::new(transport.clone()),
            test: TestActions::new(transport.clone()),
            wallet: WalletActions::new(transport.clone()),
            transport,
        }
    }

    pub fn public(&self) -> &PublicActions {
        &self.public
    }

    pub fn test(&self) -> &TestActions {
        &self.test
    }

    pub fn wallet(&self) -> &WalletActions {
        &self.wallet
    }

    /// Resolves which capability set answers `method`, if any does.
    pub fn capability_of(method: &str) -> Option<Capability> {
        [
            (Capability::Wallet, WalletActions::RPC_METHODS),
            (Capability::Test, TestActions::RPC_METHODS),
            (Capability::Public, PublicActions::RPC_METHODS),
        ]
        .into_iter()
        .find_map(|(capability, methods)| methods.contains(&method).then_some(capability))
    }

    /// Sends a method none of the capability sets cover.
    pub async fn request(
        &self,
        method: impl Into<Cow<'static, str>>,
        params: Value,
    ) -> Result<Value, RpcError> {
        self.transport.request(method.into(), params).await
    }

    forward_to!(public => {
        fn get_block_number() -> BlockNumber;
        fn get_chain_id() -> ChainId;
        fn get_balance(address: Address) -> U256;
        fn get_transaction_count(address: Address) -> u64;
        fn get_code(address: Address) -> Bytes;
        fn get_transaction(hash: TxHash) -> Transaction;
        fn get_transaction_receipt(hash: TxHash) -> Option<TransactionReceipt>;
        fn get_block_by_number(number: BlockNumberOrTag, full_transactions: bool) -> Option<Block>;
        fn get_gas_price() -> u128;
        fn call(transaction: TransactionRequest) -> Bytes;
        fn estimate_gas(transaction: TransactionRequest) -> u64;
    });

    forward_to!(test => {
        fn mine(parameters: MineParameters) -> ();
        fn mine_block() -> ();
        fn snapshot() -> SnapshotId;
        fn revert(id: &SnapshotId) -> bool;
        fn set_coinbase(address: Address) -> ();
        fn set_balance(address: Address, value: U256) -> ();
        fn set_code(address: Address, bytecode: Bytes) -> ();
        fn set_nonce(address: Address, nonce: u64) -> ();
        fn set_storage_at(address: Address, slot: U256, value: B256) -> ();
        fn impersonate_account(address: Address) -> ();
        fn stop_impersonating_account(address: Address) -> ();
        fn set_automine(enabled: bool) -> ();
        fn set_interval_mining(interval_ms: u64) -> ();
        fn increase_time(seconds: u64) -> ();
        fn set_next_block_timestamp(timestamp: u64) -> ();
        fn reset(forking: Option<ResetForking>) -> ();
        fn drop_transaction(hash: TxHash) -> ();
    });

    forward_to!(wallet => {
        fn get_addresses() -> Vec<Address>;
        fn send_transaction(transaction: TransactionRequest) -> TxHash;
        fn deploy_contract(from: Address, bytecode: Bytes, constructor_arguments: Bytes) -> TxHash;
        fn write_contract(from: Address, to: Address, calldata: Bytes, value: Option<U256>) -> TxHash;
        fn sign_message(address: Address, message: Bytes) -> Bytes;
    });

    /// The address of the contract created by the deployment transaction `hash`, derived from the
    /// sender and nonce of the transaction. The transaction doesn't need to be mined yet.
    pub async fn deployed_address(&self, hash: TxHash) -> Result<Address, RpcError> {
        #[derive(Deserialize)]
        struct TransactionSender {
            from: Address,
            nonce: U64,
        }

        let sender = dispatch::<Option<TransactionSender>>(
            self.transport.as_ref(),
            "eth_getTransactionByHash",
            json!([hash]),
        )
        .await?
        .ok_or(RpcError::MissingTransaction(hash))?;
        Ok(contract_address(sender.from, sender.nonce.to::<u64>()))
    }

    /// Polls the node until its latest block is at least `target`.
    #[instrument(level = "debug", skip(self))]
    pub async fn wait_for_block_number(
        &self,
        target: BlockNumber,
        timeout: Duration,
    ) -> Result<BlockNumber, RpcError> {
        poll(
            timeout,
            BLOCK_NUMBER_POLLING_INTERVAL,
            || async move {
                let block_number = self.get_block_number().await?;
                debug!(block_number, "Polled the block number");
                Ok::<_, RpcError>(match block_number >= target {
                    true => ControlFlow::Break(block_number),
                    false => ControlFlow::Continue(()),
                })
            },
        )
        .await
        .map_err(|error| match error {
            PollError::TimedOut { .. } => RpcError::BlockTimeout { target, timeout },
            PollError::Failed(error) => error,
        })
    }
}

/// The address of the contract `deployer` creates with the transaction of nonce `nonce`.
pub fn contract_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

/// Creates [`HardhatClient`]s. Clients never cache responses, each call reaches the node.
#[derive(Clone, Copy, Debug, Default)]
pub struct RpcClientFactory;

impl RpcClientFactory {
    /// Creates a client talking HTTP to `endpoint`. No request is sent until a method is called.
    pub fn create(endpoint: &Endpoint) -> Result<HardhatClient, RpcError> {
        let url = endpoint.url();
        let url = Url::parse(&url).map_err(|source| RpcError::InvalidEndpoint { url, source })?;
        debug!(%url, "Creating a node client");
        Ok(Self::with_transport(Arc::new(HttpTransport::new(url))))
    }

    pub fn with_transport(transport: Arc<dyn RpcTransport>) -> HardhatClient {
        HardhatClient::new(transport)
    }
}
