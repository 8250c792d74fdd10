//! Scenarios against real hardhat nodes started on the local Docker daemon.

use std::time::Duration;

use alloy::{
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};
use alloy_sol_types::{SolCall, SolValue, sol};
use hardhat_tc_node::{HardhatContainer, StartedHardhatContainer};
use hardhat_tc_node_interaction::{HardhatClient, MineParameters};
use serde_json::{Value, json};

sol! {
    function transfer(address to, uint256 value) returns (bool);
    function balanceOf(address account) returns (uint256);
}

const TOKEN_BYTECODE: &str = include_str!("assets/token.hex");

async fn balance_of(client: &HardhatClient, token: Address, account: Address) -> U256 {
    let transaction = TransactionRequest::default()
        .to(token)
        .input(Bytes::from(balanceOfCall { account }.abi_encode()).into());
    let result = client.call(transaction).await.expect("balanceOf");
    U256::from_be_slice(&result)
}

async fn start(builder: HardhatContainer) -> StartedHardhatContainer {
    builder
        .with_startup_timeout(Duration::from_secs(120))
        .start()
        .await
        .expect("Failed to start the hardhat container")
}

#[tokio::test]
#[ignore = "Requires a running Docker daemon"]
async fn default_node_starts_at_genesis() {
    // Arrange
    let mut container = start(HardhatContainer::new()).await;

    // Act
    let response = reqwest::Client::new()
        .post(container.host_rpc_endpoint(None))
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_blockNumber",
            "params": []
        }))
        .send()
        .await
        .expect("Failed to send the request");

    // Assert
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.json::<Value>().await.expect("Invalid JSON body");
    assert_eq!(body["result"], json!("0x0"));
    assert_eq!(
        container.client().get_chain_id().await.expect("chain id"),
        31337
    );

    container.stop().await.expect("Failed to stop the container");
}

#[tokio::test]
#[ignore = "Requires a running Docker daemon"]
async fn interval_mining_advances_the_chain() {
    // Arrange
    let mut container = start(HardhatContainer::new().with_mining_interval(2000)).await;
    let client = container.client();
    let start_block_number = client.get_block_number().await.expect("block number");

    // Act
    let block_number = client
        .wait_for_block_number(start_block_number + 1, Duration::from_secs(30))
        .await;

    // Assert
    assert!(block_number.expect("The node did not mine") > start_block_number);

    container.stop().await.expect("Failed to stop the container");
}

#[tokio::test]
#[ignore = "Requires a running Docker daemon"]
async fn revert_restores_the_snapshot_height() {
    // Arrange
    let mut container = start(HardhatContainer::new().with_mining_interval(0)).await;
    let client = container.client();

    // Act
    client.mine(MineParameters::blocks(1)).await.expect("mine");
    let snapshot = client.snapshot().await.expect("snapshot");
    client.mine(MineParameters::blocks(1)).await.expect("mine");
    let reverted = client.revert(&snapshot).await.expect("revert");
    let height_after_revert = client.get_block_number().await.expect("block number");
    client
        .set_coinbase(Address::ZERO)
        .await
        .expect("set coinbase");
    client.mine(MineParameters::blocks(2)).await.expect("mine");
    let final_height = client.get_block_number().await.expect("block number");

    // Assert
    assert!(reverted);
    assert_eq!(height_after_revert, 1);
    assert_eq!(final_height, 3);

    container.stop().await.expect("Failed to stop the container");
}

#[tokio::test]
#[ignore = "Requires a running Docker daemon"]
async fn deployed_token_can_be_transferred() {
    // Arrange
    let mut container = start(HardhatContainer::new().with_mining_interval(0)).await;
    let client = container.client();
    let accounts = client.get_addresses().await.expect("accounts");
    let (sender, receiver) = (accounts[0], accounts[1]);
    let bytecode = TOKEN_BYTECODE
        .trim()
        .parse::<Bytes>()
        .expect("Invalid token bytecode");
    let constructor_arguments =
        ("Name".to_owned(), "SYMBOL".to_owned(), U256::from(999)).abi_encode_params();

    // Act
    let deployment = client
        .deploy_contract(sender, bytecode, constructor_arguments.into())
        .await
        .expect("deploy");
    let token = client
        .deployed_address(deployment)
        .await
        .expect("deployed address");
    client.mine_block().await.expect("mine");

    let sender_balance_before = balance_of(client, token, sender).await;

    let calldata = transferCall {
        to: receiver,
        value: U256::from(99),
    }
    .abi_encode();
    client
        .write_contract(sender, token, calldata.into(), None)
        .await
        .expect("transfer");
    client.mine_block().await.expect("mine");

    // Assert
    assert_eq!(balance_of(client, token, receiver).await, U256::from(99));
    assert_eq!(
        balance_of(client, token, sender).await,
        sender_balance_before - U256::from(99)
    );

    container.stop().await.expect("Failed to stop the container");
}
