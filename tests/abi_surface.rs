//! The generated bindings must agree with the canonical ABI of the standards:
//! selectors, event topics, and indexed-field layout.

use ethers::contract::{EthCall, EthEvent};
use ethers::core::abi::RawLog;
use ethers::types::{Address, H256, U256};
use ethers::utils::keccak256;

use oz_bindings::crowdsale::crowdsale::{BuyTokensCall, TokensPurchasedFilter};
use oz_bindings::payment::escrow::{DepositedFilter, WithdrawnFilter};
use oz_bindings::payment::token_vesting::{ReleaseCall, TokensReleasedFilter};
use oz_bindings::token::erc20::{
    ApprovalFilter, ApproveCall, BalanceOfCall, DecimalsCall, NameCall, SymbolCall,
    TotalSupplyCall, TransferCall, TransferFilter, TransferFromCall,
};
use oz_bindings::token::erc20_metadata::TokenURICall as TokenUriCall;
use oz_bindings::token::erc721_full::TransferFilter as Erc721TransferFilter;
use oz_bindings::token::erc721_pausable::{PausedFilter, UnpausedFilter};
use oz_bindings::token::ierc777::{AuthorizedOperatorFilter, BurnedFilter, SentFilter};

fn topic(signature: &str) -> H256 {
    H256::from(keccak256(signature.as_bytes()))
}

#[test]
fn erc20_selectors_match_the_standard() {
    assert_eq!(TransferCall::selector(), [0xa9, 0x05, 0x9c, 0xbb]);
    assert_eq!(TransferFromCall::selector(), [0x23, 0xb8, 0x72, 0xdd]);
    assert_eq!(ApproveCall::selector(), [0x09, 0x5e, 0xa7, 0xb3]);
    assert_eq!(BalanceOfCall::selector(), [0x70, 0xa0, 0x82, 0x31]);
    assert_eq!(TotalSupplyCall::selector(), [0x18, 0x16, 0x0d, 0xdd]);
    assert_eq!(NameCall::selector(), [0x06, 0xfd, 0xde, 0x03]);
    assert_eq!(SymbolCall::selector(), [0x95, 0xd8, 0x9b, 0x41]);
    assert_eq!(DecimalsCall::selector(), [0x31, 0x3c, 0xe5, 0x67]);
}

#[test]
fn erc20_event_topics_match_the_standard() {
    // The canonical topic hashes, as emitted by every ERC20 since 2015.
    let transfer: H256 = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        .parse()
        .unwrap();
    let approval: H256 = "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"
        .parse()
        .unwrap();
    assert_eq!(TransferFilter::signature(), transfer);
    assert_eq!(ApprovalFilter::signature(), approval);
}

#[test]
fn call_signatures_are_canonical() {
    assert_eq!(TransferCall::abi_signature(), "transfer(address,uint256)");
    assert_eq!(
        TransferFromCall::abi_signature(),
        "transferFrom(address,address,uint256)"
    );
    assert_eq!(BuyTokensCall::abi_signature(), "buyTokens(address)");
    assert_eq!(ReleaseCall::abi_signature(), "release(address)");
}

#[test]
fn crowdsale_and_payment_event_topics() {
    assert_eq!(
        TokensPurchasedFilter::signature(),
        topic("TokensPurchased(address,address,uint256,uint256)")
    );
    assert_eq!(DepositedFilter::signature(), topic("Deposited(address,uint256)"));
    assert_eq!(WithdrawnFilter::signature(), topic("Withdrawn(address,uint256)"));
    assert_eq!(
        TokensReleasedFilter::signature(),
        topic("TokensReleased(address,uint256)")
    );
}

#[test]
fn metadata_and_pausable_surfaces() {
    assert_eq!(TokenUriCall::abi_signature(), "tokenURI()");
    assert_eq!(TokenUriCall::selector()[..], keccak256("tokenURI()")[..4]);
    assert_eq!(PausedFilter::signature(), topic("Paused(address)"));
    assert_eq!(UnpausedFilter::signature(), topic("Unpaused(address)"));
}

#[test]
fn erc777_event_topics() {
    assert_eq!(
        SentFilter::signature(),
        topic("Sent(address,address,address,uint256,bytes,bytes)")
    );
    assert_eq!(
        BurnedFilter::signature(),
        topic("Burned(address,address,uint256,bytes,bytes)")
    );
    assert_eq!(
        AuthorizedOperatorFilter::signature(),
        topic("AuthorizedOperator(address,address)")
    );
}

#[test]
fn erc20_transfer_log_decodes_with_two_indexed_fields() {
    let from: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        .parse()
        .unwrap();
    let to: Address = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        .parse()
        .unwrap();
    let value = U256::from(1_000u64);
    let mut data = [0u8; 32];
    value.to_big_endian(&mut data);

    let log = RawLog {
        topics: vec![TransferFilter::signature(), H256::from(from), H256::from(to)],
        data: data.to_vec(),
    };
    let event = TransferFilter::decode_log(&log).unwrap();
    assert_eq!(event.from, from);
    assert_eq!(event.to, to);
    assert_eq!(event.value, value);
}

#[test]
fn erc721_transfer_log_decodes_with_three_indexed_fields() {
    // Unlike ERC20, the ERC721 Transfer carries the token id as a third
    // indexed topic and no data section.
    let from: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        .parse()
        .unwrap();
    let to: Address = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        .parse()
        .unwrap();
    let token_id = U256::from(7u64);
    let mut id_topic = [0u8; 32];
    token_id.to_big_endian(&mut id_topic);

    let log = RawLog {
        topics: vec![
            Erc721TransferFilter::signature(),
            H256::from(from),
            H256::from(to),
            H256::from(id_topic),
        ],
        data: Vec::new(),
    };
    let event = Erc721TransferFilter::decode_log(&log).unwrap();
    assert_eq!(event.from, from);
    assert_eq!(event.to, to);
    assert_eq!(event.token_id, token_id);
}
