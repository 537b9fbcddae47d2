// src/crowdsale/crowdsale.rs
//! Base crowdsale: a fixed rate swap of the chain's native currency for an
//! ERC20, forwarding funds to a collection wallet.

use ethers::contract::abigen;

abigen!(Crowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
]"#);
