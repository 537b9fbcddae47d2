// src/crowdsale/pausable.rs
//! Crowdsale whose purchases can be halted by a `PauserRole` account.

use ethers::contract::abigen;

abigen!(PausableCrowdsale, r#"[
    function token() external view returns (address)
    function wallet() external view returns (address)
    function rate() external view returns (uint256)
    function weiRaised() external view returns (uint256)
    function buyTokens(address beneficiary) external payable
    function paused() external view returns (bool)
    function pause() external
    function unpause() external
    function isPauser(address account) external view returns (bool)
    function addPauser(address account) external
    function renouncePauser() external
    event TokensPurchased(address indexed purchaser, address indexed beneficiary, uint256 value, uint256 amount)
    event Paused(address account)
    event Unpaused(address account)
    event PauserAdded(address indexed account)
    event PauserRemoved(address indexed account)
]"#);
