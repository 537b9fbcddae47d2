// src/token/erc20_pausable.rs
//! ERC20 whose transfers can be halted by a `PauserRole` account.

use ethers::contract::abigen;

abigen!(ERC20Pausable, r#"[
    function totalSupply() external view returns (uint256)
    function balanceOf(address owner) external view returns (uint256)
    function transfer(address to, uint256 value) external returns (bool)
    function allowance(address owner, address spender) external view returns (uint256)
    function approve(address spender, uint256 value) external returns (bool)
    function transferFrom(address from, address to, uint256 value) external returns (bool)
    function increaseAllowance(address spender, uint256 addedValue) external returns (bool)
    function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool)
    function paused() external view returns (bool)
    function pause() external
    function unpause() external
    function isPauser(address account) external view returns (bool)
    function addPauser(address account) external
    function renouncePauser() external
    event Transfer(address indexed from, address indexed to, uint256 value)
    event Approval(address indexed owner, address indexed spender, uint256 value)
    event Paused(address account)
    event Unpaused(address account)
    event PauserAdded(address indexed account)
    event PauserRemoved(address indexed account)
]"#);
