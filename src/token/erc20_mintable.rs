// src/token/erc20_mintable.rs
//! ERC20 with a `MinterRole`-gated `mint`.

use ethers::contract::abigen;

abigen!(ERC20Mintable, r#"[
    function totalSupply() external view returns (uint256)
    function balanceOf(address owner) external view returns (uint256)
    function transfer(address to, uint256 value) external returns (bool)
    function allowance(address owner, address spender) external view returns (uint256)
    function approve(address spender, uint256 value) external returns (bool)
    function transferFrom(address from, address to, uint256 value) external returns (bool)
    function increaseAllowance(address spender, uint256 addedValue) external returns (bool)
    function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool)
    function mint(address to, uint256 value) external returns (bool)
    function isMinter(address account) external view returns (bool)
    function addMinter(address account) external
    function renounceMinter() external
    event Transfer(address indexed from, address indexed to, uint256 value)
    event Approval(address indexed owner, address indexed spender, uint256 value)
    event MinterAdded(address indexed account)
    event MinterRemoved(address indexed account)
]"#);
