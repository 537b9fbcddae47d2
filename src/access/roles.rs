// src/access/roles.rs
//! The role contracts all follow the same add/renounce pattern; they can share
//! a module because none of the generated type names overlap.

use ethers::contract::abigen;

abigen!(MinterRole, r#"[
    function isMinter(address account) external view returns (bool)
    function addMinter(address account) external
    function renounceMinter() external
    event MinterAdded(address indexed account)
    event MinterRemoved(address indexed account)
]"#);

abigen!(PauserRole, r#"[
    function isPauser(address account) external view returns (bool)
    function addPauser(address account) external
    function renouncePauser() external
    event PauserAdded(address indexed account)
    event PauserRemoved(address indexed account)
]"#);

abigen!(CapperRole, r#"[
    function isCapper(address account) external view returns (bool)
    function addCapper(address account) external
    function renounceCapper() external
    event CapperAdded(address indexed account)
    event CapperRemoved(address indexed account)
]"#);

abigen!(SignerRole, r#"[
    function isSigner(address account) external view returns (bool)
    function addSigner(address account) external
    function renounceSigner() external
    event SignerAdded(address indexed account)
    event SignerRemoved(address indexed account)
]"#);

