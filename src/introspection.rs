// src/introspection.rs
//! ERC165 interface detection and the ERC1820 global implementer registry
//! (deployed at a fixed address on every chain, per EIP-1820).

use ethers::contract::abigen;

abigen!(IERC165, r#"[
    function supportsInterface(bytes4 interfaceId) external view returns (bool)
]"#);

abigen!(IERC1820Registry, r#"[
    function setInterfaceImplementer(address account, bytes32 interfaceHash, address implementer) external
    function getInterfaceImplementer(address account, bytes32 interfaceHash) external view returns (address)
    function setManager(address account, address newManager) external
    function getManager(address account) external view returns (address)
    function interfaceHash(string interfaceName) external view returns (bytes32)
    function implementsERC165Interface(address account, bytes4 interfaceId) external view returns (bool)
    function implementsERC165InterfaceNoCache(address account, bytes4 interfaceId) external view returns (bool)
    function updateERC165Cache(address account, bytes4 interfaceId) external
    event InterfaceImplementerSet(address indexed account, bytes32 indexed interfaceHash, address indexed implementer)
    event ManagerChanged(address indexed account, address indexed newManager)
]"#);

abigen!(IERC1820Implementer, r#"[
    function canImplementInterfaceForAddress(bytes32 interfaceHash, address account) external view returns (bytes32)
]"#);
