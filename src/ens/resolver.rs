//! ENS resolver contract interface.

use crate::{
    api::Eth,
    contract::{Contract, Options},
    ens::NameHash,
    types::Address,
    Transport,
};

type ContractError = crate::contract::Error;

/// A resolver contract responsible for translating a name into the resource it points at.
///
/// Which resolver answers for a given name is recorded in the registry; most names use
/// the ENS public resolver. Only the read surface needed for address lookups is covered.
///
/// See <https://github.com/ensdomains/resolvers/blob/master/contracts/Resolver.sol> for the
/// resolver interface.
#[derive(Debug, Clone)]
pub struct Resolver<T: Transport> {
    contract: Contract<T>,
}

impl<T: Transport> Resolver<T> {
    /// Creates new instance of [`Resolver`] at the given contract address.
    pub fn new(eth: Eth<T>, resolver_addr: Address) -> Self {
        let json = include_bytes!("PublicResolver.json");

        let contract = Contract::from_json(eth, resolver_addr, json).expect("Contract Creation");

        Self { contract }
    }

    /// Returns true if this resolver supports the given interfaceId (EIP-165).
    pub async fn check_interface_support(&self, interface_id: [u8; 4]) -> Result<bool, ContractError> {
        let options = Options::default();

        self.contract
            .query("supportsInterface", interface_id, None, options, None)
            .await
    }

    /// Returns the Ethereum address associated with the provided node, or zero if none.
    pub async fn ethereum_address(&self, node: NameHash) -> Result<Address, ContractError> {
        let options = Options::default();

        self.contract.query("addr", node, None, options, None).await
    }
}
