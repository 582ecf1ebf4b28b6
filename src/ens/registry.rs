//! ENS Registry contract interface.

use crate::{
    api::Eth,
    contract::{Contract, Options},
    ens::NameHash,
    types::Address,
    Transport,
};

type ContractError = crate::contract::Error;

const ENS_REGISTRY_ADDRESS: &str = "00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

/// The ENS registry is the core contract that lies at the heart of ENS resolution.
///
/// All ENS lookups start by querying the registry.
/// The registry maintains a list of domains, recording the owner, resolver, and TTL for each.
///
/// The ENS registry is specified in [EIP 137](https://eips.ethereum.org/EIPS/eip-137).
#[derive(Debug, Clone)]
pub struct Registry<T: Transport> {
    contract: Contract<T>,
}

impl<T: Transport> Registry<T> {
    /// Creates new instance of [`Registry`] pointing at the mainnet registry deployment.
    pub fn new(eth: Eth<T>) -> Self {
        let address = ENS_REGISTRY_ADDRESS.parse().expect("Parsing Address");

        // See https://github.com/ensdomains/ens-contracts for up to date contracts.
        let json = include_bytes!("ENSRegistry.json");

        let contract = Contract::from_json(eth, address, json).expect("Contract Creation");

        Self { contract }
    }

    /// Returns the owner of the name specified by node.
    pub async fn owner(&self, node: NameHash) -> Result<Address, ContractError> {
        let options = Options::default();

        self.contract.query("owner", node, None, options, None).await
    }

    /// Returns the address of the resolver responsible for the name specified by node.
    ///
    /// The zero address means no resolver is set, i.e. the name is not registered.
    pub async fn resolver(&self, node: NameHash) -> Result<Address, ContractError> {
        let options = Options::default();

        self.contract.query("resolver", node, None, options, None).await
    }

    /// Returns the caching time-to-live of the name specified by node.
    pub async fn ttl(&self, node: NameHash) -> Result<u64, ContractError> {
        let options = Options::default();

        self.contract.query("ttl", node, None, options, None).await
    }

    /// Returns true if node exists in this ENS registry.
    ///
    /// This will return false for records that are in the legacy ENS registry but
    /// have not yet been migrated to the new one.
    pub async fn check_record_existence(&self, node: NameHash) -> Result<bool, ContractError> {
        let options = Options::default();

        self.contract.query("recordExists", node, None, options, None).await
    }
}
