//! Ethereum Name Service lookups.
//!
//! Resolution follows [EIP 137](https://eips.ethereum.org/EIPS/eip-137): the
//! name is UTS-46 normalized, hashed into a node with [`namehash`], the
//! registry is asked which resolver contract answers for that node, and the
//! resolver is asked for the address record. Every gap in that chain — an
//! unregistered name, a resolver without an address record, a string that is
//! not a name at all — resolves to `None` rather than an error; errors are
//! reserved for transport and ABI failures.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use ens_resolver::{Ens, Namespace};
//!
//! let transport = ens_resolver::transports::Http::new("http://localhost:8545")?;
//! let ens = Ens::new(transport);
//!
//! let address = ens.ens_lookup("rotki.eth").await?;
//! # Ok(())
//! # }
//! ```

pub mod known;
mod registry;
mod resolver;

pub use self::registry::Registry;
pub use self::resolver::Resolver;

use crate::{
    api::{Eth, Namespace},
    types::{Address, H256},
    Transport,
};
use futures::future::BoxFuture;
use idna::Config;

type ContractError = crate::contract::Error;
type EthError = crate::ethabi::Error;

/// Output of [`namehash`], the node identifying a name in the registry.
pub type NameHash = H256;

/// `addr(bytes32)` resolver interface id (EIP-165).
const ADDR_INTERFACE_ID: &[u8; 4] = &[0x3b, 0x3b, 0x57, 0xde];

/// Compute the Keccak-256 hash of input bytes.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    use tiny_keccak::{Hasher, Keccak};
    let mut output = [0u8; 32];
    let mut hasher = Keccak::v256();
    hasher.update(bytes);
    hasher.finalize(&mut output);
    output
}

/// Compute the EIP-137 namehash of a (normalized) domain name.
///
/// The empty name hashes to zero; every label extends the hash of its parent
/// domain, so `namehash("foo.eth")` chains through `namehash("eth")`.
pub fn namehash(name: &str) -> NameHash {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return node.into();
    }

    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&node);
        buf[32..].copy_from_slice(&label_hash);

        node = keccak256(&buf);
    }

    node.into()
}

/// Render an address in its EIP-55 checksum-cased hex form.
pub fn to_checksum(address: &Address) -> String {
    let hex = hex::encode(address.as_bytes());
    let hash = keccak256(hex.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in hex.chars().enumerate() {
        let nibble = hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 }) & 0xf;
        if nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}

/// A capability for resolving ENS names to addresses.
///
/// [`Ens`] is the JSON-RPC implementation; tests and alternative backends
/// (e.g. an indexing API) can provide their own.
pub trait NameResolver {
    /// Resolve a name to the address it points at, or `None` when the name is
    /// unregistered, malformed, or has no address record.
    fn ens_lookup<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Option<Address>, ContractError>>;
}

/// Ethereum Name Service interface.
#[derive(Clone)]
pub struct Ens<T: Transport> {
    eth: Eth<T>,
    registry: Registry<T>,
    idna: Config,
    transport: T,
}

impl<T: Transport> Namespace<T> for Ens<T> {
    fn new(transport: T) -> Self
    where
        Self: Sized,
    {
        let eth = Eth::new(transport.clone());

        let registry = Registry::new(eth.clone());

        let idna = Config::default()
            .transitional_processing(false)
            .use_std3_ascii_rules(true);

        Self {
            transport,
            eth,
            registry,
            idna,
        }
    }

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Ens<T> {
    /// Normalize a domain name for namehash processing.
    ///
    /// [Specification](https://docs.ens.domains/contract-api-reference/name-processing#normalising-names)
    fn normalize_name(&self, domain: &str) -> Result<String, ContractError> {
        self.idna
            .to_ascii(domain)
            .map_err(|_| ContractError::Abi(EthError::InvalidData))
    }

    /// Resolves an ENS name to the Ethereum address it points at.
    ///
    /// Returns `None` when the name is not registered, its resolver exposes no
    /// address record, or the input is not a well-formed name in the first
    /// place. Only transport and ABI failures surface as errors.
    pub async fn ens_lookup(&self, name: &str) -> Result<Option<Address>, ContractError> {
        let domain = match self.normalize_name(name) {
            Ok(domain) => domain,
            // Not a resolvable name at all; absence, not an error.
            Err(_) => return Ok(None),
        };
        let node = namehash(&domain);

        let resolver_addr = self.registry.resolver(node).await?;
        if resolver_addr.is_zero() {
            return Ok(None);
        }

        let resolver = Resolver::new(self.eth.clone(), resolver_addr);
        if !resolver.check_interface_support(*ADDR_INTERFACE_ID).await? {
            return Ok(None);
        }

        let address = resolver.ethereum_address(node).await?;
        if address.is_zero() {
            return Ok(None);
        }

        Ok(Some(address))
    }

    /// Returns the owner of a name.
    pub async fn owner(&self, name: &str) -> Result<Address, ContractError> {
        let domain = self.normalize_name(name)?;
        let node = namehash(&domain);

        self.registry.owner(node).await
    }

    /// Returns the address of the resolver responsible for the name specified.
    pub async fn resolver(&self, name: &str) -> Result<Address, ContractError> {
        let domain = self.normalize_name(name)?;
        let node = namehash(&domain);

        self.registry.resolver(node).await
    }

    /// Returns the caching TTL (time-to-live) of a name.
    pub async fn ttl(&self, name: &str) -> Result<u64, ContractError> {
        let domain = self.normalize_name(name)?;
        let node = namehash(&domain);

        self.registry.ttl(node).await
    }

    /// Returns true if the name exists in the ENS registry.
    pub async fn record_exists(&self, name: &str) -> Result<bool, ContractError> {
        let domain = self.normalize_name(name)?;
        let node = namehash(&domain);

        self.registry.check_record_existence(node).await
    }
}

impl<T> NameResolver for Ens<T>
where
    T: Transport + Send + Sync,
    T::Out: Send,
{
    fn ens_lookup<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Option<Address>, ContractError>> {
        Box::pin(Ens::ens_lookup(self, name))
    }
}
