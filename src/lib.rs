//! Ethereum Name Service (ENS) resolution over JSON-RPC.
//!
//! The entry point is [`ens::Ens`], an API namespace generic over a
//! [`Transport`]. Its main operation, [`ens::Ens::ens_lookup`], resolves a
//! human-readable domain such as `rotki.eth` to an Ethereum address, or to
//! `None` when the name is unregistered, malformed, or carries no address
//! record.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use ens_resolver::{ens, Ens, Namespace};
//!
//! let transport = ens_resolver::transports::Http::new("http://localhost:8545")?;
//! let resolver = Ens::new(transport);
//!
//! match resolver.ens_lookup("rotki.eth").await? {
//!     Some(address) => println!("{}", ens::to_checksum(&address)),
//!     None => println!("no address record"),
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]

use jsonrpc_core as rpc;

/// Re-export of the `ethabi` crate.
pub use ethabi;

pub mod api;
pub mod contract;
pub mod ens;
pub mod error;
pub mod helpers;
pub mod transports;
pub mod types;

pub use crate::api::Namespace;
pub use crate::ens::{Ens, NameResolver};
pub use crate::error::{Error, Result};

/// Assigned RequestId
pub type RequestId = usize;

/// Transport implementation
pub trait Transport: std::fmt::Debug + Clone + Unpin {
    /// The type of future this transport returns when a call is made.
    type Out: futures::Future<Output = error::Result<rpc::Value>> + Unpin;

    /// Prepare serializable RPC call for given method with parameters.
    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call);

    /// Execute prepared RPC call.
    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out;

    /// Execute remote method with given parameters.
    fn execute(&self, method: &str, params: Vec<rpc::Value>) -> Self::Out {
        let (id, request) = self.prepare(method, params);
        self.send(id, request)
    }
}

impl<X, T> Transport for X
where
    T: Transport + ?Sized,
    X: std::ops::Deref<Target = T>,
    X: std::fmt::Debug,
    X: Clone,
    X: Unpin,
{
    type Out = T::Out;

    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call) {
        (**self).prepare(method, params)
    }

    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out {
        (**self).send(id, request)
    }
}
