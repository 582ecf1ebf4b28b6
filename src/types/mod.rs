//! Wire types.

mod block_number;
mod bytes;
mod call_request;

pub use self::block_number::BlockNumber;
pub use self::bytes::Bytes;
pub use self::call_request::CallRequest;

pub use ethereum_types::{H160, H256, U256, U64};

/// Address
pub type Address = H160;
