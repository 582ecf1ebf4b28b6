//! Ethereum contract call interface.

use crate::{
    api::Eth,
    types::{Address, BlockNumber, Bytes, CallRequest, U256},
    Transport,
};

mod error;
pub mod tokens;

use self::tokens::{Detokenize, Tokenize};
pub use self::error::Error;

/// Contract call options.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Options {
    /// Fixed gas limit
    pub gas: Option<U256>,
    /// Fixed gas price
    pub gas_price: Option<U256>,
    /// Value to transfer
    pub value: Option<U256>,
}

impl Options {
    /// Create new default `Options` object with some modifications.
    pub fn with<F>(func: F) -> Options
    where
        F: FnOnce(&mut Options),
    {
        let mut options = Options::default();
        func(&mut options);
        options
    }
}

/// Ethereum contract interface (read-only).
#[derive(Debug, Clone)]
pub struct Contract<T: Transport> {
    address: Address,
    eth: Eth<T>,
    abi: ethabi::Contract,
}

impl<T: Transport> Contract<T> {
    /// Creates new contract interface given blockchain address and ABI
    pub fn new(eth: Eth<T>, address: Address, abi: ethabi::Contract) -> Self {
        Contract { address, eth, abi }
    }

    /// Creates new contract interface given blockchain address and JSON containing ABI
    pub fn from_json(eth: Eth<T>, address: Address, json: &[u8]) -> Result<Self, ethabi::Error> {
        let abi = ethabi::Contract::load(json)?;
        Ok(Self::new(eth, address, abi))
    }

    /// Returns contract address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Call a constant function
    pub async fn query<R, A, B, P>(
        &self,
        func: &str,
        params: P,
        from: A,
        options: Options,
        block: B,
    ) -> Result<R, Error>
    where
        R: Detokenize,
        A: Into<Option<Address>>,
        B: Into<Option<BlockNumber>>,
        P: Tokenize,
    {
        let function = self.abi.function(func)?;
        let call = function.encode_input(&params.into_tokens())?;

        let bytes = self
            .eth
            .call(
                CallRequest {
                    from: from.into(),
                    to: self.address,
                    gas: options.gas,
                    gas_price: options.gas_price,
                    value: options.value,
                    data: Some(Bytes(call)),
                },
                block.into(),
            )
            .await?;

        let output = function.decode_output(&bytes.0)?;
        R::from_tokens(output)
    }
}

#[cfg(test)]
mod tests {
    use super::{Contract, Options};
    use crate::{
        api::{Eth, Namespace},
        transports::test::TestTransport,
        types::{Address, BlockNumber, H256},
        Transport,
    };

    fn registry<T: Transport>(transport: &T) -> Contract<&T> {
        let eth = Eth::new(transport);
        Contract::from_json(
            eth,
            Address::from_low_u64_be(1),
            include_bytes!("../ens/ENSRegistry.json"),
        )
        .unwrap()
    }

    #[test]
    fn should_call_constant_function() {
        // given
        let mut transport = TestTransport::default();
        transport.set_response(crate::rpc::Value::String(
            "0x0000000000000000000000004976fb03c32e5b8cfe2b6ccb31c09ba78ebaba41".into(),
        ));

        let result: Address = {
            let registry = registry(&transport);

            // when
            futures::executor::block_on(registry.query(
                "resolver",
                H256::zero(),
                None,
                Options::default(),
                BlockNumber::Number(1u64.into()),
            ))
            .unwrap()
        };

        // then
        transport.assert_request("eth_call", &[
            "{\"data\":\"0x0178b8bf0000000000000000000000000000000000000000000000000000000000000000\",\"to\":\"0x0000000000000000000000000000000000000001\"}".into(),
            "\"0x1\"".into(),
        ]);
        transport.assert_no_more_requests();
        assert_eq!(
            result,
            "4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41".parse().unwrap()
        );
    }

    #[test]
    fn should_query_with_params() {
        // given
        let mut transport = TestTransport::default();
        transport.set_response(crate::rpc::Value::String(
            "0x0000000000000000000000000000000000000000000000000000000000000001".into(),
        ));

        let result: bool = {
            let registry = registry(&transport);

            // when
            futures::executor::block_on(registry.query(
                "recordExists",
                H256::zero(),
                Address::from_low_u64_be(5),
                Options::with(|options| {
                    options.gas_price = Some(10_000_000u64.into());
                }),
                None,
            ))
            .unwrap()
        };

        // then
        transport.assert_request("eth_call", &[
            "{\"data\":\"0xf79fe5380000000000000000000000000000000000000000000000000000000000000000\",\"from\":\"0x0000000000000000000000000000000000000005\",\"gasPrice\":\"0x989680\",\"to\":\"0x0000000000000000000000000000000000000001\"}".into(),
            "\"latest\"".into(),
        ]);
        transport.assert_no_more_requests();
        assert!(result);
    }
}
