//! `Eth` namespace

use crate::{
    api::Namespace,
    helpers::{self, CallFuture},
    types::{BlockNumber, Bytes, CallRequest},
    Transport,
};

/// `Eth` namespace
#[derive(Debug, Clone)]
pub struct Eth<T> {
    transport: T,
}

impl<T: Transport> Namespace<T> for Eth<T> {
    fn new(transport: T) -> Self
    where
        Self: Sized,
    {
        Eth { transport }
    }

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Eth<T> {
    /// Call a constant method of a contract without changing the state of the blockchain.
    pub fn call(&self, req: CallRequest, block: Option<BlockNumber>) -> CallFuture<Bytes, T::Out> {
        let req = helpers::serialize(&req);
        let block = helpers::serialize(&block.unwrap_or(BlockNumber::Latest));

        CallFuture::new(self.transport.execute("eth_call", vec![req, block]))
    }
}

#[cfg(test)]
mod tests {
    use super::Eth;
    use crate::{
        api::Namespace,
        transports::test::TestTransport,
        types::{Address, Bytes, CallRequest},
    };

    #[test]
    fn call() {
        // given
        let mut transport = TestTransport::default();
        transport.set_response(crate::rpc::Value::String("0x010203".into()));

        let result = {
            let eth = Eth::new(&transport);

            // when
            eth.call(
                CallRequest {
                    to: Address::from_low_u64_be(5),
                    data: Some(Bytes(vec![0x06, 0xfd, 0xde, 0x03])),
                    ..Default::default()
                },
                None,
            )
        };

        // then
        transport.assert_request(
            "eth_call",
            &[
                r#"{"data":"0x06fdde03","to":"0x0000000000000000000000000000000000000005"}"#.into(),
                r#""latest""#.into(),
            ],
        );
        transport.assert_no_more_requests();
        let result = futures::executor::block_on(result);
        assert_eq!(result, Ok(Bytes(vec![0x01, 0x02, 0x03])));
    }
}
