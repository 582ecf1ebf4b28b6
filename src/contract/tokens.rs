//! Contract function call parameters and output types.

use crate::contract::error::Error;
use crate::types::{Address, H256, U256};
use ethabi::Token;

/// Tokens conversion trait for function call parameters.
pub trait Tokenize {
    /// Convert to list of tokens
    fn into_tokens(self) -> Vec<Token>;
}

impl<'a> Tokenize for &'a [Token] {
    fn into_tokens(self) -> Vec<Token> {
        self.to_vec()
    }
}

impl<T: Tokenizable> Tokenize for T {
    fn into_tokens(self) -> Vec<Token> {
        vec![self.into_token()]
    }
}

impl Tokenize for () {
    fn into_tokens(self) -> Vec<Token> {
        vec![]
    }
}

macro_rules! impl_tokens {
    ($( $ty: ident : $no: tt, )+) => {
        impl<$($ty, )+> Tokenize for ($($ty,)+)
        where
            $( $ty: Tokenizable, )+
        {
            fn into_tokens(self) -> Vec<Token> {
                vec![ $( self.$no.into_token(), )+ ]
            }
        }
    }
}

impl_tokens!(A:0, B:1,);
impl_tokens!(A:0, B:1, C:2,);

/// Output type possible to deserialize from Contract ABI
pub trait Detokenize {
    /// Creates a new instance from parsed ABI tokens.
    fn from_tokens(tokens: Vec<Token>) -> Result<Self, Error>
    where
        Self: Sized;
}

impl<T: Tokenizable> Detokenize for T {
    fn from_tokens(mut tokens: Vec<Token>) -> Result<Self, Error> {
        if tokens.len() != 1 {
            return Err(Error::InvalidOutputType(format!(
                "Expected single element, got a list: {:?}",
                tokens
            )));
        }
        Self::from_token(tokens.drain(..).next().expect("At least one element in vector; qed"))
    }
}

/// Simplified output type for single value.
pub trait Tokenizable {
    /// Converts a `Token` into expected type.
    fn from_token(token: Token) -> Result<Self, Error>
    where
        Self: Sized;

    /// Converts a specified type back into token.
    fn into_token(self) -> Token;
}

impl Tokenizable for String {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::String(s) => Ok(s),
            other => Err(Error::InvalidOutputType(format!("Expected `String`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::String(self)
    }
}

impl Tokenizable for Address {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::Address(data) => Ok(data),
            other => Err(Error::InvalidOutputType(format!("Expected `Address`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Address(self)
    }
}

impl Tokenizable for H256 {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::FixedBytes(ref s) if s.len() == 32 => Ok(H256::from_slice(s.as_ref())),
            other => Err(Error::InvalidOutputType(format!("Expected `H256`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::FixedBytes(self.as_bytes().to_vec())
    }
}

impl Tokenizable for U256 {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::Int(data) | Token::Uint(data) => Ok(data),
            other => Err(Error::InvalidOutputType(format!("Expected `U256`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Uint(self)
    }
}

impl Tokenizable for u64 {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::Int(data) | Token::Uint(data) => {
                if data.bits() > 64 {
                    return Err(Error::InvalidOutputType(format!("Does not fit in a `u64`: {}", data)));
                }
                Ok(data.low_u64())
            }
            other => Err(Error::InvalidOutputType(format!("Expected `u64`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Uint(self.into())
    }
}

impl Tokenizable for bool {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::Bool(data) => Ok(data),
            other => Err(Error::InvalidOutputType(format!("Expected `bool`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Bool(self)
    }
}

impl Tokenizable for Vec<u8> {
    fn from_token(token: Token) -> Result<Self, Error> {
        match token {
            Token::Bytes(data) | Token::FixedBytes(data) => Ok(data),
            other => Err(Error::InvalidOutputType(format!("Expected `bytes`, got {:?}", other))),
        }
    }

    fn into_token(self) -> Token {
        Token::Bytes(self)
    }
}

macro_rules! impl_fixed_bytes {
    ($num: expr) => {
        impl Tokenizable for [u8; $num] {
            fn from_token(token: Token) -> Result<Self, Error> {
                match token {
                    Token::FixedBytes(bytes) => {
                        if bytes.len() != $num {
                            return Err(Error::InvalidOutputType(format!(
                                "Expected `FixedBytes({})`, got FixedBytes({})",
                                $num,
                                bytes.len()
                            )));
                        }

                        let mut arr = [0; $num];
                        arr.copy_from_slice(&bytes);
                        Ok(arr)
                    }
                    other => Err(Error::InvalidOutputType(format!(
                        "Expected `FixedBytes({})`, got {:?}",
                        $num, other
                    ))),
                }
            }

            fn into_token(self) -> Token {
                Token::FixedBytes(self.to_vec())
            }
        }
    };
}

impl_fixed_bytes!(4);
impl_fixed_bytes!(32);

#[cfg(test)]
mod tests {
    use super::{Detokenize, Tokenize};
    use crate::types::{Address, H256, U256};
    use ethabi::Token;

    #[test]
    fn should_detokenize_single_values() {
        let address = Address::from_low_u64_be(5);
        assert_eq!(Address::from_tokens(vec![Token::Address(address)]).unwrap(), address);

        assert_eq!(bool::from_tokens(vec![Token::Bool(true)]).unwrap(), true);
        assert_eq!(u64::from_tokens(vec![Token::Uint(42.into())]).unwrap(), 42);
        assert_eq!(
            U256::from_tokens(vec![Token::Uint(42.into())]).unwrap(),
            U256::from(42)
        );
    }

    #[test]
    fn should_reject_mismatched_tokens() {
        assert!(Address::from_tokens(vec![Token::Bool(false)]).is_err());
        assert!(bool::from_tokens(vec![]).is_err());
        assert!(u64::from_tokens(vec![Token::Uint(U256::MAX)]).is_err());
    }

    #[test]
    fn should_tokenize_node_and_interface_id() {
        let node = H256::zero();
        assert_eq!(node.into_tokens(), vec![Token::FixedBytes(vec![0; 32])]);

        let interface_id = [0x3b, 0x3b, 0x57, 0xde];
        assert_eq!(
            interface_id.into_tokens(),
            vec![Token::FixedBytes(vec![0x3b, 0x3b, 0x57, 0xde])]
        );
    }
}
