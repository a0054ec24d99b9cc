//! Tokens the parser keeps on the nodes that are identified by them

use std::fmt::{Debug, Formatter};
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// A lexical token retained on a syntax node
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    id: TokenId,
    value: String,
}

impl Token {
    /// Creates a new token
    pub fn new(id: TokenId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// The `function` keyword
    pub fn function() -> Self {
        Self::new(TokenId::TFunction, "function")
    }

    /// The `fn` keyword of arrow functions
    pub fn arrow_fn() -> Self {
        Self::new(TokenId::TFn, "fn")
    }

    /// `exit` or `die`, as written
    pub fn exit(value: impl Into<String>) -> Self {
        Self::new(TokenId::TExit, value)
    }

    /// Gets the id for this token
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Gets the source text of this token
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.id, self.value)
    }
}

/// The id of a token, rendered the way the PHP lexer names it
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenId {
    TFunction,
    TFn,
    TExit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn token_ids_use_lexer_names() {
        assert_eq!(TokenId::TFunction.to_string(), "T_FUNCTION");
        assert_eq!(TokenId::TFn.as_ref(), "T_FN");
        let exit: &'static str = TokenId::TExit.into();
        assert_eq!(exit, "T_EXIT");
    }

    #[test]
    fn die_is_an_exit_token() {
        let token = Token::exit("die");
        assert_eq!(token.id(), TokenId::TExit);
        assert_eq!(token.value(), "die");
        assert_eq!(format!("{token:?}"), "T_EXIT(\"die\")");
    }
}
