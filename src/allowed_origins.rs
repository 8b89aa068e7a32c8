use crate::constants::WILDCARD;
use crate::token_list::TokenList;

/// Origins authorized to make CORS requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is accepted. The request origin is still echoed verbatim.
    Any,
    List(TokenList),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(TokenList::default())
    }
}

impl AllowedOrigins {
    /// Parses a comma-separated origin list. A `*` entry anywhere in the list
    /// accepts all origins.
    pub fn parse(value: &str) -> Self {
        Self::from_list(TokenList::parse(value))
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_list(TokenList::list(values))
    }

    pub fn any() -> Self {
        Self::Any
    }

    fn from_list(list: TokenList) -> Self {
        if list.contains(WILDCARD) {
            Self::Any
        } else {
            Self::List(list)
        }
    }

    /// `origin` must already be lower-cased.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(list) => list.contains(origin),
        }
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
