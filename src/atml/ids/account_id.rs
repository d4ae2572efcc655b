use std::fmt;

/// Identifier printed on a client's card, unique within one bank's ledger
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        return Self(id.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        return Self::new(id);
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        return Self(id);
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
