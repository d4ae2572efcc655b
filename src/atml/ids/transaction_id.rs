use std::fmt;

/// Sequence number a terminal assigns to each completed money operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn next(self) -> Self {
        return Self(self.0 + 1);
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_counts_past_u32() {
        let id = TransactionId(u32::MAX as u64);

        assert_eq!(id.next(), TransactionId(u32::MAX as u64 + 1));
        assert_eq!(TransactionId::default().next(), TransactionId(1));
    }
}
