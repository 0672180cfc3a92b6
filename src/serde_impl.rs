#![cfg(feature = "serde")]
//! `serde` support: a [`RingSequence`] serializes as a plain sequence in logical order.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::sequence::RingSequence;

impl<T: Serialize> Serialize for RingSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_logical_order() {
        let mut seq: RingSequence<i32> = RingSequence::with_capacity(3).unwrap();
        seq.extend([1, 2, 3]);
        seq.poll();
        seq.enter(4);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[2,3,4]");

        let back: RingSequence<i32> = serde_json::from_str("[2,3,4]").unwrap();
        assert_eq!(back, seq);
        assert_eq!(back.capacity(), 3);
    }

    #[test]
    fn test_serde_empty() {
        let seq: RingSequence<String> = serde_json::from_str("[]").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 1);
    }
}
