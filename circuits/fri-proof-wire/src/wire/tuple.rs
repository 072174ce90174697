use core::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MerkleProofRaw;

/// Opened leaf plus its authentication path, encoded positionally as
/// `[leaf_elements, {"siblings": [...]}]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalProofRaw {
    pub leaf_elements: Vec<u64>,
    pub merkle_proof: MerkleProofRaw,
}

impl<'de> Deserialize<'de> for EvalProofRaw {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EvalProofVisitor;

        impl<'de> Visitor<'de> for EvalProofVisitor {
            type Value = EvalProofRaw;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 2-element array [leaf_elements, merkle_proof]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let leaf_elements: Vec<u64> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let merkle_proof: MerkleProofRaw = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(EvalProofRaw {
                    leaf_elements,
                    merkle_proof,
                })
            }
        }

        deserializer.deserialize_tuple(2, EvalProofVisitor)
    }
}

impl Serialize for EvalProofRaw {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.leaf_elements)?;
        tuple.serialize_element(&self.merkle_proof)?;
        tuple.end()
    }
}
