use core::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::HashElements;

const SIBLINGS: &str = "siblings";
const FIELDS: &[&str] = &[SIBLINGS];

/// Merkle authentication path. On the wire the sibling list sits inside a
/// `{"siblings": [...]}` wrapper that is unwrapped here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleProofRaw {
    pub siblings: Vec<HashElements>,
}

impl<'de> Deserialize<'de> for MerkleProofRaw {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SiblingsVisitor;

        impl<'de> Visitor<'de> for SiblingsVisitor {
            type Value = MerkleProofRaw;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with a single `siblings` array")
            }

            // Only the object form is accepted; a bare array is a shape error.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut siblings = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key != SIBLINGS {
                        return Err(de::Error::unknown_field(&key, FIELDS));
                    }
                    if siblings.is_some() {
                        return Err(de::Error::duplicate_field(SIBLINGS));
                    }
                    siblings = Some(map.next_value::<Vec<HashElements>>()?);
                }
                let siblings = siblings.ok_or_else(|| de::Error::missing_field(SIBLINGS))?;
                Ok(MerkleProofRaw { siblings })
            }
        }

        deserializer.deserialize_map(SiblingsVisitor)
    }
}

#[derive(Serialize)]
struct SiblingsObject<'a> {
    siblings: &'a [HashElements],
}

impl Serialize for MerkleProofRaw {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SiblingsObject {
            siblings: &self.siblings,
        }
        .serialize(serializer)
    }
}
