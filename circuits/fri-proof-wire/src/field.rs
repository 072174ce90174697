//! Goldilocks values rebuilt from native 64-bit limbs.
//!
//! A limb sequence `(l_0, .., l_{k-1})` encodes the mixed-radix integer
//! `l_0 + l_1 * p + .. + l_{k-1} * p^(k-1)` with `p = 2^64 - 2^32 + 1`. The
//! result is kept as an arbitrary-precision integer and is not reduced mod `p`;
//! limbs above `p` are accepted as-is. Use [`FieldElement::reduce`] when a
//! strictly canonical value is required.

use core::fmt;

use num_bigint::BigUint;
use num_traits::One;
use p3_field::extension::BinomialExtensionField;
use p3_field::{BasedVectorSpace, PrimeCharacteristicRing};
use p3_goldilocks::Goldilocks;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// `p = 2^64 - 2^32 + 1`.
pub const GOLDILOCKS_MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

/// Degree of the extension used for openings, FRI evaluations and challenges.
pub const EXTENSION_DEGREE: usize = 2;

pub type GoldilocksExt2 = BinomialExtensionField<Goldilocks, EXTENSION_DEGREE>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("digest limb sequence is empty")]
    EmptyLimbs,
    #[error("extension element has {actual} coordinates, expected {expected}")]
    ExtensionDegree { expected: usize, actual: usize },
}

fn modulus() -> BigUint {
    BigUint::from(GOLDILOCKS_MODULUS)
}

/// Integer representative of a class mod `p`, stored at arbitrary precision.
///
/// Equality, ordering and hashing compare the reconstructed integer, not its
/// class: `1` and `p + 1` are different values. Compare `reduce()` results to
/// test congruence mod `p`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// Rebuilds `sum(l_i * p^i)`. The limbs are digits in base `p`, not
    /// base `2^64`: `(a, b)` is `a + b * p`.
    pub fn from_limbs(limbs: &[u64]) -> Result<Self, FieldError> {
        let (first, rest) = limbs.split_first().ok_or(FieldError::EmptyLimbs)?;
        let p = modulus();
        let mut value = BigUint::from(*first);
        let mut weight = BigUint::one();
        for limb in rest {
            weight *= &p;
            value += &weight * *limb;
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_value(self) -> BigUint {
        self.0
    }

    /// True when the stored integer is already below `p`.
    pub fn is_canonical(&self) -> bool {
        self.0 < modulus()
    }

    pub fn reduce(&self) -> Self {
        Self(&self.0 % modulus())
    }

    pub fn to_goldilocks(&self) -> Goldilocks {
        // A reduced value has at most one 64-bit digit; zero has none.
        let reduced = &self.0 % modulus();
        Goldilocks::from_u64(reduced.iter_u64_digits().next().unwrap_or(0))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Decimal string: values from multi-limb digests do not fit a JSON number.
impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

/// Element of the degree-2 extension, one [`FieldElement`] per coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtensionFieldElement([FieldElement; EXTENSION_DEGREE]);

impl ExtensionFieldElement {
    pub fn new(coeffs: [FieldElement; EXTENSION_DEGREE]) -> Self {
        Self(coeffs)
    }

    /// Reconstructs every coordinate from its own limb group.
    pub fn from_limb_groups<L: AsRef<[u64]>>(groups: &[L]) -> Result<Self, FieldError> {
        if groups.len() != EXTENSION_DEGREE {
            return Err(FieldError::ExtensionDegree {
                expected: EXTENSION_DEGREE,
                actual: groups.len(),
            });
        }
        let coeffs = groups
            .iter()
            .map(|group| FieldElement::from_limbs(group.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vec(coeffs)
    }

    /// One limb per coordinate, the shape used by openings and FRI values.
    pub fn from_coeffs(coeffs: &[u64]) -> Result<Self, FieldError> {
        if coeffs.len() != EXTENSION_DEGREE {
            return Err(FieldError::ExtensionDegree {
                expected: EXTENSION_DEGREE,
                actual: coeffs.len(),
            });
        }
        Self::from_vec(coeffs.iter().copied().map(FieldElement::from_u64).collect())
    }

    fn from_vec(coeffs: Vec<FieldElement>) -> Result<Self, FieldError> {
        let actual = coeffs.len();
        let coeffs: [FieldElement; EXTENSION_DEGREE] =
            coeffs.try_into().map_err(|_| FieldError::ExtensionDegree {
                expected: EXTENSION_DEGREE,
                actual,
            })?;
        Ok(Self(coeffs))
    }

    pub fn coeffs(&self) -> &[FieldElement; EXTENSION_DEGREE] {
        &self.0
    }

    pub fn is_canonical(&self) -> bool {
        self.0.iter().all(FieldElement::is_canonical)
    }

    pub fn reduce(&self) -> Self {
        Self(self.0.clone().map(|c| c.reduce()))
    }

    pub fn to_goldilocks_ext(&self) -> Result<GoldilocksExt2, FieldError> {
        let coeffs = self.0.clone().map(|c| c.to_goldilocks());
        GoldilocksExt2::from_basis_coefficients_slice(&coeffs).ok_or(
            FieldError::ExtensionDegree {
                expected: EXTENSION_DEGREE,
                actual: coeffs.len(),
            },
        )
    }
}

/// Hash output rebuilt from its `elements` limbs into a single integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Digest(FieldElement);

impl Digest {
    pub fn from_limbs(limbs: &[u64]) -> Result<Self, FieldError> {
        FieldElement::from_limbs(limbs).map(Self)
    }

    pub fn element(&self) -> &FieldElement {
        &self.0
    }

    pub fn value(&self) -> &BigUint {
        self.0.value()
    }
}

impl From<FieldElement> for Digest {
    fn from(value: FieldElement) -> Self {
        Self(value)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
