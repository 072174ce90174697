//! Verifier-side proof structures holding canonical field values.
//!
//! Field names follow the wire keys so a decoded value re-serializes into the
//! same nested shape it was read from.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::field::{Digest, ExtensionFieldElement, FieldElement};

/// Roots of one Merkle commitment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MerkleCap(pub Vec<Digest>);

impl MerkleCap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn digests(&self) -> &[Digest] {
        &self.0
    }
}

/// Sibling digests in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MerkleProof {
    pub siblings: Vec<Digest>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalProof {
    pub elements: Vec<FieldElement>,
    pub merkle_proof: MerkleProof,
}

impl Serialize for EvalProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.elements)?;
        tuple.serialize_element(&self.merkle_proof)?;
        tuple.end()
    }
}

/// One eval proof per committed polynomial batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriInitialTreeProof {
    pub evals_proofs: Vec<EvalProof>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriQueryStep {
    pub evals: Vec<ExtensionFieldElement>,
    pub merkle_proof: MerkleProof,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriQueryRound {
    pub initial_trees_proof: FriInitialTreeProof,
    /// One entry per folding round.
    pub steps: Vec<FriQueryStep>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PolynomialCoeffs {
    pub coeffs: Vec<ExtensionFieldElement>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriProof {
    pub commit_phase_merkle_caps: Vec<MerkleCap>,
    pub query_round_proofs: Vec<FriQueryRound>,
    pub final_poly: PolynomialCoeffs,
    /// Raw limb, never reduced.
    pub pow_witness: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OpeningSet {
    pub constants: Vec<ExtensionFieldElement>,
    pub plonk_sigmas: Vec<ExtensionFieldElement>,
    pub wires: Vec<ExtensionFieldElement>,
    pub plonk_zs: Vec<ExtensionFieldElement>,
    pub plonk_zs_next: Vec<ExtensionFieldElement>,
    pub partial_products: Vec<ExtensionFieldElement>,
    pub quotient_polys: Vec<ExtensionFieldElement>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Proof {
    pub wires_cap: MerkleCap,
    pub plonk_zs_partial_products_cap: MerkleCap,
    pub quotient_polys_cap: MerkleCap,
    pub openings: OpeningSet,
    pub opening_proof: FriProof,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProofWithPublicInputs {
    pub proof: Proof,
    pub public_inputs: Vec<FieldElement>,
}

/// Circuit-specific public data shared by every proof of that circuit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifierOnlyCircuitData {
    pub constants_sigmas_cap: MerkleCap,
    pub circuit_digest: Digest,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriChallenges {
    pub fri_alpha: ExtensionFieldElement,
    pub fri_betas: Vec<ExtensionFieldElement>,
    pub fri_pow_response: FieldElement,
    /// Leaf positions, kept as plain integers.
    pub fri_query_indices: Vec<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProofChallenges {
    pub plonk_betas: Vec<FieldElement>,
    pub plonk_gammas: Vec<FieldElement>,
    pub plonk_alphas: Vec<FieldElement>,
    pub plonk_zeta: ExtensionFieldElement,
    pub fri_challenges: FriChallenges,
}
