//! JSON shapes of the proof transcript, exactly as the prover emits them.
//!
//! Most nodes map one-to-one onto a struct. The two that do not are handled by
//! dedicated decoders: [`EvalProofRaw`] is a bare `[leaf, proof]` array and
//! [`MerkleProofRaw`] is an object whose only field is `siblings`.

mod loader;
mod siblings;
mod tuple;

use serde::{Deserialize, Serialize};

pub(crate) use loader::{parse_document, read_document};
pub use siblings::MerkleProofRaw;
pub use tuple::EvalProofRaw;

/// `{"elements": [limb, ..]}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashElements {
    pub elements: Vec<u64>,
}

impl HashElements {
    pub fn new(elements: Vec<u64>) -> Self {
        Self { elements }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRaw {
    pub evals: Vec<Vec<u64>>,
    pub merkle_proof: MerkleProofRaw,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialTreesProofRaw {
    pub evals_proofs: Vec<EvalProofRaw>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRoundRaw {
    pub initial_trees_proof: InitialTreesProofRaw,
    pub steps: Vec<StepRaw>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPolyRaw {
    pub coeffs: Vec<Vec<u64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningProofRaw {
    pub commit_phase_merkle_caps: Vec<Vec<HashElements>>,
    pub query_round_proofs: Vec<QueryRoundRaw>,
    pub final_poly: FinalPolyRaw,
    pub pow_witness: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningsRaw {
    pub constants: Vec<Vec<u64>>,
    pub plonk_sigmas: Vec<Vec<u64>>,
    pub wires: Vec<Vec<u64>>,
    pub plonk_zs: Vec<Vec<u64>>,
    pub plonk_zs_next: Vec<Vec<u64>>,
    pub partial_products: Vec<Vec<u64>>,
    pub quotient_polys: Vec<Vec<u64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRaw {
    pub wires_cap: Vec<HashElements>,
    pub plonk_zs_partial_products_cap: Vec<HashElements>,
    pub quotient_polys_cap: Vec<HashElements>,
    pub openings: OpeningsRaw,
    pub opening_proof: OpeningProofRaw,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofWithPublicInputsRaw {
    pub proof: ProofRaw,
    pub public_inputs: Vec<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierOnlyCircuitDataRaw {
    pub constants_sigmas_cap: Vec<HashElements>,
    pub circuit_digest: HashElements,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriChallengesRaw {
    pub fri_alpha: Vec<u64>,
    pub fri_betas: Vec<Vec<u64>>,
    pub fri_pow_response: u64,
    pub fri_query_indices: Vec<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofChallengesRaw {
    pub plonk_betas: Vec<u64>,
    pub plonk_gammas: Vec<u64>,
    pub plonk_alphas: Vec<u64>,
    pub plonk_zeta: Vec<u64>,
    pub fri_challenges: FriChallengesRaw,
}
