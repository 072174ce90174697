//! Rebuilds parsed wire structures into verifier structures.
//!
//! Every limb group goes through the field layer; outer arrays keep their
//! order. Errors carry the node path, extended one segment per level on the
//! way up, and nothing is returned half-built.

use core::cell::Cell;

use crate::config::CanonicalMode;
use crate::error::ProofDecodeError;
use crate::field::{Digest, ExtensionFieldElement, FieldElement};
use crate::proof::{
    EvalProof, FriChallenges, FriInitialTreeProof, FriProof, FriQueryRound, FriQueryStep,
    MerkleCap, MerkleProof, OpeningSet, PolynomialCoeffs, Proof, ProofChallenges,
    ProofWithPublicInputs, VerifierOnlyCircuitData,
};
use crate::wire::{
    EvalProofRaw, FriChallengesRaw, HashElements, MerkleProofRaw, OpeningProofRaw, OpeningsRaw,
    ProofChallengesRaw, ProofRaw, ProofWithPublicInputsRaw, QueryRoundRaw, StepRaw,
    VerifierOnlyCircuitDataRaw,
};

type Result<T> = core::result::Result<T, ProofDecodeError>;

/// Maps `f` over `items`, tagging a failure with its index.
fn indexed<R, T>(items: &[R], mut f: impl FnMut(&R) -> Result<T>) -> Result<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| f(item).map_err(|err| err.at_index(i)))
        .collect()
}

/// One transformer per document: it counts the values strict mode reduced.
#[derive(Debug, Default)]
pub(crate) struct Transformer {
    mode: CanonicalMode,
    reduced: Cell<usize>,
}

impl Transformer {
    pub(crate) fn new(mode: CanonicalMode) -> Self {
        Self {
            mode,
            reduced: Cell::new(0),
        }
    }

    /// Number of field or extension values reduced so far.
    pub(crate) fn reduced_count(&self) -> usize {
        self.reduced.get()
    }

    fn note_reduced(&self, reduced: bool) {
        if reduced {
            self.reduced.set(self.reduced.get() + 1);
        }
    }

    fn element(&self, limb: u64) -> FieldElement {
        let (value, reduced) = self.mode.element(FieldElement::from_u64(limb));
        if reduced {
            tracing::trace!(limb, value = %value, "reduced non-canonical field element");
        }
        self.note_reduced(reduced);
        value
    }

    fn elements(&self, limbs: &[u64]) -> Vec<FieldElement> {
        limbs.iter().map(|&limb| self.element(limb)).collect()
    }

    fn extension(&self, coeffs: &[u64]) -> Result<ExtensionFieldElement> {
        let ext = ExtensionFieldElement::from_coeffs(coeffs).map_err(ProofDecodeError::from_field)?;
        let (ext, reduced) = self.mode.extension(ext);
        if reduced {
            tracing::trace!(?coeffs, "reduced non-canonical extension element");
        }
        self.note_reduced(reduced);
        Ok(ext)
    }

    fn extensions(&self, raw: &[Vec<u64>]) -> Result<Vec<ExtensionFieldElement>> {
        indexed(raw, |coeffs| self.extension(coeffs))
    }

    pub(crate) fn digest(&self, raw: &HashElements) -> Result<Digest> {
        Digest::from_limbs(&raw.elements).map_err(ProofDecodeError::from_field)
    }

    pub(crate) fn merkle_cap(&self, raw: &[HashElements]) -> Result<MerkleCap> {
        indexed(raw, |hash| self.digest(hash)).map(MerkleCap)
    }

    fn merkle_proof(&self, raw: &MerkleProofRaw) -> Result<MerkleProof> {
        let siblings = indexed(&raw.siblings, |hash| self.digest(hash))
            .map_err(|err| err.at_field("siblings"))?;
        Ok(MerkleProof { siblings })
    }

    fn eval_proof(&self, raw: &EvalProofRaw) -> Result<EvalProof> {
        Ok(EvalProof {
            elements: self.elements(&raw.leaf_elements),
            // position 1 of the `[leaf, proof]` tuple
            merkle_proof: self
                .merkle_proof(&raw.merkle_proof)
                .map_err(|err| err.at_index(1))?,
        })
    }

    fn query_step(&self, raw: &StepRaw) -> Result<FriQueryStep> {
        Ok(FriQueryStep {
            evals: self.extensions(&raw.evals).map_err(|err| err.at_field("evals"))?,
            merkle_proof: self
                .merkle_proof(&raw.merkle_proof)
                .map_err(|err| err.at_field("merkle_proof"))?,
        })
    }

    fn query_round(&self, raw: &QueryRoundRaw) -> Result<FriQueryRound> {
        let evals_proofs = indexed(&raw.initial_trees_proof.evals_proofs, |p| self.eval_proof(p))
            .map_err(|err| err.at_field("evals_proofs").at_field("initial_trees_proof"))?;
        let steps = indexed(&raw.steps, |step| self.query_step(step))
            .map_err(|err| err.at_field("steps"))?;
        tracing::trace!(
            eval_proofs = evals_proofs.len(),
            steps = steps.len(),
            "decoded FRI query round"
        );
        Ok(FriQueryRound {
            initial_trees_proof: FriInitialTreeProof { evals_proofs },
            steps,
        })
    }

    pub(crate) fn fri_proof(&self, raw: &OpeningProofRaw) -> Result<FriProof> {
        let commit_phase_merkle_caps = indexed(&raw.commit_phase_merkle_caps, |cap| {
            self.merkle_cap(cap)
        })
        .map_err(|err| err.at_field("commit_phase_merkle_caps"))?;
        let query_round_proofs = indexed(&raw.query_round_proofs, |round| self.query_round(round))
            .map_err(|err| err.at_field("query_round_proofs"))?;
        let coeffs = self
            .extensions(&raw.final_poly.coeffs)
            .map_err(|err| err.at_field("coeffs").at_field("final_poly"))?;
        Ok(FriProof {
            commit_phase_merkle_caps,
            query_round_proofs,
            final_poly: PolynomialCoeffs { coeffs },
            pow_witness: raw.pow_witness,
        })
    }

    pub(crate) fn opening_set(&self, raw: &OpeningsRaw) -> Result<OpeningSet> {
        let field = |name: &'static str, values: &[Vec<u64>]| {
            self.extensions(values).map_err(|err| err.at_field(name))
        };
        Ok(OpeningSet {
            constants: field("constants", &raw.constants)?,
            plonk_sigmas: field("plonk_sigmas", &raw.plonk_sigmas)?,
            wires: field("wires", &raw.wires)?,
            plonk_zs: field("plonk_zs", &raw.plonk_zs)?,
            plonk_zs_next: field("plonk_zs_next", &raw.plonk_zs_next)?,
            partial_products: field("partial_products", &raw.partial_products)?,
            quotient_polys: field("quotient_polys", &raw.quotient_polys)?,
        })
    }

    pub(crate) fn proof(&self, raw: &ProofRaw) -> Result<Proof> {
        Ok(Proof {
            wires_cap: self
                .merkle_cap(&raw.wires_cap)
                .map_err(|err| err.at_field("wires_cap"))?,
            plonk_zs_partial_products_cap: self
                .merkle_cap(&raw.plonk_zs_partial_products_cap)
                .map_err(|err| err.at_field("plonk_zs_partial_products_cap"))?,
            quotient_polys_cap: self
                .merkle_cap(&raw.quotient_polys_cap)
                .map_err(|err| err.at_field("quotient_polys_cap"))?,
            openings: self
                .opening_set(&raw.openings)
                .map_err(|err| err.at_field("openings"))?,
            opening_proof: self
                .fri_proof(&raw.opening_proof)
                .map_err(|err| err.at_field("opening_proof"))?,
        })
    }

    pub(crate) fn proof_with_public_inputs(
        &self,
        raw: &ProofWithPublicInputsRaw,
    ) -> Result<ProofWithPublicInputs> {
        let proof = self.proof(&raw.proof).map_err(|err| err.at_field("proof"))?;
        Ok(ProofWithPublicInputs {
            proof,
            public_inputs: self.elements(&raw.public_inputs),
        })
    }

    pub(crate) fn verifier_only_circuit_data(
        &self,
        raw: &VerifierOnlyCircuitDataRaw,
    ) -> Result<VerifierOnlyCircuitData> {
        Ok(VerifierOnlyCircuitData {
            constants_sigmas_cap: self
                .merkle_cap(&raw.constants_sigmas_cap)
                .map_err(|err| err.at_field("constants_sigmas_cap"))?,
            circuit_digest: self
                .digest(&raw.circuit_digest)
                .map_err(|err| err.at_field("circuit_digest"))?,
        })
    }

    fn fri_challenges(&self, raw: &FriChallengesRaw) -> Result<FriChallenges> {
        Ok(FriChallenges {
            fri_alpha: self
                .extension(&raw.fri_alpha)
                .map_err(|err| err.at_field("fri_alpha"))?,
            fri_betas: self
                .extensions(&raw.fri_betas)
                .map_err(|err| err.at_field("fri_betas"))?,
            fri_pow_response: self.element(raw.fri_pow_response),
            fri_query_indices: raw.fri_query_indices.clone(),
        })
    }

    pub(crate) fn proof_challenges(&self, raw: &ProofChallengesRaw) -> Result<ProofChallenges> {
        Ok(ProofChallenges {
            plonk_betas: self.elements(&raw.plonk_betas),
            plonk_gammas: self.elements(&raw.plonk_gammas),
            plonk_alphas: self.elements(&raw.plonk_alphas),
            plonk_zeta: self
                .extension(&raw.plonk_zeta)
                .map_err(|err| err.at_field("plonk_zeta"))?,
            fri_challenges: self
                .fri_challenges(&raw.fri_challenges)
                .map_err(|err| err.at_field("fri_challenges"))?,
        })
    }
}
