use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::DecodeConfig;
use crate::error::ProofDecodeError;
use crate::proof::{ProofChallenges, ProofWithPublicInputs, VerifierOnlyCircuitData};
use crate::transform::Transformer;
use crate::wire::{self, ProofChallengesRaw, ProofWithPublicInputsRaw, VerifierOnlyCircuitDataRaw};

/// Reads proof documents and canonicalises them under one [`DecodeConfig`].
///
/// Holds no mutable state, so one decoder can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct ProofDecoder {
    config: DecodeConfig,
}

impl ProofDecoder {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    fn transformer(&self) -> Transformer {
        Transformer::new(self.config.canonical_mode)
    }

    fn report_reductions(transformer: &Transformer, document: &'static str) {
        let reduced = transformer.reduced_count();
        if reduced > 0 {
            tracing::warn!(document, reduced, "reduced non-canonical values");
        }
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ProofDecodeError> {
        let bytes = wire::read_document(path, self.config.max_document_bytes)?;
        wire::parse_document(&bytes)
    }

    pub fn proof_with_public_inputs(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ProofWithPublicInputs, ProofDecodeError> {
        let raw: ProofWithPublicInputsRaw = self.load(path.as_ref())?;
        self.finish_proof(&raw)
    }

    pub fn proof_with_public_inputs_from_slice(
        &self,
        bytes: &[u8],
    ) -> Result<ProofWithPublicInputs, ProofDecodeError> {
        let raw: ProofWithPublicInputsRaw = wire::parse_document(bytes)?;
        self.finish_proof(&raw)
    }

    pub fn proof_with_public_inputs_from_str(
        &self,
        json: &str,
    ) -> Result<ProofWithPublicInputs, ProofDecodeError> {
        self.proof_with_public_inputs_from_slice(json.as_bytes())
    }

    fn finish_proof(
        &self,
        raw: &ProofWithPublicInputsRaw,
    ) -> Result<ProofWithPublicInputs, ProofDecodeError> {
        let transformer = self.transformer();
        let decoded = transformer.proof_with_public_inputs(raw)?;
        Self::report_reductions(&transformer, "proof_with_public_inputs");
        let fri = &decoded.proof.opening_proof;
        tracing::debug!(
            commit_phase_caps = fri.commit_phase_merkle_caps.len(),
            query_rounds = fri.query_round_proofs.len(),
            final_poly_coeffs = fri.final_poly.coeffs.len(),
            public_inputs = decoded.public_inputs.len(),
            "decoded proof with public inputs"
        );
        Ok(decoded)
    }

    pub fn verifier_only_circuit_data(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<VerifierOnlyCircuitData, ProofDecodeError> {
        let raw: VerifierOnlyCircuitDataRaw = self.load(path.as_ref())?;
        self.finish_verifier_data(&raw)
    }

    pub fn verifier_only_circuit_data_from_slice(
        &self,
        bytes: &[u8],
    ) -> Result<VerifierOnlyCircuitData, ProofDecodeError> {
        let raw: VerifierOnlyCircuitDataRaw = wire::parse_document(bytes)?;
        self.finish_verifier_data(&raw)
    }

    pub fn verifier_only_circuit_data_from_str(
        &self,
        json: &str,
    ) -> Result<VerifierOnlyCircuitData, ProofDecodeError> {
        self.verifier_only_circuit_data_from_slice(json.as_bytes())
    }

    fn finish_verifier_data(
        &self,
        raw: &VerifierOnlyCircuitDataRaw,
    ) -> Result<VerifierOnlyCircuitData, ProofDecodeError> {
        let transformer = self.transformer();
        let decoded = transformer.verifier_only_circuit_data(raw)?;
        Self::report_reductions(&transformer, "verifier_only_circuit_data");
        tracing::debug!(
            cap_len = decoded.constants_sigmas_cap.len(),
            "decoded verifier-only circuit data"
        );
        Ok(decoded)
    }

    pub fn proof_challenges(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ProofChallenges, ProofDecodeError> {
        let raw: ProofChallengesRaw = self.load(path.as_ref())?;
        self.finish_challenges(&raw)
    }

    pub fn proof_challenges_from_slice(
        &self,
        bytes: &[u8],
    ) -> Result<ProofChallenges, ProofDecodeError> {
        let raw: ProofChallengesRaw = wire::parse_document(bytes)?;
        self.finish_challenges(&raw)
    }

    pub fn proof_challenges_from_str(&self, json: &str) -> Result<ProofChallenges, ProofDecodeError> {
        self.proof_challenges_from_slice(json.as_bytes())
    }

    fn finish_challenges(
        &self,
        raw: &ProofChallengesRaw,
    ) -> Result<ProofChallenges, ProofDecodeError> {
        let transformer = self.transformer();
        let decoded = transformer.proof_challenges(raw)?;
        Self::report_reductions(&transformer, "proof_challenges");
        tracing::debug!(
            fri_betas = decoded.fri_challenges.fri_betas.len(),
            query_indices = decoded.fri_challenges.fri_query_indices.len(),
            "decoded proof challenges"
        );
        Ok(decoded)
    }
}

pub fn decode_proof_with_public_inputs(
    path: impl AsRef<Path>,
) -> Result<ProofWithPublicInputs, ProofDecodeError> {
    ProofDecoder::default().proof_with_public_inputs(path)
}

pub fn decode_verifier_only_circuit_data(
    path: impl AsRef<Path>,
) -> Result<VerifierOnlyCircuitData, ProofDecodeError> {
    ProofDecoder::default().verifier_only_circuit_data(path)
}

pub fn decode_proof_challenges(path: impl AsRef<Path>) -> Result<ProofChallenges, ProofDecodeError> {
    ProofDecoder::default().proof_challenges(path)
}
