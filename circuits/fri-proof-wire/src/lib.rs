//! Decoding of FRI/Plonk proof transcripts for in-circuit verification.
//!
//! A prover emits its proof, its verifier-only circuit data and (optionally)
//! the derived challenges as JSON whose numeric leaves are Goldilocks limbs.
//! This crate parses those documents, rebuilds every digest and field value
//! into a canonical arbitrary-precision integer, and returns the nested
//! structures a recursive verifier consumes as circuit inputs. It performs no
//! cryptographic checks.

pub mod config;
pub mod decoder;
pub mod error;
pub mod field;
pub mod proof;
mod transform;
pub mod wire;

pub use config::{CanonicalMode, DecodeConfig, DEFAULT_MAX_DOCUMENT_BYTES};
pub use decoder::{
    decode_proof_challenges, decode_proof_with_public_inputs, decode_verifier_only_circuit_data,
    ProofDecoder,
};
pub use error::{ErrorKind, ProofDecodeError};
pub use field::{
    Digest, ExtensionFieldElement, FieldElement, FieldError, GoldilocksExt2, EXTENSION_DEGREE,
    GOLDILOCKS_MODULUS,
};
pub use proof::{
    EvalProof, FriChallenges, FriInitialTreeProof, FriProof, FriQueryRound, FriQueryStep,
    MerkleCap, MerkleProof, OpeningSet, PolynomialCoeffs, Proof, ProofChallenges,
    ProofWithPublicInputs, VerifierOnlyCircuitData,
};
