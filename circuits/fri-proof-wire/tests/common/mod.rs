#![allow(dead_code)]

use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;

pub fn digest(limbs: &[u64]) -> Value {
    json!({ "elements": limbs })
}

pub fn siblings(count: u64, base: u64) -> Value {
    let list: Vec<Value> = (0..count).map(|i| digest(&[base + i])).collect();
    json!({ "siblings": list })
}

pub fn ext_array(count: u64, base: u64) -> Value {
    let list: Vec<Value> = (0..count).map(|i| json!([base + i, base + i + 1])).collect();
    Value::Array(list)
}

/// Shape of a synthetic proof document.
#[derive(Clone, Debug)]
pub struct ProofShape {
    pub cap_len: u64,
    pub commit_phase_caps: u64,
    pub query_rounds: u64,
    pub eval_proofs: u64,
    pub steps: u64,
    pub siblings: u64,
    pub final_poly_coeffs: u64,
    pub public_inputs: u64,
}

impl Default for ProofShape {
    fn default() -> Self {
        Self {
            cap_len: 4,
            commit_phase_caps: 2,
            query_rounds: 3,
            eval_proofs: 4,
            steps: 2,
            siblings: 5,
            final_poly_coeffs: 8,
            public_inputs: 3,
        }
    }
}

fn cap(len: u64, base: u64) -> Value {
    Value::Array((0..len).map(|i| digest(&[base + i])).collect())
}

fn query_round(shape: &ProofShape, round: u64) -> Value {
    let base = 10_000 * (round + 1);
    let evals_proofs: Vec<Value> = (0..shape.eval_proofs)
        .map(|i| json!([[base + i, base + i + 1, base + i + 2], siblings(shape.siblings, base + 100 * i)]))
        .collect();
    let steps: Vec<Value> = (0..shape.steps)
        .map(|i| {
            json!({
                "evals": ext_array(4, base + 1_000 * i),
                "merkle_proof": siblings(shape.siblings.saturating_sub(i + 1), base + 5_000 + i),
            })
        })
        .collect();
    json!({
        "initial_trees_proof": { "evals_proofs": evals_proofs },
        "steps": steps,
    })
}

pub fn proof_document(shape: &ProofShape) -> Value {
    let commit_phase: Vec<Value> = (0..shape.commit_phase_caps)
        .map(|i| cap(shape.cap_len, 500 + 10 * i))
        .collect();
    let rounds: Vec<Value> = (0..shape.query_rounds).map(|r| query_round(shape, r)).collect();
    let public_inputs: Vec<u64> = (0..shape.public_inputs).map(|i| 1 + i).collect();
    json!({
        "proof": {
            "wires_cap": cap(shape.cap_len, 100),
            "plonk_zs_partial_products_cap": cap(shape.cap_len, 200),
            "quotient_polys_cap": cap(shape.cap_len, 300),
            "openings": {
                "constants": ext_array(2, 1),
                "plonk_sigmas": ext_array(3, 10),
                "wires": ext_array(5, 20),
                "plonk_zs": ext_array(1, 30),
                "plonk_zs_next": ext_array(1, 40),
                "partial_products": ext_array(2, 50),
                "quotient_polys": ext_array(2, 60),
            },
            "opening_proof": {
                "commit_phase_merkle_caps": commit_phase,
                "query_round_proofs": rounds,
                "final_poly": { "coeffs": ext_array(shape.final_poly_coeffs, 70) },
                "pow_witness": 42,
            },
        },
        "public_inputs": public_inputs,
    })
}

pub fn verifier_data_document() -> Value {
    json!({
        "constants_sigmas_cap": [digest(&[11]), digest(&[12, 1]), digest(&[13])],
        "circuit_digest": digest(&[1, 2, 3, 4]),
    })
}

pub fn challenges_document() -> Value {
    json!({
        "plonk_betas": [1, 2],
        "plonk_gammas": [3, 4],
        "plonk_alphas": [5, 6],
        "plonk_zeta": [7, 8],
        "fri_challenges": {
            "fri_alpha": [9, 10],
            "fri_betas": [[11, 12], [13, 14], [15, 16]],
            "fri_pow_response": 17,
            "fri_query_indices": [3, 1, 4, 1, 5],
        },
    })
}

pub fn write_document(doc: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    let bytes = serde_json::to_vec_pretty(doc).expect("serialize document");
    file.write_all(&bytes).expect("write document");
    file.flush().expect("flush document");
    file
}

/// Checks that `decoded` has the nested shape of `wire`: equal array lengths
/// at every level, digests (`{"elements": [..]}`) and limbs mapped to decimal
/// strings.
pub fn assert_same_shape(wire: &Value, decoded: &Value, path: &str) {
    match (wire, decoded) {
        (Value::Array(w), Value::Array(d)) => {
            assert_eq!(w.len(), d.len(), "array length differs at {path}");
            for (i, (w, d)) in w.iter().zip(d).enumerate() {
                assert_same_shape(w, d, &format!("{path}[{i}]"));
            }
        }
        (Value::Object(w), Value::String(_)) if w.contains_key("elements") => {}
        (Value::Object(w), Value::Object(d)) => {
            assert_eq!(
                w.keys().collect::<Vec<_>>(),
                d.keys().collect::<Vec<_>>(),
                "keys differ at {path}"
            );
            for (key, d) in d {
                assert_same_shape(&w[key], d, &format!("{path}.{key}"));
            }
        }
        (Value::Number(w), Value::String(d)) => {
            assert_eq!(&w.to_string(), d, "single-limb value changed at {path}");
        }
        (Value::Number(w), Value::Number(d)) => assert_eq!(w, d, "raw value changed at {path}"),
        (w, d) => panic!("shape mismatch at {path}: {w} vs {d}"),
    }
}
