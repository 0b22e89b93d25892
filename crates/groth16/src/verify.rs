use bn256_pairing::{
    miller_affine, pair_check_p4_precomputed, CurvePoint, Fq12, G1Affine, G2Affine,
};
use num::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::Groth16Error;

/// A verifying key with `miller(β, α)` computed ahead of time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    pub miller_alpha_beta: Fq12,
    pub gamma: G2Affine,
    pub delta: G2Affine,
    /// One point per public input, plus the constant term first.
    pub gamma_abc: Vec<G1Affine>,
}

/// A verifying key as emitted by a setup, before the `α, β` Miller loop is folded in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVerifyingKey {
    pub alpha: G1Affine,
    pub beta: G2Affine,
    pub gamma: G2Affine,
    pub delta: G2Affine,
    pub gamma_abc: Vec<G1Affine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl VerifyingKey {
    pub fn new(
        alpha: &G1Affine,
        beta: &G2Affine,
        gamma: G2Affine,
        delta: G2Affine,
        gamma_abc: Vec<G1Affine>,
    ) -> Self {
        Self { miller_alpha_beta: miller_affine(alpha, beta), gamma, delta, gamma_abc }
    }

    pub fn num_public_inputs(&self) -> usize {
        self.gamma_abc.len().saturating_sub(1)
    }
}

impl RawVerifyingKey {
    pub fn prepare(&self) -> VerifyingKey {
        VerifyingKey::new(
            &self.alpha,
            &self.beta,
            self.gamma.clone(),
            self.delta.clone(),
            self.gamma_abc.clone(),
        )
    }
}

// Combine the public inputs with the corresponding elements of the verifying key:
// gamma_abc[0] + Σ inputs[i]·gamma_abc[i + 1].
pub(crate) fn prepare_inputs(
    vk: &VerifyingKey,
    public_inputs: &[BigInt],
) -> Result<G1Affine, Groth16Error> {
    if public_inputs.len() + 1 != vk.gamma_abc.len() {
        return Err(Groth16Error::PrepareInputsFailed);
    }

    Ok(public_inputs
        .iter()
        .zip(vk.gamma_abc.iter().skip(1))
        .fold(CurvePoint::from_affine(&vk.gamma_abc[0]), |acc, (input, b)| {
            acc.add(&CurvePoint::from_affine(b).mul(input))
        })
        .to_affine())
}

/// Checks `e(-A, B) · e(α, β) · e(vk_x, γ) · e(C, δ) = 1`.
///
/// Returns `Ok(false)` for a proof that does not verify; errors are reserved for malformed
/// calls such as a wrong number of public inputs.
pub fn verify_groth16(
    vk: &VerifyingKey,
    proof: &Proof,
    public_inputs: &[BigInt],
) -> Result<bool, Groth16Error> {
    debug!(inputs = public_inputs.len(), expected = vk.num_public_inputs(), "groth16 verify");
    let prepared_inputs =
        debug_span!("prepare inputs").in_scope(|| prepare_inputs(vk, public_inputs))?;

    let neg_a = proof.a.neg();
    let valid = debug_span!("pairing check").in_scope(|| {
        pair_check_p4_precomputed(
            &neg_a,
            &proof.b,
            &vk.miller_alpha_beta,
            &prepared_inputs,
            &vk.gamma,
            &proof.c,
            &vk.delta,
        )
    })?;

    debug!(valid, "groth16 verdict");
    Ok(valid)
}
