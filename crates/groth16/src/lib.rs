//! Verification of Groth16 proofs over the BN256 pairing.
//!
//! [`verify_groth16`] works on decoded keys, proofs and inputs; [`Groth16Verifier`] takes the
//! uncompressed byte encodings handled by [`converter`].

mod constants;
pub mod converter;
mod error;
mod verify;

pub use constants::{G1_POINT_LENGTH, G2_POINT_LENGTH, GROTH16_PROOF_LENGTH};
pub use error::Groth16Error;
pub use verify::{verify_groth16, Proof, RawVerifyingKey, VerifyingKey};

use converter::{
    load_proof_from_bytes, load_public_inputs_from_bytes, load_verifying_key_from_bytes,
};

pub struct Groth16Verifier;

impl Groth16Verifier {
    /// Verifies a Groth16 proof from its byte encodings.
    ///
    /// # Arguments
    ///
    /// * `proof` - The proof bytes, `A‖B‖C`.
    /// * `public_inputs` - The public inputs as 32-byte big-endian words.
    /// * `groth16_vk` - The verifying key bytes.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the proof verifies, `Err(Groth16Error::ProofVerificationFailed)` if it does not,
    /// and another error if any of the inputs fails to decode.
    pub fn verify(
        proof: &[u8],
        public_inputs: &[u8],
        groth16_vk: &[u8],
    ) -> Result<(), Groth16Error> {
        let proof = load_proof_from_bytes(proof)?;
        let vk = load_verifying_key_from_bytes(groth16_vk)?;
        let public_inputs = load_public_inputs_from_bytes(public_inputs)?;

        if verify_groth16(&vk, &proof, &public_inputs)? {
            Ok(())
        } else {
            Err(Groth16Error::ProofVerificationFailed)
        }
    }
}
