use bn256_pairing::Bn256Error;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Groth16Error {
    #[error("Proof verification failed")]
    ProofVerificationFailed,
    #[error("Prepare inputs failed")]
    PrepareInputsFailed,
    #[error("Public input is not below the group order")]
    InvalidPublicInput,
    #[error("Invalid data")]
    InvalidData,
    #[error("General error")]
    GeneralError(#[from] Bn256Error),
}
