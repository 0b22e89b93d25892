/// Length of a big-endian base field element or public input.
pub(crate) const FIELD_ELEMENT_LENGTH: usize = 32;

/// Length of an uncompressed G1 point, `x‖y`.
pub const G1_POINT_LENGTH: usize = 2 * FIELD_ELEMENT_LENGTH;

/// Length of an uncompressed G2 point, `x.c1‖x.c0‖y.c1‖y.c0`.
pub const G2_POINT_LENGTH: usize = 4 * FIELD_ELEMENT_LENGTH;

/// Length of a proof, `A‖B‖C`.
pub const GROTH16_PROOF_LENGTH: usize = 2 * G1_POINT_LENGTH + G2_POINT_LENGTH;

/// Offset of the `gamma_abc` count in an encoded verifying key, after `alpha‖beta‖gamma‖delta`.
pub(crate) const VK_COUNT_OFFSET: usize = G1_POINT_LENGTH + 3 * G2_POINT_LENGTH;

/// Offset of the first `gamma_abc` point in an encoded verifying key.
pub(crate) const VK_GAMMA_ABC_OFFSET: usize = VK_COUNT_OFFSET + 4;
