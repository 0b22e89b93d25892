//! Uncompressed big-endian encodings of points, proofs, verifying keys and public inputs, in
//! the layout used by the EVM precompiles and gnark.

use bn256_pairing::{fq, params, Bn256Error, Fq, G1Affine, G2Affine};
use num::{bigint::Sign, BigInt};

use crate::{
    constants::{
        FIELD_ELEMENT_LENGTH, G1_POINT_LENGTH, G2_POINT_LENGTH, GROTH16_PROOF_LENGTH,
        VK_COUNT_OFFSET, VK_GAMMA_ABC_OFFSET,
    },
    error::Groth16Error,
    verify::{Proof, RawVerifyingKey, VerifyingKey},
};

fn is_zeroed(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0)
}

fn read_fq(buf: &[u8]) -> Result<Fq, Groth16Error> {
    let x = BigInt::from_bytes_be(Sign::Plus, buf);
    if x >= params().p {
        return Err(Bn256Error::CoordinateOutOfRange.into());
    }
    Ok(x)
}

fn write_fq(x: &Fq, out: &mut [u8]) {
    let (_, bytes) = fq::reduce(x).to_bytes_be();
    out[FIELD_ELEMENT_LENGTH - bytes.len()..].copy_from_slice(&bytes);
}

/// Decodes `x‖y`. All-zero bytes decode to the identity.
pub fn uncompressed_bytes_to_g1_point(buf: &[u8]) -> Result<G1Affine, Groth16Error> {
    if buf.len() != G1_POINT_LENGTH {
        return Err(Groth16Error::InvalidData);
    }
    if is_zeroed(buf) {
        return Ok(G1Affine::identity());
    }

    let (x_bytes, y_bytes) = buf.split_at(FIELD_ELEMENT_LENGTH);
    let point = G1Affine::new(read_fq(x_bytes)?, read_fq(y_bytes)?);
    point.validate()?;
    Ok(point)
}

pub fn g1_point_to_uncompressed_bytes(point: &G1Affine) -> [u8; G1_POINT_LENGTH] {
    let mut buf = [0u8; G1_POINT_LENGTH];
    let (x_bytes, y_bytes) = buf.split_at_mut(FIELD_ELEMENT_LENGTH);
    write_fq(&point.x, x_bytes);
    write_fq(&point.y, y_bytes);
    buf
}

/// Decodes `x.c1‖x.c0‖y.c1‖y.c0`. All-zero bytes decode to the identity.
pub fn uncompressed_bytes_to_g2_point(buf: &[u8]) -> Result<G2Affine, Groth16Error> {
    if buf.len() != G2_POINT_LENGTH {
        return Err(Groth16Error::InvalidData);
    }
    if is_zeroed(buf) {
        return Ok(G2Affine::identity());
    }

    let (x_bytes, y_bytes) = buf.split_at(G2_POINT_LENGTH / 2);
    let (x1_bytes, x0_bytes) = x_bytes.split_at(FIELD_ELEMENT_LENGTH);
    let (y1_bytes, y0_bytes) = y_bytes.split_at(FIELD_ELEMENT_LENGTH);

    let point = G2Affine::from_c0_c1(
        read_fq(x0_bytes)?,
        read_fq(x1_bytes)?,
        read_fq(y0_bytes)?,
        read_fq(y1_bytes)?,
    );
    point.validate()?;
    Ok(point)
}

pub fn g2_point_to_uncompressed_bytes(point: &G2Affine) -> [u8; G2_POINT_LENGTH] {
    let mut buf = [0u8; G2_POINT_LENGTH];
    let limbs = [point.x.c1(), point.x.c0(), point.y.c1(), point.y.c0()];
    for (out, limb) in buf.chunks_exact_mut(FIELD_ELEMENT_LENGTH).zip(limbs) {
        write_fq(limb, out);
    }
    buf
}

/// Load a proof from `A‖B‖C`.
pub fn load_proof_from_bytes(buf: &[u8]) -> Result<Proof, Groth16Error> {
    if buf.len() != GROTH16_PROOF_LENGTH {
        return Err(Groth16Error::InvalidData);
    }
    let (a_bytes, rest) = buf.split_at(G1_POINT_LENGTH);
    let (b_bytes, c_bytes) = rest.split_at(G2_POINT_LENGTH);
    let (a, b, c) = (
        uncompressed_bytes_to_g1_point(a_bytes)?,
        uncompressed_bytes_to_g2_point(b_bytes)?,
        uncompressed_bytes_to_g1_point(c_bytes)?,
    );

    Ok(Proof { a, b, c })
}

pub fn proof_to_bytes(proof: &Proof) -> [u8; GROTH16_PROOF_LENGTH] {
    let mut buf = [0u8; GROTH16_PROOF_LENGTH];
    let (a_bytes, rest) = buf.split_at_mut(G1_POINT_LENGTH);
    let (b_bytes, c_bytes) = rest.split_at_mut(G2_POINT_LENGTH);
    a_bytes.copy_from_slice(&g1_point_to_uncompressed_bytes(&proof.a));
    b_bytes.copy_from_slice(&g2_point_to_uncompressed_bytes(&proof.b));
    c_bytes.copy_from_slice(&g1_point_to_uncompressed_bytes(&proof.c));
    buf
}

/// Load a verifying key from `alpha‖beta‖gamma‖delta‖count‖gamma_abc`, where `count` is a
/// big-endian u32.
pub fn load_raw_verifying_key_from_bytes(buf: &[u8]) -> Result<RawVerifyingKey, Groth16Error> {
    if buf.len() < VK_GAMMA_ABC_OFFSET {
        return Err(Groth16Error::InvalidData);
    }

    let (alpha_bytes, rest) = buf.split_at(G1_POINT_LENGTH);
    let (beta_bytes, rest) = rest.split_at(G2_POINT_LENGTH);
    let (gamma_bytes, rest) = rest.split_at(G2_POINT_LENGTH);
    let delta_bytes = &rest[..G2_POINT_LENGTH];

    let alpha = uncompressed_bytes_to_g1_point(alpha_bytes)?;
    let beta = uncompressed_bytes_to_g2_point(beta_bytes)?;
    let gamma = uncompressed_bytes_to_g2_point(gamma_bytes)?;
    let delta = uncompressed_bytes_to_g2_point(delta_bytes)?;

    let mut count = [0u8; 4];
    count.copy_from_slice(&buf[VK_COUNT_OFFSET..VK_GAMMA_ABC_OFFSET]);
    let count = u32::from_be_bytes(count) as usize;

    let points = &buf[VK_GAMMA_ABC_OFFSET..];
    if count.checked_mul(G1_POINT_LENGTH) != Some(points.len()) {
        return Err(Groth16Error::InvalidData);
    }
    let gamma_abc = points
        .chunks_exact(G1_POINT_LENGTH)
        .map(uncompressed_bytes_to_g1_point)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawVerifyingKey { alpha, beta, gamma, delta, gamma_abc })
}

/// Load a verifying key and run the `α, β` Miller loop on it.
pub fn load_verifying_key_from_bytes(buf: &[u8]) -> Result<VerifyingKey, Groth16Error> {
    Ok(load_raw_verifying_key_from_bytes(buf)?.prepare())
}

pub fn raw_verifying_key_to_bytes(vk: &RawVerifyingKey) -> Result<Vec<u8>, Groth16Error> {
    let count = u32::try_from(vk.gamma_abc.len()).map_err(|_| Groth16Error::InvalidData)?;

    let mut buf = Vec::with_capacity(VK_GAMMA_ABC_OFFSET + vk.gamma_abc.len() * G1_POINT_LENGTH);
    buf.extend_from_slice(&g1_point_to_uncompressed_bytes(&vk.alpha));
    buf.extend_from_slice(&g2_point_to_uncompressed_bytes(&vk.beta));
    buf.extend_from_slice(&g2_point_to_uncompressed_bytes(&vk.gamma));
    buf.extend_from_slice(&g2_point_to_uncompressed_bytes(&vk.delta));
    buf.extend_from_slice(&count.to_be_bytes());
    for point in &vk.gamma_abc {
        buf.extend_from_slice(&g1_point_to_uncompressed_bytes(point));
    }
    Ok(buf)
}

/// Load public inputs from concatenated 32-byte big-endian words, each below the group order.
pub fn load_public_inputs_from_bytes(buf: &[u8]) -> Result<Vec<BigInt>, Groth16Error> {
    if buf.len() % FIELD_ELEMENT_LENGTH != 0 {
        return Err(Groth16Error::InvalidData);
    }

    buf.chunks_exact(FIELD_ELEMENT_LENGTH)
        .map(|word| {
            let input = BigInt::from_bytes_be(Sign::Plus, word);
            if input >= params().order {
                return Err(Groth16Error::InvalidPublicInput);
            }
            Ok(input)
        })
        .collect()
}

pub fn public_inputs_to_bytes(inputs: &[BigInt]) -> Result<Vec<u8>, Groth16Error> {
    let mut buf = vec![0u8; inputs.len() * FIELD_ELEMENT_LENGTH];
    for (out, input) in buf.chunks_exact_mut(FIELD_ELEMENT_LENGTH).zip(inputs) {
        if input.sign() == Sign::Minus || *input >= params().order {
            return Err(Groth16Error::InvalidPublicInput);
        }
        let (_, bytes) = input.to_bytes_be();
        out[FIELD_ELEMENT_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use num::One;
    use rstest::rstest;

    use super::*;

    const G1_GENERATOR_HEX: &str = concat!(
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000002",
    );

    #[test]
    fn test_g1_generator_bytes() {
        let bytes = hex::decode(G1_GENERATOR_HEX).unwrap();
        assert_eq!(uncompressed_bytes_to_g1_point(&bytes).unwrap(), G1Affine::generator());
        assert_eq!(g1_point_to_uncompressed_bytes(&G1Affine::generator()).to_vec(), bytes);
    }

    #[test]
    fn test_g2_generator_bytes() {
        let g2 = G2Affine::generator();
        let bytes = g2_point_to_uncompressed_bytes(&g2);
        // The imaginary part of x comes first.
        let mut x_c1 = [0u8; 32];
        write_fq(&g2.x.x, &mut x_c1);
        assert_eq!(bytes[..32], x_c1);
        assert_eq!(uncompressed_bytes_to_g2_point(&bytes).unwrap(), g2);
    }

    #[test]
    fn test_identity_is_all_zero() {
        assert!(uncompressed_bytes_to_g1_point(&[0u8; 64]).unwrap().is_identity());
        assert!(uncompressed_bytes_to_g2_point(&[0u8; 128]).unwrap().is_identity());
        assert_eq!(g1_point_to_uncompressed_bytes(&G1Affine::identity()), [0u8; 64]);
        assert_eq!(g2_point_to_uncompressed_bytes(&G2Affine::identity()), [0u8; 128]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::short(63)]
    #[case::long(65)]
    fn test_g1_wrong_length(#[case] len: usize) {
        let bytes = vec![0u8; len];
        assert_eq!(uncompressed_bytes_to_g1_point(&bytes), Err(Groth16Error::InvalidData));
    }

    #[test]
    fn test_g1_rejects_bad_points() {
        let mut bytes = hex::decode(G1_GENERATOR_HEX).unwrap();
        bytes[63] = 3;
        assert_eq!(
            uncompressed_bytes_to_g1_point(&bytes),
            Err(Groth16Error::GeneralError(Bn256Error::PointNotOnCurve))
        );

        let mut bytes = [0xffu8; 64];
        bytes[32..].copy_from_slice(&[0u8; 32]);
        assert_eq!(
            uncompressed_bytes_to_g1_point(&bytes),
            Err(Groth16Error::GeneralError(Bn256Error::CoordinateOutOfRange))
        );
    }

    #[test]
    fn test_g2_rejects_off_curve() {
        let mut bytes = g2_point_to_uncompressed_bytes(&G2Affine::generator());
        bytes[127] ^= 1;
        assert_eq!(
            uncompressed_bytes_to_g2_point(&bytes),
            Err(Groth16Error::GeneralError(Bn256Error::PointNotOnCurve))
        );
    }

    #[test]
    fn test_g2_rejects_point_outside_subgroup() {
        // On the twist with x = 1, but not of order r.
        let bytes = hex::decode(concat!(
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a4",
            "2869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb",
        ))
        .unwrap();
        assert_eq!(
            uncompressed_bytes_to_g2_point(&bytes),
            Err(Groth16Error::GeneralError(Bn256Error::PointNotInSubgroup))
        );
    }

    #[test]
    fn test_proof_layout() {
        let proof = Proof {
            a: G1Affine::generator(),
            b: G2Affine::generator(),
            c: G1Affine::generator().double(),
        };
        let bytes = proof_to_bytes(&proof);
        let (a, rest) = bytes.split_at(G1_POINT_LENGTH);
        let (b, c) = rest.split_at(G2_POINT_LENGTH);

        assert_eq!(a, g1_point_to_uncompressed_bytes(&proof.a));
        assert_eq!(b, g2_point_to_uncompressed_bytes(&proof.b));
        assert_eq!(c, g1_point_to_uncompressed_bytes(&proof.c));
        assert_eq!(load_proof_from_bytes(&bytes), Ok(proof));
    }

    #[test]
    fn test_public_inputs() {
        let inputs = vec![BigInt::from(35), BigInt::from(5), &params().order - 1];
        let bytes = public_inputs_to_bytes(&inputs).unwrap();
        assert_eq!(bytes.len(), 96);
        assert_eq!(bytes[31], 35);
        assert_eq!(load_public_inputs_from_bytes(&bytes).unwrap(), inputs);
    }

    #[test]
    fn test_public_inputs_rejects_out_of_range() {
        let order = params().order.clone();
        assert_eq!(public_inputs_to_bytes(&[order]), Err(Groth16Error::InvalidPublicInput));
        assert_eq!(
            public_inputs_to_bytes(&[-BigInt::one()]),
            Err(Groth16Error::InvalidPublicInput)
        );
        assert_eq!(
            load_public_inputs_from_bytes(&[0xffu8; 32]),
            Err(Groth16Error::InvalidPublicInput)
        );
        assert_eq!(load_public_inputs_from_bytes(&[0u8; 33]), Err(Groth16Error::InvalidData));
    }

    #[test]
    fn test_verifying_key_rejects_bad_count() {
        let vk = RawVerifyingKey {
            alpha: G1Affine::generator(),
            beta: G2Affine::generator(),
            gamma: G2Affine::generator(),
            delta: G2Affine::generator(),
            gamma_abc: vec![G1Affine::generator(), G1Affine::identity()],
        };
        let mut bytes = raw_verifying_key_to_bytes(&vk).unwrap();
        assert_eq!(load_raw_verifying_key_from_bytes(&bytes).unwrap(), vk);

        bytes[VK_GAMMA_ABC_OFFSET - 1] = 3;
        assert_eq!(load_raw_verifying_key_from_bytes(&bytes), Err(Groth16Error::InvalidData));
        assert_eq!(
            load_raw_verifying_key_from_bytes(&bytes[..100]),
            Err(Groth16Error::InvalidData)
        );
    }
}
