//! Fixed parameters of the BN256 (alt_bn128) curve and its sextic twist.
//!
//! The values have been checked against the curve definition used by the EVM
//! precompiles (EIP-196/197) and the go-ethereum `bn256` package. They are only
//! valid for this one curve; another BN curve needs every table regenerated.

use lazy_static::lazy_static;
use num::BigInt;

use crate::{fq2::Fq2, g1::G1Affine, g2::G2Affine, Fq};

/// The BN parameter u that determines the prime.
pub const U: u64 = 4965661367192848881;

/// 6u+2 in non-adjacent form, least significant digit first.
pub const SIX_U_PLUS_2_NAF: [i8; 65] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0, 0,
    1, 1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, 0, 0, 1, 1, 0, -1, 0,
    0, 1, 0, 1, 1,
];

/// Number of bits walked by scalar multiplication, whatever the scalar.
pub const SCALAR_BITS: u64 = 256;

/// Scalar multiplication in G1 reduces its accumulator every this many bits.
pub const REDUCE_INTERVAL: u64 = 3;

/// Curve-wide constants, built once and shared by every operation.
#[derive(Debug)]
pub struct Bn256Params {
    /// Base field modulus.
    pub p: BigInt,
    /// Order of G1, G2 and GT.
    pub order: BigInt,
    /// Generator of G1.
    pub g1: G1Affine,
    /// Generator of G2.
    pub g2: G2Affine,
    /// b' = 3/ξ, the constant term of the twist y² = x³ + b'.
    pub twist_b: Fq2,
    /// ξ^((p-1)/6) where ξ = i+9.
    pub xi_to_p_minus_1_over_6: Fq2,
    /// ξ^((2p-2)/3) where ξ = i+9.
    pub xi_to_2p_minus_2_over_3: Fq2,
    /// ξ^((p-1)/2) where ξ = i+9.
    pub xi_to_p_minus_1_over_2: Fq2,
    /// ξ^((p-1)/3) where ξ = i+9.
    pub xi_to_p_minus_1_over_3: Fq2,
    /// ξ^((2p²-2)/3) where ξ = i+9 (a cubic root of unity, mod p).
    pub xi_to_2p_squared_minus_2_over_3: Fq,
    /// ξ^((p²-1)/3) where ξ = i+9.
    pub xi_to_p_squared_minus_1_over_3: Fq,
    /// ξ^((p²-1)/6) where ξ = i+9 (a cubic root of -1, mod p).
    pub xi_to_p_squared_minus_1_over_6: Fq,
}

fn decimal(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 10).expect("curve constants are valid decimal literals")
}

fn fq2(x: &str, y: &str) -> Fq2 {
    Fq2::new(decimal(x), decimal(y))
}

impl Bn256Params {
    fn new() -> Self {
        Self {
            p: decimal(
                "21888242871839275222246405745257275088696311157297823662689037894645226208583",
            ),
            order: decimal(
                "21888242871839275222246405745257275088548364400416034343698204186575808495617",
            ),
            g1: G1Affine::new(BigInt::from(1u32), BigInt::from(2u32)),
            g2: G2Affine::new(
                fq2(
                    "11559732032986387107991004021392285783925812861821192530917403151452391805634",
                    "10857046999023057135944570762232829481370756359578518086990519993285655852781",
                ),
                fq2(
                    "4082367875863433681332203403145435568316851327593401208105741076214120093531",
                    "8495653923123431417604973247489272438418190587263600148770280649306958101930",
                ),
            ),
            twist_b: fq2(
                "266929791119991161246907387137283842545076965332900288569378510910307636690",
                "19485874751759354771024239261021720505790618469301721065564631296452457478373",
            ),
            xi_to_p_minus_1_over_6: fq2(
                "16469823323077808223889137241176536799009286646108169935659301613961712198316",
                "8376118865763821496583973867626364092589906065868298776909617916018768340080",
            ),
            xi_to_2p_minus_2_over_3: fq2(
                "19937756971775647987995932169929341994314640652964949448313374472400716661030",
                "2581911344467009335267311115468803099551665605076196740867805258568234346338",
            ),
            xi_to_p_minus_1_over_2: fq2(
                "3505843767911556378687030309984248845540243509899259641013678093033130930403",
                "2821565182194536844548159561693502659359617185244120367078079554186484126554",
            ),
            xi_to_p_minus_1_over_3: fq2(
                "10307601595873709700152284273816112264069230130616436755625194854815875713954",
                "21575463638280843010398324269430826099269044274347216827212613867836435027261",
            ),
            xi_to_2p_squared_minus_2_over_3: decimal(
                "2203960485148121921418603742825762020974279258880205651966",
            ),
            xi_to_p_squared_minus_1_over_3: decimal(
                "21888242871839275220042445260109153167277707414472061641714758635765020556616",
            ),
            xi_to_p_squared_minus_1_over_6: decimal(
                "21888242871839275220042445260109153167277707414472061641714758635765020556617",
            ),
        }
    }
}

lazy_static! {
    static ref PARAMS: Bn256Params = Bn256Params::new();
}

/// The curve parameters. Initialized on first use and never mutated.
pub fn params() -> &'static Bn256Params {
    &PARAMS
}
