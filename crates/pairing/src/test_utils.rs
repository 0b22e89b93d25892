use lazy_static::lazy_static;
use num::{bigint::RandBigInt, BigInt, Zero};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{params, Fq, Fq12, Fq2, Fq6};

lazy_static! {
    static ref GOLDEN: Value =
        serde_json::from_str(include_str!("../test_data/golden.json")).unwrap();
}

/// Loads the golden vector at a dotted path such as `"fq2.mul"`.
pub(crate) fn golden<T: DeserializeOwned>(path: &str) -> T {
    let value = path.split('.').fold(&*GOLDEN, |value, key| &value[key]);
    assert!(!value.is_null(), "missing golden vector {path}");
    serde_json::from_value(value.clone()).unwrap_or_else(|e| panic!("{path}: {e}"))
}

pub(crate) fn golden_scalar(path: &str) -> BigInt {
    let s: String = golden(path);
    BigInt::parse_bytes(s.as_bytes(), 10).unwrap()
}

pub(crate) fn random_scalar<R: Rng>(rng: &mut R) -> BigInt {
    rng.gen_bigint_range(&BigInt::zero(), &params().order)
}

pub(crate) fn random_fq<R: Rng>(rng: &mut R) -> Fq {
    rng.gen_bigint_range(&BigInt::zero(), &params().p)
}

pub(crate) fn random_fq2<R: Rng>(rng: &mut R) -> Fq2 {
    Fq2::new(random_fq(rng), random_fq(rng))
}

pub(crate) fn random_fq6<R: Rng>(rng: &mut R) -> Fq6 {
    Fq6::new(random_fq2(rng), random_fq2(rng), random_fq2(rng))
}

pub(crate) fn random_fq12<R: Rng>(rng: &mut R) -> Fq12 {
    Fq12::new(random_fq6(rng), random_fq6(rng))
}
