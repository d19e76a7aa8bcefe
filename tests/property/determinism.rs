//! Property-based tests for length laws and determinism guarantees

use proptest::prelude::*;
use rendstress::generation::GenerationPlan;
use rendstress::payload::{
    assemble, body_size, build, Intensity, Variant, VariantBuilder, FIXED_OVERHEAD_CHARS,
};
use rendstress::{GenerationError, GenerationRequest};

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

/// Body length follows the per-variant rule for any in-range intensity.
#[test]
fn test_body_length_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(variant_strategy(), 10i64..=400), |(variant, n)| {
            let intensity = Intensity::new(n).unwrap();
            let body = build(variant, intensity).unwrap();
            let expected = match variant.block() {
                None => (n as usize * 100).min(50_000),
                Some(block) => n as usize * block.char_len(),
            };
            prop_assert_eq!(body.chars().count(), expected);
            prop_assert_eq!(body_size(variant, intensity).bytes, body.len() as u64);
            Ok(())
        })
        .unwrap();
}

/// Same request, same bytes.
#[test]
fn test_assembly_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(variant_strategy(), 10i64..=200), |(variant, n)| {
            let intensity = Intensity::new(n).unwrap();
            let first = assemble(variant, intensity, &VariantBuilder).unwrap();
            let second = assemble(variant, intensity, &VariantBuilder).unwrap();
            prop_assert_eq!(first.assembled(), second.assembled());
            prop_assert_eq!(
                first.length(),
                first.body().chars().count() + FIXED_OVERHEAD_CHARS
            );
            Ok(())
        })
        .unwrap();
}

/// Anything outside 10..=2_500_000 is rejected, whatever the variant.
#[test]
fn test_out_of_range_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let outside = prop_oneof![i64::MIN..10i64, 2_500_001i64..i64::MAX];

    runner
        .run(&(variant_strategy(), outside), |(variant, n)| {
            let err = GenerationPlan::for_request(&GenerationRequest::new(variant, n), u64::MAX)
                .unwrap_err();
            let is_out_of_range = matches!(err, GenerationError::OutOfRange { value, .. } if value == n);
            prop_assert!(is_out_of_range);
            Ok(())
        })
        .unwrap();
}

/// The plan predicts exactly what assembly produces.
#[test]
fn test_plan_prediction_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(variant_strategy(), 10i64..=150), |(variant, n)| {
            let plan = GenerationPlan::for_request(&GenerationRequest::new(variant, n), u64::MAX)
                .unwrap();
            let result = assemble(variant, plan.intensity, &VariantBuilder).unwrap();
            prop_assert_eq!(plan.assembled.chars, result.length() as u64);
            prop_assert_eq!(plan.assembled.bytes, result.assembled().len() as u64);
            Ok(())
        })
        .unwrap();
}
