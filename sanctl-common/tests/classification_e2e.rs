//! End-to-end properties of the classification core: vendor phrasing
//! drift, code formatting drift, raising policy, and registry
//! round-trips.

use sanctl_common::enums::block::{LunType, MigrationRate, PoolRaidType, ProvisionType, RaidType};
use sanctl_common::enums::fabric::{AccessLevel, MirrorRecoveryPolicy, PortType, ShareType};
use sanctl_common::enums::tiering::TieringPolicy;
use sanctl_common::enums::{ArrayEnum, normalize};
use sanctl_common::{
    ArrayError, FaultPattern, FaultSignature, OutputCheck, RawOutput, StorageProcessor, has_error,
    raise_if_err, sp_not_available, to_hex,
};

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Literal phrasing variants behind alternation patterns, one list per
/// signature family exercised here.
const PHRASING_VARIANTS: &[(FaultSignature, &[&str])] = &[
    (
        FaultSignature::GeneralNotFound,
        &[
            "cannot find",
            "may not exist",
            "does not exist",
            "cannot be found",
        ],
    ),
    (
        FaultSignature::SgLunAlreadyExists,
        &[
            "LUN already exists in the specified storage group",
            "Requested LUN has already been added to this Storage Group",
        ],
    ),
    (
        FaultSignature::SgHostLunInUse,
        &[
            "Requested Host LUN Number already in use",
            "LUN mapping still exists",
        ],
    ),
    (
        FaultSignature::LunInStorageGroup,
        &["contained in a Storage Group", "LUN mapping still exists"],
    ),
    (
        FaultSignature::PoolNameInUse,
        &["name is already used", "name already in use"],
    ),
];

#[test]
fn test_phrasing_variants_match_in_any_case() {
    for (signature, phrases) in PHRASING_VARIANTS {
        for phrase in *phrases {
            for text in [
                phrase.to_string(),
                phrase.to_uppercase(),
                phrase.to_lowercase(),
            ] {
                let out = RawOutput::from(format!("Error: {text}. (details follow)"));
                assert!(
                    has_error(&out, &[*signature]),
                    "{signature:?} should match {text:?}"
                );
            }
        }
    }
}

#[test]
fn test_phrases_match_inside_multi_line_output() {
    let out = RawOutput::from(
        "Unable to complete the request.\nThe specified pool\nmay not exist\nCheck the name.",
    );
    assert!(has_error(&out, &[FaultSignature::GeneralNotFound]));
}

#[test]
fn test_every_code_signature_matches_its_hex_rendering() {
    for signature in FaultSignature::all() {
        if let FaultPattern::Code(code) = signature.pattern() {
            let plain = RawOutput::Coded {
                hex_codes: vec![to_hex(code)],
            };
            let suffixed = RawOutput::Coded {
                hex_codes: vec![format!("{}L", to_hex(code))],
            };
            assert!(has_error(&plain, &[*signature]), "{signature:?}");
            assert!(
                has_error(&suffixed, &[*signature]),
                "{signature:?} with format artifact"
            );
        }
    }
}

#[test]
fn test_code_signatures_match_inside_code_lists() {
    let out = RawOutput::Coded {
        hex_codes: vec![
            "0x1".to_string(),
            to_hex(0x716d8021),
            "0xdeadbeef".to_string(),
        ],
    };
    assert!(has_error(&out, &[FaultSignature::CgExists]));
    assert!(!has_error(&out, &[FaultSignature::CgDeleting]));
}

#[test]
fn test_empty_output_never_raises_by_default() {
    assert!(raise_if_err(&"", OutputCheck::new()).is_ok());
    let no_codes = RawOutput::Coded { hex_codes: vec![] };
    assert!(raise_if_err(&no_codes, OutputCheck::new()).is_ok());
}

#[test]
fn test_nonempty_output_raises_without_filter() {
    init_logging();
    let err = raise_if_err(&"Error: cannot find pool", OutputCheck::new()).unwrap_err();
    assert!(matches!(err, ArrayError::Command(_)));
}

#[test]
fn test_expected_filter_controls_raising() {
    let out = "Error: cannot find pool";

    let err = raise_if_err(
        &out,
        OutputCheck::new()
            .kind(ArrayError::PoolNotFound)
            .expected(&[FaultSignature::GeneralNotFound]),
    )
    .unwrap_err();
    assert!(matches!(err, ArrayError::PoolNotFound(_)));

    // Restricted to an unrelated family: not this call's error.
    assert!(
        raise_if_err(
            &out,
            OutputCheck::new().expected(&[FaultSignature::SgNameInUse])
        )
        .is_ok()
    );
}

#[test]
fn test_sp_not_available_length_bound() {
    let core = "Error occurred\nMessage: Service Unavailable";
    assert!(sp_not_available(&RawOutput::from(core)));

    let padded = format!("{core}\n{}", "diagnostic ".repeat(64));
    assert!(padded.chars().count() > 500);
    assert!(!sp_not_available(&RawOutput::from(padded)));
}

#[test]
fn test_tiering_reconstruction() {
    assert_eq!(
        TieringPolicy::from_tier_fields("highestAvailable", "autoTier").unwrap(),
        TieringPolicy::HighAuto
    );
    assert_eq!(
        TieringPolicy::from_tier_fields("Highest Available", "AUTO TIER").unwrap(),
        TieringPolicy::HighAuto
    );
    assert_eq!(
        TieringPolicy::from_tier_fields("highestAvailable", "noMovement").unwrap(),
        TieringPolicy::NoMovement
    );
    assert!(TieringPolicy::from_tier_fields("highestAvailable", "slowTier").is_err());
}

#[test]
fn test_sp_identity_parsing() {
    for input in ["SPA", "sp_a", "sp.a"] {
        assert_eq!(StorageProcessor::parse(input), Some(StorageProcessor::SpA));
    }
    assert_eq!(
        StorageProcessor::parse("Celerra"),
        Some(StorageProcessor::ControlStation)
    );
    assert_eq!(StorageProcessor::sp_index("SP B").unwrap(), 'b');
}

/// Round-trip every member of every enumeration through normalization
/// and reverse lookup.
fn assert_round_trip<E: ArrayEnum + std::fmt::Debug>() {
    for member in E::all() {
        let text = member.value().to_string();
        let parsed = E::parse(&normalize(&text)).unwrap_or_else(|_| {
            panic!("{}::parse failed for {text:?}", E::enum_name());
        });
        // Duplicate vendor values resolve to the first declaring
        // member, so compare values rather than identity.
        assert_eq!(parsed.value(), member.value(), "{}", E::enum_name());
    }
}

#[test]
fn test_registry_round_trips() {
    assert_round_trip::<ProvisionType>();
    assert_round_trip::<MigrationRate>();
    assert_round_trip::<LunType>();
    assert_round_trip::<RaidType>();
    assert_round_trip::<PoolRaidType>();
    assert_round_trip::<PortType>();
    assert_round_trip::<AccessLevel>();
    assert_round_trip::<ShareType>();
    assert_round_trip::<MirrorRecoveryPolicy>();
    assert_round_trip::<TieringPolicy>();
    assert_round_trip::<StorageProcessor>();
}

mod proptest_normalization {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        // Normalization is idempotent on arbitrary input.
        #[test]
        fn test_normalize_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        // Filler characters never change what a value parses to.
        #[test]
        fn test_parse_survives_filler_insertion(
            index in 0usize..6,
            fillers in prop::collection::vec(prop::sample::select(vec!['_', '.', ' ']), 0..4),
        ) {
            let member = TieringPolicy::all()[index];
            let mut text = member.value().to_string();
            for (offset, filler) in fillers.iter().enumerate() {
                let at = (offset * 3).min(text.len());
                text.insert(at, *filler);
            }
            prop_assert_eq!(TieringPolicy::parse(&text).unwrap(), member);
        }

        // Arbitrary text never panics the matcher, whatever the
        // signature set.
        #[test]
        fn test_matcher_never_panics(s in ".*") {
            let out = RawOutput::from(s.as_str());
            let _ = has_error(&out, &[]);
            let _ = sp_not_available(&out);
        }
    }
}
