use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use remodel::{
    ConvertError, Model, TransferError, add_conversion, add_no_traverse_type, copy,
    remove_conversion, remove_no_traverse_type,
};

// Each test registers its own type pair; the registries are process-wide.

#[derive(Model)]
struct PortSource {
    pub port: u16,
}

#[derive(Model, Default)]
struct PortTarget {
    pub port: String,
}

#[test]
fn conversion_takes_precedence_over_type_checks() {
    add_conversion::<u16, String>(|port| Ok(format!(":{port}")));

    let src = PortSource { port: 8080 };
    let mut dst = PortTarget::default();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.port, ":8080");

    // removal restores the plain mismatch error
    assert!(remove_conversion::<u16, String>());
    let errors = copy(&mut dst, &src).unwrap_err();
    assert!(matches!(
        errors[0],
        TransferError::TypeMismatch { field: "port", .. }
    ));
}

#[derive(Model)]
struct AgeSource {
    pub age: i64,
}

#[derive(Model, Default)]
struct AgeTarget {
    pub age: u8,
}

#[test]
fn failed_conversions_are_recorded_per_field() {
    add_conversion::<i64, u8>(|age| {
        u8::try_from(*age)
            .map_err(|_| ConvertError::new("i64", "u8", "out of range"))
    });

    let src = AgeSource { age: 300 };
    let mut dst = AgeTarget::default();
    let errors = copy(&mut dst, &src).unwrap_err();
    assert_eq!(
        errors,
        vec![TransferError::Conversion {
            field: "age",
            source: ConvertError::new("i64", "u8", "out of range"),
        }]
    );
    assert_eq!(dst.age, 0);

    let src = AgeSource { age: 42 };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.age, 42);

    assert!(remove_conversion::<i64, u8>());
}

#[derive(Model)]
struct IdSource {
    pub ids: Vec<u128>,
}

#[derive(Model, Default)]
struct IdTarget {
    pub ids: Vec<String>,
}

#[test]
fn element_conversions_rebuild_sequences() {
    add_conversion::<u128, String>(|id| Ok(format!("#{id}")));

    let src = IdSource { ids: vec![1, 2] };
    let mut dst = IdTarget::default();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.ids, vec!["#1".to_string(), "#2".to_string()]);

    // without the element conversion the pair is a plain mismatch
    assert!(remove_conversion::<u128, String>());
    let errors = copy(&mut dst, &src).unwrap_err();
    assert!(matches!(
        errors[0],
        TransferError::TypeMismatch { field: "ids", .. }
    ));
}

#[derive(Model, Default)]
struct ScoreSource {
    pub scores: BTreeMap<String, i128>,
}

#[derive(Model, Default)]
struct ScoreTarget {
    pub scores: BTreeMap<String, u32>,
}

#[test]
fn element_conversions_rebuild_maps_and_record_failures() {
    add_conversion::<i128, u32>(|score| {
        u32::try_from(*score).map_err(|_| ConvertError::new("i128", "u32", "negative"))
    });

    let mut src = ScoreSource::default();
    src.scores.insert("won".into(), 7);
    let mut dst = ScoreTarget::default();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.scores.get("won"), Some(&7));

    src.scores.insert("lost".into(), -1);
    let errors = copy(&mut dst, &src).unwrap_err();
    assert!(matches!(
        errors[0],
        TransferError::Conversion { field: "scores", .. }
    ));

    assert!(remove_conversion::<i128, u32>());
}

#[derive(Model, Default, Debug, PartialEq)]
struct Checksum {
    pub shown: u32,
    #[model("-")]
    pub cache: u32,
}

#[derive(Model, Default)]
struct Report {
    pub sum: Checksum,
}

#[test]
fn registered_types_are_copied_as_literal_units() {
    add_no_traverse_type::<Checksum>();

    let src = Report {
        sum: Checksum { shown: 1, cache: 2 },
    };
    let mut dst = Report::default();
    copy(&mut dst, &src).unwrap();
    // the omit-entirely field survives only because the type is opaque
    assert_eq!(dst.sum, Checksum { shown: 1, cache: 2 });

    assert!(remove_no_traverse_type::<Checksum>());

    let mut dst = Report::default();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.sum, Checksum { shown: 1, cache: 0 });
}
