use pretty_assertions::assert_eq;
use remodel::{Kind, Model, TransferError, Value, clone_record, copy};

#[derive(Model, Default, Debug, PartialEq)]
struct Address {
    pub street: String,
    pub zip: String,
}

#[derive(Model, Default, Debug, PartialEq)]
struct Person {
    pub name: String,
    pub years: u32,
    pub address: Address,
    pub aliases: Vec<String>,
}

fn sample_person() -> Person {
    Person {
        name: "Jeevanandam".into(),
        years: 30,
        address: Address {
            street: "1 Main St".into(),
            zip: "600001".into(),
        },
        aliases: vec!["jeeva".into(), "jm".into()],
    }
}

#[test]
fn copies_every_field_between_identical_types() {
    let src = sample_person();
    let mut dst = Person::default();
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn nested_records_are_rebuilt_not_merged() {
    let src = Person {
        address: Address {
            street: "1 Main St".into(),
            zip: String::new(),
        },
        ..sample_person()
    };
    let mut dst = Person::default();
    dst.address.zip = "stale".into();
    copy(&mut dst, &src).unwrap();
    // the nested record is built from a fresh zero value
    assert_eq!(dst.address.zip, "");
}

#[derive(Model, Default)]
struct SparseSource {
    #[model(",omitempty")]
    pub nickname: String,
    pub hits: u64,
}

#[derive(Model, Default)]
struct SparseTarget {
    pub nickname: String,
    pub hits: u64,
}

#[test]
fn zero_with_omitempty_keeps_destination_value() {
    let src = SparseSource {
        nickname: String::new(),
        hits: 9,
    };
    let mut dst = SparseTarget {
        nickname: "kept".into(),
        hits: 1,
    };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.nickname, "kept");
    assert_eq!(dst.hits, 9);
}

#[test]
fn zero_without_omitempty_writes_destination_zero() {
    let src = SparseTarget {
        nickname: String::new(),
        hits: 9,
    };
    let mut dst = SparseTarget {
        nickname: "stale".into(),
        hits: 1,
    };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.nickname, "");
    assert_eq!(dst.hits, 9);
}

#[test]
fn entirely_zero_source_is_rejected() {
    let src = Person::default();
    let mut dst = Person::default();
    let errors = copy(&mut dst, &src).unwrap_err();
    assert_eq!(errors, vec![TransferError::EmptySource]);
}

#[derive(Model)]
struct WideSource {
    pub label: String,
    pub extra: bool,
}

#[derive(Model, Default)]
struct NarrowTarget {
    pub label: String,
}

#[test]
fn missing_destination_field_is_recorded_and_skipped() {
    let src = WideSource {
        label: "kept".into(),
        extra: true,
    };
    let mut dst = NarrowTarget::default();
    let errors = copy(&mut dst, &src).unwrap_err();
    assert_eq!(errors, vec![TransferError::FieldNotFound { field: "extra" }]);
    assert_eq!(dst.label, "kept");
}

#[derive(Model)]
struct ShapeSource {
    pub payload: Vec<String>,
    pub count: u64,
    pub ok: String,
}

#[derive(Model, Default)]
struct ShapeTarget {
    pub payload: String,
    pub count: String,
    pub ok: String,
}

#[test]
fn mismatched_fields_accumulate_while_others_copy() {
    let src = ShapeSource {
        payload: vec!["a".into()],
        count: 5,
        ok: "fine".into(),
    };
    let mut dst = ShapeTarget::default();
    let errors = copy(&mut dst, &src).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0],
        TransferError::KindMismatch {
            field: "payload",
            from: Kind::Seq,
            to: Kind::Scalar,
        }
    );
    assert!(matches!(
        errors[1],
        TransferError::TypeMismatch { field: "count", .. }
    ));
    assert_eq!(dst.ok, "fine");
}

#[derive(Model)]
struct SlotSource {
    pub payload: u32,
}

#[derive(Model)]
struct SlotTarget {
    pub payload: Box<dyn Value>,
}

#[test]
fn dynamic_destination_accepts_any_payload() {
    let src = SlotSource { payload: 77 };
    let mut dst = SlotTarget {
        payload: Box::new(false),
    };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.payload.downcast_ref::<u32>(), Some(&77));
}

#[derive(Model, Debug, PartialEq)]
struct Blob {
    pub body: Vec<u8>,
    pub trailer: [u8; 4],
}

#[test]
fn byte_payloads_copy_wholesale() {
    let src = Blob {
        body: vec![0xde, 0xad],
        trailer: [1, 2, 3, 4],
    };
    let mut dst = Blob {
        body: Vec::new(),
        trailer: [0; 4],
    };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst, src);
}

#[derive(Model, Default, Debug, PartialEq)]
struct Wrapped {
    pub inner: Option<Address>,
    pub note: Option<String>,
}

#[test]
fn optionals_rewrap_their_pointee() {
    let src = Wrapped {
        inner: Some(Address {
            street: "2 Side St".into(),
            zip: "600002".into(),
        }),
        note: None,
    };
    let mut dst = Wrapped {
        inner: None,
        note: Some("stale".into()),
    };
    copy(&mut dst, &src).unwrap();
    assert_eq!(dst.inner, src.inner);
    // zero source without omitempty resets the destination
    assert_eq!(dst.note, None);
}

#[derive(Model, Default, Debug, PartialEq)]
struct Opaque {
    pub shown: String,
    #[model("-")]
    pub hidden: String,
}

#[derive(Model, Default, Debug, PartialEq)]
struct OpaqueHolder {
    pub meta: Opaque,
    #[model(",notraverse")]
    pub sealed: Opaque,
}

#[test]
fn no_traverse_preserves_invisible_fields() {
    let src = OpaqueHolder {
        meta: Opaque {
            shown: "a".into(),
            hidden: "dropped".into(),
        },
        sealed: Opaque {
            shown: "b".into(),
            hidden: "kept".into(),
        },
    };
    let mut dst = OpaqueHolder::default();
    copy(&mut dst, &src).unwrap();
    // traversed: only visible fields survive the rebuild
    assert_eq!(dst.meta.shown, "a");
    assert_eq!(dst.meta.hidden, "");
    // no-traverse: the record is cloned as one literal unit
    assert_eq!(dst.sealed, src.sealed);
}

#[test]
fn clone_record_builds_an_equal_record() {
    let src = sample_person();
    let cloned = clone_record(&src).unwrap();
    assert_eq!(cloned.take::<Person>().ok(), Some(sample_person()));
}

#[test]
fn clone_record_rejects_zero_source() {
    let errors = clone_record(&Person::default()).unwrap_err();
    assert_eq!(errors, vec![TransferError::EmptySource]);
}
