use pretty_assertions::assert_eq;
use remodel::{
    AccessError, Kind, Model, Value, field_kind, fields, get_field, set_field, tag, tags,
};

#[derive(Model)]
struct Server {
    #[model("hostname")]
    pub host: String,
    pub port: u16,
    #[model(",omitempty,notraverse")]
    pub labels: Vec<String>,
    #[model("-")]
    pub token: String,
    pub slot: Box<dyn Value>,
}

fn sample() -> Server {
    Server {
        host: "example.com".into(),
        port: 8080,
        labels: vec!["edge".into()],
        token: "abc".into(),
        slot: Box::new(1_u8),
    }
}

#[test]
fn fields_lists_visible_fields_in_order() {
    let server = sample();
    let names: Vec<&str> = fields(&server).iter().map(|info| info.name()).collect();
    assert_eq!(names, vec!["host", "port", "labels", "slot"]);
}

#[test]
fn tags_expose_raw_annotations() {
    let server = sample();
    assert_eq!(tag(&server, "host"), Ok("hostname"));
    assert_eq!(tag(&server, "port"), Ok(""));
    assert_eq!(
        tag(&server, "token"),
        Err(AccessError::UnknownField {
            field: "token".into()
        })
    );

    let all = tags(&server);
    assert_eq!(all.get("labels"), Some(&",omitempty,notraverse"));
    assert_eq!(all.len(), 4);
}

#[test]
fn field_kind_reports_the_current_shape() {
    let server = sample();
    assert_eq!(field_kind(&server, "host"), Ok(Kind::Scalar));
    assert_eq!(field_kind(&server, "labels"), Ok(Kind::Seq));
    assert_eq!(field_kind(&server, "slot"), Ok(Kind::Dynamic));
    assert!(field_kind(&server, "token").is_err());
}

#[test]
fn get_field_is_physical() {
    let server = sample();
    // even an omit-entirely field is readable by name
    assert_eq!(
        get_field(&server, "token").unwrap().downcast_ref::<String>(),
        Some(&"abc".to_string())
    );
    assert!(get_field(&server, "nope").is_err());
}

#[test]
fn set_field_checks_kind_and_type() {
    let mut server = sample();
    set_field(&mut server, "port", Box::new(9090_u16)).unwrap();
    assert_eq!(server.port, 9090);

    let err = set_field(&mut server, "port", Box::new(9090_u32)).unwrap_err();
    assert!(matches!(err, AccessError::TypeMismatch { .. }));
    assert_eq!(server.port, 9090);

    let err = set_field(&mut server, "port", Box::new(vec![1_u16])).unwrap_err();
    assert!(matches!(err, AccessError::KindMismatch { .. }));

    let err = set_field(&mut server, "gone", Box::new(1_u16)).unwrap_err();
    assert!(matches!(err, AccessError::UnknownField { .. }));
}

#[test]
fn dynamic_fields_accept_any_payload() {
    let mut server = sample();
    set_field(&mut server, "slot", Box::new("anything")).unwrap();
    assert_eq!(server.slot.downcast_ref::<&'static str>(), Some(&"anything"));
}
