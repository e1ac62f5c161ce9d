use armature_core::stmt::{RecordRef, Type, Value};

// === Conversion accessors ===

#[test]
fn typed_accessors_return_the_inner_value() {
    assert!(Value::Bool(true).to_bool().unwrap());
    assert_eq!(Value::I64(7).to_i64().unwrap(), 7);
    assert_eq!(Value::from("x").to_string().unwrap(), "x");
    assert_eq!(Value::from("x").as_str(), Some("x"));
}

#[test]
fn mismatched_accessors_report_a_conversion_error() {
    let err = Value::I64(7).to_bool().unwrap_err();
    assert_eq!(err.to_string(), "cannot convert I64 to bool");

    let err = Value::Bool(true).to_i64().unwrap_err();
    assert_eq!(err.to_string(), "cannot convert Bool to i64");
}

#[test]
fn records_accessor() {
    let records = RecordRef::new("Partner", vec![1, 2]);
    let value = Value::from(records.clone());
    assert!(value.is_records());
    assert_eq!(value.as_records(), Some(&records));
    assert!(Value::I64(1).as_records().is_none());
}

// === Type membership ===

#[test]
fn values_know_their_type() {
    assert!(Value::I64(1).is_a(&Type::I64));
    assert!(!Value::I64(1).is_a(&Type::F64));
    assert!(Value::from("x").is_a(&Type::String));
    assert!(Value::List(vec![Value::I64(1)]).is_a(&Type::list(Type::I64)));
    assert!(!Value::List(vec![Value::I64(1)]).is_a(&Type::list(Type::String)));
    // An empty list belongs to every list type.
    assert!(Value::List(vec![]).is_a(&Type::list(Type::String)));
    // Null handling happens before type checks during conversion.
    assert!(!Value::Null.is_a(&Type::I64));
}

#[test]
fn inferred_types_match_membership() {
    let values = [
        Value::Bool(true),
        Value::I64(1),
        Value::F64(1.5),
        Value::from("x"),
        Value::Bytes(vec![1]),
        Value::List(vec![Value::I64(1)]),
    ];
    for value in values {
        let ty = value.infer_ty();
        assert!(value.is_a(&ty), "{value:?} is not a {ty:?}");
    }
}

#[test]
fn take_leaves_null_behind() {
    let mut value = Value::I64(9);
    assert_eq!(value.take(), Value::I64(9));
    assert!(value.is_null());
}

#[test]
fn option_none_maps_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3i64)), Value::I64(3));
}
