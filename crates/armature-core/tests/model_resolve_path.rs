use armature_core::models::{Field, FieldType, Registry};

/// Schema:
///   Profile   { ID, Age }
///   Partner   { ID, Name, Profile -> Profile }
///   SaleOrder { ID, Reference, Partner -> Partner }
fn registry() -> Registry {
    let mut reg = Registry::new();
    {
        let profile = reg.new_model("Profile").unwrap();
        profile.fields_mut().add(Field::integer("Age")).unwrap();
    }
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.fields_mut().add(Field::char("Name")).unwrap();
        partner
            .fields_mut()
            .add(Field::many2one("Profile", "Profile"))
            .unwrap();
    }
    {
        let order = reg.new_model("SaleOrder").unwrap();
        order.fields_mut().add(Field::char("Reference")).unwrap();
        order
            .fields_mut()
            .add(Field::many2one("Partner", "Partner"))
            .unwrap();
    }
    reg.bootstrap().unwrap();
    reg
}

// === related_model ===

#[test]
fn follows_a_chain_of_to_one_relations() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    let end = order.related_model(&reg, "Partner.Profile", false);
    assert_eq!(end.name(), "Profile");
}

#[test]
fn skip_last_returns_the_owner_of_the_final_field() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    // Owner of `Profile` is Partner, not Profile itself.
    let owner = order.related_model(&reg, "Partner.Profile", true);
    assert_eq!(owner.name(), "Partner");

    let owner = order.related_model(&reg, "Partner.Profile.Age", true);
    assert_eq!(owner.name(), "Profile");
}

#[test]
fn non_relational_field_terminates_resolution() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    // A non-relational field cannot be traversed further, whatever the
    // value of skip_last.
    assert_eq!(order.related_model(&reg, "Reference", false).name(), "SaleOrder");
    assert_eq!(order.related_model(&reg, "Reference", true).name(), "SaleOrder");
}

#[test]
fn empty_path_resolves_to_self() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");
    assert_eq!(order.related_model(&reg, "", false).name(), "SaleOrder");
}

#[test]
fn json_names_are_accepted_in_paths() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    let end = order.related_model(&reg, "partner_id.profile_id", false);
    assert_eq!(end.name(), "Profile");
}

#[test]
#[should_panic(expected = "unknown field `Bogus` on model `SaleOrder`")]
fn unknown_segment_panics() {
    let reg = registry();
    reg.must_get("SaleOrder").related_model(&reg, "Bogus.Name", false);
}

// === related_field ===

#[test]
fn resolves_the_terminal_field_across_relations() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    let field = order.related_field(&reg, "Partner.Profile.Age");
    assert_eq!(field.name(), "Age");
    assert_eq!(field.field_type(), FieldType::Integer);
}

#[test]
fn resolves_a_single_segment_on_the_model_itself() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    let field = order.related_field(&reg, "Reference");
    assert_eq!(field.name(), "Reference");
}

#[test]
fn resolves_by_json_name() {
    let reg = registry();
    let order = reg.must_get("SaleOrder");

    let field = order.related_field(&reg, "partner_id.name");
    assert_eq!(field.name(), "Name");
    assert_eq!(field.json_name(), "name");
}

#[test]
#[should_panic(expected = "unknown field `Bogus` on model `Partner`")]
fn unknown_terminal_field_panics() {
    let reg = registry();
    reg.must_get("SaleOrder").related_field(&reg, "Partner.Bogus");
}
