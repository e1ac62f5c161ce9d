use armature_core::models::{Field, Registry};

fn registry() -> Registry {
    let mut reg = Registry::new();
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.fields_mut().add(Field::char("Name")).unwrap();
    }
    reg.new_model("SaleOrder").unwrap();
    reg.bootstrap().unwrap();
    reg
}

// === Lookup by name and by table name ===

#[test]
fn get_by_name_and_by_table_name() {
    let reg = registry();

    let by_name = reg.must_get("SaleOrder");
    let by_table = reg.must_get("sale_order");
    assert_eq!(by_name.id(), by_table.id());
    assert_eq!(by_name.name(), "SaleOrder");
    assert_eq!(by_name.table_name(), "sale_order");
}

#[test]
fn every_model_is_reachable_through_both_directories() {
    let reg = registry();

    for model in reg.models() {
        assert_eq!(reg.must_get(model.name()).id(), model.id());
        assert_eq!(reg.must_get(model.table_name()).id(), model.id());
        assert_eq!(reg.model(model.id()).name(), model.name());
    }
}

#[test]
fn get_unknown_model_returns_none() {
    let reg = registry();
    assert!(reg.get("NoSuchModel").is_none());
}

#[test]
#[should_panic(expected = "unknown model `NoSuchModel`")]
fn must_get_unknown_model_panics() {
    let reg = registry();
    reg.must_get("NoSuchModel");
}

// === Duplicate registration ===

#[test]
fn duplicate_model_name_is_rejected() {
    let mut reg = Registry::new();
    reg.new_model("Partner").unwrap();

    let err = reg.new_model("Partner").unwrap_err();
    assert!(err.is_invalid_definition());
}

#[test]
fn duplicate_name_across_model_kinds_is_rejected() {
    let mut reg = Registry::new();
    reg.new_model("Wizard").unwrap();

    let err = reg.new_transient_model("Wizard").unwrap_err();
    assert!(err.is_invalid_definition());
}

// === Foundational mixins ===

#[test]
fn fresh_registry_holds_the_foundational_mixins() {
    let reg = Registry::new();

    let common = reg.must_get("CommonMixin");
    assert!(common.is_mixin());
    assert!(common.mixins().is_empty());

    let base = reg.must_get("BaseMixin");
    assert_eq!(base.mixins(), ["CommonMixin"]);

    let model_mixin = reg.must_get("ModelMixin");
    assert_eq!(model_mixin.mixins(), ["BaseMixin"]);
}

#[test]
fn model_constructors_attach_their_foundational_mixin() {
    let mut reg = Registry::new();
    reg.new_model("Partner").unwrap();
    reg.new_transient_model("ImportWizard").unwrap();
    reg.new_manual_model("PartnerReport").unwrap();
    reg.new_mixin_model("ArchiveMixin").unwrap();

    assert_eq!(reg.must_get("Partner").mixins(), ["ModelMixin"]);
    assert_eq!(reg.must_get("ImportWizard").mixins(), ["BaseMixin"]);
    assert_eq!(reg.must_get("PartnerReport").mixins(), ["CommonMixin"]);
    assert!(reg.must_get("ArchiveMixin").mixins().is_empty());
}

// === Mandatory primary key ===

#[test]
fn every_model_gets_an_id_field() {
    let reg = registry();

    for model in reg.models() {
        let id = model.fields().must_get("ID");
        assert_eq!(id.json_name(), "id");
        assert!(id.is_required());
        assert!(id.is_no_copy());
    }
}

#[test]
fn option_predicates() {
    let mut reg = Registry::new();
    reg.new_model("Partner").unwrap();
    reg.new_transient_model("ImportWizard").unwrap();
    reg.new_manual_model("PartnerReport").unwrap();

    let partner = reg.must_get("Partner");
    assert!(!partner.is_mixin());
    assert!(!partner.is_manual());
    assert!(!partner.is_system());
    assert!(!partner.is_transient());
    assert!(!partner.is_m2m_link());

    assert!(reg.must_get("ImportWizard").is_transient());
    assert!(reg.must_get("PartnerReport").is_manual());
    assert!(reg.must_get("ModelMixin").is_mixin());
}
