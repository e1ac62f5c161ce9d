use armature_core::models::{Field, Method, Registry};
use armature_core::stmt::Type;

// === Lazy field resolution over the mixin chain ===

#[test]
fn mixin_fields_are_found_through_the_inheriting_model() {
    let mut reg = Registry::new();
    {
        let archived = reg.new_mixin_model("ArchiveMixin").unwrap();
        archived.fields_mut().add(Field::boolean("Active")).unwrap();
    }
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.inherit("ArchiveMixin");
    }
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    let active = partner.resolve_field(&reg, "Active").unwrap();
    assert_eq!(active.name(), "Active");
}

#[test]
fn a_mixin_can_be_extended_after_being_inherited() {
    let mut reg = Registry::new();
    reg.new_mixin_model("ArchiveMixin").unwrap();
    reg.new_model("Partner").unwrap().inherit("ArchiveMixin");

    // The field is declared on the mixin after Partner inherited it;
    // resolution is lazy, so Partner still sees it.
    reg.model_mut("ArchiveMixin")
        .unwrap()
        .fields_mut()
        .add(Field::datetime("ArchivedAt"))
        .unwrap();
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    assert!(partner.resolve_field(&reg, "ArchivedAt").is_some());
}

#[test]
fn own_declarations_override_mixin_declarations() {
    let mut reg = Registry::new();
    {
        let mixin = reg.new_mixin_model("NotesMixin").unwrap();
        mixin.fields_mut().add(Field::char("Notes")).unwrap();
    }
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.fields_mut().add(Field::text("Notes")).unwrap();
        partner.inherit("NotesMixin");
    }
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    let notes = partner.resolve_field(&reg, "Notes").unwrap();
    // The model's own Text declaration wins over the mixin's Char one.
    assert_eq!(notes.ty(), &Type::String);
    assert_eq!(
        notes.field_type(),
        armature_core::models::FieldType::Text
    );
}

#[test]
fn the_first_inherited_mixin_wins_among_mixins() {
    let mut reg = Registry::new();
    {
        let first = reg.new_mixin_model("FirstMixin").unwrap();
        first.fields_mut().add(Field::integer("Rank")).unwrap();
    }
    {
        let second = reg.new_mixin_model("SecondMixin").unwrap();
        second.fields_mut().add(Field::float("Rank")).unwrap();
    }
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.inherit("FirstMixin");
        partner.inherit("SecondMixin");
    }
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    let rank = partner.resolve_field(&reg, "Rank").unwrap();
    assert_eq!(rank.ty(), &Type::I64);
}

#[test]
fn resolution_recurses_through_nested_mixins() {
    let mut reg = Registry::new();
    {
        let base = reg.new_mixin_model("TimestampMixin").unwrap();
        base.fields_mut().add(Field::datetime("CreatedAt")).unwrap();
    }
    {
        let audit = reg.new_mixin_model("AuditMixin").unwrap();
        audit.inherit("TimestampMixin");
    }
    reg.new_model("Partner").unwrap().inherit("AuditMixin");
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    assert!(partner.resolve_field(&reg, "CreatedAt").is_some());
}

// === Method resolution ===

#[test]
fn methods_resolve_with_the_same_precedence_as_fields() {
    let mut reg = Registry::new();
    {
        let mixin = reg.new_mixin_model("NamedMixin").unwrap();
        mixin
            .methods_mut()
            .add(Method::new("NameGet").doc("Returns the display name"));
    }
    {
        let partner = reg.new_model("Partner").unwrap();
        partner.inherit("NamedMixin");
        partner
            .methods_mut()
            .add(Method::new("CheckVat"));
    }
    reg.bootstrap().unwrap();

    let partner = reg.must_get("Partner");
    assert!(partner.resolve_method(&reg, "CheckVat").is_some());

    let name_get = partner.resolve_method(&reg, "NameGet").unwrap();
    assert_eq!(name_get.doc_string(), Some("Returns the display name"));

    assert!(partner.resolve_method(&reg, "Vacuum").is_none());
}

// === hasParentField ===

#[test]
fn has_parent_field_requires_a_field_literally_named_parent() {
    let mut reg = Registry::new();
    {
        let category = reg.new_model("Category").unwrap();
        category
            .fields_mut()
            .add(Field::many2one("Parent", "Category"))
            .unwrap();
    }
    reg.new_model("Partner").unwrap();
    reg.bootstrap().unwrap();

    assert!(reg.must_get("Category").has_parent_field());
    assert!(!reg.must_get("Partner").has_parent_field());
}
