use crate::{Registry, RegistryError};

fn standard() -> Registry {
    Registry::with_standard_types().unwrap()
}

#[test]
fn get_unknown_type_is_not_found() {
    let registry = standard();

    let err = registry.get("/does/not/Exist").unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(ref name) if name == "/does/not/Exist"));
    assert!(registry.find("/does/not/Exist").is_none());
    assert!(!registry.contains("/does/not/Exist"));
}

#[test]
fn standard_types_are_idempotent() {
    let mut registry = standard();
    let count = registry.len();

    registry.add_standard_types().unwrap();

    assert_eq!(registry.len(), count);
    assert!(registry.contains("/std/string"));
    assert_eq!(registry.get("/int").unwrap().name(), "/int32_t");
    assert_eq!(registry.get("/unsigned char").unwrap().name(), "/uint8_t");
}

#[test]
fn standard_types_conflict_with_different_definition() {
    let mut registry = Registry::new();
    registry.create_opaque("/int32_t", 4).unwrap();

    let err = registry.add_standard_types().unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(ref name) if name == "/int32_t"));
}

#[test]
fn ids_resolve_in_insertion_order() {
    let mut registry = Registry::new();
    registry.create_null("/a").unwrap();
    registry.create_null("/b").unwrap();

    let a = registry.id_of("/a").unwrap();
    let b = registry.id_of("/b").unwrap();
    assert!(a < b);
    assert_eq!(registry.resolve(b).name(), "/b");
    assert!(registry.try_resolve(b).is_some());

    let names: Vec<_> = registry.iter().map(|(_, ty)| ty.name()).collect();
    assert_eq!(names, vec!["/a", "/b"]);
}

#[test]
fn alias_resolves_to_target() {
    let mut registry = standard();
    registry.alias("/base/Seconds", "/double").unwrap();
    registry.alias("/base/Duration", "/base/Seconds").unwrap();

    assert_eq!(registry.get("/base/Duration").unwrap().name(), "/double");
    assert_eq!(
        registry.id_of("/base/Duration").unwrap(),
        registry.id_of("/double").unwrap()
    );
    assert!(
        registry
            .aliases()
            .any(|(alias, target)| alias == "/base/Duration" && target == "/double")
    );
}

#[test]
fn alias_cannot_shadow_a_type() {
    let mut registry = standard();

    let err = registry.alias("/float", "/double").unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));

    let err = registry.alias("/int", "/double").unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));
}

#[test]
fn minimal_contains_dependencies_only() {
    let mut registry = standard();
    registry.create_opaque("/base/Angle", 8).unwrap();
    registry
        .create_compound(
            "/base/Pose",
            [
                ("position".to_owned(), "/double".to_owned()),
                ("heading".to_owned(), "/base/Angle".to_owned()),
            ],
        )
        .unwrap();
    registry.create_null("/unrelated").unwrap();

    let minimal = registry.minimal("/base/Pose").unwrap();

    let names: Vec<_> = minimal.descriptors().map(|ty| ty.name()).collect();
    assert_eq!(names, vec!["/double", "/base/Angle", "/base/Pose"]);
    assert!(!minimal.contains("/unrelated"));
    assert!(!minimal.contains("/std/string"));
}

#[test]
fn minimal_keeps_aliases_into_the_subset() {
    let mut registry = standard();
    registry.alias("/base/Seconds", "/double").unwrap();

    let minimal = registry.minimal("/base/Seconds").unwrap();

    assert_eq!(minimal.len(), 1);
    assert_eq!(minimal.get("/base/Seconds").unwrap().name(), "/double");
    assert!(!minimal.contains("/int"));
}

#[test]
fn merge_adds_missing_types() {
    let mut source = standard();
    source.create_opaque("/base/Angle", 8).unwrap();
    source.create_array("/base/Angle", 4).unwrap();
    let minimal = source.minimal("/base/Angle[4]").unwrap();

    let mut target = Registry::new();
    target.merge(&minimal).unwrap();
    target.merge(&minimal).unwrap();

    assert_eq!(target.len(), 2);
    assert!(target.get("/base/Angle[4]").unwrap().contains_opaques());
}

#[test]
fn merge_rejects_conflicting_definitions() {
    let mut a = Registry::new();
    a.create_opaque("/base/Angle", 8).unwrap();
    let mut b = Registry::new();
    b.create_opaque("/base/Angle", 4).unwrap();

    let err = a.merge(&b).unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(ref name) if name == "/base/Angle"));
}

#[test]
fn standard_type_table() {
    let registry = standard();

    let table: Vec<_> = registry
        .descriptors()
        .map(|ty| format!("{} {} {}", ty.name(), ty.category(), ty.size()))
        .collect();

    insta::assert_snapshot!(table.join("\n"), @r"
    /bool numeric 1
    /char numeric 1
    /int8_t numeric 1
    /uint8_t numeric 1
    /int16_t numeric 2
    /uint16_t numeric 2
    /int32_t numeric 4
    /uint32_t numeric 4
    /int64_t numeric 8
    /uint64_t numeric 8
    /float numeric 4
    /double numeric 8
    /std/string container 0
    ");
}

#[test]
fn merge_follows_aliased_dependencies() {
    let source = Registry::from_xml(
        r#"<typelib>
             <numeric name="/int32_t" category="sint" size="4"/>
             <alias name="/int" source="/int32_t"/>
             <compound name="/base/Frame" size="4">
               <field name="index" type="/int" offset="0"/>
             </compound>
           </typelib>"#,
    )
    .unwrap();
    let minimal = source.minimal("/base/Frame").unwrap();

    let mut target = Registry::new();
    target.merge(&minimal).unwrap();

    assert_eq!(target.get("/base/Frame").unwrap().fields()[0].type_name, "/int");
    assert_eq!(target.get("/int").unwrap().name(), "/int32_t");

    let mut standard = standard();
    standard.merge(&minimal).unwrap();
    assert!(standard.contains("/base/Frame"));
}
