use indoc::indoc;

use crate::{ClassIndex, ClassKind, MemberSource, ModelError, TypeName, TypeRef};

const MODEL: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "geom.Point",
          "fields": [
            { "name": "x", "type": "double" },
            { "name": "ORIGIN", "type": "geom.Point", "modifiers": ["static", "final"] }
          ],
          "methods": [
            { "name": "distance", "parameters": [{ "type": "geom.Point" }], "returns": "double" }
          ],
          "constructors": [
            { "parameters": [{ "name": "x", "type": "double" }, { "name": "y", "type": "double" }] }
          ]
        },
        {
          "name": "geom.Shape$Kind",
          "kind": "enum",
          "enumConstants": ["CIRCLE", "SQUARE"]
        },
        {
          "name": "geom.Mapper",
          "kind": "interface",
          "typeParameters": ["T"],
          "methods": [
            { "name": "map", "typeParameters": ["R"], "parameters": [{ "type": "T" }], "returns": "R" }
          ]
        }
      ]
    }
"#};

#[test]
fn links_members() {
    let index = ClassIndex::from_json(MODEL).unwrap();
    assert_eq!(index.len(), 3);

    let point = index.lookup("geom.Point").unwrap();
    assert_eq!(point.kind, ClassKind::Class);
    assert!(!point.is_abstract());
    assert!(point.fields[1].modifiers.is_static());
    assert_eq!(point.methods[0].params[0].name, "arg0");
    assert_eq!(point.constructors[0].params[1].name, "y");
}

#[test]
fn interfaces_are_abstract_and_scope_type_variables() {
    let index = ClassIndex::from_json(MODEL).unwrap();
    let mapper = index.lookup("geom.Mapper").unwrap();
    assert!(mapper.is_interface());
    assert!(mapper.is_abstract());

    let map = &mapper.methods[0];
    assert_eq!(map.params[0].ty, TypeRef::Variable("T".to_owned()));
    assert_eq!(map.returns, TypeRef::Variable("R".to_owned()));
}

#[test]
fn lookup_falls_back_to_member_form() {
    let index = ClassIndex::from_json(MODEL).unwrap();
    let kind = index.lookup("geom.Shape.Kind").unwrap();
    assert!(kind.is_enum());
    assert_eq!(kind.enum_constants, ["CIRCLE", "SQUARE"]);
    assert!(index.lookup("geom.Missing").is_none());
}

#[test]
fn insert_keeps_first() {
    let mut index = ClassIndex::from_json(MODEL).unwrap();
    let name = TypeName::parse("geom.Point").unwrap();
    let replacement = crate::ClassInfo::new(name.clone(), ClassKind::Interface);
    assert!(!index.insert(replacement));
    assert_eq!(index.class(&name).unwrap().kind, ClassKind::Class);
}

#[test]
fn merge_adds_only_missing() {
    let mut index = ClassIndex::from_json(MODEL).unwrap();
    index.merge(ClassIndex::baseline().unwrap());
    assert!(index.lookup("java.util.List").is_some());
    assert_eq!(index.iter().next().unwrap().name.binary_name(), "geom.Point");
}

#[test]
fn baseline_loads() {
    let baseline = ClassIndex::baseline().unwrap();
    let function = baseline.lookup("java.util.function.Function").unwrap();
    assert!(function.is_functional_annotated());
    assert_eq!(function.abstract_methods().count(), 1);

    let iterable = baseline.lookup("java.lang.Iterable").unwrap();
    assert!(!iterable.is_functional_annotated());
    assert_eq!(iterable.abstract_methods().count(), 1);
}

#[test]
fn invalid_signature_is_reported() {
    let json = r#"{ "types": [{ "name": "a.B", "fields": [{ "name": "f", "type": "int[" }] }] }"#;
    let err = ClassIndex::from_json(json).unwrap_err();
    assert!(matches!(err, ModelError::Signature(_)));
}

#[test]
fn invalid_name_is_reported() {
    let err = ClassIndex::from_json(r#"{ "types": [{ "name": "a..B" }] }"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid type name `a..B`");
}
