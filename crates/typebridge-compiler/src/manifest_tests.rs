use indoc::indoc;
use typebridge_core::TypeName;

use crate::test_utils::{geom_index, init_test_logging};
use crate::{Error, Manifest, SnippetPair};

const MANIFEST: &str = indoc! {r#"
    {
      "namespaces": [
        {
          "name": "app",
          "declare": [
            { "value": "geom.Point", "export": true },
            { "value": "geom.Shape.Kind", "namespace": "shapes" },
            { "value": "geom.Transform", "alias": "Transform", "pre": "// transform\n" }
          ],
          "constants": [
            { "name": "origin", "type": "geom.Point" },
            { "name": "names", "type": "java.util.List<java.lang.String>" }
          ],
          "preTypes": "// types\n",
          "postScript": "// end\n"
        },
        {
          "name": "empty"
        }
      ]
    }
"#};

#[test]
fn descriptors_resolve_against_source() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let descriptors = manifest.descriptors(&geom_index()).unwrap();

    let names: Vec<String> = descriptors.iter().map(|d| d.name().binary_name()).collect();
    assert_eq!(names, ["geom.Point", "geom.Shape$Kind", "geom.Transform"]);

    assert!(descriptors[0].is_export());
    assert_eq!(descriptors[1].type_name(), "shapes.Shape$Kind");
    assert_eq!(descriptors[2].alias(), Some("Transform"));
    assert_eq!(descriptors[2].pre(), "// transform\n");
}

#[test]
fn unknown_declared_type() {
    let json = r#"{ "namespaces": [{ "name": "a", "declare": [{ "value": "a.Nope" }] }] }"#;
    let manifest = Manifest::from_json(json).unwrap();
    let err = manifest.descriptors(&geom_index()).unwrap_err();
    assert!(matches!(err, Error::UnknownType(ref name) if name == "a.Nope"));
}

#[test]
fn globals_resolve_to_binary_names() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let globals = manifest.globals(&geom_index());

    assert_eq!(globals.len(), 2);
    assert_eq!(globals[0].name, "origin");
    assert_eq!(globals[0].ty, TypeName::new("geom", "Point"));
    // type arguments are erased
    assert_eq!(globals[1].ty.binary_name(), "java.util.List");
}

#[test]
fn global_member_type_uses_member_form() {
    let json = indoc! {r#"
        { "namespaces": [{ "name": "a", "constants": [
            { "name": "k", "type": "geom.Shape.Kind" }
        ] }] }
    "#};
    let globals = Manifest::from_json(json).unwrap().globals(&geom_index());
    assert_eq!(globals[0].ty.binary_name(), "geom.Shape$Kind");
}

#[test]
fn unknown_global_type_falls_back_to_object() {
    init_test_logging();
    let json = indoc! {r#"
        { "namespaces": [{ "name": "a", "constants": [
            { "name": "ext", "type": "com.acme.Client" },
            { "name": "bad", "type": "a.B<" }
        ] }] }
    "#};
    let globals = Manifest::from_json(json).unwrap().globals(&geom_index());

    let types: Vec<String> = globals.iter().map(|g| g.ty.binary_name()).collect();
    assert_eq!(types, ["java.lang.Object", "java.lang.Object"]);
}

#[test]
fn snippets_per_namespace() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    assert_eq!(
        manifest.type_snippets(),
        [
            SnippetPair::new("// types\n", ""),
            SnippetPair::new("", "")
        ]
    );
    assert_eq!(manifest.script_snippets()[0], SnippetPair::new("", "// end\n"));
}

#[test]
fn malformed_manifest() {
    let err = Manifest::from_json("{ \"namespaces\": 3 }").unwrap_err();
    assert!(matches!(err, Error::Manifest(_)));
}
