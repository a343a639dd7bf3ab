use indoc::indoc;
use typebridge_core::{ClassIndex, TypeName};

use super::members::BLOCKED_MEMBERS;
use super::{Compatibility, CompatibilityStrategy, Config, Emitter, emit, emit_with_config};
use crate::test_utils::{declared, geom_index, init_test_logging, registry_with};
use crate::{Error, GlobalBinding, Origin, Registry, SnippetPair, predefined_types};

const POINT_MODEL: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "Point",
          "fields": [
            { "name": "y", "type": "double" },
            { "name": "x", "type": "double" }
          ],
          "constructors": [
            { "parameters": [{ "name": "x", "type": "double" }, { "name": "y", "type": "double" }] }
          ]
        }
      ]
    }
"#};

fn header() -> &'static str {
    CompatibilityStrategy::default().declarations_header()
}

#[test]
fn point_round_trip() {
    init_test_logging();

    let index = ClassIndex::from_json(POINT_MODEL).unwrap();
    let mut registry = Registry::new();
    registry.extend(predefined_types(), Origin::Predefined);
    registry.insert(declared("Point").with_export(true), Origin::Discovered);

    let output = emit(&registry, &index).unwrap();

    let declarations = output.declarations.strip_prefix(header()).unwrap();
    insta::assert_snapshot!(declarations, @r"
    interface Point {

      x:number;
      y:number;

    } // end Point
    interface PointStatic {

      readonly class:any;
      new( x:number, y:number ):Point;

    } // end PointStatic
    declare const Point: PointStatic;



    // Globals
    ");

    insta::assert_snapshot!(output.bindings, @r#"
    /// <reference path="out.d.ts"/>

    export const Point = Java.type("Point");
    "#);
}

#[test]
fn builtins_render_against_baseline() {
    let registry = Registry::with_builtins();
    let index = ClassIndex::baseline().unwrap();
    let output = emit(&registry, &index).unwrap();

    insta::assert_snapshot!(output.bindings, @r#"
    /// <reference path="out.d.ts"/>

    export const Collections = Java.type("java.util.Collections");

    export const Collectors = Java.type("java.util.stream.Collectors");

    export const Iterable = Java.extend(Java.type("java.lang.Iterable"));

    export const Optional = Java.type("java.util.Optional");

    export const Stream = Java.extend(Java.type("java.util.stream.Stream"));
    "#);

    assert!(output.declarations.contains("declare const Optional: java.util.OptionalStatic;\n"));
    assert!(output.declarations.contains("declare const Stream: java.util.stream.Stream;\n"));
    assert!(!output.declarations.contains("interface String"));
}

/// Member name of an indented member line, if it has one.
fn member_name(line: &str) -> Option<&str> {
    let line = line.strip_prefix("  ")?;
    let line = line.strip_prefix("readonly ").unwrap_or(line);
    let end = line.find(['(', '<', '?', ':'])?;
    Some(&line[..end])
}

#[test]
fn member_lines_are_sorted_and_filtered() {
    let registry = registry_with([
        declared("geom.Point").with_export(true),
        declared("geom.Shape"),
        declared("geom.Canvas"),
    ]);
    let output = emit(&registry, &geom_index()).unwrap();
    let declarations = output.declarations.strip_prefix(header()).unwrap();

    for block in declarations.split("} // end ") {
        let Some((_, body)) = block.split_once("{\n\n") else {
            continue;
        };
        let lines: Vec<&str> = body
            .lines()
            .filter(|l| l.starts_with("  ") && !l.starts_with("  readonly class:any"))
            .collect();

        let (fields, methods): (Vec<&str>, Vec<&str>) =
            lines.iter().copied().partition(|l| !l.contains('('));
        let first_method = lines.iter().position(|l| l.contains('('));
        if let Some(first_method) = first_method {
            assert!(
                lines[first_method..].iter().all(|l| l.contains('(')),
                "fields after methods in:\n{body}"
            );
        }
        assert!(fields.is_sorted(), "unsorted fields in:\n{body}");
        let non_constructors: Vec<&str> = methods
            .into_iter()
            .filter(|l| !l.starts_with("  new"))
            .collect();
        assert!(non_constructors.is_sorted(), "unsorted methods in:\n{body}");

        for line in lines {
            if let Some(name) = member_name(line) {
                assert!(!BLOCKED_MEMBERS.contains(&name), "{name} leaked");
                assert!(!name.contains('$'), "{name} leaked");
            }
        }
    }
}

#[test]
fn output_is_deterministic() {
    let index = geom_index();
    let discovered = [
        declared("geom.Shape$Kind"),
        declared("geom.Transform").with_export(true),
        declared("geom.Point").with_export(true),
        declared("geom.Shape"),
    ];

    let forward = registry_with(discovered.clone());
    let mut reversed_input = discovered;
    reversed_input.reverse();
    let reversed = registry_with(reversed_input);

    let first = emit(&forward, &index).unwrap();
    let again = emit(&forward, &index).unwrap();
    let other_order = emit(&reversed, &index).unwrap();
    assert_eq!(first, again);
    assert_eq!(first, other_order);
}

#[test]
fn globals_and_snippets() {
    let registry = registry_with([declared("geom.Point").with_export(true)]);
    let index = geom_index();
    let config = Config::new().reference_path("types/app.d.ts");

    let output = Emitter::new(&registry, &index, config)
        .globals([
            GlobalBinding::new("origin", TypeName::new("geom", "Point")),
            GlobalBinding::new("tint", TypeName::new("geom", "Color")),
            GlobalBinding::new("ext", TypeName::new("com.acme", "Client")),
            GlobalBinding::new("label", TypeName::new("java.lang", "String")),
            GlobalBinding::new("kind", TypeName::new("geom", "Shape").member("Kind")),
        ])
        .type_snippets([
            SnippetPair::new("// pre types 1\n", "// post types 1\n"),
            SnippetPair::new("// pre types 2\n", "// post types 2\n"),
        ])
        .script_snippets([SnippetPair::new("// pre script\n", "// post script\n")])
        .emit()
        .unwrap();

    let declarations = output.declarations.strip_prefix(header()).unwrap();
    assert!(declarations.starts_with("// pre types 1\n// pre types 2\n"));
    assert!(declarations.ends_with(indoc! {"
        // Globals
        declare const origin: geom.Point;
        declare const tint: geom.Color;
        declare const ext: com.acme.Client;
        declare const label: java.lang.String;
        declare const kind: geom.Shape$Kind;
        // post types 1
        // post types 2
    "}));

    let pre = output.bindings.find("// pre script").unwrap();
    let binding = output.bindings.find("export const Point").unwrap();
    let post = output.bindings.find("// post script").unwrap();
    assert!(output.bindings.starts_with("/// <reference path=\"types/app.d.ts\"/>\n\n"));
    assert!(pre < binding && binding < post);
}

#[test]
fn rhino_output() {
    let registry = registry_with([declared("geom.Shape").with_export(true)]);
    let index = geom_index();
    let config = Config::new().compatibility(Compatibility::Rhino);

    let output = emit_with_config(&registry, &index, config).unwrap();
    assert!(
        output
            .declarations
            .starts_with(CompatibilityStrategy::new(Compatibility::Rhino).declarations_header())
    );
    assert!(output.bindings.contains(
        "export const Shape = function(impl) { return new JavaAdapter(Packages.geom.Shape, impl); };\n"
    ));
}

#[test]
fn config_keeps_prototype_flag_across_mode_changes() {
    let config = Config::new()
        .foreign_object_prototype(true)
        .compatibility(Compatibility::GraalJs);
    assert!(config.strategy().has_foreign_object_prototype());
    assert_eq!(config.strategy().mode(), Compatibility::GraalJs);
}

#[test]
fn unresolved_member_type_aborts() {
    let index = ClassIndex::from_json(indoc! {r#"
        {
          "types": [
            {
              "name": "app.Service",
              "methods": [{ "name": "client", "returns": "com.acme.Client" }]
            }
          ]
        }
    "#})
    .unwrap();
    let mut registry = Registry::new();
    registry.insert(declared("app.Service"), Origin::Discovered);

    let err = emit(&registry, &index).unwrap_err();
    assert!(matches!(err, Error::UnresolvedType(ref name) if name == "com.acme.Client"));
}

#[test]
fn declared_type_missing_from_model() {
    let registry = registry_with([declared("geom.Nowhere")]);
    let err = emit(&registry, &geom_index()).unwrap_err();
    assert!(matches!(err, Error::UnknownType(ref name) if name == "geom.Nowhere"));
}
