//! Graph fixtures shared by the CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use namecheck_core::model::{AnnotationArgs, ClassFlavor, GraphBuilder};

/// A graph without problems: one annotated class with a property and a method.
pub fn write_clean_graph(dir: &Path) -> PathBuf {
    let mut b = GraphBuilder::new("clean.kt");
    let array = b.class(None, "MyKotlinArray", ClassFlavor::Class);
    let names = AnnotationArgs::new().with_name("MyObjCArray").with_swift_name("MySwiftArray");
    b.annotate(array, names);
    let size = b.property(Some(array), "size");
    b.annotate(size, AnnotationArgs::new().with_name("count"));
    let index_of = b.function(Some(array), "indexOf");
    b.annotate(index_of, AnnotationArgs::new().with_swift_name("index"));
    let element = b.parameter(index_of, "element");
    b.annotate(element, AnnotationArgs::new().with_name("object").with_swift_name("of"));
    write_graph(dir, "clean.json", b)
}

/// A graph with one bad name (`.dot`) and one annotated override.
pub fn write_broken_graph(dir: &Path) -> PathBuf {
    let mut b = GraphBuilder::new("broken.kt");
    let base = b.property(None, "value");
    b.annotate(base, AnnotationArgs::new().with_name(".dot"));
    let over = b.property(None, "value");
    b.overrides(over, base);
    b.annotate(over, AnnotationArgs::new().with_name("other"));
    write_graph(dir, "broken.json", b)
}

/// Two interfaces disagreeing on a member's `exact` flag only.
pub fn write_exact_conflict_graph(dir: &Path) -> PathBuf {
    let mut b = GraphBuilder::new("exact.kt");
    let first = b.class(None, "First", ClassFlavor::Interface);
    let a = b.property(Some(first), "value");
    b.annotate(a, AnnotationArgs::new().with_name("objCValue"));
    let third = b.class(None, "Third", ClassFlavor::Interface);
    let d = b.property(Some(third), "value");
    b.annotate(d, AnnotationArgs::new().with_name("objCValue").with_exact(true));
    let class = b.class(None, "Impl", ClassFlavor::Class);
    let over = b.property(Some(class), "value");
    b.overrides(over, a).overrides(over, d);
    write_graph(dir, "exact.json", b)
}

fn write_graph(dir: &Path, file: &str, builder: GraphBuilder) -> PathBuf {
    let graph = builder.build().expect("graph");
    let path = dir.join(file);
    let text = serde_json::to_string_pretty(&graph.to_file()).expect("serialize");
    fs::write(&path, text).expect("write graph");
    path
}
