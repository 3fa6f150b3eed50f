use namecheck_core::config::{CheckerConfig, OverrideEquality};
use namecheck_core::diagnostics::{Diagnostic, DiagnosticArg, DiagnosticKind};
use namecheck_core::error::HostError;
use namecheck_core::model::{AnnotationArgs, ClassFlavor, DeclId, DeclarationGraph, GraphBuilder};
use namecheck_core::services::NamingPass;

fn incompatible(graph: &DeclarationGraph, config: CheckerConfig) -> Vec<Diagnostic> {
    NamingPass::new(graph, config)
        .run()
        .expect("pass")
        .diagnostics
        .into_iter()
        .filter(|d| d.kind == DiagnosticKind::IncompatibleNameOverride)
        .collect()
}

fn names(primary: &str, secondary: &str) -> AnnotationArgs {
    AnnotationArgs::new().with_name(primary).with_swift_name(secondary)
}

/// Function `name` in `owner` with an extension receiver and one parameter.
fn extension_function(
    b: &mut GraphBuilder,
    owner: DeclId,
    name: &str,
    function: Option<AnnotationArgs>,
    receiver: Option<AnnotationArgs>,
    param: Option<AnnotationArgs>,
) -> DeclId {
    let fun = b.function(Some(owner), name);
    let recv = b.receiver(fun, "Int");
    let p = b.parameter(fun, "kotlinParam");
    for (id, args) in [(fun, function), (recv, receiver), (p, param)] {
        if let Some(args) = args {
            b.annotate(id, args);
        }
    }
    fun
}

type Slots = (Option<AnnotationArgs>, Option<AnnotationArgs>, Option<AnnotationArgs>);

fn named(primary: &str) -> Option<AnnotationArgs> {
    Some(AnnotationArgs::new().with_name(primary))
}

fn swift(secondary: &str) -> Option<AnnotationArgs> {
    Some(AnnotationArgs::new().with_swift_name(secondary))
}

fn both(primary: &str, secondary: &str) -> Option<AnnotationArgs> {
    Some(names(primary, secondary))
}

/// Interface `name` with properties `kotlinPropertyA..` and extension
/// functions `kotlinFunctionA..` annotated as given.
fn interface(
    b: &mut GraphBuilder,
    name: &str,
    properties: Vec<Option<AnnotationArgs>>,
    functions: Vec<Slots>,
) -> (Vec<DeclId>, Vec<DeclId>) {
    let owner = b.class(None, name, ClassFlavor::Interface);
    let mut props = Vec::new();
    for (index, args) in properties.into_iter().enumerate() {
        let prop = b.property(Some(owner), &format!("kotlinProperty{}", letter(index)));
        if let Some(args) = args {
            b.annotate(prop, args);
        }
        props.push(prop);
    }
    let mut funs = Vec::new();
    for (index, (function, receiver, param)) in functions.into_iter().enumerate() {
        let name = format!("kotlinFunction{}", letter(index));
        funs.push(extension_function(b, owner, &name, function, receiver, param));
    }
    (props, funs)
}

fn letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Two interfaces declaring the same members with partly different names,
/// and a class overriding all of them.
fn two_interfaces() -> (DeclarationGraph, Vec<(String, DeclId)>) {
    let mut b = GraphBuilder::new("objCName.kt");
    let recv = || both("objCReceiver", "swiftReceiver");
    let param = || both("objCParam", "swiftParam");

    let (a_props, a_funs) = interface(
        &mut b,
        "KotlinInterfaceA",
        vec![
            both("objCPropertyA", "swiftPropertyA"),
            both("objCPropertyB", "swiftPropertyB"),
            named("objCPropertyB"),
            swift("swiftPropertyB"),
            None,
            None,
        ],
        vec![
            (both("objCFunctionA", "swiftFunctionA"), recv(), param()),
            (both("objCFunctionB", "swiftFunctionB"), recv(), param()),
            (both("objCFunctionC", "swiftFunctionC"), recv(), param()),
            (both("objCFunctionD", "swiftFunctionD"), recv(), param()),
            (both("objCFunctionE", "swiftFunctionE"), None, param()),
        ],
    );
    let (b_props, b_funs) = interface(
        &mut b,
        "KotlinInterfaceB",
        vec![
            both("objCPropertyA", "swiftPropertyA"),
            both("objCPropertyBB", "swiftPropertyB"),
            swift("swiftPropertyC"),
            named("objCPropertyD"),
            named("objCPropertyE"),
            None,
        ],
        vec![
            (both("objCFunctionA", "swiftFunctionA"), recv(), param()),
            (both("objCFunctionBB", "swiftFunctionB"), recv(), param()),
            (
                both("objCFunctionC", "swiftFunctionC"),
                both("objCReceiverC", "swiftReceiver"),
                param(),
            ),
            (both("objCFunctionD", "swiftFunctionD"), recv(), both("objCParamD", "swiftParam")),
            (None, both("objCFunctionE", "swiftFunctionE"), param()),
        ],
    );

    let class = b.class(None, "KotlinOverrideClass", ClassFlavor::Class);
    let mut overriding = Vec::new();
    for (index, (a_prop, b_prop)) in a_props.iter().zip(&b_props).enumerate() {
        let name = format!("kotlinProperty{}", letter(index));
        let prop = b.property(Some(class), &name);
        b.overrides(prop, *a_prop).overrides(prop, *b_prop);
        overriding.push((name, prop));
    }
    for (index, (a_fun, b_fun)) in a_funs.iter().zip(&b_funs).enumerate() {
        let name = format!("kotlinFunction{}", letter(index));
        let fun = b.function(Some(class), &name);
        b.receiver(fun, "Int");
        b.parameter(fun, "kotlinParam");
        b.overrides(fun, *a_fun).overrides(fun, *b_fun);
        overriding.push((name, fun));
    }

    (b.build().expect("graph"), overriding)
}

#[test]
fn conflicting_bases_are_reported_once_per_override() {
    let (graph, overriding) = two_interfaces();
    let diagnostics = incompatible(&graph, CheckerConfig::default());

    let reported: Vec<String> = diagnostics
        .iter()
        .filter_map(|d| {
            d.args.iter().find_map(|arg| match arg {
                DiagnosticArg::Declaration(name) => Some(name.clone()),
                _ => None,
            })
        })
        .collect();
    assert_eq!(
        reported,
        vec![
            "kotlinPropertyB",
            "kotlinPropertyC",
            "kotlinPropertyD",
            "kotlinPropertyE",
            "kotlinFunctionB",
            "kotlinFunctionC",
            "kotlinFunctionD",
            "kotlinFunctionE",
        ]
    );

    // Positioned on the overriding declarations themselves.
    let by_name = |name: &str| overriding.iter().find(|(n, _)| n == name).map(|(_, id)| *id);
    let prop_b = by_name("kotlinPropertyB").expect("override");
    assert_eq!(diagnostics[0].position.line, prop_b.0 + 1);
}

#[test]
fn diagnostic_names_the_conflicting_containers() {
    let (graph, _) = two_interfaces();
    let diagnostics = incompatible(&graph, CheckerConfig::default());
    let first = &diagnostics[0];

    assert!(first.args.contains(&DiagnosticArg::Containers(vec![
        "KotlinInterfaceA".to_string(),
        "KotlinInterfaceB".to_string()
    ])));
    let related: Vec<&str> = first.related.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(related, vec!["inherited from KotlinInterfaceA", "inherited from KotlinInterfaceB"]);
    assert!(first.message.contains("kotlinPropertyB"));
}

#[test]
fn synthesized_member_of_diamond_is_checked_on_the_class() {
    let mut b = GraphBuilder::new("diamond.kt");
    let a = b.class(None, "A", ClassFlavor::Interface);
    let a_m = b.property(Some(a), "m");
    b.annotate(a_m, names("X", "Y"));
    let i = b.class(None, "B", ClassFlavor::Interface);
    let b_m = b.property(Some(i), "m");
    b.annotate(b_m, names("X", "Z"));
    let c = b.class(None, "C", ClassFlavor::Class);
    b.fake_override(c, &[a_m, b_m]);
    let graph = b.build().expect("graph");

    let diagnostics = incompatible(&graph, CheckerConfig::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].position.line, c.0 + 1);
    assert!(diagnostics[0].args.contains(&DiagnosticArg::Declaration("m".into())));
}

#[test]
fn synthesized_function_compares_parameter_slots() {
    let mut b = GraphBuilder::new("diamond.kt");
    let a = b.class(None, "A", ClassFlavor::Interface);
    let a_f = b.function(Some(a), "f");
    let a_p = b.parameter(a_f, "x");
    b.annotate(a_p, AnnotationArgs::new().with_name("value"));
    let i = b.class(None, "B", ClassFlavor::Interface);
    let b_f = b.function(Some(i), "f");
    let b_p = b.parameter(b_f, "x");
    b.annotate(b_p, AnnotationArgs::new().with_name("other"));
    let c = b.class(None, "C", ClassFlavor::Class);
    b.fake_override(c, &[a_f, b_f]);
    let graph = b.build().expect("graph");

    assert_eq!(incompatible(&graph, CheckerConfig::default()).len(), 1);
}

#[test]
fn shared_root_through_two_paths_is_consistent() {
    let mut b = GraphBuilder::new("diamond.kt");
    let root = b.class(None, "Root", ClassFlavor::Interface);
    let root_m = b.property(Some(root), "m");
    b.annotate(root_m, names("X", "Y"));
    let left = b.class(None, "Left", ClassFlavor::Interface);
    let left_m = b.property(Some(left), "m");
    b.overrides(left_m, root_m);
    let right = b.class(None, "Right", ClassFlavor::Interface);
    let right_m = b.property(Some(right), "m");
    b.overrides(right_m, root_m);
    let c = b.class(None, "C", ClassFlavor::Class);
    b.fake_override(c, &[left_m, right_m]);
    let graph = b.build().expect("graph");

    let report = NamingPass::new(&graph, CheckerConfig::default()).run().expect("pass");
    assert!(!report.has_errors(), "unexpected diagnostics: {:?}", report.diagnostics);
}

#[test]
fn three_conflicting_bases_still_yield_one_diagnostic() {
    let mut b = GraphBuilder::new("diamond.kt");
    let mut bases = Vec::new();
    for (class, name) in [("A", "x"), ("B", "y"), ("C", "z")] {
        let owner = b.class(None, class, ClassFlavor::Interface);
        let m = b.property(Some(owner), "m");
        b.annotate(m, AnnotationArgs::new().with_name(name));
        bases.push(m);
    }
    let d = b.class(None, "D", ClassFlavor::Class);
    let m = b.property(Some(d), "m");
    for base in &bases {
        b.overrides(m, *base);
    }
    let graph = b.build().expect("graph");

    assert_eq!(incompatible(&graph, CheckerConfig::default()).len(), 1);
}

#[test]
fn first_base_walk_follows_the_chain_to_its_root() {
    let mut b = GraphBuilder::new("chain.kt");
    let a_m = b.property(None, "m");
    b.annotate(a_m, AnnotationArgs::new().with_name("x"));
    let b_m = b.property(None, "m");
    b.overrides(b_m, a_m);
    let c_m = b.property(None, "m");
    b.overrides(c_m, b_m);
    let d_m = b.property(None, "m");
    b.annotate(d_m, AnnotationArgs::new().with_name("y"));
    let e_m = b.property(None, "m");
    b.overrides(e_m, c_m).overrides(e_m, d_m);
    let graph = b.build().expect("graph");

    let diagnostics = incompatible(&graph, CheckerConfig::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].position.line, e_m.0 + 1);
}

#[test]
fn exact_participates_only_under_strict_equality() {
    let mut b = GraphBuilder::new("exact.kt");
    let a_m = b.property(None, "m");
    b.annotate(a_m, AnnotationArgs::new().with_name("x"));
    let b_m = b.property(None, "m");
    b.annotate(b_m, AnnotationArgs::new().with_name("x").with_exact(true));
    let c_m = b.property(None, "m");
    b.overrides(c_m, a_m).overrides(c_m, b_m);
    let graph = b.build().expect("graph");

    let strict = CheckerConfig {
        override_equality: OverrideEquality::NamesAndExact,
        ..Default::default()
    };
    let loose = CheckerConfig { override_equality: OverrideEquality::Names, ..Default::default() };
    assert_eq!(incompatible(&graph, strict).len(), 1);
    assert!(incompatible(&graph, loose).is_empty());
}

#[test]
fn cyclic_override_graph_is_a_host_error() {
    let mut b = GraphBuilder::new("cycle.kt");
    let first = b.property(None, "m");
    let second = b.property(None, "m");
    b.overrides(first, second).overrides(second, first);
    let graph = b.build().expect("graph");

    let err = NamingPass::new(&graph, CheckerConfig::default()).run().unwrap_err();
    assert!(matches!(err, HostError::CyclicOverride { .. }), "unexpected error: {err}");
}

#[test]
fn self_override_is_a_host_error() {
    let mut b = GraphBuilder::new("cycle.kt");
    let m = b.property(None, "m");
    b.overrides(m, m);
    let graph = b.build().expect("graph");

    let err = NamingPass::new(&graph, CheckerConfig::default()).run().unwrap_err();
    assert_eq!(err, HostError::CyclicOverride { start: m, repeated: m });
}

#[test]
fn overriding_with_a_different_arity_is_a_host_error() {
    let mut b = GraphBuilder::new("arity.kt");
    let base = b.function(None, "f");
    b.parameter(base, "x");
    let over = b.function(None, "f");
    b.overrides(over, base);
    let graph = b.build().expect("graph");

    let err = NamingPass::new(&graph, CheckerConfig::default()).run().unwrap_err();
    match err {
        HostError::ArityMismatch { overriding, base: overridden, overriding_slots, base_slots } => {
            assert_eq!((overriding, overridden), (over, base));
            assert_eq!((overriding_slots, base_slots), (2, 3));
        }
        other => panic!("expected ArityMismatch, got {other}"),
    }
}
