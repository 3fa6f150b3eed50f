use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use namecheck_core::config::CheckerConfig;
use namecheck_core::export::stubs::{ExportedClass, ExportedClassKind, ExportedMember};
use namecheck_core::model::load_graph;
use namecheck_core::services::NamingPass;

use crate::load_config_or_default;

/// Inputs of the `export` command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub input: String,
    pub config: Option<String>,
    /// Class-name prefix; overrides the config file.
    pub prefix: Option<String>,
    pub json: bool,
}

/// Build the exported interface model of every class in the input graph.
pub fn build_export(options: &ExportOptions) -> Result<Vec<ExportedClass>> {
    let mut export = load_config_or_default(options.config.as_deref())?.export;
    if let Some(prefix) = &options.prefix {
        export.class_prefix = Some(prefix.clone());
    }
    let input = Path::new(&options.input);
    let graph = load_graph(input)?;
    NamingPass::new(&graph, CheckerConfig::default())
        .export_interfaces(export)
        .with_context(|| format!("Export aborted for {}", input.display()))
}

/// Text listing of exported classes, one member per indented line.
pub fn render_classes(classes: &[ExportedClass]) -> String {
    let mut output = String::new();
    for class in classes {
        let keyword = match class.kind {
            ExportedClassKind::Interface => "interface",
            ExportedClassKind::Protocol => "protocol",
        };
        let _ = writeln!(output, "{keyword} {} (swift: {})", class.name, class.swift_name);
        if let Some(accessor) = &class.singleton_accessor {
            let _ = writeln!(output, "  accessor {accessor}");
        }
        for member in &class.members {
            match member {
                ExportedMember::Property(property) => {
                    let _ = writeln!(
                        output,
                        "  property {} (swift: {})",
                        property.name, property.swift_name
                    );
                }
                ExportedMember::Method(method) => {
                    let _ =
                        writeln!(output, "  method {} (swift: {})", method.name, method.swift_name);
                }
            }
        }
    }
    output
}

pub fn export_command(options: &ExportOptions) -> Result<()> {
    let classes = build_export(options)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&classes)?);
    } else if classes.is_empty() {
        println!("No classes to export.");
    } else {
        print!("{}", render_classes(&classes));
    }
    Ok(())
}
