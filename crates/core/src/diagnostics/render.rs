use std::fmt::Write;

use crate::diagnostics::Diagnostic;

/// Render a diagnostic as `file:line:col: error[CODE]: message`, followed by
/// one indented `note:` line per related location.
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut output = String::new();
    let _ = write!(
        output,
        "{}: error[{}]: {}",
        diagnostic.position, diagnostic.code, diagnostic.message
    );
    for related in &diagnostic.related {
        let _ = write!(output, "\n  note: {} ({})", related.message, related.position);
    }
    output
}

/// Render a list of diagnostics followed by a one-line summary.
pub fn render_report(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&render_diagnostic(diagnostic));
        output.push('\n');
    }
    match diagnostics.len() {
        0 => output.push_str("no problems found\n"),
        1 => output.push_str("1 error reported\n"),
        n => {
            let _ = writeln!(output, "{n} errors reported");
        }
    }
    output
}
