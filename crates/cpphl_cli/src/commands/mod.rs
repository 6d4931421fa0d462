use std::io::Read;

use cpphl_syntax::{Diagnostic, HighlightConfig, SourceFile, render_diagnostic};
use serde_json::json;

use crate::args::CliArgs;

pub(crate) mod check;
pub(crate) mod fragments;
pub(crate) mod html;
pub(crate) mod keywords;

/// Reads `<file>`, or stdin when the path is `-`.
pub(crate) fn read_input(args: &CliArgs) -> Result<SourceFile, String> {
    let [path] = args.positional.as_slice() else {
        return Err("Missing <file>".to_string());
    };
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("Read failed: {e}"))?;
        return Ok(SourceFile::new("<stdin>", text));
    }
    let text = std::fs::read_to_string(path).map_err(|e| format!("Read failed: {path}: {e}"))?;
    Ok(SourceFile::new(path.as_str(), text))
}

/// Config file first, then explicit flags on top.
pub(crate) fn load_config(args: &CliArgs) -> Result<HighlightConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("Read failed: {path}: {e}"))?;
            serde_json::from_str(&raw).map_err(|e| format!("Invalid config {path}: {e}"))?
        }
        None => HighlightConfig::default(),
    };
    if let Some(scheme) = args.scheme {
        config.scheme = scheme;
    }
    if let Some(prefix) = &args.prefix {
        config.class_prefix = prefix.clone();
    }
    if let Some(element) = &args.element {
        config.element = element.clone();
    }
    tracing::debug!(?config, "configuration");
    Ok(config)
}

pub(crate) fn emit_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic], json_out: bool) {
    for d in diagnostics {
        if json_out {
            let span = d.span.map(|s| json!({ "start": s.start.0, "end": s.end.0 }));
            let obj = json!({
                "severity": d.severity.as_str(),
                "code": d.code,
                "message": d.message,
                "span": span,
                "file": source.name,
            });
            println!("{}", obj);
        } else {
            eprintln!("{}", render_diagnostic(source, d));
        }
    }
}

/// Maps a stdout write failure to a CLI error; a closed pipe is not one.
pub(crate) fn stdout_result(result: std::io::Result<()>) -> Result<(), String> {
    match result {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(format!("stdout error: {e}")),
        Ok(()) => Ok(()),
    }
}
