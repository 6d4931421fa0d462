use std::io::Write;

use cpphl_lexer::classify;
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::{load_config, read_input, stdout_result};

pub(crate) fn run(args: &CliArgs) -> Result<i32, String> {
    let config = load_config(args)?;
    let source = read_input(args)?;
    let classified = classify(source.text.as_str(), config.scheme);
    let mut out = std::io::stdout().lock();
    for f in &classified.fragments {
        let line = if args.json_out {
            json!({
                "category": f.category.to_string(),
                "start": f.span.start.0,
                "end": f.span.end.0,
                "text": f.text,
            })
            .to_string()
        } else {
            format!(
                "{}\t{}..{}\t{}",
                f.category,
                f.span.start.0,
                f.span.end.0,
                escape_visible(f.text)
            )
        };
        if let Err(e) = writeln!(out, "{line}") {
            stdout_result(Err(e))?;
            return Ok(0);
        }
    }
    Ok(0)
}

fn escape_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
