use cpphl_syntax::CategoryScheme;

#[derive(Debug)]
pub(crate) struct CliArgs {
    pub cmd: String,
    pub scheme: Option<CategoryScheme>,
    pub prefix: Option<String>,
    pub element: Option<String>,
    pub config: Option<String>,
    pub json_out: bool,
    pub verbose: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: cpphl <html|fragments|check|keywords> [--scheme literal|split|string-only] \
     [--prefix <class-prefix>] [--element <tag>] [--config <file.json>] [--json] [--verbose] \
     [<file>|-]"
}

pub(crate) fn parse_args(argv: Vec<String>) -> Result<CliArgs, String> {
    let mut argv = argv.into_iter();
    let cmd = argv.next().ok_or_else(|| usage().to_string())?;

    let mut args = CliArgs {
        cmd,
        scheme: None,
        prefix: None,
        element: None,
        config: None,
        json_out: false,
        verbose: false,
        positional: Vec::new(),
    };

    while let Some(a) = argv.next() {
        match a.as_str() {
            "--scheme" => args.scheme = Some(value(&mut argv, &a)?.parse()?),
            "--prefix" => args.prefix = Some(value(&mut argv, &a)?),
            "--element" => args.element = Some(value(&mut argv, &a)?),
            "--config" => args.config = Some(value(&mut argv, &a)?),
            "--json" => args.json_out = true,
            "--verbose" => args.verbose = true,
            "-" => args.positional.push(a),
            _ if a.starts_with('-') => return Err(format!("Unknown option: {a}")),
            _ => args.positional.push(a),
        }
    }

    Ok(args)
}

fn value(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    argv.next()
        .ok_or_else(|| format!("Missing value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn options_and_positionals() {
        let args = parse(&["html", "--scheme", "split", "a.cpp", "--prefix", "hl-"]).unwrap();
        assert_eq!(args.cmd, "html");
        assert_eq!(args.scheme, Some(CategoryScheme::Split));
        assert_eq!(args.prefix.as_deref(), Some("hl-"));
        assert_eq!(args.positional, vec!["a.cpp".to_string()]);
    }

    #[test]
    fn dash_is_stdin_not_an_option() {
        let args = parse(&["fragments", "-"]).unwrap();
        assert_eq!(args.positional, vec!["-".to_string()]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&[]).unwrap_err().starts_with("Usage: cpphl"));
        assert_eq!(parse(&["html", "--nope"]).err().unwrap(), "Unknown option: --nope");
        assert_eq!(
            parse(&["html", "--element"]).err().unwrap(),
            "Missing value for --element"
        );
        assert!(parse(&["html", "--scheme", "x"]).err().unwrap().contains("Unknown scheme"));
    }
}
