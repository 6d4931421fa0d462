use cpphl_lexer::Lexer;

use crate::args::CliArgs;
use crate::commands::{emit_diagnostics, load_config, read_input};

/// Reports constructs that ran to end of input. Exit 1 when there are any.
pub(crate) fn run(args: &CliArgs) -> Result<i32, String> {
    let config = load_config(args)?;
    let source = read_input(args)?;
    let lexed = Lexer::new(source.text.as_str())
        .attributes(config.scheme.attributes())
        .lex();
    emit_diagnostics(&source, &lexed.diagnostics, args.json_out);
    Ok(if lexed.diagnostics.is_empty() { 0 } else { 1 })
}
