use std::io::Write;

use crate::args::CliArgs;
use crate::commands::stdout_result;

pub(crate) fn run(args: &CliArgs) -> Result<i32, String> {
    if !args.positional.is_empty() {
        return Err("keywords takes no arguments".to_string());
    }
    let mut words: Vec<&str> = cpphl_lexer::keywords().collect();
    words.sort_unstable();
    let mut out = std::io::stdout().lock();
    stdout_result(writeln!(out, "{}", words.join("\n")))?;
    Ok(0)
}
