use std::io::Write;

use cpphl_lexer::highlight_with;

use crate::args::CliArgs;
use crate::commands::{load_config, read_input, stdout_result};

pub(crate) fn run(args: &CliArgs) -> Result<i32, String> {
    let config = load_config(args)?;
    let source = read_input(args)?;
    let markup = highlight_with(source.text.as_str(), &config);
    let mut out = std::io::stdout().lock();
    stdout_result(out.write_all(markup.as_bytes()).and_then(|()| out.flush()))?;
    Ok(0)
}
