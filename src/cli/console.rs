use std::io::{self, BufRead, Write};

use anyhow::Result;
use huffpack::{Config, RoundTrip, if_tracing};

use crate::cli::{ConsoleArgs, render};

pub fn console(args: ConsoleArgs, config: Config) -> Result<()> {
    let mut config = args.output.apply(config);
    if let Some(prompt) = args.prompt {
        config.prompt = prompt;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config, |text| report(text, &config))
}

/// Round trips one line and renders it.
fn report(text: &str, config: &Config) -> Result<String> {
    let roundtrip = RoundTrip::run(text)?;
    render::roundtrip(&roundtrip, config)
}

/// The read, report, print loop. Stops on end of input or when the user answers `n`.
///
/// A failed `step` is printed and the loop carries on with the next prompt.
pub fn run<R, W, F>(mut input: R, mut output: W, config: &Config, mut step: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<String>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);

        match step(text) {
            Ok(rendered) => writeln!(output, "{}", rendered)?,
            Err(e) => {
                if_tracing! {
                    tracing::warn!(error = %e, "console input failed");
                }
                writeln!(output, "error: {:#}", e)?;
            }
        }

        write!(output, "Would you like to try another string? (Y/N) ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("n") {
            break;
        }
        writeln!(output)?;
    }
    writeln!(output)?;
    Ok(())
}
