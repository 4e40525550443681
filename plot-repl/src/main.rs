use log::{debug, LevelFilter};
use plot_curve::{classify_and_analyze, DomainHint};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::{env, error::Error, fs, io::{self, IsTerminal, Read}};

/// Reads the log level from the `PLOT_LOG` environment variable, defaulting to `warn`.
fn log_level() -> LevelFilter {
    env::var("PLOT_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Splits an optional `polar:` or `cartesian:` prefix off a line, returning the domain hint it
/// selects and the formula.
fn split_hint(line: &str) -> (DomainHint, &str) {
    let line = line.trim();
    for (prefix, hint) in [("polar:", DomainHint::Polar), ("cartesian:", DomainHint::Cartesian)] {
        let matches = line.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            return (hint, line[prefix.len()..].trim());
        }
    }
    (DomainHint::Auto, line)
}

/// Analyzes the formula on one line, printing the report or the error.
fn analyze_line(line: &str) {
    let (hint, expression) = split_hint(line);
    if expression.is_empty() {
        return;
    }

    debug!("analyzing `{}` with hint {:?}", expression, hint);
    match classify_and_analyze(expression, hint) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            if err.report_to_stderr(expression).is_err() {
                eprintln!("{}", err);
            }
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    CombinedLogger::init(vec![TermLogger::new(
        log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let mut args = env::args();
    args.next();

    if let Some(filename) = args.next() {
        // one formula per line of the file
        fs::read_to_string(filename)?.lines().for_each(analyze_line);
    } else if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input.lines().for_each(analyze_line);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new()?;

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;
            analyze_line(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn hints() {
        assert_eq!(split_hint("polar: 1 + cos(t)"), (DomainHint::Polar, "1 + cos(t)"));
        assert_eq!(split_hint("  Cartesian:x^2 "), (DomainHint::Cartesian, "x^2"));
        assert_eq!(split_hint("r = cos(2θ)"), (DomainHint::Auto, "r = cos(2θ)"));
        assert_eq!(split_hint("θ"), (DomainHint::Auto, "θ"));
    }
}
