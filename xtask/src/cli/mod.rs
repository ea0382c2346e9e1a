//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Tokens(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "tokens" => Ok(TopLevelCommand::Tokens(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(
            XtaskError::validation(format!("unknown xtask command: {other}"))
                .with_hint("run `cargo xtask help`"),
        ),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           tokens [--config <path>]\n\
                              Export the Tailwind preset and CSS variables from the design tokens\n\
           help                Show this message\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn tokens_keeps_remaining_args() {
        assert_eq!(
            parse(vec!["tokens".into(), "--config".into(), "x.toml".into()]).expect("parse"),
            TopLevelCommand::Tokens(vec!["--config".into(), "x.toml".into()])
        );
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(vec!["dev".into()]).expect_err("unknown command");
        assert_eq!(err.message, "unknown xtask command: dev");
    }
}
