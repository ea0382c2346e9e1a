//! Design-token export workflow.
//!
//! `cargo xtask tokens` renders the design system's token tables into the artifacts the
//! stylesheet build consumes: a Tailwind preset (JSON, spread into `tailwind.config.*`) and a
//! `:root` custom-property sheet for plain CSS consumers.

use crate::runtime::config::ConfigLoader;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::fs::write_generated;
use crate::XtaskCommand;
use design_system::tokens::{css_variables, TailwindPreset};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Workspace-relative location of the default export config.
pub const DEFAULT_CONFIG_PATH: &str = "tools/design-tokens.toml";

const CSS_BANNER: &str = "/* Generated by `cargo xtask tokens`. Do not edit by hand. */\n";

/// `cargo xtask tokens ...`
pub struct TokensCommand;

/// Parsed `cargo xtask tokens` invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokensOptions {
    /// Export using the config file at `config` (workspace-relative unless absolute).
    Export { config: PathBuf },
    /// Print usage.
    Help,
}

/// Output locations and formatting for the token export.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Where the Tailwind preset JSON is written.
    pub preset_path: PathBuf,
    /// Where the CSS custom-property sheet is written.
    pub css_path: PathBuf,
    /// Pretty-print the preset JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl ExportConfig {
    /// Reject configs whose outputs cannot both be written.
    pub fn validate(&self) -> XtaskResult<()> {
        for (key, path) in [("preset_path", &self.preset_path), ("css_path", &self.css_path)] {
            if path.as_os_str().is_empty() {
                return Err(XtaskError::validation(format!("`{key}` must not be empty"))
                    .with_operation("validate export config"));
            }
        }
        if self.preset_path == self.css_path {
            return Err(XtaskError::validation(
                "`preset_path` and `css_path` point at the same file",
            )
            .with_operation("validate export config")
            .with_path(&self.preset_path)
            .with_hint("write the preset as .json and the variables as .css"));
        }
        Ok(())
    }
}

impl XtaskCommand for TokensCommand {
    type Options = TokensOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_tokens_options(args)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        match options {
            TokensOptions::Export { config } => {
                let loader = ConfigLoader::<ExportConfig>::new(ctx.root(), &config);
                let export = loader
                    .load()
                    .map_err(|err| err.with_operation("load export config"))?;
                for written in export_tokens(ctx.root(), &export)? {
                    println!("wrote {}", written.display());
                }
                Ok(())
            }
            TokensOptions::Help => {
                print_tokens_usage();
                Ok(())
            }
        }
    }
}

fn parse_tokens_options(args: &[String]) -> XtaskResult<TokensOptions> {
    let mut config = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(TokensOptions::Help),
            "--config" => {
                let Some(value) = iter.next() else {
                    return Err(XtaskError::validation("`--config` expects a path")
                        .with_hint("cargo xtask tokens --config tools/design-tokens.toml"));
                };
                config = PathBuf::from(value);
            }
            other => {
                return Err(
                    XtaskError::validation(format!("unknown tokens option: {other}"))
                        .with_hint("run `cargo xtask tokens --help`"),
                )
            }
        }
    }
    Ok(TokensOptions::Export { config })
}

/// Render both token artifacts and write them under `root`.
///
/// Returns the written paths, preset first.
pub fn export_tokens(root: &Path, config: &ExportConfig) -> XtaskResult<Vec<PathBuf>> {
    config.validate()?;

    let preset = TailwindPreset::from_tokens()
        .to_json(config.pretty)
        .map_err(|err| XtaskError::from(err).with_operation("render tailwind preset"))?;
    let css = format!("{CSS_BANNER}{}", css_variables());

    let preset_path = root.join(&config.preset_path);
    let css_path = root.join(&config.css_path);
    write_generated(&preset_path, &format!("{preset}\n"))?;
    write_generated(&css_path, &css)?;
    Ok(vec![preset_path, css_path])
}

fn print_tokens_usage() {
    eprintln!(
        "Usage: cargo xtask tokens [--config <path>]\n\
         \n\
         Writes the Tailwind preset JSON and the CSS variables sheet.\n\
         \n\
         Options:\n\
           --config <path>     Export config (default: {DEFAULT_CONFIG_PATH})\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-tokens-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_defaults_to_workspace_config() {
        assert_eq!(
            parse_tokens_options(&[]).expect("parse"),
            TokensOptions::Export {
                config: PathBuf::from(DEFAULT_CONFIG_PATH)
            }
        );
        assert_eq!(
            parse_tokens_options(&args(&["--config", "ci/tokens.toml"])).expect("parse"),
            TokensOptions::Export {
                config: PathBuf::from("ci/tokens.toml")
            }
        );
        assert_eq!(
            parse_tokens_options(&args(&["-h"])).expect("parse"),
            TokensOptions::Help
        );
    }

    #[test]
    fn parse_rejects_dangling_and_unknown_flags() {
        let err = parse_tokens_options(&args(&["--config"])).expect_err("missing value");
        assert_eq!(err.category, XtaskErrorCategory::Validation);

        let err = parse_tokens_options(&args(&["--watch"])).expect_err("unknown flag");
        assert!(err.to_string().contains("unknown tokens option: --watch"));
    }

    #[test]
    fn pretty_defaults_to_true() {
        let config: ExportConfig =
            toml::from_str("preset_path = \"a.json\"\ncss_path = \"a.css\"\n").expect("parse");
        assert!(config.pretty);
    }

    #[test]
    fn validate_rejects_shared_output_path() {
        let config = ExportConfig {
            preset_path: PathBuf::from("dist/tokens"),
            css_path: PathBuf::from("dist/tokens"),
            pretty: false,
        };
        let err = config.validate().expect_err("same path");
        assert_eq!(err.category, XtaskErrorCategory::Validation);
        assert!(err.hint.is_some());
    }

    #[test]
    fn export_writes_preset_and_css_variables() {
        let root = unique_test_root();
        let config = ExportConfig {
            preset_path: PathBuf::from("dist/tailwind.preset.json"),
            css_path: PathBuf::from("dist/styles/tokens.css"),
            pretty: false,
        };

        let written = export_tokens(&root, &config).expect("export tokens");
        assert_eq!(
            written,
            vec![
                root.join("dist/tailwind.preset.json"),
                root.join("dist/styles/tokens.css")
            ]
        );

        let preset = fs::read_to_string(&written[0]).expect("read preset");
        let parsed: serde_json::Value = serde_json::from_str(&preset).expect("preset is json");
        assert!(parsed["theme"]["extend"]["colors"]["primary"].is_object());
        assert!(!preset.trim_end().contains('\n'));

        let css = fs::read_to_string(&written[1]).expect("read css");
        assert!(css.starts_with(CSS_BANNER));
        assert!(css.contains(":root {"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn run_reads_config_from_context_root() {
        let root = unique_test_root();
        fs::create_dir_all(root.join("tools")).expect("create tools dir");
        fs::write(
            root.join(DEFAULT_CONFIG_PATH),
            "preset_path = \"out/preset.json\"\ncss_path = \"out/tokens.css\"\n",
        )
        .expect("write config");

        let ctx = CommandContext::with_root(&root);
        TokensCommand::run(&ctx, parse_tokens_options(&[]).expect("parse")).expect("run");
        assert!(root.join("out/preset.json").is_file());
        assert!(root.join("out/tokens.css").is_file());

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn run_surfaces_missing_config() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let ctx = CommandContext::with_root(&root);
        let err = TokensCommand::run(
            &ctx,
            TokensOptions::Export {
                config: PathBuf::from("tools/absent.toml"),
            },
        )
        .expect_err("missing config");
        assert_eq!(err.category, XtaskErrorCategory::Config);
        assert_eq!(err.operation.as_deref(), Some("load export config"));

        let _ = fs::remove_dir_all(root);
    }
}
