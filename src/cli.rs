use crate::inventory::{Inventory, OutputSelector};
use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use log::debug;
use std::io::Write;

/// Dynamic inventory entry point, invoked by the automation tool as `--list` or
/// `--host <HOST>`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("selector").required(true).args(["list", "host"])))]
pub struct Cli {
    /// outputs the whole inventory, including hostvars
    #[arg(long, action)]
    pub list: bool,

    /// outputs the variables of a single host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// indent the JSON output
    #[arg(long, action)]
    pub pretty: bool,
}

impl Cli {
    /// Exactly one of `--list` and `--host` must be given.
    pub fn selector(&self) -> Result<OutputSelector> {
        match (self.list, &self.host) {
            (true, None) => Ok(OutputSelector::List),
            (false, Some(host)) => Ok(OutputSelector::Host(host.clone())),
            (false, None) => bail!("You must specify either --list or --host"),
            (true, Some(_)) => bail!("You must specify only one of --list or --host"),
        }
    }
}

pub fn init_logging() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
}

/// Parses the process arguments and writes the requested document to stdout.
///
/// Missing or conflicting selectors make clap print usage and exit.
pub fn run(inventory: &Inventory) -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run_with(inventory, &cli, &mut stdout.lock())
}

pub fn run_with<W: Write>(inventory: &Inventory, cli: &Cli, writer: &mut W) -> Result<()> {
    let selector = cli.selector()?;
    debug!("Writing inventory output for {selector:?}");
    inventory.write_output(writer, &selector, cli.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(&["dyninv", "--list"], OutputSelector::List)]
    #[case(&["dyninv", "--list", "--pretty"], OutputSelector::List)]
    #[case(&["dyninv", "--host", "comp01"], OutputSelector::Host("comp01".to_string()))]
    fn test_selector_from_args(#[case] args: &[&str], #[case] expected: OutputSelector) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.selector().unwrap(), expected);
    }

    #[rstest]
    #[case(&["dyninv"], ErrorKind::MissingRequiredArgument)]
    #[case(&["dyninv", "--pretty"], ErrorKind::MissingRequiredArgument)]
    #[case(&["dyninv", "--list", "--host", "comp01"], ErrorKind::ArgumentConflict)]
    fn test_usage_errors(#[case] args: &[&str], #[case] kind: ErrorKind) {
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_selector_rejects_manual_conflicts() {
        let neither = Cli {
            list: false,
            host: None,
            pretty: false,
        };
        let both = Cli {
            list: true,
            host: Some("comp01".to_string()),
            pretty: false,
        };

        assert!(neither.selector().is_err());
        assert!(both.selector().is_err());
    }

    #[test]
    fn test_run_with_host_lookup() {
        let inventory = Inventory::new();
        inventory
            .add_host("comp01")
            .unwrap()
            .add_variable("foo", "bar");
        let cli = Cli::try_parse_from(["dyninv", "--host", "comp01"]).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        run_with(&inventory, &cli, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "{\"foo\":\"bar\"}\n");
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
