use std::path::PathBuf;
use std::str::FromStr;

use clap::ArgMatches;

use crate::admission_request::Operation;
use crate::errors::{Result, ReviewError};
use crate::output::OutputFormat;

#[derive(Debug)]
pub struct Config {
    pub manifest_path: PathBuf,
    pub operation: Operation,
    pub output: OutputFormat,
    pub log_level: String,
    pub log_fmt: String,
    pub log_no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest_path: PathBuf::new(),
            operation: Operation::default(),
            output: OutputFormat::default(),
            log_level: String::from("warn"),
            log_fmt: String::from("text"),
            log_no_color: false,
        }
    }
}

impl Config {
    pub fn from_args(matches: &ArgMatches) -> Result<Self> {
        let manifest_path = matches
            .get_one::<String>("file")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .ok_or(ReviewError::EmptyFilePath)?;

        let operation = match matches.get_one::<String>("operation") {
            Some(operation) if !operation.is_empty() => Operation::from_str(operation)?,
            _ => Operation::default(),
        };
        let output = match matches.get_one::<String>("output") {
            Some(output) if !output.is_empty() => OutputFormat::from_str(output)?,
            _ => OutputFormat::default(),
        };

        let log_level = matches
            .get_one::<String>("log-level")
            .expect("This should not happen, there's a default value for log-level")
            .to_owned();
        let log_fmt = matches
            .get_one::<String>("log-fmt")
            .expect("This should not happen, there's a default value for log-fmt")
            .to_owned();
        let log_no_color = matches.get_flag("log-no-color");

        Ok(Self {
            manifest_path,
            operation,
            output,
            log_level,
            log_fmt,
            log_no_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::cli::build_cli;

    fn config_from(args: &[&str]) -> Result<Config> {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("fake-admission-review").chain(args.iter().copied()))
            .expect("clap should accept the arguments");
        Config::from_args(&matches)
    }

    #[test]
    fn defaults() {
        let config = config_from(&["--file", "pod.yaml"]).expect("valid config");

        assert_eq!(config.manifest_path, PathBuf::from("pod.yaml"));
        assert_eq!(config.operation, Operation::Create);
        assert_eq!(config.output, OutputFormat::Yaml);
        assert_eq!(config.log_fmt, "text");
    }

    #[rstest]
    #[case::update(&["--file", "pod.yaml", "--operation", "update"], Operation::Update, OutputFormat::Yaml)]
    #[case::delete_json(&["--file", "pod.yaml", "--operation", "delete", "--output", "json"], Operation::Delete, OutputFormat::Json)]
    #[case::empty_values_fall_back_to_defaults(&["--file", "pod.yaml", "--operation", "", "--output", ""], Operation::Create, OutputFormat::Yaml)]
    fn explicit_values(
        #[case] args: &[&str],
        #[case] operation: Operation,
        #[case] output: OutputFormat,
    ) {
        let config = config_from(args).expect("valid config");

        assert_eq!(config.operation, operation);
        assert_eq!(config.output, output);
    }

    #[test]
    fn empty_file_path() {
        let err = config_from(&["--file", ""]).err().expect("config should be rejected");
        assert!(matches!(err, ReviewError::EmptyFilePath));
    }

    #[test]
    fn invalid_operation() {
        let err = config_from(&["--file", "pod.yaml", "--operation", "patch"])
            .err()
            .expect("config should be rejected");
        assert!(matches!(err, ReviewError::InvalidOperation(op) if op == "patch"));
    }

    #[test]
    fn invalid_output() {
        let err = config_from(&["--file", "pod.yaml", "--output", "xml"])
            .err()
            .expect("config should be rejected");
        assert!(matches!(err, ReviewError::InvalidOutputFormat(format) if format == "xml"));
    }
}
