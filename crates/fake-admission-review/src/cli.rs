use clap::builder::PossibleValue;
use clap::{Arg, ArgAction, Command, crate_description, crate_name, crate_version};

pub fn build_cli() -> Command {
    let mut args = vec![
        Arg::new("file")
            .long("file")
            .short('f')
            .value_name("PATH")
            .env("FAKE_ADMISSION_REVIEW_FILE")
            .required(true)
            .help("Path to the input YAML file"),
        Arg::new("operation")
            .long("operation")
            .value_name("OPERATION")
            .default_value("create")
            .help("Operation type (create, update, delete)"),
        Arg::new("output")
            .long("output")
            .value_name("FORMAT")
            .default_value("yaml")
            .help("Output format (yaml, json)"),
        Arg::new("log-level")
            .long("log-level")
            .value_name("LOG_LEVEL")
            .env("FAKE_ADMISSION_REVIEW_LOG_LEVEL")
            .default_value("warn")
            .value_parser([
                PossibleValue::new("trace"),
                PossibleValue::new("debug"),
                PossibleValue::new("info"),
                PossibleValue::new("warn"),
                PossibleValue::new("error"),
            ])
            .help("Log level"),
        Arg::new("log-fmt")
            .long("log-fmt")
            .value_name("LOG_FMT")
            .env("FAKE_ADMISSION_REVIEW_LOG_FMT")
            .default_value("text")
            .value_parser([PossibleValue::new("text"), PossibleValue::new("json")])
            .help("Log output format"),
        Arg::new("log-no-color")
            .long("log-no-color")
            .env("NO_COLOR")
            .action(ArgAction::SetTrue)
            .help("Disable colored output for logs"),
    ];
    args.sort_by(|a, b| a.get_id().cmp(b.get_id()));

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .args(args)
}
