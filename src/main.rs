use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{OutputFormat, base64_command, inspect_command, validate_command};

#[derive(Parser)]
#[command(
    name = "reqguard",
    about = "Validate JSON request payloads against declarative rule bundles",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON payload against a rule bundle
    Validate {
        /// Rule bundle (YAML or JSON)
        #[arg(short, long, env = "REQGUARD_RULES")]
        rules: PathBuf,

        /// JSON payload to validate ('-' reads stdin)
        #[arg(short, long, default_value = "-")]
        data: PathBuf,

        /// Output format for violations
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Re-check parent array bounds for every child visit
        #[arg(long)]
        legacy_child_cardinality: bool,
    },

    /// Print the normalized rule bundle as JSON
    Inspect {
        /// Rule bundle (YAML or JSON)
        #[arg(short, long, env = "REQGUARD_RULES")]
        rules: PathBuf,
    },

    /// Check a single Base64 payload ('data:<mime>;base64,...' or bare base64)
    Base64 {
        /// File holding the payload ('-' reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Maximum decoded size in KB
        #[arg(long)]
        max: Option<u64>,

        /// Comma-separated list of accepted MIME subtypes
        #[arg(long)]
        mimes: Option<String>,

        /// Field name used in messages
        #[arg(long, default_value = "Base64")]
        field: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            rules,
            data,
            format,
            legacy_child_cardinality,
        } => validate_command(&rules, &data, format, legacy_child_cardinality),
        Commands::Inspect { rules } => inspect_command(&rules),
        Commands::Base64 {
            input,
            max,
            mimes,
            field,
        } => base64_command(&input, max, mimes, &field),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("reqguard=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("reqguard=info"), // -v: info messages
        _ => EnvFilter::new("reqguard=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
