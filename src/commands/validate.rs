use anyhow::Result;
use colored::Colorize;
use reqguard::Violation;
use reqguard::loader::read_payload;
use reqguard::validation::ValidationFailed;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn validate_command(
    rules_path: &Path,
    data_path: &Path,
    format: OutputFormat,
    legacy_child_cardinality: bool,
) -> Result<()> {
    let mut bundle = super::load_bundle(rules_path)?;
    if legacy_child_cardinality {
        bundle.options.legacy_child_cardinality = true;
    }

    let data = read_payload(data_path).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        anyhow::anyhow!("Could not read payload {}", data_path.display())
    })?;

    debug!("Validating {} against {}", data_path.display(), rules_path.display());
    let violations = bundle
        .validator()
        .validate(&data, &bundle.rules, &bundle.response_codes());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&violations)?),
        OutputFormat::Text => print_text(&violations),
    }

    ValidationFailed::check(violations)?;
    Ok(())
}

fn print_text(violations: &[Violation]) {
    if violations.is_empty() {
        println!("✅ Payload is valid");
        return;
    }

    for violation in violations {
        let code = violation
            .code
            .as_deref()
            .map(|code| format!("[{code}] ").yellow().to_string())
            .unwrap_or_default();
        println!(
            "{} {code}{} {}",
            "✗".red(),
            violation.message,
            format!("({})", violation.kind).dimmed()
        );
    }
}
