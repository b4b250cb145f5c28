use anyhow::Result;
use std::path::Path;

pub fn inspect_command(rules_path: &Path) -> Result<()> {
    let bundle = super::load_bundle(rules_path)?;
    let json = serde_json::to_string_pretty(&bundle)?;
    println!("{json}");

    Ok(())
}
