mod inspect;
mod payload;
mod validate;

pub use inspect::inspect_command;
pub use payload::base64_command;
pub use validate::{OutputFormat, validate_command};

use anyhow::Result;
use reqguard::RuleBundle;
use reqguard::loader::BundleLoader;
use std::path::Path;

/// Load a bundle, printing the full diagnostic before failing
fn load_bundle(path: &Path) -> Result<RuleBundle> {
    let loader = BundleLoader::new()?;
    loader.load_file(path).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        anyhow::anyhow!(
            "Could not load rule bundle {} (see detailed errors above)",
            path.display()
        )
    })
}
