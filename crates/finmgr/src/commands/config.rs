use std::path::Path;

use color_eyre::eyre::bail;

use crate::config::Config;

/// Write the default configuration into `data_dir`
pub fn init(data_dir: &Path, force: bool) -> color_eyre::Result<String> {
    let path = Config::path(data_dir);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let path = Config::default().save(data_dir)?;
    tracing::info!(path = %path.display(), "configuration written");
    Ok(format!("Wrote {}\n", path.display()))
}
