use anyhow::Result;

use crate::config::Config;
use crate::connector_fs;

pub fn list_sources(config: &Config) -> Result<()> {
    let dir = &config.source.dir;

    println!("{:<40} {:<12} FILES", "SOURCE DIR", "STATUS");

    if dir.exists() {
        let count = connector_fs::scan_source_dir(config)
            .map(|files| files.len())
            .unwrap_or(0);
        println!("{:<40} {:<12} {}", dir.display().to_string(), "OK", count);
    } else {
        println!(
            "{:<40} {:<12} -",
            dir.display().to_string(),
            "NOT FOUND"
        );
    }

    Ok(())
}
