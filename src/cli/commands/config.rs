//! Config file helpers.

use crate::config;

/// Print the config file location
pub fn cmd_config_path() -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not created yet)" };
            println!("{}{}", path.display(), state);
        }
        None => println!("Could not determine the config directory on this system."),
    }
    Ok(())
}

/// Write the default config, refusing to clobber an existing file unless forced
pub fn cmd_config_init(force: bool) -> anyhow::Result<()> {
    if let Some(path) = config::config_path()
        && path.exists()
        && !force
    {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it with the defaults.");
        return Ok(());
    }

    let path = config::save(&config::Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
