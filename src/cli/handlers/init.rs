use crate::config::{CONFIG_FILE_NAME, StoreBackend, StoreSettings, TodoConfig};
use anyhow::Result;
use colored::Colorize;

use crate::error::TodoError;

pub fn handle_init(backend: StoreBackend, path: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(TodoError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = TodoConfig {
        store: StoreSettings { backend, path },
        server: Default::default(),
    };
    config.save(&config_path)?;

    println!(
        "{} relay-todo project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    match backend {
        StoreBackend::File => println!("  Data:   {}", config.data_path(&cwd).display()),
        StoreBackend::Memory => println!("  Data:   in memory (not persisted)"),
    }

    Ok(())
}
