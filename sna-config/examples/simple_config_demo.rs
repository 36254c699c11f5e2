//! Simple configuration demo
//!
//! Resolves the provider configuration from a YAML file plus the process
//! environment and prints either the result or every diagnostic.
//!
//! ```sh
//! SNA_PASSWORD=secret cargo run -p sna-config --example simple_config_demo
//! ```

use sna_config::{ConfigLoader, ConfigResolver, ConfigResult};
use std::fs;

fn main() -> ConfigResult<()> {
    let temp_dir = tempfile::tempdir()?;
    let config_path = temp_dir.path().join("provider.yaml");
    fs::write(
        &config_path,
        r#"
host: "https://sna.example.com"
username: "admin"
"#,
    )?;

    let input = ConfigLoader::new().from_file(&config_path)?;

    match ConfigResolver::from_process_env().resolve(&input) {
        Ok(resolution) => {
            println!("Configuration resolved: {:?}", resolution.config);
            for warning in resolution.diagnostics.warnings() {
                println!("{}", warning);
            }
        }
        Err(diagnostics) => {
            println!("Configuration rejected with {} diagnostic(s):", diagnostics.len());
            println!("{}", diagnostics);
        }
    }

    Ok(())
}
