//! Setup wizard: writes a .env file with the OpenAI API key.
//!
//! Only needed for the local-file credential variant; hosted deployments
//! configure `OPENAI_API_KEY` in their secret store instead.

use counsel_core::CREDENTIAL_VAR;
use inquire::{Confirm, Password};
use std::fs;
use std::path::Path;

pub async fn run() -> anyhow::Result<()> {
    println!("Counsel setup\n");

    let env_path = Path::new(".env");

    if env_path.exists() {
        let overwrite = Confirm::new(".env file already exists. Overwrite?")
            .with_default(false)
            .prompt()?;

        if !overwrite {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    let api_key = Password::new("Enter OpenAI API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .with_validator(inquire::required!())
        .prompt()?;

    fs::write(env_path, build_env_file(&api_key))?;

    println!("\nConfiguration saved to .env");
    println!("\nNext steps:");
    println!("  1. Run 'counsel doctor' to verify setup");
    println!("  2. Run 'counsel serve' and open the printed address");

    Ok(())
}

fn build_env_file(api_key: &str) -> String {
    format!(
        "# Counsel environment variables\n\n\
         # OpenAI API key (required)\n\
         {CREDENTIAL_VAR}={api_key}\n\n\
         # Optional: custom API endpoint (Azure OpenAI, proxies)\n\
         # OPENAI_BASE_URL=\n\n\
         # Optional: server overrides\n\
         # COUNSEL_SERVER__HOST=127.0.0.1\n\
         # COUNSEL_SERVER__PORT=8787\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_contains_key() {
        let content = build_env_file("sk-test-1234");
        assert!(content.contains("OPENAI_API_KEY=sk-test-1234"));
        assert!(content.contains("OPENAI_BASE_URL"));
    }
}
