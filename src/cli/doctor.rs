//! Setup diagnostics: verifies the credential and config are usable
//! before the server is started for real.

use counsel_core::{ApiCredential, CREDENTIAL_VAR};
use std::path::Path;

pub async fn run() -> anyhow::Result<()> {
    println!("Counsel doctor\n");

    let mut all_ok = true;

    all_ok &= check_env_file();
    all_ok &= check_credential();
    all_ok &= check_config();

    println!();
    if all_ok {
        println!("All checks passed. Run 'counsel serve' to start.");
    } else {
        println!("Some checks failed. Fix the issues above and re-run.");
        std::process::exit(1);
    }

    Ok(())
}

fn check_env_file() -> bool {
    print!("Checking .env file... ");

    if Path::new(".env").exists() {
        println!("found");
        true
    } else {
        // Not fatal on its own: hosted deployments set the variable directly
        println!("not found (fine if {CREDENTIAL_VAR} is set by the environment)");
        true
    }
}

fn check_credential() -> bool {
    print!("Checking {CREDENTIAL_VAR}... ");

    match ApiCredential::from_env() {
        Ok(_) => {
            println!("ok");
            true
        }
        Err(e) => {
            println!("missing");
            println!("  {e}");
            false
        }
    }
}

fn check_config() -> bool {
    print!("Checking configuration... ");

    match crate::server::load_config() {
        Ok(config) => {
            println!("ok ({}:{})", config.server.host, config.server.port);
            true
        }
        Err(e) => {
            println!("invalid");
            println!("  {e}");
            false
        }
    }
}
