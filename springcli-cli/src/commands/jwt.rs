use colored::Colorize;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::prompt::Prompter;

/// Directory the key pair is written to, relative to the project root.
pub const KEY_DIR: &str = "jwt";
pub const PRIVATE_KEY_FILE: &str = "private.key";
pub const PUBLIC_KEY_FILE: &str = "public.key";
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Generate an RSA key pair for signing JWTs.
///
/// Writes `jwt/private.key` and `jwt/public.key` as PKCS#1 PEM. When both
/// files already exist the user is asked before they are replaced, unless
/// `force` is set; declining is an error and leaves the keys untouched.
pub fn run(force: bool, prompter: &mut dyn Prompter) -> Result<(), Box<dyn std::error::Error>> {
    generate_key_pair(force, prompter, DEFAULT_KEY_BITS)
}

/// [`run`] with an explicit modulus size.
pub fn generate_key_pair(
    force: bool,
    prompter: &mut dyn Prompter,
    bits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new(KEY_DIR);
    let private_path = dir.join(PRIVATE_KEY_FILE);
    let public_path = dir.join(PUBLIC_KEY_FILE);

    if private_path.exists() && public_path.exists() && !force {
        prompter.show(&format!("{} RSA keys already exist in {}/", "!".yellow(), KEY_DIR));
        if !prompter.confirm("Overwrite the existing keys?")? {
            return Err("Key generation cancelled, existing keys kept".into());
        }
    }

    fs::create_dir_all(dir)?;

    debug!(bits, "Generating RSA key pair");
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, bits)?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = private_key.to_pkcs1_pem(LineEnding::LF)?;
    let public_pem = public_key.to_pkcs1_pem(LineEnding::LF)?;

    fs::write(&private_path, private_pem.as_bytes())?;
    fs::write(&public_path, public_pem.as_bytes())?;

    println!(
        "{} Generated RSA key pair: {}, {}",
        "✓".green(),
        private_path.display().to_string().cyan(),
        public_path.display().to_string().cyan()
    );

    Ok(())
}
