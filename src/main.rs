//! vaultcrypt: encrypt and decrypt files in the vault container format
//!
//! Commands:
//!   encrypt <path> [-o <out>]   - write <path>.enc (or <out>)
//!   decrypt <path> [-o <out>]   - write <path minus .enc>.dec (or <out>)
//!   inspect <path>              - print a container's header without decrypting

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vaultcrypt_rs::aliases::PasswordString;
use vaultcrypt_rs::consts::{BLOCK_SIZE, DEFAULT_CHUNK_SIZE, HEADER_LEN};
use vaultcrypt_rs::file_ops::{decrypted_path_for, encrypted_path_for};
use vaultcrypt_rs::{decrypt_file_to, encrypt_file_to, read_header, CodecConfig};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "vaultcrypt",
    version,
    about = "Offline file encryption (AES-256-CBC, vault container format)",
    long_about = "vaultcrypt: encrypt and decrypt files with a password. \
                  Containers carry no integrity check: a wrong password yields garbage, not an error."
)]
struct Cli {
    /// Password (prompted for on the terminal when not given)
    #[arg(long, global = true, env = "VAULTCRYPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Streaming chunk size in bytes (non-zero multiple of 16)
    #[arg(long, global = true, env = "VAULTCRYPT_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt a file into a container
    Encrypt {
        /// File to encrypt
        path: PathBuf,
        /// Output path (default: <path>.enc)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Decrypt a container
    Decrypt {
        /// Container to decrypt
        path: PathBuf,
        /// Output path (default: .enc replaced by .dec, or .dec appended)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show a container's header (no password needed)
    Inspect {
        /// Container to inspect
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = CodecConfig::new().with_chunk_size(cli.chunk_size);
    config.validate().context("invalid --chunk-size")?;

    match &cli.command {
        Commands::Encrypt { path, output } => {
            let dst = output.clone().unwrap_or_else(|| encrypted_path_for(path));
            let password = read_password(cli.password.clone())?;
            encrypt_file_to(path, &dst, &password, &config)
                .with_context(|| format!("failed to encrypt {}", path.display()))?;
            if !cli.quiet {
                println!("Encrypted file saved as: {}", dst.display());
            }
        }
        Commands::Decrypt { path, output } => {
            let dst = output.clone().unwrap_or_else(|| decrypted_path_for(path));
            let password = read_password(cli.password.clone())?;
            decrypt_file_to(path, &dst, &password, &config)
                .with_context(|| format!("failed to decrypt {}", path.display()))?;
            if !cli.quiet {
                println!("Decrypted file saved as: {}", dst.display());
            }
        }
        Commands::Inspect { path } => inspect(path)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_password(given: Option<String>) -> Result<PasswordString> {
    let password = match given {
        Some(pw) => pw,
        None => rpassword::prompt_password("Password: ").context("failed to read password")?,
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }
    Ok(PasswordString::new(password))
}

fn inspect(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let file_len = file.metadata()?.len();
    let header = read_header(BufReader::new(file))
        .with_context(|| format!("{} is not a vault container", path.display()))?;

    let ciphertext_len = file_len.saturating_sub(HEADER_LEN as u64);
    let aligned = ciphertext_len % BLOCK_SIZE as u64 == 0;
    debug!(file_len, ciphertext_len, "inspected container");

    println!("file:            {}", path.display());
    println!("original size:   {} bytes", header.original_size);
    println!("iv:              {}", hex::encode(header.iv));
    println!("ciphertext:      {ciphertext_len} bytes");
    println!("block aligned:   {}", if aligned { "yes" } else { "no" });
    println!(
        "complete:        {}",
        if aligned && ciphertext_len >= header.original_size {
            "yes"
        } else {
            "no"
        }
    );
    Ok(())
}
