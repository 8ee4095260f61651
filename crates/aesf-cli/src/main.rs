//! Command-line interface for `aesf`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aesf_stream::{Padding, StreamCipher, StreamConfig};
use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Maximum key length in characters (one byte each).
const MAX_KEY_CHARS: usize = aesf_core::KEY_SIZE;

/// AES-128 file encryptor (ECB, 0x01-padded keys).
#[derive(Parser)]
#[command(name = "aesf", version, author, about = "AES-128 file encryptor")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc(FileArgs),
    /// Decrypt a file produced by `enc`.
    Dec(FileArgs),
    /// Run a local demo: random key and data, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct FileArgs {
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file (defaults to `encrypted_<name>` / `decrypted_<name>`).
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    #[command(flatten)]
    key: KeyArgs,
    /// Final-block padding scheme.
    #[arg(long, default_value_t = Padding::Legacy)]
    padding: Padding,
    /// Worker threads used for the blocks.
    #[arg(long, default_value_t = 1)]
    workers: usize,
    /// Overwrite the output file if it exists.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key text: at most 16 characters, each at most U+00FF.
    #[arg(long, value_name = "TEXT")]
    key: Option<String>,
    /// Key bytes as at most 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

impl KeyArgs {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        match (&self.key, &self.key_hex) {
            (Some(text), _) => parse_key_text(text),
            (None, Some(hex_str)) => parse_key_hex(hex_str),
            (None, None) => bail!("a key is required"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc(args) => cmd_enc(&args),
        Commands::Dec(args) => cmd_dec(&args),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_cipher(args: &FileArgs) -> Result<StreamCipher> {
    let key = args.key.to_bytes()?;
    let config = StreamConfig {
        padding: args.padding,
        workers: args.workers,
    };
    StreamCipher::with_config(&key, config).context("expand key")
}

fn cmd_enc(args: &FileArgs) -> Result<()> {
    let cipher = build_cipher(args)?;
    let data = fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let out = resolve_output(&args.input, args.output.as_deref(), "encrypted_")?;
    let ciphertext = cipher.encrypt(&data);
    write_output(&out, &ciphertext, args.force)?;
    info!(
        "encrypted {} ({} bytes) -> {} ({} bytes)",
        args.input.display(),
        data.len(),
        out.display(),
        ciphertext.len()
    );
    Ok(())
}

fn cmd_dec(args: &FileArgs) -> Result<()> {
    let cipher = build_cipher(args)?;
    let data = fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let out = resolve_output(&args.input, args.output.as_deref(), "decrypted_")?;
    let plaintext = cipher
        .decrypt(&data)
        .with_context(|| format!("decrypt {}", args.input.display()))?;
    if cipher.padding() == Padding::Legacy && plaintext.len() + 16 <= data.len() {
        warn!("legacy unpadding removed a full block or more; trailing 0x00/0x01 bytes were lost");
    }
    write_output(&out, &plaintext, args.force)?;
    info!(
        "decrypted {} ({} bytes) -> {} ({} bytes)",
        args.input.display(),
        data.len(),
        out.display(),
        plaintext.len()
    );
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; rng.gen_range(0..=MAX_KEY_CHARS)];
    rng.fill_bytes(&mut key);
    let mut data = vec![0u8; rng.gen_range(1..=64)];
    rng.fill_bytes(&mut data);

    let config = StreamConfig {
        padding: Padding::Pkcs7,
        workers: 1,
    };
    let cipher = StreamCipher::with_config(&key, config).context("expand key")?;
    let ciphertext = cipher.encrypt(&data);
    let decrypted = cipher.decrypt(&ciphertext).context("decrypt demo data")?;

    println!("demo key: {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(&data));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != data {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

/// Maps each character to one byte, rejecting code points above U+00FF.
fn parse_key_text(text: &str) -> Result<Vec<u8>> {
    let chars = text.chars().count();
    ensure!(
        chars <= MAX_KEY_CHARS,
        "key is too long: {chars} characters (at most {MAX_KEY_CHARS})"
    );
    text.chars()
        .map(|c| u8::try_from(c).map_err(|_| anyhow::anyhow!("key character {c:?} is above U+00FF")))
        .collect()
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    ensure!(
        bytes.len() <= aesf_core::KEY_SIZE,
        "key must be at most 16 bytes (32 hex characters)"
    );
    Ok(bytes)
}

fn resolve_output(input: &Path, output: Option<&Path>, prefix: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }
    let name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?;
    let mut out_name = std::ffi::OsString::from(prefix);
    out_name.push(name);
    Ok(input.with_file_name(out_name))
}

fn write_output(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (pass --force to overwrite)", path.display());
    }
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
