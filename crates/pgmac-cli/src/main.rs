//! Command-line interface for `present-gmac-rs`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gmac::{generate_iv, generate_iv_with, Gmac};
use present_core::Present;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// PRESENT + GMAC CLI.
#[derive(Parser)]
#[command(
    name = "pgmac",
    version,
    author,
    about = "PRESENT block cipher and GMAC-style tag CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt 8-byte blocks from a file (ECB).
    Enc {
        /// Key as 20 hex characters (80-bit) or 32 hex characters (128-bit).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (must be a multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Number of rounds.
        #[arg(long, default_value_t = 32)]
        rounds: usize,
    },
    /// Decrypt 8-byte blocks from a file (ECB).
    Dec {
        /// Key as 20 hex characters (80-bit) or 32 hex characters (128-bit).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file (ciphertext, multiple of 8 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Number of rounds.
        #[arg(long, default_value_t = 32)]
        rounds: usize,
    },
    /// Compute a GMAC-style tag for an integer message.
    Mac {
        /// 16-bit MAC key.
        #[arg(long)]
        key: u16,
        /// Message as a decimal or 0x-prefixed integer (up to 128 bits).
        #[arg(long)]
        text: String,
        /// Explicit IV; a compliant one is generated when omitted.
        #[arg(long)]
        iv: Option<u16>,
        /// Optional RNG seed for reproducible IV generation.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Emit a compliant IV (low nibble forced to 0b0001).
    GenIv {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key, encrypt random blocks, decrypt back, tag.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
            rounds,
        } => cmd_crypt(&key_hex, &input, &output, rounds, true),
        Commands::Dec {
            key_hex,
            input,
            output,
            rounds,
        } => cmd_crypt(&key_hex, &input, &output, rounds, false),
        Commands::Mac {
            key,
            text,
            iv,
            seed,
        } => cmd_mac(key, &text, iv, seed),
        Commands::GenIv { seed } => {
            println!("{}", make_iv(seed));
            Ok(())
        }
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_crypt(
    key_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
    rounds: usize,
    encrypt: bool,
) -> Result<()> {
    let cipher = parse_cipher(key_hex, rounds)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % cipher.block_size() != 0 {
        bail!("input length must be a multiple of 8 bytes");
    }
    let result = if encrypt {
        cipher.encrypt(&data)
    } else {
        cipher.decrypt(&data)
    };
    let result = result.context("transform blocks")?;
    fs::write(output_path, result).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_mac(key: u16, text: &str, iv: Option<u16>, seed: Option<u64>) -> Result<()> {
    let text = parse_u128(text)?;
    let iv = iv.unwrap_or_else(|| make_iv(seed));
    let mut gmac = Gmac::new(key);
    let tag = gmac.generate(text, iv);
    println!("iv: {iv}");
    println!("tag: {tag}");
    println!("hash state: {}", gmac.state());
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 10];
    rng.fill_bytes(&mut key);
    let cipher = Present::new(&key).expect("80-bit key is supported");

    let mut blocks = [0u8; 32];
    rng.fill_bytes(&mut blocks);
    let ciphertext = cipher.encrypt(&blocks).context("encrypt demo blocks")?;
    let decrypted = cipher.decrypt(&ciphertext).context("decrypt demo blocks")?;

    println!("demo key: {}", hex::encode(key));
    println!("plaintext: {}", hex::encode(blocks));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != blocks {
        bail!("demo roundtrip failed");
    }

    let mac_key = u16::from_be_bytes([key[0], key[1]]);
    let iv = generate_iv_with(&mut rng);
    let mut gmac = Gmac::new(mac_key);
    let text = u128::from(u64::from_be_bytes(
        blocks[..8].try_into().expect("slice length is eight"),
    ));
    println!("tag({text}): {}", gmac.generate(text, iv));
    Ok(())
}

fn parse_cipher(key_hex: &str, rounds: usize) -> Result<Present> {
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    if bytes.len() != 10 && bytes.len() != 16 {
        bail!("key must be 10 bytes (20 hex characters) or 16 bytes (32 hex characters)");
    }
    Present::with_rounds(&bytes, rounds).context("construct cipher")
}

fn parse_u128(text: &str) -> Result<u128> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex_digits) => u128::from_str_radix(hex_digits, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("parse message {text:?}"))
}

fn make_iv(seed: Option<u64>) -> u16 {
    match seed {
        Some(_) => generate_iv_with(&mut seeded_rng(seed)),
        None => generate_iv(),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
