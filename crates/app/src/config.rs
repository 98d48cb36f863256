//! Configuration for the framelink front-end.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults (including randomized defaults that are reproducible with a
//! seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Complete configuration for a simulator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Message to transmit (None = generate a sample)
    pub message: Option<String>,

    /// Payload bytes per row (m)
    pub row_bytes: usize,

    /// Per-bit flip probability
    pub flip_probability: f64,

    /// Generator polynomial as a '0'/'1' string
    pub generator: String,

    /// Random seed for the channel and generated defaults
    pub seed: u64,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments are provided, flip probability defaults to a
    /// randomized small value derived from the seed. If --seed is
    /// provided, the entire run is deterministic.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut message: Option<String> = None;
        let mut row_bytes: Option<usize> = None;
        let mut flip_probability: Option<f64> = None;
        let mut generator: Option<String> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--message" | "-m" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--message requires text".to_string());
                    }
                    message = Some(args[i].clone());
                }
                "--row-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--row-bytes requires a number".to_string());
                    }
                    row_bytes = Some(args[i].parse().map_err(|_| "invalid row-bytes")?);
                }
                "--prob" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--prob requires a number".to_string());
                    }
                    flip_probability = Some(args[i].parse().map_err(|_| "invalid probability")?);
                }
                "--no-noise" => {
                    flip_probability = Some(0.0);
                }
                "--gen" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen requires a bit string".to_string());
                    }
                    generator = Some(args[i].clone());
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        // Randomized default flip probability, biased toward small values
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let default_probability = {
            let r: f64 = rng.gen();
            (r * r * 0.05).min(0.05) // 0-5%, biased toward 0
        };

        Ok(Config {
            message,
            row_bytes: row_bytes.unwrap_or(2),
            flip_probability: flip_probability.unwrap_or(default_probability),
            generator: generator.unwrap_or_else(|| "10011".to_string()),
            seed,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Message: {}",
            self.message.as_deref().unwrap_or("(generate sample)")
        );
        println!("Row width: {} bytes", self.row_bytes);
        println!("Flip probability: {:.4}", self.flip_probability);
        println!("Generator polynomial: {}", self.generator);
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("framelink: link-layer framing simulator (Hamming + CRC over a noisy channel)");
    println!();
    println!("USAGE:");
    println!("    framelink [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --message, -m <TEXT>    Message to transmit (default: generate sample)");
    println!("    --row-bytes <N>         Payload bytes per Hamming row (default: 2)");
    println!("    --prob <P>              Per-bit flip probability 0.0-1.0");
    println!("                            (default: random 0-0.05, biased toward 0)");
    println!("    --no-noise              Disable channel noise (same as --prob 0)");
    println!("    --gen <BITS>            CRC generator polynomial (default: 10011)");
    println!("    --seed <N>              Random seed for determinism");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    framelink                               # Run with random defaults");
    println!("    framelink --seed 42                     # Deterministic run");
    println!("    framelink -m \"hello\" --row-bytes 1      # One character per row");
    println!("    framelink --no-noise --gen 1011         # Clean channel, CRC-3");
    println!();
}
