//! framelink: link-layer framing simulator front-end.
//!
//! Parses arguments, runs the encode -> corrupt -> decode pipeline once,
//! and prints the stage-by-stage trace.

mod config;
mod render;
mod sample;

use config::Config;
use framelink_core::crc::Generator;
use framelink_core::pipeline::{transmit_message, PipelineConfig};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(1);
        }
    };

    if config.print_config {
        config.print();
    }

    let message = config
        .message
        .clone()
        .unwrap_or_else(|| sample::generate_sample_message(config.seed, 32));

    let generator = match Generator::parse(&config.generator) {
        Ok(generator) => generator,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    let pipeline_config = PipelineConfig {
        row_bytes: config.row_bytes,
        flip_probability: config.flip_probability,
        generator,
        seed: config.seed,
    };

    match transmit_message(message.as_bytes(), &pipeline_config) {
        Ok(report) => render::print_report(message.as_bytes(), &report),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
