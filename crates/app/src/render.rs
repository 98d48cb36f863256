//! Stage-by-stage rendering of a transmission report.
//!
//! The core exposes structured artifacts (bit sequences, roles, toggle
//! mask, per-row outcomes); this module turns them into a plain-text
//! trace. Roles that a terminal UI would colorize are shown as marker
//! lines under the bit strings instead: `c` for check bits, `C` for the
//! CRC span, `^` for bits the channel flipped.

use framelink_core::bits::bits_to_string;
use framelink_core::hamming::{is_check_position, Correction};
use framelink_core::pipeline::{BitRole, TransmissionReport};

fn role_char(role: BitRole) -> char {
    match role {
        BitRole::Data => '.',
        BitRole::Check => 'c',
        BitRole::Crc => 'C',
    }
}

/// Print the full stage-by-stage trace of one run.
pub fn print_report(original: &[u8], report: &TransmissionReport) {
    let params = &report.params;

    println!(
        "data string after padding: {}",
        String::from_utf8_lossy(&report.padded_message)
    );
    println!();

    println!("data block ({} characters per row):", params.row_bytes);
    for row in report.data_bits.chunks(params.data_bits()) {
        println!("{}", bits_to_string(row));
    }
    println!();

    println!("data blocks after adding check bits (c = check position):");
    let check_marks: String = (1..=params.n_cols)
        .map(|col| if is_check_position(col) { 'c' } else { '.' })
        .collect();
    println!("{check_marks}");
    for block in &report.encoded_blocks {
        println!("{}", bits_to_string(&block[1..]));
    }
    println!();

    println!("frame after column-wise serialization:");
    println!("{}", bits_to_string(&report.frame));
    println!();

    println!("sent frame with CRC checksum (C = CRC span):");
    println!("{}", bits_to_string(&report.sent_frame));
    let roles: String = report
        .sent_frame_roles()
        .into_iter()
        .map(role_char)
        .collect();
    println!("{roles}");
    println!();

    println!("received frame (^ = flipped in transit):");
    println!("{}", bits_to_string(&report.received.bits));
    let flips: String = report
        .received
        .toggled
        .iter()
        .map(|&t| if t { '^' } else { ' ' })
        .collect();
    println!("{flips}");
    println!();

    if report.crc_ok {
        println!("CRC check: no error detected");
    } else {
        println!("CRC check: error detected");
    }
    println!();

    println!("per-row correction:");
    for outcome in &report.rows {
        match outcome.correction {
            Correction::Clean => println!("  row {}: clean", outcome.row),
            Correction::Corrected(pos) => {
                println!("  row {}: corrected bit at position {}", outcome.row, pos)
            }
            Correction::OutOfRange(syndrome) => println!(
                "  row {}: syndrome {} out of range, left uncorrected",
                outcome.row, syndrome
            ),
        }
    }
    println!();

    println!("decoded message: {}", report.decoded_text());
    println!();

    print_summary(original, report);
}

/// Print the final verdict and channel statistics.
pub fn print_summary(original: &[u8], report: &TransmissionReport) {
    let stats = &report.channel_stats;

    println!("=== Summary ===");
    println!(
        "Bits sent: {}, flipped: {} ({:.2}%)",
        stats.bits_sent,
        stats.bits_flipped,
        stats.flip_rate() * 100.0
    );

    let corrected = report.rows.iter().filter(|r| r.correction.applied()).count();
    let out_of_range = report
        .rows
        .iter()
        .filter(|r| matches!(r.correction, Correction::OutOfRange(_)))
        .count();
    println!(
        "Rows: {}, corrected: {}, beyond correction: {}",
        report.n_rows(),
        corrected,
        out_of_range
    );

    if report.decoded_message == original {
        println!("✓ Message recovered exactly");
    } else {
        println!("✗ Decoded message differs from the original");
    }
}
