// src/gen.rs
//
// Synthetic match generator: plausible round-by-round numbers for two boxers,
// with the significant/head/body/jab splits and ring control summing to 100
// per round. Used for the bundled sample dataset and for demos.

use std::error::Error;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::csv::{write_row, Delim};
use crate::file::ensure_directory;
use crate::records::RoundRecord;

/// Generate one fight with a caller-supplied RNG (seedable for tests).
pub fn generate_with<R: Rng>(
    rng: &mut R,
    boxer_a: &str,
    boxer_b: &str,
    num_rounds: u32,
) -> Vec<RoundRecord> {
    let mut records = Vec::with_capacity(num_rounds as usize * 2);

    for round in 1..=num_rounds {
        // Boxer A's ring control decides both; they sum to 100 per round.
        let control_a = (rng.gen_range(300..=700) as f64) / 10.0;

        for (boxer, control) in [(boxer_a, control_a), (boxer_b, 100.0 - control_a)] {
            let thrown = rng.gen_range(40u32..=80);
            let landed = rng.gen_range(thrown / 5..=thrown / 2);

            let sig_thrown = rng.gen_range(thrown * 2 / 5..=thrown * 7 / 10);
            let mut sig_landed = rng.gen_range(landed / 2..=landed);
            // Landed cannot exceed thrown, but keep some minimum landing rate.
            sig_landed = sig_landed.min(sig_thrown).max(sig_thrown / 10);

            let head = rng.gen_range(sig_landed * 2 / 5..=sig_landed * 4 / 5);
            let body = sig_landed - head;

            // Power punches are the significant ones; the rest are jabs.
            let (jabs, power) = if landed >= sig_landed {
                (landed - sig_landed, sig_landed)
            } else {
                (0, landed)
            };

            records.push(RoundRecord {
                round,
                boxer: s!(boxer),
                punches_thrown: thrown,
                punches_landed: landed,
                sig_punches_thrown: sig_thrown,
                sig_punches_landed: sig_landed,
                head_punches_landed: head,
                body_punches_landed: body,
                jabs_landed: jabs,
                power_punches_landed: power,
                ring_control_pct: control,
            });
        }
    }

    records
}

pub fn generate(boxer_a: &str, boxer_b: &str, num_rounds: u32) -> Vec<RoundRecord> {
    let mut rng = StdRng::from_entropy();
    generate_with(&mut rng, boxer_a, boxer_b, num_rounds)
}

/// Write generated records as a loadable CSV (full schema, header included).
pub fn write_csv(path: &Path, records: &[RoundRecord]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    let headers: Vec<String> = RoundRecord::HEADERS.iter().map(|h| s!(*h)).collect();
    write_row(&mut buf, &headers, Delim::Csv)?;
    for r in records {
        write_row(&mut buf, &r.to_row(), Delim::Csv)?;
    }
    std::fs::write(path, buf)?;

    logf!(
        "Gen: wrote {} rows to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
