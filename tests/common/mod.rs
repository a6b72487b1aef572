#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` well-formed `id,name,score` lines with scores cycling 0..=100.
pub fn generate_scores(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    for i in 1..=rows {
        let score = (i * 37) % 101;
        wtr.write_record([i.to_string(), format!("Student {i}"), score.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_lines(path: &Path, lines: &[&str]) -> Result<(), Error> {
    std::fs::write(path, lines.join("\n"))
}
