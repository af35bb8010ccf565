use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use ms2parse::{Ms2Document, ParserConfig};

/// Export a parsed MS2 file as JSON
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
    config: &ParserConfig,
) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("Input file does not exist: {}", file.display());
    }

    let doc = ms2parse::parse_with_config(&file, config).context("Failed to parse MS2 file")?;

    match output {
        Some(path) => {
            let out = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_json(BufWriter::new(out), &doc, pretty)?;
            info!("Wrote {} scans to {}", doc.scans.len(), path.display());
        }
        None => write_json(io::stdout().lock(), &doc, pretty)?,
    }

    Ok(())
}

fn write_json<W: Write>(mut writer: W, doc: &Ms2Document, pretty: bool) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, doc)
    } else {
        serde_json::to_writer(&mut writer, doc)
    };
    written.context("Failed to serialize document")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
