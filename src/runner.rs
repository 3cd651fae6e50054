// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::{self, stdout, BufRead, BufReader, BufWriter, Write},
};

use clap::Parser;
use log::{debug, info};

use crate::errors::RelabelError;
use crate::seq::relabel::relabel_reader;

const DESCRIPTION: &str = "Replace FASTA labels with new labels <PREFIX>1, <PREFIX>2, \
<PREFIX>3 ... (<PREFIX> is provided by the user via the command line).

Can be used to label OTUs as OTU_1, OTU_2 etc.";

// Stands for standard input in place of a file name.
const STDIN_FNAME: &str = "-";

#[derive(Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Cli {
    /// Input FASTA file ('-' for standard input)
    #[arg(value_name = "FASTA")]
    fasta: String,

    /// Prefix to use for labels in output
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// Include the size as part of the output label ('size=...' must be present in the input
    /// FASTA labels). Output labels will be '<PREFIX><NUMBER>;size=<SIZE>'
    #[arg(long = "needsize")]
    needsize: bool,

    /// Don't include the size as part of the output label (this is the default)
    #[arg(long = "nosize")]
    nosize: bool,
}

/// Writes the relabeled lines of `reader` to `out`, one per line, byte for byte, and returns the
/// number of records. Lines produced before an error are flushed before the error is returned.
pub fn write_relabelled<R: BufRead, W: Write>(
    reader: R,
    prefix: &str,
    include_size: bool,
    out: &mut W,
) -> Result<usize, RelabelError> {
    let mut relabeler = relabel_reader(reader, prefix, include_size);
    for line in relabeler.by_ref() {
        match line {
            Ok(l) => {
                out.write_all(&l)?;
                out.write_all(b"\n")?;
            }
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        }
    }
    out.flush()?;
    Ok(relabeler.records())
}

fn open_fasta(fname: &str) -> Result<File, RelabelError> {
    File::open(fname)
        .map_err(|e| RelabelError::Io(io::Error::new(e.kind(), format!("{}: {}", fname, e))))
}

pub fn run() -> Result<(), RelabelError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    if cli.nosize && !cli.needsize {
        // Nothing to do: sizes are left out by default.
        debug!("--nosize given");
    }
    let include_size = cli.needsize;
    info!(
        "Relabelling {} with prefix '{}' (include size: {})",
        cli.fasta, cli.prefix, include_size
    );

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    let nrecords = if cli.fasta == STDIN_FNAME {
        write_relabelled(io::stdin().lock(), &cli.prefix, include_size, &mut out)?
    } else {
        let fasta = open_fasta(&cli.fasta)?;
        write_relabelled(BufReader::new(fasta), &cli.prefix, include_size, &mut out)?
    };
    info!("Relabelled {} records", nrecords);

    Ok(())
}
