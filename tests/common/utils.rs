// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::BufReader;
use std::process::{Command, Output};

use relabel_fasta::{errors::RelabelError, relabel_reader};

// Relabels a fixture file and joins the output lines with '\n'.
#[allow(dead_code)]
pub fn relabel_file_bytes(
    path: &str,
    prefix: &str,
    include_size: bool,
) -> Result<Vec<u8>, RelabelError> {
    let file = File::open(path).expect("Test file not found");
    let lines = relabel_reader(BufReader::new(file), prefix, include_size)
        .collect::<Result<Vec<Vec<u8>>, RelabelError>>()?;
    Ok(lines.join(&b'\n'))
}

// Same as relabel_file_bytes(), for fixtures with UTF-8 output.
#[allow(dead_code)]
pub fn relabel_file(path: &str, prefix: &str, include_size: bool) -> Result<String, RelabelError> {
    let bytes = relabel_file_bytes(path, prefix, include_size)?;
    Ok(String::from_utf8(bytes).expect("UTF-8 output"))
}

// Runs the relabel_fasta binary with the given arguments.
#[allow(dead_code)]
pub fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relabel_fasta"))
        .args(args)
        .output()
        .expect("running relabel_fasta")
}
