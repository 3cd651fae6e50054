// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

fn main() -> ExitCode {
    match relabel_fasta::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("relabel_fasta: {}", e);
            ExitCode::FAILURE
        }
    }
}
