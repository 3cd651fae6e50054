// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

#[test]
fn prints_relabelled_fasta() {
    let output = utils::run_bin(&["tests/data/sized.fa", "OTU_", "--needsize"]);
    assert!(output.status.success());
    assert_eq!(
        ">OTU_1;size=10\nACGT\n>OTU_2;size=5\nTTTT\n",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn nosize_is_the_default() {
    let plain = utils::run_bin(&["tests/data/sized.fa", "OTU_"]);
    let nosize = utils::run_bin(&["--nosize", "tests/data/sized.fa", "OTU_"]);
    assert!(plain.status.success());
    assert!(nosize.status.success());
    assert_eq!(plain.stdout, nosize.stdout);
    assert_eq!(
        ">OTU_1\nACGT\n>OTU_2\nTTTT\n",
        String::from_utf8_lossy(&plain.stdout)
    );
}

#[test]
fn missing_size_fails_after_partial_output() {
    let output = utils::run_bin(&["tests/data/missing-size.fa", "OTU_", "--needsize"]);
    assert!(!output.status.success());
    assert_eq!(
        ">OTU_1;size=10\nACGT\n",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Couldn't locate 'size' in label: seq2;abundance=5"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn relabels_latin1_file_byte_for_byte() {
    let output = utils::run_bin(&["tests/data/latin1.fa", "OTU_", "--needsize"]);
    assert!(output.status.success());
    assert_eq!(
        b">OTU_1;size=3\nAC\xb5GT\n>OTU_2;size=4\nTT\n".to_vec(),
        output.stdout
    );
}

#[test]
fn relabels_cr_only_file() {
    let output = utils::run_bin(&["tests/data/cr.fa", "OTU_"]);
    assert!(output.status.success());
    assert_eq!(
        ">OTU_1\nACGT\n>OTU_2\nGG\n",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn missing_input_file_fails() {
    let output = utils::run_bin(&["tests/data/no-such-file.fa", "OTU_"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-file.fa"));
}

#[test]
fn missing_prefix_is_a_usage_error() {
    let output = utils::run_bin(&["tests/data/sized.fa"]);
    assert!(!output.status.success());
}
