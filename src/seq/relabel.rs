// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Single-pass relabeling of FastA records: label lines become <PREFIX><N> (optionally with the
// record's size= annotation), blank lines are dropped, and everything else is echoed. Lines are
// handled as bytes; only the text API (relabel()) deals in Strings.

use std::io::{self, BufRead};
use std::iter::FusedIterator;

use log::debug;

use crate::errors::RelabelError;
use crate::seq::label::{find_size_field, format_label, label_payload};
use crate::seq::lines::FastaLines;

// Numbering state, kept apart from the line source so both can be borrowed at once.
struct Labeller {
    prefix: String,
    include_size: bool,
    nlabel: usize,
}

impl Labeller {
    // None means "no output for this line" (blank line).
    fn relabel_line(&mut self, line: &[u8]) -> Option<Result<Vec<u8>, RelabelError>> {
        if line.is_empty() {
            return None;
        }
        let Some(label) = label_payload(line) else {
            return Some(Ok(line.to_vec()));
        };
        self.nlabel += 1;
        let size = if self.include_size {
            match find_size_field(label) {
                Some(field) => Some(field),
                None => {
                    return Some(Err(RelabelError::MissingSizeAnnotation {
                        label: String::from_utf8_lossy(label).into_owned(),
                    }))
                }
            }
        } else {
            None
        };
        let new_label = format_label(&self.prefix, self.nlabel, size);
        debug!(
            "record {}: '{}' -> '{}'",
            self.nlabel,
            String::from_utf8_lossy(label),
            String::from_utf8_lossy(&new_label)
        );
        Some(Ok(new_label))
    }
}

/// Lazy relabeling iterator over byte lines. Yields one output line per non-blank input line;
/// after the first error (read failure or missing size annotation) it yields nothing more.
pub struct Relabeler<I> {
    lines: I,
    labeller: Labeller,
    done: bool,
}

impl<I> Relabeler<I> {
    pub fn new(lines: I, prefix: &str, include_size: bool) -> Self {
        Relabeler {
            lines,
            labeller: Labeller {
                prefix: String::from(prefix),
                include_size,
                nlabel: 0,
            },
            done: false,
        }
    }

    /// Number of label lines seen so far.
    pub fn records(&self) -> usize {
        self.labeller.nlabel
    }
}

// Removes one line terminator ("\n", "\r\n" or "\r"), if any.
fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(l) => l.strip_suffix(b"\r").unwrap_or(l),
        None => line.strip_suffix(b"\r").unwrap_or(line),
    }
}

impl<I, L> Iterator for Relabeler<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: AsRef<[u8]>,
{
    type Item = Result<Vec<u8>, RelabelError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            let result = match line {
                Ok(l) => match self.labeller.relabel_line(strip_terminator(l.as_ref())) {
                    Some(r) => r,
                    None => continue,
                },
                Err(e) => Err(RelabelError::from(e)),
            };
            if result.is_err() {
                self.done = true;
            }
            return Some(result);
        }
        self.done = true;
        None
    }
}

impl<I, L> FusedIterator for Relabeler<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: AsRef<[u8]>,
{
}

// Views a text line as bytes.
struct TextLine<S>(S);

impl<S: AsRef<str>> AsRef<[u8]> for TextLine<S> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref().as_bytes()
    }
}

// Output built from UTF-8 input only splits it on ASCII bytes, so it stays valid UTF-8.
fn into_text(line: Vec<u8>) -> String {
    String::from_utf8(line).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Relabels in-memory text lines (with or without their trailing newline).
pub fn relabel<I, S>(
    lines: I,
    prefix: &str,
    include_size: bool,
) -> impl Iterator<Item = Result<String, RelabelError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines
        .into_iter()
        .map(|l| Ok::<TextLine<S>, io::Error>(TextLine(l)));
    Relabeler::new(lines, prefix, include_size).map(|r| r.map(into_text))
}

/// Relabels the lines of a buffered reader, as raw bytes. "\n", "\r\n" and "\r" all end a line;
/// read errors are yielded as `RelabelError::Io`.
pub fn relabel_reader<R: BufRead>(
    reader: R,
    prefix: &str,
    include_size: bool,
) -> Relabeler<FastaLines<R>> {
    Relabeler::new(FastaLines::new(reader), prefix, include_size)
}
