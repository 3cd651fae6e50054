// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Byte lines of a FastA file. Any of "\n", "\r\n" or a lone "\r" ends a line (old Mac files use
// the latter), and no decoding is done: labels and sequences may hold arbitrary bytes.

use std::io::{self, BufRead};

pub struct FastaLines<R> {
    reader: R,
}

impl<R: BufRead> FastaLines<R> {
    pub fn new(reader: R) -> Self {
        FastaLines { reader }
    }
}

// Appends the next line (terminator excluded) to `line`. Returns the number of bytes consumed,
// terminator included; 0 means end of input.
fn read_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<usize> {
    let mut consumed = 0;
    loop {
        let (terminator, used) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(consumed);
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    line.extend_from_slice(&available[..i]);
                    (Some(available[i]), i + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };
        reader.consume(used);
        consumed += used;
        match terminator {
            Some(b'\r') => {
                // "\r\n" is a single terminator.
                if reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                    consumed += 1;
                }
                return Ok(consumed);
            }
            Some(_) => return Ok(consumed),
            None => {}
        }
    }
}

impl<R: BufRead> Iterator for FastaLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match read_line(&mut self.reader, &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}
