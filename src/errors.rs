// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum RelabelError {
    Io(io::Error),
    // A label line has no ';'-separated field starting with "size=". Holds the trimmed label.
    MissingSizeAnnotation { label: String },
}

// Required for run() to return Result<()> and for '?' to work on I/O calls.

impl From<io::Error> for RelabelError {
    fn from(e: io::Error) -> Self {
        RelabelError::Io(e)
    }
}

impl fmt::Display for RelabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelabelError::Io(e) => write!(f, "I/O error: {}", e),
            RelabelError::MissingSizeAnnotation { label } => {
                write!(f, "Couldn't locate 'size' in label: {}", label)
            }
        }
    }
}

impl error::Error for RelabelError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RelabelError::Io(e) => Some(e),
            RelabelError::MissingSizeAnnotation { .. } => None,
        }
    }
}
