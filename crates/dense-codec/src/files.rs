// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! File plumbing shared by the codecs.

use crate::CodecError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Origin reported for errors on caller-supplied readers.
pub(crate) const READER_ORIGIN: &str = "<reader>";

/// Origin reported for errors on caller-supplied writers.
pub(crate) const WRITER_ORIGIN: &str = "<writer>";

pub(crate) fn open(path: &Path) -> Result<BufReader<File>, CodecError> {
    tracing::debug!("codec: opening '{}' for reading", path.display());
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn create(path: &Path) -> Result<BufWriter<File>, CodecError> {
    tracing::debug!("codec: creating '{}'", path.display());
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Flushes a buffered file so late write errors are reported, not dropped.
pub(crate) fn finish(mut writer: BufWriter<File>, path: &Path) -> Result<(), CodecError> {
    writer.flush().map_err(|source| io_error(path, source))
}

pub(crate) fn io_error(origin: &Path, source: io::Error) -> CodecError {
    CodecError::Io {
        origin: origin.to_path_buf(),
        source,
    }
}
