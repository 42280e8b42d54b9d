// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: convert rank-4 `f64` arrays between the text and binary layouts.
//!
//! The direction follows the file extensions: `.bin` is binary, anything
//! else is text. An optional third argument names a TOML [`TextFormat`].
//!
//! ```bash
//! cargo run -p dense-codec --example convert -- input.txt output.bin
//! cargo run -p dense-codec --example convert -- input.bin output.txt format.toml
//! ```
//!
//! Without arguments it writes a small sample to the temp directory and
//! converts it both ways.

use anyhow::{bail, Context};
use dense_codec::{BinaryCodec, TextCodec, TextFormat};
use dense_core::Matrix4;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Initialise tracing.
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => demo(),
        [input, output] => convert(Path::new(input), Path::new(output), TextFormat::default()),
        [input, output, config] => {
            let format = TextFormat::from_file(Path::new(config))
                .with_context(|| format!("loading text format from {config}"))?;
            convert(Path::new(input), Path::new(output), format)
        }
        _ => bail!("usage: convert [<input> <output> [format.toml]]"),
    }
}

fn is_binary(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

fn convert(input: &Path, output: &Path, format: TextFormat) -> anyhow::Result<()> {
    let text = TextCodec::new(format)?;

    let matrix: Matrix4<f64> = if is_binary(input) {
        BinaryCodec::read_matrix4(input)
    } else {
        text.read_matrix4(input)
    }
    .with_context(|| format!("reading {}", input.display()))?;

    if is_binary(output) {
        BinaryCodec::write_matrix4(&matrix, output)
    } else {
        text.write_matrix4(&matrix, output)
    }
    .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{} -> {}: dims {:?}, {} values",
        input.display(),
        output.display(),
        matrix.dims(),
        matrix.len(),
    );
    Ok(())
}

fn demo() -> anyhow::Result<()> {
    let dir: PathBuf = std::env::temp_dir().join("dense-codec-demo");
    std::fs::create_dir_all(&dir)?;

    let sample = Matrix4::from_vec([3, 2, 2, 2], (1..=24).map(f64::from).collect())?;
    let text_path = dir.join("sample.txt");
    let bin_path = dir.join("sample.bin");
    let back_path = dir.join("sample_back.txt");

    TextCodec::default().write_matrix4(&sample, &text_path)?;
    println!("{sample}\n");

    convert(&text_path, &bin_path, TextFormat::default())?;
    convert(&bin_path, &back_path, TextFormat::default())?;

    let back: Matrix4<f64> = TextCodec::default().read_matrix4(&back_path)?;
    println!("round trip {}", if back == sample { "ok" } else { "MISMATCH" });
    Ok(())
}
