// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the rank-4 text and binary codecs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dense_codec::{BinaryCodec, TextCodec};
use dense_core::Matrix4;

fn sample() -> Matrix4<f64> {
    let dims = [64, 32, 8, 4];
    let n: usize = dims.iter().product();
    let data = (0..n).map(|i| i as f64 * 0.5).collect();
    Matrix4::from_vec(dims, data).expect("valid dims")
}

fn bench_text(c: &mut Criterion) {
    let codec = TextCodec::default();
    let matrix = sample();
    let mut text = Vec::new();
    codec
        .write_matrix4_to(&matrix, &mut text)
        .expect("in-memory write");

    c.bench_function("text_parse_rank4", |b| {
        b.iter(|| {
            let m: Matrix4<f64> = codec
                .read_matrix4_from(black_box(text.as_slice()))
                .expect("valid text");
            m
        })
    });
    c.bench_function("text_print_rank4", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(text.len());
            codec
                .write_matrix4_to(black_box(&matrix), &mut out)
                .expect("in-memory write");
            out
        })
    });
}

fn bench_binary(c: &mut Criterion) {
    let matrix = sample();
    let mut bytes = Vec::new();
    BinaryCodec::write_array_to(matrix.as_array(), &mut bytes).expect("in-memory write");

    c.bench_function("binary_decode_rank4", |b| {
        b.iter(|| {
            let m = BinaryCodec::read_array_from::<f64, 4, _>(black_box(bytes.as_slice()))
                .expect("valid bytes");
            Matrix4::from_array(m)
        })
    });
}

criterion_group!(benches, bench_text, bench_binary);
criterion_main!(benches);
