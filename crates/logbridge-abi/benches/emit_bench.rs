//! Emit-path benchmarks.

use std::ptr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use logbridge::emit_abi::logbridge_emit;
use logbridge_core::format::{encode_public_string_args, message_from_args};
use logbridge_core::{Bridge, MemorySink, Severity};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.bench_function("literal", |b| {
        b.iter(|| black_box(message_from_args(format_args!("static message"))));
    });
    group.bench_function("formatted", |b| {
        let n = black_box(42u32);
        b.iter(|| black_box(message_from_args(format_args!("request {n} done"))));
    });
    group.bench_function("encode_args", |b| {
        b.iter(|| black_box(encode_public_string_args(black_box(0x7fff_0000))));
    });
    group.finish();
}

fn bench_memory_sink(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096];
    let mut group = c.benchmark_group("memory_sink");
    for &size in sizes {
        let mut text = vec![b'A'; size];
        text.push(0);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("emit", size), &size, |b, _| {
            let bridge = Bridge::new(MemorySink::new());
            let message = std::ffi::CStr::from_bytes_with_nul(&text).unwrap_or(c"");
            b.iter(|| {
                bridge.emit(Severity::Info, message);
                if bridge.sink().len() > 10_000 {
                    bridge.sink().take();
                }
            });
        });
    }
    group.finish();
}

// Debug-tier records are filtered by default on both backends, so this
// measures the call overhead without flooding the system log.
fn bench_platform_debug(c: &mut Criterion) {
    c.bench_function("platform_debug_emit", |b| {
        b.iter(|| unsafe {
            logbridge_emit(
                ptr::null_mut(),
                Severity::Debug.type_code(),
                c"bench: platform debug".as_ptr(),
            )
        });
    });
}

criterion_group!(benches, bench_render, bench_memory_sink, bench_platform_debug);
criterion_main!(benches);
