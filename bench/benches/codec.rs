use std::hint::black_box;

use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use mimalloc::MiMalloc;
use na_snbt::{
    BigEndian, Config, Value, Version, parse_text, read_from_reader, read_from_slice,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn player(items: usize) -> String {
    let mut text = String::from(
        "{Name:\"Steve\",Health:20.0f,XpTotal:1234,Pos:[12.5d,64.0d,-3.25d],\
         Seeds:[L;1L,-2L,3L],Inventory:[",
    );
    for slot in 0..items {
        if slot > 0 {
            text.push(',');
        }
        text.push_str(&format!(
            "{{Slot:{}b,id:'minecraft:stone',Count:64b,tag:{{Damage:0s,Unbreakable:true}}}}",
            slot % 36
        ));
    }
    text.push_str("]}");
    text
}

fn legacy(items: usize) -> String {
    let mut text = String::from("{Name:Steve,Inventory:[");
    for slot in 0..items {
        if slot > 0 {
            text.push(',');
        }
        text.push_str(&format!("{slot}:{{id:minecraft:stone,Count:64b}}"));
    }
    text.push_str("]}");
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for items in [8, 256] {
        let text = player(items);
        group.throughput(Throughput::Bytes(text.len() as u64));
        for version in [Version::V1_12, Version::LATEST] {
            let config = Config::new(version);
            group.bench_with_input(
                BenchmarkId::new(version.to_string(), items),
                &text,
                |b, text| b.iter(|| parse_text(black_box(text), &config)),
            );
        }
        let text = legacy(items);
        let config = Config::new(Version::V1_8);
        group.bench_with_input(BenchmarkId::new("1.8", items), &text, |b, text| {
            b.iter(|| parse_text(black_box(text), &config))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let config = Config::default();
    let value = parse_text(&player(256), &config).unwrap_or(Value::End);
    let mut group = c.benchmark_group("render");
    group.bench_function("canonical", |b| {
        b.iter(|| black_box(&value).render_canonical(&config))
    });
    group.bench_function("minimal", |b| {
        b.iter(|| black_box(&value).render_minimal(&config))
    });
    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let config = Config::default();
    let value = parse_text(&player(256), &config).unwrap_or(Value::End);
    let bytes = value.write_to_vec::<BigEndian>("", &config).unwrap_or_default();
    let mut group = c.benchmark_group("binary");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("read", |b| {
        b.iter(|| read_from_slice::<BigEndian>(black_box(&bytes), &config))
    });
    group.bench_function("write", |b| {
        b.iter(|| black_box(&value).write_to_vec::<BigEndian>("", &config))
    });

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    let gzipped = match encoder.write_all(&bytes) {
        Ok(()) => encoder.finish().unwrap_or_default(),
        Err(_) => Vec::new(),
    };
    group.bench_function("read_gzip", |b| {
        b.iter(|| read_from_reader::<BigEndian>(GzDecoder::new(black_box(&gzipped[..])), &config))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_binary);
criterion_main!(benches);
