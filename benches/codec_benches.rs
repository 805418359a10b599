use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aleo_primitives::arith::ModularArithmetic;
use aleo_primitives::ser::{BinaryCodec, ByteReader};
use aleo_primitives::text::TextCodec;
use aleo_primitives::types::{Address, Field, Fq, Fq2, G2Prepared};

const COEFF_COUNTS: [usize; 3] = [16, 68, 256];

fn sample_prepared(count: usize) -> G2Prepared {
    let coeffs = (0..count as u64)
        .map(|i| {
            let element = Fq2::new(Fq::from_u64(i), Fq::from_u64(i + 1), i % 2 == 0)
                .expect("small coordinates never collide with the flag");
            (element, element, element)
        })
        .collect();
    G2Prepared::new(coeffs, false).expect("count fits in u64")
}

fn prepared_benches(c: &mut Criterion) {
    for count in COEFF_COUNTS {
        let prepared = sample_prepared(count);
        let bytes = prepared.encode();

        let mut group = c.benchmark_group("g2_prepared_decode");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| {
                let mut cursor = ByteReader::new(black_box(bytes));
                G2Prepared::decode(&mut cursor).expect("valid encoding")
            })
        });
        group.finish();

        let mut group = c.benchmark_group("g2_prepared_encode");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &prepared, |b, prepared| {
            b.iter(|| black_box(prepared).encode())
        });
        group.finish();
    }
}

fn text_benches(c: &mut Criterion) {
    let address = Address::new(vec![0x5a; 32]).expect("32-byte payload");
    let text = address.to_text();
    c.bench_function("address_from_text", |b| {
        b.iter(|| Address::from_text(black_box(&text)).expect("valid address"))
    });

    let field = Field::from_u64(u64::MAX);
    let field_text = field.to_text();
    c.bench_function("field_from_text", |b| {
        b.iter(|| Field::from_text(black_box(&field_text)).expect("valid field"))
    });
}

fn arithmetic_benches(c: &mut Criterion) {
    let backend = ModularArithmetic::aleo_field();
    let lhs = Field::from_u64(0xdead_beef);
    let rhs = Field::from_u64(0xcafe_babe);
    c.bench_function("field_mul_modular", |b| {
        b.iter(|| {
            black_box(&lhs)
                .mul(black_box(&rhs), &backend)
                .expect("backend succeeds")
        })
    });
}

criterion_group!(benches, prepared_benches, text_benches, arithmetic_benches);
criterion_main!(benches);
