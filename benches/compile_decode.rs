use bitlayout::{
    assembly::ByteOrder,
    compiled::CompiledSchema,
    field::{SchemaField, ValueKind},
};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_fields(field_count: usize) -> Vec<SchemaField> {
    let kinds = [
        ValueKind::U8,
        ValueKind::Bool,
        ValueKind::Bool,
        ValueKind::U16,
        ValueKind::U32,
    ];

    (0..field_count)
        .map(|i| SchemaField::new(format!("f{}", i), kinds[i % kinds.len()]))
        .collect()
}

fn gen_packet(len: usize) -> Vec<u8> {
    // Deterministic but non-trivial pattern
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

fn bench_compile(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50, 100] {
        let fields = gen_fields(field_count);

        c.bench_function(&format!("compile_{}_fields", field_count), |b| {
            b.iter(|| CompiledSchema::compile(&fields, ByteOrder::Big).unwrap())
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    for &field_count in &[1usize, 10, 50, 100] {
        let fields = gen_fields(field_count);
        let schema = CompiledSchema::compile(&fields, ByteOrder::Big).unwrap();
        let packet = gen_packet(schema.min_len);

        c.bench_function(&format!("decode_{}_fields", field_count), |b| {
            b.iter(|| schema.decode(&packet).unwrap())
        });
    }
}

criterion_group!(benches, bench_compile, bench_decode);
criterion_main!(benches);
