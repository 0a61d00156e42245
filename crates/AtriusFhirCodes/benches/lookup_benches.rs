use atrius_fhir_codes::r5::code::{FhirTypes, Language, SearchModifierCode, fhir_types};
use atrius_fhir_codes::registry;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_of_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/of_code");

    group.bench_function("small_vocabulary", |b| {
        b.iter(|| SearchModifierCode::of_code(black_box("text-advanced")))
    });

    group.bench_function("language", |b| {
        b.iter(|| Language::of_code(black_box("zh-TW")))
    });

    group.bench_function("fhir_types_late_entry", |b| {
        b.iter(|| FhirTypes::of_code(black_box("VisionPrescription")))
    });

    group.bench_function("unknown_code", |b| {
        b.iter(|| FhirTypes::of_code(black_box("NotAResourceType")))
    });

    group.finish();
}

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/canonical");

    group.bench_function("of_value", |b| {
        b.iter(|| FhirTypes::of(black_box(fhir_types::Value::Patient)))
    });

    group.bench_function("hash_code_cached", |b| {
        b.iter(|| black_box(&fhir_types::PATIENT).hash_code())
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/registry");

    group.bench_function("validate_code", |b| {
        b.iter(|| registry::validate_code(black_box("resourcetypecode"), black_box("Observation")))
    });

    group.bench_function("lookup_in_system", |b| {
        b.iter(|| registry::lookup_in_system(black_box("urn:ietf:bcp:47"), black_box("en-GB")))
    });

    group.finish();
}

criterion_group!(benches, bench_of_code, bench_canonical, bench_registry);
criterion_main!(benches);
