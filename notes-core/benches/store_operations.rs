use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notes_core::core_notes::{InMemoryNoteStore, NoteInput, NoteService, NoteStore};
use notes_core::test_utils::TestNoteBuilder;
use std::sync::Arc;

fn seeded_store(size: usize) -> InMemoryNoteStore {
    let store = InMemoryNoteStore::new();
    for i in 0..size {
        store.create(TestNoteBuilder::new(format!("note {}", i)).at_offset(i as i64).build());
    }
    store
}

fn bench_create(c: &mut Criterion) {
    let service = NoteService::new(Arc::new(InMemoryNoteStore::new()));

    c.bench_function("service_create", |b| {
        b.iter(|| {
            service
                .create(black_box(NoteInput::new("Groceries", Some("Milk, eggs".into()))))
                .unwrap()
        })
    });
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_get_all");

    for size in [10usize, 1_000, 10_000] {
        let store = seeded_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.get_all()))
        });
    }

    group.finish();
}

fn bench_get_by_id(c: &mut Criterion) {
    let store = seeded_store(10_000);
    let id = store.get_all()[5_000].id;

    c.bench_function("store_get_by_id", |b| {
        b.iter(|| black_box(store.get_by_id(black_box(&id))))
    });
}

criterion_group!(benches, bench_create, bench_list, bench_get_by_id);
criterion_main!(benches);
