use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knit::SlotTable;
use std::collections::HashMap;

fn bench_slot_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_table_vs_hash_map");

    group.bench_function("slot_table_insert_1000", |b| {
        b.iter(|| {
            let mut table = SlotTable::new();
            for i in 0..1000 {
                table.insert(black_box(i));
            }
            table
        });
    });

    group.bench_function("hash_map_insert_1000", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..1000 {
                map.insert(black_box(i), black_box(i));
            }
            map
        });
    });

    group.bench_function("slot_table_lookup", |b| {
        let mut table = SlotTable::new();
        let ids: Vec<_> = (0..1000).map(|i| table.insert(i)).collect();

        b.iter(|| {
            for id in &ids {
                black_box(table.get(*id));
            }
        });
    });

    group.bench_function("hash_map_lookup", |b| {
        let map: HashMap<i32, i32> = (0..1000).map(|i| (i, i)).collect();

        b.iter(|| {
            for key in 0..1000 {
                black_box(map.get(&key));
            }
        });
    });

    // Free-list churn: every other slot erased and refilled.
    group.bench_function("slot_table_churn", |b| {
        let mut table = SlotTable::new();
        let mut ids: Vec<_> = (0..1000).map(|i| table.insert(i)).collect();

        b.iter(|| {
            for id in ids.iter_mut().step_by(2) {
                let value = table.remove(*id).unwrap_or_default();
                *id = table.insert(black_box(value));
            }
        });
    });

    group.bench_function("slot_table_iterate_sparse", |b| {
        let mut table = SlotTable::new();
        let ids: Vec<_> = (0..1000).map(|i| table.insert(i)).collect();
        for id in ids.iter().step_by(3) {
            table.remove(*id);
        }

        b.iter(|| black_box(table.iter().map(|(_, v)| *v).sum::<i32>()));
    });

    group.finish();
}

criterion_group!(benches, bench_slot_table);
criterion_main!(benches);
