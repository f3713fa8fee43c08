//! Update queue and faker benchmarks
//!
//! Run with: cargo bench --bench queue_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};

use tg_mock::updates::Queue;
use tg_mock::Faker;

fn update(text: &str) -> Map<String, Value> {
    json!({"message": {"text": text, "chat": {"id": 1, "type": "private"}}})
        .as_object()
        .unwrap()
        .clone()
}

fn benchmark_queue_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_add");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let queue = Queue::new();
                for i in 0..size {
                    queue.add(update(&format!("msg {}", i)));
                }
                black_box(queue.pending())
            })
        });
    }

    group.finish();
}

fn benchmark_queue_get_and_acknowledge(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_get_acknowledge");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || {
                    let queue = Queue::new();
                    for i in 0..size {
                        queue.add(update(&format!("msg {}", i)));
                    }
                    queue
                },
                |queue| {
                    // Long-poll pattern: read a page, acknowledge it, repeat
                    let mut drained = 0;
                    loop {
                        let page = queue.get(0, 100);
                        if page.is_empty() {
                            break;
                        }
                        let last = page.last().unwrap()["update_id"].as_i64().unwrap();
                        drained += page.len();
                        queue.acknowledge(last + 1);
                    }
                    black_box(drained)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_concurrent_add(c: &mut Criterion) {
    use std::sync::Arc;
    use std::thread;

    let mut group = c.benchmark_group("concurrent_access");

    group.bench_function("4_threads_add", |b| {
        b.iter(|| {
            let queue = Arc::new(Queue::new());
            let handles: Vec<_> = (0..4)
                .map(|thread_id| {
                    let q = Arc::clone(&queue);
                    thread::spawn(move || {
                        for i in 0..250 {
                            q.add(update(&format!("t{} m{}", thread_id, i)));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(queue.pending())
        })
    });

    group.finish();
}

fn benchmark_faker_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("faker_generate");

    let faker = Faker::new(42);
    let params = json!({"chat_id": 123, "text": "benchmark"}).as_object().unwrap().clone();

    group.bench_function("message", |b| {
        b.iter(|| black_box(faker.generate("Message", &params)))
    });

    group.bench_function("user", |b| {
        b.iter(|| black_box(faker.generate("User", &params)))
    });

    group.bench_function("photo_array", |b| {
        b.iter(|| black_box(faker.generate("Array of PhotoSize", &params)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_queue_add,
    benchmark_queue_get_and_acknowledge,
    benchmark_concurrent_add,
    benchmark_faker_generate,
);

criterion_main!(benches);
