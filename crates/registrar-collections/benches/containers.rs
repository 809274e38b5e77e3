// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use registrar_collections::{
    BoundedLinkedList, BoundedList, CursorList, LinkedQueue, Queue, SequentialList,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 256, 1024];

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("bounded_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list = BoundedList::new();
                for i in 0..n {
                    list.push_back(black_box(i)).unwrap();
                }
                list
            })
        });

        group.bench_with_input(BenchmarkId::new("bounded_linked_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list = BoundedLinkedList::new(n);
                for i in 0..n {
                    list.push_back(black_box(i)).unwrap();
                }
                list
            })
        });

        group.bench_with_input(BenchmarkId::new("cursor_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list = CursorList::new();
                for i in 0..n {
                    list.push_back(black_box(i)).unwrap();
                }
                list
            })
        });
    }
    group.finish();
}

fn bench_queue_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_cycle");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("linked_queue", n), &n, |b, &n| {
            b.iter(|| {
                let mut queue = LinkedQueue::new(n);
                for i in 0..n {
                    queue.enqueue(black_box(i)).unwrap();
                }
                while let Ok(v) = queue.dequeue() {
                    black_box(v);
                }
            })
        });
    }
    group.finish();
}

fn bench_cursor_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_filter");
    for n in SIZES {
        let mut template = CursorList::new();
        for i in 0..n {
            template.push_back(i).unwrap();
        }
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("remove_odd", n), &template, |b, template| {
            b.iter(|| {
                let mut list = template.clone();
                let mut cursor = list.cursor_front_mut();
                while let Some(&v) = cursor.next() {
                    if v % 2 == 1 {
                        cursor.remove().unwrap();
                    }
                }
                list
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append, bench_queue_cycle, bench_cursor_filter);
criterion_main!(benches);
