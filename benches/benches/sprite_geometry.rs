// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bracken_sprite::{Anchor, Frame, SpriteGeometry};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size};

fn gen_sprites(count: usize) -> Vec<SpriteGeometry> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let w = 8.0 + (i % 23) as f64;
        let h = 8.0 + (i % 17) as f64;
        let frame = if i % 3 == 0 {
            Frame::with_trim(
                Size::new(w, h),
                Rect::new(1.0, 1.0, w - 2.0, h - 2.0),
            )
        } else {
            Frame::new(Size::new(w, h))
        };
        let mut sprite = SpriteGeometry::new(frame);
        if i % 2 == 0 {
            sprite.set_anchor(Anchor::CENTER);
        }
        out.push(sprite);
    }
    out
}

fn gen_transforms(count: usize) -> Vec<Affine> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Affine::new([1.0 + t * 0.001, 0.01, -0.01, 1.0 - t * 0.001, t, t * 0.5])
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite_update");
    for &count in &[100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        let mut sprites = gen_sprites(count);
        let transforms = gen_transforms(count);
        group.bench_function(format!("recompute_{count}"), |b| {
            b.iter(|| {
                for (sprite, tf) in sprites.iter_mut().zip(&transforms) {
                    sprite.update(black_box(*tf), true);
                }
            });
        });
        group.bench_function(format!("unchanged_{count}"), |b| {
            b.iter(|| {
                for (sprite, tf) in sprites.iter_mut().zip(&transforms) {
                    sprite.update(black_box(*tf), false);
                }
            });
        });
    }
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite_bounds");
    let mut sprites = gen_sprites(1_000);
    let transforms = gen_transforms(1_000);
    for (sprite, tf) in sprites.iter_mut().zip(&transforms) {
        sprite.update(*tf, true);
    }
    group.bench_function("fresh_1000", |b| {
        b.iter(|| {
            for sprite in sprites.iter_mut() {
                sprite.mark_children_changed();
                black_box(sprite.bounds(None));
            }
        });
    });
    group.bench_function("memoized_1000", |b| {
        b.iter(|| {
            for sprite in sprites.iter_mut() {
                black_box(sprite.bounds(None));
            }
        });
    });
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let sprites = gen_sprites(1_000);
    c.bench_function("hit_test_local_1000", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for (i, sprite) in sprites.iter().enumerate() {
                let pt = Point::new((i % 16) as f64, (i % 12) as f64);
                if sprite.hit_test_local(black_box(pt)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

criterion_group!(benches, bench_update, bench_bounds, bench_hit_test);
criterion_main!(benches);
