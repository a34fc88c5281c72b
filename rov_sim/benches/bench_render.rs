//! # Render Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rov_lib::render;
use rov_lib::rover::Rover;

fn render_benchmark(c: &mut Criterion) {
    // ---- Build a long spiralling drive ----

    // Each leg is one cell longer than the last so the bounds keep growing.
    let mut cmds = String::new();
    for lap in 1..200 {
        cmds.push_str(&"s".repeat(lap));
        cmds.push('l');
        if lap % 10 == 0 {
            cmds.push('S');
        }
    }

    let rover = Rover::new(&cmds).unwrap();

    c.bench_function("drive spiral", |b| {
        b.iter(|| Rover::new(black_box(&cmds)).unwrap())
    });

    c.bench_function("render spiral", |b| {
        b.iter(|| render::render(black_box(rover.traverse())))
    });
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
