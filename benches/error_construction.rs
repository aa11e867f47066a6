//! Benchmarks for error construction and template rendering.
//!
//! Failure paths render a template per violation; this keeps an eye on
//! that cost relative to the happy path.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use func_validator::prelude::*;

fn bench_happy_path(c: &mut Criterion) {
    let v = must_be_greater_than(5_i64);
    c.bench_function("validate_pass", |b| {
        b.iter(|| v.validate(black_box(&10), black_box("n")))
    });
}

fn bench_failure_path(c: &mut Criterion) {
    let v = must_be_greater_than(5_i64);
    c.bench_function("validate_fail_renders_template", |b| {
        b.iter(|| v.validate(black_box(&1), black_box("n")).unwrap_err())
    });
}

fn bench_template_render(c: &mut Criterion) {
    let tpl = ErrorTemplate::borrowed("${arg_name}: ${arg_value} must be ${fn_symbol} ${to}.");
    let args = MessageArgs::new()
        .with("arg_name", "n")
        .with("arg_value", 1)
        .with("fn_symbol", ">")
        .with("to", 5);
    c.bench_function("template_render", |b| b.iter(|| tpl.render(black_box(&args))));
}

criterion_group!(
    benches,
    bench_happy_path,
    bench_failure_path,
    bench_template_render
);
criterion_main!(benches);
