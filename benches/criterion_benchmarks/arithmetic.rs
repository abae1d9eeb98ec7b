use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rebi::{pow, BigInt, BI};

/// A decimal string of the requested length with a nonzero leading digit.
fn repeated_digits(length: usize) -> String {
    "987654321".chars().cycle().take(length).collect()
}

fn operand(length: usize) -> BigInt {
    repeated_digits(length).parse().unwrap()
}

pub fn addition(c: &mut Criterion) {
    let lhs = operand(200);
    let rhs = operand(180);
    c.bench_function("addition with 200 digit operands", |b| b.iter(|| {
        black_box(&lhs) + black_box(&rhs)
    }));
}

pub fn subtraction(c: &mut Criterion) {
    let lhs = operand(200);
    let rhs = operand(180);
    c.bench_function("subtraction with 200 digit operands", |b| b.iter(|| {
        black_box(&lhs) - black_box(&rhs)
    }));
}

pub fn multiplication(c: &mut Criterion) {
    let lhs = operand(200);
    let rhs = operand(200);
    c.bench_function("multiplication with 200 digit operands", |b| b.iter(|| {
        black_box(&lhs) * black_box(&rhs)
    }));
}

pub fn division(c: &mut Criterion) {
    let dividend = operand(60);
    let divisor = operand(20);
    c.bench_function("division of 60 digits by 20 digits", |b| b.iter(|| {
        black_box(&dividend) / black_box(&divisor)
    }));
}

pub fn exponentiation(c: &mut Criterion) {
    let base = BI!(2);
    let exponent = BI!(1000);
    c.bench_function("two to the thousandth power", |b| b.iter(|| {
        pow(black_box(&base), black_box(&exponent))
    }));
}

pub fn parsing(c: &mut Criterion) {
    let text = repeated_digits(200);
    c.bench_function("parsing 200 digits", |b| b.iter(|| {
        black_box(text.as_str()).parse::<BigInt>()
    }));
}

criterion_group!(arithmetic,
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
    parsing,
);
criterion_main!(arithmetic);
