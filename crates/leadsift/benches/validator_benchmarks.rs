//! Validator performance benchmarks.
//!
//! Measures email and phone validation and lead scoring.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use leadsift::{EmailValidator, LeadSift, PhoneValidator, ScoreInput};

/// Sample addresses covering every validation rule.
const EMAIL_SAMPLES: &[&str] = &[
    "jane.doe@acmecorp.io",
    "john@gmail.com",
    "info@acme.com",
    "sales@globex.com",
    "user@gmial.com",
    "burner@mailinator.com",
    "admin@localhost",
    "jane+leads@initech.com",
    "not-an-email",
    "",
    "JANE.DOE@ACMECORP.IO",
    "support@yahoo.com",
    "bob@hotmial.com",
    "ceo@umbrella-corp.co.uk",
    "team@startup.dev",
];

/// Sample phone numbers covering every line type.
const PHONE_SAMPLES: &[&str] = &[
    "2025550123",
    "(917) 555-0123",
    "+1 646 555 0123",
    "1-800-555-0123",
    "8885550123",
    "0005550123",
    "2021550123",
    "+44 20 7946 0958",
    "+33 1 42 68 53 00",
    "12345",
    "",
    "call me",
    "718.555.0123",
    "+1 (212) 555-0199",
    "9115550123",
];

/// Benchmark email validation.
fn bench_email_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_validation");
    let validator = EmailValidator::new();

    group.bench_function("single", |b| {
        b.iter(|| black_box(validator.validate("jane.doe@acmecorp.io")))
    });

    group.bench_function("batch_15", |b| {
        b.iter(|| {
            for sample in EMAIL_SAMPLES {
                black_box(validator.validate(sample));
            }
        })
    });

    group.bench_function("typo_correction", |b| {
        b.iter(|| black_box(validator.typo_correction("gmial.com")))
    });

    group.finish();
}

/// Benchmark phone validation.
fn bench_phone_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_validation");
    let validator = PhoneValidator::new();

    group.bench_function("single", |b| {
        b.iter(|| black_box(validator.validate("(917) 555-0123")))
    });

    group.bench_function("batch_15", |b| {
        b.iter(|| {
            for sample in PHONE_SAMPLES {
                black_box(validator.validate(sample));
            }
        })
    });

    group.finish();
}

/// Benchmark lead scoring.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("lead_scoring");
    let engine = LeadSift::new();
    let input = ScoreInput {
        email_valid: true,
        email_score: 80,
        phone_valid: true,
        phone_score: 90,
        revenue: 12_000_000.0,
        industry: Some("Technology"),
    };

    group.bench_function("score", |b| b.iter(|| black_box(engine.score(&input))));

    group.bench_function("breakdown", |b| {
        b.iter(|| black_box(engine.scorer().breakdown(&input)))
    });

    group.finish();
}

/// Benchmark validation with varying input lengths.
fn bench_input_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length_scaling");
    let email = EmailValidator::new();
    let phone = PhoneValidator::new();

    for len in [10, 50, 100, 500].iter() {
        let local: String = "a".repeat(*len);
        let address = format!("{}@acmecorp.io", local);
        let digits: String = "5".repeat(*len);

        group.bench_with_input(BenchmarkId::new("email", len), &address, |b, input| {
            b.iter(|| black_box(email.validate(input)))
        });

        group.bench_with_input(BenchmarkId::new("phone", len), &digits, |b, input| {
            b.iter(|| black_box(phone.validate(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_email_validation,
    bench_phone_validation,
    bench_scoring,
    bench_input_length_scaling,
);
criterion_main!(benches);
