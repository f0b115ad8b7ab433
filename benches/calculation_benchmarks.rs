//! Performance benchmarks for the PAYE calculation engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single calculation: < 50μs mean
//! - Batch of 1000 calculations: < 50ms mean
//! - HTTP round-trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paye_engine::api::{AppState, create_router};
use paye_engine::calculation::calculate_take_home;
use paye_engine::config::ConfigLoader;
use paye_engine::models::{CalculationInput, LineItem};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/gh_paye").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a representative calculation input with items and absenteeism.
fn create_input(gross: &str) -> CalculationInput {
    CalculationInput {
        gross_income: gross.to_string(),
        allowances: "150".to_string(),
        tax_relief: "40".to_string(),
        year: "2024".to_string(),
        allowance_items: vec![
            LineItem::new("Fuel allowance", "250.00", true),
            LineItem::new("Medical cover", "100.00", false),
        ],
        deductions: vec![LineItem::new("Loan repayment", "75.00", false)],
        working_days: "22".to_string(),
        missed_days: "1".to_string(),
        ..CalculationInput::default()
    }
}

/// Benchmark: single take-home calculation.
///
/// Target: < 50μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/gh_paye")
        .expect("Failed to load config")
        .config()
        .clone();
    let input = create_input("4500");

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            let result = calculate_take_home(black_box(&input), black_box(&config));
            black_box(result).expect("calculation failed")
        })
    });
}

/// Benchmark: batches of calculations across a salary range.
///
/// Target: < 50ms mean for 1000 calculations
fn bench_calculation_batches(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/gh_paye")
        .expect("Failed to load config")
        .config()
        .clone();

    let mut group = c.benchmark_group("calculation_batches");
    for batch_size in [100usize, 1000usize] {
        let inputs: Vec<CalculationInput> = (0..batch_size)
            .map(|i| create_input(&format!("{}", 500 + i * 37)))
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    for input in inputs {
                        let result = calculate_take_home(black_box(input), &config);
                        black_box(result).expect("calculation failed");
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: HTTP round-trip through the axum router.
///
/// Target: < 1ms mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let body = serde_json::json!({
        "gross_income": "4500",
        "allowances": "150",
        "tax_relief": "40",
        "year": "2024",
        "allowance_items": [
            { "label": "Fuel allowance", "value": "250.00", "taxable": true }
        ],
        "deductions": [
            { "label": "Loan repayment", "value": "75.00" }
        ],
        "working_days": "22",
        "missed_days": "1"
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.iter(|| {
            let router = router.clone();
            let body = body.clone();
            rt.block_on(async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            })
        })
    });
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_calculation_batches,
    bench_http_round_trip
);
criterion_main!(benches);
