//! Performance benchmarks for the payroll calculation engine.
//!
//! The engine is expected to complete a single employee/period calculation in
//! microseconds, so whole-company batches stay well under a second.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::calculation::{PayrollInput, calculate_overtime, calculate_payroll};
use payroll_engine::config::{
    AllowanceConditions, AllowanceConfig, AllowanceRule, BreakConfig, DeductionConfig,
    DeductionKind, DeductionRule, OvertimeConfig, PayrollConfig,
};
use payroll_engine::models::{
    AttendanceSummary, DailyOvertimeDetail, EmployeeSalaryInfo, SalaryType,
};

/// Creates a month of overtime detail with a mix of day types.
fn create_overtime_details(days: usize) -> Vec<DailyOvertimeDetail> {
    (0..days)
        .map(|i| DailyOvertimeDetail {
            regular_minutes: 30 + (i as u32 % 4) * 30,
            night_minutes: (i as u32 % 3) * 20,
            is_holiday: i % 11 == 0,
            is_weekend: i % 7 >= 5,
        })
        .collect()
}

/// Creates a fully-configured input for one employee.
fn create_input(days: usize) -> PayrollInput {
    PayrollInput {
        salary: EmployeeSalaryInfo {
            monthly_salary: Some(Decimal::new(352000, 0)),
            ..EmployeeSalaryInfo::new(SalaryType::Monthly)
        },
        attendance: Some(AttendanceSummary {
            working_days: 22,
            working_hours: 176,
            working_minutes: 176 * 60,
            late_minutes: 15,
            late_count: 1,
            total_break_minutes: 22 * 60,
            shift_count: 22,
            ..AttendanceSummary::default()
        }),
        overtime_details: create_overtime_details(days),
        break_config: Some(BreakConfig::default()),
        overtime_config: Some(OvertimeConfig {
            max_overtime_hours_per_day: Some(4),
            max_overtime_hours_per_month: Some(45),
            ..OvertimeConfig::default()
        }),
        allowance_config: Some(AllowanceConfig {
            rules: vec![
                AllowanceRule {
                    name: "commuting".to_string(),
                    amount: 10000,
                    taxable: false,
                    conditions: None,
                },
                AllowanceRule {
                    name: "perfect-attendance".to_string(),
                    amount: 5000,
                    taxable: true,
                    conditions: Some(AllowanceConditions {
                        require_no_late_arrival: true,
                        ..AllowanceConditions::default()
                    }),
                },
            ],
        }),
        deduction_config: Some(DeductionConfig {
            late_penalty_enabled: true,
            late_penalty_per_minute: Some(Decimal::new(50, 0)),
            rules: vec![
                DeductionRule {
                    name: "health-insurance".to_string(),
                    order: Some(1),
                    kind: DeductionKind::Percentage {
                        percentage: Decimal::new(495, 2),
                    },
                },
                DeductionRule {
                    name: "pension".to_string(),
                    order: Some(2),
                    kind: DeductionKind::Percentage {
                        percentage: Decimal::new(915, 2),
                    },
                },
            ],
            ..DeductionConfig::default()
        }),
        payroll_config: Some(PayrollConfig::default()),
    }
}

fn bench_overtime_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("overtime");
    let config = OvertimeConfig {
        max_overtime_hours_per_day: Some(4),
        max_overtime_hours_per_month: Some(45),
        ..OvertimeConfig::default()
    };
    let rate = Decimal::new(2000, 0);

    for days in [1usize, 22, 31] {
        let details = create_overtime_details(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &details, |b, details| {
            b.iter(|| calculate_overtime(black_box(details), black_box(&config), rate));
        });
    }
    group.finish();
}

fn bench_single_payroll(c: &mut Criterion) {
    let input = create_input(22);
    c.bench_function("payroll_single_employee", |b| {
        b.iter(|| calculate_payroll(black_box(&input)));
    });
}

fn bench_payroll_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_batch");
    for batch_size in [100usize, 1000] {
        let inputs: Vec<PayrollInput> = (0..batch_size).map(|_| create_input(22)).collect();
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .map(|input| calculate_payroll(black_box(input)).net_salary)
                        .sum::<i64>()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_overtime_engine,
    bench_single_payroll,
    bench_payroll_batch
);
criterion_main!(benches);
