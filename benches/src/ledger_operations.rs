use std::sync::Arc;
use std::thread;

use atm::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Build a ledger with `num_accounts` accounts opened at 1000.00
fn populated_ledger(num_accounts: u32) -> TellerLedger {
    let mut ledger = TellerLedger::new();
    for i in 0..num_accounts {
        ledger
            .register_account(i, 1234, format!("User {i}"), FixedPoint::from_units(1_000))
            .unwrap();
    }
    ledger
}

/// Benchmark account registration
fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_account");

    for num_accounts in [100u32, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_accounts),
            &num_accounts,
            |b, &num_accounts| {
                b.iter_batched(
                    TellerLedger::new,
                    |mut ledger| {
                        for i in 0..num_accounts {
                            ledger
                                .register_account(i, 1234, "User", FixedPoint::zero())
                                .unwrap();
                        }
                        black_box(ledger)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark alternating deposits and withdrawals on one account
fn bench_cash_movements(c: &mut Criterion) {
    let mut group = c.benchmark_group("cash_movements");

    for ops in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(ops), &ops, |b, &ops| {
            b.iter_batched(
                || populated_ledger(1),
                |mut ledger| {
                    for _ in 0..ops {
                        ledger.deposit_cash(0, 1234, FixedPoint::from_cents(150)).unwrap();
                        ledger.withdraw_cash(0, 1234, FixedPoint::from_cents(100)).unwrap();
                    }
                    black_box(ledger)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark refused withdrawals (no mutation, no log line)
fn bench_refused_withdrawals(c: &mut Criterion) {
    c.bench_function("refused_withdrawal", |b| {
        let mut ledger = populated_ledger(1);
        b.iter(|| {
            let _ = black_box(ledger.withdraw_cash(0, 1234, FixedPoint::from_units(1_000_000)));
        });
    });
}

/// Benchmark contended deposits through the shared store
fn bench_shared_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_store_deposits");

    for threads in [1usize, 2, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter_batched(
                    || {
                        let store = Arc::new(ConcurrentLedgerStore::<FixedPoint>::new());
                        store
                            .insert_account(
                                AccountKey::new(0, 1234),
                                Account::new("User", FixedPoint::zero()),
                            )
                            .unwrap();
                        store
                    },
                    |store| {
                        let handles: Vec<_> = (0..threads)
                            .map(|_| {
                                let mut ledger =
                                    Ledger::<FixedPoint, _>::with_store(Arc::clone(&store));
                                thread::spawn(move || {
                                    for _ in 0..1_000 {
                                        ledger
                                            .deposit_cash(0, 1234, FixedPoint::from_cents(1))
                                            .unwrap();
                                    }
                                })
                            })
                            .collect();
                        for handle in handles {
                            handle.join().unwrap();
                        }
                        black_box(store)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark ledger export into memory
fn bench_write_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_ledger");

    for entries in [10u32, 100, 1_000] {
        let mut ledger = populated_ledger(1);
        for _ in 0..entries {
            ledger.deposit_cash(0, 1234, FixedPoint::from_cents(1)).unwrap();
        }
        let log = ledger.transaction_log(0, 1234).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(entries), &log, |b, log| {
            b.iter(|| {
                let mut output = Vec::with_capacity(log.len() * 64);
                write_ledger(&mut output, log).unwrap();
                black_box(output)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_register,
    bench_cash_movements,
    bench_refused_withdrawals,
    bench_shared_store,
    bench_write_ledger
);
criterion_main!(benches);
