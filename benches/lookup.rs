use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rusty_lookup::{
    Account, AccountStorage, Bank, BinarySearchStore, HashStore, MISSING_ACCOUNT,
};
use std::time::Duration;

const NUM_ACCOUNTS: u32 = 1_000_000;

fn shuffled_numbers() -> Vec<String> {
    let mut numbers: Vec<String> = (0..NUM_ACCOUNTS).map(|i| format!("{:010}", i)).collect();
    numbers.shuffle(&mut StdRng::seed_from_u64(0x5EED));
    numbers
}

fn load<S: AccountStorage>(storage: S, numbers: Vec<String>) -> Bank<S> {
    let mut bank = Bank::new(storage);
    for number in numbers {
        bank.open_account(Account::new(number)).unwrap();
    }
    bank.prepare();
    bank
}

fn load_accounts(c: &mut Criterion) {
    let numbers = shuffled_numbers();
    let mut group = c.benchmark_group("load");

    group.throughput(Throughput::Elements(NUM_ACCOUNTS as u64));
    group.measurement_time(Duration::from_secs(30));
    group.sample_size(10);

    group.bench_function("binary_search_1M_accounts", |b| {
        b.iter_batched(
            || numbers.clone(),
            |numbers| load(BinarySearchStore::with_capacity(numbers.len()), numbers),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("hash_1M_accounts", |b| {
        b.iter_batched(
            || numbers.clone(),
            |numbers| load(HashStore::with_capacity(numbers.len()), numbers),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn lookup_accounts(c: &mut Criterion) {
    let numbers = shuffled_numbers();
    let first = numbers.first().unwrap().clone();
    let last = numbers.last().unwrap().clone();
    let sorted = load(BinarySearchStore::new(), numbers.clone());
    let hashed = load(HashStore::new(), numbers);

    let mut group = c.benchmark_group("lookup");
    let cases = [
        ("first", first.as_str()),
        ("last", last.as_str()),
        ("missing", MISSING_ACCOUNT),
    ];
    for (name, number) in cases {
        group.bench_function(format!("binary_search_{}", name), |b| {
            b.iter(|| sorted.get_account(black_box(number)).unwrap());
        });
        group.bench_function(format!("hash_{}", name), |b| {
            b.iter(|| hashed.get_account(black_box(number)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, load_accounts, lookup_accounts);
criterion_main!(benches);
