//! Performance benchmark for the upcoming-birthday query.
//!
//! Measures the window scan over address books of increasing size; every
//! record carries a birthday so the whole book is considered.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Name, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(Name::new(format!("contact-{}", i)).unwrap());
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .set_birthday(&format!("{:02}.{:02}.1990", day, month))
            .unwrap();
        book.add_record(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

    let mut group = c.benchmark_group("upcoming_birthdays");
    for size in [100, 1_000, 10_000] {
        let book = build_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(reference));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays);
criterion_main!(benches);
