//! Benchmarks for the dashboard callback path
//!
//! Run with: cargo bench

use avocado_analytics::dashboard;
use avocado_analytics::dataset::{load_from_reader, FilterSelection, SalesRecord, Table};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const REGIONS: [&str; 6] = ["Albany", "Atlanta", "Boston", "Chicago", "Denver", "West"];
const TYPES: [&str; 2] = ["conventional", "organic"];

fn create_test_table(weeks: i64) -> Table {
    let start = NaiveDate::from_ymd_opt(2015, 1, 4).unwrap();
    let mut records = Vec::new();
    for week in 0..weeks {
        let date = start + Duration::weeks(week);
        for region in REGIONS {
            for kind in TYPES {
                records.push(SalesRecord::new(
                    date,
                    region,
                    kind,
                    1.0 + (week % 52) as f64 / 100.0,
                    1000 + week * 10,
                ));
            }
        }
    }
    Table::from_records(records)
}

fn create_test_csv(weeks: i64) -> String {
    let table = create_test_table(weeks);
    let mut csv = String::from(",Date,AveragePrice,Total Volume,type,year,region\n");
    for (idx, r) in table.records().iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{}.5,{},{},{}\n",
            idx,
            r.date,
            r.average_price,
            r.total_volume,
            r.kind,
            r.date.format("%Y"),
            r.region
        ));
    }
    csv
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for weeks in [52, 169, 520] {
        let table = create_test_table(weeks);
        let (first, last) = table.date_bounds().unwrap();
        let selection = FilterSelection::new("Albany", "organic", first, last);

        group.throughput(Throughput::Elements(table.len() as u64));

        group.bench_function(format!("filter_{}", weeks), |b| {
            b.iter(|| table.filter(black_box(&selection)).len())
        });

        group.bench_function(format!("update_{}", weeks), |b| {
            b.iter(|| dashboard::update(black_box(&table), black_box(&selection)).unwrap())
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let csv = create_test_csv(169);
    group.throughput(Throughput::Bytes(csv.len() as u64));

    group.bench_function("load_169_weeks", |b| {
        b.iter(|| load_from_reader(black_box(csv.as_bytes())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_update, bench_load);
criterion_main!(benches);
