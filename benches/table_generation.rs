use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use utp_capacitance::stranding::Stranding;
use utp_capacitance::table::TableConfig;

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("utp_table");
    for stranding in [Stranding::Solid, Stranding::Seven] {
        let config = TableConfig::default().with_stranding(stranding);
        group.bench_function(BenchmarkId::new("write_table", stranding.strands()), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(128 * config.row_count());
                let _ = config.write_table(&mut out);
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
