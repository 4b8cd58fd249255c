use criterion::{criterion_group, criterion_main, Criterion, SamplingMode, Throughput};
use lib::chess::Position;

fn bench(c: &mut Criterion) {
    let positions = [
        ("initial", Position::default()),
        (
            "kiwipete",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
                .parse()
                .unwrap(),
        ),
    ];

    for (name, pos) in positions {
        let mut group = c.benchmark_group("perft");
        group.sampling_mode(SamplingMode::Flat).sample_size(10);
        group.throughput(Throughput::Elements(pos.perft(3) as u64));
        group.bench_function(name, |b| b.iter(|| pos.perft(3)));
        group.finish();
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
