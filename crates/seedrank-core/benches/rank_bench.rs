use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seedrank_core::{Listing, Ranker, classify};

fn listings() -> Vec<Listing> {
    vec![
        Listing::new("Movie.Name.2019.1080p.BLURAY.x264-GROUP")
            .with_description("TrueHD Atmos 10bit")
            .with_category("Movies")
            .with_size("10.2 GB")
            .with_peers(120, 10),
        Listing::new("Show.S02.2160p.WEB-DL.DDP5.1.HDR.HEVC-NTb")
            .with_category("TV")
            .with_size("48.7 GB")
            .with_peers(37, 52)
            .with_uploader("NTb"),
        Listing::new("Film.2023.720p.WEBRip.x264.AAC-[YTS.MX]")
            .with_category("Movies")
            .with_size("980 MB")
            .with_peers(8, 2)
            .with_uploader("YTS"),
        Listing::new("Film.2023.CAMRip.XviD")
            .with_category("Movies")
            .with_size("1.4 GB")
            .with_peers(2, 40),
        Listing::new("Documentary.2160p.IMAX.BluRay.REMUX.HEVC.mkv")
            .with_description("Dolby Vision DTS-HD MA")
            .with_category("Movies")
            .with_size("61.3 GB")
            .with_peers(0, 3),
    ]
}

fn bench_scoring(c: &mut Criterion) {
    let ranker = Ranker::default().unwrap();
    let batch = listings();

    c.bench_function("classify_single", |b| {
        b.iter(|| classify(black_box(&batch[0].name), black_box(&batch[0].description)));
    });

    c.bench_function("score_single", |b| {
        b.iter(|| ranker.scorer().score(black_box(&batch[0])));
    });

    c.bench_function("rank_batch_5", |b| {
        b.iter(|| ranker.rank(black_box(batch.clone())));
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
