use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use succulent_analytics::{
    derive, summarize, FilterResolver, FilterSelection, InsightGenerator, PlantEvent, PlantRecord,
    PlantView,
};

const GENERA: [&str; 6] = ["Aloe", "Crassula", "Echeveria", "Haworthia", "Sedum", "Lithops"];
const CAUSES: [&str; 4] = ["rot", "frost", "pests", "sunburn"];

/// Roughly the size of a large personal collection
fn collection(n: i64) -> (Vec<PlantRecord>, Vec<PlantEvent>) {
    let mut plants = Vec::new();
    let mut events = Vec::new();

    for id in 0..n {
        let genus = GENERA[id as usize % GENERA.len()];
        let species = format!("sp{}", id % 17);
        let mut plant = PlantRecord::new(id, &format!("plant {}", id), genus, &species)
            .born(&format!("2019-{:02}-01", id % 12 + 1));
        if id % 4 == 0 {
            plant = plant.died(
                &format!("2022-{:02}-15", id % 12 + 1),
                CAUSES[id as usize % CAUSES.len()],
            );
        }
        plants.push(plant);

        for w in 0..(id % 10) {
            events.push(PlantEvent::new(
                id,
                "watering",
                &format!("2024-{:02}-{:02}", w % 12 + 1, (id + w) % 28 + 1),
            ));
        }
    }

    (plants, events)
}

fn bench_pipeline(c: &mut Criterion) {
    let (plants, events) = collection(2_000);

    c.bench_function("derive.2000_plants", |b| {
        b.iter(|| derive(black_box(&plants), black_box(&events)))
    });

    let enriched = derive(&plants, &events);
    let selection = FilterSelection::default().with_genera(&["Aloe", "Sedum"]);

    c.bench_function("filter_summarize_insight.2000_plants", |b| {
        let mut generator = InsightGenerator::new(StdRng::seed_from_u64(42));
        b.iter(|| {
            let base = PlantView::from_slice(&enriched);
            let view = selection.apply(&base);
            let summary = summarize(&view);
            let insight = generator.generate(&view, &selection.genera, &selection.species);
            black_box((summary, insight))
        })
    });

    c.bench_function("resolve_options.2000_plants", |b| {
        let resolver = FilterResolver::new(PlantView::from_slice(&enriched));
        b.iter(|| resolver.options(black_box(&selection)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
