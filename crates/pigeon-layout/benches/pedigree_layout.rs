use criterion::{Criterion, criterion_group, criterion_main};
use pigeon_core::{Band, MemoryStore, Pigeon, PigeonId, Sex, build_pedigree_tree};
use pigeon_layout::svg::{SvgRenderOptions, render_pedigree_debug_svg};
use pigeon_layout::{LayoutConfiguration, compute_layout};
use std::hint::black_box;

/// Complete ancestry `depth` generations deep; ids are the heap slot indices.
fn full_store(depth: usize) -> MemoryStore {
    let slots = (1usize << depth) - 1;
    let pigeons = (0..slots).map(|i| {
        let sex = if i % 2 == 1 { Sex::Cock } else { Sex::Hen };
        let (sire, dam) = (2 * i + 1, 2 * i + 2);
        let parent = |j: usize| (j < slots).then(|| PigeonId::new(j.to_string()));
        let mut p = Pigeon::new(PigeonId::new(i.to_string()), Band::new(format!("{i:07}")), sex)
            .with_parents(parent(sire), parent(dam));
        p.name = format!("Pigeon {i}");
        p.extra[0] = "1st National".to_string();
        p
    });
    MemoryStore::from_pigeons(pigeons).expect("store")
}

fn bench_pedigree(c: &mut Criterion) {
    let config = LayoutConfiguration::default();
    let mut group = c.benchmark_group("pedigree");
    for depth in [4usize, 5, 8] {
        let store = full_store(depth);
        let start = store.ancestor(&PigeonId::from("0"));

        group.bench_function(format!("build_tree_depth_{depth}"), |b| {
            b.iter(|| build_pedigree_tree(&store, black_box(start), depth).expect("tree"))
        });

        let tree = build_pedigree_tree(&store, start, depth).expect("tree");
        group.bench_function(format!("compute_layout_depth_{depth}"), |b| {
            b.iter(|| compute_layout(black_box(&tree), &config, 27.7, 17.0, 0.0).expect("layout"))
        });

        let layout = compute_layout(&tree, &config, 277.0, 170.0, 0.0).expect("layout");
        group.bench_function(format!("render_svg_depth_{depth}"), |b| {
            b.iter(|| render_pedigree_debug_svg(black_box(&layout), &SvgRenderOptions::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pedigree);
criterion_main!(benches);
