
use crate::*;

/// Subject `s` with parents `s.s`/`s.d` and grandparents `s.s.s`, `s.s.d`, `s.d.s`, `s.d.d`.
/// Nothing further back is recorded.
pub(crate) fn three_generation_store() -> MemoryStore {
    let mut pigeons = Vec::new();
    for (id, sex) in [
        ("s", Sex::Cock),
        ("s.s", Sex::Cock),
        ("s.d", Sex::Hen),
        ("s.s.s", Sex::Cock),
        ("s.s.d", Sex::Hen),
        ("s.d.s", Sex::Cock),
        ("s.d.d", Sex::Hen),
    ] {
        let generation = id.matches('.').count();
        let parents = if generation < 2 {
            (
                Some(PigeonId::new(format!("{id}.s"))),
                Some(PigeonId::new(format!("{id}.d"))),
            )
        } else {
            (None, None)
        };
        let band = Band::new(format!("{}", 1000 + pigeons.len()))
            .with_country("BE")
            .with_year("21");
        pigeons.push(Pigeon::new(id, band, sex).with_parents(parents.0, parents.1));
    }
    MemoryStore::from_pigeons(pigeons).unwrap()
}
