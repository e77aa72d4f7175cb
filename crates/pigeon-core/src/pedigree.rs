//! Fixed-shape ancestry tree stored as a flat, heap-indexed slot array.
//!
//! Slot 0 holds the subject pigeon. The sire of slot `i` lives at `2 * i + 1` and its dam at
//! `2 * i + 2`, so a pedigree of `depth` generations always has `2^depth - 1` slots.

use crate::error::{Error, Result};
use crate::pigeon::Pigeon;
use crate::store::PigeonStore;
use serde::Serialize;

/// Full pedigree: subject, parents, grandparents, great- and great-great-grandparents.
pub const DEFAULT_DEPTH: usize = 5;
/// Depth used by the compact on-screen pedigree.
pub const COMPACT_DEPTH: usize = 4;
pub const MAX_DEPTH: usize = 12;

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(untagged)]
pub enum Ancestor<'a> {
    Known(&'a Pigeon),
    #[default]
    Unknown,
}

impl<'a> Ancestor<'a> {
    pub fn pigeon(&self) -> Option<&'a Pigeon> {
        match self {
            Ancestor::Known(p) => Some(p),
            Ancestor::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Ancestor::Known(_))
    }
}

impl PartialEq for Ancestor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ancestor::Known(a), Ancestor::Known(b)) => a.id == b.id,
            (Ancestor::Unknown, Ancestor::Unknown) => true,
            _ => false,
        }
    }
}

impl Eq for Ancestor<'_> {}

impl<'a> From<Option<&'a Pigeon>> for Ancestor<'a> {
    fn from(value: Option<&'a Pigeon>) -> Self {
        value.map_or(Ancestor::Unknown, Ancestor::Known)
    }
}

pub fn slot_count(depth: usize) -> usize {
    (1usize << depth) - 1
}

pub fn sire_index(index: usize) -> usize {
    2 * index + 1
}

pub fn dam_index(index: usize) -> usize {
    2 * index + 2
}

pub fn parent_index(index: usize) -> Option<usize> {
    (index > 0).then(|| (index - 1) / 2)
}

/// Generation band of a slot: 0 for the subject, 1 for the parents, and so on.
pub fn generation_of(index: usize) -> usize {
    (usize::BITS - 1 - (index + 1).leading_zeros()) as usize
}

/// Position of a slot within its generation, counted top to bottom.
pub fn position_in_generation(index: usize) -> usize {
    index + 1 - (1usize << generation_of(index))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PedigreeTree<'a> {
    depth: usize,
    slots: Vec<Ancestor<'a>>,
}

impl<'a> PedigreeTree<'a> {
    /// A tree with every slot set to [`Ancestor::Unknown`], used for blank pedigree templates.
    pub fn blank(depth: usize) -> Result<Self> {
        validate_depth(depth)?;
        Ok(Self {
            depth,
            slots: vec![Ancestor::Unknown; slot_count(depth)],
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `None` when `index` lies outside the tree; unknown ancestors are `Some(Ancestor::Unknown)`.
    pub fn get(&self, index: usize) -> Option<Ancestor<'a>> {
        self.slots.get(index).copied()
    }

    pub fn subject(&self) -> Ancestor<'a> {
        // A valid depth always leaves at least the subject slot.
        self.slots[0]
    }

    pub fn slots(&self) -> &[Ancestor<'a>] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Ancestor<'a>)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    pub fn known_count(&self) -> usize {
        self.slots.iter().filter(|a| a.is_known()).count()
    }
}

fn validate_depth(depth: usize) -> Result<()> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(Error::InvalidDepth {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

/// Walks the sire/dam references of `start` into a fixed-size slot array.
///
/// Missing ancestry is not an error: unknown parents leave their whole subtree as
/// [`Ancestor::Unknown`]. Only a depth outside `1..=MAX_DEPTH` is rejected.
pub fn build_pedigree_tree<'a, S>(
    store: &'a S,
    start: Ancestor<'a>,
    max_depth: usize,
) -> Result<PedigreeTree<'a>>
where
    S: PigeonStore + ?Sized,
{
    let mut tree = PedigreeTree::blank(max_depth)?;
    expand(store, &mut tree.slots, 0, 1, max_depth, start);
    tracing::debug!(
        depth = max_depth,
        slots = tree.len(),
        known = tree.known_count(),
        "built pedigree tree"
    );
    Ok(tree)
}

fn expand<'a, S>(
    store: &'a S,
    slots: &mut [Ancestor<'a>],
    index: usize,
    depth: usize,
    max_depth: usize,
    ancestor: Ancestor<'a>,
) where
    S: PigeonStore + ?Sized,
{
    if depth > max_depth || index >= slots.len() {
        return;
    }
    let Ancestor::Known(pigeon) = ancestor else {
        return;
    };
    slots[index] = ancestor;
    tracing::trace!(index, depth, id = %pigeon.id, "placed ancestor");

    expand(
        store,
        slots,
        sire_index(index),
        depth + 1,
        max_depth,
        store.sire_of(pigeon),
    );
    expand(
        store,
        slots,
        dam_index(index),
        depth + 1,
        max_depth,
        store.dam_of(pigeon),
    );
}
