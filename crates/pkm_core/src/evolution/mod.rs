//! Per-species evolution branch tables.

mod method;

pub use method::{
    EvolutionMethod, EvolutionType, GEN3_ENTRY_SIZE, decode_gen3_method, is_gen3_terminator,
};

use crate::error::{CodecError, ensure_span};
use crate::species::{MAX_SPECIES_ID_3, MAX_SPECIES_INDEX_3, national_from_gen3};
use crate::table::SentinelTable;

/// Branch slots reserved per species in Gen 3 data.
pub const GEN3_MAX_BRANCHES: usize = 5;

const GEN3_TABLE: SentinelTable = SentinelTable::new(GEN3_ENTRY_SIZE, GEN3_MAX_BRANCHES);

/// Ordered evolution branches of one species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionSet {
    possible_evolutions: Vec<EvolutionMethod>,
}

impl EvolutionSet {
    pub fn new(possible_evolutions: Vec<EvolutionMethod>) -> Self {
        Self {
            possible_evolutions,
        }
    }

    pub fn possible_evolutions(&self) -> &[EvolutionMethod] {
        &self.possible_evolutions
    }

    pub fn len(&self) -> usize {
        self.possible_evolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.possible_evolutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvolutionMethod> {
        self.possible_evolutions.iter()
    }
}

impl<'a> IntoIterator for &'a EvolutionSet {
    type Item = &'a EvolutionMethod;
    type IntoIter = std::slice::Iter<'a, EvolutionMethod>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Evolution sets keyed by national dex number.
///
/// Sets live in an arena; `sets[0]` is the shared empty set, and every
/// species without branches points at it.
#[derive(Debug, Clone)]
pub struct EvolutionTable {
    sets: Vec<EvolutionSet>,
    by_species: Vec<usize>,
}

const EMPTY_SET: usize = 0;

impl EvolutionTable {
    /// Builds the table from raw Gen 3 evolution data (40 bytes per internal index).
    pub fn from_gen3(data: &[u8]) -> Result<Self, CodecError> {
        let groups = usize::from(MAX_SPECIES_INDEX_3) + 1;
        ensure_span(data.len(), 0, groups * GEN3_TABLE.group_len(), "gen 3 evolution data")?;

        let mut sets = vec![EvolutionSet::default()];
        let mut by_species = vec![EMPTY_SET; usize::from(MAX_SPECIES_ID_3) + 1];

        for index in 1..=MAX_SPECIES_INDEX_3 {
            let species = national_from_gen3(index);
            if species == 0 {
                log::trace!("skipping unmapped gen 3 species index {index}");
                continue;
            }

            let methods = GEN3_TABLE.decode_group(
                data,
                usize::from(index),
                is_gen3_terminator,
                decode_gen3_method,
            )?;
            if methods.is_empty() {
                continue;
            }

            by_species[usize::from(species)] = sets.len();
            sets.push(EvolutionSet::new(methods));
        }

        log::debug!(
            "built gen 3 evolution table: {} species with branches",
            sets.len() - 1
        );

        Ok(Self { sets, by_species })
    }

    /// Branches for `species`, or `None` past the highest national number.
    pub fn get(&self, species: u16) -> Option<&EvolutionSet> {
        self.by_species
            .get(usize::from(species))
            .map(|&slot| &self.sets[slot])
    }

    /// The set every species without branches resolves to.
    pub fn empty_set(&self) -> &EvolutionSet {
        &self.sets[EMPTY_SET]
    }

    /// Number of species slots, including slot 0.
    pub fn len(&self) -> usize {
        self.by_species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &EvolutionSet)> + '_ {
        self.by_species
            .iter()
            .enumerate()
            .map(|(species, &slot)| (species as u16, &self.sets[slot]))
    }
}
