//! Curation passes over species tables

use std::collections::{HashMap, HashSet};

use crate::region::Region;
use crate::species::SpeciesRecord;

/// Drop rows that repeat an earlier `(dex, name)` pair, keeping the first
/// occurrence. Input order is preserved.
pub fn dedupe_species(records: Vec<SpeciesRecord>) -> Vec<SpeciesRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.key()))
        .collect()
}

/// Merge `overlay` into `base`.
///
/// Overlay rows replace base rows with the same key in place; overlay rows
/// with a new key are appended in overlay order.
pub fn merge_species(base: Vec<SpeciesRecord>, overlay: Vec<SpeciesRecord>) -> Vec<SpeciesRecord> {
    let mut merged = dedupe_species(base);
    let mut index: HashMap<(u16, String), usize> = merged
        .iter()
        .enumerate()
        .map(|(i, record)| (record.key(), i))
        .collect();

    for record in overlay {
        match index.get(&record.key()) {
            Some(&i) => merged[i] = record,
            None => {
                index.insert(record.key(), merged.len());
                merged.push(record);
            }
        }
    }
    merged
}

/// Pair each record with its home region (None for dex numbers outside
/// every known range)
pub fn tag_regions(records: &[SpeciesRecord]) -> Vec<(&SpeciesRecord, Option<Region>)> {
    records
        .iter()
        .map(|record| (record, Region::for_dex(record.dex)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::BaseStats;

    fn stats(attack: u16) -> BaseStats {
        BaseStats {
            attack,
            ..BaseStats::default()
        }
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let records = vec![
            SpeciesRecord::new(1, "Bulbasaur", "Grass").with_stats(stats(49)),
            SpeciesRecord::new(4, "Charmander", "Fire"),
            SpeciesRecord::new(1, "bulbasaur", "Grass").with_stats(stats(99)),
        ];

        let deduped = dedupe_species(records);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].stats.attack, 49);
        assert_eq!(deduped[1].name, "Charmander");
    }

    #[test]
    fn test_dedupe_keeps_formes() {
        // Same dex number, different forme names are distinct rows
        let records = vec![
            SpeciesRecord::new(38, "Ninetales", "Fire"),
            SpeciesRecord::new(38, "Ninetales-Alola", "Ice").with_secondary("Fairy"),
        ];
        assert_eq!(dedupe_species(records).len(), 2);
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let base = vec![
            SpeciesRecord::new(1, "Bulbasaur", "Grass"),
            SpeciesRecord::new(4, "Charmander", "Fire"),
        ];
        let overlay = vec![
            SpeciesRecord::new(1, "Bulbasaur", "Grass").with_secondary("Poison"),
            SpeciesRecord::new(7, "Squirtle", "Water"),
        ];

        let merged = merge_species(base, overlay);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].type2.as_deref(), Some("Poison"));
        assert_eq!(merged[1].name, "Charmander");
        assert_eq!(merged[2].name, "Squirtle");
    }

    #[test]
    fn test_merge_overlay_duplicates_last_wins() {
        let overlay = vec![
            SpeciesRecord::new(7, "Squirtle", "Water").with_stats(stats(1)),
            SpeciesRecord::new(7, "Squirtle", "Water").with_stats(stats(2)),
        ];

        let merged = merge_species(Vec::new(), overlay);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].stats.attack, 2);
    }

    #[test]
    fn test_tag_regions() {
        let records = vec![
            SpeciesRecord::new(25, "Pikachu", "Electric"),
            SpeciesRecord::new(906, "Sprigatito", "Grass"),
            SpeciesRecord::new(0, "MissingNo", "Normal"),
        ];

        let tagged = tag_regions(&records);
        assert_eq!(tagged[0].1, Some(Region::Kanto));
        assert_eq!(tagged[1].1, Some(Region::Paldea));
        assert_eq!(tagged[2].1, None);
    }
}
