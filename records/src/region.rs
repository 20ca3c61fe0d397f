//! Regional tagging by national dex number

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Home region of a species, derived from the national dex range it falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Hisui,
    Paldea,
}

/// National dex ranges per region, in dex order
static DEX_RANGES: [(Region, RangeInclusive<u16>); 10] = [
    (Region::Kanto, 1..=151),
    (Region::Johto, 152..=251),
    (Region::Hoenn, 252..=386),
    (Region::Sinnoh, 387..=493),
    (Region::Unova, 494..=649),
    (Region::Kalos, 650..=721),
    (Region::Alola, 722..=809),
    (Region::Galar, 810..=898),
    (Region::Hisui, 899..=905),
    (Region::Paldea, 906..=1025),
];

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
        Region::Galar,
        Region::Hisui,
        Region::Paldea,
    ];

    /// Look up the region for a national dex number
    pub fn for_dex(dex: u16) -> Option<Region> {
        DEX_RANGES
            .iter()
            .find(|(_, range)| range.contains(&dex))
            .map(|(region, _)| *region)
    }

    /// National dex range owned by this region
    pub fn dex_range(&self) -> RangeInclusive<u16> {
        DEX_RANGES[*self as usize].1.clone()
    }

    /// Generation that introduced the region
    pub fn generation(&self) -> u8 {
        match self {
            Region::Kanto => 1,
            Region::Johto => 2,
            Region::Hoenn => 3,
            Region::Sinnoh => 4,
            Region::Unova => 5,
            Region::Kalos => 6,
            Region::Alola => 7,
            // Legends: Arceus shipped during Gen 8
            Region::Galar | Region::Hisui => 8,
            Region::Paldea => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Kanto => "Kanto",
            Region::Johto => "Johto",
            Region::Hoenn => "Hoenn",
            Region::Sinnoh => "Sinnoh",
            Region::Unova => "Unova",
            Region::Kalos => "Kalos",
            Region::Alola => "Alola",
            Region::Galar => "Galar",
            Region::Hisui => "Hisui",
            Region::Paldea => "Paldea",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_boundaries() {
        assert_eq!(Region::for_dex(1), Some(Region::Kanto));
        assert_eq!(Region::for_dex(151), Some(Region::Kanto));
        assert_eq!(Region::for_dex(152), Some(Region::Johto));
        assert_eq!(Region::for_dex(386), Some(Region::Hoenn));
        assert_eq!(Region::for_dex(493), Some(Region::Sinnoh));
        assert_eq!(Region::for_dex(649), Some(Region::Unova));
        assert_eq!(Region::for_dex(721), Some(Region::Kalos));
        assert_eq!(Region::for_dex(809), Some(Region::Alola));
        assert_eq!(Region::for_dex(898), Some(Region::Galar));
        assert_eq!(Region::for_dex(899), Some(Region::Hisui));
        assert_eq!(Region::for_dex(1025), Some(Region::Paldea));
    }

    #[test]
    fn test_region_out_of_range() {
        assert_eq!(Region::for_dex(0), None);
        assert_eq!(Region::for_dex(1026), None);
    }

    #[test]
    fn test_dex_ranges_are_contiguous() {
        let mut next = 1;
        for region in Region::ALL {
            let range = region.dex_range();
            assert_eq!(*range.start(), next, "{} starts at the wrong dex", region);
            next = range.end() + 1;
        }
        assert_eq!(next, 1026);
    }

    #[test]
    fn test_generation() {
        assert_eq!(Region::Kanto.generation(), 1);
        assert_eq!(Region::Hisui.generation(), 8);
        assert_eq!(Region::Paldea.generation(), 9);
    }
}
