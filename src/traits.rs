//! The static trait table and the player-creation logic that draws from it.

use serde::{Deserialize, Serialize};

use crate::prng::Prng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Majority,
    Common,
    Uncommon,
    Rare,
    Unique,
}

impl Rarity {
    pub fn pct(self) -> i32 {
        match self {
            Rarity::Majority => 70,
            Rarity::Common => 55,
            Rarity::Uncommon => 25,
            Rarity::Rare => 10,
            Rarity::Unique => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Trait {
    Aggressive = 0,
    Casual,
    Competitive,
    Confident,
    Defensive,
    Leader,
    LoneWolf,
    MetaAdaptive,
    Nervous,
    RiskAverse,
    Specialist,
    Streaky,
    TeamOriented,
    TiltProne,
    Unpredictable,
    Versatile,
}

pub const ALL_TRAITS: [Trait; 16] = [
    Trait::Aggressive,
    Trait::Casual,
    Trait::Competitive,
    Trait::Confident,
    Trait::Defensive,
    Trait::Leader,
    Trait::LoneWolf,
    Trait::MetaAdaptive,
    Trait::Nervous,
    Trait::RiskAverse,
    Trait::Specialist,
    Trait::Streaky,
    Trait::TeamOriented,
    Trait::TiltProne,
    Trait::Unpredictable,
    Trait::Versatile,
];

/// Stat deltas contributed by a single trait, over the seven axes.
#[derive(Debug, Clone, Copy)]
pub struct TraitInfo {
    pub rarity: Rarity,
    pub agr: i32,
    pub fle: i32,
    pub gri: i32,
    pub edr: i32,
    pub ins: i32,
    pub cre: i32,
    pub pre: i32,
    pub display_name: &'static str,
    pub description: &'static str,
}

const fn info(
    rarity: Rarity,
    agr: i32,
    fle: i32,
    gri: i32,
    edr: i32,
    ins: i32,
    cre: i32,
    pre: i32,
    display_name: &'static str,
    description: &'static str,
) -> TraitInfo {
    TraitInfo {
        rarity,
        agr,
        fle,
        gri,
        edr,
        ins,
        cre,
        pre,
        display_name,
        description,
    }
}

pub fn trait_info(t: Trait) -> &'static TraitInfo {
    &TRAIT_CATALOG[t as usize]
}

pub const TRAIT_CATALOG: [TraitInfo; 16] = [
    info(Rarity::Common, 3, 0, -2, -1, 2, 1, -1, "Aggressive", "Prefers risky, high-damage plays"),
    info(Rarity::Majority, -1, 1, -1, -1, 0, 0, -1, "Casual", "Plays for fun, not highly competitive"),
    info(Rarity::Common, 2, 1, 2, 2, 1, -1, 2, "Competitive", "Prefers ranked play, always tries to win"),
    info(Rarity::Common, 2, 0, 2, 1, 1, -1, 0, "Confident", "More aggressive after wins"),
    info(Rarity::Common, -2, 1, 3, 2, -1, -2, 2, "Defensive", "Avoids risk, plays conservatively"),
    info(Rarity::Rare, 1, 2, 2, 1, 2, 1, 2, "Leader", "Plays better when leading a team"),
    info(Rarity::Uncommon, 2, -2, 1, 1, 1, 1, 0, "LoneWolf", "Prefers solo play, avoids teamwork"),
    info(Rarity::Rare, 1, 3, 1, 1, 3, 0, 1, "MetaAdaptive", "Learns from opponents, adjusts strategy"),
    info(Rarity::Uncommon, -2, -1, -3, -2, -1, -1, -1, "Nervous", "Worse performance under high-pressure"),
    info(Rarity::Rare, -3, -1, 2, 2, -1, -3, 3, "RiskAverse", "Avoids unnecessary risks, values survival"),
    info(Rarity::Rare, 1, -3, 2, 2, -1, -2, 3, "Specialist", "Sticks to one play-style or weapon"),
    info(Rarity::Uncommon, 2, -1, -2, -1, -1, 3, -1, "Streaky", "Recent results affects performance"),
    info(Rarity::Uncommon, -1, 2, 2, 1, 1, 0, 1, "TeamOriented", "Performs better in familiar teams"),
    info(Rarity::Rare, 3, -3, -3, -2, -1, 3, -1, "TiltProne", "Becomes reckless after consecutive losses"),
    info(Rarity::Rare, 1, 1, -2, -1, 1, 3, -1, "Unpredictable", "Inconsistent performance, high variance"),
    info(Rarity::Rare, 0, 3, 1, 1, 2, 1, 1, "Versatile", "Adapts frequently, changes play-style"),
];

/// Trait pairs of which a player may carry at most one member.
pub const CONFLICT_SETS: [[Trait; 2]; 2] = [
    [Trait::Aggressive, Trait::Defensive],
    [Trait::Casual, Trait::Competitive],
];

/// A bitmask over the 16 traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitMask(pub u16);

impl TraitMask {
    pub const EMPTY: TraitMask = TraitMask(0);

    pub fn has(self, t: Trait) -> bool {
        self.0 & (1 << t as u16) != 0
    }

    pub fn set(&mut self, t: Trait) {
        self.0 |= 1 << t as u16;
    }

    pub fn clear(&mut self, t: Trait) {
        self.0 &= !(1 << t as u16);
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Trait> {
        ALL_TRAITS.into_iter().filter(move |&t| self.has(t))
    }
}

/// Independently samples each trait's bit at its rarity percentage; if the
/// resulting mask is empty, falls back to `Casual`.
pub fn generate_random_traits(rng: &mut Prng) -> TraitMask {
    let mut mask = TraitMask::EMPTY;
    for &t in &ALL_TRAITS {
        if rng.bernoulli_pct(trait_info(t).rarity.pct()) {
            mask.set(t);
        }
    }
    if mask.is_empty() {
        mask.set(Trait::Casual);
    }
    mask
}

/// Enforces the conflict sets: for each pair with both bits set, keeps one
/// at random and clears the other.
pub fn validate_traits(mut mask: TraitMask, rng: &mut Prng) -> TraitMask {
    for pair in &CONFLICT_SETS {
        if mask.has(pair[0]) && mask.has(pair[1]) {
            let keep = if rng.bernoulli_pct(50) { pair[0] } else { pair[1] };
            for &t in pair {
                if t != keep {
                    mask.clear(t);
                }
            }
        }
    }
    mask
}

/// Sum of stat deltas contributed by every trait set in `mask`, in axis
/// order `(agr, fle, gri, edr, ins, cre, pre)`.
pub fn sum_deltas(mask: TraitMask) -> (i32, i32, i32, i32, i32, i32, i32) {
    let mut totals = (0, 0, 0, 0, 0, 0, 0);
    for t in mask.iter() {
        let i = trait_info(t);
        totals.0 += i.agr;
        totals.1 += i.fle;
        totals.2 += i.gri;
        totals.3 += i.edr;
        totals.4 += i.ins;
        totals.5 += i.cre;
        totals.6 += i.pre;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_falls_back_to_casual() {
        // bernoulli_pct never fires when pct forced to 0 isn't representable
        // here, so drive with a seed and just check the invariant directly.
        let mask = TraitMask::EMPTY;
        let mut forced = mask;
        if forced.is_empty() {
            forced.set(Trait::Casual);
        }
        assert!(forced.has(Trait::Casual));
    }

    #[test]
    fn conflict_resolution_keeps_exactly_one_per_pair() {
        let mut rng = Prng::new(5);
        let mut mask = TraitMask::EMPTY;
        mask.set(Trait::Aggressive);
        mask.set(Trait::Defensive);
        mask.set(Trait::Casual);
        mask.set(Trait::Competitive);
        let resolved = validate_traits(mask, &mut rng);
        assert_eq!(
            resolved.has(Trait::Aggressive) as i32 + resolved.has(Trait::Defensive) as i32,
            1
        );
        assert_eq!(
            resolved.has(Trait::Casual) as i32 + resolved.has(Trait::Competitive) as i32,
            1
        );
    }

    #[test]
    fn generated_traits_are_never_empty() {
        let mut rng = Prng::new(123);
        for _ in 0..200 {
            let mask = generate_random_traits(&mut rng);
            assert!(!mask.is_empty());
        }
    }

    #[test]
    fn catalog_has_sixteen_entries() {
        assert_eq!(TRAIT_CATALOG.len(), 16);
        assert_eq!(ALL_TRAITS.len(), 16);
    }
}
