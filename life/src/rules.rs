// rules.rs - Survival and birth tables for each cell kind

use crate::{CellKind, LifeError, NeighborCensus};
use serde::{Deserialize, Serialize};

/// A set of neighbor counts in `0..=8`, one bit per count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const EMPTY: NeighborSet = NeighborSet(0);
    pub const ALL: NeighborSet = NeighborSet(0b1_1111_1111);

    pub fn from_counts(counts: &[u8]) -> Result<Self, LifeError> {
        counts.iter().try_fold(Self::EMPTY, |set, &count| {
            if count > 8 {
                Err(LifeError::NeighborCount(count))
            } else {
                Ok(NeighborSet(set.0 | 1 << count))
            }
        })
    }

    /// Compile-time constructor for the built-in tables. Counts must be in range.
    const fn of(counts: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < counts.len() {
            bits |= 1 << counts[i];
            i += 1;
        }
        NeighborSet(bits)
    }

    #[inline]
    pub fn contains(self, count: u8) -> bool {
        count <= 8 && self.0 & (1 << count) != 0
    }

    pub fn counts(self) -> Vec<u8> {
        (0..=8).filter(|&count| self.contains(count)).collect()
    }
}

impl From<NeighborSet> for Vec<u8> {
    fn from(set: NeighborSet) -> Self {
        set.counts()
    }
}

impl TryFrom<Vec<u8>> for NeighborSet {
    type Error = LifeError;

    fn try_from(counts: Vec<u8>) -> Result<Self, Self::Error> {
        NeighborSet::from_counts(&counts)
    }
}

/// Neighbor counts under which each live kind survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalTable {
    pub standard: NeighborSet,
    pub immortal: NeighborSet,
    pub hyper_reproductive: NeighborSet,
    pub lazy: NeighborSet,
}

impl SurvivalTable {
    pub fn for_kind(&self, kind: CellKind) -> NeighborSet {
        match kind {
            CellKind::Empty             => NeighborSet::EMPTY,
            CellKind::Standard          => self.standard,
            CellKind::Immortal          => self.immortal,
            CellKind::HyperReproductive => self.hyper_reproductive,
            CellKind::Lazy              => self.lazy,
        }
    }
}

impl Default for SurvivalTable {
    fn default() -> Self {
        Self {
            standard: NeighborSet::of(&[2, 3]),
            immortal: NeighborSet::ALL,
            hyper_reproductive: NeighborSet::of(&[2, 3]),
            lazy: NeighborSet::of(&[3]),
        }
    }
}

/// An empty position becomes `kind` when its live-neighbor count is in `counts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRule {
    pub kind: CellKind,
    pub counts: NeighborSet,
    /// At least one neighbor must already be of `kind`.
    #[serde(default)]
    pub needs_parent: bool,
}

impl BirthRule {
    pub fn matches(&self, census: &NeighborCensus) -> bool {
        self.counts.contains(census.live()) && (!self.needs_parent || census.of(self.kind) > 0)
    }
}

/// Full rule table. `births` is in priority order: the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub survival: SurvivalTable,
    pub births: Vec<BirthRule>,
}

impl Default for RuleSet {
    /// Multi-kind rules. Births follow kind declaration order, so standard wins at three.
    fn default() -> Self {
        Self {
            survival: SurvivalTable::default(),
            births: vec![
                BirthRule {
                    kind: CellKind::Standard,
                    counts: NeighborSet::of(&[3]),
                    needs_parent: false,
                },
                BirthRule {
                    kind: CellKind::HyperReproductive,
                    counts: NeighborSet::of(&[2, 3]),
                    needs_parent: true,
                },
            ],
        }
    }
}

impl RuleSet {
    /// Classic B3/S23 births only. Survival stays per kind.
    pub fn conway() -> Self {
        Self {
            survival: SurvivalTable::default(),
            births: vec![BirthRule {
                kind: CellKind::Standard,
                counts: NeighborSet::of(&[3]),
                needs_parent: false,
            }],
        }
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        match self.births.iter().position(|rule| !rule.kind.is_live()) {
            Some(index) => Err(LifeError::EmptyBirth(index)),
            None => Ok(()),
        }
    }

    /// Parses a rule table from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, LifeError> {
        let rules: RuleSet = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn survives(&self, kind: CellKind, live_neighbors: u8) -> bool {
        self.survival.for_kind(kind).contains(live_neighbors)
    }

    /// Kind born on an empty position, if any rule matches.
    pub fn birth(&self, census: &NeighborCensus) -> Option<CellKind> {
        self.births
            .iter()
            .find(|rule| rule.matches(census))
            .map(|rule| rule.kind)
    }
}

/// Next state of a single cell given its kind and neighborhood.
pub fn next_kind(rules: &RuleSet, kind: CellKind, census: &NeighborCensus) -> CellKind {
    match kind {
        CellKind::Empty => rules.birth(census).unwrap_or(CellKind::Empty),
        live if rules.survives(live, census.live()) => live,
        _ => CellKind::Empty,
    }
}
