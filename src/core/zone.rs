//! Premium ("avenue") zone classification.
//!
//! A lot sits on the avenue when its block and lot number fall inside one of
//! the ranges in [`ZONE_RULES`]. Rules are evaluated in order and the first
//! match wins; new stretches of avenue are added by extending the table.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)QUADRA\s*([0-9]+)").expect("valid block pattern"));
static LOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)LOTE\s*([0-9]+)").expect("valid lot pattern"));

/// Block and lot number extracted from an identifier like `"QUADRA 12 LOTE 04"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LotRef {
    pub block: u32,
    pub lot_number: u32,
}

impl LotRef {
    /// Returns `None` unless both the block and the lot number are present.
    pub fn parse(identifier: &str) -> Option<Self> {
        let block = first_number(&BLOCK_RE, identifier)?;
        let lot_number = first_number(&LOT_RE, identifier)?;
        Some(LotRef { block, lot_number })
    }
}

fn first_number(re: &Regex, haystack: &str) -> Option<u32> {
    let digits = re.captures(haystack)?.get(1)?.as_str();
    // Only overflow can fail here; such a number is past every rule bound.
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[derive(Debug, Clone, Copy)]
pub enum BlockSet {
    Only(&'static [u32]),
    /// Every block not listed.
    Outside(&'static [u32]),
}

impl BlockSet {
    fn contains(&self, block: u32) -> bool {
        match self {
            BlockSet::Only(blocks) => blocks.contains(&block),
            BlockSet::Outside(blocks) => !blocks.contains(&block),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZoneRule {
    pub blocks: BlockSet,
    pub lots: RangeInclusive<u32>,
}

impl ZoneRule {
    pub fn matches(&self, lot: LotRef) -> bool {
        self.blocks.contains(lot.block) && self.lots.contains(&lot.lot_number)
    }
}

/// Blocks with their own avenue stretch; all others use the default front.
pub const SPECIAL_BLOCKS: &[u32] = &[1, 2, 3, 4, 27, 28, 31, 33, 34, 35, 58, 59, 64, 65, 66];

pub const ZONE_RULES: &[ZoneRule] = &[
    ZoneRule {
        blocks: BlockSet::Only(&[1, 2, 3, 4, 33, 34, 35]),
        lots: 0..=6,
    },
    ZoneRule {
        blocks: BlockSet::Only(&[27, 58]),
        lots: 0..=29,
    },
    ZoneRule {
        blocks: BlockSet::Only(&[28, 59]),
        lots: 0..=18,
    },
    ZoneRule {
        blocks: BlockSet::Only(&[31]),
        lots: 8..=21,
    },
    ZoneRule {
        blocks: BlockSet::Only(&[64]),
        lots: 17..=24,
    },
    ZoneRule {
        blocks: BlockSet::Only(&[65, 66]),
        lots: 27..=45,
    },
    ZoneRule {
        blocks: BlockSet::Outside(SPECIAL_BLOCKS),
        lots: 0..=7,
    },
];

pub fn classify(lot: LotRef) -> bool {
    ZONE_RULES.iter().any(|rule| rule.matches(lot))
}

/// Unparseable identifiers are never premium.
pub fn is_premium_zone(identifier: &str) -> bool {
    LotRef::parse(identifier).is_some_and(classify)
}
