//! Rule descriptors and the generation transition

use super::{Cell, Grid};
use crate::error::{LifeError, LifeResult};
use std::fmt;
use std::str::FromStr;

/// Classic Conway rules: survive on 2 or 3, born on 3
pub const DEFAULT_RULES: &str = "23/3";

/// Number of distinct neighbour counts in a Moore neighbourhood (0..=8)
const NEIGHBOUR_COUNTS: usize = 9;

/// One position of a rule descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEntry {
    /// A decimal digit
    Count(u8),
    /// Any other character; never equal to a neighbour count
    Inert(char),
}

impl RuleEntry {
    fn parse(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => RuleEntry::Count(d as u8),
            None => RuleEntry::Inert(c),
        }
    }

    /// Whether this entry matches `neighbours`
    pub fn matches(self, neighbours: u8) -> bool {
        matches!(self, RuleEntry::Count(n) if n == neighbours)
    }

    pub fn is_inert(self) -> bool {
        matches!(self, RuleEntry::Inert(_))
    }
}

impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleEntry::Count(n) => write!(f, "{}", n),
            RuleEntry::Inert(_) => write!(f, "?"),
        }
    }
}

/// Survival and birth conditions of a life-like automaton.
///
/// `survival` lists the neighbour counts at which a live cell stays alive,
/// `birth` the counts at which a dead cell becomes alive. Both keep the
/// entries in descriptor order; membership goes through lookup tables built
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    survival: Vec<RuleEntry>,
    birth: Vec<RuleEntry>,
    survival_table: [bool; NEIGHBOUR_COUNTS],
    birth_table: [bool; NEIGHBOUR_COUNTS],
}

/// Parse a `"<survival-digits>/<birth-digits>"` descriptor such as `"23/3"`.
///
/// The descriptor must contain exactly one `/`. Either side may be empty.
/// Characters that are not decimal digits are kept as inert entries rather
/// than rejected.
pub fn parse_rules(descriptor: &str) -> LifeResult<RuleSet> {
    let parts: Vec<&str> = descriptor.split('/').collect();
    let [survival, birth] = parts.as_slice() else {
        return Err(LifeError::MalformedRuleString(descriptor.to_string()));
    };

    let rules = RuleSet::from_entries(parse_side(survival), parse_side(birth));
    log::debug!("parsed rule descriptor {:?} as {}", descriptor, rules);
    Ok(rules)
}

fn parse_side(side: &str) -> Vec<RuleEntry> {
    side.chars().map(RuleEntry::parse).collect()
}

fn lookup_table(entries: &[RuleEntry]) -> [bool; NEIGHBOUR_COUNTS] {
    let mut table = [false; NEIGHBOUR_COUNTS];
    for entry in entries {
        if let RuleEntry::Count(n) = *entry {
            if let Some(slot) = table.get_mut(n as usize) {
                *slot = true;
            }
        }
    }
    table
}

impl RuleSet {
    pub fn from_entries(survival: Vec<RuleEntry>, birth: Vec<RuleEntry>) -> Self {
        Self {
            survival_table: lookup_table(&survival),
            birth_table: lookup_table(&birth),
            survival,
            birth,
        }
    }

    /// Survival entries in descriptor order
    pub fn survival(&self) -> &[RuleEntry] {
        &self.survival
    }

    /// Birth entries in descriptor order
    pub fn birth(&self) -> &[RuleEntry] {
        &self.birth
    }

    /// Whether a live cell with `neighbours` live neighbours stays alive
    #[inline]
    pub fn survives(&self, neighbours: u8) -> bool {
        self.survival_table
            .get(neighbours as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Whether a dead cell with `neighbours` live neighbours comes alive
    #[inline]
    pub fn is_born(&self, neighbours: u8) -> bool {
        self.birth_table
            .get(neighbours as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Next state of a cell given its current state and neighbour count
    #[inline]
    pub fn next_state(&self, cell: Cell, neighbours: u8) -> Cell {
        let live = match cell {
            Cell::Dead => self.is_born(neighbours),
            Cell::Live => self.survives(neighbours),
        };
        Cell::from(live)
    }

    /// Compute the next generation of `current`.
    ///
    /// Every cell is decided from `current` alone and written into a fresh
    /// grid, so the result does not depend on visiting order.
    pub fn evolve(&self, current: &Grid) -> Grid {
        current.map_cells(|row, col, cell| {
            self.next_state(cell, current.count_neighbours(row, col))
        })
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.evolve(&grid);
        }
        grid
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_entries(
            vec![RuleEntry::Count(2), RuleEntry::Count(3)],
            vec![RuleEntry::Count(3)],
        )
    }
}

impl FromStr for RuleSet {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rules(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.survival {
            write!(f, "{}", entry)?;
        }
        write!(f, "/")?;
        for entry in &self.birth {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[RuleEntry]) -> Vec<u8> {
        entries
            .iter()
            .filter_map(|e| match e {
                RuleEntry::Count(n) => Some(*n),
                RuleEntry::Inert(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_single_elements() {
        let rules = parse_rules("1/1").unwrap();
        assert_eq!(counts(rules.survival()), vec![1]);
        assert_eq!(counts(rules.birth()), vec![1]);
    }

    #[test]
    fn test_parse_multiple_elements() {
        let rules = parse_rules("123/456").unwrap();
        assert_eq!(counts(rules.survival()), vec![1, 2, 3]);
        assert_eq!(counts(rules.birth()), vec![4, 5, 6]);
    }

    #[test]
    fn test_parse_keeps_descriptor_order() {
        let rules = parse_rules("32/63").unwrap();
        assert_eq!(counts(rules.survival()), vec![3, 2]);
        assert_eq!(counts(rules.birth()), vec![6, 3]);
    }

    #[test]
    fn test_parse_empty_sides() {
        let rules = parse_rules("/").unwrap();
        assert!(rules.survival().is_empty());
        assert!(rules.birth().is_empty());

        let rules = parse_rules("/3").unwrap();
        assert!(rules.survival().is_empty());
        assert_eq!(counts(rules.birth()), vec![3]);
        assert!((0..=8).all(|n| !rules.survives(n)));
    }

    #[test]
    fn test_parse_rejects_wrong_slash_count() {
        for bad in ["11", "", "1/2/3", "//"] {
            assert_eq!(
                parse_rules(bad),
                Err(LifeError::MalformedRuleString(bad.to_string())),
                "descriptor {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_non_numeric_entries_are_inert() {
        let rules = parse_rules("one/two").unwrap();
        assert_eq!(rules.survival().len(), 3);
        assert_eq!(rules.birth().len(), 3);
        assert!(rules.survival().iter().all(|e| e.is_inert()));
        assert!(rules.birth().iter().all(|e| e.is_inert()));

        for n in 0..=8 {
            assert!(!rules.survives(n));
            assert!(!rules.is_born(n));
            assert!(rules.survival().iter().all(|e| !e.matches(n)));
        }
    }

    #[test]
    fn test_mixed_entries() {
        let rules = parse_rules("2x3/ 3").unwrap();
        assert_eq!(rules.survival().len(), 3);
        assert!(rules.survival()[1].is_inert());
        assert!(rules.survives(2));
        assert!(rules.survives(3));
        assert!(rules.birth()[0].is_inert());
        assert!(rules.is_born(3));
    }

    #[test]
    fn test_nine_never_matches() {
        let rules = parse_rules("9/9").unwrap();
        assert_eq!(counts(rules.survival()), vec![9]);
        assert!((0..=8).all(|n| !rules.survives(n) && !rules.is_born(n)));
    }

    #[test]
    fn test_default_is_conway() {
        assert_eq!(RuleSet::default(), parse_rules(DEFAULT_RULES).unwrap());
        assert_eq!(RuleSet::default().to_string(), "23/3");
        assert_eq!("23/3".parse::<RuleSet>().unwrap(), RuleSet::default());
    }

    #[test]
    fn test_display_marks_inert_entries() {
        let rules = parse_rules("2a/3").unwrap();
        assert_eq!(rules.to_string(), "2?/3");
    }

    #[test]
    fn test_rule_logic() {
        let rules = RuleSet::default();
        assert_eq!(rules.next_state(Cell::Live, 2), Cell::Live);
        assert_eq!(rules.next_state(Cell::Live, 3), Cell::Live);
        assert_eq!(rules.next_state(Cell::Dead, 3), Cell::Live);
        assert_eq!(rules.next_state(Cell::Live, 1), Cell::Dead);
        assert_eq!(rules.next_state(Cell::Live, 4), Cell::Dead);
        assert_eq!(rules.next_state(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn test_still_life_block() {
        let grid = Grid::from_values(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(RuleSet::default().evolve(&grid), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = Grid::from_values(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
        let expected = Grid::from_values(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]).unwrap();

        let rules = RuleSet::default();
        let evolved = rules.evolve(&grid);
        assert_eq!(evolved, expected);
        assert_eq!(rules.evolve_generations(grid.clone(), 2), grid);
    }

    #[test]
    fn test_custom_rules_evolve() {
        // "/2" (Seeds): nothing survives, two neighbours give birth
        let rules = parse_rules("/2").unwrap();
        let grid = Grid::from_values(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]).unwrap();
        let expected = Grid::from_values(&[&[0, 1, 1, 0], &[0, 0, 0, 0], &[0, 1, 1, 0]]).unwrap();
        assert_eq!(rules.evolve(&grid), expected);
    }
}
