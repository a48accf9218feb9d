//! One-dimensional cellular automaton without boundary conditions.

use gf2_core::bits::{lsbf_value, msbf_value};
use gf2_core::BitVector;

use crate::error::OcaError;

/// Neighborhood geometry of an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatonConfig {
    /// Number of cells read by the local rule in masked evolution.
    pub neighborhood: usize,
    /// Position inside the neighborhood copied through by frozen cells.
    pub offset: usize,
    /// Radius used by shrinking evolution (window `2·radius + 1`).
    pub radius: usize,
}

impl AutomatonConfig {
    /// Configuration for masked evolution over `neighborhood` cells.
    pub fn with_neighborhood(neighborhood: usize, offset: usize) -> Self {
        Self {
            neighborhood,
            offset,
            radius: neighborhood.saturating_sub(1) / 2,
        }
    }

    /// Symmetric configuration of the given radius, centred on the updated cell.
    pub fn with_radius(radius: usize) -> Self {
        Self {
            neighborhood: 2 * radius + 1,
            offset: radius,
            radius,
        }
    }

    fn validate(&self) -> Result<(), OcaError> {
        if self.offset >= self.neighborhood {
            return Err(OcaError::InvalidOffset {
                offset: self.offset,
                neighborhood: self.neighborhood,
            });
        }
        Ok(())
    }
}

/// How the next configuration is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evolution<'a> {
    /// Apply the rule to every `(2·radius + 1)`-wide window; shrinks by `2·radius`.
    Shrinking,
    /// Apply the rule to every `neighborhood`-wide window except where the mask
    /// is set, in which case the cell at `offset` inside the window is copied.
    /// Shrinks by `neighborhood - 1`.
    Masked(&'a [bool]),
}

/// Cellular automaton owning its configuration and rule tables.
///
/// Evolution computes the whole next configuration before replacing the
/// current one, and leaves the cells untouched when it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    cells: BitVector,
    rule: BitVector,
    rule2: Option<BitVector>,
    config: AutomatonConfig,
}

impl Automaton {
    /// Creates an automaton with `cells` zero cells and a single rule.
    ///
    /// The rule must have `2^neighborhood` entries and the offset must lie
    /// inside the neighborhood.
    pub fn new(cells: usize, rule: BitVector, config: AutomatonConfig) -> Result<Self, OcaError> {
        config.validate()?;
        check_rule(&rule, config.neighborhood)?;
        Ok(Self {
            cells: BitVector::zeros(cells),
            rule,
            rule2: None,
            config,
        })
    }

    /// Creates an automaton holding a second (switched) rule as well.
    pub fn with_rules(
        cells: usize,
        rule: BitVector,
        rule2: BitVector,
        config: AutomatonConfig,
    ) -> Result<Self, OcaError> {
        let mut ca = Self::new(cells, rule, config)?;
        ca.set_rule2(rule2)?;
        Ok(ca)
    }

    /// Current configuration.
    pub fn cells(&self) -> &BitVector {
        &self.cells
    }

    /// Replaces the current configuration.
    pub fn set_cells(&mut self, cells: BitVector) {
        self.cells = cells;
    }

    /// Local rule driving both evolution modes.
    pub fn rule(&self) -> &BitVector {
        &self.rule
    }

    /// Replaces the whole rule table.
    pub fn set_rule(&mut self, rule: BitVector) -> Result<(), OcaError> {
        check_rule(&rule, self.config.neighborhood)?;
        self.rule = rule;
        Ok(())
    }

    /// Second (switched) rule, if any. It is carried but not used by evolution.
    pub fn rule2(&self) -> Option<&BitVector> {
        self.rule2.as_ref()
    }

    /// Replaces the second rule table.
    pub fn set_rule2(&mut self, rule2: BitVector) -> Result<(), OcaError> {
        check_rule(&rule2, self.config.neighborhood)?;
        self.rule2 = Some(rule2);
        Ok(())
    }

    /// Neighborhood geometry.
    pub fn config(&self) -> AutomatonConfig {
        self.config
    }

    /// Neighborhood size.
    pub fn neighborhood(&self) -> usize {
        self.config.neighborhood
    }

    /// Changes the passthrough offset of frozen cells.
    pub fn set_offset(&mut self, offset: usize) -> Result<(), OcaError> {
        let config = AutomatonConfig {
            offset,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Changes the radius used by shrinking evolution.
    pub fn set_radius(&mut self, radius: usize) {
        self.config.radius = radius;
    }

    /// Advances one step in the given mode.
    pub fn evolve(&mut self, mode: Evolution<'_>) -> Result<(), OcaError> {
        match mode {
            Evolution::Shrinking => self.step_shrinking(),
            Evolution::Masked(mask) => self.step_masked(mask),
        }
    }

    /// Advances one masked step with no frozen cells.
    pub fn step(&mut self) -> Result<(), OcaError> {
        let len = self.masked_output_len()?;
        self.step_masked(&vec![false; len])
    }

    /// Length of the configuration produced by a masked step.
    pub fn masked_output_len(&self) -> Result<usize, OcaError> {
        let nbr = self.config.neighborhood;
        if self.cells.len() < nbr {
            return Err(OcaError::TooFewCells {
                cells: self.cells.len(),
                window: nbr,
            });
        }
        Ok(self.cells.len() - nbr + 1)
    }

    /// Shrinking evolution: every output cell reads the `(2r+1)`-wide window
    /// starting at its position, with the leftmost cell as the most
    /// significant bit of the rule index.
    pub fn step_shrinking(&mut self) -> Result<(), OcaError> {
        let r = self.config.radius;
        let window = 2 * r + 1;
        let n = self.cells.len();
        if n <= 2 * r {
            return Err(OcaError::TooFewCells {
                cells: n,
                window,
            });
        }
        check_rule(&self.rule, window)?;

        let cells = self.cells.as_slice();
        let next = (0..n - 2 * r)
            .map(|i| -> Result<bool, OcaError> {
                Ok(self.delta(msbf_value(&cells[i..i + window])?))
            })
            .collect::<Result<BitVector, OcaError>>()?;
        self.cells = next;
        Ok(())
    }

    /// Masked evolution: the window is read in LSBF order; a set mask entry
    /// freezes the output cell to the value at `i + offset`.
    pub fn step_masked(&mut self, mask: &[bool]) -> Result<(), OcaError> {
        let expected = self.masked_output_len()?;
        if mask.len() != expected {
            return Err(OcaError::MaskLength {
                len: mask.len(),
                expected,
            });
        }

        let nbr = self.config.neighborhood;
        let offset = self.config.offset;
        let cells = self.cells.as_slice();
        let next = mask
            .iter()
            .enumerate()
            .map(|(i, frozen)| -> Result<bool, OcaError> {
                if *frozen {
                    Ok(cells[i + offset])
                } else {
                    Ok(self.delta(lsbf_value(&cells[i..i + nbr])?))
                }
            })
            .collect::<Result<BitVector, OcaError>>()?;
        self.cells = next;
        Ok(())
    }

    // Callers check that the table covers every window value.
    fn delta(&self, index: u64) -> bool {
        self.rule[index as usize]
    }
}

fn check_rule(rule: &BitVector, neighborhood: usize) -> Result<(), OcaError> {
    let expected = u32::try_from(neighborhood)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift));
    match expected {
        Some(expected) if expected == rule.len() => Ok(()),
        _ => Err(OcaError::RuleLength {
            len: rule.len(),
            neighborhood,
            expected: expected.unwrap_or(0),
        }),
    }
}
