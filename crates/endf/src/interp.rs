//! Evaluation of interpolation schemes

use log::trace;

use crate::error::{Error, Result};
use crate::scheme::InterpScheme;

/// The four tabulated interpolation laws of ENDF-6 MF=3 data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Law {
    /// Code 1, y linear in x
    LinLin,
    /// Code 2, ln(y) linear in x
    LinLog,
    /// Code 3, y linear in ln(x)
    LogLin,
    /// Code 4, ln(y) linear in ln(x)
    LogLog,
}

impl Law {
    /// Map a file law code onto a law, `region` carried for error context
    pub fn from_code(code: u32, region: usize) -> Result<Self> {
        match code {
            1 => Ok(Self::LinLin),
            2 => Ok(Self::LinLog),
            3 => Ok(Self::LogLin),
            4 => Ok(Self::LogLog),
            law => Err(Error::UnsupportedLaw { law, region }),
        }
    }

    /// The MF=3 code this law is written as
    pub fn code(self) -> u32 {
        match self {
            Self::LinLin => 1,
            Self::LinLog => 2,
            Self::LogLin => 3,
            Self::LogLog => 4,
        }
    }

    /// Interpolate at `x` between `(x1, y1)` and `(x2, y2)`
    ///
    /// The caller guarantees `x1 != x2`; the operands of any logarithm are
    /// checked here so that a bad table fails loudly instead of producing
    /// NaN.
    fn apply(self, segment: usize, x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<f64> {
        if matches!(self, Self::LinLog | Self::LogLog) {
            for operand in [y1, y2] {
                if operand <= 0.0 {
                    return Err(Error::NonPositiveOperand {
                        law: self.code(),
                        segment,
                        operand,
                    });
                }
            }
        }

        if matches!(self, Self::LogLin | Self::LogLog) {
            for operand in [x, x1, x2] {
                if operand <= 0.0 {
                    return Err(Error::NonPositiveOperand {
                        law: self.code(),
                        segment,
                        operand,
                    });
                }
            }
        }

        let value = match self {
            Self::LinLin => y1 + (y2 - y1) * (x - x1) / (x2 - x1),
            Self::LinLog => (y1.ln() + (y2.ln() - y1.ln()) * (x - x1) / (x2 - x1)).exp(),
            Self::LogLin => y1 + (y2 - y1) * (x.ln() - x1.ln()) / (x2.ln() - x1.ln()),
            Self::LogLog => {
                (y1.ln() + (y2.ln() - y1.ln()) * (x.ln() - x1.ln()) / (x2.ln() - x1.ln())).exp()
            }
        };

        Ok(value)
    }
}

impl InterpScheme {
    /// Cross section at a single energy
    ///
    /// The query must lie in the closed interval covered by the table. A
    /// query landing exactly on an interior table energy is evaluated on
    /// the segment ending at that point, per the ENDF-6 convention that
    /// boundary points belong to the preceding region.
    pub fn evaluate(&self, energy: f64) -> Result<f64> {
        let (lower, upper) = self.bounds();
        if energy < lower || energy > upper {
            return Err(Error::EnergyOutsideTable {
                energy,
                lower,
                upper,
            });
        }

        // leftmost insertion position, back one, clamped onto a segment
        let position = self.energies.partition_point(|e| *e < energy);
        let segment = position.saturating_sub(1).min(self.energies.len() - 2);

        // first region whose breakpoint lies beyond the segment
        let region = self
            .breakpoints
            .iter()
            .position(|b| segment < *b)
            .ok_or(Error::UncoveredSegment { segment })?;
        let law = Law::from_code(self.codes[region], region)?;
        trace!("E={energy} segment={segment} region={region} law={law:?}");

        let (x1, x2) = (self.energies[segment], self.energies[segment + 1]);
        let (y1, y2) = (self.values[segment], self.values[segment + 1]);

        if x1 == x2 {
            return Err(Error::DegenerateSegment {
                segment,
                energy: x1,
            });
        }

        law.apply(segment, energy, x1, y1, x2, y2)
    }

    /// Cross sections for a batch of energies
    ///
    /// Output order and length match the input. The batch is fail-fast: the
    /// first energy that cannot be evaluated fails the whole call, exactly
    /// as [evaluate](Self::evaluate) would for that energy alone.
    pub fn evaluate_many(&self, energies: &[f64]) -> Result<Vec<f64>> {
        energies.iter().map(|energy| self.evaluate(*energy)).collect()
    }
}
