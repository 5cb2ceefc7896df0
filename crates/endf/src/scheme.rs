//! Validated interpolation scheme for one reaction

use crate::error::{Error, Result};
use crate::section::Section;

/// A validated, immutable ENDF-6 MF=3 interpolation scheme
///
/// Holds the tabulated (energy, cross section) points of one reaction plus
/// the breakpoint/law structure partitioning them into regions. Invariants
/// are checked once at construction and the scheme cannot be mutated
/// afterwards, so evaluation never needs to re-validate and shared
/// references can be queried from any number of threads.
///
/// ```rust
/// # use xstools_endf::InterpScheme;
/// let scheme = InterpScheme::new(
///     vec![1.0, 10.0, 100.0, 1000.0], // energies (eV)
///     vec![1.0, 2.0, 4.0, 8.0],       // cross sections (barns)
///     vec![2, 4],                     // 1-based breakpoints
///     vec![1, 4],                     // law codes
/// )
/// .unwrap();
///
/// assert_eq!(scheme.evaluate(5.5).unwrap(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpScheme {
    pub(crate) energies: Vec<f64>,
    pub(crate) values: Vec<f64>,
    /// Last table index of each region, converted to 0-based
    pub(crate) breakpoints: Vec<usize>,
    pub(crate) codes: Vec<u32>,
}

impl InterpScheme {
    /// Build a scheme from raw table data
    ///
    /// Breakpoints are taken 1-based as written in the file and converted
    /// internally. Fails when the breakpoint and code lists differ in
    /// length, when the table holds fewer than two points or mismatched
    /// energy/value lengths, or when any law code falls outside 1-4.
    pub fn new(
        energies: Vec<f64>,
        values: Vec<f64>,
        breakpoints: Vec<usize>,
        codes: Vec<u32>,
    ) -> Result<Self> {
        if breakpoints.len() != codes.len() {
            return Err(Error::RegionLengthMismatch {
                breakpoints: breakpoints.len(),
                codes: codes.len(),
            });
        }

        if energies.len() != values.len() {
            return Err(Error::TableLengthMismatch {
                energies: energies.len(),
                values: values.len(),
            });
        }

        if energies.len() < 2 {
            return Err(Error::TableTooShort {
                found: energies.len(),
            });
        }

        // fail fast rather than deferring bad codes to evaluation
        for (region, code) in codes.iter().enumerate() {
            if !(1..=4).contains(code) {
                return Err(Error::InvalidLaw { law: *code, region });
            }
        }

        // file indices are 1-based
        let breakpoints = breakpoints
            .into_iter()
            .map(|b| b.saturating_sub(1))
            .collect();

        Ok(Self {
            energies,
            values,
            breakpoints,
            codes,
        })
    }

    /// Build a scheme from a scanned section
    ///
    /// The section must have been produced by
    /// [scan_mf3_with_points](crate::scan_mf3_with_points), otherwise there
    /// is no point table to interpolate over.
    pub fn from_section(section: &Section) -> Result<Self> {
        let points = section
            .points
            .as_ref()
            .ok_or(Error::MissingPointTable { mt: section.mt })?;

        Self::new(
            points.iter().map(|p| p.energy).collect(),
            points.iter().map(|p| p.xs).collect(),
            section.breakpoints.clone(),
            section.codes.clone(),
        )
    }

    /// Tabulated energies (eV), in file order
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// Tabulated cross sections (barns), in file order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Last table index of each region, 0-based
    pub fn breakpoints(&self) -> &[usize] {
        &self.breakpoints
    }

    /// Interpolation law code of each region
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Closed energy interval covered by the table
    pub fn bounds(&self) -> (f64, f64) {
        (self.energies[0], self.energies[self.energies.len() - 1])
    }
}
