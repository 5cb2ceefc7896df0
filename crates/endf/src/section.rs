//! Core data recovered from an MF=3 section

use std::fmt;

use xstools_format::{f, OptionFormat, SciFormat};

/// One tabulated (energy, cross section) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Incident energy (eV)
    pub energy: f64,
    /// Cross section (barns)
    pub xs: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.energy.sci(6, 2), self.xs.sci(6, 2))
    }
}

/// Interpolation data recovered from one MF=3 reaction section
///
/// One of these is emitted per section found during a scan, in file order.
/// Breakpoints are kept 1-based exactly as written in the file; conversion
/// to 0-based indices happens when a [InterpScheme](crate::InterpScheme)
/// is built.
///
/// The point table is only populated when the scan is asked to decode it,
/// since many uses only need the region structure.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// ENDF reaction (MT) number
    pub mt: u32,
    /// Declared number of interpolation regions (NR)
    pub regions: usize,
    /// Last table index of each region, 1-based as written
    pub breakpoints: Vec<usize>,
    /// Interpolation law code for each region
    pub codes: Vec<u32>,
    /// Tabulated points, when decoded
    pub points: Option<Vec<Point>>,
}

impl fmt::Display for Section {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "MF=3, MT={}:", self.mt)?;
        writeln!(fmt, "  Number of regions : {}", self.regions)?;
        writeln!(fmt, "  Breakpoint indices: {:?}", self.breakpoints)?;
        writeln!(fmt, "  Interpolate codes : {:?}", self.codes)?;
        let count = self.points.as_ref().map(Vec::len);
        write!(fmt, "  Tabulated points  : {}", count.display())
    }
}

impl Section {
    /// Summary string for log output, e.g. `"MT=102 (3 regions, 5 points)"`
    pub fn summary(&self) -> String {
        let count = self.points.as_ref().map(Vec::len);
        f!(
            "MT={} ({} regions, {} points)",
            self.mt,
            self.regions,
            count.display()
        )
    }
}
