//! Result and Error types for xstools-endf

/// Type alias for `Result<T, endf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `xstools-endf` crate
///
/// Scan errors abort the whole pass and carry the offending line index.
/// Evaluation errors are local to the failing query and carry the segment
/// or region along with the operands that caused the failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected an MF=3 record at line {line}, found file tag \"{found}\"")]
    UnexpectedFileTag { line: usize, found: String },

    #[error("ran out of records at line {line} inside a section")]
    UnexpectedEndOfSection { line: usize },

    #[error("failed to decode field \"{field}\" at line {line}")]
    MalformedField { line: usize, field: String },

    #[error("found {breakpoints} breakpoints for {codes} interpolation codes")]
    RegionLengthMismatch { breakpoints: usize, codes: usize },

    #[error("found {energies} energies for {values} cross section values")]
    TableLengthMismatch { energies: usize, values: usize },

    #[error("point table needs at least 2 entries, found {found}")]
    TableTooShort { found: usize },

    #[error("interpolation law {law} in region {region} is not one of 1-4")]
    InvalidLaw { law: u32, region: usize },

    #[error("section MT={mt} was scanned without its point table")]
    MissingPointTable { mt: u32 },

    #[error("energy {energy} outside the table bounds [{lower}, {upper}]")]
    EnergyOutsideTable { energy: f64, lower: f64, upper: f64 },

    #[error("no breakpoint region covers segment {segment}")]
    UncoveredSegment { segment: usize },

    #[error("interpolation law {law} in region {region} is not supported")]
    UnsupportedLaw { law: u32, region: usize },

    #[error("zero-width segment {segment} at energy {energy}")]
    DegenerateSegment { segment: usize, energy: f64 },

    #[error("law {law} took a logarithm of {operand} in segment {segment}")]
    NonPositiveOperand {
        law: u32,
        segment: usize,
        operand: f64,
    },

    #[error("cannot parse a nuclide from \"{0}\"")]
    MalformedNuclide(String),

    #[error("element \"{0}\" is not in the lookup table")]
    UnknownElement(String),

    #[error("mass number {0} exceeds 3 digits")]
    MassNumberTooLarge(u32),

    #[error("failed to read the element lookup table")]
    CsvError(#[from] csv::Error),
}
