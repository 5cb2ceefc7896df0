//! Module for reading ENDF-6 MF=3 pointwise cross section data
//!
//! ENDF-6 evaluations are fixed-width text files split into numbered
//! "files" (MF) of reaction sections (MT). This crate covers MF=3, the
//! pointwise cross sections: it scans the records of each reaction to
//! recover the declared interpolation scheme, and evaluates that scheme at
//! arbitrary energies.
//!
//! | Type            | Description                                          |
//! | --------------- | ---------------------------------------------------- |
//! | [Section]       | Raw per-reaction data emitted by a scan              |
//! | [InterpScheme]  | Validated scheme ready for evaluation                |
//! | [Law]           | One of the four tabulated interpolation laws         |
//! | [Nuclide]       | Parsed `<element><mass>` target identifier           |
//! | [ElementIndex]  | Caller-built element symbol to Z lookup              |
//!
//! The crate performs no file or process access; callers load the line
//! data and own all output. Scanning is a single pass with no partial
//! results, and a validated scheme is immutable, so shared references may
//! be evaluated concurrently without locking.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use xstools_endf::{scan_mf3_with_points, InterpScheme};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The caller owns all I/O
//! let file = std::fs::read_to_string("n-092_U_238.endf")?;
//! let lines = file.lines().collect::<Vec<_>>();
//!
//! // Recover every MF=3 section, point tables included
//! let sections = scan_mf3_with_points(&lines)?;
//!
//! // Interpolate the radiative capture cross section at 25 keV
//! let capture = sections.iter().find(|s| s.mt == 102).unwrap();
//! let scheme = InterpScheme::from_section(capture)?;
//! let xs = scheme.evaluate(2.5e4)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod interp;
mod nuclide;
mod parsers;
mod record;
mod scanner;
mod scheme;
mod section;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use interp::Law;

#[doc(inline)]
pub use nuclide::{ElementIndex, Nuclide};

#[doc(inline)]
pub use record::Record;

#[doc(inline)]
pub use scanner::{scan_mf3, scan_mf3_with_points};

#[doc(inline)]
pub use scheme::InterpScheme;

#[doc(inline)]
pub use section::{Point, Section};
