//! Nuclide identifiers and the element lookup table
//!
//! Target nuclides turn up in all sorts of casings (`li6`, `U238`, `LI6`)
//! and evaluation file names want the zero-padded `n-092_U_238` form, so
//! the parsing and padding rules live here.
//!
//! The symbol-to-Z table is an explicit value built once by the caller and
//! passed around by reference; nothing here is loaded at start-up or held
//! in process-wide state.

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use serde::Deserialize;
use xstools_format::{capitalise, f};

// nom parser combinators
use nom::character::complete::{self, alpha1};
use nom::combinator::all_consuming;
use nom::sequence::pair;

use crate::error::{Error, Result};

/// A nuclide identified by element symbol and mass number
///
/// Parses from the usual `<letters><digits>` forms in any casing:
///
/// ```rust
/// # use xstools_endf::Nuclide;
/// let nuclide: Nuclide = "li6".parse().unwrap();
/// assert_eq!(nuclide.symbol, "Li");
/// assert_eq!(nuclide.mass, 6);
/// assert_eq!(nuclide.padded().unwrap(), "Li006");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nuclide {
    /// Element symbol, e.g. `U`, `Li`
    pub symbol: String,
    /// Atomic mass number
    pub mass: u32,
}

impl FromStr for Nuclide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (symbol, mass)) =
            all_consuming(pair(alpha1::<_, nom::error::Error<&str>>, complete::u32))(s.trim())
                .map_err(|_| Error::MalformedNuclide(s.to_string()))?;

        Ok(Self {
            symbol: capitalise(&symbol.to_lowercase()),
            mass,
        })
    }
}

impl Nuclide {
    /// Symbol with the mass number padded to 3 digits, e.g. `Li006`
    pub fn padded(&self) -> Result<String> {
        if self.mass > 999 {
            return Err(Error::MassNumberTooLarge(self.mass));
        }
        Ok(f!("{}{:03}", self.symbol, self.mass))
    }
}

/// One row of the element lookup table
#[derive(Debug, Deserialize)]
struct ElementRow {
    /// Element symbol
    #[serde(rename = "X")]
    symbol: String,
    /// Atomic number
    #[serde(rename = "Z")]
    z: u32,
}

/// Element symbol to atomic number lookup
///
/// Built once by the caller from an `X,Z` csv table and passed by
/// reference wherever nuclides need formatting.
///
/// ```rust
/// # use xstools_endf::{ElementIndex, Nuclide};
/// let table = "X,Z\nH,1\nLi,3\nU,92\n";
/// let elements = ElementIndex::from_csv(table.as_bytes()).unwrap();
///
/// let nuclide: Nuclide = "U238".parse().unwrap();
/// let (z, symbol, mass) = elements.zaid(&nuclide).unwrap();
/// assert_eq!((z.as_str(), symbol.as_str(), mass.as_str()), ("092", "U", "238"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    table: HashMap<String, u32>,
}

impl ElementIndex {
    /// Read the `X,Z` table from any csv source
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut table = HashMap::new();
        let mut rows = csv::Reader::from_reader(reader);
        for row in rows.deserialize() {
            let row: ElementRow = row?;
            table.insert(row.symbol, row.z);
        }
        Ok(Self { table })
    }

    /// Atomic number for an element symbol
    pub fn atomic_number(&self, symbol: &str) -> Result<u32> {
        self.table
            .get(symbol)
            .copied()
            .ok_or_else(|| Error::UnknownElement(symbol.to_string()))
    }

    /// Zero-padded `(ZZZ, X, AAA)` triple used in evaluation file names
    ///
    /// For example `U238` becomes `("092", "U", "238")`, matching file
    /// names like `n-092_U_238.endf`.
    pub fn zaid(&self, nuclide: &Nuclide) -> Result<(String, String, String)> {
        let z = self.atomic_number(&nuclide.symbol)?;
        if nuclide.mass > 999 {
            return Err(Error::MassNumberTooLarge(nuclide.mass));
        }
        Ok((
            f!("{z:03}"),
            nuclide.symbol.clone(),
            f!("{:03}", nuclide.mass),
        ))
    }
}
