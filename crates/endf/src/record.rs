//! Fixed-width ENDF-6 record handling

/// Width of one data field in columns
const FIELD_WIDTH: usize = 11;

/// Number of data fields per record
const DATA_FIELDS: usize = 6;

/// A single 80-column ENDF-6 record split into its fixed-width pieces
///
/// The first 66 columns hold six 11-character data fields. The file (MF)
/// and reaction (MT) tags sit at fixed offsets beyond the data and are
/// only used for section boundary detection.
///
/// ```rust
/// # use xstools_endf::Record;
/// let line = format!("{:<66}9437 3102    2", "");
/// let record = Record::from_line(&line);
/// assert!(record.is_mf3());
/// assert_eq!(record.reaction(), Some(102));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// The six 11-character data fields (columns 1-66)
    pub fields: [&'a str; DATA_FIELDS],
    /// File number tag (columns 71-72), trimmed
    pub file_tag: &'a str,
    /// Reaction number tag (columns 73-75), trimmed
    pub reaction_tag: &'a str,
}

impl<'a> Record<'a> {
    /// Split a raw line into data fields and tags
    ///
    /// Lines shorter than the full 80 columns simply produce empty fields
    /// and tags rather than failing, so non-data lines can be inspected
    /// and skipped by the caller.
    pub fn from_line(line: &'a str) -> Self {
        let mut fields = [""; DATA_FIELDS];
        for (n, field) in fields.iter_mut().enumerate() {
            *field = clip(line, n * FIELD_WIDTH, (n + 1) * FIELD_WIDTH);
        }
        Self {
            fields,
            file_tag: clip(line, 70, 72).trim(),
            reaction_tag: clip(line, 72, 75).trim(),
        }
    }

    /// True for records tagged as file 3 (pointwise cross sections)
    pub fn is_mf3(&self) -> bool {
        self.file_tag == "3"
    }

    /// Reaction (MT) number, `None` when the tag is blank or not a number
    pub fn reaction(&self) -> Option<u32> {
        self.reaction_tag.parse().ok()
    }
}

/// Slice a column range out of a line, clipping at the end of short lines
fn clip(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end)
        .or_else(|| line.get(start..))
        .unwrap_or("")
}
