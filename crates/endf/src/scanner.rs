//! Single-pass scanner for MF=3 sections

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::parsers::{float_field, int_field};
use crate::record::Record;
use crate::section::{Point, Section};

/// Scan every MF=3 section out of a sequence of lines
///
/// Point tables are skipped by position, so only the region structure of
/// each section is recovered. Use [scan_mf3_with_points] when the tabulated
/// (energy, cross section) pairs are needed as well.
///
/// Any format fault aborts the whole scan with the offending line index;
/// there are no partial results.
pub fn scan_mf3<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Section>> {
    Scanner::new(lines, false).scan()
}

/// Scan every MF=3 section, decoding the tabulated point data
///
/// Identical to [scan_mf3] except that the `NP` (energy, cross section)
/// pairs of each section are decoded into its [Section::points] table.
pub fn scan_mf3_with_points<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Section>> {
    Scanner::new(lines, true).scan()
}

/// Internal cursor over the in-memory line sequence
struct Scanner<'a, S> {
    lines: &'a [S],
    index: usize,
    decode_points: bool,
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    fn new(lines: &'a [S], decode_points: bool) -> Self {
        Self {
            lines,
            index: 0,
            decode_points,
        }
    }

    fn scan(mut self) -> Result<Vec<Section>> {
        let mut sections = Vec::new();

        while self.index < self.lines.len() {
            let record = Record::from_line(self.lines[self.index].as_ref());

            // anything outside file 3 is irrelevant
            if !record.is_mf3() {
                self.index += 1;
                continue;
            }

            let mt = record.reaction().ok_or_else(|| Error::MalformedField {
                line: self.index,
                field: record.reaction_tag.to_string(),
            })?;

            // MT=0 is the end-of-section marker
            if mt == 0 {
                self.index += 1;
                continue;
            }

            let section = self.section(mt)?;
            debug!("scanned {}", section.summary());
            sections.push(section);
        }

        Ok(sections)
    }

    /// Read one full section, leaving the cursor on the line after it
    fn section(&mut self, mt: u32) -> Result<Section> {
        debug!("MF=3 MT={mt} section opens at line {}", self.index);

        // step past the header record
        self.index += 1;

        // accumulate integers until the region and point counts are known
        let mut buffer = Vec::new();
        while buffer.len() < 2 {
            self.extend_integers(&mut buffer)?;
        }
        let regions = self.count(buffer[0])?;
        let points = self.count(buffer[1])?;
        trace!("NR={regions} NP={points}");

        // keep going until all the breakpoint/code values are in
        while buffer.len() < 2 + 2 * regions {
            self.extend_integers(&mut buffer)?;
        }
        let breakpoints = self.indices(&buffer[2..2 + regions])?;
        let codes = self.laws(&buffer[2 + regions..2 + 2 * regions])?;
        trace!("breakpoints={breakpoints:?} codes={codes:?}");

        // three (energy, xs) pairs per record
        let records = points.div_ceil(3);
        let table = if self.decode_points {
            Some(self.point_table(points, records)?)
        } else {
            trace!("skipping {records} point records");
            self.index += records;
            None
        };

        Ok(Section {
            mt,
            regions,
            breakpoints,
            codes,
            points: table,
        })
    }

    /// Push every integer field of the next MF=3 record onto the buffer
    fn extend_integers(&mut self, buffer: &mut Vec<i64>) -> Result<()> {
        let record = self.next_mf3()?;
        for field in record.fields {
            let token = field.trim();
            if token.is_empty() {
                continue;
            }
            match int_field(token) {
                Some(value) => buffer.push(value),
                None => {
                    return Err(Error::MalformedField {
                        line: self.index,
                        field: token.to_string(),
                    })
                }
            }
        }
        self.index += 1;
        Ok(())
    }

    /// Decode the `count` tabulated pairs held on the next `records` lines
    fn point_table(&mut self, count: usize, records: usize) -> Result<Vec<Point>> {
        let mut table = Vec::with_capacity(count);

        for _ in 0..records {
            let record = self.next_record()?;
            for (energy, xs) in record.fields.iter().tuples() {
                let (energy, xs) = (energy.trim(), xs.trim());
                if energy.is_empty() && xs.is_empty() {
                    continue;
                }
                table.push(Point {
                    energy: self.float(energy)?,
                    xs: self.float(xs)?,
                });
            }
            self.index += 1;
        }

        if table.len() != count {
            warn!("expected {count} points, decoded {}", table.len());
            table.truncate(count);
        }

        Ok(table)
    }

    /// The record under the cursor, bounds-checked but tag-agnostic
    fn next_record(&self) -> Result<Record<'a>> {
        let line = self
            .lines
            .get(self.index)
            .ok_or(Error::UnexpectedEndOfSection { line: self.index })?;
        Ok(Record::from_line(line.as_ref()))
    }

    /// The record under the cursor, which must still be tagged MF=3
    fn next_mf3(&self) -> Result<Record<'a>> {
        let record = self.next_record()?;
        if !record.is_mf3() {
            return Err(Error::UnexpectedFileTag {
                line: self.index,
                found: record.file_tag.to_string(),
            });
        }
        Ok(record)
    }

    fn float(&self, token: &str) -> Result<f64> {
        float_field(token).ok_or_else(|| Error::MalformedField {
            line: self.index,
            field: token.to_string(),
        })
    }

    fn count(&self, value: i64) -> Result<usize> {
        usize::try_from(value).map_err(|_| Error::MalformedField {
            line: self.index,
            field: value.to_string(),
        })
    }

    fn indices(&self, values: &[i64]) -> Result<Vec<usize>> {
        values.iter().map(|value| self.count(*value)).collect()
    }

    fn laws(&self, values: &[i64]) -> Result<Vec<u32>> {
        values
            .iter()
            .map(|value| {
                u32::try_from(*value).map_err(|_| Error::MalformedField {
                    line: self.index,
                    field: value.to_string(),
                })
            })
            .collect()
    }
}
