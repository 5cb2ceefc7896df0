//! Integration tests for the MF=3 section scanner

use rstest::{fixture, rstest};
use xstools_endf::{scan_mf3, scan_mf3_with_points, Error, InterpScheme};

#[fixture]
fn lines() -> Vec<String> {
    std::fs::read_to_string("./tests/data/sample.endf")
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

/// Build a single 80-column record for synthetic inputs
fn record(fields: [&str; 6], mf: u32, mt: u32) -> String {
    let data = fields
        .iter()
        .map(|field| format!("{field:>11}"))
        .collect::<String>();
    format!("{data}9237{mf:>2}{mt:>3}    1")
}

#[rstest]
fn finds_every_section(lines: Vec<String>) {
    let sections = scan_mf3(&lines).unwrap();
    let reactions = sections.iter().map(|s| s.mt).collect::<Vec<_>>();
    assert_eq!(reactions, vec![1, 102]);
}

#[rstest]
#[case(0, 1, 2, vec![2, 4], vec![1, 4])] // single-record counts
#[case(1, 102, 3, vec![2, 3, 5], vec![1, 2, 4])] // counts over two records
fn region_structure(
    lines: Vec<String>,
    #[case] index: usize,
    #[case] mt: u32,
    #[case] regions: usize,
    #[case] breakpoints: Vec<usize>,
    #[case] codes: Vec<u32>,
) {
    let section = scan_mf3(&lines).unwrap().remove(index);
    assert_eq!(section.mt, mt);
    assert_eq!(section.regions, regions);
    assert_eq!(section.breakpoints, breakpoints);
    assert_eq!(section.codes, codes);
    assert!(section.points.is_none());
}

#[rstest]
fn point_tables_decoded(lines: Vec<String>) {
    let sections = scan_mf3_with_points(&lines).unwrap();

    let points = sections[0].points.as_ref().unwrap();
    let energies = points.iter().map(|p| p.energy).collect::<Vec<_>>();
    let values = points.iter().map(|p| p.xs).collect::<Vec<_>>();
    assert_eq!(energies, vec![1.0, 10.0, 100.0, 1000.0]);
    assert_eq!(values, vec![1.0, 2.0, 4.0, 8.0]);

    // trailing blank pair on the last record is not a point
    assert_eq!(sections[1].points.as_ref().unwrap().len(), 5);
}

#[rstest]
fn breakpoints_cover_the_table(lines: Vec<String>) {
    for section in scan_mf3_with_points(&lines).unwrap() {
        let breakpoints = &section.breakpoints;
        assert!(breakpoints.windows(2).all(|pair| pair[0] < pair[1]));

        // the final 1-based breakpoint is the point count
        let count = section.points.as_ref().unwrap().len();
        assert_eq!(*breakpoints.last().unwrap(), count);
    }
}

#[rstest]
fn scanned_scheme_evaluates(lines: Vec<String>) {
    let sections = scan_mf3_with_points(&lines).unwrap();
    let scheme = InterpScheme::from_section(&sections[0]).unwrap();
    assert_eq!(scheme.evaluate(5.5).unwrap(), 1.5);
}

#[rstest]
fn scheme_needs_the_point_table(lines: Vec<String>) {
    let sections = scan_mf3(&lines).unwrap();
    assert!(matches!(
        InterpScheme::from_section(&sections[0]),
        Err(Error::MissingPointTable { mt: 1 })
    ));
}

#[rstest]
fn tag_corruption_aborts_the_scan(mut lines: Vec<String>) {
    // find the MT=1 header and corrupt the file tag of its continuation
    let header = lines
        .iter()
        .position(|l| &l[70..75] == " 3  1")
        .unwrap();
    lines[header + 1].replace_range(70..72, " 4");

    assert!(matches!(
        scan_mf3(&lines),
        Err(Error::UnexpectedFileTag { line, ref found }) if line == header + 1 && found == "4"
    ));
}

#[test]
fn malformed_field_aborts_the_scan() {
    let lines = vec![
        record(["", "", "", "", "", ""], 3, 18),
        record(["", "", "", "", "2", "junk"], 3, 18),
    ];
    assert!(matches!(
        scan_mf3(&lines),
        Err(Error::MalformedField { line: 1, ref field }) if field == "junk"
    ));
}

#[test]
fn truncated_section_aborts_the_scan() {
    // header opens a section but the counts never arrive
    let lines = vec![record(["", "", "", "", "", ""], 3, 18)];
    assert!(matches!(
        scan_mf3(&lines),
        Err(Error::UnexpectedEndOfSection { line: 1 })
    ));
}

#[test]
fn no_sections_in_unrelated_files() {
    let lines = vec![
        record(["1.0", "2.0", "0", "0", "0", "0"], 1, 451),
        record(["", "", "", "", "", ""], 0, 0),
    ];
    assert!(scan_mf3(&lines).unwrap().is_empty());
}

#[rstest]
fn section_display_summarises(lines: Vec<String>) {
    let section = scan_mf3(&lines).unwrap().remove(0);
    let text = section.to_string();
    assert!(text.contains("MF=3, MT=1:"));
    assert!(text.contains("Breakpoint indices: [2, 4]"));
    assert!(text.contains("Tabulated points  : none"));
}
