use std::{fs, path::Path};

use octconf::translate;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

const FIXTURES: &str = "tests/fixtures";

/// Reads an expected-output file, ignoring one trailing newline.
fn read_expected(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    Some(content.strip_suffix('\n').unwrap_or(&content).to_string())
}

#[test]
fn fixtures_match_golden_output() {
    let mut count = 0;

    for entry in WalkDir::new(FIXTURES).sort_by_file_name()
                                       .into_iter()
                                       .filter_map(Result::ok)
                                       .filter(|e| {
                                           e.path().extension().is_some_and(|ext| ext == "conf")
                                       })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let translation =
            translate(&source).unwrap_or_else(|e| panic!("Fixture {path:?} failed:\nError: {e}"));

        let expected_xml = read_expected(&path.with_extension("xml"))
            .unwrap_or_else(|| panic!("Fixture {path:?} has no .xml file"));
        assert_eq!(translation.xml, expected_xml, "XML mismatch for {path:?}");

        if let Some(expected_prints) = read_expected(&path.with_extension("prints")) {
            let expected: Vec<&str> = expected_prints.lines().collect();
            assert_eq!(translation.print_log, expected, "print log mismatch for {path:?}");
        } else {
            assert!(translation.print_log.is_empty(),
                    "Fixture {path:?} printed but has no .prints file");
        }

        count += 1;
    }

    assert!(count > 0, "No fixtures found in {FIXTURES}");
}
