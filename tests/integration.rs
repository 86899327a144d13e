use std::fs;

use geno_demux::{io, parallel, solver, types::Resolution};

enum Mode {
    Serial,
    Parallel,
}

fn test_dir(path: &str, mode: Mode) {
    for entry in fs::read_dir(path).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(true, |ext| ext != "in") {
            continue;
        }

        let mut file = fs::File::open(&path).unwrap();
        let cases = io::read_cases(&mut file).unwrap();

        let resolutions: Vec<Resolution> = match mode {
            Mode::Serial => cases.iter().map(solver::resolve).collect(),
            Mode::Parallel => parallel::resolve_all(cases.clone(), None),
        };

        for (case, resolution) in cases.iter().zip(&resolutions) {
            assert!(solver::verify(case, resolution), "{}", path.display());
        }

        let mut rendered = vec![];
        io::write_report(&mut rendered, &resolutions).unwrap();

        let expected = fs::read_to_string(path.with_extension("out")).unwrap();
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            expected,
            "{}",
            path.display()
        );
    }
}

#[test]
fn fixtures_serial() {
    test_dir("tests/data", Mode::Serial);
}

#[test]
fn fixtures_parallel() {
    test_dir("tests/data", Mode::Parallel);
}
