use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use itertools::Itertools;
use thiserror::Error;

use crate::types::{Genotype, Mixture, Resolution, TestCase};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unknown genotype tag {tag:?}")]
    UnknownGenotype { line: usize, tag: String },
    #[error("line {line}: invalid sample id {field:?}")]
    InvalidSampleId { line: usize, field: String },
    #[error("line {line}: mixture lists no samples")]
    EmptyMixture { line: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Splits the input into blank-line-delimited test cases of
/// `GENOTYPE,id1,...,idn` lines. Runs of blank lines and a trailing
/// blank line are tolerated as separators; malformed lines are rejected
/// so the solver only ever sees well-formed mixtures.
pub fn read_cases(reader: &mut impl Read) -> Result<Vec<TestCase>, ParseError> {
    let mut cases = vec![];
    let mut mixtures = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            if !mixtures.is_empty() {
                cases.push(TestCase {
                    mixtures: std::mem::take(&mut mixtures),
                });
            }
            continue;
        }

        mixtures.push(parse_mixture(line.trim(), i + 1)?);
    }

    if !mixtures.is_empty() {
        cases.push(TestCase { mixtures });
    }

    Ok(cases)
}

fn parse_mixture(line: &str, line_no: usize) -> Result<Mixture, ParseError> {
    let mut fields = line.split(',');

    let tag = fields.next().unwrap_or("");
    let genotype = match tag {
        "NORM" => Genotype::Norm,
        "MUT" => Genotype::Mut,
        _ => {
            return Err(ParseError::UnknownGenotype {
                line: line_no,
                tag: tag.to_string(),
            })
        }
    };

    let samples = fields
        .map(|field| {
            field.trim().parse().map_err(|_| ParseError::InvalidSampleId {
                line: line_no,
                field: field.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if samples.is_empty() {
        return Err(ParseError::EmptyMixture { line: line_no });
    }

    Ok(Mixture { genotype, samples })
}

fn render(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Inconsistent => "INCONSISTENT".to_string(),
        Resolution::Nonunique => "NONUNIQUE".to_string(),
        Resolution::Resolved {
            mut_count,
            norm_count,
            assignment,
        } => {
            let mapping = assignment
                .iter()
                .map(|(id, genotype)| format!("{id},{genotype}"))
                .join("\n");
            format!("MUT COUNT: {mut_count}\nNORM COUNT: {norm_count}\n{mapping}")
        }
    }
}

/// Renders one report per resolution, separated by a single blank line,
/// with no trailing blank line after the final one.
pub fn write_report(writer: &mut impl Write, resolutions: &[Resolution]) -> std::io::Result<()> {
    if resolutions.is_empty() {
        return Ok(());
    }

    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", resolutions.iter().map(render).join("\n\n"))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::{read_cases, write_report, Genotype, ParseError, Resolution};

    #[test]
    fn basic() {
        let input = b"NORM,0,1\nMUT,1,2\n\nMUT,7";
        let cases = read_cases(&mut input.as_slice()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].mixtures.len(), 2);
        assert_eq!(cases[0].mixtures[0].genotype, Genotype::Norm);
        assert_eq!(cases[0].mixtures[0].samples, vec![0, 1]);
        assert_eq!(cases[1].mixtures[0].samples, vec![7]);
    }

    #[test]
    fn blank_line_runs_and_trailing_blanks() {
        let input = b"\nMUT,1\n\n\nNORM,2\n\n";
        let cases = read_cases(&mut input.as_slice()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].mixtures[0].samples, vec![1]);
        assert_eq!(cases[1].mixtures[0].samples, vec![2]);
    }

    #[test]
    fn rejects_unknown_genotype_tag() {
        let input = b"NORM,1\nWILD,2";
        let err = read_cases(&mut input.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownGenotype { line: 2, ref tag } if tag == "WILD"
        ));
    }

    #[test]
    fn rejects_invalid_sample_id() {
        let input = b"MUT,1,-2";
        let err = read_cases(&mut input.as_slice()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSampleId { line: 1, .. }));
    }

    #[test]
    fn rejects_mixture_without_samples() {
        let input = b"MUT";
        let err = read_cases(&mut input.as_slice()).unwrap_err();
        assert!(matches!(err, ParseError::EmptyMixture { line: 1 }));
    }

    #[test]
    fn report_layout() {
        let resolutions = vec![
            Resolution::Resolved {
                mut_count: 1,
                norm_count: 1,
                assignment: vec![(3, Genotype::Mut), (5, Genotype::Norm)],
            },
            Resolution::Inconsistent,
            Resolution::Nonunique,
        ];

        let mut out = vec![];
        write_report(&mut out, &resolutions).unwrap();

        let expected = "MUT COUNT: 1\nNORM COUNT: 1\n3,MUT\n5,NORM\n\nINCONSISTENT\n\nNONUNIQUE\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let mut out = vec![];
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
