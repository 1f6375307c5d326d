//! Integration test: run a generated sequence through every writer.

use hermes_chain::MarkovChain;
use hermes_emission::{AutoregressiveEmission, CategoricalEmission, Regime};
use hermes_generator::SequenceGenerator;
use hermes_io::{OutputFormat, write_lines, write_observations};

fn ar_sequence(timesteps: usize) -> Vec<f64> {
    let chain = MarkovChain::new(vec![vec![0.7, 0.3], vec![0.4, 0.6]], vec![0.8, 0.2]);
    let emission = AutoregressiveEmission::new(vec![
        Regime::new(vec![-0.5, 0.7, 0.1], 1.0, 2.0),
        Regime::new(vec![0.1, -0.1, 0.2], 3.0, 3.0),
    ]);
    let mut generator = SequenceGenerator::seeded(chain, emission, 42);
    generator.generate(timesteps).unwrap().into_parts().1
}

#[test]
fn lines_round_trip_symbol_stream() {
    let chain = MarkovChain::new(vec![vec![0.7, 0.3], vec![0.4, 0.6]], vec![0.8, 0.2]);
    let emission = CategoricalEmission::new(vec![vec![0.5, 0.4, 0.1], vec![0.1, 0.3, 0.6]]);
    let mut generator = SequenceGenerator::seeded(chain, emission, 42);
    let (_, symbols) = generator.generate(100).unwrap().into_parts();

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("symbols.txt");
    write_lines(&path, &symbols).expect("write succeeds");

    let parsed: Vec<usize> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(parsed, symbols);
}

#[test]
fn two_row_round_trip_observations() {
    let observations = ar_sequence(50);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("series.txt");
    write_observations(&path, &observations, OutputFormat::TwoRow).expect("write succeeds");

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let dates = lines.next().unwrap();
    let ardata = lines.next().unwrap();
    assert!(lines.next().is_none());

    let indices: Vec<&str> = dates.split(';').collect();
    assert_eq!(indices[0], "dates");
    assert_eq!(indices.len(), 51);
    assert_eq!(indices[1], "0");
    assert_eq!(indices[50], "49");

    let values: Vec<&str> = ardata.split(';').collect();
    assert_eq!(values[0], "ardata");
    let parsed: Vec<f64> = values[1..].iter().map(|v| v.parse().unwrap()).collect();
    assert_eq!(parsed, observations);
}

#[test]
fn csv_round_trip_observations() {
    let observations = ar_sequence(50);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("series.csv");
    write_observations(&path, &observations, OutputFormat::Csv).expect("write succeeds");

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("dates,ardata"));

    for (i, (line, expected)) in lines.zip(&observations).enumerate() {
        let (index, value) = line.split_once(',').unwrap();
        assert_eq!(index.parse::<usize>().unwrap(), i);
        assert_eq!(value.parse::<f64>().unwrap(), *expected);
    }
}
