use std::env;
use std::path::Path;

use sort_eval::patterns;
use sort_eval::report;
use sort_eval::runner::{self, Algorithm, Case};

const RESULTS_PATH: &str = "analysis.txt";
const SINK_PATH: &str = "sorted.txt";

fn main() {
    let args = env::args().collect::<Vec<_>>();

    if args.len() != 4 {
        println!("Usage: sort_eval <file> <algorithm> <lines>");
        return;
    }

    let data_path = &args[1];
    let algorithm_name = args[2].to_lowercase();
    let line_count = args[3]
        .parse::<usize>()
        .expect("line count must be a non-negative integer");

    // Unknown names fail here, before anything is benchmarked or written.
    let algorithm = Algorithm::from_name(&algorithm_name)
        .unwrap_or_else(|| panic!("unknown algorithm: {algorithm_name}"));

    let base = report::read_lines(Path::new(data_path), line_count)
        .expect("failed to read the input file");

    let mut sorted = patterns::sorted_copy(&base);
    let mut shuffled = patterns::shuffled_copy(&sorted);
    let mut reversed = patterns::reversed_copy(&sorted);

    // The runs below sort their copies in place, so the sink content has to
    // be captured up front. The sink receives the descending ordering.
    let sink_lines = reversed.clone();

    let results = [
        runner::run(algorithm, Case::Sorted, &mut sorted),
        runner::run(algorithm, Case::Shuffled, &mut shuffled),
        runner::run(algorithm, Case::Reversed, &mut reversed),
    ];

    for result in &results {
        println!("{result}");
    }

    report::append_rows(Path::new(RESULTS_PATH), algorithm, line_count, &results)
        .expect("failed to append to the results store");

    report::write_lines(Path::new(SINK_PATH), &sink_lines).expect("failed to write the sink file");
}
