//! Dispatches a named algorithm against one dataset ordering and records the
//! instrumentation its contract defines.

use std::fmt;
use std::time::Instant;

use crate::{stable, unstable};

/// The five algorithms the harness knows about. CLI names are mapped onto
/// this closed set at a single boundary, so an unknown name fails before any
/// ordering is benchmarked or recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Merge,
    Quick,
    Heap,
    Bubble,
    Transposition,
}

impl Algorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            "heap" => Some(Self::Heap),
            "bubble" => Some(Self::Bubble),
            "transposition" => Some(Self::Transposition),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Bubble => "bubble",
            Self::Transposition => "transposition",
        }
    }
}

/// Which ordering of the base dataset a benchmark run received.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Case {
    Sorted,
    Shuffled,
    Reversed,
}

impl Case {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Shuffled => "shuffled",
            Self::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one benchmark run.
///
/// The two metrics are independently optional, mirroring the asymmetric
/// instrumentation contracts: merge, quick and heap are timed, bubble is
/// timed and counted, transposition is only counted.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchResult {
    pub case: Case,
    pub elapsed_s: Option<f64>,
    pub comparisons: Option<u64>,
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> time: ", self.case)?;

        // Unmeasured metrics print as their sentinels.
        match self.elapsed_s {
            Some(secs) => write!(f, "{secs}")?,
            None => f.write_str("-1.0")?,
        }

        f.write_str(" sec, comps: ")?;

        match self.comparisons {
            Some(comps) => write!(f, "{comps}"),
            None => f.write_str("-1"),
        }
    }
}

/// Runs `algorithm` once, in place, over `v`.
pub fn run<T>(algorithm: Algorithm, case: Case, v: &mut [T]) -> BenchResult
where
    T: Ord + Clone,
{
    match algorithm {
        Algorithm::Merge => timed(case, v, stable::merge::sort),
        Algorithm::Quick => timed(case, v, unstable::quick::sort),
        Algorithm::Heap => timed(case, v, unstable::heap::sort),
        Algorithm::Bubble => {
            let start = Instant::now();
            let comparisons = unstable::bubble::sort_counting(v);
            let elapsed_s = start.elapsed().as_secs_f64();

            BenchResult {
                case,
                elapsed_s: Some(elapsed_s),
                comparisons: Some(comparisons),
            }
        }
        Algorithm::Transposition => BenchResult {
            case,
            elapsed_s: None,
            comparisons: Some(unstable::transposition::sort_counting(v)),
        },
    }
}

fn timed<T>(case: Case, v: &mut [T], sort_fn: fn(&mut [T])) -> BenchResult
where
    T: Ord + Clone,
{
    let start = Instant::now();
    sort_fn(v);

    BenchResult {
        case,
        elapsed_s: Some(start.elapsed().as_secs_f64()),
        comparisons: None,
    }
}
