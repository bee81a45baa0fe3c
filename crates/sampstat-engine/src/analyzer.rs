use std::{
    io::{self, Write},
    iter,
};

use sampstat_stats::summary::Summary;

use crate::{
    DriverError, EntropySource, GenerateError, OwnedSource, SourceId, SourceSeed,
    ThreadLocalSource, UniformSource, report,
};

/// Sample sizes visited by [`SampleAnalyzer::execute`], in order.
pub const SAMPLE_SIZES: [usize; 3] = [10, 100, 1000];

/// One displayed block of the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportBlock {
    pub sample_size: usize,
    pub source: SourceId,
    pub summary: Summary,
}

/// Generates sample sets, summarizes them and prints the results.
///
/// The analyzer owns the generator behind [`SourceId::Owned`]; its state
/// advances with every draw and lives as long as the analyzer. The other two
/// sources keep their state outside the analyzer.
///
/// # Example
///
/// ```
/// use sampstat_engine::{SampleAnalyzer, SourceId};
///
/// let mut analyzer = SampleAnalyzer::new();
/// let samples = analyzer.generate(100, SourceId::Owned).unwrap();
/// let summary = SampleAnalyzer::summarize(&samples).unwrap();
/// assert_eq!(summary.count, 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleAnalyzer {
    owned: OwnedSource,
}

impl SampleAnalyzer {
    /// Creates an analyzer whose owned generator is seeded randomly.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owned: OwnedSource::new(),
        }
    }

    /// Like [`Self::new`], but with a fixed seed for the owned generator.
    #[must_use]
    pub fn with_seed(seed: SourceSeed) -> Self {
        Self {
            owned: OwnedSource::with_seed(seed),
        }
    }

    /// Draws `n` samples in `[0, 1)` from `source`.
    ///
    /// Fails with [`GenerateError::InvalidSampleSize`] if `n` is zero.
    pub fn generate(&mut self, n: usize, source: SourceId) -> Result<Vec<f64>, GenerateError> {
        if n == 0 {
            return Err(GenerateError::InvalidSampleSize { size: 0 });
        }
        let samples = match source {
            SourceId::Owned => draw(&mut self.owned, n),
            SourceId::ThreadLocal => draw(&mut ThreadLocalSource::new(), n),
            SourceId::Entropy => draw(&mut EntropySource::new(), n),
        };
        Ok(samples)
    }

    /// Like [`Self::generate`], but takes unchecked integer arguments.
    ///
    /// The sample size is validated before the source index.
    pub fn generate_raw(&mut self, n: i64, source: i64) -> Result<Vec<f64>, GenerateError> {
        let size = usize::try_from(n)
            .ok()
            .filter(|&size| size > 0)
            .ok_or(GenerateError::InvalidSampleSize { size: n })?;
        let source = SourceId::try_from(source).map_err(GenerateError::InvalidSource)?;
        self.generate(size, source)
    }

    /// Reduces `samples` to a [`Summary`], or `None` if there are none.
    #[must_use]
    pub fn summarize(samples: &[f64]) -> Option<Summary> {
        Summary::new(samples)
    }

    /// Prints `summary` to standard output.
    pub fn display(summary: &Summary, show_header: bool) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        Self::display_to(&mut stdout, summary, show_header)?;
        stdout.flush()
    }

    /// Like [`Self::display`], but writes to `out`.
    pub fn display_to<W: Write>(
        out: &mut W,
        summary: &Summary,
        show_header: bool,
    ) -> io::Result<()> {
        report::write_summary(out, summary, show_header)
    }

    /// Runs every combination of [`SAMPLE_SIZES`] and [`SourceId::ALL`], in
    /// that nesting order, writing one block per combination to `out`.
    ///
    /// The column header is written before the first block only.
    pub fn execute<W: Write>(&mut self, out: &mut W) -> Result<Vec<ReportBlock>, DriverError> {
        let mut blocks = Vec::with_capacity(SAMPLE_SIZES.len() * SourceId::LEN);

        for sample_size in SAMPLE_SIZES {
            for source in SourceId::ALL {
                let samples = self.generate(sample_size, source)?;
                let summary =
                    Self::summarize(&samples).expect("generated samples should never be empty");
                tracing::debug!(
                    sample_size,
                    source = source.name(),
                    mean = summary.mean,
                    std_dev = summary.std_dev,
                    "summarized sample set"
                );

                report::write_caption(out, source, sample_size)?;
                Self::display_to(out, &summary, blocks.is_empty())?;
                writeln!(out)?;
                writeln!(out)?;

                blocks.push(ReportBlock {
                    sample_size,
                    source,
                    summary,
                });
            }
        }

        out.flush()?;
        Ok(blocks)
    }
}

fn draw<S>(source: &mut S, n: usize) -> Vec<f64>
where
    S: UniformSource,
{
    iter::repeat_with(|| source.next_f64()).take(n).collect()
}
