/// Five-number summary of a sample set.
///
/// Fields are kept in the order the report prints them: count, mean,
/// sample standard deviation, minimum, maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The number of samples, carried as a float.
    pub count: f64,
    /// The arithmetic mean of the samples.
    pub mean: f64,
    /// The sample standard deviation (Bessel's correction, divisor `n - 1`).
    ///
    /// Not finite for a single sample, since the divisor is zero.
    pub std_dev: f64,
    /// The smallest sample.
    pub min: f64,
    /// The largest sample.
    pub max: f64,
}

impl Summary {
    /// Number of fields in a summary.
    pub const LEN: usize = 5;

    /// Computes the summary of `samples`.
    ///
    /// The extrema and the sum are found in one pass; the squared deviations
    /// from the mean are accumulated in a second.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if `samples` contains at least one value
    /// * `None` - if `samples` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use sampstat_stats::summary::Summary;
    /// let summary = Summary::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.mean, 3.0);
    ///
    /// // A single sample leaves the standard deviation undefined.
    /// let single = Summary::new(&[5.0]).unwrap();
    /// assert!(!single.std_dev.is_finite());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;

        let (sum, min, max) = samples
            .iter()
            .fold((0.0, first, first), |(sum, min, max), &x| {
                (sum + x, f64::min(min, x), f64::max(max, x))
            });

        let n = samples.len() as f64;
        let mean = sum / n;
        let squared_deviations = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        let variance = squared_deviations / (n - 1.0);
        let std_dev = variance.sqrt();

        Some(Self {
            count: n,
            mean,
            std_dev,
            min,
            max,
        })
    }

    /// Returns the fields as `[count, mean, std_dev, min, max]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [self.count, self.mean, self.std_dev, self.min, self.max]
    }
}
