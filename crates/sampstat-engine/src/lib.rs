//! Sample generation and reporting.
//!
//! [`SampleAnalyzer`] draws sample sets from one of three interchangeable
//! [`UniformSource`]s, reduces them to a [`Summary`] and prints the result as
//! a fixed-width table.

pub use sampstat_stats::summary::Summary;

pub use self::{analyzer::*, source::*};

mod analyzer;
pub mod report;
mod source;

/// Rejected arguments to [`SampleAnalyzer::generate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    #[display("sample size must be greater than 0, got {size}")]
    InvalidSampleSize { size: i64 },
    #[display("invalid generator source")]
    InvalidSource(InvalidSourceError),
}

/// Failure while running the full report.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DriverError {
    #[display("failed to generate samples")]
    Generate(GenerateError),
    #[display("failed to write report")]
    Io(std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    fn error_chain(err: &dyn Error) -> Vec<String> {
        let mut chain = vec![err.to_string()];
        let mut current = err.source();
        while let Some(cause) = current {
            chain.push(cause.to_string());
            current = cause.source();
        }
        chain
    }

    fn assert_no_repeated_messages(chain: &[String]) {
        for (i, message) in chain.iter().enumerate() {
            assert!(
                !chain[i + 1..].contains(message),
                "message repeated in error chain: {chain:?}"
            );
        }
    }

    #[test]
    fn test_invalid_source_chain_has_distinct_messages() {
        let err = SampleAnalyzer::new().generate_raw(5, 7).unwrap_err();
        let chain = error_chain(&err);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], "invalid generator source");
        assert!(chain[1].starts_with("invalid random number generator index: 7."));
        assert_no_repeated_messages(&chain);
    }

    #[test]
    fn test_driver_chain_has_distinct_messages() {
        let err = DriverError::from(GenerateError::InvalidSource(InvalidSourceError {
            index: 7,
        }));
        let chain = error_chain(&err);

        assert_eq!(
            chain[..2],
            ["failed to generate samples", "invalid generator source"]
        );
        assert_eq!(chain.len(), 3);
        assert_no_repeated_messages(&chain);
    }

    #[test]
    fn test_sample_size_error_has_no_source() {
        let err = DriverError::from(GenerateError::InvalidSampleSize { size: 0 });
        let chain = error_chain(&err);

        assert_eq!(
            chain,
            [
                "failed to generate samples",
                "sample size must be greater than 0, got 0"
            ]
        );
    }

    #[test]
    fn test_io_error_keeps_cause() {
        let err = DriverError::from(std::io::Error::other("disk full"));
        let chain = error_chain(&err);

        assert_eq!(chain, ["failed to write report", "disk full"]);
    }
}
