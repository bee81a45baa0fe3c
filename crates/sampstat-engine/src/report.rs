//! Fixed-width table output for summaries.
//!
//! Every field occupies a left-aligned column of 15 characters.
//! The count is printed without decimals and the remaining fields with six.
//!
//! ```text
//! --------------------------------------------------------------------
//! n               Mean            Std Dev         Min             Max
//! --------------------------------------------------------------------
//! 10              0.512345        0.281234        0.012345        0.987654
//! --------------------------------------------------------------------
//! ```

use std::io::{self, Write};

use sampstat_stats::summary::Summary;

use crate::SourceId;

const COLUMN_WIDTH: usize = 15;
const HEADERS: [&str; Summary::LEN] = ["n", "Mean", "Std Dev", "Min", "Max"];

const RULE_WIDTH: usize = 68;

fn write_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Writes the rule and the column header line.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    write_rule(out)?;
    let [n, mean, std_dev, min, max] = HEADERS;
    writeln!(
        out,
        "{n:<w$} {mean:<w$} {std_dev:<w$} {min:<w$} {max:<w$}",
        w = COLUMN_WIDTH
    )
}

/// Writes one summary row between rules, preceded by the header if `show_header`.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    show_header: bool,
) -> io::Result<()> {
    if show_header {
        write_header(out)?;
    }
    write_rule(out)?;
    let [count, mean, std_dev, min, max] = summary.to_array();
    writeln!(
        out,
        "{count:<w$.0} {mean:<w$.6} {std_dev:<w$.6} {min:<w$.6} {max:<w$.6}",
        w = COLUMN_WIDTH
    )?;
    write_rule(out)
}

/// Writes the line naming the source and sample size of the following block.
pub fn write_caption<W: Write>(
    out: &mut W,
    source: SourceId,
    sample_size: usize,
) -> io::Result<()> {
    writeln!(out, "Random Number Generator: {source}, Sample Size: {sample_size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(summary: &Summary, show_header: bool) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, summary, show_header).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn known_summary() -> Summary {
        Summary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap()
    }

    #[test]
    fn test_row_without_header() {
        let text = render(&known_summary(), false);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(RULE_WIDTH));
        assert_eq!(
            lines[1],
            "5               3.000000        1.581139        1.000000        5.000000       "
        );
        assert_eq!(lines[2], "-".repeat(RULE_WIDTH));
    }

    #[test]
    fn test_row_with_header() {
        let text = render(&known_summary(), true);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "n               Mean            Std Dev         Min             Max            "
        );
        assert!(lines[3].starts_with("5 "));
    }

    #[test]
    fn test_undefined_std_dev_is_printed() {
        let summary = Summary::new(&[5.0]).unwrap();
        let text = render(&summary, false);

        assert!(text.contains("NaN"));
    }

    #[test]
    fn test_caption() {
        let mut buf = Vec::new();
        write_caption(&mut buf, SourceId::Entropy, 100).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Random Number Generator: 2, Sample Size: 100\n"
        );
    }
}
