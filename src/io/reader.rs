use std::fs;
use std::path::Path;

use log::debug;

use crate::core::HssError;
use crate::metrics::DataRange;

/// One or more independent sets of points (runs) read from a text source. Each run contains
/// points with the same number of objectives.
///
/// The text format is:
/// - one point per line with the coordinates separated by white spaces;
/// - lines starting with `#` are comments and are skipped;
/// - one or more empty lines end the current run.
///
/// # Example
/// ```
/// use greedy_hss::io::PointSets;
///
/// let text = "# first run\n1 4\n2 2\n\n# second run\n3 1\n";
/// let sets = PointSets::parse(text, "<example>").unwrap();
/// assert_eq!(sets.runs().len(), 2);
/// assert_eq!(sets.dimensions(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSets {
    /// The runs.
    runs: Vec<Vec<Vec<f64>>>,
    /// The number of coordinates of each point.
    dimensions: usize,
}

impl PointSets {
    /// Parse the point sets from a string.
    ///
    /// # Arguments
    ///
    /// * `text`: The text to parse.
    /// * `source`: The name of the source used in the error messages (for example the file
    ///    name).
    ///
    /// returns: `Result<PointSets, HssError>`. This returns an error if a coordinate is not a
    /// number, the points have a different number of coordinates or there are no points.
    pub fn parse(text: &str, source: &str) -> Result<Self, HssError> {
        let mut runs: Vec<Vec<Vec<f64>>> = vec![];
        let mut current: Vec<Vec<f64>> = vec![];
        let mut dimensions: Option<usize> = None;

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if line.is_empty() {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                continue;
            }

            let point = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| {
                        HssError::Parse(
                            source.to_string(),
                            line_idx + 1,
                            format!("'{token}' is not a number"),
                        )
                    })
                })
                .collect::<Result<Vec<f64>, HssError>>()?;

            let expected = *dimensions.get_or_insert(point.len());
            if point.len() != expected {
                return Err(HssError::Parse(
                    source.to_string(),
                    line_idx + 1,
                    format!(
                        "found {} coordinates, but the previous points have {}",
                        point.len(),
                        expected
                    ),
                ));
            }
            current.push(point);
        }
        if !current.is_empty() {
            runs.push(current);
        }

        let dimensions = dimensions
            .ok_or_else(|| HssError::Io(source.to_string(), "no input data".to_string()))?;
        debug!(
            "Read {} runs with {} objectives from {}",
            runs.len(),
            dimensions,
            source
        );
        Ok(Self { runs, dimensions })
    }

    /// Read the point sets from a file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the file.
    ///
    /// returns: `Result<PointSets, HssError>`
    pub fn from_file(file: &Path) -> Result<Self, HssError> {
        let source = file.display().to_string();
        let text = fs::read_to_string(file).map_err(|e| HssError::Io(source.clone(), e.to_string()))?;
        Self::parse(&text, &source)
    }

    /// The runs.
    ///
    /// returns: `&[Vec<Vec<f64>>]`
    pub fn runs(&self) -> &[Vec<Vec<f64>>] {
        &self.runs
    }

    /// The number of coordinates of each point.
    ///
    /// returns: `usize`
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The total number of points in all the runs.
    ///
    /// returns: `usize`
    pub fn number_of_points(&self) -> usize {
        self.runs.iter().map(|r| r.len()).sum()
    }

    /// Merge all the runs into one set of points.
    ///
    /// returns: `PointSets`
    pub fn union(&self) -> PointSets {
        PointSets {
            runs: vec![self.runs.concat()],
            dimensions: self.dimensions,
        }
    }

    /// The coordinate-wise maximum and minimum of all the points in all the runs.
    ///
    /// returns: `Result<DataRange, HssError>`
    pub fn data_range(&self) -> Result<DataRange, HssError> {
        DataRange::from_points(&self.runs.concat())
    }
}

/// Parse a reference point given as white space separated numbers (for example `"10 10 10"`).
///
/// # Arguments
///
/// * `text`: The string to parse.
///
/// returns: `Result<Vec<f64>, HssError>`. This returns an error if the string contains no
/// number or a token is not a number.
pub fn parse_reference_point(text: &str) -> Result<Vec<f64>, HssError> {
    let reference_point = text
        .split_whitespace()
        .map(|token| token.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| HssError::InvalidReferencePoint(text.to_string()))?;

    if reference_point.is_empty() {
        return Err(HssError::InvalidReferencePoint(text.to_string()));
    }
    Ok(reference_point)
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;

    use crate::core::HssError;
    use crate::io::{parse_reference_point, PointSets};

    #[test]
    /// Runs are separated by empty lines and comments are skipped.
    fn test_parse() {
        let text = "# header\n1 2 3\n4 5 6\n\n\n# run 2\n  7\t8 9  \n\n";
        let sets = PointSets::parse(text, "test").unwrap();

        assert_eq!(sets.dimensions(), 3);
        assert_eq!(sets.runs().len(), 2);
        assert_eq!(
            sets.runs()[0],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
        assert_eq!(sets.runs()[1], vec![vec![7.0, 8.0, 9.0]]);
        assert_eq!(sets.number_of_points(), 3);

        let union = sets.union();
        assert_eq!(union.runs().len(), 1);
        assert_eq!(union.runs()[0].len(), 3);

        let range = sets.data_range().unwrap();
        assert_eq!(range.maximum, vec![7.0, 8.0, 9.0]);
        assert_eq!(range.minimum, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_errors() {
        let err = PointSets::parse("1 2\n3 x\n", "test").unwrap_err();
        assert!(matches!(err, HssError::Parse(_, 2, _)));
        assert!(err.to_string().contains("'x' is not a number"));

        let err = PointSets::parse("1 2\n\n3 4 5\n", "test").unwrap_err();
        assert!(matches!(err, HssError::Parse(_, 3, _)));

        let err = PointSets::parse("# nothing here\n\n", "test").unwrap_err();
        assert!(err.to_string().contains("no input data"));
    }

    #[test]
    fn test_from_file() {
        let file = env::temp_dir().join("greedy_hss_reader_test.txt");
        fs::write(&file, "0.5 0.5\n0.2 0.8\n").unwrap();
        let sets = PointSets::from_file(&file).unwrap();
        assert_eq!(sets.runs()[0], vec![vec![0.5, 0.5], vec![0.2, 0.8]]);

        let missing = env::temp_dir().join("greedy_hss_missing_points.txt");
        assert!(matches!(
            PointSets::from_file(&missing).unwrap_err(),
            HssError::Io(_, _)
        ));
    }

    #[test]
    fn test_reference_point() {
        assert_eq!(
            parse_reference_point(" 10 10.5\t1e1 ").unwrap(),
            vec![10.0, 10.5, 10.0]
        );
        assert!(parse_reference_point("").is_err());
        assert!(parse_reference_point("   ").is_err());
        assert!(parse_reference_point("10 a").is_err());
    }
}
