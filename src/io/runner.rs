use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::algorithms::{greedy_hss, SubsetSelection};
use crate::core::HssError;
use crate::io::{OutputFormat, PointSets};
use crate::metrics::DataRange;

/// The options to select the subsets from the point sets stored in files.
#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    /// The reference point. When `None`, the coordinate-wise maximum of the points is used. This
    /// is calculated from all the files when more than one file is given.
    pub reference_point: Option<Vec<f64>>,
    /// The number of points to select from each run. When `None`, half of the points of each run
    /// (at least one) are selected. Values larger than the size of a run are capped.
    pub subset_size: Option<usize>,
    /// Whether to merge all the runs in a file into one set of points.
    pub union: bool,
    /// When given, the output of each file is written to a new file whose name is the input
    /// file name followed by this suffix.
    pub suffix: Option<String>,
    /// How the selections are printed.
    pub format: OutputFormat,
}

/// The selection of one run of points.
#[derive(Debug, Clone)]
pub struct RunSelection {
    /// The number of points that were selected.
    pub subset_size: usize,
    /// The selection.
    pub selection: SubsetSelection,
    /// The time taken by the selection.
    pub elapsed: Duration,
}

/// The selections of all the runs in a file.
#[derive(Debug, Clone)]
pub struct FileSelection {
    /// The input file.
    pub file: PathBuf,
    /// The reference point used for all the runs in the file.
    pub reference_point: Vec<f64>,
    /// The selection of each run.
    pub runs: Vec<RunSelection>,
    /// The selections printed with the requested [`OutputFormat`]. Runs are separated by an
    /// empty line when the file contains more than one run.
    pub output: String,
}

/// Greedily select a subset of points from each run of points stored in one or more files. See
/// [`PointSets`] for the file format.
///
/// # Arguments
///
/// * `files`: The files to read.
/// * `options`: The selection options.
///
/// returns: `Result<Vec<FileSelection>, HssError>`. This returns an error if a file cannot be
/// read, the points have an unsupported number of objectives or the reference point does not
/// have the same number of coordinates as the points.
pub fn select_from_files(
    files: &[PathBuf],
    options: &SelectionOptions,
) -> Result<Vec<FileSelection>, HssError> {
    let point_sets = files
        .iter()
        .map(|f| PointSets::from_file(f))
        .collect::<Result<Vec<PointSets>, HssError>>()?;

    // the default reference point is shared by all the files
    let mut global_range: Option<DataRange> = None;
    if options.reference_point.is_none() && point_sets.len() > 1 {
        for sets in point_sets.iter() {
            let range = sets.data_range()?;
            global_range = Some(match global_range {
                None => range,
                Some(current) => current.merge(&range)?,
            });
        }
    }

    let mut selections = Vec::with_capacity(files.len());
    for (file, sets) in files.iter().zip(point_sets) {
        info!("Selecting points from {}", file.display());
        let range = match &global_range {
            Some(range) => range.clone(),
            None => sets.data_range()?,
        };

        let reference_point = match &options.reference_point {
            Some(reference_point) => {
                if reference_point.len() != sets.dimensions() {
                    return Err(HssError::WrongDimension(
                        "reference point".to_string(),
                        0,
                        reference_point.len(),
                        sets.dimensions(),
                    ));
                }
                if reference_point
                    .iter()
                    .zip(&range.maximum)
                    .any(|(r, m)| r <= m)
                {
                    warn!(
                        "{}: some points do not strictly dominate the reference point",
                        file.display()
                    );
                }
                reference_point.clone()
            }
            None => range.maximum.clone(),
        };
        info!("Using reference point {:?}", reference_point);

        let sets = if options.union { sets.union() } else { sets };
        let multiple_runs = sets.runs().len() > 1;

        let mut runs = Vec::with_capacity(sets.runs().len());
        let mut output = String::new();
        for (run_idx, points) in sets.runs().iter().enumerate() {
            let size = points.len();
            let subset_size = match options.subset_size {
                Some(k) => k.min(size),
                None => (size / 2).max(1),
            };

            let start = Instant::now();
            let selection = greedy_hss(points, &reference_point, subset_size)?;
            let elapsed = start.elapsed();
            info!(
                "Run #{}: selected {} out of {} points in {:?} - hyper-volume {}",
                run_idx + 1,
                subset_size,
                size,
                elapsed,
                selection.hyper_volume
            );

            output.push_str(&options.format.render(&selection));
            if multiple_runs {
                output.push('\n');
            }
            runs.push(RunSelection {
                subset_size,
                selection,
                elapsed,
            });
        }

        if let Some(suffix) = &options.suffix {
            let mut destination = file.clone().into_os_string();
            destination.push(suffix);
            let destination = PathBuf::from(destination);
            fs::write(&destination, &output)
                .map_err(|e| HssError::Io(destination.display().to_string(), e.to_string()))?;
            info!("{} -> {}", file.display(), destination.display());
        }

        selections.push(FileSelection {
            file: file.clone(),
            reference_point,
            runs,
            output,
        });
    }
    Ok(selections)
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use crate::io::{select_from_files, OutputFormat, SelectionOptions};

    /// Write a file in the temporary folder.
    fn write_file(name: &str, content: &str) -> PathBuf {
        let file = env::temp_dir().join(name);
        fs::write(&file, content).unwrap();
        file
    }

    #[test]
    /// The reference point is the coordinate-wise maximum of the file and the runs are
    /// selected separately.
    fn test_default_options() {
        let file = write_file(
            "greedy_hss_runner_default.txt",
            "1 4\n2 2\n3 1\n4 0\n0 5\n\n1 1\n0 2\n",
        );
        let selections = select_from_files(&[file.clone()], &SelectionOptions::default()).unwrap();

        assert_eq!(selections.len(), 1);
        let selection = &selections[0];
        assert_eq!(selection.reference_point, vec![4.0, 5.0]);
        assert_eq!(selection.runs.len(), 2);

        // (2, 2) adds 6 and (1, 4) adds 1 with reference (4, 5)
        assert_eq!(selection.runs[0].subset_size, 2);
        assert_eq!(selection.runs[0].selection.selected, vec![1, 0]);
        assert_eq!(selection.runs[0].selection.contributions, vec![6.0, 1.0]);
        assert_eq!(selection.runs[1].subset_size, 1);
        assert_eq!(selection.runs[1].selection.selected, vec![0]);
        assert_eq!(
            selection.output,
            "1\n0\n7               \n\n0\n12              \n\n"
        );
    }

    #[test]
    /// The options are applied to all the files.
    fn test_options() {
        let file1 = write_file("greedy_hss_runner_1.txt", "1 4\n2 2\n\n3 1\n");
        let file2 = write_file("greedy_hss_runner_2.txt", "0 6\n");

        // the default reference point uses all the files
        let options = SelectionOptions {
            subset_size: Some(10),
            union: true,
            ..SelectionOptions::default()
        };
        let selections = select_from_files(&[file1.clone(), file2.clone()], &options).unwrap();
        assert_eq!(selections[0].reference_point, vec![3.0, 6.0]);
        assert_eq!(selections[1].reference_point, vec![3.0, 6.0]);
        assert_eq!(selections[0].runs.len(), 1);
        assert_eq!(selections[0].runs[0].subset_size, 3);
        assert_eq!(selections[1].runs[0].subset_size, 1);

        let options = SelectionOptions {
            reference_point: Some(vec![5.0, 5.0]),
            subset_size: Some(1),
            union: true,
            suffix: Some(".ghss".to_string()),
            format: OutputFormat::Contributions,
        };
        let selections = select_from_files(&[file1.clone()], &options).unwrap();
        assert_eq!(selections[0].output, "1\t9               \n");
        let written = fs::read_to_string(env::temp_dir().join("greedy_hss_runner_1.txt.ghss"));
        assert_eq!(written.unwrap(), selections[0].output);

        let options = SelectionOptions {
            reference_point: Some(vec![5.0, 5.0, 5.0]),
            ..SelectionOptions::default()
        };
        assert!(select_from_files(&[file1], &options).is_err());
    }
}
