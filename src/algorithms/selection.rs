use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::HssError;

/// The outcome of a greedy hyper-volume subset selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubsetSelection {
    /// The hyper-volume of the selected subset. This is the sum of the `contributions` added in
    /// selection order.
    pub hyper_volume: f64,
    /// The marginal hyper-volume contribution of each selected point at the time it was
    /// selected.
    pub contributions: Vec<f64>,
    /// The indexes of the selected points in the input array, in selection order.
    pub selected: Vec<usize>,
}

/// The struct used to export a selection to a JSON file.
#[derive(Serialize, Deserialize, Debug)]
pub struct SubsetSelectionExport {
    /// The reference point used in the selection.
    pub reference_point: Vec<f64>,
    /// The number of selected points.
    pub subset_size: usize,
    /// The selection.
    pub selection: SubsetSelection,
    /// When the file was exported.
    pub exported_on: DateTime<Utc>,
}

impl SubsetSelection {
    /// The number of selected points.
    ///
    /// returns: `usize`
    pub fn subset_size(&self) -> usize {
        self.selected.len()
    }

    /// The hyper-volume of the first `i + 1` selected points, for each selection step `i`.
    ///
    /// returns: `Vec<f64>`
    pub fn accumulated_contributions(&self) -> Vec<f64> {
        self.contributions
            .iter()
            .scan(0.0, |total, c| {
                *total += c;
                Some(*total)
            })
            .collect()
    }

    /// Get the selected points in selection order.
    ///
    /// # Arguments
    ///
    /// * `points`: The points the subset was selected from.
    ///
    /// returns: `Result<Vec<Vec<f64>>, HssError>`. This returns an error if a selected index is
    /// not in `points`.
    pub fn subset(&self, points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, HssError> {
        self.selected
            .iter()
            .map(|idx| {
                points
                    .get(*idx)
                    .cloned()
                    .ok_or(HssError::MissingPoint(*idx, points.len()))
            })
            .collect()
    }

    /// Save the selection and the reference point to a JSON file.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The reference point used in the selection.
    /// * `destination`: The path to the JSON file.
    ///
    /// return `Result<(), HssError>`
    pub fn save_to_json(
        &self,
        reference_point: &[f64],
        destination: &PathBuf,
    ) -> Result<(), HssError> {
        let export = SubsetSelectionExport {
            reference_point: reference_point.to_vec(),
            subset_size: self.subset_size(),
            selection: self.clone(),
            exported_on: Utc::now(),
        };
        let data =
            serde_json::to_string_pretty(&export).map_err(|e| HssError::Export(e.to_string()))?;

        fs::write(destination, data).map_err(|e| HssError::Export(e.to_string()))?;
        Ok(())
    }

    /// Read a selection exported with [`SubsetSelection::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// return `Result<SubsetSelectionExport, HssError>`
    pub fn read_json_file(file: &PathBuf) -> Result<SubsetSelectionExport, HssError> {
        let data = fs::read_to_string(file)
            .map_err(|e| HssError::Io(file.display().to_string(), e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| HssError::Export(e.to_string()))
    }
}
