use std::fmt::Write;

use crate::algorithms::SubsetSelection;
use crate::core::HssError;

/// The number of significant digits used to print floating numbers.
const PRECISION: i32 = 15;

/// How a selection is printed. Each selection step is printed on a separate line.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// The indexes of the selected points followed by the hyper-volume of the subset.
    #[default]
    IndicesAndHyperVolume,
    /// The indexes of the selected points.
    Indices,
    /// The hyper-volume of the subset.
    HyperVolume,
    /// The indexes of the selected points and their contribution.
    Contributions,
    /// The indexes of the selected points and the hyper-volume of the subset after each
    /// selection.
    AccumulatedContributions,
}

impl TryFrom<u8> for OutputFormat {
    type Error = HssError;

    /// Get the format from its code (`0` to `4`).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutputFormat::IndicesAndHyperVolume),
            1 => Ok(OutputFormat::Indices),
            2 => Ok(OutputFormat::HyperVolume),
            3 => Ok(OutputFormat::Contributions),
            4 => Ok(OutputFormat::AccumulatedContributions),
            _ => Err(HssError::InvalidOutputFormat(value)),
        }
    }
}

impl OutputFormat {
    /// Print a selection.
    ///
    /// # Arguments
    ///
    /// * `selection`: The selection to print.
    ///
    /// returns: `String`
    pub fn render(&self, selection: &SubsetSelection) -> String {
        let mut output = String::new();
        match self {
            OutputFormat::IndicesAndHyperVolume
            | OutputFormat::Indices
            | OutputFormat::HyperVolume => {
                if *self != OutputFormat::HyperVolume {
                    for idx in &selection.selected {
                        let _ = writeln!(output, "{idx}");
                    }
                }
                if *self != OutputFormat::Indices {
                    let total = selection
                        .accumulated_contributions()
                        .last()
                        .copied()
                        .unwrap_or(0.0);
                    let _ = writeln!(output, "{:<16}", format_g(total));
                }
            }
            OutputFormat::Contributions => {
                for (idx, c) in selection.selected.iter().zip(&selection.contributions) {
                    let _ = writeln!(output, "{idx}\t{:<16}", format_g(*c));
                }
            }
            OutputFormat::AccumulatedContributions => {
                let accumulated = selection.accumulated_contributions();
                for (idx, c) in selection.selected.iter().zip(accumulated) {
                    let _ = writeln!(output, "{idx}\t{:<16}", format_g(c));
                }
            }
        }
        output
    }
}

/// Format a number with 15 significant digits, using the scientific notation only for very
/// small or large exponents and removing trailing zeros (as the `%.15g` directive in C).
///
/// # Arguments
///
/// * `value`: The number to format.
///
/// returns: `String`
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // the exponent after rounding to the requested digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Remove the trailing zeros of the decimal part and the decimal point if no decimal is left.
fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
