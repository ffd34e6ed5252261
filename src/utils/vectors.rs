use crate::core::HssError;

/// Define the sort type
#[derive(PartialEq)]
pub enum Sort {
    /// Sort values in ascending order
    Ascending,
    /// Sort values in descending order
    Descending,
}

/// Returns the indices that would sort an array.
///
/// # Arguments
///
/// * `data`: The vector to sort.
/// * `sort_type`: Specify whether to sort in ascending or descending order.
///
/// returns: `Vec<usize>`. The vector with the indices.
pub fn argsort(data: &[f64], sort_type: Sort) -> Vec<usize> {
    let mut indices = (0..data.len()).collect::<Vec<_>>();
    indices.sort_by(|a, b| data[*a].total_cmp(&data[*b]));

    if sort_type == Sort::Descending {
        indices.reverse();
    }
    indices
}

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, HssError>`
pub fn vector_min(v: &[f64]) -> Result<f64, HssError> {
    v.iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(HssError::Metric(
            "vector minimum".to_string(),
            "Cannot calculate the minimum of an empty vector".to_string(),
        ))
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, HssError>`
pub fn vector_max(v: &[f64]) -> Result<f64, HssError> {
    v.iter()
        .copied()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(HssError::Metric(
            "vector maximum".to_string(),
            "Cannot calculate the maximum of an empty vector".to_string(),
        ))
}

#[cfg(test)]
mod test {
    use crate::utils::{argsort, vector_max, vector_min, Sort};

    #[test]
    fn test_argsort() {
        let vec = vec![99.0, 11.0, 456.2, 19.0, 0.5];

        assert_eq!(argsort(&vec, Sort::Ascending), vec![4, 1, 3, 0, 2]);
        assert_eq!(argsort(&vec, Sort::Descending), vec![2, 0, 3, 1, 4]);
    }

    #[test]
    fn test_min_max() {
        let vec = vec![3.0, -1.5, 8.25];
        assert_eq!(vector_min(&vec).unwrap(), -1.5);
        assert_eq!(vector_max(&vec).unwrap(), 8.25);
        assert!(vector_max(&[]).is_err());
    }
}
