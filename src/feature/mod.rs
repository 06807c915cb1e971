//! Immutable feature store mapping item ids to fixed-length feature rows.
//!
//! The store is produced once by an external feature-engineering step
//! (one-hot genres, TF-IDF plot terms, normalized vote averages, ...) and
//! consumed read-only by the content model. Column semantics are opaque
//! here; a fresh build replaces the store wholesale.

use crate::error::{Result, SugerirError};
use crate::primitives::{Matrix, Vector};
use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const NORM_EPS: f32 = 1e-8;

/// Immutable item-id -> feature-vector store.
///
/// # Examples
///
/// ```
/// use sugerir::feature::FeatureStore;
/// use sugerir::primitives::Matrix;
///
/// let features = Matrix::from_vec(2, 3, vec![
///     1.0, 0.0, 0.5,
///     0.0, 1.0, 0.8,
/// ]).expect("valid matrix dimensions");
/// let store = FeatureStore::new(vec![10, 20], features).expect("ids match rows");
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.dim(), 3);
/// assert!(store.contains(10));
/// assert!(!store.contains(99));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureStore {
    ids: Vec<ItemId>,
    index: HashMap<ItemId, usize>,
    features: Matrix<f32>,
}

impl FeatureStore {
    /// Creates a store from item ids and their feature matrix (row i
    /// belongs to `ids[i]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the id count doesn't match the row count or
    /// if ids contain duplicates.
    pub fn new(ids: Vec<ItemId>, features: Matrix<f32>) -> Result<Self> {
        if ids.len() != features.n_rows() {
            return Err(SugerirError::dimension_mismatch(
                "ids",
                features.n_rows(),
                ids.len(),
            ));
        }

        let mut index = HashMap::with_capacity(ids.len());
        for (i, &id) in ids.iter().enumerate() {
            if index.insert(id, i).is_some() {
                return Err(SugerirError::Other(format!("duplicate item id: {id}")));
            }
        }

        Ok(Self {
            ids,
            index,
            features,
        })
    }

    /// Number of items in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Feature dimensionality (fixed once built).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.features.n_cols()
    }

    /// Returns true if the item is present.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Feature row for an item, if present.
    #[must_use]
    pub fn row(&self, id: ItemId) -> Option<Vector<f32>> {
        self.index.get(&id).map(|&i| self.features.row(i))
    }

    /// Item ids in build order.
    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Iterates over (id, feature row) pairs in build order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, Vector<f32>)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, self.features.row(i)))
    }

    /// Returns a store whose rows are rescaled to unit L2 length, so
    /// dot products against it are cosine similarities. All-zero rows
    /// are left as zeros (epsilon-guarded denominator).
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (rows, cols) = self.features.shape();
        let mut normalized = Matrix::zeros(rows, cols);
        for i in 0..rows {
            let row = self.features.row(i);
            let norm = row.norm();
            for j in 0..cols {
                normalized.set(i, j, self.features.get(i, j) / (norm + NORM_EPS));
            }
        }
        Self {
            ids: self.ids.clone(),
            index: self.index.clone(),
            features: normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> FeatureStore {
        let features = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 3.0, 4.0])
            .expect("test data has correct dimensions: 3*2=6 elements");
        FeatureStore::new(vec![10, 20, 30], features).expect("unique ids matching rows")
    }

    #[test]
    fn test_build_and_lookup() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.dim(), 2);
        assert_eq!(store.ids(), &[10, 20, 30]);

        let row = store.row(30).expect("id 30 is in the store");
        assert!((row[0] - 3.0).abs() < 1e-6);
        assert!((row[1] - 4.0).abs() < 1e-6);
        assert!(store.row(99).is_none());
    }

    #[test]
    fn test_id_row_count_mismatch() {
        let features = Matrix::<f32>::zeros(2, 2);
        assert!(FeatureStore::new(vec![1], features).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let features = Matrix::<f32>::zeros(2, 2);
        let err = FeatureStore::new(vec![7, 7], features);
        assert!(err.is_err());
        assert!(err.unwrap_err().to_string().contains("duplicate item id"));
    }

    #[test]
    fn test_normalized_rows_have_unit_length() {
        let store = sample_store().normalized();
        let row = store.row(30).expect("id 30 is in the store");
        assert!((row.norm() - 1.0).abs() < 1e-4);
        // direction preserved: 3-4-5 triangle
        assert!((row[0] - 0.6).abs() < 1e-4);
        assert!((row[1] - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_normalized_zero_row_stays_zero() {
        let features = Matrix::<f32>::zeros(1, 3);
        let store = FeatureStore::new(vec![5], features).expect("unique ids matching rows");
        let row = store.normalized().row(5).expect("id 5 is in the store");
        assert!(row.is_zero());
    }

    #[test]
    fn test_iter_build_order() {
        let store = sample_store();
        let ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
