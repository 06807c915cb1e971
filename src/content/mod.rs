//! Content-based filtering over item metadata features.
//!
//! Builds a user taste vector by averaging the feature rows of favorite
//! items, scores every item by cosine similarity against that vector, and
//! nudges the vector toward or away from an item on like/dislike feedback.

use crate::feature::FeatureStore;
use crate::primitives::Vector;
use crate::{Feedback, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Epsilon guard for cosine denominators (all-zero vectors).
const COSINE_EPS: f32 = 1e-8;

/// Default step size for feedback-driven profile updates.
const DEFAULT_LEARNING_RATE: f32 = 0.1;

/// Content-based recommender over a [`FeatureStore`].
///
/// # Examples
///
/// ```
/// use sugerir::content::ContentModel;
/// use sugerir::feature::FeatureStore;
/// use sugerir::primitives::Matrix;
///
/// let features = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     0.0, 1.0,
///     1.0, 1.0,
/// ]).expect("valid matrix dimensions");
/// let store = FeatureStore::new(vec![10, 20, 30], features).expect("ids match rows");
/// let model = ContentModel::new(store);
///
/// let profile = model.build_user_profile(&[10]);
/// let scores = model.score(&profile);
/// // item 10 matches the profile direction exactly
/// assert!(scores[&10] > scores[&20]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentModel {
    store: FeatureStore,
    learning_rate: f32,
}

impl ContentModel {
    /// Creates a content model over the given feature store.
    #[must_use]
    pub fn new(store: FeatureStore) -> Self {
        Self {
            store,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Sets the feedback update step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// The underlying feature store.
    #[must_use]
    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    /// Builds a taste vector as the column-wise mean of the feature rows
    /// of the given favorites. Ids absent from the store are silently
    /// dropped; if none match, returns a zero vector of the feature
    /// dimensionality so downstream blending degrades gracefully.
    #[must_use]
    pub fn build_user_profile(&self, favorites: &[ItemId]) -> Vector<f32> {
        let dim = self.store.dim();
        let mut sum = vec![0.0_f32; dim];
        let mut matched = 0usize;

        for &id in favorites {
            if let Some(row) = self.store.row(id) {
                for (acc, &value) in sum.iter_mut().zip(row.iter()) {
                    *acc += value;
                }
                matched += 1;
            }
        }

        if matched == 0 {
            return Vector::zeros(dim);
        }

        for value in &mut sum {
            *value /= matched as f32;
        }
        Vector::from_vec(sum)
    }

    /// Scores every item in the store by cosine similarity against the
    /// user vector. An all-zero user vector scores everything ~0.
    ///
    /// # Panics
    ///
    /// Panics if the user vector length differs from the store
    /// dimensionality.
    #[must_use]
    pub fn score(&self, user_vector: &Vector<f32>) -> BTreeMap<ItemId, f32> {
        let user_norm = user_vector.norm();
        self.store
            .iter()
            .map(|(id, row)| {
                let denom = user_norm * row.norm() + COSINE_EPS;
                (id, user_vector.dot(&row) / denom)
            })
            .collect()
    }

    /// Moves the taste vector toward the item's feature row on a like,
    /// away from it on a dislike, by the configured step size. Unknown
    /// items return the input unchanged.
    #[must_use]
    pub fn update_profile(
        &self,
        user_vector: &Vector<f32>,
        item_id: ItemId,
        feedback: Feedback,
    ) -> Vector<f32> {
        let Some(row) = self.store.row(item_id) else {
            return user_vector.clone();
        };

        let step = row.sub(user_vector).mul_scalar(self.learning_rate);
        match feedback {
            Feedback::Like => user_vector.add(&step),
            Feedback::Dislike => user_vector.sub(&step),
        }
    }

    /// Recommends the `top_n` items most similar to the user vector,
    /// score descending, ties broken by item id ascending.
    #[must_use]
    pub fn recommend(&self, user_vector: &Vector<f32>, top_n: usize) -> Vec<ItemId> {
        let scores = self.score(user_vector);
        let mut ranked: Vec<(ItemId, f32)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().take(top_n).map(|(id, _)| id).collect()
    }
}
