//! Collaborative filtering via truncated SVD matrix factorization.
//!
//! Training pivots (user, item, rating) triples into a dense user x item
//! matrix (missing entries 0), factorizes it at rank `n_factors`, and keeps
//! the user factors scaled by the singular values so a prediction is just
//! the dot product of two latent rows.
//!
//! Unknown users are cold-started by lazily appending a zero row to the
//! user-factor matrix; unknown items predict 0.0 and are never grown, since
//! the item side is fixed between retrains. Single-pair SGD updates nudge a
//! user row against an observed like/dislike without a full refit.

use crate::error::{Result, SugerirError};
use crate::primitives::{Matrix, Vector};
use crate::{Feedback, ItemId, UserId};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Default factorization rank.
const DEFAULT_N_FACTORS: usize = 30;

/// Step size for single-pair SGD user-vector updates.
const DEFAULT_LEARNING_RATE: f32 = 0.1;

/// One observed (user, item, rating) triple.
///
/// # Examples
///
/// ```
/// use sugerir::collaborative::Interaction;
///
/// let obs = Interaction::new(1, 10, 5.0);
/// assert_eq!(obs.user_id, 1);
/// assert_eq!(obs.rating, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// User who produced the rating.
    pub user_id: UserId,
    /// Rated item.
    pub item_id: ItemId,
    /// Rating value (binary like/dislike or a star scale; any finite f32).
    pub rating: f32,
}

impl Interaction {
    /// Creates an interaction triple.
    #[must_use]
    pub fn new(user_id: UserId, item_id: ItemId, rating: f32) -> Self {
        Self {
            user_id,
            item_id,
            rating,
        }
    }
}

/// Matrix-factorization collaborative filter.
///
/// # Examples
///
/// ```
/// use sugerir::collaborative::{CollaborativeFilter, Interaction};
///
/// let interactions = vec![
///     Interaction::new(1, 10, 5.0),
///     Interaction::new(1, 20, 1.0),
///     Interaction::new(2, 10, 1.0),
///     Interaction::new(2, 30, 5.0),
/// ];
///
/// let mut model = CollaborativeFilter::new(2);
/// model.fit(&interactions).expect("non-empty finite interactions");
///
/// let score = model.predict(1, 10).expect("model is fitted");
/// assert!(score.is_finite());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborativeFilter {
    n_factors: usize,
    learning_rate: f32,
    user_index: HashMap<UserId, usize>,
    item_index: HashMap<ItemId, usize>,
    /// Item ids in column order (ascending), fixed at fit time.
    item_ids: Vec<ItemId>,
    user_factors: Option<Matrix<f32>>,
    item_factors: Option<Matrix<f32>>,
}

impl Default for CollaborativeFilter {
    fn default() -> Self {
        Self::new(DEFAULT_N_FACTORS)
    }
}

impl CollaborativeFilter {
    /// Creates an unfitted model with the given factorization rank.
    #[must_use]
    pub fn new(n_factors: usize) -> Self {
        Self {
            n_factors,
            learning_rate: DEFAULT_LEARNING_RATE,
            user_index: HashMap::new(),
            item_index: HashMap::new(),
            item_ids: Vec::new(),
            user_factors: None,
            item_factors: None,
        }
    }

    /// Sets the SGD update step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Requested factorization rank (the effective rank is capped by the
    /// training matrix dimensions).
    #[must_use]
    pub fn n_factors(&self) -> usize {
        self.n_factors
    }

    /// Number of tracked users (training users plus cold-start rows).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.user_index.len()
    }

    /// Number of items known from training.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.item_index.len()
    }

    /// Returns true once `fit` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.user_factors.is_some()
    }

    /// Item ids known to the model, ascending. Empty before `fit`.
    #[must_use]
    pub fn known_items(&self) -> &[ItemId] {
        &self.item_ids
    }

    /// The latent row for a user, if one exists.
    #[must_use]
    pub fn user_factor(&self, user_id: UserId) -> Option<Vector<f32>> {
        let row = *self.user_index.get(&user_id)?;
        self.user_factors.as_ref().map(|m| m.row(row))
    }

    /// The latent row for an item, if one exists.
    #[must_use]
    pub fn item_factor(&self, item_id: ItemId) -> Option<Vector<f32>> {
        let row = *self.item_index.get(&item_id)?;
        self.item_factors.as_ref().map(|m| m.row(row))
    }

    /// Trains the factorization from scratch, replacing all prior state
    /// including cold-start rows and SGD-adjusted vectors.
    ///
    /// Duplicate (user, item) pairs keep the last rating seen. Missing
    /// cells are treated as 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `interactions` is empty or contains a
    /// non-finite rating (factorization requires a non-empty finite
    /// matrix), or if `n_factors` is 0.
    pub fn fit(&mut self, interactions: &[Interaction]) -> Result<()> {
        if self.n_factors == 0 {
            return Err(SugerirError::InvalidHyperparameter {
                param: "n_factors".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if interactions.is_empty() {
            return Err(SugerirError::empty_input("interactions"));
        }
        for obs in interactions {
            if !obs.rating.is_finite() {
                return Err(SugerirError::Other(format!(
                    "non-finite rating {} for user {} item {}",
                    obs.rating, obs.user_id, obs.item_id
                )));
            }
        }

        let user_ids: Vec<UserId> = interactions
            .iter()
            .map(|o| o.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let item_ids: Vec<ItemId> = interactions
            .iter()
            .map(|o| o.item_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let user_index: HashMap<UserId, usize> =
            user_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let item_index: HashMap<ItemId, usize> =
            item_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        // Pivot triples into the dense interaction matrix; last write wins.
        let mut ratings = DMatrix::<f32>::zeros(user_ids.len(), item_ids.len());
        for obs in interactions {
            let u = user_index[&obs.user_id];
            let i = item_index[&obs.item_id];
            ratings[(u, i)] = obs.rating;
        }

        let rank = self.n_factors.min(user_ids.len()).min(item_ids.len());

        let (user_factors, item_factors) =
            truncated_svd(&ratings, rank, user_ids.len(), item_ids.len())?;

        self.user_index = user_index;
        self.item_index = item_index;
        self.item_ids = item_ids;
        self.user_factors = Some(user_factors);
        self.item_factors = Some(item_factors);
        Ok(())
    }

    /// Predicted affinity of a user for an item.
    ///
    /// Cold-start policy: an unknown user gets a fresh zero latent row
    /// (registered for reuse by later calls); an unknown item scores 0.0
    /// without growing anything. Neither case is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has not been fitted.
    pub fn predict(&mut self, user_id: UserId, item_id: ItemId) -> Result<f32> {
        let user_row = self.ensure_user_row(user_id)?;

        let Some(&item_row) = self.item_index.get(&item_id) else {
            return Ok(0.0);
        };

        let users = self.factors(FactorSide::User)?;
        let items = self.factors(FactorSide::Item)?;
        Ok(users.row(user_row).dot(&items.row(item_row)))
    }

    /// Top-N items for a user, score descending, ties broken by item id
    /// ascending. Cold-start users are grown exactly as in [`predict`].
    ///
    /// # Errors
    ///
    /// Returns an error if the model has not been fitted.
    ///
    /// [`predict`]: CollaborativeFilter::predict
    pub fn recommend(&mut self, user_id: UserId, top_n: usize) -> Result<Vec<ItemId>> {
        let user_row = self.ensure_user_row(user_id)?;
        let users = self.factors(FactorSide::User)?;
        let items = self.factors(FactorSide::Item)?;
        let user_vec = users.row(user_row);

        let mut scored: Vec<(ItemId, f32)> = self
            .item_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, user_vec.dot(&items.row(i))))
            .collect();

        // Stable sort over the id-ascending base order keeps ties id-ascending.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored.into_iter().take(top_n).map(|(id, _)| id).collect())
    }

    /// Online single-step gradient update of one user row against one
    /// observed like/dislike: `u += lr * (feedback - u.i) * i`. O(rank)
    /// cost, no refit. Unknown users are cold-started first; unknown
    /// items are a silent no-op (there is no latent vector to move
    /// against).
    ///
    /// # Errors
    ///
    /// Returns an error if the model has not been fitted.
    pub fn update_user_vector(
        &mut self,
        user_id: UserId,
        item_id: ItemId,
        feedback: Feedback,
    ) -> Result<()> {
        let user_row = self.ensure_user_row(user_id)?;

        let Some(&item_row) = self.item_index.get(&item_id) else {
            return Ok(());
        };

        let item_vec = self.factors(FactorSide::Item)?.row(item_row);
        let user_vec = self.factors(FactorSide::User)?.row(user_row);

        let error = feedback.value() - user_vec.dot(&item_vec);
        let updated = user_vec.add(&item_vec.mul_scalar(self.learning_rate * error));

        self.user_factors
            .as_mut()
            .ok_or_else(|| SugerirError::not_fitted("CollaborativeFilter"))?
            .set_row(user_row, updated.as_slice())
            .map_err(Into::into)
    }

    /// Looks up the user's factor row, appending a zero row for unknown
    /// users. The index map and the matrix are updated together so
    /// `map size == row count` always holds.
    fn ensure_user_row(&mut self, user_id: UserId) -> Result<usize> {
        if !self.is_fitted() {
            return Err(SugerirError::not_fitted("CollaborativeFilter"));
        }
        if let Some(&row) = self.user_index.get(&user_id) {
            return Ok(row);
        }

        let factors = self
            .user_factors
            .as_mut()
            .ok_or_else(|| SugerirError::not_fitted("CollaborativeFilter"))?;
        let zero_row = vec![0.0_f32; factors.n_cols()];
        factors.push_row(&zero_row)?;
        let row = factors.n_rows() - 1;
        self.user_index.insert(user_id, row);
        Ok(row)
    }

    fn factors(&self, side: FactorSide) -> Result<&Matrix<f32>> {
        let factors = match side {
            FactorSide::User => &self.user_factors,
            FactorSide::Item => &self.item_factors,
        };
        factors
            .as_ref()
            .ok_or_else(|| SugerirError::not_fitted("CollaborativeFilter"))
    }
}

enum FactorSide {
    User,
    Item,
}

/// Rank-`rank` truncated SVD of the ratings matrix. Returns user factors
/// `U_k * S_k` (users x rank) and item factors `V_k` (items x rank), so
/// `user_factors * item_factors^T` is the rank-k reconstruction.
fn truncated_svd(
    ratings: &DMatrix<f32>,
    rank: usize,
    n_users: usize,
    n_items: usize,
) -> Result<(Matrix<f32>, Matrix<f32>)> {
    let svd = ratings.clone().svd_unordered(true, true);
    let u = svd
        .u
        .ok_or_else(|| SugerirError::Other("SVD did not produce U".to_string()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| SugerirError::Other("SVD did not produce V^T".to_string()))?;
    let singular = svd.singular_values;

    // take components by descending singular value
    let mut order: Vec<usize> = (0..singular.len()).collect();
    order.sort_by(|&a, &b| {
        singular[b]
            .partial_cmp(&singular[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(rank);

    let mut user_factors = Matrix::zeros(n_users, rank);
    let mut item_factors = Matrix::zeros(n_items, rank);

    for (k, &component) in order.iter().enumerate() {
        let sigma = singular[component];
        for row in 0..n_users {
            user_factors.set(row, k, u[(row, component)] * sigma);
        }
        for col in 0..n_items {
            item_factors.set(col, k, v_t[(component, col)]);
        }
    }

    Ok((user_factors, item_factors))
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;
