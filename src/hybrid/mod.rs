//! Hybrid blending of content and collaborative scores.
//!
//! Each model's score series is min-max normalized to [0,1] per call and
//! combined as `alpha * content + (1 - alpha) * collab` over the union of
//! both models' item sets. Normalization bounds are recomputed on every
//! call: cold-start insertions and retrains shift the score distribution
//! between calls, so cached bounds would go stale.

use crate::collaborative::CollaborativeFilter;
use crate::content::ContentModel;
use crate::error::{Result, SugerirError};
use crate::primitives::Vector;
use crate::{ItemId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Epsilon guard for degenerate (constant) score series.
const MINMAX_EPS: f32 = 1e-8;

/// Blends a [`ContentModel`] and a [`CollaborativeFilter`] with a tunable
/// weight `alpha` (1.0 = all content, 0.0 = all collaborative).
///
/// # Examples
///
/// ```
/// use sugerir::collaborative::{CollaborativeFilter, Interaction};
/// use sugerir::content::ContentModel;
/// use sugerir::feature::FeatureStore;
/// use sugerir::hybrid::HybridRecommender;
/// use sugerir::primitives::Matrix;
///
/// let features = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("valid matrix dimensions");
/// let store = FeatureStore::new(vec![10, 20], features).expect("ids match rows");
/// let content = ContentModel::new(store);
///
/// let mut collab = CollaborativeFilter::new(1);
/// collab.fit(&[
///     Interaction::new(1, 10, 5.0),
///     Interaction::new(2, 20, 4.0),
/// ]).expect("non-empty finite interactions");
///
/// let mut hybrid = HybridRecommender::new(content, collab, 0.5);
/// let profile = hybrid.content().build_user_profile(&[10]);
/// let scores = hybrid.blend_scores(1, &profile).expect("both models are ready");
/// assert!(scores.contains_key(&10) && scores.contains_key(&20));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridRecommender {
    content: ContentModel,
    collab: CollaborativeFilter,
    alpha: f32,
}

impl HybridRecommender {
    /// Creates a blender; `alpha` is clamped to [0, 1].
    #[must_use]
    pub fn new(content: ContentModel, collab: CollaborativeFilter, alpha: f32) -> Self {
        Self {
            content,
            collab,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Current blend weight.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Replaces the blend weight, clamped to [0, 1]. When to shift weight
    /// (e.g. toward content for users with sparse collaborative history)
    /// is the caller's policy.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// The content side of the blend.
    #[must_use]
    pub fn content(&self) -> &ContentModel {
        &self.content
    }

    /// The collaborative side of the blend.
    #[must_use]
    pub fn collab(&self) -> &CollaborativeFilter {
        &self.collab
    }

    /// Mutable collaborative side, for routing feedback updates.
    pub fn collab_mut(&mut self) -> &mut CollaborativeFilter {
        &mut self.collab
    }

    /// Blended score per item over the union of both models' item sets.
    /// An item known to only one model takes 0.0 for the missing side.
    /// Cold-start users are grown by the collaborative side exactly as in
    /// [`CollaborativeFilter::predict`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborative model has not been fitted.
    pub fn blend_scores(
        &mut self,
        user_id: UserId,
        user_vector: &Vector<f32>,
    ) -> Result<BTreeMap<ItemId, f32>> {
        if !self.collab.is_fitted() {
            return Err(SugerirError::not_fitted("CollaborativeFilter"));
        }

        let mut content_scores = self.content.score(user_vector);

        let collab_items: Vec<ItemId> = self.collab.known_items().to_vec();
        let mut collab_scores = BTreeMap::new();
        for id in collab_items {
            collab_scores.insert(id, self.collab.predict(user_id, id)?);
        }

        min_max_normalize(&mut content_scores);
        min_max_normalize(&mut collab_scores);

        let ids: BTreeSet<ItemId> = content_scores
            .keys()
            .chain(collab_scores.keys())
            .copied()
            .collect();

        Ok(ids
            .into_iter()
            .map(|id| {
                let c = content_scores.get(&id).copied().unwrap_or(0.0);
                let f = collab_scores.get(&id).copied().unwrap_or(0.0);
                (id, self.alpha * c + (1.0 - self.alpha) * f)
            })
            .collect())
    }

    /// Top-N items by blended score, descending, ties broken by item id
    /// ascending, excluding the given already-favorited ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborative model has not been fitted.
    pub fn recommend(
        &mut self,
        user_id: UserId,
        user_vector: &Vector<f32>,
        top_n: usize,
        exclude: &[ItemId],
    ) -> Result<Vec<ItemId>> {
        let blended = self.blend_scores(user_id, user_vector)?;
        let excluded: BTreeSet<ItemId> = exclude.iter().copied().collect();

        let mut ranked: Vec<(ItemId, f32)> = blended
            .into_iter()
            .filter(|(id, _)| !excluded.contains(id))
            .collect();
        // Stable sort over the id-ascending base order keeps ties id-ascending.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked.into_iter().take(top_n).map(|(id, _)| id).collect())
    }
}

/// Rescales a score series to [0,1] in place via
/// `(x - min) / (max - min + eps)`. A constant series collapses to ~0
/// instead of dividing by zero.
fn min_max_normalize(scores: &mut BTreeMap<ItemId, f32>) {
    let Some(min) = scores.values().copied().reduce(f32::min) else {
        return;
    };
    let max = scores
        .values()
        .copied()
        .reduce(f32::max)
        .unwrap_or(min);

    let denom = max - min + MINMAX_EPS;
    for value in scores.values_mut() {
        *value = (*value - min) / denom;
    }
}
