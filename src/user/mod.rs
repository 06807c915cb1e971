//! Per-session user state: favorites, feedback history, cached vectors.
//!
//! A profile is created at session start, mutated as the user favorites
//! items and reacts to recommendations, and discarded at session end.
//! The cached content/collaborative vectors are derived state; they are
//! recomputed on demand and never auto-invalidated.

use crate::collaborative::CollaborativeFilter;
use crate::content::ContentModel;
use crate::error::{Result, SugerirError};
use crate::primitives::Vector;
use crate::{Feedback, ItemId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mutable per-user state driving both recommendation models.
///
/// # Examples
///
/// ```
/// use sugerir::user::UserProfile;
/// use sugerir::Feedback;
///
/// let mut profile = UserProfile::new(1);
/// profile.add_favorites(&[10, 20]);
/// profile.add_feedback(30, Feedback::Like);
///
/// let summary = profile.summary();
/// assert_eq!(summary.user_id, 1);
/// assert_eq!(summary.favorites, vec![10, 20]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: UserId,
    favorites: Vec<ItemId>,
    feedback: BTreeMap<ItemId, Feedback>,
    content_vector: Option<Vector<f32>>,
    collab_vector: Option<Vector<f32>>,
}

/// Read-only diagnostic snapshot of a profile: ids and shapes, not
/// vector values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Profile owner.
    pub user_id: UserId,
    /// Favorite item ids in insertion order, duplicates included.
    pub favorites: Vec<ItemId>,
    /// Latest feedback per item.
    pub feedback: BTreeMap<ItemId, Feedback>,
    /// Dimensionality of the cached content vector, if built.
    pub content_vector_dim: Option<usize>,
    /// Dimensionality of the cached collaborative vector, if copied.
    pub collab_vector_dim: Option<usize>,
}

impl UserProfile {
    /// Creates an empty profile for the given user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            favorites: Vec::new(),
            feedback: BTreeMap::new(),
            content_vector: None,
            collab_vector: None,
        }
    }

    /// Profile owner.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Favorite item ids in insertion order. Duplicates are permitted
    /// (repeated favoriting); the content mean is unaffected but the
    /// audit order is preserved.
    #[must_use]
    pub fn favorites(&self) -> &[ItemId] {
        &self.favorites
    }

    /// Appends favorites.
    pub fn add_favorites(&mut self, item_ids: &[ItemId]) {
        self.favorites.extend_from_slice(item_ids);
    }

    /// Records feedback for an item; last write wins.
    pub fn add_feedback(&mut self, item_id: ItemId, feedback: Feedback) {
        self.feedback.insert(item_id, feedback);
    }

    /// Latest feedback for an item, if any.
    #[must_use]
    pub fn feedback_for(&self, item_id: ItemId) -> Option<Feedback> {
        self.feedback.get(&item_id).copied()
    }

    /// Builds (and caches) the content taste vector from the current
    /// favorites.
    ///
    /// An empty favorites list is a caller error here, unlike the model's
    /// own policy for favorites that simply don't match the store (those
    /// still produce a zero vector).
    ///
    /// # Errors
    ///
    /// Returns an error if no favorites have been added.
    pub fn build_content_vector(&mut self, model: &ContentModel) -> Result<Vector<f32>> {
        if self.favorites.is_empty() {
            return Err(SugerirError::empty_input("favorites"));
        }
        let vector = model.build_user_profile(&self.favorites);
        self.content_vector = Some(vector.clone());
        Ok(vector)
    }

    /// Copies (and caches) the learned collaborative latent row for this
    /// user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user has no row in the collaborative
    /// model.
    pub fn update_collaborative_vector(&mut self, model: &CollaborativeFilter) -> Result<()> {
        let vector = model.user_factor(self.user_id).ok_or_else(|| {
            SugerirError::Other(format!(
                "user {} not found in collaborative model factors",
                self.user_id
            ))
        })?;
        self.collab_vector = Some(vector);
        Ok(())
    }

    /// Cached content vector, if built.
    #[must_use]
    pub fn content_vector(&self) -> Option<&Vector<f32>> {
        self.content_vector.as_ref()
    }

    /// Cached collaborative vector, if copied.
    #[must_use]
    pub fn collab_vector(&self) -> Option<&Vector<f32>> {
        self.collab_vector.as_ref()
    }

    /// Diagnostic snapshot. Pure read; calling it twice without
    /// intervening mutation yields identical output.
    #[must_use]
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            user_id: self.user_id,
            favorites: self.favorites.clone(),
            feedback: self.feedback.clone(),
            content_vector_dim: self.content_vector.as_ref().map(Vector::len),
            collab_vector_dim: self.collab_vector.as_ref().map(Vector::len),
        }
    }
}
