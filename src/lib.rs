//! Sugerir: hybrid movie recommendation engine in pure Rust.
//!
//! Combines content-based filtering (metadata similarity), collaborative
//! filtering (truncated-SVD matrix factorization over user-item ratings),
//! and a hybrid blender that min-max normalizes and linearly combines
//! both score series. New users are cold-started with zero latent rows
//! and refined online through single-pair gradient updates, so rankings
//! stay consistent as feedback arrives between retrains.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! // Item features produced by an external feature-engineering step.
//! let features = Matrix::from_vec(3, 2, vec![
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ]).unwrap();
//! let store = FeatureStore::new(vec![10, 20, 30], features).unwrap();
//! let content = ContentModel::new(store);
//!
//! // Observed ratings.
//! let mut collab = CollaborativeFilter::new(2);
//! collab.fit(&[
//!     Interaction::new(1, 10, 5.0),
//!     Interaction::new(1, 20, 1.0),
//!     Interaction::new(2, 30, 5.0),
//! ]).unwrap();
//!
//! // Blend both models and recommend, skipping the user's favorites.
//! let mut user = UserProfile::new(1);
//! user.add_favorites(&[10]);
//! let taste = user.build_content_vector(&content).unwrap();
//!
//! let mut hybrid = HybridRecommender::new(content, collab, 0.5);
//! let recs = hybrid.recommend(1, &taste, 2, user.favorites()).unwrap();
//! assert!(!recs.contains(&10));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`feature`]: Immutable item feature store
//! - [`content`]: Content-based filtering
//! - [`collaborative`]: Matrix-factorization collaborative filtering
//! - [`hybrid`]: Score blending and top-N selection
//! - [`user`]: Per-session user profiles
//! - [`metrics`]: Ranking and rating evaluation metrics
//! - [`error`]: Error types

#![forbid(unsafe_code)]

pub mod collaborative;
pub mod content;
pub mod error;
pub mod feature;
pub mod hybrid;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod user;

use serde::{Deserialize, Serialize};

/// User identifier.
pub type UserId = u32;

/// Item (movie) identifier.
pub type ItemId = u32;

/// Binary like/dislike feedback label.
///
/// # Examples
///
/// ```
/// use sugerir::Feedback;
///
/// assert_eq!(Feedback::Like.value(), 1.0);
/// assert_eq!(Feedback::Dislike.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Negative signal (target 0.0).
    Dislike,
    /// Positive signal (target 1.0).
    Like,
}

impl Feedback {
    /// Numeric target used by the gradient update rules.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Feedback::Dislike => 0.0,
            Feedback::Like => 1.0,
        }
    }
}
