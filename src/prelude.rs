//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::collaborative::{CollaborativeFilter, Interaction};
pub use crate::content::ContentModel;
pub use crate::error::{Result, SugerirError};
pub use crate::feature::FeatureStore;
pub use crate::hybrid::HybridRecommender;
pub use crate::metrics::{accuracy, precision_at_k, recall_at_k, rmse};
pub use crate::primitives::{Matrix, Vector};
pub use crate::user::{ProfileSummary, UserProfile};
pub use crate::{Feedback, ItemId, UserId};
