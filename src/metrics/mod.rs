//! Evaluation metrics for recommendation quality.
//!
//! Ranking metrics judge the ordered id list a recommender returns;
//! the regression/classification helpers judge predicted ratings and
//! like/dislike labels against held-out truth.

/// Precision@K: fraction of the top-K recommendations that are relevant.
///
/// Returns 0.0 for an empty recommendation list or `k == 0`.
///
/// # Examples
///
/// ```
/// use sugerir::metrics::precision_at_k;
///
/// let recommended = vec![10, 20, 30, 40];
/// let relevant = vec![10, 30, 99];
///
/// assert!((precision_at_k(&recommended, &relevant, 2) - 0.5).abs() < 1e-6);
/// assert!((precision_at_k(&recommended, &relevant, 4) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn precision_at_k<T: PartialEq>(recommended: &[T], relevant: &[T], k: usize) -> f32 {
    if recommended.is_empty() || k == 0 {
        return 0.0;
    }
    let hits = recommended
        .iter()
        .take(k)
        .filter(|item| relevant.contains(item))
        .count();
    hits as f32 / k as f32
}

/// Recall@K: fraction of the relevant items found in the top-K.
///
/// Returns 0.0 when there are no relevant items.
///
/// # Examples
///
/// ```
/// use sugerir::metrics::recall_at_k;
///
/// let recommended = vec![10, 20, 30];
/// let relevant = vec![10, 30];
///
/// assert!((recall_at_k(&recommended, &relevant, 3) - 1.0).abs() < 1e-6);
/// assert!((recall_at_k(&recommended, &relevant, 1) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn recall_at_k<T: PartialEq>(recommended: &[T], relevant: &[T], k: usize) -> f32 {
    if relevant.is_empty() {
        return 0.0;
    }
    let hits = recommended
        .iter()
        .take(k)
        .filter(|item| relevant.contains(item))
        .count();
    hits as f32 / relevant.len() as f32
}

/// Root mean squared error between predicted and actual ratings.
///
/// Returns 0.0 for empty or mismatched-length inputs.
///
/// # Examples
///
/// ```
/// use sugerir::metrics::rmse;
///
/// let predictions = vec![4.0, 2.0];
/// let actuals = vec![5.0, 1.0];
/// assert!((rmse(&predictions, &actuals) - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn rmse(predictions: &[f32], actuals: &[f32]) -> f32 {
    if predictions.is_empty() || predictions.len() != actuals.len() {
        return 0.0;
    }
    let mse: f32 = predictions
        .iter()
        .zip(actuals.iter())
        .map(|(p, a)| (p - a) * (p - a))
        .sum::<f32>()
        / predictions.len() as f32;
    mse.sqrt()
}

/// Classification accuracy over predicted and actual labels.
///
/// Returns 0.0 for empty or mismatched-length inputs.
///
/// # Examples
///
/// ```
/// use sugerir::metrics::accuracy;
/// use sugerir::Feedback;
///
/// let predicted = vec![Feedback::Like, Feedback::Dislike, Feedback::Like];
/// let actual = vec![Feedback::Like, Feedback::Like, Feedback::Like];
/// assert!((accuracy(&predicted, &actual) - 2.0 / 3.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn accuracy<T: PartialEq>(predicted: &[T], actual: &[T]) -> f32 {
    if predicted.is_empty() || predicted.len() != actual.len() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();
    correct as f32 / predicted.len() as f32
}
