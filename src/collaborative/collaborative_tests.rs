pub(crate) use super::*;

fn two_user_interactions() -> Vec<Interaction> {
    vec![
        Interaction::new(1, 10, 5.0),
        Interaction::new(1, 20, 1.0),
        Interaction::new(2, 10, 1.0),
        Interaction::new(2, 30, 5.0),
    ]
}

fn fitted(n_factors: usize) -> CollaborativeFilter {
    let mut model = CollaborativeFilter::new(n_factors);
    model
        .fit(&two_user_interactions())
        .expect("non-empty finite interactions");
    model
}

#[test]
fn test_fit_factor_shapes_match_distinct_counts() {
    let model = fitted(2);
    assert_eq!(model.n_users(), 2);
    assert_eq!(model.n_items(), 3);
    assert_eq!(model.known_items(), &[10, 20, 30]);

    let user_vec = model.user_factor(1).expect("user 1 was in training data");
    assert_eq!(user_vec.len(), 2);
}

#[test]
fn test_fit_empty_interactions_is_error() {
    let mut model = CollaborativeFilter::default();
    let err = model.fit(&[]).unwrap_err();
    assert!(err.to_string().contains("empty input"));
}

#[test]
fn test_fit_zero_factors_is_error() {
    let mut model = CollaborativeFilter::new(0);
    let err = model.fit(&two_user_interactions()).unwrap_err();
    assert!(err.to_string().contains("n_factors"));
}

#[test]
fn test_fit_non_finite_rating_is_error() {
    let mut model = CollaborativeFilter::default();
    let bad = vec![Interaction::new(1, 10, f32::NAN)];
    assert!(model.fit(&bad).is_err());
}

#[test]
fn test_fit_rank_capped_by_matrix_dimensions() {
    // 2 users x 3 items caps rank at 2 even when 30 factors are asked for.
    let model = fitted(30);
    let user_vec = model.user_factor(1).expect("user 1 was in training data");
    assert_eq!(user_vec.len(), 2);
}

#[test]
fn test_predict_matches_factor_dot_product() {
    let mut model = fitted(2);
    let user_vec = model.user_factor(1).expect("user 1 was in training data");
    let item_vec = model.item_factor(10).expect("item 10 was in training data");
    let by_hand = user_vec.dot(&item_vec);

    let predicted = model.predict(1, 10).expect("model is fitted");
    assert!((predicted - by_hand).abs() < 1e-9);
}

#[test]
fn test_rank_one_reconstruction_oracle() {
    // Ratings matrix [[5,1,0],[1,0,5]]; its rank-1 approximation is
    // [[3.0, 0.5, 2.5], [3.0, 0.5, 2.5]] (top singular value ~5.5678).
    let mut model = CollaborativeFilter::new(1);
    model
        .fit(&two_user_interactions())
        .expect("non-empty finite interactions");

    let p_1_30 = model.predict(1, 30).expect("model is fitted");
    let p_2_20 = model.predict(2, 20).expect("model is fitted");
    assert!((p_1_30 - 2.5).abs() < 1e-3, "predict(1,30) = {p_1_30}");
    assert!((p_2_20 - 0.5).abs() < 1e-3, "predict(2,20) = {p_2_20}");
}

#[test]
fn test_predict_unknown_item_is_zero() {
    let mut model = fitted(2);
    let score = model.predict(1, 999).expect("model is fitted");
    assert_eq!(score, 0.0);
    // no growth on the item side
    assert_eq!(model.n_items(), 3);
}

#[test]
fn test_predict_cold_start_user_grows_once_and_is_reused() {
    let mut model = fitted(2);
    assert_eq!(model.n_users(), 2);

    let score = model.predict(77, 10).expect("cold start is not an error");
    assert_eq!(score, 0.0);
    assert_eq!(model.n_users(), 3);

    // the appended row is reused, not re-appended
    let _ = model.predict(77, 20).expect("model is fitted");
    let _ = model.predict(77, 30).expect("model is fitted");
    assert_eq!(model.n_users(), 3);
}

#[test]
fn test_cold_start_row_reflects_later_updates() {
    let mut model = fitted(2);
    let _ = model.predict(77, 10).expect("cold start is not an error");

    model
        .update_user_vector(77, 10, Feedback::Like)
        .expect("model is fitted");
    let after = model.predict(77, 10).expect("model is fitted");
    assert!(after > 0.0, "zero row should have moved toward the like");
    assert_eq!(model.n_users(), 3);
}

#[test]
fn test_predict_before_fit_is_error() {
    let mut model = CollaborativeFilter::default();
    assert!(model.predict(1, 10).is_err());
    assert!(model.recommend(1, 5).is_err());
    assert!(model.update_user_vector(1, 10, Feedback::Like).is_err());
}

#[test]
fn test_recommend_orders_by_score_descending() {
    let mut model = fitted(2);
    // rank-2 factorization reconstructs user 1's row [5, 1, 0] exactly
    let recs = model.recommend(1, 3).expect("model is fitted");
    assert_eq!(recs, vec![10, 20, 30]);
}

#[test]
fn test_recommend_ties_break_by_item_id_ascending() {
    let mut model = fitted(2);
    // a cold user has an all-zero row, so every item scores 0.0
    let recs = model.recommend(404, 3).expect("cold start is not an error");
    assert_eq!(recs, vec![10, 20, 30]);
}

#[test]
fn test_recommend_caps_at_top_n() {
    let mut model = fitted(2);
    let recs = model.recommend(1, 2).expect("model is fitted");
    assert_eq!(recs.len(), 2);
}

#[test]
fn test_update_user_vector_reduces_prediction_error() {
    let mut model = fitted(2);

    // user 1 never rated item 30 (prediction 0); push a like and watch
    // the error against the target 1.0 shrink
    let before = model.predict(1, 30).expect("model is fitted");
    let err_before = (Feedback::Like.value() - before).abs();

    model
        .update_user_vector(1, 30, Feedback::Like)
        .expect("model is fitted");

    let after = model.predict(1, 30).expect("model is fitted");
    let err_after = (Feedback::Like.value() - after).abs();
    assert!(
        err_after < err_before,
        "one SGD step must reduce |feedback - prediction|: {err_before} -> {err_after}"
    );
}

#[test]
fn test_update_user_vector_dislike_target_is_zero() {
    let mut model = fitted(2);

    let before = model.predict(1, 10).expect("model is fitted");
    let err_before = (Feedback::Dislike.value() - before).abs();

    model
        .update_user_vector(1, 10, Feedback::Dislike)
        .expect("model is fitted");

    let after = model.predict(1, 10).expect("model is fitted");
    let err_after = (Feedback::Dislike.value() - after).abs();
    assert!(err_after < err_before);
}

#[test]
fn test_update_user_vector_unknown_item_is_noop() {
    let mut model = fitted(2);
    let before = model.user_factor(1).expect("user 1 was in training data");
    model
        .update_user_vector(1, 999, Feedback::Like)
        .expect("unknown item is a silent no-op");
    let after = model.user_factor(1).expect("user 1 was in training data");
    assert_eq!(before, after);
}

#[test]
fn test_refit_replaces_cold_start_state() {
    let mut model = fitted(2);
    let _ = model.predict(77, 10).expect("cold start is not an error");
    assert_eq!(model.n_users(), 3);

    model
        .fit(&two_user_interactions())
        .expect("non-empty finite interactions");
    assert_eq!(model.n_users(), 2);
    assert!(model.user_factor(77).is_none());
}

#[test]
fn test_duplicate_pairs_last_write_wins() {
    let interactions = vec![
        Interaction::new(1, 10, 1.0),
        Interaction::new(2, 20, 1.0),
        Interaction::new(1, 10, 5.0),
    ];
    let mut model = CollaborativeFilter::new(1);
    model.fit(&interactions).expect("non-empty finite interactions");
    // with the 5.0 overwrite, (1,10) dominates the top component
    let p = model.predict(1, 10).expect("model is fitted");
    assert!((p - 5.0).abs() < 1e-3);
}
