use super::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("m{i}")).collect()
}

#[test]
fn test_latvian_ranking() {
    let scores = [0.848, 0.804, 0.786, 0.688, 0.759, 0.580];
    let ranked = rank_by_score(&labels(6), &scores).unwrap();
    let ordered = ranked.iter().map(|(_, s)| *s).collect::<Vec<_>>();
    assert_eq!(ordered, vec![0.848, 0.804, 0.786, 0.759, 0.688, 0.580]);
    assert_eq!(ranked[3].0, "m4");
}

#[test]
fn test_ranking_is_stable_for_ties() {
    let scores = [0.5, 0.7, 0.5, 0.7, 0.5];
    let ranked = rank_by_score(&labels(5), &scores).unwrap();
    let models = ranked.iter().map(|(m, _)| m.as_str()).collect::<Vec<_>>();
    assert_eq!(models, vec!["m1", "m3", "m0", "m2", "m4"]);
}

#[test]
fn test_ranked_order_indices() {
    assert_eq!(ranked_order(&[0.1, 0.3, 0.2]), vec![1, 2, 0]);
    assert!(ranked_order(&[]).is_empty());
}

#[test]
fn test_rank_rejects_empty_and_mismatch() {
    assert!(matches!(
        rank_by_score(&[], &[]),
        Err(StatsError::InvalidArgument(_))
    ));
    assert!(rank_by_score(&labels(2), &[0.5]).is_err());
}
