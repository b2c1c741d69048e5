use super::*;

#[test]
fn test_identical_sets() {
    assert_eq!(jaccard(["a", "b", "c"], ["a", "b", "c"]), 1.0);
    assert_eq!(jaccard(["user", "Count"], ["user", "Count"]), 1.0);
}

#[test]
fn test_empty_sets() {
    assert_eq!(jaccard::<&str, _, _>([], []), 0.0);
    assert_eq!(jaccard(["a"], []), 0.0);
}

#[test]
fn test_partial_overlap() {
    assert!((jaccard(["a", "b"], ["a", "c"]) - 1.0 / 3.0).abs() < 1e-12);
    assert!((jaccard(["x", "ml", "Form", "Template"], ["xml", "Form", "Template"]) - 0.4).abs() < 1e-12);
}

#[test]
fn test_duplicates_are_ignored() {
    assert_eq!(jaccard(["a", "a", "b"], ["b", "a"]), 1.0);
}
