//! Construction and count tests for the confusion matrix
//!
//! The three-class metrics example is the cat/dog/rabbit matrix from
//! <https://en.wikipedia.org/wiki/Confusion_matrix>.

#[cfg(test)]
mod tests {
    use crate::error::ConfusionError;
    use crate::eval::classification::{ConfusionMatrix, FromLabelsOptions};

    fn wikipedia() -> ConfusionMatrix<&'static str, u32> {
        ConfusionMatrix::new(
            vec![vec![5, 3, 0], vec![2, 3, 1], vec![0, 2, 11]],
            vec!["cat", "dog", "rabbit"],
        )
        .unwrap()
    }

    // =========================================================================
    // Direct construction
    // =========================================================================

    #[test]
    fn test_new_keeps_grid_and_labels() {
        let matrix = vec![vec![2, 0, 0], vec![0, 3, 0], vec![0, 0, 1]];
        let labels = vec![0, 1, 2];
        let matrix_ptr = matrix.as_ptr();
        let labels_ptr = labels.as_ptr();

        let cm = ConfusionMatrix::new(matrix, labels).unwrap();

        // Stored as given, not copied
        assert_eq!(cm.matrix().as_ptr(), matrix_ptr);
        assert_eq!(cm.labels().as_ptr(), labels_ptr);
        assert_eq!(cm.matrix(), &vec![vec![2, 0, 0], vec![0, 3, 0], vec![0, 0, 1]]);
        assert_eq!(cm.labels(), &[0, 1, 2]);
    }

    #[test]
    #[allow(deprecated)]
    fn test_diagonal() {
        let cm = ConfusionMatrix::new(vec![vec![2, 0, 0], vec![0, 3, 0], vec![0, 0, 1]], vec![0, 1, 2])
            .unwrap();

        assert_eq!(cm.accuracy(), 1.0);
        assert_eq!(cm.total(), 6);
        assert_eq!(cm.total_count(), 6);
        assert_eq!(cm.count(&1, &0).unwrap(), 0);
    }

    #[test]
    #[allow(deprecated)]
    fn test_full() {
        let cm = ConfusionMatrix::new(vec![vec![3, 4], vec![1, 7]], vec![0, 1]).unwrap();

        assert_eq!(cm.accuracy(), 10.0 / 15.0);
        assert_eq!(cm.total(), 15);
        assert_eq!(cm.count(&1, &0).unwrap(), 1);
        assert_eq!(cm.count(&0, &1).unwrap(), 4);
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = ConfusionMatrix::new(vec![vec![1]], vec![1, 2]).unwrap_err();

        assert!(matches!(err, ConfusionError::Shape { .. }));
        assert!(err.to_string().contains("matrix and labels must have the same length"));
    }

    #[test]
    fn test_not_square() {
        let err = ConfusionMatrix::<i32, i32>::new(vec![vec![1, 2]], vec![]).unwrap_err();

        assert!(matches!(err, ConfusionError::Shape { .. }));
        assert!(err.to_string().contains("matrix must be square"));
    }

    #[test]
    fn test_ragged_rows_are_not_square() {
        let err = ConfusionMatrix::new(vec![vec![1, 2], vec![3]], vec!["a", "b"]).unwrap_err();
        assert!(err.to_string().contains("matrix must be square"));
    }

    #[test]
    fn test_empty_matrix() {
        let cm: ConfusionMatrix<&str> = ConfusionMatrix::new(vec![], vec![]).unwrap();

        assert!(cm.is_empty());
        assert_eq!(cm.len(), 0);
        assert_eq!(cm.total_count(), 0);
        assert_eq!(cm.true_count(), 0);
    }

    #[test]
    fn test_unknown_label() {
        let cm = ConfusionMatrix::new(vec![vec![3, 4], vec![1, 7]], vec![0, 1]).unwrap();

        let err = cm.count(&7, &8).unwrap_err();
        assert_eq!(err, ConfusionError::UnknownLabel { label: "7".into() });
        assert!(err.to_string().contains("label does not exist"));

        // Predicted side is checked as well
        assert!(cm.count(&0, &8).is_err());
        assert!(cm.index_of(&2).is_err());
        assert!(cm.confusion_table(&2).is_err());
    }

    #[test]
    fn test_string_labels_lookup_by_str() {
        let cm = ConfusionMatrix::new(
            vec![vec![1, 0], vec![0, 1]],
            vec!["yes".to_string(), "no".to_string()],
        )
        .unwrap();

        assert_eq!(cm.index_of("no").unwrap(), 1);
        assert_eq!(cm.count("yes", "yes").unwrap(), 1);
        assert!(matches!(
            cm.index_of("maybe"),
            Err(ConfusionError::UnknownLabel { label }) if label == "\"maybe\""
        ));
    }

    // =========================================================================
    // Counts on the wikipedia example
    // =========================================================================

    #[test]
    fn test_true_and_false_count() {
        let cm = wikipedia();
        assert_eq!(cm.true_count(), 5 + 3 + 11);
        assert_eq!(cm.false_count(), 3 + 2 + 1 + 2);
        assert_eq!(cm.total_count(), 27);
    }

    #[test]
    fn test_positive_and_negative_count() {
        let cm = wikipedia();
        assert_eq!(cm.positive_count("cat").unwrap(), 5 + 3);
        assert_eq!(cm.negative_count("cat").unwrap(), 2 + 3 + 1 + 2 + 11);
    }

    #[test]
    fn test_one_vs_rest_counts() {
        let cm = wikipedia();
        assert_eq!(cm.true_positive_count("cat").unwrap(), 5);
        assert_eq!(cm.true_negative_count("cat").unwrap(), 17);
        assert_eq!(cm.false_positive_count("cat").unwrap(), 2);
        assert_eq!(cm.false_negative_count("cat").unwrap(), 3);

        assert_eq!(cm.true_positive_count("rabbit").unwrap(), 11);
        assert_eq!(cm.false_positive_count("rabbit").unwrap(), 1);
        assert_eq!(cm.false_negative_count("rabbit").unwrap(), 2);
        assert_eq!(cm.true_negative_count("rabbit").unwrap(), 13);
    }

    #[test]
    fn test_confusion_table() {
        let cm = wikipedia();
        assert_eq!(cm.confusion_table("cat").unwrap(), [[5, 3], [2, 17]]);
        assert_eq!(cm.confusion_table("dog").unwrap(), [[3, 3], [5, 16]]);
    }

    #[test]
    fn test_getters_are_idempotent() {
        let cm = wikipedia();
        for label in ["cat", "dog", "rabbit"] {
            assert_eq!(cm.confusion_table(label).unwrap(), cm.confusion_table(label).unwrap());
            assert_eq!(cm.f1_score(label).unwrap(), cm.f1_score(label).unwrap());
        }
        assert_eq!(cm.accuracy(), cm.accuracy());
        assert_eq!(cm, wikipedia());
    }

    #[test]
    fn test_mutation_is_visible_to_queries() {
        let mut cm = wikipedia();
        *cm.count_mut("cat", "dog").unwrap() += 1;
        for row in cm.rows_mut() {
            row[2] += 1;
        }

        assert_eq!(cm.false_negative_count("cat").unwrap(), 5);
        assert_eq!(cm.true_positive_count("rabbit").unwrap(), 12);
        assert_eq!(cm.total_count(), 31);
    }

    #[test]
    fn test_into_parts() {
        let (matrix, labels) = wikipedia().into_parts();
        assert_eq!(matrix[2][2], 11);
        assert_eq!(labels, vec!["cat", "dog", "rabbit"]);
    }

    // =========================================================================
    // from_labels
    // =========================================================================

    #[test]
    fn test_from_labels_identity() {
        let cm = ConfusionMatrix::from_labels_default(&["A", "B", "C"], &["A", "B", "C"]).unwrap();

        assert_eq!(cm.labels(), &["A", "B", "C"]);
        assert_eq!(cm.matrix(), &vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_from_labels_infers_labels_from_both_sides() {
        let cm = ConfusionMatrix::from_labels_default(&["A", "B"], &["B", "C"]).unwrap();

        assert_eq!(cm.labels(), &["A", "B", "C"]);
        assert_eq!(cm.matrix(), &vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn test_from_labels_with_explicit_labels() {
        let options = FromLabelsOptions::new().with_labels(vec!["A", "B", "D"]);
        let cm = ConfusionMatrix::from_labels(&["A", "B", "B"], &["A", "A", "C"], &options).unwrap();

        assert_eq!(cm.labels(), &["A", "B", "D"]);
        assert_eq!(cm.matrix(), &vec![vec![1, 0, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        assert_eq!(cm.total_count(), 2);
        assert!(cm.true_positive_rate("D").unwrap().is_nan());
    }

    #[test]
    fn test_from_labels_dedups_explicit_labels() {
        let options = FromLabelsOptions::new().with_labels(vec!["A", "B", "A"]);
        let cm = ConfusionMatrix::from_labels(&["A", "B"], &["B", "B"], &options).unwrap();

        assert_eq!(cm.labels(), &["A", "B"]);
        assert_eq!(cm.matrix(), &vec![vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn test_from_labels_nan_is_a_single_label() {
        let values = [f64::NAN, f64::NAN, 1.0];
        let cm = ConfusionMatrix::from_labels_default(&values, &values).unwrap();

        assert_eq!(cm.len(), 2);
        assert!(cm.labels()[0].is_nan());
        assert_eq!(cm.labels()[1], 1.0);
        // NaN never equals an observation, so only the 1.0 pair is counted
        assert_eq!(cm.matrix(), &vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_from_labels_dedups_explicit_nan_labels() {
        let options = FromLabelsOptions::new().with_labels(vec![f64::NAN, 2.0, f64::NAN]);
        let cm = ConfusionMatrix::from_labels(&[2.0, f64::NAN], &[2.0, 2.0], &options).unwrap();

        assert_eq!(cm.len(), 2);
        assert!(cm.labels()[0].is_nan());
        assert_eq!(cm.count(&2.0, &2.0).unwrap(), 1);
        assert_eq!(cm.total_count(), 1);
    }

    #[test]
    fn test_from_labels_sorted() {
        let options = FromLabelsOptions::new().with_sort(|a: &i32, b: &i32| a.cmp(b));
        let cm = ConfusionMatrix::from_labels(&[1, 3, 2], &[1, 1, 1], &options).unwrap();

        assert_eq!(cm.labels(), &[1, 2, 3]);
        assert_eq!(cm.matrix(), &vec![vec![1, 0, 0], vec![1, 0, 0], vec![1, 0, 0]]);
    }

    #[test]
    fn test_from_labels_sorted_descending_explicit() {
        let options = FromLabelsOptions::new()
            .with_labels(vec!['a', 'b', 'c'])
            .with_sort(|a: &char, b: &char| b.cmp(a));
        let cm = ConfusionMatrix::from_labels(&['a', 'c'], &['c', 'c'], &options).unwrap();

        assert_eq!(cm.labels(), &['c', 'b', 'a']);
        assert_eq!(cm.count(&'a', &'c').unwrap(), 1);
        assert_eq!(cm.count(&'c', &'c').unwrap(), 1);
        assert_eq!(cm.matrix()[2], vec![1, 0, 0]);
    }

    #[test]
    fn test_from_labels_boolean() {
        let actual = [true, true, false, false, true];
        let predicted = [true, false, false, true, true];
        let cm = ConfusionMatrix::from_labels_default(&actual, &predicted).unwrap();

        assert_eq!(cm.labels(), &[true, false]);
        assert_eq!(cm.confusion_table(&true).unwrap(), [[2, 1], [1, 1]]);
    }

    #[test]
    fn test_from_labels_length_mismatch() {
        let err = ConfusionMatrix::from_labels_default(&["A", "B"], &["A"]).unwrap_err();

        assert_eq!(err, ConfusionError::LengthMismatch { actual: 2, predicted: 1 });
        assert!(err.to_string().contains("actual and predicted must have the same length"));
    }

    #[test]
    fn test_from_labels_empty() {
        let cm = ConfusionMatrix::<u8>::from_labels_default(&[], &[]).unwrap();
        assert!(cm.is_empty());
        assert!(cm.accuracy().is_nan());
    }

    #[test]
    fn test_from_labels_matches_direct_construction() {
        let actual = ["cat", "cat", "cat", "cat", "cat", "cat", "cat", "cat", "dog", "dog", "dog"];
        let predicted = ["cat", "cat", "cat", "cat", "cat", "dog", "dog", "dog", "cat", "cat", "dog"];
        let built = ConfusionMatrix::from_labels_default(&actual, &predicted).unwrap();
        let direct = ConfusionMatrix::new(vec![vec![5usize, 3], vec![2, 1]], vec!["cat", "dog"]).unwrap();

        assert_eq!(built, direct);
    }
}
