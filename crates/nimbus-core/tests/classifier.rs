//! End-to-end training and classification behavior.

use nimbus_core::prelude::*;
use std::collections::BTreeMap;

fn streams(classes: &[(ClassLabel, &[&[f64]])]) -> BTreeMap<ClassLabel, Vec<Vec<f64>>> {
    classes
        .iter()
        .map(|(label, samples)| (*label, samples.iter().map(|s| s.to_vec()).collect()))
        .collect()
}

#[test]
fn two_class_end_to_end() {
    let classifier = CloudClassifier::new(CloudConfig::default());
    let model = classifier
        .train(&streams(&[
            (1, &[&[1.0, 0.0], &[0.99, 0.14]]),
            (2, &[&[0.0, 1.0], &[-0.01, 0.9999]]),
        ]))
        .unwrap();

    // The second sample of each class merges into the first cloud.
    assert_eq!(model.store(1).unwrap().len(), 1);
    assert_eq!(model.store(2).unwrap().len(), 1);
    assert_eq!(model.store(1).unwrap().get(0).unwrap().support, 2);
    assert_eq!(model.store(2).unwrap().get(0).unwrap().support, 2);

    assert_eq!(model.classify(&[1.0, 0.0]).unwrap(), 1);
    assert_eq!(model.classify(&[0.0, 1.0]).unwrap(), 2);
}

#[test]
fn classify_batch_matches_individual_calls() {
    let classifier = CloudClassifier::new(CloudConfig::default());
    let model = classifier
        .train(&streams(&[
            (1, &[&[1.0, 0.0], &[0.99, 0.14]]),
            (2, &[&[0.0, 1.0], &[-0.01, 0.9999]]),
        ]))
        .unwrap();

    let queries = vec![
        vec![0.8, 0.2],
        vec![0.2, 0.8],
        vec![1.0, 0.1],
        vec![-0.1, 1.0],
    ];
    let batch = model.classify_batch(&queries).unwrap();
    let individual: Vec<ClassLabel> = queries
        .iter()
        .map(|q| model.classify(q).unwrap())
        .collect();
    assert_eq!(batch, individual);
}

#[test]
fn model_survives_json_round_trip() {
    let classifier = CloudClassifier::new(CloudConfig::default());
    let model = classifier
        .train(&streams(&[
            (1, &[&[1.0, 0.0], &[0.99, 0.14]]),
            (2, &[&[0.0, 1.0], &[-0.01, 0.9999]]),
        ]))
        .unwrap();

    let json = serde_json::to_string(&model).unwrap();
    let restored: Model = serde_json::from_str(&json).unwrap();

    // serde_json's float parsing can be an ulp off, so the models are
    // compared field-wise with a tolerance rather than for exact equality.
    let labels: Vec<ClassLabel> = model.labels().collect();
    assert_eq!(restored.labels().collect::<Vec<ClassLabel>>(), labels);
    for &label in &labels {
        let before = model.store(label).unwrap();
        let after = restored.store(label).unwrap();
        assert_eq!(after.len(), before.len());
        for (a, b) in after.iter().zip(before.iter()) {
            assert_eq!(a.support, b.support);
            assert_eq!(a.reference_square_norm, b.reference_square_norm);
            assert!(
                (a.radius - b.radius).abs() < 1e-12,
                "radius drifted: {} vs {}",
                a.radius,
                b.radius
            );
            for (x, y) in a.center.iter().zip(b.center.iter()) {
                assert!((x - y).abs() < 1e-12, "center drifted: {} vs {}", x, y);
            }
        }
    }

    assert_eq!(restored.classify(&[1.0, 0.0]).unwrap(), 1);
    assert_eq!(restored.classify(&[0.0, 1.0]).unwrap(), 2);
}

#[test]
fn supports_sum_to_stream_length() {
    // Every non-spawning sample merges into exactly one cloud, so the
    // supports across all clouds account for the whole stream.
    let classifier = CloudClassifier::new(CloudConfig::default());
    let samples: Vec<&[f64]> = vec![
        &[1.0, 0.0],
        &[0.95, 0.31],
        &[0.0, 1.0],
        &[0.31, 0.95],
        &[-1.0, 0.0],
        &[-0.95, 0.31],
        &[0.98, 0.02],
    ];
    let model = classifier.train(&streams(&[(1, &samples)])).unwrap();
    let total: u64 = model.store(1).unwrap().iter().map(|c| c.support).sum();
    assert_eq!(total, samples.len() as u64);
}

#[test]
fn repeated_identical_samples_degenerate() {
    // Two copies of the same direction drive the global mean to unit norm,
    // which collapses the variance proxy to zero. That is surfaced, not
    // papered over.
    let classifier = CloudClassifier::new(CloudConfig::default());
    let result = classifier.train(&streams(&[(1, &[&[1.0, 0.0], &[2.0, 0.0]])]));
    assert!(
        matches!(result, Err(CloudError::DegenerateStatistics(_))),
        "expected degenerate statistics, got {:?}",
        result
    );
}
