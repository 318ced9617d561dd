use ols_playground::{
    metrics, ColorScale, Dataset, DatasetGenerator, FixedSequence, InitMode, OlsResult,
    PlaygroundConfig, PlaygroundError, RngSource, Session, TrueLine,
};

#[test]
fn test_full_pipeline() {
    let config = PlaygroundConfig::from_toml_str(
        r#"
        default_sample_count = 12
        default_noise_std = 0.8
        init_mode = "ols"
        "#,
    )
    .unwrap();
    let mut session = Session::new(config, RngSource::seeded(2024)).unwrap();

    assert_eq!(session.dataset().len(), 12);
    assert_eq!(session.candidate(), session.fit().line());
    assert_eq!(session.metrics().unwrap().color.to_string(), "hsl(120, 80%, 45%)");

    let fit = *session.fit();
    session
        .set_candidate(fit.intercept + 2.0, fit.slope - 1.0)
        .unwrap();
    let moved = session.metrics().unwrap();
    assert!(moved.sse > moved.sse_min);
    assert!(moved.color.hue < 120.0);

    let line = session.true_line();
    session.set_sample_count(40).unwrap();
    assert_eq!(session.true_line(), line);
    assert_eq!(session.candidate(), session.fit().line());

    session.set_init_mode(InitMode::Zero);
    session.reset().unwrap();
    assert_ne!(session.true_line(), line);
    assert_eq!(session.dataset().len(), 40);
}

#[test]
fn test_fixed_sequence_sessions_match() {
    let values = vec![0.12, 0.91, 0.37, 0.55, 0.08, 0.64, 0.73];
    let a = Session::new(PlaygroundConfig::default(), FixedSequence::new(values.clone())).unwrap();
    let b = Session::new(PlaygroundConfig::default(), FixedSequence::new(values)).unwrap();

    assert_eq!(a.true_line(), b.true_line());
    assert_eq!(a.dataset(), b.dataset());
    assert_eq!(a.fit(), b.fit());
}

#[test]
fn test_generate_fit_score() {
    let generator = DatasetGenerator::new();
    let mut rng = RngSource::seeded(99);
    let out = generator
        .generate(10, 0.0, Some(TrueLine::new(2.0, 3.0)), &mut rng)
        .unwrap();
    for s in out.dataset.samples() {
        assert_eq!(s.y, 2.0 + 3.0 * s.x);
    }

    let fit = OlsResult::fit(&out.dataset).unwrap();
    assert!((fit.intercept - 2.0).abs() < 1e-10);
    assert!((fit.slope - 3.0).abs() < 1e-10);

    let scale = ColorScale::new();
    let far = metrics::sse(&out.dataset, -10.0, 10.0);
    assert!(scale.hue_for(far, fit.sse_min) < 1.0);
}

#[test]
fn test_empty_dataset_is_undefined() {
    let empty = Dataset::default();
    assert!(matches!(OlsResult::fit(&empty), Err(PlaygroundError::UndefinedEstimate)));
    assert!(matches!(metrics::mse(&empty, 0.0, 0.0), Err(PlaygroundError::UndefinedEstimate)));
}
