use ols_playground::{metrics, InitMode, PlaygroundConfig, RngSource, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== OLS Playground Session ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => PlaygroundConfig::load(path)?,
        None => PlaygroundConfig::default(),
    };
    let mut session = Session::new(config, RngSource::from_entropy())?;

    if let Some(line) = session.true_line() {
        println!("True line: y = {:.3} + {:.3} x", line.intercept, line.slope);
    }
    println!("Samples ({}):", session.dataset().len());
    for (i, s) in session.dataset().samples().enumerate() {
        println!("  {:>2}: x={:>8.4}, y={:>8.4}", i + 1, s.x, s.y);
    }

    let fit = *session.fit();
    println!("\nOLS: a={:.4}, b={:.4}, SSE min={:.4}", fit.intercept, fit.slope, fit.sse_min);

    // Walk the candidate from (0, 0) towards the OLS line
    for step in 0..=4 {
        let w = step as f64 / 4.0;
        session.set_candidate(w * fit.intercept, w * fit.slope)?;
        let m = session.metrics()?;
        println!(
            "a={:>7.3}, b={:>7.3}  SSE={:>10.4}  MSE={:>8.4}  {}",
            session.candidate().intercept,
            session.candidate().slope,
            m.sse,
            m.mse,
            m.color
        );
    }

    session.set_init_mode(InitMode::Ols);
    session.set_sample_count(50)?;
    println!(
        "\nResampled 50 points on the same line: SSE min={:.4}",
        session.fit().sse_min
    );

    let worst = metrics::residuals(session.dataset(), &session.candidate())
        .fold(0.0f64, |acc, r| acc.max(r.abs()));
    println!("Largest residual at the OLS line: {:.4}", worst);

    session.reset()?;
    if let Some(line) = session.true_line() {
        println!("After reset, true line: y = {:.3} + {:.3} x", line.intercept, line.slope);
    }

    Ok(())
}
