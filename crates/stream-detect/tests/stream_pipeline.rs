//! End-to-end pipeline tests: generator -> analyzer -> classified records

use stream_core::DataPoint;
use stream_detect::{AnalyzerConfig, StreamAnalyzer, StreamRecord};
use stream_synth::{IrregularityProfile, StreamGenerator, SynthConfig, TrendKind};

fn quiet_linear_generator() -> StreamGenerator<rand::rngs::StdRng> {
    let config = SynthConfig {
        trend: TrendKind::Linear,
        seasonality_period: 10.0,
        seasonality_amplitude: 0.0,
        noise_level: 0.0,
        ..SynthConfig::default()
    };
    StreamGenerator::seeded(config, IrregularityProfile::quiet(0.0), 1).unwrap()
}

#[test]
fn quiet_linear_stream_classifies_deterministically() {
    let analyzer =
        StreamAnalyzer::new(quiet_linear_generator(), AnalyzerConfig::default()).unwrap();
    let records: Vec<StreamRecord> = analyzer
        .records()
        .take(300)
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(records.len(), 300);
    for (i, record) in records.iter().enumerate() {
        // Structure: gapless indices, values exactly on the trend line
        assert_eq!(record.point.index, i as u64);
        assert_eq!(record.point.value, 0.01 * i as f64);

        // A smooth ramp never puts its newest point three deviations out
        assert!(!record.is_anomaly, "false point anomaly at {i}");

        // The ramp's window mean dominates its dispersion as soon as the
        // pattern window fills at the 50th record
        if i < 49 {
            assert!(!record.is_unusual_pattern, "early pattern flag at {i}");
        } else {
            assert!(record.is_unusual_pattern, "missing pattern flag at {i}");
        }

        // Statistics appear exactly when the point detector activates
        if i < 5 {
            assert_eq!(record.window_mean, None);
            assert_eq!(record.window_std, None);
        } else {
            assert!(record.window_mean.is_some());
            assert!(record.window_std.is_some());
        }
    }
}

#[test]
fn noisy_default_stream_keeps_structure() {
    let generator = StreamGenerator::seeded(
        SynthConfig::default(),
        IrregularityProfile::default(),
        42,
    )
    .unwrap();
    let mut analyzer = StreamAnalyzer::new(generator, AnalyzerConfig::default()).unwrap();

    for expected in 0..500u64 {
        let record = analyzer.advance().unwrap().expect("stream is infinite");
        assert_eq!(record.point.index, expected);
        assert!(analyzer.history().len() <= 200);
    }
    assert_eq!(analyzer.history().len(), 200);
}

#[test]
fn level_shift_raises_point_then_pattern_flags() {
    // Sixty balanced points, then a sustained jump to 10. The very first
    // shifted point is a z-score outlier against the balanced history; the
    // pattern flag needs the whole trailing window to move.
    let mut values: Vec<f64> = (0..60)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    values.extend(std::iter::repeat(10.0).take(60));
    let points = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(i as u64, v))
        .collect::<Vec<_>>()
        .into_iter();

    let records: Vec<StreamRecord> = StreamAnalyzer::new(points, AnalyzerConfig::default())
        .unwrap()
        .records()
        .map(|r| r.unwrap())
        .collect();

    assert!(!records[59].is_anomaly);
    assert!(records[60].is_anomaly, "jump point not flagged");

    // Balanced full windows are not unusual
    for record in &records[49..60] {
        assert!(!record.is_unusual_pattern);
    }
    // Once the trailing window is entirely post-shift (zero dispersion,
    // nonzero mean) the pattern flag must hold
    assert!(records[109].is_unusual_pattern);
}

#[test]
fn generator_plugs_into_analyzer_as_iterator() {
    // The generator is an infinite iterator, so it satisfies the source
    // seam without adapters; stopping is entirely the consumer's call.
    let records: Vec<StreamRecord> =
        StreamAnalyzer::new(quiet_linear_generator(), AnalyzerConfig::default())
            .unwrap()
            .records()
            .take(10)
            .map(|r| r.unwrap())
            .collect();

    assert_eq!(records.len(), 10);
    assert_eq!(records.last().unwrap().point.index, 9);
}
