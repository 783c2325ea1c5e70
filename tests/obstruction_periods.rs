use busview_lib::ingest::parse_records;
use busview_lib::report::render_text;
use busview_lib::{
    ObstructionPeriod, ObstructionSegmenter, Record, SegmentationConfig, SegmentationError,
    TrailingPeriodPolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn records_from_speeds(speeds: &[f64]) -> Vec<Record> {
    speeds
        .iter()
        .enumerate()
        .map(|(i, &speed)| Record::new(format!("t{i:04}"), (i % 4) as i64, speed))
        .collect()
}

fn sample_index(timestamp: &str) -> usize {
    timestamp[1..].parse().unwrap()
}

/// Speeds that wander between 0 and 12 with frequent plateaus and full stops.
fn random_speeds(rng: &mut StdRng, len: usize) -> Vec<f64> {
    let mut speed: f64 = 0.0;
    (0..len)
        .map(|_| {
            speed = match rng.gen_range(0..6) {
                0 => 0.0,
                1 | 2 => speed,
                3 => (speed + rng.gen_range(1..4) as f64).min(12.0),
                _ => (speed - rng.gen_range(1..4) as f64).max(0.0),
            };
            speed
        })
        .collect()
}

#[test]
fn csv_log_to_text_report() {
    let log = "\
Frame Time,Class Index,Speed
0.0,0,6
0.5,0,6
1.0,2,3
1.5,2,0
2.0,1,0
2.5,0,4
3.0,0,4
3.5,3,1
";
    let records = parse_records(log.as_bytes()).unwrap();
    let periods = ObstructionSegmenter::default().segment(&records).unwrap();

    // The final slowdown at 3.5 is still open when the log ends.
    assert_eq!(render_text(&periods), "1.0 - 2.5 : 3 :  2 2 1\n");
}

#[test]
fn short_logs_cannot_be_segmented() {
    let segmenter = ObstructionSegmenter::default();
    for len in 0..2 {
        let records = records_from_speeds(&vec![4.0; len]);
        assert_eq!(
            segmenter.segment(&records),
            Err(SegmentationError::InsufficientInput { found: len })
        );
    }
}

#[test]
fn speeding_up_from_rest_never_obstructs() {
    let mut rng = StdRng::seed_from_u64(7);
    let segmenter = ObstructionSegmenter::default();

    for _ in 0..50 {
        let len = rng.gen_range(2..40);
        let mut speeds = vec![0.0, rng.gen_range(1..5) as f64];
        while speeds.len() < len {
            let last = speeds[speeds.len() - 1];
            speeds.push(last + rng.gen_range(0..3) as f64);
        }
        let periods = segmenter.segment(&records_from_speeds(&speeds)).unwrap();
        assert!(periods.is_empty(), "{speeds:?} produced {periods:?}");
    }
}

#[test]
fn periods_are_well_formed_ordered_and_disjoint() {
    let mut rng = StdRng::seed_from_u64(2019);
    let segmenter = ObstructionSegmenter::default();

    for _ in 0..200 {
        let len = rng.gen_range(2..80);
        let records = records_from_speeds(&random_speeds(&mut rng, len));
        let periods = segmenter.segment(&records).unwrap();

        let mut previous_end = 0;
        for period in &periods {
            assert!(period.severity >= 1);
            assert_eq!(period.severity, period.vision_states.len());

            let start = sample_index(&period.start_time);
            let end = sample_index(&period.end_time);
            assert!(start >= previous_end, "overlap in {periods:?}");
            assert_eq!(end - start, period.severity);
            assert_eq!(
                period.vision_states,
                records[start..end]
                    .iter()
                    .map(|r| r.vision_state)
                    .collect::<Vec<_>>()
            );
            previous_end = end;
        }
    }
}

#[test]
fn sealing_trailing_period_only_appends() {
    let mut rng = StdRng::seed_from_u64(42);
    let dropping = ObstructionSegmenter::default();
    let sealing = ObstructionSegmenter::new(SegmentationConfig {
        trailing_period: TrailingPeriodPolicy::SealAtLastSample,
        ..SegmentationConfig::default()
    });
    assert_eq!(
        dropping.config().trailing_period,
        TrailingPeriodPolicy::DropUnterminated
    );

    for _ in 0..200 {
        let len = rng.gen_range(2..60);
        let records = records_from_speeds(&random_speeds(&mut rng, len));
        let dropped = dropping.segment(&records).unwrap();
        let sealed = sealing.segment(&records).unwrap();

        assert!(sealed.len() == dropped.len() || sealed.len() == dropped.len() + 1);
        assert_eq!(&sealed[..dropped.len()], &dropped[..]);
        if let Some(last) = sealed.get(dropped.len()) {
            assert_eq!(last.end_time, records[len - 1].timestamp);
        }
    }
}

#[test]
fn stop_at_end_of_log_is_dropped_by_default() {
    let records = records_from_speeds(&[8.0, 8.0, 4.0, 0.0, 0.0]);
    let segmenter = ObstructionSegmenter::default();
    assert!(segmenter.segment(&records).unwrap().is_empty());

    let sealing = ObstructionSegmenter::new(SegmentationConfig {
        trailing_period: TrailingPeriodPolicy::SealAtLastSample,
        ..SegmentationConfig::default()
    });
    assert_eq!(
        sealing.segment(&records).unwrap(),
        vec![ObstructionPeriod {
            severity: 3,
            start_time: "t0002".to_string(),
            end_time: "t0004".to_string(),
            vision_states: vec![2, 3, 0],
        }]
    );
}

#[test]
fn repeated_calls_give_identical_results() {
    let mut rng = StdRng::seed_from_u64(3);
    let records = records_from_speeds(&random_speeds(&mut rng, 120));
    let segmenter = ObstructionSegmenter::default();
    assert_eq!(
        segmenter.segment(&records).unwrap(),
        segmenter.segment(&records).unwrap()
    );
}
