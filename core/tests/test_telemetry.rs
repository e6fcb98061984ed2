#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use keyed_codec::telemetry::{CodecCounters, Stage, StageTimes, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> CodecCounters {
        CodecCounters {
            documents_encoded: 10,
            documents_decoded: 0,
            fields_encoded: 30,
            fields_decoded: 0,
            bytes_written: 900,
            bytes_read: 0,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20)); // elapsed > stage times
        timer.add_stage_time(Stage::Encode, Duration::from_millis(5));
        timer.add_stage_time(Stage::Serialize, Duration::from_millis(10));
        timer.finish();
        timer
    }

    #[test]
    fn snapshot_copies_counters_and_stages() {
        let counters = make_counters();
        let snapshot = TelemetrySnapshot::from(&counters, &make_timer());

        assert_eq!(snapshot.counters, counters);
        assert_eq!(snapshot.stage_times.get(Stage::Encode), Duration::from_millis(5));
        assert_eq!(snapshot.total_stage_time(), Duration::from_millis(15));
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn throughput_is_documents_over_elapsed() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        let expected = 10.0 / snapshot.elapsed.as_secs_f64();
        assert!((snapshot.throughput_documents_per_sec - expected).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_frozen_after_finish() {
        let timer = make_timer();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(timer.elapsed(), first);
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Decode, Duration::from_micros(300));
        times.add(Stage::Decode, Duration::from_micros(200));

        assert_eq!(times.get(Stage::Decode), Duration::from_micros(500));
        assert_eq!(times.get(Stage::Parse), Duration::ZERO);
        assert!((times.get_us(Stage::Decode) - 500.0).abs() < 1e-9);
        assert!(times.has_all(&[Stage::Decode]));
        assert!(!times.has_all(&[Stage::Decode, Stage::Parse]));
        assert_eq!(times.iter().count(), 1);
    }

    #[test]
    fn timer_time_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Parse, || {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        assert_eq!(out, 7);
        assert!(timer.stage_times.get(Stage::Parse) >= Duration::from_millis(2));
    }

    #[test]
    fn counters_record_decode_side() {
        let mut c = CodecCounters::default();
        c.add_decoded(4, 3);
        c.add_read(128);

        assert_eq!(c.documents(), 4);
        assert_eq!(c.fields_decoded, 12);
        assert_eq!(c.bytes_read, 128);
        assert_eq!(c.documents_encoded, 0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, snapshot.counters);
        assert_eq!(back.stage_times, snapshot.stage_times);
    }
}
