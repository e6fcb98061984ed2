mod common;

#[cfg(test)]
mod tests {
    use keyed_codec::batch::{decode_all, decode_all_parallel, encode_all, encode_all_parallel, BatchError, ParallelismProfile};
    use keyed_codec::codec::{encode, CodecConfig, DecodeError};
    use keyed_codec::constants::MAX_WORKERS;
    use keyed_codec::document::{ScalarKind, SerializedDocument};
    use keyed_codec::employee::Employee;
    use keyed_codec::registry::{FieldKey, FieldKind};

    use crate::common::staff;

    fn cfg() -> CodecConfig {
        CodecConfig::default()
    }

    /// Encode `n` employees and corrupt the documents at `bad` indices.
    fn docs_with_failures(n: usize, bad: &[usize]) -> Vec<SerializedDocument> {
        let mut docs = encode_all(&staff(n), &cfg());
        for &i in bad {
            docs[i].remove("name");
        }
        docs
    }

// ## Sequential

    #[test]
    fn encode_all_keeps_input_order() {
        let employees = staff(5);
        let docs = encode_all(&employees, &cfg());

        assert_eq!(docs.len(), 5);
        for (e, d) in employees.iter().zip(&docs) {
            assert_eq!(d, &encode(e, &cfg()));
        }
    }

    #[test]
    fn decode_all_round_trips_in_order() {
        let employees = staff(6);
        let decoded: Vec<Employee> = decode_all(&encode_all(&employees, &cfg()), &cfg()).unwrap();
        assert_eq!(decoded, employees);
    }

    #[test]
    fn empty_batch_is_empty_not_error() {
        assert!(encode_all::<Employee>(&[], &cfg()).is_empty());
        assert!(decode_all::<Employee>(&[], &cfg()).unwrap().is_empty());
    }

    #[test]
    fn decode_all_is_atomic_and_names_failing_index() {
        let mut docs = encode_all(&staff(3), &cfg());
        docs[1].insert("isFullTime", "yes");

        let err = decode_all::<Employee>(&docs, &cfg()).unwrap_err();
        assert_eq!(
            err,
            BatchError {
                index: 1,
                source: DecodeError::TypeMismatch {
                    key: FieldKey::from("isFullTime"),
                    expected: FieldKind::Bool,
                    found: ScalarKind::Text,
                },
            }
        );
        assert_eq!(err.to_string(), "item 1 failed: type mismatch for `isFullTime`: expected bool, found text");
    }

    #[test]
    fn first_of_several_failures_is_reported() {
        let docs = docs_with_failures(8, &[2, 5, 7]);
        let err = decode_all::<Employee>(&docs, &cfg()).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.source, DecodeError::MissingField { key: FieldKey::from("name") });
    }

// ## Parallel

    #[test]
    fn parallel_encode_matches_sequential() {
        let employees = staff(100);
        let profile = ParallelismProfile::fixed(4);
        assert_eq!(encode_all_parallel(&employees, &cfg(), &profile), encode_all(&employees, &cfg()));
    }

    #[test]
    fn parallel_decode_matches_sequential() {
        let employees = staff(100);
        let docs = encode_all(&employees, &cfg());
        let decoded: Vec<Employee> = decode_all_parallel(&docs, &cfg(), &ParallelismProfile::fixed(4)).unwrap();
        assert_eq!(decoded, employees);
    }

    #[test]
    fn parallel_decode_reports_lowest_failing_index() {
        let docs = docs_with_failures(200, &[150, 37, 199, 38]);
        for workers in [2, 3, 8] {
            let err = decode_all_parallel::<Employee>(&docs, &cfg(), &ParallelismProfile::fixed(workers)).unwrap_err();
            assert_eq!(err.index, 37, "workers={workers}");
        }
    }

    #[test]
    fn parallel_decode_failure_at_first_item() {
        let docs = docs_with_failures(50, &[0]);
        let err = decode_all_parallel::<Employee>(&docs, &cfg(), &ParallelismProfile::fixed(4)).unwrap_err();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn parallel_with_tiny_batches() {
        let profile = ParallelismProfile::fixed(8);
        assert!(decode_all_parallel::<Employee>(&[], &cfg(), &profile).unwrap().is_empty());

        let one = staff(1);
        let decoded: Vec<Employee> = decode_all_parallel(&encode_all(&one, &cfg()), &cfg(), &profile).unwrap();
        assert_eq!(decoded, one);
    }

// ## Profile

    #[test]
    fn profile_clamps_worker_count() {
        assert_eq!(ParallelismProfile::fixed(0).worker_count, 1);
        assert!(ParallelismProfile::fixed(0).is_sequential());
        assert_eq!(ParallelismProfile::fixed(10_000).worker_count, MAX_WORKERS);
        assert_eq!(ParallelismProfile::fixed(4).inflight, 16);
    }

    #[test]
    fn dynamic_profile_respects_cap() {
        let p = ParallelismProfile::dynamic(2);
        assert!(p.worker_count >= 1 && p.worker_count <= 2);
        assert_eq!(ParallelismProfile::dynamic(0).worker_count, 1);
        assert_eq!(ParallelismProfile::default(), ParallelismProfile::single_threaded());
    }
}
