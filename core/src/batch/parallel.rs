//! batch/parallel.rs
//! Worker-pool variant of the batch driver.
//!
//! Design notes:
//! - Reader (dispatch) on the calling thread, N workers in a thread scope,
//!   results gathered and reassembled by index after the scope joins.
//! - Output order and error reporting match the sequential driver exactly:
//!   the lowest failing index wins, whatever order workers finish in.
//! - Once a failure at index `i` is known, jobs above `i` are skipped; jobs
//!   below it still run since one of them may fail first.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam::channel::{bounded, unbounded};
use tracing::{debug, warn};

use crate::batch::driver::{decode_all, encode_all};
use crate::batch::types::{BatchError, ParallelismProfile};
use crate::codec::{decode, encode, CodecConfig, DecodeError, Keyed};
use crate::constants::MIN_PARALLEL_BATCH;
use crate::document::SerializedDocument;

pub fn encode_all_parallel<T: Keyed + Sync>(
    values: &[T],
    config: &CodecConfig,
    profile: &ParallelismProfile,
) -> Vec<SerializedDocument> {
    if profile.is_sequential() || values.len() < MIN_PARALLEL_BATCH {
        return encode_all(values, config);
    }
    match run_ordered(values, profile, |v| Ok::<_, Infallible>(encode(v, config))) {
        Ok(docs) => docs,
        Err((_, never)) => match never {},
    }
}

pub fn decode_all_parallel<T: Keyed + Send>(
    docs: &[SerializedDocument],
    config: &CodecConfig,
    profile: &ParallelismProfile,
) -> Result<Vec<T>, BatchError> {
    if profile.is_sequential() || docs.len() < MIN_PARALLEL_BATCH {
        return decode_all(docs, config);
    }
    run_ordered(docs, profile, |doc| decode::<T>(doc, config)).map_err(|(index, source): (usize, DecodeError)| {
        warn!(index, error = %source, "parallel batch decode failed");
        BatchError { index, source }
    })
}

/// Run `work` over `items` on a worker pool, returning outputs in input order
/// or the error at the lowest failing index.
fn run_ordered<I, O, E, F>(items: &[I], profile: &ParallelismProfile, work: F) -> Result<Vec<O>, (usize, E)>
where
    I: Sync,
    O: Send,
    E: Send,
    F: Fn(&I) -> Result<O, E> + Sync,
{
    let workers = profile.worker_count.min(items.len()).max(1);
    debug!(items = items.len(), workers, inflight = profile.inflight, "parallel batch start");

    let (job_tx, job_rx) = bounded::<usize>(profile.inflight.max(1));
    let (out_tx, out_rx) = unbounded::<(usize, Result<O, E>)>();
    let first_failure = AtomicUsize::new(usize::MAX);

    std::thread::scope(|scope| {
        // ---- Workers ----
        for _ in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            let work = &work;
            let first_failure = &first_failure;
            scope.spawn(move || {
                for index in rx.iter() {
                    if index > first_failure.load(Ordering::Acquire) {
                        continue;
                    }
                    let result = work(&items[index]);
                    if result.is_err() {
                        first_failure.fetch_min(index, Ordering::AcqRel);
                    }
                    if tx.send((index, result)).is_err() {
                        return;
                    }
                }
            });
        }
        drop(job_rx);
        drop(out_tx);

        // ---- Dispatch ----
        for index in 0..items.len() {
            if index > first_failure.load(Ordering::Acquire) {
                break;
            }
            if job_tx.send(index).is_err() {
                break;
            }
        }
        drop(job_tx); // close input so workers drain and exit
    });

    // ---- Ordered reassembly ----
    let mut slots: Vec<Option<O>> = (0..items.len()).map(|_| None).collect();
    let mut failure: Option<(usize, E)> = None;
    for (index, result) in out_rx.iter() {
        match result {
            Ok(out) => slots[index] = Some(out),
            Err(e) => {
                if failure.as_ref().map_or(true, |(seen, _)| index < *seen) {
                    failure = Some((index, e));
                }
            }
        }
    }

    if let Some(f) = failure {
        return Err(f);
    }
    let outputs: Vec<O> = slots.into_iter().flatten().collect();
    debug_assert_eq!(outputs.len(), items.len(), "every job must produce a result");
    Ok(outputs)
}
