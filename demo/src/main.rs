//! keyed-codec-demo
//!
//! Encodes one Employee through both representations and prints the JSON.

use anyhow::Result;
use keyed_codec::employee::{Employee, EmployeeRecord};
use keyed_codec::pipeline::{encode_records, ApiConfig};
use keyed_codec::codec::Keyed;
use tracing::{error, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keyed_codec=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Reference records
    let records = vec![EmployeeRecord::new("John Snow")];

    // Value copies of the same data
    let employees: Vec<Employee> = records.iter().map(Employee::from).collect();

    let config = ApiConfig::default();

    print_encoded(&records, &config);
    print_encoded(&employees, &config);

    Ok(())
}

/// Encode and print; a failure is logged and skipped.
fn print_encoded<T: Keyed + Sync>(values: &[T], config: &ApiConfig) {
    match encode_records(values, config) {
        Ok(out) => {
            info!(
                elapsed = ?out.telemetry.elapsed,
                bytes = out.telemetry.counters.bytes_written,
                "encoded {}",
                T::registry().type_name()
            );
            println!("{}", String::from_utf8_lossy(&out.output));
        }
        Err(e) => error!(error = %e, "encoding {} failed", T::registry().type_name()),
    }
}
