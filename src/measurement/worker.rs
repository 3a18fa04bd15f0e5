//! Background thread performing one measurement run.
//!
//! The worker owns nothing but a shared handle to the probe and the sending
//! half of an unbounded channel. It reports every step as a [`RunEvent`] and
//! always finishes with exactly one terminal event, unless the receiver is
//! gone (the UI closed), in which case sends are silently dropped.
//!
//! Event order for a normal run:
//!
//! ```text
//! Progress("Starting WIFI speed test...")
//! Progress("Running download test...")   DownloadStarted
//! Progress("Running upload test...")     UploadStarted
//! Progress("WIFI speed test completed.") Completed(result)
//! ```

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error};

use super::probe::{ThroughputProbe, reading_value};
use super::{MeasurementResult, RunEvent};

/// Thread name shown in panic messages and debuggers.
pub const WORKER_THREAD_NAME: &str = "speed-test";

/// Start a run on a new thread and return the event stream.
pub fn spawn_run(probe: Arc<dyn ThroughputProbe>) -> io::Result<Receiver<RunEvent>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_owned())
        .spawn(move || run_measurement(probe.as_ref(), &tx))?;
    Ok(rx)
}

/// Perform one run on the current thread, reporting into `tx`.
///
/// A panic inside the probe is caught and reported as
/// `Failed("Error during speed test: <message>")`.
pub fn run_measurement(probe: &dyn ThroughputProbe, tx: &Sender<RunEvent>) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| measure(probe, tx)));

    let terminal = match outcome {
        Ok(result) => {
            send(tx, RunEvent::Progress("WIFI speed test completed.".to_owned()));
            RunEvent::Completed(result)
        }
        Err(payload) => {
            let msg = format!("Error during speed test: {}", panic_message(payload.as_ref()));
            error!("{msg}");
            RunEvent::Failed(msg)
        }
    };
    send(tx, terminal);
}

fn measure(probe: &dyn ThroughputProbe, tx: &Sender<RunEvent>) -> MeasurementResult {
    send(tx, RunEvent::Progress("Starting WIFI speed test...".to_owned()));

    send(tx, RunEvent::Progress("Running download test...".to_owned()));
    send(tx, RunEvent::DownloadStarted);
    let download = probe.measure_download();
    let download_mbps = reading_value(&download);
    debug!("Download done: {download}");

    send(tx, RunEvent::Progress("Running upload test...".to_owned()));
    send(tx, RunEvent::UploadStarted);
    let upload = probe.measure_upload();
    let upload_mbps = reading_value(&upload);
    debug!("Upload done: {upload}");

    MeasurementResult::new(download, upload, download_mbps, upload_mbps)
}

/// Send, ignoring a dropped receiver.
fn send(tx: &Sender<RunEvent>, event: RunEvent) {
    tx.send(event).ok();
}

/// Text of a panic payload (`&str` or `String`, as produced by `panic!`).
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe;

    impl ThroughputProbe for FixedProbe {
        fn measure_download(&self) -> String {
            "Download speed: 87.34 Mbps".to_owned()
        }

        fn measure_upload(&self) -> String {
            "Upload speed: 12.50 Mbps".to_owned()
        }
    }

    struct PanickingProbe;

    impl ThroughputProbe for PanickingProbe {
        fn measure_download(&self) -> String {
            "Download speed: 10.00 Mbps".to_owned()
        }

        fn measure_upload(&self) -> String {
            panic!("socket closed");
        }
    }

    fn collect(probe: &dyn ThroughputProbe) -> Vec<RunEvent> {
        let (tx, rx) = unbounded();
        run_measurement(probe, &tx);
        drop(tx);
        rx.iter().collect()
    }

    #[test]
    fn test_event_order_for_successful_run() {
        let events = collect(&FixedProbe);
        assert_eq!(
            events,
            vec![
                RunEvent::Progress("Starting WIFI speed test...".into()),
                RunEvent::Progress("Running download test...".into()),
                RunEvent::DownloadStarted,
                RunEvent::Progress("Running upload test...".into()),
                RunEvent::UploadStarted,
                RunEvent::Progress("WIFI speed test completed.".into()),
                RunEvent::Completed(MeasurementResult::new(
                    "Download speed: 87.34 Mbps".into(),
                    "Upload speed: 12.50 Mbps".into(),
                    87.34,
                    12.5,
                )),
            ]
        );
    }

    #[test]
    fn test_panic_becomes_failed_event() {
        let events = collect(&PanickingProbe);
        assert_eq!(
            events.last(),
            Some(&RunEvent::Failed("Error during speed test: socket closed".into()))
        );
        assert!(
            !events.iter().any(|e| matches!(e, RunEvent::Completed(_))),
            "A failed run must not report completion"
        );
        assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (tx, rx) = unbounded();
        drop(rx);
        run_measurement(&FixedProbe, &tx);
    }

    #[test]
    fn test_spawned_run_delivers_terminal_event() {
        let rx = spawn_run(Arc::new(FixedProbe)).unwrap();
        let last = rx.iter().last();
        assert!(matches!(last, Some(RunEvent::Completed(_))));
    }

    #[test]
    fn test_panic_message_payloads() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
