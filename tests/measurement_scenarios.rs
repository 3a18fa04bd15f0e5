use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, bounded};
use throughput_dashboard::config::{DOWNLOAD_GAUGE, UPLOAD_GAUGE};
use throughput_dashboard::measurement::orchestrator::COMPLETED_LINE;
use throughput_dashboard::{MeasurementPhase, Orchestrator, StartError, ThroughputProbe};

const TIMEOUT: Duration = Duration::from_secs(5);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// A probe that answers immediately with fixed lines.
struct FixedProbe {
    download: &'static str,
    upload: &'static str,
}

impl ThroughputProbe for FixedProbe {
    fn measure_download(&self) -> String {
        self.download.to_owned()
    }

    fn measure_upload(&self) -> String {
        self.upload.to_owned()
    }
}

// A probe whose measurements block until the test opens the matching gate.
struct GatedProbe {
    download_gate: Receiver<()>,
    upload_gate: Receiver<()>,
    download_calls: AtomicUsize,
}

impl GatedProbe {
    fn new() -> (Arc<Self>, Sender<()>, Sender<()>) {
        let (download_tx, download_gate) = bounded(1);
        let (upload_tx, upload_gate) = bounded(1);
        let probe = Arc::new(Self {
            download_gate,
            upload_gate,
            download_calls: AtomicUsize::new(0),
        });
        (probe, download_tx, upload_tx)
    }
}

impl ThroughputProbe for GatedProbe {
    fn measure_download(&self) -> String {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        self.download_gate.recv().ok();
        "Download speed: 250.00 Mbps".to_owned()
    }

    fn measure_upload(&self) -> String {
        self.upload_gate.recv().ok();
        "Upload speed: 40.00 Mbps".to_owned()
    }
}

struct PanickingProbe;

impl ThroughputProbe for PanickingProbe {
    fn measure_download(&self) -> String {
        panic!("network unreachable");
    }

    fn measure_upload(&self) -> String {
        unreachable!()
    }
}

fn orchestrator() -> Orchestrator {
    Orchestrator::new(DOWNLOAD_GAUGE, UPLOAD_GAUGE).unwrap()
}

/// Poll with a fixed timestamp until `done` holds, sleeping between polls so
/// the worker thread can make progress.
fn poll_at_until(orch: &mut Orchestrator, now: Instant, done: impl Fn(&Orchestrator) -> bool) {
    let deadline = Instant::now() + TIMEOUT;
    while !done(orch) {
        assert!(Instant::now() < deadline, "Timed out in phase {:?}", orch.phase());
        orch.poll(now);
        thread::sleep(ms(2));
    }
}

fn run_to_end(orch: &mut Orchestrator, probe: Arc<dyn ThroughputProbe>) {
    let t0 = Instant::now();
    orch.start(probe, t0).unwrap();
    poll_at_until(orch, t0, |o| o.phase().is_terminal());
}

#[test]
fn successful_run_shows_parsed_values() {
    let mut orch = orchestrator();
    run_to_end(
        &mut orch,
        Arc::new(FixedProbe {
            download: "Download speed: 87.34 Mbps",
            upload: "Upload speed: 12.50 Mbps",
        }),
    );

    assert_eq!(orch.phase(), MeasurementPhase::Completed);
    assert_eq!(orch.download_gauge().value(), 87.34);
    assert_eq!(orch.upload_gauge().value(), 12.5);
    assert!(orch.trigger().is_enabled());
    assert_eq!(orch.trigger().label(), "Run Speed Test");

    let lines: Vec<&str> = orch.progress_log().iter().collect();
    assert_eq!(
        lines,
        [
            "Starting WIFI speed test...",
            "Running download test...",
            "Running upload test...",
            "WIFI speed test completed.",
            "Download speed: 87.34 Mbps",
            "Upload speed: 12.50 Mbps",
            COMPLETED_LINE,
        ]
    );
}

#[test]
fn probe_error_defaults_to_zero_and_is_logged() {
    let mut orch = orchestrator();
    run_to_end(
        &mut orch,
        Arc::new(FixedProbe {
            download: "Download error: timeout",
            upload: "Upload speed: 12.50 Mbps",
        }),
    );

    assert_eq!(orch.phase(), MeasurementPhase::Completed, "A probe error still completes the run");
    assert_eq!(orch.download_gauge().value(), 0.0);
    assert_eq!(orch.upload_gauge().value(), 12.5);
    assert!(orch.progress_log().contains("Download error: timeout"));
}

#[test]
fn long_error_text_is_logged_verbatim() {
    const LONG_ERROR: &str = "Download error: <urlopen error [Errno -3] Temporary failure in name resolution \
                              while contacting speedtest server>";
    let mut orch = orchestrator();
    run_to_end(
        &mut orch,
        Arc::new(FixedProbe {
            download: LONG_ERROR,
            upload: "Upload speed: 12.50 Mbps",
        }),
    );

    assert_eq!(orch.download_gauge().value(), 0.0);
    assert!(orch.progress_log().contains(LONG_ERROR), "Error text is cut in the log");
}

#[test]
fn unparseable_number_is_not_reported_separately() {
    let mut orch = orchestrator();
    run_to_end(
        &mut orch,
        Arc::new(FixedProbe {
            download: "Download speed: abc Mbps",
            upload: "Upload speed: 12.50 Mbps",
        }),
    );

    assert_eq!(orch.phase(), MeasurementPhase::Completed);
    assert_eq!(orch.download_gauge().value(), 0.0);
    // Only the raw line shows up; there is no dedicated parse failure line
    assert!(orch.progress_log().contains("Download speed: abc Mbps"));
    assert_eq!(orch.progress_log().len(), 7);
}

#[test]
fn worker_panic_fails_run_and_reenables_trigger() {
    let mut orch = orchestrator();
    run_to_end(&mut orch, Arc::new(PanickingProbe));

    assert_eq!(orch.phase(), MeasurementPhase::Failed);
    assert_eq!(
        orch.progress_log().last(),
        Some("Error during speed test: network unreachable")
    );
    assert!(orch.trigger().is_enabled());
    assert!(orch.animation().is_none());
}

#[test]
fn sequential_run_animates_then_settles() {
    let mut orch = orchestrator();
    let (probe, open_download, open_upload) = GatedProbe::new();
    let t0 = Instant::now();
    orch.start(probe, t0).unwrap();

    // Downloading: 0 -> 50 -> 100
    assert_eq!(orch.phase(), MeasurementPhase::Downloading);
    assert_eq!(orch.download_gauge().value(), 0.0);
    orch.poll(t0 + ms(100));
    assert_eq!(orch.download_gauge().value(), 50.0);
    orch.poll(t0 + ms(200));
    assert_eq!(orch.download_gauge().value(), 100.0);

    // Uploading: download frozen, upload pulses
    open_download.send(()).unwrap();
    poll_at_until(&mut orch, t0 + ms(250), |o| o.phase() == MeasurementPhase::Uploading);
    orch.poll(t0 + ms(350));
    assert_eq!(orch.download_gauge().value(), 100.0, "Download frozen at last animated value");
    assert_eq!(orch.upload_gauge().value(), 30.0);

    // Completed: authoritative values replace the pulse
    open_upload.send(()).unwrap();
    poll_at_until(&mut orch, t0 + ms(400), |o| o.phase().is_terminal());
    assert_eq!(orch.phase(), MeasurementPhase::Completed);
    assert_eq!(orch.download_gauge().value(), 250.0);
    assert_eq!(orch.upload_gauge().value(), 40.0);
    assert_eq!(orch.trigger().label(), "Run Speed Test");
}

#[test]
fn second_start_while_running_spawns_nothing() {
    let mut orch = orchestrator();
    let (probe, open_download, open_upload) = GatedProbe::new();
    let t0 = Instant::now();
    orch.start(probe.clone(), t0).unwrap();
    assert!(!orch.trigger().is_enabled());

    let second = orch.start(probe.clone(), t0 + ms(10));
    assert!(matches!(second, Err(StartError::AlreadyRunning)));

    open_download.send(()).unwrap();
    open_upload.send(()).unwrap();
    poll_at_until(&mut orch, t0 + ms(20), |o| o.phase().is_terminal());
    assert_eq!(probe.download_calls.load(Ordering::SeqCst), 1, "Exactly one run may execute");
}

#[test]
fn retry_after_failure_runs_again() {
    let mut orch = orchestrator();
    run_to_end(&mut orch, Arc::new(PanickingProbe));
    assert_eq!(orch.phase(), MeasurementPhase::Failed);

    run_to_end(
        &mut orch,
        Arc::new(FixedProbe {
            download: "Download speed: 5.00 Mbps",
            upload: "Upload speed: 1.00 Mbps",
        }),
    );
    assert_eq!(orch.phase(), MeasurementPhase::Completed);
    assert_eq!(orch.download_gauge().value(), 5.0);
    assert!(
        !orch.progress_log().contains("Error during speed test: network unreachable"),
        "A new run starts with a cleared console"
    );
}
