//! Generator behaviour through the public API: rejection before building,
//! status transitions, and supersession.

use rendstress::generation::{GenerationState, GenerationStatus};
use rendstress::payload::{BodyBuilder, Intensity, Variant, VariantBuilder};
use rendstress::{GenerationError, GenerationRequest, Generator, GeneratorSettings};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

fn immediate() -> GeneratorSettings {
    GeneratorSettings {
        schedule_delay: Duration::ZERO,
        ..GeneratorSettings::default()
    }
}

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<AtomicUsize>,
}

impl BodyBuilder for Recorder {
    fn build_into(
        &self,
        variant: Variant,
        intensity: Intensity,
        out: &mut String,
    ) -> Result<(), GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        VariantBuilder.build_into(variant, intensity, out)
    }
}

#[tokio::test]
async fn out_of_range_requests_never_reach_the_builder() {
    let recorder = Recorder::default();
    let generator = Generator::with_builder(immediate(), recorder.clone());

    for (variant, value) in [
        (Variant::InvisibleFlood, 9),
        (Variant::VortexChaos, 0),
        (Variant::DiacriticHell, -1),
        (Variant::UltimateDoomsday, 2_500_001),
    ] {
        let err = generator
            .generate(GenerationRequest::new(variant, value))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::OutOfRange { .. }));
        assert_eq!(generator.status().state, GenerationState::Rejected);
    }
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn ceiling_rejects_before_building() {
    let recorder = Recorder::default();
    let settings = GeneratorSettings {
        max_payload_chars: 10_000,
        ..immediate()
    };
    let generator = Generator::with_builder(settings, recorder.clone());

    let err = generator
        .generate(GenerationRequest::new(Variant::UltimateDoomsday, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::PayloadTooLarge { limit: 10_000, .. }));
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_run_ends_done_with_length() {
    let generator = Generator::new(immediate());
    let mut rx = generator.subscribe();
    assert_eq!(*rx.borrow_and_update(), GenerationStatus::idle());

    let result = generator
        .generate(GenerationRequest::new(Variant::DiacriticHell, 10))
        .await
        .unwrap();

    let status = generator.status();
    assert_eq!(status.state, GenerationState::Done);
    assert_eq!(status.length, Some(result.length()));
    assert_eq!(status.variant, Some(Variant::DiacriticHell));
    assert!(rx.has_changed().unwrap());
}

#[tokio::test]
async fn later_request_owns_the_status() {
    let slow = GeneratorSettings {
        schedule_delay: Duration::from_millis(200),
        ..GeneratorSettings::default()
    };
    let generator = Generator::new(slow);

    let first = generator.spawn(GenerationRequest::new(Variant::VortexChaos, 10));
    let second = generator.spawn(GenerationRequest::new(Variant::InvisibleFlood, 5));
    assert!(second.ticket() > first.ticket());
    assert_eq!(generator.status().state, GenerationState::Rejected);

    let first_result = first.join().await.unwrap();
    assert_eq!(first_result.variant(), Variant::VortexChaos);

    // The first build finished after the second request, but its Done is dropped.
    let status = generator.status();
    assert_eq!(status.ticket, second.ticket());
    assert_eq!(status.state, GenerationState::Rejected);
    assert!(second.join().await.is_err());
}

#[tokio::test]
async fn identical_requests_yield_identical_payloads() {
    let generator = Generator::new(immediate());
    let request = GenerationRequest::new(Variant::UltimateDoomsday, 10);
    let a = generator.generate(request).await.unwrap();
    let b = generator.generate(request).await.unwrap();
    assert_eq!(a.assembled(), b.assembled());
}

/// Signals when the build starts, then holds it until released.
struct GatedBuilder {
    entered: Mutex<Option<oneshot::Sender<()>>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl BodyBuilder for GatedBuilder {
    fn build_into(
        &self,
        variant: Variant,
        intensity: Intensity,
        out: &mut String,
    ) -> Result<(), GenerationError> {
        if let Some(entered) = self.entered.lock().unwrap().take() {
            let _ = entered.send(());
        }
        self.release
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(10))
            .map_err(|e| GenerationError::Internal(e.to_string()))?;
        VariantBuilder.build_into(variant, intensity, out)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn states_advance_building_assembling_done() {
    let (entered_tx, entered_rx) = oneshot::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let builder = GatedBuilder {
        entered: Mutex::new(Some(entered_tx)),
        release: Mutex::new(release_rx),
    };
    let generator = Generator::with_builder(immediate(), builder);
    let mut rx = generator.subscribe();

    let handle = generator.spawn(GenerationRequest::new(Variant::VortexChaos, 10));
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().state, GenerationState::Building);

    entered_rx.await.unwrap();
    assert_eq!(generator.status().state, GenerationState::Building);
    assert!(!rx.has_changed().unwrap());

    release_tx.send(()).unwrap();

    // Done is published by a task on this runtime thread, so blocking here
    // lets the blocking pool publish Assembling and nothing after it.
    let deadline = Instant::now() + Duration::from_secs(10);
    while generator.status().state == GenerationState::Building {
        assert!(Instant::now() < deadline, "build never reached assembly");
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().state, GenerationState::Assembling);

    let result = handle.join().await.unwrap();
    rx.changed().await.unwrap();
    let done = rx.borrow_and_update().clone();
    assert_eq!(done.state, GenerationState::Done);
    assert_eq!(done.length, Some(result.length()));
}
