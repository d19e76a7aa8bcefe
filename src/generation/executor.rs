//! Generation executor: validates and sizes a request, then builds and
//! assembles it on the blocking pool after a short scheduling delay.
//! Status is published on a watch channel; the newest request owns it.

use crate::error::GenerationError;
use crate::generation::plan::{GenerationPlan, GenerationRequest};
use crate::generation::status::{GenerationState, GenerationStatus};
use crate::payload::{BodyBuilder, PayloadAssembler, PayloadResult, VariantBuilder};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Hard ceiling on assembled code points, checked before allocating.
    pub max_payload_chars: u64,
    /// Pause between accepting a request and starting the build, so a
    /// front-end can paint its busy state first.
    pub schedule_delay: Duration,
}

impl GeneratorSettings {
    pub const DEFAULT_MAX_PAYLOAD_CHARS: u64 = 64 * 1024 * 1024;
    pub const DEFAULT_SCHEDULE_DELAY: Duration = Duration::from_millis(500);
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_payload_chars: Self::DEFAULT_MAX_PAYLOAD_CHARS,
            schedule_delay: Self::DEFAULT_SCHEDULE_DELAY,
        }
    }
}

#[derive(Clone)]
struct StatusPublisher {
    tx: Arc<watch::Sender<GenerationStatus>>,
    ticket: u64,
    request: GenerationRequest,
}

impl StatusPublisher {
    fn publish(&self, state: GenerationState, message: impl Into<String>, length: Option<usize>) {
        let next = GenerationStatus {
            ticket: self.ticket,
            state,
            variant: Some(self.request.variant),
            intensity: Some(self.request.intensity),
            message: message.into(),
            length,
        };
        let ticket = self.ticket;
        let published = self.tx.send_if_modified(move |current| {
            if current.ticket > ticket {
                return false;
            }
            *current = next;
            true
        });
        if !published {
            debug!(
                ticket,
                state = state.as_str(),
                "Dropped status from superseded request"
            );
        }
    }
}

/// Runs generation requests and owns the status channel.
///
/// `spawn` and `generate` must be called from within a tokio runtime.
pub struct Generator<B: BodyBuilder = VariantBuilder> {
    builder: Arc<B>,
    settings: GeneratorSettings,
    status: Arc<watch::Sender<GenerationStatus>>,
    last_ticket: AtomicU64,
}

impl Generator<VariantBuilder> {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_builder(settings, VariantBuilder)
    }
}

impl<B: BodyBuilder> Generator<B> {
    pub fn with_builder(settings: GeneratorSettings, builder: B) -> Self {
        let (tx, _rx) = watch::channel(GenerationStatus::idle());
        Self {
            builder: Arc::new(builder),
            settings,
            status: Arc::new(tx),
            last_ticket: AtomicU64::new(0),
        }
    }

    pub fn settings(&self) -> GeneratorSettings {
        self.settings
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationStatus> {
        self.status.subscribe()
    }

    /// Latest published status.
    pub fn status(&self) -> GenerationStatus {
        self.status.borrow().clone()
    }

    /// Validate the request and, if accepted, schedule the build.
    ///
    /// Validation happens before this returns, so a rejected request is
    /// already visible in `status()`. Starting a new request supersedes the
    /// status of any in-flight one; the in-flight build still runs to
    /// completion.
    pub fn spawn(&self, request: GenerationRequest) -> GenerationHandle {
        let ticket = self.last_ticket.fetch_add(1, Ordering::Relaxed) + 1;
        let publisher = StatusPublisher {
            tx: Arc::clone(&self.status),
            ticket,
            request,
        };
        publisher.publish(
            GenerationState::Validating,
            format!(
                "Validating {} at intensity {}",
                request.variant, request.intensity
            ),
            None,
        );

        let task = match self.plan(&request) {
            Ok(plan) => {
                debug!(
                    ticket,
                    variant = %plan.variant,
                    intensity = plan.intensity.get(),
                    chars = plan.assembled.chars,
                    bytes = plan.assembled.bytes,
                    "Generation scheduled"
                );
                publisher.publish(
                    GenerationState::Building,
                    format!(
                        "Building {} x{} ({} characters)",
                        plan.variant, plan.intensity, plan.assembled.chars
                    ),
                    None,
                );
                let builder = Arc::clone(&self.builder);
                let delay = self.settings.schedule_delay;
                tokio::spawn(run(plan, builder, delay, publisher))
            }
            Err(err) => {
                warn!(
                    ticket,
                    variant = %request.variant,
                    intensity = request.intensity,
                    error = %err,
                    "Generation request rejected"
                );
                publisher.publish(GenerationState::Rejected, err.to_string(), None);
                tokio::spawn(async move { Err::<PayloadResult, _>(err) })
            }
        };

        GenerationHandle {
            ticket,
            status: self.status.subscribe(),
            task,
        }
    }

    /// Run a request to completion.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<PayloadResult, GenerationError> {
        self.spawn(request).join().await
    }

    fn plan(&self, request: &GenerationRequest) -> Result<GenerationPlan, GenerationError> {
        let plan = GenerationPlan::for_request(request, self.settings.max_payload_chars)?;
        plan.check_limit()?;
        Ok(plan)
    }
}

async fn run<B: BodyBuilder>(
    plan: GenerationPlan,
    builder: Arc<B>,
    delay: Duration,
    publisher: StatusPublisher,
) -> Result<PayloadResult, GenerationError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let ticket = publisher.ticket;
    let worker = publisher.clone();
    let joined = tokio::task::spawn_blocking(move || -> Result<PayloadResult, GenerationError> {
        let mut assembler =
            PayloadAssembler::begin(plan.variant, plan.intensity, plan.body.bytes)?;
        assembler.append_body(builder.as_ref())?;
        worker.publish(GenerationState::Assembling, "Wrapping payload", None);
        Ok(assembler.finish())
    })
    .await;
    let outcome = joined.unwrap_or_else(|e| Err(join_error(e)));

    match &outcome {
        Ok(payload) => {
            info!(
                ticket,
                variant = %plan.variant,
                intensity = plan.intensity.get(),
                length = payload.length(),
                "Payload generated"
            );
            publisher.publish(
                GenerationState::Done,
                format!("Generated {} characters", payload.length()),
                Some(payload.length()),
            );
        }
        Err(err) => {
            error!(
                ticket,
                variant = %plan.variant,
                intensity = plan.intensity.get(),
                error = %err,
                "Payload generation failed"
            );
            publisher.publish(GenerationState::Failed, err.to_string(), None);
        }
    }
    outcome
}

fn join_error(err: JoinError) -> GenerationError {
    if err.is_panic() {
        GenerationError::Internal("generation task panicked".to_string())
    } else {
        GenerationError::Internal(format!("generation task did not complete: {}", err))
    }
}

/// A scheduled request. Dropping the handle does not cancel the build.
pub struct GenerationHandle {
    ticket: u64,
    status: watch::Receiver<GenerationStatus>,
    task: JoinHandle<Result<PayloadResult, GenerationError>>,
}

impl GenerationHandle {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn status(&self) -> watch::Receiver<GenerationStatus> {
        self.status.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn join(self) -> Result<PayloadResult, GenerationError> {
        self.task.await.unwrap_or_else(|e| Err(join_error(e)))
    }
}
