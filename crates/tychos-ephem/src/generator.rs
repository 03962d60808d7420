//! Cooperative batch generator.
//!
//! Work is split into ticks of at most `batch_size` steps so a host loop can
//! interleave it with rendering and input. All job state lives in the
//! generator between ticks; nothing is held on the call stack.
//!
//! ```text
//! Idle --submit--> Running --tick*--> Completed --> Idle
//!                     \--cancel--> Cancelled --> Idle
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tychos_sim::SimulationContext;
use tychos_time::pos_to_date_time;

use crate::data::{BodyEphemeris, EphemeridesData, EphemerisRow, Reading};
use crate::error::EphemError;
use crate::request::{EphemeridesRequest, StepPlan};

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_MAX_ROWS: u64 = 500_000;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Result of one [`EphemeridesGenerator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// No job.
    Idle,
    /// Steps remain.
    Running { progress: u8 },
    /// The last step was processed; results are ready.
    Completed,
    /// Cancellation was observed; results were discarded.
    Cancelled,
}

/// In-flight job state.
#[derive(Debug)]
struct EphemeridesJob {
    request: EphemeridesRequest,
    plan: StepPlan,
    current_step: u64,
    results: Vec<BodyEphemeris>,
    gaps: usize,
}

#[derive(Debug)]
pub struct EphemeridesGenerator {
    batch_size: usize,
    max_rows: u64,
    job: Option<EphemeridesJob>,
    progress: u8,
    cancel: CancelToken,
    generated: Option<EphemeridesData>,
}

impl Default for EphemeridesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, DEFAULT_MAX_ROWS)
    }
}

impl EphemeridesGenerator {
    pub fn new(batch_size: usize, max_rows: u64) -> Self {
        Self {
            batch_size: batch_size.max(1),
            max_rows,
            job: None,
            progress: 0,
            cancel: CancelToken::default(),
            generated: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.job.is_some()
    }

    /// Percent complete, 0 to 100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_rows(&self) -> u64 {
        self.max_rows
    }

    /// Handle that can cancel the current job from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cancellation. Takes effect at the next tick.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Validate `request` and start a job.
    ///
    /// Nothing is created when validation fails or the run would exceed the
    /// row ceiling. Previously generated results are dropped on success.
    pub fn submit(&mut self, request: EphemeridesRequest) -> Result<(), EphemError> {
        if self.is_generating() {
            return Err(EphemError::AlreadyGenerating);
        }

        let plan = request.plan()?;
        let bodies = request.bodies.len();
        let rows = plan.instants().saturating_mul(bodies as u64);
        if rows > self.max_rows {
            return Err(EphemError::TooManyRows {
                steps: plan.instants(),
                bodies,
                rows,
                limit: self.max_rows,
            });
        }

        log::info!(
            "Generating ephemerides {} to {}: {} steps x {} bodies = {} rows",
            request.start_date,
            request.end_date,
            plan.instants(),
            bodies,
            rows
        );

        let results = request
            .bodies
            .iter()
            .map(|name| BodyEphemeris {
                name: name.clone(),
                rows: Vec::with_capacity(plan.instants() as usize),
            })
            .collect();

        self.cancel.reset();
        self.progress = 0;
        self.generated = None;
        self.job = Some(EphemeridesJob {
            request,
            plan,
            current_step: 0,
            results,
            gaps: 0,
        });
        Ok(())
    }

    /// Process up to one batch of steps.
    ///
    /// `ctx` is moved through the batch's instants and returned to its
    /// incoming `pos` before this returns. `on_progress` is called only when
    /// the progress percentage increases.
    pub fn tick(
        &mut self,
        ctx: &mut SimulationContext,
        mut on_progress: impl FnMut(u8),
    ) -> TickStatus {
        let Some(job) = self.job.as_mut() else {
            return TickStatus::Idle;
        };

        if self.cancel.is_cancelled() {
            log::info!(
                "Ephemerides cancelled at step {} of {}",
                job.current_step,
                job.plan.instants()
            );
            self.job = None;
            self.progress = 0;
            return TickStatus::Cancelled;
        }

        let snapshot = ctx.snapshot();
        let instants = job.plan.instants();
        let end = job
            .current_step
            .saturating_add(self.batch_size as u64)
            .min(instants);

        for step in job.current_step..end {
            let pos = job.plan.pos_at(step);
            ctx.set_pos(pos);
            let (date, time) = pos_to_date_time(pos);
            let (date, time) = (date.to_string(), time.to_string());

            for body in &mut job.results {
                let reading = match ctx.astrometry(&body.name) {
                    Ok(a) => Reading::Value(a.to_result()),
                    Err(e) => {
                        log::debug!("No reading for {} at {date} {time}: {e}", body.name);
                        job.gaps += 1;
                        Reading::Gap(e.to_string())
                    }
                };
                body.rows.push(EphemerisRow {
                    date: date.clone(),
                    time: time.clone(),
                    pos,
                    reading,
                });
            }

            job.current_step = step + 1;
            let percent = (u128::from(step) * 100 / u128::from(instants)) as u8;
            if percent > self.progress {
                if percent / 10 > self.progress / 10 {
                    log::debug!("Ephemerides {percent}%");
                }
                self.progress = percent;
                on_progress(percent);
            }
        }

        ctx.restore(snapshot);

        if job.current_step < instants {
            return TickStatus::Running {
                progress: self.progress,
            };
        }

        let Some(job) = self.job.take() else {
            return TickStatus::Idle;
        };
        if job.gaps > 0 {
            log::warn!("Ephemerides finished with {} unavailable rows", job.gaps);
        }
        log::info!(
            "Ephemerides complete: {} steps, {} rows",
            instants,
            job.results.iter().map(|b| b.rows.len()).sum::<usize>()
        );
        if self.progress < 100 {
            self.progress = 100;
            on_progress(100);
        }
        self.generated = Some(EphemeridesData {
            request: job.request,
            bodies: job.results,
        });
        TickStatus::Completed
    }

    /// Results of the last completed job.
    pub fn generated(&self) -> Option<&EphemeridesData> {
        self.generated.as_ref()
    }

    pub fn take_generated(&mut self) -> Option<EphemeridesData> {
        self.generated.take()
    }

    /// Rows produced so far by the running job.
    pub fn rows_so_far(&self) -> usize {
        self.job
            .as_ref()
            .map_or(0, |j| j.results.iter().map(|b| b.rows.len()).sum())
    }

    /// Tick until the job finishes or is cancelled.
    pub fn run_to_end(
        &mut self,
        ctx: &mut SimulationContext,
        mut on_progress: impl FnMut(u8),
    ) -> TickStatus {
        loop {
            match self.tick(ctx, &mut on_progress) {
                TickStatus::Running { .. } => {}
                done => return done,
            }
        }
    }
}
