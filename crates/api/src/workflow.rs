// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow sessions.
//!
//! A session is the long-lived handle behind one wizard panel. Each time it
//! opens it starts a new generation, fetches a fresh catalog, and builds a
//! fresh wizard state. Every asynchronous request is issued under a ticket
//! carrying the generation it belongs to; results for an older generation
//! are discarded instead of being applied to a state that has since been
//! reset.

use crate::client::Backend;
use crate::error::{GatewayError, WorkflowError};
use crate::gateway::Gateway;
use crate::validation::LoadedCatalog;
use cinema_seasons::{CoreError, Event, Flavor, Mutation, TransitionResult, WizardState, apply};
use cinema_seasons_domain::{Catalog, DomainError};
use serde_json::Value;
use tracing::{error, info, warn};

/// Monotonic tag identifying one activation of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission to deliver one catalog load result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: Generation,
}

impl LoadTicket {
    /// Returns the generation the load was issued under.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }
}

/// Permission to deliver one submission result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: Generation,
    mutation: Mutation,
}

impl SubmitTicket {
    /// Returns the generation the submission was issued under.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns the mutation to send.
    #[must_use]
    pub const fn mutation(&self) -> &Mutation {
        &self.mutation
    }
}

/// Where a session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The panel is closed.
    Closed,
    /// A catalog fetch is outstanding.
    Loading,
    /// The last fetch failed; reopening retries.
    LoadFailed {
        /// Why the fetch failed.
        message: String,
    },
    /// The wizard is running.
    Ready {
        /// The snapshot for this activation.
        catalog: Catalog,
        /// The wizard's current state.
        state: WizardState,
    },
}

/// One wizard panel across open/close cycles.
#[derive(Debug, Clone)]
pub struct WorkflowSession {
    flavor: Flavor,
    generation: Generation,
    phase: Phase,
}

impl WorkflowSession {
    /// Creates a closed session.
    #[must_use]
    pub const fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            generation: Generation(0),
            phase: Phase::Closed,
        }
    }

    /// Returns the wizard flavor.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the loaded catalog, if any.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match &self.phase {
            Phase::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    /// Returns the wizard state, if a catalog is loaded.
    #[must_use]
    pub const fn state(&self) -> Option<&WizardState> {
        match &self.phase {
            Phase::Ready { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Opens the panel, discarding everything from the previous activation.
    ///
    /// The caller must fetch a catalog and hand it to
    /// [`Self::complete_load`] with the returned ticket.
    pub fn open(&mut self) -> LoadTicket {
        self.generation = Generation(self.generation.0 + 1);
        self.phase = Phase::Loading;
        info!(
            "Opened {} workflow, generation {}",
            self.flavor, self.generation
        );
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Closes the panel. Outstanding results become stale.
    pub fn close(&mut self) {
        self.generation = Generation(self.generation.0 + 1);
        self.phase = Phase::Closed;
        info!("Closed {} workflow", self.flavor);
    }

    /// Delivers a catalog fetch result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket belongs to an older generation (the result is ignored)
    /// - The fetch failed (`LoadFailure`; the session stays unloaded)
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedCatalog, GatewayError>,
    ) -> Result<(), WorkflowError> {
        self.check_generation(ticket.generation)?;

        match result {
            Ok(loaded) => {
                let state: WizardState = WizardState::new(self.flavor, &loaded.catalog);
                info!(
                    "Catalog ready for generation {}: {} films",
                    self.generation,
                    loaded.catalog.film_count()
                );
                self.phase = Phase::Ready {
                    catalog: loaded.catalog,
                    state,
                };
                Ok(())
            }
            Err(err) => {
                warn!("Catalog load failed: {}", err);
                self.phase = Phase::LoadFailed {
                    message: err.to_string(),
                };
                Err(WorkflowError::LoadFailure(err))
            }
        }
    }

    /// Applies a user event to the running wizard.
    ///
    /// Returns a ticket when the event confirmed the wizard; the caller must
    /// send its mutation and deliver the outcome to
    /// [`Self::complete_submit`].
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog is loaded or the wizard rejects the
    /// event. A rejected event leaves the state unchanged.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<SubmitTicket>, WorkflowError> {
        let Phase::Ready { catalog, state } = &mut self.phase else {
            return Err(WorkflowError::NotReady);
        };

        let result: TransitionResult = apply(catalog, state, event).map_err(|err| {
            if let CoreError::DomainViolation(DomainError::InvariantViolation { .. }) = &err {
                error!("Assignment invariant broken: {}", err);
            }
            WorkflowError::Core(err)
        })?;

        *state = result.new_state;
        Ok(result.outbound.map(|mutation| SubmitTicket {
            generation: self.generation,
            mutation,
        }))
    }

    /// Delivers a submission result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket belongs to an older generation (the result is ignored)
    /// - The backend rejected the submission (`SubmissionFailure`; the
    ///   wizard keeps its selections for a retry)
    pub fn complete_submit(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<Value, GatewayError>,
    ) -> Result<(), WorkflowError> {
        self.check_generation(ticket.generation)?;

        match result {
            Ok(_) => {
                self.dispatch(Event::SubmissionSucceeded)?;
                info!(
                    "Submission acknowledged for generation {}",
                    self.generation
                );
                Ok(())
            }
            Err(err) => {
                warn!("Submission failed: {}", err);
                self.dispatch(Event::SubmissionFailed {
                    message: err.to_string(),
                })?;
                Err(WorkflowError::SubmissionFailure(err))
            }
        }
    }

    fn check_generation(&self, ticket: Generation) -> Result<(), WorkflowError> {
        if ticket != self.generation {
            warn!(
                "Discarding result for generation {}; session is at {}",
                ticket, self.generation
            );
            return Err(WorkflowError::StaleResult {
                ticket: ticket.value(),
                current: self.generation.value(),
            });
        }
        Ok(())
    }
}

/// Opens a session and loads its catalog through the gateway.
///
/// # Errors
///
/// Returns `WorkflowError::LoadFailure` if the catalog could not be fetched.
pub async fn open_and_load<B: Backend>(
    session: &mut WorkflowSession,
    gateway: &Gateway<B>,
) -> Result<(), WorkflowError> {
    let ticket: LoadTicket = session.open();
    let result: Result<LoadedCatalog, GatewayError> = gateway.fetch_catalog().await;
    session.complete_load(ticket, result)
}

/// Confirms the wizard at its review step and submits the mutation.
///
/// # Errors
///
/// Returns an error if the wizard cannot be confirmed or the backend
/// rejects the submission.
pub async fn confirm_and_submit<B: Backend>(
    session: &mut WorkflowSession,
    gateway: &Gateway<B>,
) -> Result<Mutation, WorkflowError> {
    let ticket: SubmitTicket = session
        .dispatch(Event::Confirm)?
        .ok_or(WorkflowError::NotReady)?;
    let result: Result<Value, GatewayError> = gateway.submit(ticket.mutation()).await;
    session.complete_submit(&ticket, result)?;
    Ok(ticket.mutation)
}
