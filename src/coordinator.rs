//! Polling of one ISG: identification, cyclic block reads, publication and writes.
//!
//! All requests go through a single [`Transport`] behind an async mutex, so a write issued while
//! a poll cycle is running waits for that cycle to finish. Each completed cycle publishes a new
//! [`Snapshot`] in one atomic step through a [`tokio::sync::watch`] channel.

use crate::blocks;
use crate::codec::{self, EncodingError};
use crate::connection::{self, Transport};
use crate::registers::{
    Family, IDENTIFICATION_ADDRESS, IDENTIFICATION_ENCODING, IDENTIFICATION_KIND, ModelIdentity,
    RegisterCatalog, RegisterDescriptor, RegisterId,
};
use crate::snapshot::Snapshot;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tracing::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum State {
    Disconnected,
    Connecting,
    Identifying,
    Polling,
    /// The last cycle read every block.
    Published,
    /// The last cycle completed, but some blocks could not be read.
    Degraded,
}

impl State {
    pub fn is_connected(self) -> bool {
        !matches!(self, State::Disconnected | State::Connecting)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("update failed")]
    UpdateFailed(#[source] connection::Error),
    #[error("the controller model could not be identified (attempt {0} of {1})")]
    Unidentified(u32, u32),
    #[error("the controller model could not be identified after {0} attempts")]
    IdentificationFailed(u32),
    #[error("controller model id {0} does not belong to a supported controller family")]
    UnknownModel(u16),
    #[error("the controller identified as {previous} earlier now reports model id {current}")]
    ModelChanged {
        previous: ModelIdentity,
        current: u16,
    },
}

impl Error {
    /// Whether polling can not meaningfully continue after this error.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::UpdateFailed(_) | Error::Unidentified(..) => false,
            Error::IdentificationFailed(_) | Error::UnknownModel(_) | Error::ModelChanged { .. } => {
                true
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("the controller model has not been identified yet")]
    NotIdentified,
    #[error("{1} controllers have no register {0}")]
    Unknown(RegisterId, Family),
    #[error("register {0} can not be written")]
    ReadOnly(RegisterId),
    #[error("the value for register {0} is not acceptable")]
    Encoding(RegisterId, #[source] EncodingError),
    #[error("{1} controllers do not support the {0} command")]
    Unsupported(&'static str, Family),
    #[error("could not write register {0}")]
    Transport(RegisterId, #[source] connection::Error),
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// Consecutive cycles that may fail to read the identification word before giving up.
    pub identification_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            identification_attempts: 3,
        }
    }
}

struct Status {
    state: State,
    catalog: Option<&'static RegisterCatalog>,
    model: Option<ModelIdentity>,
    failed_identifications: u32,
}

pub struct Coordinator<T> {
    transport: tokio::sync::Mutex<T>,
    status: std::sync::Mutex<Status>,
    snapshot: watch::Sender<Arc<Snapshot>>,
    settings: Settings,
}

impl<T: Transport> Coordinator<T> {
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport: tokio::sync::Mutex::new(transport),
            status: std::sync::Mutex::new(Status {
                state: State::Disconnected,
                catalog: None,
                model: None,
                failed_identifications: 0,
            }),
            snapshot: watch::Sender::new(Arc::new(Snapshot::default())),
            settings,
        }
    }

    fn status(&self) -> std::sync::MutexGuard<'_, Status> {
        self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_state(&self, state: State) {
        let mut status = self.status();
        if status.state != state {
            debug!(message = "state change", from = %status.state, to = %state);
            status.state = state;
        }
    }

    pub fn state(&self) -> State {
        self.status().state
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    pub fn model(&self) -> Option<ModelIdentity> {
        self.status().model
    }

    pub fn catalog(&self) -> Option<&'static RegisterCatalog> {
        self.status().catalog
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.snapshot.subscribe()
    }

    pub fn has_value(&self, id: RegisterId) -> bool {
        self.snapshot.borrow().get(id).is_some()
    }

    async fn connect(&self, transport: &mut T) -> Result<(), connection::Error> {
        if transport.is_connected() {
            return Ok(());
        }
        self.set_state(State::Connecting);
        match transport.connect().await {
            Ok(()) => {
                self.set_state(State::Identifying);
                Ok(())
            }
            Err(e) => {
                self.set_state(State::Disconnected);
                Err(e)
            }
        }
    }

    /// Give up on the session after a failure that left it in an unknown state.
    async fn abandon(&self, transport: &mut T, error: connection::Error) -> Error {
        warn!(
            message = "update failed",
            error = (&error as &dyn std::error::Error)
        );
        transport.disconnect().await;
        self.set_state(State::Disconnected);
        Error::UpdateFailed(error)
    }

    /// Connect if necessary and resolve the controller family.
    pub async fn identify(&self) -> Result<ModelIdentity, Error> {
        let mut transport = self.transport.lock().await;
        if let Err(e) = self.connect(&mut transport).await {
            return Err(self.abandon(&mut transport, e).await);
        }
        let (_, model) = self.ensure_identified(&mut transport).await?;
        Ok(model)
    }

    async fn ensure_identified(
        &self,
        transport: &mut T,
    ) -> Result<(&'static RegisterCatalog, ModelIdentity), Error> {
        if let Status {
            catalog: Some(catalog),
            model: Some(model),
            ..
        } = *self.status()
        {
            return Ok((catalog, model));
        }
        self.set_state(State::Identifying);
        let raw = match transport
            .read_registers(IDENTIFICATION_KIND, IDENTIFICATION_ADDRESS, 1)
            .await
        {
            Ok(words) => words.first().copied(),
            Err(e) if e.is_block_local() => {
                debug!(
                    message = "identification register could not be read",
                    error = (&e as &dyn std::error::Error)
                );
                None
            }
            Err(e) => return Err(self.abandon(transport, e).await),
        };
        let id = raw
            .and_then(|raw| codec::decode(raw, IDENTIFICATION_ENCODING, 1))
            .and_then(|value| value.as_integer())
            .and_then(|id| u16::try_from(id).ok());
        let mut status = self.status();
        let Some(id) = id else {
            status.failed_identifications += 1;
            let attempt = status.failed_identifications;
            let attempts = self.settings.identification_attempts;
            if attempt >= attempts {
                error!(message = "giving up on identifying the controller", attempt);
                return Err(Error::IdentificationFailed(attempt));
            }
            warn!(message = "controller did not identify itself", attempt, attempts);
            return Err(Error::Unidentified(attempt, attempts));
        };
        let Some(model) = ModelIdentity::from_id(id) else {
            error!(message = "unsupported controller model", id);
            return Err(Error::UnknownModel(id));
        };
        info!(message = "identified the controller", model = %model, family = %model.family);
        let catalog = model.family.catalog();
        status.catalog = Some(catalog);
        status.model = Some(model);
        status.failed_identifications = 0;
        Ok((catalog, model))
    }

    /// Run one poll cycle and publish its snapshot.
    ///
    /// On failure the previously published snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, Error> {
        let mut transport = self.transport.lock().await;
        if let Err(e) = self.connect(&mut transport).await {
            return Err(self.abandon(&mut transport, e).await);
        }
        let (catalog, model) = self.ensure_identified(&mut transport).await?;
        self.set_state(State::Polling);
        let words = match blocks::read_all(&mut *transport, catalog).await {
            Ok(words) => words,
            Err(e) => return Err(self.abandon(&mut transport, e).await),
        };
        let previous = self.snapshot();
        let snapshot = Snapshot::assemble(catalog, words, &previous);
        self.confirm_model(model, &snapshot)?;
        let snapshot = Arc::new(snapshot);
        self.set_state(if snapshot.is_degraded() {
            State::Degraded
        } else {
            State::Published
        });
        self.snapshot.send_replace(Arc::clone(&snapshot));
        debug!(message = "published", cycle = snapshot.cycle());
        Ok(snapshot)
    }

    /// Check the identification word read along with everything else still selects our catalog.
    fn confirm_model(&self, model: ModelIdentity, snapshot: &Snapshot) -> Result<(), Error> {
        let current = snapshot
            .get(RegisterId::ControllerIdentification)
            .and_then(|value| value.as_integer())
            .and_then(|id| u16::try_from(id).ok());
        let Some(current) = current.filter(|&id| id != model.id) else {
            return Ok(());
        };
        let mut status = self.status();
        if Family::from_model_id(current) == Some(model.family) {
            info!(message = "controller model id changed", previous = model.id, current);
            status.model = Some(ModelIdentity {
                family: model.family,
                id: current,
            });
            return Ok(());
        }
        error!(message = "controller family changed", previous = %model, current);
        status.catalog = None;
        status.model = None;
        Err(Error::ModelChanged {
            previous: model,
            current,
        })
    }

    /// Write a value into a holding register.
    ///
    /// On success the current snapshot is updated with the written value without reading it
    /// back from the device.
    pub async fn write(&self, id: RegisterId, value: f64) -> Result<(), WriteError> {
        let catalog = self.catalog().ok_or(WriteError::NotIdentified)?;
        let descriptor = catalog
            .descriptor(id)
            .ok_or(WriteError::Unknown(id, catalog.family()))?;
        if !descriptor.is_writable() {
            return Err(WriteError::ReadOnly(id));
        }
        let raw = descriptor
            .encode(value)
            .map_err(|e| WriteError::Encoding(id, e))?;
        self.write_words(descriptor, &[raw]).await
    }

    async fn write_words(
        &self,
        descriptor: &RegisterDescriptor,
        words: &[u16],
    ) -> Result<(), WriteError> {
        let mut transport = self.transport.lock().await;
        let result = match self.connect(&mut transport).await {
            Ok(()) => transport.write_registers(descriptor.address, words).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            if !e.is_block_local() {
                transport.disconnect().await;
                self.set_state(State::Disconnected);
            }
            return Err(WriteError::Transport(descriptor.id, e));
        }
        info!(
            message = "wrote register",
            register = %descriptor.id,
            address = descriptor.address,
            ?words
        );
        let value = words.first().and_then(|&raw| descriptor.decode(raw));
        self.snapshot.send_modify(|snapshot| {
            *snapshot = Arc::new(snapshot.with_value(descriptor.id, value));
        });
        Ok(())
    }

    /// Issue the controller reset command of the identified family.
    pub async fn reset(&self) -> Result<(), WriteError> {
        let catalog = self.catalog().ok_or(WriteError::NotIdentified)?;
        let command = catalog
            .capabilities()
            .reset
            .ok_or(WriteError::Unsupported("reset", catalog.family()))?;
        info!(message = "resetting the controller", family = %catalog.family());
        self.write(command.register, command.value).await
    }

    /// Poll every `interval`, or sooner when `refresh` is notified, until a fatal error occurs.
    pub async fn run(&self, interval: Duration, refresh: &Notify) -> Result<Infallible, Error> {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = refresh.notified() => {
                    debug!("manual refresh requested");
                    ticker.reset();
                }
            }
            match self.refresh().await {
                Ok(_) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => debug!(
                    message = "will retry on the next tick",
                    error = (&e as &dyn std::error::Error)
                ),
            }
        }
    }

    /// Close the connection. A later refresh or write connects again.
    pub async fn shutdown(&self) {
        let mut transport = self.transport.lock().await;
        transport.disconnect().await;
        self.set_state(State::Disconnected);
    }
}
