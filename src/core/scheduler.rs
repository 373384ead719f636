//! Fixed-interval sampling loop.
//!
//! Each tick samples every provider in order, renders the template and
//! hands the complete line to the sink. Nothing carries over between
//! ticks except the configuration and the sink itself.

use std::sync::mpsc::{Receiver, RecvTimeoutError};

use crate::core::config::StatusConfig;
use crate::error::Result;
use crate::platform::sink::StatusSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next tick
    Idle,
    /// Sampling providers and publishing
    Sampling,
}

pub struct Scheduler<S: StatusSink> {
    config: StatusConfig,
    sink: S,
    state: SchedulerState,
}

impl<S: StatusSink> Scheduler<S> {
    pub fn new(config: StatusConfig, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sink,
            state: SchedulerState::Idle,
        })
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Build the line for this instant without publishing it
    pub fn sample(&self) -> String {
        let values: Vec<String> = self
            .config
            .providers
            .iter()
            .map(|provider| {
                let value = provider.sample();
                if value.is_empty() {
                    log::trace!("{} provider produced no value", provider.name());
                }
                value
            })
            .collect();

        // validate() guarantees one value per placeholder
        self.config.template.render(&values).unwrap_or_default()
    }

    /// Run one Idle -> Sampling -> Idle cycle and return the published line.
    ///
    /// A sink failure is logged and otherwise ignored; the next tick tries
    /// again.
    pub fn tick(&mut self) -> String {
        self.state = SchedulerState::Sampling;

        let line = self.sample();
        log::debug!("Status: {}", line);

        if let Err(e) = self.sink.publish(&line) {
            log::warn!("Failed to publish status: {}", e);
        }

        self.state = SchedulerState::Idle;
        line
    }

    /// Tick until `stop` receives a message or its sender is dropped, then
    /// release the sink.
    pub fn run(mut self, stop: &Receiver<()>) -> S {
        log::info!(
            "Publishing {} fields every {:?}",
            self.config.providers.len(),
            self.config.interval
        );

        loop {
            self.tick();

            match stop.recv_timeout(self.config.interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) => {
                    log::info!("Stop requested");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("Stop channel closed");
                    break;
                }
            }
        }

        if let Err(e) = self.sink.release() {
            log::warn!("Failed to release display: {}", e);
        }
        self.sink
    }
}
