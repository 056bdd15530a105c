//! ``src/controller/event_loop.rs``
//! ============================================================================
//! # Event loop
//!
//! Single owner of [`AppState`]. Terminal events become actions, actions are
//! dispatched, and the effects they produce are awaited in place. Follow-up
//! actions from effects are queued and drained before the next terminal
//! event is read, so state changes are strictly ordered.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event as TermEvent, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, trace, warn};

use crate::controller::action_dispatcher::dispatch;
use crate::controller::actions::Action;
use crate::controller::executor::EffectExecutor;
use crate::controller::handlers::KeyHandlerOrchestrator;
use crate::model::app_state::AppState;
use crate::operators::command_runner::CommandRunner;
use crate::operators::pinned_store::PinnedStore;
use crate::view::ui::UIRenderer;

/// Interval at which expired status messages are cleared.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct EventLoop<R, S> {
    pub state: AppState,
    keys: KeyHandlerOrchestrator,
    executor: EffectExecutor<R, S>,
}

impl<R: CommandRunner, S: PinnedStore> EventLoop<R, S> {
    pub fn new(state: AppState, keys: KeyHandlerOrchestrator, executor: EffectExecutor<R, S>) -> Self {
        info!(
            marker = "EVENT_LOOP_INIT",
            operation_type = "event_loop",
            panels = state.panels.len(),
            "Event loop initialized"
        );
        Self {
            state,
            keys,
            executor,
        }
    }

    /// Dispatch `action` and every action its effects produce.
    pub async fn process(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            for effect in dispatch(&mut self.state, action) {
                trace!(
                    marker = "EFFECT_EXECUTE",
                    operation_type = "effect",
                    effect = ?effect,
                    "Executing effect"
                );
                queue.extend(self.executor.execute(effect).await);
            }
        }
    }

    /// Map a terminal event to an action. Key releases and repeats from
    /// terminals that report them are dropped.
    pub fn map_event(&self, event: TermEvent) -> Option<Action> {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.keys.handle_key(&self.state, key)
            }
            TermEvent::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut renderer = UIRenderer::new();
        self.state.ui.request_redraw();

        loop {
            if self.state.should_quit {
                info!(marker = "EVENT_LOOP_QUIT", operation_type = "event_loop", "Quit requested");
                break;
            }

            if self.state.ui.take_redraw() {
                terminal
                    .draw(|frame| renderer.render(frame, &self.state))
                    .context("Failed to draw frame")?;
            }

            let action = tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.map_event(event),
                    Some(Err(e)) => {
                        warn!(
                            marker = "TERMINAL_EVENT_ERROR",
                            operation_type = "event_loop",
                            error = %e,
                            "Failed to read terminal event"
                        );
                        None
                    }
                    None => {
                        debug!(marker = "EVENT_STREAM_CLOSED", operation_type = "event_loop", "Event stream closed");
                        Some(Action::Quit)
                    }
                },
                _ = ticker.tick() => Some(Action::Tick),
            };

            if let Some(action) = action {
                self.process(action).await;
            }
        }

        Ok(())
    }
}
