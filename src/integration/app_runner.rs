use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and renders the form.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    components: Components,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // Capacity 1: pending render requests collapse into one
    render_rx: mpsc::Receiver<()>,
}

impl AppRunner {
    /// Runner reading events from the terminal it draws to.
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        let events = EventSource::real(tui.clone());
        Self::with_event_source(config, tui, events)
    }

    /// Runner with a separate event source, e.g. a scripted one in tests.
    pub fn with_event_source(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::channel(1);

        let mut runtime = Runtime::new(AppState::new(config));
        runtime.add_tui_sender(tui_tx);
        runtime.add_render_request_sender(render_tx);

        Self {
            runtime,
            tui,
            events,
            components: Components::new(),
            tui_rx,
            render_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run the main loop until quit or until the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while let Some(event) = self.events.next().await {
            let mut needs_render = false;
            match event {
                tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
                tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                tui::Event::Init | tui::Event::Render => needs_render = true,
                tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                tui::Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
                tui::Event::Error => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("failed to read terminal event".to_string())),
                tui::Event::FocusGained | tui::Event::FocusLost | tui::Event::Mouse(_) => {}
            }

            self.runtime.run_update_cycle();

            // Handle commands that require immediate host reaction
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                        needs_render = true;
                    }
                }
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.tui.lock().await.suspend()?;
                // Execution continues here once the shell resumes us
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.tui.lock().await.enter()?;
                self.runtime.run_update_cycle();
            }

            if self.render_rx.try_recv().is_ok() {
                needs_render = true;
            }
            if needs_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))?;
        Ok(())
    }
}
