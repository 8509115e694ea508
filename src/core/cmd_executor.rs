use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that routes Elm commands to the host (TUI, render loop, log)
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending render
                    let _ = rtx.try_send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("{}", message);
            }
        }

        Ok(())
    }

    /// Execute multiple commands, collecting a line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resize_is_forwarded() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 120,
            height: 40,
        }))?;
        assert_eq!(
            rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 120,
                height: 40
            })
        );
        Ok(())
    }

    #[test]
    fn test_resize_without_sender_is_dropped() -> Result<()> {
        let executor = CmdExecutor::new();
        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 1,
            height: 1,
        }))?;
        Ok(())
    }

    #[test]
    fn test_render_requests_are_coalesced() -> Result<()> {
        let (tx, mut rx) = mpsc::channel(1);
        let mut executor = CmdExecutor::new();
        executor.set_render_request_sender(tx);

        executor.execute_command(&Cmd::RequestRender)?;
        executor.execute_command(&Cmd::RequestRender)?;
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_log_commands_succeed() -> Result<()> {
        let executor = CmdExecutor::new();
        executor.execute_command(&Cmd::LogInfo {
            message: "converted".to_string(),
        })?;
        executor.execute_command(&Cmd::LogError {
            message: "terminal went away".to_string(),
        })?;
        Ok(())
    }

    #[test]
    fn test_execute_commands_reports_failures() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tx);

        let log = executor.execute_commands(&[
            Cmd::LogInfo {
                message: "converted".to_string(),
            },
            Cmd::Tui(TuiCommand::Resize {
                width: 10,
                height: 10,
            }),
        ]);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "✓ Executed: LogInfo");
        assert!(log[1].starts_with("✗ Failed to execute Tui::Resize"));
    }
}
