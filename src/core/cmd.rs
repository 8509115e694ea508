use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render requests go through the render channel coalesced by AppRunner, not here.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by `update` and run by the CmdExecutor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via the bounded render channel and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,
            Cmd::LogError { .. } => 3,
            Cmd::LogInfo { .. } => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    fn info(message: &str) -> Cmd {
        Cmd::LogInfo {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_cmd_priority() {
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .priority(),
            0
        );
        assert_eq!(Cmd::RequestRender.priority(), 0);
        assert!(
            Cmd::LogError {
                message: "e".to_string()
            }
            .priority()
                < info("test").priority()
        );
    }

    #[test]
    fn test_cmd_names() {
        assert_eq!(Cmd::RequestRender.name(), "RequestRender");
        assert_eq!(info("x").name(), "LogInfo");
    }

    #[test]
    fn test_cmd_serialization() -> Result<()> {
        let cmd = info("1500.0 Meters = 1.50 Kilometers");
        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
