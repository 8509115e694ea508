use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Status bar content changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    ErrorMessageChanged { label: String, message: String },
    MessageCleared,
}

/// One-line error status shown at the bottom of the screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn message(&self) -> &Option<String> {
        &self.message
    }

    pub fn update(&mut self, message: StatusMessage) {
        match message {
            StatusMessage::ErrorMessageChanged { label, message } => {
                let normalized_message = message.replace('\n', " ");
                self.message = Some(format!("[ERR: {label}] {normalized_message}"));
            }
            StatusMessage::MessageCleared => {
                self.message = None;
            }
        }
    }
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last size reported by the terminal, as (width, height)
    pub terminal_size: Option<(u16, u16)>,
    pub status_bar: StatusBar,
}

impl SystemState {
    pub fn status_message(&self) -> Option<&str> {
        self.status_bar.message().as_deref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.terminal_size = Some((width, height));
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::ShowError { label, message } => {
                self.status_bar
                    .update(StatusMessage::ErrorMessageChanged { label, message });
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_bar.update(StatusMessage::MessageCleared);
                vec![Cmd::RequestRender]
            }
        }
    }
}
