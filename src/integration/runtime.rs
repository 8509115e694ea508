use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::{form::Field, AppState},
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and drives translate → update → execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Add TUI command sender support to the executor (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::Sender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor.
    /// Terminal commands run before logging; order within a priority is kept.
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let mut commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        commands.sort_by_key(Cmd::priority);
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {:?}", msg);
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state they arrive in
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            for msg in domain_msgs {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            focus: self.state.form.focus,
            has_outcome: self.state.form.outcome().is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub focus: Field,
    pub has_outcome: bool,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::{form::FormMsg, system::SystemMsg};
    use crate::infrastructure::config::Config;

    fn create_test_runtime() -> Runtime {
        let config = Config::from_defaults().expect("embedded config parses");
        Runtime::new(AppState::new(config))
    }

    fn press(runtime: &mut Runtime, code: KeyCode) {
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        assert_eq!(
            runtime.get_stats(),
            RuntimeStats {
                queued_messages: 0,
                queued_raw_messages: 0,
                queued_commands: 0,
                focus: Field::Category,
                has_outcome: false,
            }
        );
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Form(FormMsg::FocusNext));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();
        assert_eq!(commands, vec![Cmd::RequestRender]);
        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert_eq!(runtime.state().form.focus, Field::FromUnit);
        assert_eq!(runtime.pending_commands(), vec![Cmd::RequestRender]);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_raw_keys_see_updated_focus() {
        let mut runtime = create_test_runtime();
        // The digit is only an edit once Tab has moved focus to the value
        for code in [KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Char('7')] {
            press(&mut runtime, code);
        }
        runtime.run_update_cycle();
        assert_eq!(runtime.state().form.focus, Field::Value);
        assert_eq!(runtime.state().form.value_input(), "7");
    }

    #[test]
    fn test_convert_workflow() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Form(FormMsg::PasteValue("2".to_string())));
        runtime.send_msg(Msg::Form(FormMsg::Submit));
        let log = runtime.run_update_cycle();

        assert!(runtime.get_stats().has_outcome);
        assert!(log.iter().any(|line| line == "✓ Executed: LogInfo"));
        assert_eq!(runtime.get_stats().queued_commands, 0);
    }

    #[test]
    fn test_commands_run_in_priority_order() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Form(FormMsg::PasteValue("2".to_string())));
        runtime.send_msg(Msg::Form(FormMsg::Submit));
        runtime.send_raw_msg(RawMsg::Error("stdin closed".to_string()));
        let log = runtime.run_update_cycle();

        assert_eq!(
            log,
            vec![
                "✓ Executed: RequestRender",
                "✓ Executed: RequestRender",
                "✓ Executed: RequestRender",
                "✓ Executed: LogError",
                "✓ Executed: LogInfo",
            ]
        );
    }

    #[test]
    fn test_quit() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::System(SystemMsg::Quit));
        runtime.run_update_cycle();
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_resize_reaches_tui_sender() {
        let mut runtime = create_test_runtime();
        let (tx, mut rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tx);

        runtime.send_raw_msg(RawMsg::Resize(90, 30));
        runtime.run_update_cycle();
        assert_eq!(
            rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 90,
                height: 30
            })
        );
    }
}
