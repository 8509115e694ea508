use crate::{
    core::cmd::Cmd,
    core::msg::{form::FormMsg, system::SystemMsg, Msg},
    core::state::AppState,
    domain::format::format_conversion,
};

/// Label used in the status bar for conversion problems
pub const CONVERT_LABEL: &str = "Convert";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Errors reported from outside the form are logged as well as shown
        Msg::System(SystemMsg::ShowError { label, message }) => {
            let log = Cmd::LogError {
                message: format!("{label}: {message}"),
            };
            let mut commands = state
                .system
                .update(SystemMsg::ShowError { label, message });
            commands.push(log);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Form(FormMsg::Submit) => {
            let commands = submit(&mut state);
            (state, commands)
        }

        // Form messages (delegated to FormState)
        Msg::Form(form_msg) => {
            let commands = if state.form.update(form_msg) {
                vec![Cmd::RequestRender]
            } else {
                vec![]
            };
            (state, commands)
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Cmd> {
    match state.form.submit() {
        Ok(outcome) => {
            let line = format_conversion(&outcome.request, outcome.result, state.precision());
            let mut commands = state.system.update(SystemMsg::ClearStatusMessage);
            commands.push(Cmd::LogInfo { message: line });
            commands
        }
        // NotFound is reported to the user only
        Err(request) => state.system.update(SystemMsg::ShowError {
            label: CONVERT_LABEL.to_string(),
            message: format!(
                "no conversion from {} to {} in {}",
                request.from_unit, request.to_unit, request.category
            ),
        }),
    }
}
