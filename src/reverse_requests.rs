use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::MissingRequiredFieldError;
use crate::types::{
    AnyValue, MessageKind, RunInTerminalRequestArgumentsKind, StartDebuggingRequestKind,
};
use crate::wire::{self, FieldSpec, MessageShape, WireField};

message! {
    pub struct RunInTerminalRequestArguments {
        /// What kind of terminal to launch. Defaults to `integrated` if not specified.
        pub kind: Option<RunInTerminalRequestArgumentsKind>,
        /// Title of the terminal.
        pub title: Option<String>,
        /// Working directory for the command. For non-empty, valid paths this typically results
        /// in execution of a change directory command.
        pub cwd: String,
        /// List of arguments. The first argument is the command to run.
        pub args: Vec<String>,
        /// Environment key-value pairs that are added to or removed from the default
        /// environment. A `null` value removes the variable.
        pub env: Option<BTreeMap<String, Option<String>>>,
        /// If the client uses an intermediary shell to launch the application, then the client
        /// must not attempt to escape characters with special meanings for the shell.
        pub args_can_be_interpreted_by_shell: Option<bool>,
    }
}

message! {
    /// Body of the response to a `runInTerminal` request.
    pub struct RunInTerminalResponse {
        /// The process ID. The value should be less than or equal to 2147483647 (2^31-1).
        pub process_id: Option<i64>,
        /// The process ID of the terminal shell.
        pub shell_process_id: Option<i64>,
    }
}

message! {
    pub struct StartDebuggingRequestArguments {
        /// Arguments passed to the new debug session. The arguments must only contain properties
        /// understood by the `launch` or `attach` requests of the debug adapter.
        pub configuration: BTreeMap<String, AnyValue>,
        /// Indicates whether the new debug session should be started with a `launch` or
        /// `attach` request.
        pub request: StartDebuggingRequestKind,
    }
}

tagged_enum! {
    #[serde(tag = "command", content = "arguments")]
    pub enum ReverseCommand {
        /// This request is sent from the debug adapter to the client to run a command in a
        /// terminal.
        ///
        /// This is typically used to launch the debuggee in a terminal provided by the client.
        /// Argument strings passed to the `runInTerminal` request must arrive verbatim in the
        /// command to be run.
        RunInTerminal(RunInTerminalRequestArguments) => "runInTerminal",
        /// This request is sent from the debug adapter to the client to start a new debug
        /// session of the same type as the caller.
        StartDebugging(StartDebuggingRequestArguments) => "startDebugging",
    }
}

/// A debug adapter initiated request.
///
/// The protocol treats reverse requests like all other requests. They are kept apart from
/// [`Request`](crate::requests::Request) so that matching on client requests never has to deal
/// with them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReverseRequest {
    pub seq: i64,
    #[serde(rename = "type", deserialize_with = "MessageKind::deserialize_request")]
    pub kind: MessageKind,
    #[serde(flatten)]
    pub command: ReverseCommand,
}

impl ReverseRequest {
    pub fn new(seq: i64, command: ReverseCommand) -> Self {
        Self {
            seq,
            kind: MessageKind::Request,
            command,
        }
    }
}

impl WireField for ReverseRequest {
    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        wire::check_tagged::<ReverseCommand>(
            value,
            Self::SHAPE,
            Self::FIELDS,
            ("command", "arguments"),
        )
    }
}

impl MessageShape for ReverseRequest {
    const SHAPE: &'static str = "ReverseRequest";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("seq", None, true),
        FieldSpec::new("kind", Some("type"), true),
        FieldSpec::new("command", None, true),
        FieldSpec::new("arguments", None, false),
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::DeserializationError;

    #[test]
    fn run_in_terminal_env_can_unset_variables() {
        let mut env = BTreeMap::new();
        env.insert("RUST_LOG".to_string(), Some("debug".to_string()));
        env.insert("PAGER".to_string(), None);
        let arguments = RunInTerminalRequestArguments::builder()
            .kind(RunInTerminalRequestArgumentsKind::Integrated)
            .cwd("/work".to_string())
            .args(vec!["cargo".to_string(), "run".to_string()])
            .env(env)
            .build()
            .unwrap();
        let request = ReverseRequest::new(3, ReverseCommand::RunInTerminal(arguments));
        let encoded = wire::encode(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "seq": 3,
                "type": "request",
                "command": "runInTerminal",
                "arguments": {
                    "kind": "integrated",
                    "cwd": "/work",
                    "args": ["cargo", "run"],
                    "env": { "PAGER": null, "RUST_LOG": "debug" },
                },
            })
        );
        assert_eq!(wire::decode::<ReverseRequest>(encoded).unwrap(), request);
    }

    #[test]
    fn start_debugging_requires_request_kind() {
        let error = wire::decode::<ReverseRequest>(json!({
            "seq": 1,
            "type": "request",
            "command": "startDebugging",
            "arguments": { "configuration": { "program": "a.out" } },
        }))
        .unwrap_err();
        match error {
            DeserializationError::MissingRequiredField(missing) => {
                assert_eq!(missing.shape, "StartDebuggingRequestArguments");
                assert_eq!(missing.field, "request");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_in_terminal_response_body() {
        let body: RunInTerminalResponse = wire::decode(json!({ "processId": 4242 })).unwrap();
        assert_eq!(body.process_id, Some(4242));
        assert_eq!(body.shell_process_id, None);
    }

    #[test]
    fn reverse_requests_need_arguments() {
        let error = wire::decode::<ReverseRequest>(json!({
            "seq": 1,
            "type": "request",
            "command": "runInTerminal",
        }))
        .unwrap_err();
        match error {
            DeserializationError::MissingRequiredField(missing) => {
                assert_eq!(missing.shape, "ReverseRequest");
                assert_eq!(missing.field, "arguments");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
