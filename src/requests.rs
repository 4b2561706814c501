use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::either::Either;
use crate::errors::MissingRequiredFieldError;
use crate::types::{
    AnyValue, DataBreakpoint, ExceptionFilterOptions, ExceptionOptions, FunctionBreakpoint,
    InstructionBreakpoint, MessageKind, Source, SourceBreakpoint, StackFrameFormat,
    SteppingGranularity, ValueFormat, VariablesArgumentsFilter,
};
use crate::wire::{self, FieldSpec, MessageShape, WireField};

message! {
    pub struct CancelArguments {
        /// The ID (attribute `seq`) of the request to cancel. If missing no request is
        /// cancelled. Both a `requestId` and a `progressId` can be specified in one request.
        pub request_id: Option<i64>,
        /// The ID (attribute `progressId`) of the progress to cancel. If missing no progress is
        /// cancelled.
        pub progress_id: Option<String>,
    }
}

message! {
    /// Arguments for an `initialize` request.
    pub struct InitializeRequestArguments {
        /// The ID of the client using this adapter.
        pub client_id as "clientID": Option<String>,
        /// The human-readable name of the client using this adapter.
        pub client_name: Option<String>,
        /// The ID of the debug adapter.
        pub adapter_id as "adapterID": String,
        /// The ISO-639 locale of the client using this adapter, e.g. en-US or de-CH.
        pub locale: Option<String>,
        /// If true all line numbers are 1-based (default).
        pub lines_start_at1: Option<bool>,
        /// If true all column numbers are 1-based (default).
        pub columns_start_at1: Option<bool>,
        /// Determines in what format paths are specified. The default is `path`, which is the
        /// native format. See [`path_format`](crate::types::path_format).
        pub path_format: Option<String>,
        /// Client supports the `type` attribute for variables.
        pub supports_variable_type: Option<bool>,
        /// Client supports the paging of variables.
        pub supports_variable_paging: Option<bool>,
        /// Client supports the `runInTerminal` request.
        pub supports_run_in_terminal_request: Option<bool>,
        /// Client supports memory references.
        pub supports_memory_references: Option<bool>,
        /// Client supports progress reporting.
        pub supports_progress_reporting: Option<bool>,
        /// Client supports the `invalidated` event.
        pub supports_invalidated_event: Option<bool>,
        /// Client supports the `memory` event.
        pub supports_memory_event: Option<bool>,
        /// Client supports the `argsCanBeInterpretedByShell` attribute on the `runInTerminal`
        /// request.
        pub supports_args_can_be_interpreted_by_shell: Option<bool>,
        /// Client supports the `startDebugging` request.
        pub supports_start_debugging_request: Option<bool>,
        /// The client will interpret ANSI escape sequences in the display of
        /// `OutputEvent.output` and `Variable.value` fields.
        pub supports_ansi_styling as "supportsANSIStyling": Option<bool>,
    }
}

message! {
    pub struct ConfigurationDoneArguments {}
}

/// Arguments for a `launch` request.
///
/// Everything besides `noDebug` and `__restart` is specific to the debug adapter and is kept in
/// `additional`, so that it survives a round trip unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequestArguments {
    /// If true, the launch request should launch the program without enabling debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_debug: Option<bool>,
    /// Arbitrary data from the previous, restarted session. The data is sent as the `restart`
    /// attribute of the `terminated` event. The client should leave the data intact.
    #[serde(rename = "__restart", skip_serializing_if = "Option::is_none")]
    pub restart: Option<AnyValue>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, AnyValue>,
}

impl LaunchRequestArguments {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.additional.get(key).map(|value| &value.0)
    }
}

impl WireField for LaunchRequestArguments {
    fn matches_kind(value: &Value) -> bool {
        value.is_object()
    }
}

impl MessageShape for LaunchRequestArguments {
    const SHAPE: &'static str = "LaunchRequestArguments";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("no_debug", None, false),
        FieldSpec::new("restart", Some("__restart"), false),
    ];
}

impl fmt::Display for LaunchRequestArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        wire::render(
            f,
            Self::SHAPE,
            &[
                ("no_debug", &self.no_debug),
                ("restart", &self.restart),
                ("additional", &self.additional),
            ],
        )
    }
}

/// Arguments for an `attach` request. Like [`LaunchRequestArguments`], adapter specific
/// properties are kept in `additional`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttachRequestArguments {
    /// Arbitrary data from the previous, restarted session.
    #[serde(rename = "__restart", skip_serializing_if = "Option::is_none")]
    pub restart: Option<AnyValue>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, AnyValue>,
}

impl AttachRequestArguments {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.additional.get(key).map(|value| &value.0)
    }
}

impl WireField for AttachRequestArguments {
    fn matches_kind(value: &Value) -> bool {
        value.is_object()
    }
}

impl MessageShape for AttachRequestArguments {
    const SHAPE: &'static str = "AttachRequestArguments";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new("restart", Some("__restart"), false)];
}

impl fmt::Display for AttachRequestArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        wire::render(
            f,
            Self::SHAPE,
            &[("restart", &self.restart), ("additional", &self.additional)],
        )
    }
}

message! {
    pub struct RestartArguments {
        /// The latest version of the `launch` or `attach` configuration.
        ///
        /// Both shapes accept any object, so a decoded value always ends up on the launch side.
        pub arguments: Option<Either<LaunchRequestArguments, AttachRequestArguments>>,
    }
}

message! {
    pub struct DisconnectArguments {
        /// A value of true indicates that this `disconnect` request is part of a restart
        /// sequence.
        pub restart: Option<bool>,
        /// Indicates whether the debuggee should be terminated when the debugger is
        /// disconnected.
        pub terminate_debuggee: Option<bool>,
        /// Indicates whether the debuggee should stay suspended when the debugger is
        /// disconnected.
        pub suspend_debuggee: Option<bool>,
    }
}

message! {
    pub struct TerminateArguments {
        /// A value of true indicates that this `terminate` request is part of a restart
        /// sequence.
        pub restart: Option<bool>,
    }
}

message! {
    pub struct BreakpointLocationsArguments {
        /// The source location of the breakpoints, either `source.path` or
        /// `source.sourceReference` must be specified.
        pub source: Source,
        /// Start line of range to search possible breakpoint locations in. If only the line is
        /// specified, the request returns all possible locations in that line.
        pub line: i64,
        pub column: Option<i64>,
        /// End line of range to search possible breakpoint locations in. If no end line is
        /// given, then the end line is assumed to be the start line.
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
    }
}

message! {
    pub struct SetBreakpointsArguments {
        /// The source location of the breakpoints, either `source.path` or
        /// `source.sourceReference` must be specified.
        pub source: Source,
        /// The code locations of the breakpoints.
        pub breakpoints: Option<Vec<SourceBreakpoint>>,
        /// Deprecated: The code locations of the breakpoints.
        pub lines: Option<Vec<i64>>,
        /// A value of true indicates that the underlying source has been modified which results
        /// in new breakpoint locations.
        pub source_modified: Option<bool>,
    }
}

message! {
    pub struct SetFunctionBreakpointsArguments {
        /// The function names of the breakpoints.
        pub breakpoints: Vec<FunctionBreakpoint>,
    }
}

message! {
    pub struct SetExceptionBreakpointsArguments {
        /// Set of exception filters specified by their ID. The `filter` and `filterOptions`
        /// sets are additive.
        pub filters: Vec<String>,
        /// Set of exception filters and their options.
        pub filter_options: Option<Vec<ExceptionFilterOptions>>,
        /// Configuration options for selected exceptions.
        pub exception_options: Option<Vec<ExceptionOptions>>,
    }
}

message! {
    pub struct DataBreakpointInfoArguments {
        /// Reference to the variable container if the data breakpoint is requested for a child
        /// of the container.
        pub variables_reference: Option<i64>,
        /// The name of the variable's child to obtain data breakpoint information for.
        pub name: String,
        /// When `name` is an expression, evaluate it in the scope of this stack frame.
        pub frame_id: Option<i64>,
        /// If specified, a debug adapter should return information for the range of memory
        /// extending `bytes` number of bytes from the address or variable specified by `name`.
        pub bytes: Option<i64>,
        /// If true, the `name` is a memory address and the debugger should interpret it as a
        /// decimal value, or hex value if it is prefixed with `0x`.
        pub as_address: Option<bool>,
        /// The mode of the desired breakpoint.
        pub mode: Option<String>,
    }
}

message! {
    pub struct SetDataBreakpointsArguments {
        /// The contents of this array replaces all existing data breakpoints. An empty array
        /// clears all data breakpoints.
        pub breakpoints: Vec<DataBreakpoint>,
    }
}

message! {
    pub struct SetInstructionBreakpointsArguments {
        /// The instruction references of the breakpoints.
        pub breakpoints: Vec<InstructionBreakpoint>,
    }
}

message! {
    pub struct ContinueArguments {
        /// Specifies the active thread. If the debug adapter supports single thread execution
        /// and the argument `singleThread` is true, only the thread with this ID is resumed.
        pub thread_id: i64,
        /// If this flag is true, execution is resumed only for the thread with given
        /// `threadId`.
        pub single_thread: Option<bool>,
    }
}

message! {
    pub struct NextArguments {
        /// Specifies the thread for which to resume execution for one step (of the given
        /// granularity).
        pub thread_id: i64,
        /// If this flag is true, all other suspended threads are not resumed.
        pub single_thread: Option<bool>,
        /// Stepping granularity. If no granularity is specified, a granularity of `statement`
        /// is assumed.
        pub granularity: Option<SteppingGranularity>,
    }
}

message! {
    pub struct StepInArguments {
        pub thread_id: i64,
        pub single_thread: Option<bool>,
        /// Id of the target to step into.
        pub target_id: Option<i64>,
        pub granularity: Option<SteppingGranularity>,
    }
}

message! {
    pub struct StepOutArguments {
        pub thread_id: i64,
        pub single_thread: Option<bool>,
        pub granularity: Option<SteppingGranularity>,
    }
}

message! {
    pub struct StepBackArguments {
        pub thread_id: i64,
        pub single_thread: Option<bool>,
        pub granularity: Option<SteppingGranularity>,
    }
}

message! {
    pub struct ReverseContinueArguments {
        pub thread_id: i64,
        pub single_thread: Option<bool>,
    }
}

message! {
    pub struct RestartFrameArguments {
        /// Restart the stack frame identified by `frameId`.
        pub frame_id: i64,
    }
}

message! {
    pub struct GotoArguments {
        /// Set the goto target for this thread.
        pub thread_id: i64,
        /// The location where the debuggee will continue to run.
        pub target_id: i64,
    }
}

message! {
    pub struct PauseArguments {
        /// Pause execution for this thread.
        pub thread_id: i64,
    }
}

message! {
    pub struct StackTraceArguments {
        /// Retrieve the stacktrace for this thread.
        pub thread_id: i64,
        /// The index of the first frame to return; if omitted frames start at 0.
        pub start_frame: Option<i64>,
        /// The maximum number of frames to return. If levels is not specified or 0, all frames
        /// are returned.
        pub levels: Option<i64>,
        /// Specifies details on how to format the stack frames.
        pub format: Option<StackFrameFormat>,
    }
}

message! {
    pub struct ScopesArguments {
        /// Retrieve the scopes for the stack frame identified by `frameId`.
        pub frame_id: i64,
    }
}

message! {
    pub struct VariablesArguments {
        /// The variable for which to retrieve its children.
        pub variables_reference: i64,
        /// Filter to limit the child variables to either named or indexed. If omitted, both
        /// types are fetched.
        pub filter: Option<VariablesArgumentsFilter>,
        /// The index of the first variable to return; if omitted children start at 0.
        pub start: Option<i64>,
        /// The number of variables to return. If count is missing or 0, all variables are
        /// returned.
        pub count: Option<i64>,
        /// Specifies details on how to format the Variable values.
        pub format: Option<ValueFormat>,
    }
}

message! {
    pub struct SetVariableArguments {
        /// The reference of the variable container.
        pub variables_reference: i64,
        /// The name of the variable in the container.
        pub name: String,
        /// The value of the variable.
        pub value: String,
        /// Specifies details on how to format the response value.
        pub format: Option<ValueFormat>,
    }
}

message! {
    pub struct SourceArguments {
        /// Specifies the source content to load. Either `source.path` or
        /// `source.sourceReference` must be specified.
        pub source: Option<Source>,
        /// The reference to the source. This is the same as `source.sourceReference`. This is
        /// provided for backward compatibility since old clients do not understand the `source`
        /// attribute.
        pub source_reference: i64,
    }
}

message! {
    pub struct TerminateThreadsArguments {
        /// Ids of threads to be terminated.
        pub thread_ids: Option<Vec<i64>>,
    }
}

message! {
    pub struct ModulesArguments {
        /// The index of the first module to return; if omitted modules start at 0.
        pub start_module: Option<i64>,
        /// The number of modules to return. If `moduleCount` is not specified or 0, all modules
        /// are returned.
        pub module_count: Option<i64>,
    }
}

message! {
    pub struct LoadedSourcesArguments {}
}

message! {
    pub struct EvaluateArguments {
        /// The expression to evaluate.
        pub expression: String,
        /// Evaluate the expression in the scope of this stack frame. If not specified, the
        /// expression is evaluated in the global scope.
        pub frame_id: Option<i64>,
        /// The contextual line where the expression should be evaluated.
        pub line: Option<i64>,
        pub column: Option<i64>,
        /// The contextual source in which the `line` is found.
        pub source: Option<Source>,
        /// The context in which the evaluate request is used. See
        /// [`evaluate_context`](crate::types::evaluate_context).
        pub context: Option<String>,
        /// Specifies details on how to format the result.
        pub format: Option<ValueFormat>,
    }
}

message! {
    pub struct SetExpressionArguments {
        /// The l-value expression to assign to.
        pub expression: String,
        /// The value expression to assign to the l-value expression.
        pub value: String,
        /// Evaluate the expressions in the scope of this stack frame.
        pub frame_id: Option<i64>,
        pub format: Option<ValueFormat>,
    }
}

message! {
    pub struct StepInTargetsArguments {
        /// The stack frame for which to retrieve the possible step-in targets.
        pub frame_id: i64,
    }
}

message! {
    pub struct GotoTargetsArguments {
        /// The source location for which the goto targets are determined.
        pub source: Source,
        /// The line location for which the goto targets are determined.
        pub line: i64,
        pub column: Option<i64>,
    }
}

message! {
    pub struct CompletionsArguments {
        /// Returns completions in the scope of this stack frame. If not specified, the
        /// completions are returned for the global scope.
        pub frame_id: Option<i64>,
        /// One or more source lines. Typically this is the text users have typed into the debug
        /// console before they asked for completion.
        pub text: String,
        /// The position within `text` for which to determine the completion proposals.
        pub column: i64,
        /// A line for which to determine the completion proposals. If missing the first line of
        /// the text is assumed.
        pub line: Option<i64>,
    }
}

message! {
    pub struct ExceptionInfoArguments {
        /// Thread for which exception information should be retrieved.
        pub thread_id: i64,
    }
}

message! {
    pub struct ReadMemoryArguments {
        /// Memory reference to the base location from which data should be read.
        pub memory_reference: String,
        /// Offset (in bytes) to be applied to the reference location before reading data. Can
        /// be negative.
        pub offset: Option<i64>,
        /// Number of bytes to read at the specified location and offset.
        pub count: i64,
    }
}

message! {
    pub struct WriteMemoryArguments {
        /// Memory reference to the base location to which data should be written.
        pub memory_reference: String,
        /// Offset (in bytes) to be applied to the reference location before writing data. Can
        /// be negative.
        pub offset: Option<i64>,
        /// Property to control partial writes. If true, the debug adapter should attempt to
        /// write memory even if the entire memory region is not writable.
        pub allow_partial: Option<bool>,
        /// Bytes to write, encoded using base64.
        pub data: String,
    }
}

message! {
    pub struct DisassembleArguments {
        /// Memory reference to the base location containing the instructions to disassemble.
        pub memory_reference: String,
        /// Offset (in bytes) to be applied to the reference location before disassembling. Can
        /// be negative.
        pub offset: Option<i64>,
        /// Offset (in instructions) to be applied after the byte offset (if any) before
        /// disassembling. Can be negative.
        pub instruction_offset: Option<i64>,
        /// Number of instructions to disassemble starting at the specified location and offset.
        pub instruction_count: i64,
        /// If true, the adapter should attempt to resolve memory addresses and other values to
        /// symbolic names.
        pub resolve_symbols: Option<bool>,
    }
}

message! {
    pub struct LocationsArguments {
        /// Location reference to resolve.
        pub location_reference: i64,
    }
}

tagged_enum! {
    /// The command of a request together with its arguments.
    ///
    /// Requests whose arguments the protocol marks as optional carry an `Option`.
    #[serde(tag = "command", content = "arguments")]
    pub enum Command {
        /// The cancel request is used by the client in two situations: to indicate that it is no
        /// longer interested in the result produced by a specific request issued earlier, and
        /// to cancel a progress sequence.
        Cancel(Option<CancelArguments>) => "cancel",
        /// The `initialize` request is sent as the first request from the client to the debug
        /// adapter in order to configure it with client capabilities and to retrieve
        /// capabilities from the debug adapter.
        Initialize(InitializeRequestArguments) => "initialize",
        /// This request indicates that the client has finished initialization of the debug
        /// adapter.
        ConfigurationDone(Option<ConfigurationDoneArguments>) => "configurationDone",
        /// This launch request is sent from the client to the debug adapter to start the
        /// debuggee with or without debugging (if `noDebug` is true).
        Launch(LaunchRequestArguments) => "launch",
        /// The `attach` request is sent from the client to the debug adapter to attach to a
        /// debuggee that is already running.
        Attach(AttachRequestArguments) => "attach",
        /// Restarts a debug session.
        Restart(Option<RestartArguments>) => "restart",
        /// The `disconnect` request asks the debug adapter to disconnect from the debuggee (thus
        /// ending the debug session) and then to shut down itself (the debug adapter).
        Disconnect(Option<DisconnectArguments>) => "disconnect",
        /// The `terminate` request is sent from the client to the debug adapter in order to shut
        /// down the debuggee gracefully.
        Terminate(Option<TerminateArguments>) => "terminate",
        /// The `breakpointLocations` request returns all possible locations for source
        /// breakpoints in a given range.
        BreakpointLocations(Option<BreakpointLocationsArguments>) => "breakpointLocations",
        /// Sets multiple breakpoints for a single source and clears all previous breakpoints in
        /// that source.
        SetBreakpoints(SetBreakpointsArguments) => "setBreakpoints",
        /// Replaces all existing function breakpoints with new function breakpoints.
        SetFunctionBreakpoints(SetFunctionBreakpointsArguments) => "setFunctionBreakpoints",
        /// The request configures the debugger's response to thrown exceptions.
        SetExceptionBreakpoints(SetExceptionBreakpointsArguments) => "setExceptionBreakpoints",
        /// Obtains information on a possible data breakpoint that could be set on an expression
        /// or variable.
        DataBreakpointInfo(DataBreakpointInfoArguments) => "dataBreakpointInfo",
        /// Replaces all existing data breakpoints with new data breakpoints.
        SetDataBreakpoints(SetDataBreakpointsArguments) => "setDataBreakpoints",
        /// Replaces all existing instruction breakpoints.
        SetInstructionBreakpoints(SetInstructionBreakpointsArguments) => "setInstructionBreakpoints",
        /// The request resumes execution of all threads.
        Continue(ContinueArguments) => "continue",
        /// The request executes one step (in the given granularity) for the specified thread
        /// and allows all other threads to run freely by resuming them.
        Next(NextArguments) => "next",
        /// The request resumes the given thread to step into a function/method.
        StepIn(StepInArguments) => "stepIn",
        /// The request resumes the given thread to step out (return) from a function/method.
        StepOut(StepOutArguments) => "stepOut",
        /// The request executes one backward step (in the given granularity) for the specified
        /// thread.
        StepBack(StepBackArguments) => "stepBack",
        /// The request resumes backward execution of all threads.
        ReverseContinue(ReverseContinueArguments) => "reverseContinue",
        /// The request restarts execution of the specified stack frame.
        RestartFrame(RestartFrameArguments) => "restartFrame",
        /// The request sets the location where the debuggee will continue to run.
        Goto(GotoArguments) => "goto",
        /// The request suspends the debuggee.
        Pause(PauseArguments) => "pause",
        /// The request returns a stacktrace from the current execution state of a given thread.
        StackTrace(StackTraceArguments) => "stackTrace",
        /// The request returns the variable scopes for a given stack frame ID.
        Scopes(ScopesArguments) => "scopes",
        /// Retrieves all child variables for the given variable reference.
        Variables(VariablesArguments) => "variables",
        /// Set the variable with the given name in the variable container to a new value.
        SetVariable(SetVariableArguments) => "setVariable",
        /// The request retrieves the source code for a given source reference.
        Source(SourceArguments) => "source",
        /// The request retrieves a list of all threads.
        Threads => "threads",
        /// The request terminates the threads with the given ids.
        TerminateThreads(TerminateThreadsArguments) => "terminateThreads",
        /// Modules can be retrieved from the debug adapter with this request which can either
        /// return all modules or a range of modules to support paging.
        Modules(Option<ModulesArguments>) => "modules",
        /// Retrieves the set of all sources currently loaded by the debugged process.
        LoadedSources(Option<LoadedSourcesArguments>) => "loadedSources",
        /// Evaluates the given expression in the context of a stack frame.
        Evaluate(EvaluateArguments) => "evaluate",
        /// Evaluates the given `value` expression and assigns it to the `expression` which must
        /// be a modifiable l-value.
        SetExpression(SetExpressionArguments) => "setExpression",
        /// This request retrieves the possible step-in targets for the specified stack frame.
        StepInTargets(StepInTargetsArguments) => "stepInTargets",
        /// This request retrieves the possible goto targets for the specified source location.
        GotoTargets(GotoTargetsArguments) => "gotoTargets",
        /// Returns a list of possible completions for a given caret position and text.
        Completions(CompletionsArguments) => "completions",
        /// Retrieves the details of the exception that caused this event to be raised.
        ExceptionInfo(ExceptionInfoArguments) => "exceptionInfo",
        /// Reads bytes from memory at the provided location.
        ReadMemory(ReadMemoryArguments) => "readMemory",
        /// Writes bytes to memory at the provided location.
        WriteMemory(WriteMemoryArguments) => "writeMemory",
        /// Disassembles code stored at the provided location.
        Disassemble(DisassembleArguments) => "disassemble",
        /// Looks up information about a location reference previously returned by the debug
        /// adapter.
        Locations(LocationsArguments) => "locations",
    }
}

/// A request from the client to the debug adapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    /// Sequence number of the message (also known as message ID).
    pub seq: i64,
    #[serde(rename = "type", deserialize_with = "MessageKind::deserialize_request")]
    pub kind: MessageKind,
    /// The command to execute, along with its arguments.
    #[serde(flatten)]
    pub command: Command,
}

impl Request {
    pub fn new(seq: i64, command: Command) -> Self {
        Self {
            seq,
            kind: MessageKind::Request,
            command,
        }
    }
}

impl WireField for Request {
    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        wire::check_tagged::<Command>(value, Self::SHAPE, Self::FIELDS, ("command", "arguments"))
    }
}

impl MessageShape for Request {
    const SHAPE: &'static str = "Request";
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
    fn decodes_initialize_request() {
        let request: Request = wire::decode(json!({
            "seq": 1,
            "type": "request",
            "command": "initialize",
            "arguments": {
                "clientID": "vscode",
                "adapterID": "mock",
                "linesStartAt1": true,
                "pathFormat": "path",
                "supportsANSIStyling": true,
            },
        }))
        .unwrap();
        assert_eq!(request.command.name(), "initialize");
        match request.command {
            Command::Initialize(arguments) => {
                assert_eq!(arguments.client_id.as_deref(), Some("vscode"));
                assert_eq!(arguments.adapter_id, "mock");
                assert_eq!(arguments.supports_ansi_styling, Some(true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_argument_field_names_the_arguments_shape() {
        let error = wire::decode::<Request>(json!({
            "seq": 1,
            "type": "request",
            "command": "initialize",
            "arguments": { "clientID": "vscode" },
        }))
        .unwrap_err();
        match error {
            DeserializationError::MissingRequiredField(missing) => {
                assert_eq!(missing.shape, "InitializeRequestArguments");
                assert_eq!(missing.field, "adapterID");
            }
            other => panic!("unexpected error: {other}"),
        }

        let error = wire::decode::<Request>(json!({ "type": "request", "command": "threads" }))
            .unwrap_err();
        assert!(matches!(
            error,
            DeserializationError::MissingRequiredField(MissingRequiredFieldError {
                shape: "Request",
                ..
            })
        ));
    }

    #[test]
    fn optional_arguments_may_be_omitted() {
        let request: Request = wire::decode(json!({
            "seq": 4,
            "type": "request",
            "command": "configurationDone",
        }))
        .unwrap();
        assert_eq!(request.command, Command::ConfigurationDone(None));

        let request: Request = wire::decode(json!({
            "seq": 5,
            "type": "request",
            "command": "configurationDone",
            "arguments": {},
        }))
        .unwrap();
        assert_eq!(
            request.command,
            Command::ConfigurationDone(Some(ConfigurationDoneArguments {}))
        );
    }

    #[test]
    fn absent_optional_arguments_are_left_out() {
        let request = Request::new(1, Command::ConfigurationDone(None));
        let encoded = wire::encode(&request).unwrap();
        assert_eq!(
            encoded,
            json!({ "seq": 1, "type": "request", "command": "configurationDone" })
        );
        assert_eq!(wire::decode::<Request>(encoded).unwrap(), request);

        let arguments = DisconnectArguments::builder().build().unwrap();
        let request = Request::new(2, Command::Disconnect(Some(arguments)));
        assert_eq!(
            wire::encode(&request).unwrap(),
            json!({ "seq": 2, "type": "request", "command": "disconnect", "arguments": {} })
        );
    }

    #[test]
    fn required_arguments_cannot_be_left_out() {
        for value in [
            json!({ "seq": 1, "type": "request", "command": "setBreakpoints" }),
            json!({ "seq": 1, "type": "request", "command": "setBreakpoints", "arguments": null }),
        ] {
            match wire::decode::<Request>(value).unwrap_err() {
                DeserializationError::MissingRequiredField(missing) => {
                    assert_eq!(missing.shape, "Request");
                    assert_eq!(missing.field, "arguments");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn other_message_types_are_not_requests() {
        let error = wire::decode::<Request>(json!({
            "seq": 1,
            "type": "event",
            "command": "threads",
        }))
        .unwrap_err();
        assert!(matches!(
            error,
            DeserializationError::MalformedWireValue { shape: "Request", .. }
        ));
    }

    #[test]
    fn threads_has_no_arguments() {
        let request = Request::new(7, Command::Threads);
        assert_eq!(
            wire::encode(&request).unwrap(),
            json!({ "seq": 7, "type": "request", "command": "threads" })
        );
        let decoded: Request = wire::decode(json!({
            "seq": 7,
            "type": "request",
            "command": "threads",
        }))
        .unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn launch_keeps_adapter_specific_properties() {
        let value = json!({
            "seq": 2,
            "type": "request",
            "command": "launch",
            "arguments": {
                "noDebug": true,
                "__restart": { "attempt": 2 },
                "program": "/bin/ls",
                "args": ["-l"],
                "stopOnEntry": false,
            },
        });
        let request: Request = wire::decode(value.clone()).unwrap();
        let Command::Launch(arguments) = &request.command else {
            panic!("unexpected command: {:?}", request.command);
        };
        assert_eq!(arguments.no_debug, Some(true));
        assert_eq!(arguments.restart, Some(AnyValue(json!({ "attempt": 2 }))));
        assert_eq!(arguments.property("program"), Some(&json!("/bin/ls")));
        assert!(!arguments.additional.contains_key("noDebug"));
        assert_eq!(wire::encode(&request).unwrap(), value);
    }

    #[test]
    fn set_breakpoints_arguments_round_trip() {
        let arguments = SetBreakpointsArguments::builder()
            .source(
                Source::builder()
                    .path("/tmp/a.py".to_string())
                    .build()
                    .unwrap(),
            )
            .breakpoints(vec![
                SourceBreakpoint::builder().line(3_i64).build().unwrap(),
                SourceBreakpoint::builder()
                    .line(9_i64)
                    .condition("x > 1".to_string())
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();
        let encoded = wire::encode(&arguments).unwrap();
        assert_eq!(
            encoded,
            json!({
                "source": { "path": "/tmp/a.py" },
                "breakpoints": [{ "line": 3 }, { "line": 9, "condition": "x > 1" }],
            })
        );
        assert_eq!(
            wire::decode::<SetBreakpointsArguments>(encoded).unwrap(),
            arguments
        );
    }

    #[test]
    fn unknown_command_is_malformed() {
        let error = wire::decode::<Request>(json!({
            "seq": 1,
            "type": "request",
            "command": "frobnicate",
        }))
        .unwrap_err();
        assert!(matches!(
            error,
            DeserializationError::MalformedWireValue { shape: "Request", .. }
        ));
    }

    #[test]
    fn command_names_match_the_wire() {
        let command = Command::SetInstructionBreakpoints(SetInstructionBreakpointsArguments {
            breakpoints: vec![],
        });
        assert_eq!(command.name(), "setInstructionBreakpoints");
        assert_eq!(Command::LoadedSources(None).name(), "loadedSources");
        assert_eq!(
            serde_json::to_value(Request::new(1, command)).unwrap(),
            json!({
                "seq": 1,
                "type": "request",
                "command": "setInstructionBreakpoints",
                "arguments": { "breakpoints": [] },
            })
        );
    }

    #[test]
    fn launch_arguments_render_all_fields() {
        let arguments = LaunchRequestArguments::default();
        assert_eq!(
            arguments.to_string(),
            "LaunchRequestArguments [no_debug=None, restart=None, additional={}]"
        );
    }
}
