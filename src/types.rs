use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::either::NumberOrString;

/// An arbitrary JSON value the protocol passes through without interpreting it.
///
/// Equality is structural. Hashing walks objects in key order so that it agrees with equality
/// regardless of how the map happens to be ordered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AnyValue(pub Value);

impl Hash for AnyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(number) => hash_number(number, state),
        Value::String(string) => string.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(entries) => {
            entries.len().hash(state);
            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (key, value) in entries {
                key.hash(state);
                hash_value(value, state);
            }
        }
    }
}

/// Integers and floats never compare equal, and floats compare with `==`, so `-0.0` hashes like
/// `0.0`.
fn hash_number<H: Hasher>(number: &Number, state: &mut H) {
    if let Some(unsigned) = number.as_u64() {
        (0u8, unsigned).hash(state);
    } else if let Some(signed) = number.as_i64() {
        (1u8, signed).hash(state);
    } else if let Some(float) = number.as_f64() {
        let float = if float == 0.0 { 0.0 } else { float };
        (2u8, float.to_bits()).hash(state);
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        AnyValue(value)
    }
}

/// A progress value in the range 0 to 100.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Percentage {}

impl Hash for Percentage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Percentage(value)
    }
}

wire_enum! {
    /// The `type` of a protocol message envelope.
    pub enum MessageKind {
        Request => "request",
        Response => "response",
        Event => "event",
    }
}

impl MessageKind {
    /// Reads a `type` field that must hold `expected`. Any other kind makes the envelope
    /// malformed.
    fn deserialize_expected<'de, D>(
        deserializer: D,
        expected: MessageKind,
    ) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let kind = MessageKind::deserialize(deserializer)?;
        if kind == expected {
            Ok(kind)
        } else {
            Err(serde::de::Error::custom(format!(
                "expected a message of type '{expected}', found '{kind}'"
            )))
        }
    }

    pub(crate) fn deserialize_request<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::deserialize_expected(deserializer, MessageKind::Request)
    }

    pub(crate) fn deserialize_response<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::deserialize_expected(deserializer, MessageKind::Response)
    }

    pub(crate) fn deserialize_event<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::deserialize_expected(deserializer, MessageKind::Event)
    }
}

wire_enum! {
    pub enum ColumnDescriptorType {
        String => "string",
        Number => "number",
        Boolean => "boolean",
        UnixTimestampUtc => "unixTimestampUTC",
    }
}

wire_enum! {
    /// Names of checksum algorithms that may be supported by a debug adapter.
    pub enum ChecksumAlgorithm {
        Md5 => "MD5",
        Sha1 => "SHA1",
        Sha256 => "SHA256",
        Timestamp => "timestamp",
    }
}

wire_enum! {
    pub enum SourcePresentationHint {
        Normal => "normal",
        Emphasize => "emphasize",
        /// The source is not available or is skipped on stepping.
        Deemphasize => "deemphasize",
    }
}

wire_enum! {
    pub enum StackFramePresentationHint {
        Normal => "normal",
        /// An artificial frame used as a visual label or separator.
        Label => "label",
        Subtle => "subtle",
    }
}

wire_enum! {
    /// This enumerates the possible access types for data breakpoints.
    pub enum DataBreakpointAccessType {
        Read => "read",
        Write => "write",
        ReadWrite => "readWrite",
    }
}

wire_enum! {
    /// Some predefined types for the CompletionItem. Please note that not all clients have
    /// specific icons for all of them.
    pub enum CompletionItemType {
        Method => "method",
        Function => "function",
        Constructor => "constructor",
        Field => "field",
        Variable => "variable",
        Class => "class",
        Interface => "interface",
        Module => "module",
        Property => "property",
        Unit => "unit",
        Value => "value",
        Enum => "enum",
        Keyword => "keyword",
        Snippet => "snippet",
        Text => "text",
        Color => "color",
        File => "file",
        Reference => "reference",
        CustomColor => "customcolor",
    }
}

wire_enum! {
    /// This enumeration defines all possible conditions when a thrown exception should result in
    /// a break.
    pub enum ExceptionBreakMode {
        /// Never breaks.
        Never => "never",
        /// Always breaks.
        Always => "always",
        /// Breaks when exception unhandled.
        Unhandled => "unhandled",
        /// Breaks if the exception is not handled by user code.
        UserUnhandled => "userUnhandled",
    }
}

wire_enum! {
    /// The granularity of one 'step' in the stepping requests `next`, `stepIn`, `stepOut`, and
    /// `stepBack`.
    pub enum SteppingGranularity {
        Statement => "statement",
        Line => "line",
        Instruction => "instruction",
    }
}

wire_enum! {
    pub enum DisassembledInstructionPresentationHint {
        Normal => "normal",
        /// The instruction has no meaning, e.g. padding or a failed decode.
        Invalid => "invalid",
    }
}

wire_enum! {
    /// Filter to limit the child variables to either named or indexed.
    pub enum VariablesArgumentsFilter {
        Indexed => "indexed",
        Named => "named",
    }
}

wire_enum! {
    pub enum OutputEventGroup {
        /// Start a new group in expanded mode.
        Start => "start",
        /// Start a new group in collapsed mode.
        StartCollapsed => "startCollapsed",
        /// End the current group and decrease the indentation of subsequent output events.
        End => "end",
    }
}

wire_enum! {
    pub enum ProcessEventStartMethod {
        Launch => "launch",
        Attach => "attach",
        AttachForSuspendedLaunch => "attachForSuspendedLaunch",
    }
}

wire_enum! {
    pub enum LoadedSourceEventReason {
        New => "new",
        Changed => "changed",
        Removed => "removed",
    }
}

wire_enum! {
    pub enum ModuleEventReason {
        New => "new",
        Changed => "changed",
        Removed => "removed",
    }
}

wire_enum! {
    pub enum RunInTerminalRequestArgumentsKind {
        Integrated => "integrated",
        External => "external",
    }
}

wire_enum! {
    pub enum StartDebuggingRequestKind {
        Launch => "launch",
        Attach => "attach",
    }
}

open_enum! {
    /// Format of paths sent by the client (`pathFormat` of `initialize`).
    pub mod path_format {
        PATH => "path",
        URI => "uri",
    }
}

open_enum! {
    /// Context in which an `evaluate` request is run.
    pub mod evaluate_context {
        /// Run in a watch.
        WATCH => "watch",
        /// Run from the REPL console.
        REPL => "repl",
        /// Run from a data hover.
        HOVER => "hover",
        /// Run to generate the value that will be stored in the clipboard.
        CLIPBOARD => "clipboard",
        /// Run to generate a value for the variables view.
        VARIABLES => "variables",
    }
}

open_enum! {
    pub mod scope_presentation_hint {
        /// Scope contains method arguments.
        ARGUMENTS => "arguments",
        /// Scope contains local variables.
        LOCALS => "locals",
        /// Scope contains registers.
        REGISTERS => "registers",
        /// Scope contains one or more return values.
        RETURN_VALUE => "returnValue",
    }
}

open_enum! {
    /// The kind of a variable.
    pub mod variable_presentation_hint_kind {
        PROPERTY => "property",
        METHOD => "method",
        CLASS => "class",
        DATA => "data",
        EVENT => "event",
        BASE_CLASS => "baseClass",
        INNER_CLASS => "innerClass",
        INTERFACE => "interface",
        MOST_DERIVED_CLASS => "mostDerivedClass",
        /// The object has been created by the debugger to group its children.
        VIRTUAL => "virtual",
        /// Deprecated in favor of the `lazy` attribute.
        DATA_BREAKPOINT => "dataBreakpoint",
    }
}

open_enum! {
    pub mod variable_presentation_hint_attributes {
        STATIC => "static",
        CONSTANT => "constant",
        READ_ONLY => "readOnly",
        RAW_STRING => "rawString",
        HAS_OBJECT_ID => "hasObjectId",
        CAN_HAVE_OBJECT_ID => "canHaveObjectId",
        HAS_SIDE_EFFECTS => "hasSideEffects",
        HAS_DATA_BREAKPOINT => "hasDataBreakpoint",
    }
}

open_enum! {
    pub mod variable_presentation_hint_visibility {
        PUBLIC => "public",
        PRIVATE => "private",
        PROTECTED => "protected",
        INTERNAL => "internal",
        FINAL => "final",
    }
}

open_enum! {
    /// Why an unverified breakpoint could not be set.
    pub mod breakpoint_reason {
        /// The breakpoint might be verified in the future, for example once a module loads.
        PENDING => "pending",
        FAILED => "failed",
    }
}

open_enum! {
    pub mod breakpoint_mode_applicability {
        SOURCE => "source",
        EXCEPTION => "exception",
        DATA => "data",
        INSTRUCTION => "instruction",
    }
}

open_enum! {
    pub mod breakpoint_event_reason {
        CHANGED => "changed",
        NEW => "new",
        REMOVED => "removed",
    }
}

open_enum! {
    pub mod stopped_event_reason {
        STEP => "step",
        BREAKPOINT => "breakpoint",
        EXCEPTION => "exception",
        PAUSE => "pause",
        ENTRY => "entry",
        GOTO => "goto",
        FUNCTION_BREAKPOINT => "function breakpoint",
        DATA_BREAKPOINT => "data breakpoint",
        INSTRUCTION_BREAKPOINT => "instruction breakpoint",
    }
}

open_enum! {
    pub mod thread_event_reason {
        STARTED => "started",
        EXITED => "exited",
    }
}

open_enum! {
    pub mod output_event_category {
        /// Show the output in the client's default message UI, e.g. a 'debug console'.
        CONSOLE => "console",
        /// A hint for the client to show the output in the client's UI for important and highly
        /// visible information.
        IMPORTANT => "important",
        STDOUT => "stdout",
        STDERR => "stderr",
        /// Send the output to telemetry instead of showing it to the user.
        TELEMETRY => "telemetry",
    }
}

open_enum! {
    /// Logical areas that can be invalidated by the `invalidated` event.
    pub mod invalidated_areas {
        ALL_AREAS => "all",
        STACKS => "stacks",
        THREADS => "threads",
        VARIABLES => "variables",
    }
}

open_enum! {
    /// Machine-readable reasons for an unsuccessful response.
    pub mod response_message {
        /// The request was cancelled.
        CANCELLED => "cancelled",
        /// The request may be retried once the adapter is in a 'stopped' state.
        NOT_STOPPED => "notStopped",
    }
}

message! {
    /// Information about the capabilities of a debug adapter.
    pub struct Capabilities {
        /// The debug adapter supports the `configurationDone` request.
        pub supports_configuration_done_request: Option<bool>,
        /// The debug adapter supports function breakpoints.
        pub supports_function_breakpoints: Option<bool>,
        /// The debug adapter supports conditional breakpoints.
        pub supports_conditional_breakpoints: Option<bool>,
        /// The debug adapter supports breakpoints that break execution after a specified number
        /// of hits.
        pub supports_hit_conditional_breakpoints: Option<bool>,
        /// The debug adapter supports a (side effect free) `evaluate` request for data hovers.
        pub supports_evaluate_for_hovers: Option<bool>,
        /// Available exception filter options for the `setExceptionBreakpoints` request.
        pub exception_breakpoint_filters: Option<Vec<ExceptionBreakpointsFilter>>,
        /// The debug adapter supports stepping back via the `stepBack` and `reverseContinue`
        /// requests.
        pub supports_step_back: Option<bool>,
        /// The debug adapter supports setting a variable to a value.
        pub supports_set_variable: Option<bool>,
        /// The debug adapter supports restarting a frame.
        pub supports_restart_frame: Option<bool>,
        /// The debug adapter supports the `gotoTargets` request.
        pub supports_goto_targets_request: Option<bool>,
        /// The debug adapter supports the `stepInTargets` request.
        pub supports_step_in_targets_request: Option<bool>,
        /// The debug adapter supports the `completions` request.
        pub supports_completions_request: Option<bool>,
        /// The set of characters that should trigger completion in a REPL. If not specified,
        /// the UI should assume the `.` character.
        pub completion_trigger_characters: Option<Vec<String>>,
        /// The debug adapter supports the `modules` request.
        pub supports_modules_request: Option<bool>,
        /// The set of additional module information exposed by the debug adapter.
        pub additional_module_columns: Option<Vec<ColumnDescriptor>>,
        /// Checksum algorithms supported by the debug adapter.
        pub supported_checksum_algorithms: Option<Vec<ChecksumAlgorithm>>,
        /// The debug adapter supports the `restart` request. In this case a client should not
        /// implement `restart` by terminating and relaunching the adapter but by calling the
        /// `restart` request.
        pub supports_restart_request: Option<bool>,
        /// The debug adapter supports `exceptionOptions` on the `setExceptionBreakpoints`
        /// request.
        pub supports_exception_options: Option<bool>,
        /// The debug adapter supports a `format` attribute on the `stackTrace`, `variables`,
        /// and `evaluate` requests.
        pub supports_value_formatting_options: Option<bool>,
        /// The debug adapter supports the `exceptionInfo` request.
        pub supports_exception_info_request: Option<bool>,
        /// The debug adapter supports the `terminateDebuggee` attribute on the `disconnect`
        /// request.
        pub support_terminate_debuggee: Option<bool>,
        /// The debug adapter supports the `suspendDebuggee` attribute on the `disconnect`
        /// request.
        pub support_suspend_debuggee: Option<bool>,
        /// The debug adapter supports the delayed loading of parts of the stack, which requires
        /// that both the `startFrame` and `levels` arguments and the `totalFrames` result of
        /// the `stackTrace` request are supported.
        pub supports_delayed_stack_trace_loading: Option<bool>,
        /// The debug adapter supports the `loadedSources` request.
        pub supports_loaded_sources_request: Option<bool>,
        /// The debug adapter supports log points by interpreting the `logMessage` attribute of
        /// the `SourceBreakpoint`.
        pub supports_log_points: Option<bool>,
        /// The debug adapter supports the `terminateThreads` request.
        pub supports_terminate_threads_request: Option<bool>,
        /// The debug adapter supports the `setExpression` request.
        pub supports_set_expression: Option<bool>,
        /// The debug adapter supports the `terminate` request.
        pub supports_terminate_request: Option<bool>,
        /// The debug adapter supports data breakpoints.
        pub supports_data_breakpoints: Option<bool>,
        /// The debug adapter supports the `readMemory` request.
        pub supports_read_memory_request: Option<bool>,
        /// The debug adapter supports the `writeMemory` request.
        pub supports_write_memory_request: Option<bool>,
        /// The debug adapter supports the `disassemble` request.
        pub supports_disassemble_request: Option<bool>,
        /// The debug adapter supports the `cancel` request.
        pub supports_cancel_request: Option<bool>,
        /// The debug adapter supports the `breakpointLocations` request.
        pub supports_breakpoint_locations_request: Option<bool>,
        /// The debug adapter supports the `clipboard` context value in the `evaluate` request.
        pub supports_clipboard_context: Option<bool>,
        /// The debug adapter supports stepping granularities (argument `granularity`) for the
        /// stepping requests.
        pub supports_stepping_granularity: Option<bool>,
        /// The debug adapter supports adding breakpoints based on instruction references.
        pub supports_instruction_breakpoints: Option<bool>,
        /// The debug adapter supports `filterOptions` as an argument on the
        /// `setExceptionBreakpoints` request.
        pub supports_exception_filter_options: Option<bool>,
        /// The debug adapter supports the `singleThread` property on the execution requests
        /// (`continue`, `next`, `stepIn`, `stepOut`, `reverseContinue`, `stepBack`).
        pub supports_single_thread_execution_requests: Option<bool>,
        /// The debug adapter supports the `asAddress` and `bytes` fields in the
        /// `dataBreakpointInfo` request.
        pub supports_data_breakpoint_bytes: Option<bool>,
        /// Modes of breakpoints supported by the debug adapter, such as 'hardware' or
        /// 'software'.
        pub breakpoint_modes: Option<Vec<BreakpointMode>>,
        /// The debug adapter supports ANSI escape sequences in styling of `OutputEvent.output`
        /// and `Variable.value` fields.
        pub supports_ansi_styling as "supportsANSIStyling": Option<bool>,
    }
}

message! {
    /// An option for configuring how exceptions are handled.
    pub struct ExceptionBreakpointsFilter {
        /// The internal ID of the filter option. This value is passed to the
        /// `setExceptionBreakpoints` request.
        pub filter: String,
        /// The name of the filter option. This is shown in the UI.
        pub label: String,
        /// A help text providing additional information about the exception filter.
        pub description: Option<String>,
        /// Initial value of the filter option. If not specified a value false is assumed.
        pub default_value as "default": Option<bool>,
        /// Controls whether a condition can be specified for this filter option.
        pub supports_condition: Option<bool>,
        /// A help text providing information about the condition. This string is shown as the
        /// placeholder text for a text box and can be translated.
        pub condition_description: Option<String>,
    }
}

message! {
    /// A structured message object, used to return errors from requests.
    pub struct Message {
        /// Unique (within a debug adapter implementation) identifier for the message.
        pub id: i64,
        /// A format string for the message. Embedded variables have the form `{name}`.
        /// If variable name starts with an underscore character, the variable does not contain
        /// user data (PII) and can be safely used for telemetry purposes.
        pub format: String,
        /// An object used as a dictionary for looking up the variables in the format string.
        pub variables: Option<BTreeMap<String, String>>,
        /// If true send to telemetry.
        pub send_telemetry: Option<bool>,
        /// If true show user.
        pub show_user: Option<bool>,
        /// A url where additional information about this message can be found.
        pub url: Option<String>,
        /// A label that is presented to the user as the UI for opening the url.
        pub url_label: Option<String>,
    }
}

message! {
    /// A Module object represents a row in the modules view.
    pub struct Module {
        /// Unique identifier for the module.
        pub id: NumberOrString,
        /// A name of the module.
        pub name: String,
        /// Logical full path to the module. The exact definition is implementation defined.
        pub path: Option<String>,
        /// True if the module is optimized.
        pub is_optimized: Option<bool>,
        /// True if the module is considered 'user code' by a debugger that supports 'Just My
        /// Code'.
        pub is_user_code: Option<bool>,
        /// Version of Module.
        pub version: Option<String>,
        /// User-understandable description of if symbols were found for the module (ex:
        /// 'Symbols Loaded', 'Symbols not found', etc.)
        pub symbol_status: Option<String>,
        /// Logical full path to the symbol file.
        pub symbol_file_path: Option<String>,
        /// Module created or modified, encoded as a RFC 3339 timestamp.
        pub date_time_stamp: Option<String>,
        /// Address range covered by this module.
        pub address_range: Option<String>,
    }
}

message! {
    /// A ColumnDescriptor specifies what module attribute to show in a column of the modules
    /// view, how to format it, and what the column's label should be.
    pub struct ColumnDescriptor {
        /// Name of the attribute rendered in this column.
        pub attribute_name: String,
        /// Header UI label of column.
        pub label: String,
        /// Format to use for the rendered values in this column.
        pub format: Option<String>,
        /// Datatype of values in this column. Defaults to `string` if not specified.
        pub type_field as "type": Option<ColumnDescriptorType>,
        /// Width of this column in characters (hint only).
        pub width: Option<i64>,
    }
}

message! {
    pub struct Thread {
        /// Unique identifier for the thread.
        pub id: i64,
        /// The name of the thread.
        pub name: String,
    }
}

message! {
    /// A Source is a descriptor for source code.
    ///
    /// It is returned from the debug adapter as part of a StackFrame and it is used by clients
    /// when specifying breakpoints.
    pub struct Source {
        /// The short name of the source. Every source returned from the debug adapter has a
        /// name. When sending a source to the debug adapter this name is optional.
        pub name: Option<String>,
        /// The path of the source to be shown in the UI. It is only used to locate and load the
        /// content of the source if no `sourceReference` is specified (or its value is 0).
        pub path: Option<String>,
        /// If the value > 0 the contents of the source must be retrieved through the `source`
        /// request (even if a path is specified).
        pub source_reference: Option<i64>,
        pub presentation_hint: Option<SourcePresentationHint>,
        /// The origin of this source. For example, 'internal module', 'inlined content from
        /// source map', etc.
        pub origin: Option<String>,
        /// A list of sources that are related to this source.
        pub sources: Option<Vec<Source>>,
        /// Additional data that a debug adapter might want to loop through the client. The
        /// client should leave the data intact and persist it across sessions.
        pub adapter_data: Option<AnyValue>,
        /// The checksums associated with this file.
        pub checksums: Option<Vec<Checksum>>,
    }
}

message! {
    /// A Stackframe contains the source location.
    pub struct StackFrame {
        /// An identifier for the stack frame. It must be unique across all threads.
        pub id: i64,
        /// The name of the stack frame, typically a method name.
        pub name: String,
        /// The source of the frame.
        pub source: Option<Source>,
        /// The line within the source of the frame. If the source attribute is missing or
        /// doesn't exist, `line` is 0 and should be ignored by the client.
        pub line: i64,
        /// Start position of the range covered by the stack frame.
        pub column: i64,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
        /// Indicates whether this frame can be restarted with the `restartFrame` request.
        pub can_restart: Option<bool>,
        /// A memory reference for the current instruction pointer in this frame.
        pub instruction_pointer_reference: Option<String>,
        /// The module associated with this frame, if any.
        pub module_id: Option<NumberOrString>,
        pub presentation_hint: Option<StackFramePresentationHint>,
    }
}

message! {
    /// A Scope is a named container for variables. Optionally a scope can map to a source or a
    /// range within a source.
    pub struct Scope {
        /// Name of the scope such as 'Arguments', 'Locals', or 'Registers'.
        pub name: String,
        /// A hint for how to present this scope in the UI. See [`scope_presentation_hint`].
        pub presentation_hint: Option<String>,
        /// The variables of this scope can be retrieved by passing the value of
        /// `variablesReference` to the `variables` request.
        pub variables_reference: i64,
        /// The number of named variables in this scope.
        pub named_variables: Option<i64>,
        /// The number of indexed variables in this scope.
        pub indexed_variables: Option<i64>,
        /// If true, the number of variables in this scope is large or expensive to retrieve.
        pub expensive: bool,
        pub source: Option<Source>,
        pub line: Option<i64>,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
    }
}

message! {
    /// A Variable is a name/value pair.
    pub struct Variable {
        /// The variable's name.
        pub name: String,
        /// The variable's value. This can be a multi-line text, e.g. for a function the body of
        /// a function.
        pub value: String,
        /// The type of the variable's value. Typically shown in the UI when hovering over the
        /// value.
        pub type_field as "type": Option<String>,
        /// Properties of a variable that can be used to determine how to render the variable in
        /// the UI.
        pub presentation_hint: Option<VariablePresentationHint>,
        /// The evaluatable name of this variable which can be passed to the `evaluate` request
        /// to fetch the variable's value.
        pub evaluate_name: Option<String>,
        /// If `variablesReference` is > 0, the variable is structured and its children can be
        /// retrieved by passing `variablesReference` to the `variables` request.
        pub variables_reference: i64,
        pub named_variables: Option<i64>,
        pub indexed_variables: Option<i64>,
        /// A memory reference associated with this variable.
        pub memory_reference: Option<String>,
        /// A reference that allows the client to request the location where the variable is
        /// declared.
        pub declaration_location_reference: Option<i64>,
        /// A reference that allows the client to request the location where the variable's
        /// value is declared.
        pub value_location_reference: Option<i64>,
    }
}

message! {
    /// Properties of a variable that can be used to determine how to render the variable in the
    /// UI.
    pub struct VariablePresentationHint {
        /// See [`variable_presentation_hint_kind`].
        pub kind: Option<String>,
        /// See [`variable_presentation_hint_attributes`].
        pub attributes: Option<Vec<String>>,
        /// See [`variable_presentation_hint_visibility`].
        pub visibility: Option<String>,
        /// If true, clients can present the variable with a UI that supports a specific gesture
        /// to trigger its evaluation.
        pub lazy: Option<bool>,
    }
}

message! {
    /// Properties of a breakpoint location returned from the `breakpointLocations` request.
    pub struct BreakpointLocation {
        pub line: i64,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
    }
}

message! {
    /// Properties of a breakpoint or logpoint passed to the `setBreakpoints` request.
    pub struct SourceBreakpoint {
        /// The source line of the breakpoint or logpoint.
        pub line: i64,
        /// Start position within source line of the breakpoint or logpoint.
        pub column: Option<i64>,
        /// The expression for conditional breakpoints.
        pub condition: Option<String>,
        /// The expression that controls how many hits of the breakpoint are ignored.
        pub hit_condition: Option<String>,
        /// If this attribute exists and is non-empty, the debug adapter must not 'break' (stop)
        /// but log the message instead. Expressions within `{}` are interpolated.
        pub log_message: Option<String>,
        /// The mode of this breakpoint. If defined, this must be one of the `breakpointModes`
        /// the debug adapter advertised in its `Capabilities`.
        pub mode: Option<String>,
    }
}

message! {
    /// Properties of a breakpoint passed to the `setFunctionBreakpoints` request.
    pub struct FunctionBreakpoint {
        /// The name of the function.
        pub name: String,
        pub condition: Option<String>,
        pub hit_condition: Option<String>,
    }
}

message! {
    /// Properties of a data breakpoint passed to the `setDataBreakpoints` request.
    pub struct DataBreakpoint {
        /// An id representing the data. This id is returned from the `dataBreakpointInfo`
        /// request.
        pub data_id: String,
        /// The access type of the data.
        pub access_type: Option<DataBreakpointAccessType>,
        pub condition: Option<String>,
        pub hit_condition: Option<String>,
    }
}

message! {
    /// Properties of a breakpoint passed to the `setInstructionBreakpoints` request
    pub struct InstructionBreakpoint {
        /// The instruction reference of the breakpoint.
        pub instruction_reference: String,
        /// The offset from the instruction reference in bytes. This can be negative.
        pub offset: Option<i64>,
        pub condition: Option<String>,
        pub hit_condition: Option<String>,
        pub mode: Option<String>,
    }
}

message! {
    /// Information about a breakpoint created in `setBreakpoints`, `setFunctionBreakpoints`,
    /// `setInstructionBreakpoints`, or `setDataBreakpoints` requests.
    pub struct Breakpoint {
        /// The identifier for the breakpoint. It is needed if breakpoint events are used to
        /// update or remove breakpoints.
        pub id: Option<i64>,
        /// If true, the breakpoint could be set (but not necessarily at the desired location).
        pub verified: bool,
        /// A message about the state of the breakpoint. This is shown to the user and can be
        /// used to explain why a breakpoint could not be verified.
        pub message: Option<String>,
        /// The source where the breakpoint is located.
        pub source: Option<Source>,
        /// The start line of the actual range covered by the breakpoint.
        pub line: Option<i64>,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
        /// A memory reference to where the breakpoint is set.
        pub instruction_reference: Option<String>,
        /// The offset from the instruction reference. This can be negative.
        pub offset: Option<i64>,
        /// A machine-readable explanation of why a breakpoint may not be verified. See
        /// [`breakpoint_reason`].
        pub reason: Option<String>,
    }
}

message! {
    /// A `BreakpointMode` is provided as a option when setting breakpoints on sources or
    /// instructions.
    pub struct BreakpointMode {
        /// The internal ID of the mode. This value is passed to the `setBreakpoints` request.
        pub mode: String,
        /// The name of the breakpoint mode. This is shown in the UI.
        pub label: String,
        /// A help text providing additional information about the breakpoint mode.
        pub description: Option<String>,
        /// Describes one or more type of breakpoint this mode applies to. See
        /// [`breakpoint_mode_applicability`].
        pub applies_to: Vec<String>,
    }
}

message! {
    /// A `StepInTarget` can be used in the `stepIn` request and determines into which single
    /// target the `stepIn` request should step.
    pub struct StepInTarget {
        pub id: i64,
        /// The name of the step-in target (shown in the UI).
        pub label: String,
        pub line: Option<i64>,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
    }
}

message! {
    /// A `GotoTarget` describes a code location that can be used as a target in the `goto`
    /// request.
    pub struct GotoTarget {
        /// Unique identifier for a goto target. This is used in the `goto` request.
        pub id: i64,
        /// The name of the goto target (shown in the UI).
        pub label: String,
        pub line: i64,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
        /// A memory reference for the instruction pointer value represented by this target.
        pub instruction_pointer_reference: Option<String>,
    }
}

message! {
    /// `CompletionItems` are the suggestions returned from the `completions` request.
    pub struct CompletionItem {
        /// The label of this completion item. By default this is also the text that is
        /// inserted when selecting this completion.
        pub label: String,
        /// If text is returned and not an empty string, then it is inserted instead of the
        /// label.
        pub text: Option<String>,
        /// A string that should be used when comparing this item with other items.
        pub sort_text: Option<String>,
        /// A human-readable string with additional information about this item, like type or
        /// symbol information.
        pub detail: Option<String>,
        /// The item's type. Typically the client uses this information to render the item in
        /// the UI with an icon.
        pub type_field as "type": Option<CompletionItemType>,
        /// Start position (within the `text` attribute of the `completions` request) where the
        /// completion text is added.
        pub start: Option<i64>,
        /// Length determines how many characters are overwritten by the completion text.
        pub length: Option<i64>,
        pub selection_start: Option<i64>,
        pub selection_length: Option<i64>,
    }
}

message! {
    /// The checksum of an item calculated by the specified algorithm.
    pub struct Checksum {
        pub algorithm: ChecksumAlgorithm,
        /// Value of the checksum, encoded as a hexadecimal value.
        pub checksum: String,
    }
}

message! {
    /// Provides formatting information for a value.
    pub struct ValueFormat {
        /// Display the value in hex.
        pub hex: Option<bool>,
    }
}

message! {
    /// Provides formatting information for a stack frame.
    pub struct StackFrameFormat {
        /// Display the value in hex.
        pub hex: Option<bool>,
        /// Displays parameters for the stack frame.
        pub parameters: Option<bool>,
        /// Displays the types of parameters for the stack frame.
        pub parameter_types: Option<bool>,
        /// Displays the names of parameters for the stack frame.
        pub parameter_names: Option<bool>,
        /// Displays the values of parameters for the stack frame.
        pub parameter_values: Option<bool>,
        /// Displays the line number of the stack frame.
        pub line: Option<bool>,
        /// Displays the module of the stack frame.
        pub module: Option<bool>,
        /// Includes all stack frames, including those the debug adapter might otherwise hide.
        pub include_all: Option<bool>,
    }
}

message! {
    /// An `ExceptionFilterOptions` is used to specify an exception filter together with a
    /// condition for the `setExceptionBreakpoints` request.
    pub struct ExceptionFilterOptions {
        /// ID of an exception filter returned by the `exceptionBreakpointFilters` capability.
        pub filter_id: String,
        /// An expression for conditional exceptions.
        pub condition: Option<String>,
        /// The mode of this exception breakpoint.
        pub mode: Option<String>,
    }
}

message! {
    /// An `ExceptionOptions` assigns configuration options to a set of exceptions.
    pub struct ExceptionOptions {
        /// A path that selects a single or multiple exceptions in a tree. If `path` is missing,
        /// the whole tree is selected.
        pub path: Option<Vec<ExceptionPathSegment>>,
        /// Condition when a thrown exception should result in a break.
        pub break_mode: ExceptionBreakMode,
    }
}

message! {
    /// An `ExceptionPathSegment` represents a segment in a path that is used to match leafs or
    /// nodes in a tree of exceptions.
    ///
    /// If a segment consists of more than one name, it matches the names provided if `negate`
    /// is false or missing, or it matches anything except the names provided if `negate` is
    /// true.
    pub struct ExceptionPathSegment {
        pub negate: Option<bool>,
        /// Depending on the value of `negate` the names that should match or not match.
        pub names: Vec<String>,
    }
}

message! {
    /// Detailed information about an exception that has occurred.
    pub struct ExceptionDetails {
        /// Message contained in the exception.
        pub message: Option<String>,
        /// Short type name of the exception object.
        pub type_name: Option<String>,
        /// Fully-qualified type name of the exception object.
        pub full_type_name: Option<String>,
        /// An expression that can be evaluated in the current scope to obtain the exception
        /// object.
        pub evaluate_name: Option<String>,
        /// Stack trace at the time the exception was thrown.
        pub stack_trace: Option<String>,
        /// Details of the exception contained by this exception, if any.
        pub inner_exception: Option<Vec<ExceptionDetails>>,
    }
}

message! {
    /// Represents a single disassembled instruction.
    pub struct DisassembledInstruction {
        /// The address of the instruction. Treated as a hex value if prefixed with `0x`, or as
        /// a decimal value otherwise.
        pub address: String,
        /// Raw bytes representing the instruction and its operands, in an
        /// implementation-defined format.
        pub instruction_bytes: Option<String>,
        /// Text representing the instruction and its operands, in an implementation-defined
        /// format.
        pub instruction: String,
        /// Name of the symbol that corresponds with the location of this instruction, if any.
        pub symbol: Option<String>,
        /// Source location that corresponds to this instruction, if any.
        pub location: Option<Source>,
        pub line: Option<i64>,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
        pub presentation_hint: Option<DisassembledInstructionPresentationHint>,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::str::FromStr;

    use serde_json::json;

    use super::*;
    use crate::errors::{DeserializationError, MissingRequiredFieldError};
    use crate::wire;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn example_breakpoint() -> Breakpoint {
        Breakpoint::builder()
            .verified(true)
            .line(42_i64)
            .source(
                Source::builder()
                    .path("/tmp/a.py".to_string())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn breakpoint_example_round_trips() {
        init_logging();
        let breakpoint = example_breakpoint();
        let encoded = wire::encode(&breakpoint).unwrap();
        assert_eq!(
            encoded,
            json!({ "verified": true, "line": 42, "source": { "path": "/tmp/a.py" } })
        );
        assert!(encoded.get("id").is_none());

        let decoded: Breakpoint = wire::decode(encoded).unwrap();
        assert_eq!(decoded, breakpoint);
    }

    #[test]
    fn builder_reports_missing_required_field() {
        let error = Breakpoint::builder().line(1_i64).build().unwrap_err();
        assert_eq!(error, MissingRequiredFieldError::new("Breakpoint", "verified"));

        let error = Checksum::builder()
            .algorithm(ChecksumAlgorithm::Sha256)
            .build()
            .unwrap_err();
        assert_eq!(error.field, "checksum");
    }

    #[test]
    fn renamed_fields_use_their_wire_names() {
        let filter = ExceptionBreakpointsFilter::builder()
            .filter("uncaught".to_string())
            .label("Uncaught Exceptions".to_string())
            .default_value(true)
            .build()
            .unwrap();
        assert_eq!(
            wire::encode(&filter).unwrap(),
            json!({ "filter": "uncaught", "label": "Uncaught Exceptions", "default": true })
        );

        let error = ExceptionBreakpointsFilter::builder().build().unwrap_err();
        assert_eq!(error.field, "filter");

        let capabilities = Capabilities::builder()
            .supports_ansi_styling(true)
            .build()
            .unwrap();
        assert_eq!(
            wire::encode(&capabilities).unwrap(),
            json!({ "supportsANSIStyling": true })
        );

        let column: ColumnDescriptor = wire::decode(json!({
            "attributeName": "size",
            "label": "Size",
            "type": "unixTimestampUTC",
        }))
        .unwrap();
        assert_eq!(column.type_field, Some(ColumnDescriptorType::UnixTimestampUtc));
    }

    #[test]
    fn empty_is_not_absent() {
        let empty: ExceptionOptions = wire::decode(json!({ "path": [], "breakMode": "never" }))
            .unwrap();
        let absent: ExceptionOptions = wire::decode(json!({ "breakMode": "never" })).unwrap();
        assert_eq!(empty.path, Some(vec![]));
        assert_eq!(absent.path, None);
        assert_ne!(empty, absent);
        assert_eq!(
            wire::encode(&empty).unwrap(),
            json!({ "path": [], "breakMode": "never" })
        );

        let message = Message::builder()
            .id(1_i64)
            .format("failed".to_string())
            .variables(BTreeMap::<String, String>::new())
            .build()
            .unwrap();
        assert_eq!(
            wire::encode(&message).unwrap(),
            json!({ "id": 1, "format": "failed", "variables": {} })
        );
    }

    #[test]
    fn maximal_stack_frame_round_trips() {
        let value = json!({
            "id": 1000,
            "name": "main",
            "source": {
                "name": "main.rs",
                "path": "/src/main.rs",
                "sourceReference": 0,
                "presentationHint": "emphasize",
                "origin": "inlined",
                "sources": [{ "name": "generated.rs" }],
                "adapterData": { "cookie": [1, 2.5, null] },
                "checksums": [{ "algorithm": "SHA256", "checksum": "abcd" }],
            },
            "line": 12,
            "column": 4,
            "endLine": 12,
            "endColumn": 9,
            "canRestart": false,
            "instructionPointerReference": "0x1000",
            "moduleId": "core",
            "presentationHint": "subtle",
        });
        let frame: StackFrame = wire::decode(value.clone()).unwrap();
        assert_eq!(frame.module_id, Some(NumberOrString::from("core")));
        assert_eq!(wire::encode(&frame).unwrap(), value);
    }

    #[test]
    fn module_id_keeps_its_alternative() {
        let numeric: Module = wire::decode(json!({ "id": 1, "name": "a" })).unwrap();
        let textual: Module = wire::decode(json!({ "id": "1", "name": "a" })).unwrap();
        assert!(numeric.id.is_number());
        assert!(textual.id.is_string());
        assert_ne!(numeric, textual);
        assert_eq!(wire::encode(&textual).unwrap(), json!({ "id": "1", "name": "a" }));
    }

    #[test]
    fn open_enum_values_pass_through() {
        let value = json!({
            "name": "Thread-local Storage",
            "presentationHint": "threadLocals",
            "variablesReference": 0,
            "expensive": true,
        });
        let scope: Scope = wire::decode(value.clone()).unwrap();
        assert_eq!(scope.presentation_hint.as_deref(), Some("threadLocals"));
        assert!(!scope_presentation_hint::is_well_known("threadLocals"));
        assert!(scope_presentation_hint::is_well_known(
            scope_presentation_hint::LOCALS
        ));
        assert_eq!(wire::encode(&scope).unwrap(), value);
    }

    #[test]
    fn closed_enums_reject_unknown_literals() {
        assert_eq!(
            ExceptionBreakMode::from_str("userUnhandled").unwrap(),
            ExceptionBreakMode::UserUnhandled
        );
        assert!(matches!(
            ChecksumAlgorithm::from_str("md5"),
            Err(DeserializationError::StringToEnumParseError { .. })
        ));

        let error = wire::decode::<Checksum>(json!({ "algorithm": "CRC32", "checksum": "00" }))
            .unwrap_err();
        assert!(matches!(
            error,
            DeserializationError::MalformedWireValue { shape: "Checksum", .. }
        ));

        for kind in CompletionItemType::ALL {
            assert_eq!(CompletionItemType::from_str(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn large_integers_are_not_clamped() {
        let thread: Thread = wire::decode(json!({ "id": 4_294_967_296_i64, "name": "t" }))
            .unwrap();
        assert_eq!(thread.id, 4_294_967_296);
    }

    #[test]
    fn equal_values_hash_equally() {
        let a = example_breakpoint();
        let b = Breakpoint::builder()
            .source(
                Source::builder()
                    .path("/tmp/a.py".to_string())
                    .build()
                    .unwrap(),
            )
            .line(42_i64)
            .verified(true)
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let left = AnyValue(json!({ "a": 1, "b": [true, "x"] }));
        let right = AnyValue(serde_json::from_str(r#"{"b":[true,"x"],"a":1}"#).unwrap());
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(AnyValue(json!(1)), AnyValue(json!(1.0)));

        let zero = AnyValue(json!(0.0));
        let negative_zero = AnyValue(json!(-0.0));
        assert_eq!(zero, negative_zero);
        assert_eq!(hash_of(&zero), hash_of(&negative_zero));
        assert_eq!(hash_of(&AnyValue(json!(-3))), hash_of(&AnyValue(json!(-3))));

        assert_eq!(Percentage(12.5), Percentage(12.5));
        assert_eq!(hash_of(&Percentage(12.5)), hash_of(&Percentage(12.5)));
    }

    #[test]
    fn display_lists_every_field_in_order() {
        let thread = Thread::builder()
            .id(1_i64)
            .name("main".to_string())
            .build()
            .unwrap();
        assert_eq!(thread.to_string(), r#"Thread [id=1, name="main"]"#);

        let segment = ExceptionPathSegment::builder()
            .names(vec!["IOError".to_string()])
            .build()
            .unwrap();
        assert_eq!(
            segment.to_string(),
            r#"ExceptionPathSegment [negate=None, names=["IOError"]]"#
        );
    }

    #[test]
    fn unset_optional_field_can_be_cleared_again() {
        let mut breakpoint = example_breakpoint();
        breakpoint.message = Some("moved".to_string());
        breakpoint.message = None;
        assert_eq!(breakpoint, example_breakpoint());
    }
}
