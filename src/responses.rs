use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DeserializationError, MissingRequiredFieldError};
use crate::requests::Request;
use crate::types::{
    response_message, AnyValue, Breakpoint, BreakpointLocation, CompletionItem,
    DataBreakpointAccessType, DisassembledInstruction, ExceptionBreakMode, ExceptionDetails,
    GotoTarget, Message, MessageKind, Module, Scope, Source, StackFrame, StepInTarget, Thread,
    Variable, VariablePresentationHint,
};
use crate::wire::{self, FieldSpec, MessageShape, WireField};

message! {
    /// Body of an unsuccessful response.
    pub struct ErrorResponse {
        /// A structured error message.
        pub error: Option<Message>,
    }
}

message! {
    pub struct BreakpointLocationsResponse {
        /// Sorted set of possible breakpoint locations.
        pub breakpoints: Vec<BreakpointLocation>,
    }
}

message! {
    pub struct CompletionsResponse {
        /// The possible completions.
        pub targets: Vec<CompletionItem>,
    }
}

message! {
    pub struct ContinueResponse {
        /// The value true (or a missing property) signals to the client that all threads have
        /// been resumed. The value false indicates that not all threads were resumed.
        pub all_threads_continued: Option<bool>,
    }
}

message! {
    pub struct DataBreakpointInfoResponse {
        /// An identifier for the data on which a data breakpoint can be registered with the
        /// `setDataBreakpoints` request, or absent if no data breakpoint is available.
        pub data_id: Option<String>,
        /// UI string that describes on what data the breakpoint is set on or why a data
        /// breakpoint is not available.
        pub description: String,
        /// Attribute lists the available access types for a potential data breakpoint.
        pub access_types: Option<Vec<DataBreakpointAccessType>>,
        /// Attribute indicates that a potential data breakpoint could be persisted across
        /// sessions.
        pub can_persist: Option<bool>,
    }
}

message! {
    pub struct DisassembleResponse {
        /// The list of disassembled instructions.
        pub instructions: Vec<DisassembledInstruction>,
    }
}

message! {
    pub struct EvaluateResponse {
        /// The result of the evaluate request.
        pub result: String,
        /// The type of the evaluate result.
        pub type_field as "type": Option<String>,
        /// Properties of an evaluate result that can be used to determine how to render the
        /// result in the UI.
        pub presentation_hint: Option<VariablePresentationHint>,
        /// If `variablesReference` is > 0, the evaluate result is structured and its children
        /// can be retrieved by passing `variablesReference` to the `variables` request.
        pub variables_reference: i64,
        pub named_variables: Option<i64>,
        pub indexed_variables: Option<i64>,
        /// A memory reference to a location appropriate for this result.
        pub memory_reference: Option<String>,
        /// A reference that allows the client to request the location where the returned
        /// value is declared.
        pub value_location_reference: Option<i64>,
    }
}

message! {
    pub struct ExceptionInfoResponse {
        /// ID of the exception that was thrown.
        pub exception_id: String,
        /// Descriptive text for the exception.
        pub description: Option<String>,
        /// Mode that caused the exception notification to be raised.
        pub break_mode: ExceptionBreakMode,
        /// Detailed information about the exception.
        pub details: Option<ExceptionDetails>,
    }
}

message! {
    pub struct GotoTargetsResponse {
        /// The possible goto targets of the specified location.
        pub targets: Vec<GotoTarget>,
    }
}

message! {
    pub struct LoadedSourcesResponse {
        /// Set of loaded sources.
        pub sources: Vec<Source>,
    }
}

message! {
    pub struct LocationsResponse {
        /// The source containing the location; either `source.path` or
        /// `source.sourceReference` must be specified.
        pub source: Source,
        /// The line number of the location.
        pub line: i64,
        pub column: Option<i64>,
        pub end_line: Option<i64>,
        pub end_column: Option<i64>,
    }
}

message! {
    pub struct ModulesResponse {
        /// All modules or range of modules.
        pub modules: Vec<Module>,
        /// The total number of modules available.
        pub total_modules: Option<i64>,
    }
}

message! {
    pub struct ReadMemoryResponse {
        /// The address of the first byte of data returned. Treated as a hex value if prefixed
        /// with `0x`, or as a decimal value otherwise.
        pub address: String,
        /// The number of unreadable bytes encountered after the last successfully read byte.
        pub unreadable_bytes: Option<i64>,
        /// The bytes read from memory, encoded using base64. If the decoded length of `data` is
        /// less than the requested `count` in the original `readMemory` request, and
        /// `unreadableBytes` is zero or omitted, then the client should assume it's reached the
        /// end of readable memory.
        pub data: Option<String>,
    }
}

message! {
    pub struct ScopesResponse {
        /// The scopes of the stack frame. If the array has length zero, there are no scopes
        /// available.
        pub scopes: Vec<Scope>,
    }
}

message! {
    pub struct SetBreakpointsResponse {
        /// Information about the breakpoints. The array elements are in the same order as the
        /// elements of the `breakpoints` (or the deprecated `lines`) array in the arguments.
        pub breakpoints: Vec<Breakpoint>,
    }
}

message! {
    pub struct SetDataBreakpointsResponse {
        /// Information about the data breakpoints. The array elements correspond to the
        /// elements of the input argument `breakpoints` array.
        pub breakpoints: Vec<Breakpoint>,
    }
}

message! {
    pub struct SetExceptionBreakpointsResponse {
        /// Information about the exception breakpoints or filters.
        pub breakpoints: Option<Vec<Breakpoint>>,
    }
}

message! {
    pub struct SetExpressionResponse {
        /// The new value of the expression.
        pub value: String,
        /// The type of the value.
        pub type_field as "type": Option<String>,
        pub presentation_hint: Option<VariablePresentationHint>,
        pub variables_reference: Option<i64>,
        pub named_variables: Option<i64>,
        pub indexed_variables: Option<i64>,
        pub memory_reference: Option<String>,
        pub value_location_reference: Option<i64>,
    }
}

message! {
    pub struct SetFunctionBreakpointsResponse {
        /// Information about the breakpoints. The array elements correspond to the elements of
        /// the `breakpoints` array.
        pub breakpoints: Vec<Breakpoint>,
    }
}

message! {
    pub struct SetInstructionBreakpointsResponse {
        /// Information about the breakpoints. The array elements correspond to the elements of
        /// the `breakpoints` array.
        pub breakpoints: Vec<Breakpoint>,
    }
}

message! {
    pub struct SetVariableResponse {
        /// The new value of the variable.
        pub value: String,
        /// The type of the new value.
        pub type_field as "type": Option<String>,
        /// If `variablesReference` is > 0, the new value is structured and its children can be
        /// retrieved by passing `variablesReference` to the `variables` request.
        pub variables_reference: Option<i64>,
        pub named_variables: Option<i64>,
        pub indexed_variables: Option<i64>,
        pub memory_reference: Option<String>,
        pub value_location_reference: Option<i64>,
    }
}

message! {
    pub struct SourceResponse {
        /// Content of the source reference.
        pub content: String,
        /// Content type (MIME type) of the source.
        pub mime_type: Option<String>,
    }
}

message! {
    pub struct StackTraceResponse {
        /// The frames of the stack frame. If the array has length zero, there are no stack
        /// frames available.
        pub stack_frames: Vec<StackFrame>,
        /// The total number of frames available in the stack.
        pub total_frames: Option<i64>,
    }
}

message! {
    pub struct StepInTargetsResponse {
        /// The possible step-in targets of the specified source location.
        pub targets: Vec<StepInTarget>,
    }
}

message! {
    pub struct ThreadsResponse {
        /// All threads.
        pub threads: Vec<Thread>,
    }
}

message! {
    pub struct VariablesResponse {
        /// All (or a range) of variables for the given variable reference.
        pub variables: Vec<Variable>,
    }
}

message! {
    pub struct WriteMemoryResponse {
        /// Property that should be returned when `allowPartial` is true to indicate the offset
        /// of the first byte of data successfully written. Can be negative.
        pub offset: Option<i64>,
        /// Property that should be returned when `allowPartial` is true to indicate the number
        /// of bytes starting from address that were successfully written.
        pub bytes_written: Option<i64>,
    }
}

/// Response for a request.
///
/// The body is kept as raw JSON, since its shape depends on the command and, for unsuccessful
/// responses, may be an [`ErrorResponse`]. Use [`Response::body`] to decode it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Response {
    /// Sequence number of the message.
    pub seq: i64,
    #[serde(rename = "type", deserialize_with = "MessageKind::deserialize_response")]
    pub kind: MessageKind,
    /// Sequence number of the corresponding request.
    pub request_seq: i64,
    /// Outcome of the request. If true, the request was successful and the `body` attribute may
    /// contain the result of the request. If the value is false, the attribute `message`
    /// contains the error in short form and the `body` may contain additional information.
    pub success: bool,
    /// The command requested.
    pub command: String,
    /// Contains the raw error in short form if `success` is false. See [`response_message`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Contains request result if success is true and error details if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<AnyValue>,
}

impl Response {
    /// Sequence numbers of outgoing responses are left at 0; numbering them is up to whoever
    /// writes them out.
    fn answering(request: &Request, success: bool) -> Self {
        Self {
            seq: 0,
            kind: MessageKind::Response,
            request_seq: request.seq,
            success,
            command: request.command.name().to_string(),
            message: None,
            body: None,
        }
    }

    /// Create a successful response for a given request carrying `body`.
    pub fn make_success<T: MessageShape>(
        request: &Request,
        body: &T,
    ) -> Result<Self, DeserializationError> {
        Ok(Self {
            body: Some(AnyValue(wire::encode(body)?)),
            ..Self::answering(request, true)
        })
    }

    /// Create an acknowledgement response. This is a shorthand for responding to requests
    /// where the response does not require a body.
    pub fn make_ack(request: &Request) -> Self {
        Self::answering(request, true)
    }

    /// Create an error response with `error` as the short error message.
    pub fn make_error(request: &Request, error: &str) -> Self {
        Self {
            message: Some(error.to_string()),
            ..Self::answering(request, false)
        }
    }

    /// Like [`Response::make_error`], with a structured message shown to the user.
    pub fn make_error_details(
        request: &Request,
        error: &str,
        details: Message,
    ) -> Result<Self, DeserializationError> {
        let body = ErrorResponse {
            error: Some(details),
        };
        Ok(Self {
            message: Some(error.to_string()),
            body: Some(AnyValue(wire::encode(&body)?)),
            ..Self::answering(request, false)
        })
    }

    /// Create a cancellation response for the given request.
    pub fn make_cancel(request: &Request) -> Self {
        Self {
            message: Some(response_message::CANCELLED.to_string()),
            ..Self::answering(request, false)
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.message.as_deref() == Some(response_message::CANCELLED)
    }

    /// Decodes the body as `T`. An absent body is `Ok(None)`.
    pub fn body<T: MessageShape>(&self) -> Result<Option<T>, DeserializationError> {
        match &self.body {
            Some(body) => wire::decode(body.0.clone()).map(Some),
            None => Ok(None),
        }
    }
}

impl WireField for Response {
    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        match value.as_object() {
            Some(object) => wire::check_required(object, Self::SHAPE, Self::FIELDS),
            None => Ok(()),
        }
    }
}

impl MessageShape for Response {
    const SHAPE: &'static str = "Response";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("seq", None, true),
        FieldSpec::new("kind", Some("type"), true),
        FieldSpec::new("request_seq", Some("request_seq"), true),
        FieldSpec::new("success", None, true),
        FieldSpec::new("command", None, true),
        FieldSpec::new("message", None, false),
        FieldSpec::new("body", None, false),
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::requests::{Command, PauseArguments};
    use crate::types::{Breakpoint, Capabilities};

    fn pause_request() -> Request {
        Request::new(
            12,
            Command::Pause(PauseArguments::builder().thread_id(1_i64).build().unwrap()),
        )
    }

    #[test]
    fn success_response_carries_typed_body() {
        let request = Request::new(1, Command::Threads);
        let body = ThreadsResponse {
            threads: vec![Thread {
                id: 1,
                name: "main".to_string(),
            }],
        };
        let response = Response::make_success(&request, &body).unwrap();
        assert_eq!(
            wire::encode(&response).unwrap(),
            json!({
                "seq": 0,
                "type": "response",
                "request_seq": 1,
                "success": true,
                "command": "threads",
                "body": { "threads": [{ "id": 1, "name": "main" }] },
            })
        );
        assert_eq!(response.body::<ThreadsResponse>().unwrap(), Some(body));
    }

    #[test]
    fn ack_has_no_body() {
        let response = Response::make_ack(&pause_request());
        assert_eq!(
            wire::encode(&response).unwrap(),
            json!({
                "seq": 0,
                "type": "response",
                "request_seq": 12,
                "success": true,
                "command": "pause",
            })
        );
        assert_eq!(response.body::<ContinueResponse>().unwrap(), None);
    }

    #[test]
    fn error_and_cancel_responses() {
        let request = pause_request();
        let cancel = Response::make_cancel(&request);
        assert!(!cancel.success);
        assert!(cancel.is_cancelled());

        let error = Response::make_error(&request, "notStopped");
        assert_eq!(error.message.as_deref(), Some(response_message::NOT_STOPPED));
        assert!(!error.is_cancelled());

        let details = Message::builder()
            .id(3_i64)
            .format("Thread {thread} is gone".to_string())
            .show_user(true)
            .build()
            .unwrap();
        let error = Response::make_error_details(&request, "thread gone", details.clone()).unwrap();
        let body = error.body::<ErrorResponse>().unwrap().unwrap();
        assert_eq!(body.error, Some(details));
    }

    #[test]
    fn decodes_initialize_response() {
        let response: Response = wire::decode(json!({
            "seq": 2,
            "type": "response",
            "request_seq": 1,
            "success": true,
            "command": "initialize",
            "body": {
                "supportsConfigurationDoneRequest": true,
                "exceptionBreakpointFilters": [
                    { "filter": "raised", "label": "Raised Exceptions", "default": false },
                ],
            },
        }))
        .unwrap();
        let capabilities = response.body::<Capabilities>().unwrap().unwrap();
        assert_eq!(capabilities.supports_configuration_done_request, Some(true));
        let filters = capabilities.exception_breakpoint_filters.unwrap();
        assert_eq!(filters[0].default_value, Some(false));
    }

    #[test]
    fn body_is_validated_on_access() {
        let response: Response = wire::decode(json!({
            "seq": 3,
            "type": "response",
            "request_seq": 2,
            "success": true,
            "command": "setBreakpoints",
            "body": { "breakpoints": [{ "line": 4 }] },
        }))
        .unwrap();
        let error = response.body::<SetBreakpointsResponse>().unwrap_err();
        match error {
            DeserializationError::MissingRequiredField(missing) => {
                assert_eq!(missing.shape, "Breakpoint");
                assert_eq!(missing.field, "verified");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn envelope_requires_request_seq() {
        let error = wire::decode::<Response>(json!({
            "seq": 3,
            "type": "response",
            "success": true,
            "command": "threads",
        }))
        .unwrap_err();
        match error {
            DeserializationError::MissingRequiredField(missing) => {
                assert_eq!(missing.shape, "Response");
                assert_eq!(missing.field, "request_seq");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn requests_are_not_responses() {
        let error = wire::decode::<Response>(json!({
            "seq": 3,
            "type": "request",
            "request_seq": 2,
            "success": true,
            "command": "threads",
        }))
        .unwrap_err();
        assert!(matches!(
            error,
            DeserializationError::MalformedWireValue { shape: "Response", .. }
        ));
    }

    #[test]
    fn data_breakpoint_info_without_data_id() {
        let body: DataBreakpointInfoResponse =
            wire::decode(json!({ "dataId": null, "description": "not available" })).unwrap();
        assert_eq!(body.data_id, None);
        assert_eq!(
            wire::encode(&body).unwrap(),
            json!({ "description": "not available" })
        );
    }

    #[test]
    fn empty_breakpoint_list_is_kept() {
        let body = SetBreakpointsResponse {
            breakpoints: Vec::<Breakpoint>::new(),
        };
        assert_eq!(wire::encode(&body).unwrap(), json!({ "breakpoints": [] }));
    }
}
