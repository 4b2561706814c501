use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::MissingRequiredFieldError;
use crate::types::{
    AnyValue, Breakpoint, Capabilities, LoadedSourceEventReason, MessageKind, Module,
    ModuleEventReason, OutputEventGroup, Percentage, ProcessEventStartMethod, Source,
};
use crate::wire::{self, FieldSpec, MessageShape, WireField};

message! {
    /// Arguments for a Stopped event.
    pub struct StoppedEventBody {
        /// The reason for the event. See
        /// [`stopped_event_reason`](crate::types::stopped_event_reason).
        pub reason: String,
        /// The full reason for the event, e.g. 'Paused on exception'. This string is shown in
        /// the UI as is and can be translated.
        pub description: Option<String>,
        /// The thread which was stopped.
        pub thread_id: Option<i64>,
        /// A value of true hints to the client that this event should not change the focus.
        pub preserve_focus_hint: Option<bool>,
        /// Additional information. E.g. if reason is `exception`, text contains the exception
        /// name. This string is shown in the UI.
        pub text: Option<String>,
        /// If `allThreadsStopped` is true, a debug adapter can announce that all threads have
        /// stopped.
        pub all_threads_stopped: Option<bool>,
        /// Ids of the breakpoints that triggered the event.
        pub hit_breakpoint_ids: Option<Vec<i64>>,
    }
}

message! {
    /// Arguments for a Continued event.
    pub struct ContinuedEventBody {
        /// The thread which was continued.
        pub thread_id: i64,
        /// If `allThreadsContinued` is true, a debug adapter can announce that all threads have
        /// continued.
        pub all_threads_continued: Option<bool>,
    }
}

message! {
    pub struct ExitedEventBody {
        /// The exit code returned from the debuggee.
        pub exit_code: i64,
    }
}

message! {
    pub struct TerminatedEventBody {
        /// A debug adapter may set `restart` to true (or to an arbitrary object) to request
        /// that the client restarts the session. The value is passed back to the adapter as the
        /// `__restart` attribute of the `launch` and `attach` requests.
        pub restart: Option<AnyValue>,
    }
}

message! {
    pub struct ThreadEventBody {
        /// The reason for the event. See
        /// [`thread_event_reason`](crate::types::thread_event_reason).
        pub reason: String,
        /// The identifier of the thread.
        pub thread_id: i64,
    }
}

message! {
    /// Arguments for an Output event.
    pub struct OutputEventBody {
        /// The output category. If not specified or if the category is not understood by the
        /// client, `console` is assumed. See
        /// [`output_event_category`](crate::types::output_event_category).
        pub category: Option<String>,
        /// The output to report.
        pub output: String,
        /// Support for keeping an output log organized by grouping related messages.
        pub group: Option<OutputEventGroup>,
        /// If an attribute `variablesReference` exists and its value is > 0, the output
        /// contains objects which can be retrieved by passing `variablesReference` to the
        /// `variables` request.
        pub variables_reference: Option<i64>,
        /// The source location where the output was produced.
        pub source: Option<Source>,
        pub line: Option<i64>,
        pub column: Option<i64>,
        /// Additional data to report. For the `telemetry` category the data is sent to
        /// telemetry, for the other categories the data is shown in JSON format.
        pub data: Option<AnyValue>,
        /// A reference that allows the client to request the location where the new value is
        /// declared.
        pub location_reference: Option<i64>,
    }
}

message! {
    pub struct BreakpointEventBody {
        /// The reason for the event. See
        /// [`breakpoint_event_reason`](crate::types::breakpoint_event_reason).
        pub reason: String,
        /// The `id` attribute is used to find the target breakpoint, the other attributes are
        /// used as the new values.
        pub breakpoint: Breakpoint,
    }
}

message! {
    pub struct ModuleEventBody {
        /// The reason for the event.
        pub reason: ModuleEventReason,
        /// The new, changed, or removed module. In case of `removed` only the module id is
        /// used.
        pub module: Module,
    }
}

message! {
    pub struct LoadedSourceEventBody {
        /// The reason for the event.
        pub reason: LoadedSourceEventReason,
        /// The new, changed, or removed source.
        pub source: Source,
    }
}

message! {
    /// Arguments for a Process event.
    pub struct ProcessEventBody {
        /// The logical name of the process. This is usually the full path to process's
        /// executable file.
        pub name: String,
        /// The process ID of the debugged process, as assigned by the operating system.
        pub system_process_id: Option<i64>,
        /// If true, the process is running on the same computer as the debug adapter.
        pub is_local_process: Option<bool>,
        /// Describes how the debug engine started debugging this process.
        pub start_method: Option<ProcessEventStartMethod>,
        /// The size of a pointer or address for this process, in bits.
        pub pointer_size: Option<i64>,
    }
}

message! {
    pub struct CapabilitiesEventBody {
        /// The set of updated capabilities.
        pub capabilities: Capabilities,
    }
}

message! {
    pub struct ProgressStartEventBody {
        /// An ID that can be used in subsequent `progressUpdate` and `progressEnd` events to
        /// make them refer to the same progress reporting. IDs must be unique within a debug
        /// session.
        pub progress_id: String,
        /// Short title of the progress reporting. Shown in the UI to describe the long running
        /// operation.
        pub title: String,
        /// The request ID that this progress report is related to.
        pub request_id: Option<i64>,
        /// If true, the request that reports progress may be cancelled with a `cancel` request.
        pub cancellable: Option<bool>,
        /// More detailed progress message.
        pub message: Option<String>,
        /// Progress percentage to display (value range: 0 to 100).
        pub percentage: Option<Percentage>,
    }
}

message! {
    pub struct ProgressUpdateEventBody {
        /// The ID that was introduced in the initial `progressStart` event.
        pub progress_id: String,
        pub message: Option<String>,
        pub percentage: Option<Percentage>,
    }
}

message! {
    pub struct ProgressEndEventBody {
        /// The ID that was introduced in the initial `progressStart` event.
        pub progress_id: String,
        pub message: Option<String>,
    }
}

message! {
    pub struct InvalidatedEventBody {
        /// Set of logical areas that got invalidated. If this property is missing, empty, or if
        /// values are not understood, the client should assume a single value `all`. See
        /// [`invalidated_areas`](crate::types::invalidated_areas).
        pub areas: Option<Vec<String>>,
        /// If specified, the client only needs to refetch data related to this thread.
        pub thread_id: Option<i64>,
        /// If specified, the client only needs to refetch data related to this stack frame (and
        /// the `threadId` is ignored).
        pub stack_frame_id: Option<i64>,
    }
}

message! {
    pub struct MemoryEventBody {
        /// Memory reference of a memory range that has been updated.
        pub memory_reference: String,
        /// Starting offset in bytes where memory has been updated. Can be negative.
        pub offset: i64,
        /// Number of bytes updated.
        pub count: i64,
    }
}

tagged_enum! {
    /// The name of an event together with its body.
    #[serde(tag = "event", content = "body")]
    pub enum EventBody {
        /// This event indicates that the debug adapter is ready to accept configuration
        /// requests.
        Initialized => "initialized",
        /// The event indicates that the execution of the debuggee has stopped due to some
        /// condition.
        Stopped(StoppedEventBody) => "stopped",
        /// The event indicates that the execution of the debuggee has continued.
        Continued(ContinuedEventBody) => "continued",
        /// The event indicates that the debuggee has exited and returns its exit code.
        Exited(ExitedEventBody) => "exited",
        /// The event indicates that debugging of the debuggee has terminated. This does not
        /// mean that the debuggee itself has exited.
        Terminated(Option<TerminatedEventBody>) => "terminated",
        /// The event indicates that a thread has started or exited.
        Thread(ThreadEventBody) => "thread",
        /// The event indicates that the target has produced some output.
        Output(OutputEventBody) => "output",
        /// The event indicates that some information about a breakpoint has changed.
        Breakpoint(BreakpointEventBody) => "breakpoint",
        /// The event indicates that some information about a module has changed.
        Module(ModuleEventBody) => "module",
        /// The event indicates that some source has been added, changed, or removed from the
        /// set of all loaded sources.
        LoadedSource(LoadedSourceEventBody) => "loadedSource",
        /// The event indicates that the debugger has begun debugging a new process.
        Process(ProcessEventBody) => "process",
        /// The event indicates that one or more capabilities have changed.
        Capabilities(CapabilitiesEventBody) => "capabilities",
        /// The event signals that a long running operation is about to start.
        ProgressStart(ProgressStartEventBody) => "progressStart",
        /// The event signals that the progress reporting needs to be updated.
        ProgressUpdate(ProgressUpdateEventBody) => "progressUpdate",
        /// The event signals the end of the progress reporting.
        ProgressEnd(ProgressEndEventBody) => "progressEnd",
        /// This event signals that some state in the debug adapter has changed and requires
        /// that the client needs to re-render the data snapshot previously requested.
        Invalidated(InvalidatedEventBody) => "invalidated",
        /// This event indicates that some memory range has been updated.
        Memory(MemoryEventBody) => "memory",
    }
}

/// An event sent by the debug adapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    pub seq: i64,
    #[serde(rename = "type", deserialize_with = "MessageKind::deserialize_event")]
    pub kind: MessageKind,
    #[serde(flatten)]
    pub body: EventBody,
}

impl Event {
    /// Creates an event of type `event`. The sequence number is left at 0.
    pub fn make_event(body: EventBody) -> Self {
        Self {
            seq: 0,
            kind: MessageKind::Event,
            body,
        }
    }
}

impl WireField for Event {
    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        wire::check_tagged::<EventBody>(value, Self::SHAPE, Self::FIELDS, ("event", "body"))
    }
}

impl MessageShape for Event {
    const SHAPE: &'static str = "Event";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("seq", None, true),
        FieldSpec::new("kind", Some("type"), true),
        FieldSpec::new("event", None, true),
        FieldSpec::new("body", None, false),
    ];
}
