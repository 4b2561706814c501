use dap_schema::prelude::*;
use dap_schema::requests::{InitializeRequestArguments, SetBreakpointsArguments};
use dap_schema::responses::{SetBreakpointsResponse, StackTraceResponse};
use dap_schema::types::{Breakpoint, Capabilities, Source, SourceBreakpoint};
use serde_json::json;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn initialize_handshake() {
    init_logging();
    let request: Request = wire::from_str(
        r#"{"seq":1,"type":"request","command":"initialize",
            "arguments":{"adapterID":"python","clientName":"Visual Studio Code"}}"#,
    )
    .unwrap();
    let Command::Initialize(InitializeRequestArguments { adapter_id, .. }) = &request.command
    else {
        panic!("unexpected command: {:?}", request.command);
    };
    assert_eq!(adapter_id, "python");

    let capabilities = Capabilities::builder()
        .supports_configuration_done_request(true)
        .supports_cancel_request(true)
        .build()
        .unwrap();
    let response = Response::make_success(&request, &capabilities).unwrap();
    let text = wire::to_string(&response).unwrap();
    let decoded: Response = wire::from_str(&text).unwrap();
    assert_eq!(decoded.request_seq, 1);
    assert_eq!(decoded.command, "initialize");
    assert_eq!(decoded.body::<Capabilities>().unwrap(), Some(capabilities));

    let initialized = Event::make_event(EventBody::Initialized);
    assert_eq!(
        wire::encode(&initialized).unwrap(),
        json!({ "seq": 0, "type": "event", "event": "initialized" })
    );
}

#[test]
fn set_breakpoints_exchange() {
    init_logging();
    let arguments = SetBreakpointsArguments::builder()
        .source(
            Source::builder()
                .path("/tmp/a.py".to_string())
                .build()
                .unwrap(),
        )
        .breakpoints(vec![SourceBreakpoint::builder()
            .line(42_i64)
            .build()
            .unwrap()])
        .build()
        .unwrap();
    let request = Request::new(5, Command::SetBreakpoints(arguments));
    let request: Request = wire::decode(wire::encode(&request).unwrap()).unwrap();

    let Command::SetBreakpoints(arguments) = &request.command else {
        panic!("unexpected command: {:?}", request.command);
    };
    let breakpoints = arguments
        .breakpoints
        .iter()
        .flatten()
        .map(|breakpoint| {
            Breakpoint::builder()
                .verified(true)
                .line(breakpoint.line)
                .source(arguments.source.clone())
                .build()
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let response =
        Response::make_success(&request, &SetBreakpointsResponse { breakpoints }).unwrap();

    assert_eq!(
        wire::encode(&response).unwrap()["body"],
        json!({
            "breakpoints": [
                { "verified": true, "line": 42, "source": { "path": "/tmp/a.py" } },
            ],
        })
    );
}

#[test]
fn rejected_messages_report_the_problem() {
    init_logging();
    let error = wire::from_str::<Response>(
        r#"{"seq":8,"type":"response","request_seq":7,"success":true,"command":"stackTrace",
            "body":{"stackFrames":[{"id":1,"name":"main","line":3}]}}"#,
    )
    .unwrap()
    .body::<StackTraceResponse>()
    .unwrap_err();
    assert_eq!(
        error.to_string(),
        "missing required field 'column' of 'StackFrame'"
    );

    let error = wire::from_str::<Event>(r#"{"seq":1,"type":"event","event":"exited","body":{"exitCode":"zero"}}"#)
        .unwrap_err();
    assert!(matches!(
        error,
        DeserializationError::MalformedWireValue { shape: "Event", .. }
    ));
}

#[test]
fn module_ids_keep_their_alternative() {
    let number = NumberOrString::from(1);
    let string = NumberOrString::from("1");
    assert_ne!(number, string);
    assert!(matches!(
        number.as_string(),
        Err(EitherError::WrongAlternative { .. })
    ));
    assert_eq!(string.as_string(), Ok("1"));
}
