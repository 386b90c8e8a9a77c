use codegpt::{Config, Event, Outcome, Session};

fn session_for(server: &mockito::Server) -> Session {
    let config = Config { api_base: server.url(), ..Config::default() };
    let mut session = Session::new(config).unwrap();
    session.set_api_key("test-key").unwrap();
    session
}

#[tokio::test]
async fn save_event_runs_the_fix_pipeline() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"```python\na\nX\nc\n```\n修正内容の説明:\n二行目を直した"}}]}"#,
        )
        .create_async()
        .await;

    let mut session = session_for(&server);
    let outcome = session
        .handle_event(Event::DocumentSaved { code: "a\nb\nc".into() })
        .await
        .unwrap();

    match outcome {
        Outcome::Fix(fix) => {
            assert_eq!(fix.fixed_code, "a\nX\nc");
            assert_eq!(fix.changed_lines, "Line 2: X");
            assert!(fix.has_fix);
            assert_eq!(fix.explanation, "二行目を直した");
        }
        other => panic!("expected Outcome::Fix, got {other:?}"),
    }
}

#[tokio::test]
async fn save_event_does_nothing_once_auto_evaluate_is_off() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let mut session = session_for(&server);
    session.handle_event(Event::ToggleAutoEvaluate).await.unwrap();

    let outcome = session
        .handle_event(Event::DocumentSaved { code: "a".into() })
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::None));
    mock.assert_async().await;
}

#[tokio::test]
async fn question_event_returns_the_answer_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"42"}}]}"#)
        .create_async()
        .await;

    let mut session = session_for(&server);
    let outcome = session
        .handle_event(Event::QuestionAsked { question: "meaning of life?".into() })
        .await
        .unwrap();

    match outcome {
        Outcome::Answer(text) => assert_eq!(text, "42"),
        other => panic!("expected Outcome::Answer, got {other:?}"),
    }
}

#[tokio::test]
async fn apply_fix_event_passes_straight_through() {
    let server = mockito::Server::new_async().await;
    let mut session = session_for(&server);

    let outcome = session.handle_event(Event::ApplyFixRequested).await.unwrap();
    assert!(matches!(outcome, Outcome::ApplyFix));
}
