use std::sync::Arc;

use serde_json::json;

use super::{Call, FakeClients, FakeNotification, FakeWindow, Recorder, window};
use crate::platform::{ClientId, ClientQuery, ClientWindow};
use crate::router::{ClickRouter, NotificationClickEvent, RouteOutcome, select_window};

fn click(log: &Arc<Recorder>, data: Option<serde_json::Value>) -> NotificationClickEvent {
    NotificationClickEvent::new(Arc::new(FakeNotification {
        log: log.clone(),
        data,
    }))
}

fn router(
    log: &Arc<Recorder>,
    windows: Vec<Arc<dyn ClientWindow>>,
    can_open: bool,
) -> ClickRouter {
    ClickRouter::new(Arc::new(FakeClients {
        log: log.clone(),
        windows,
        can_open,
        fail_match: false,
    }))
}

#[tokio::test]
async fn focuses_first_focusable_window_only() {
    let log = Arc::new(Recorder::default());
    let windows = vec![
        window(&log, "a", false),
        window(&log, "b", true),
        window(&log, "c", true),
    ];
    let router = router(&log, windows, true);

    let outcome = router
        .route(click(&log, Some(json!({ "route": "/post/5" }))))
        .await;

    assert_eq!(
        outcome,
        RouteOutcome::Focused {
            client_id: ClientId("b".into()),
            route: "/post/5".into(),
        }
    );
    assert_eq!(
        log.calls(),
        vec![
            Call::Close,
            Call::MatchAll(ClientQuery::ALL_WINDOWS),
            Call::Navigate("b".into(), "/post/5".into()),
            Call::Focus("b".into()),
        ]
    );
}

#[tokio::test]
async fn opens_one_window_when_none_open() {
    let log = Arc::new(Recorder::default());
    let router = router(&log, Vec::new(), true);

    let outcome = router
        .route(click(&log, Some(json!({ "route": "/post/42" }))))
        .await;

    assert_eq!(
        outcome,
        RouteOutcome::Opened {
            route: "/post/42".into()
        }
    );
    let opens: Vec<_> = log
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::OpenWindow(_)))
        .collect();
    assert_eq!(opens, vec![Call::OpenWindow("/post/42".into())]);
}

#[tokio::test]
async fn opens_window_when_no_window_can_focus() {
    let log = Arc::new(Recorder::default());
    let router = router(&log, vec![window(&log, "a", false)], true);

    let outcome = router.route(click(&log, None)).await;
    assert_eq!(outcome, RouteOutcome::Opened { route: "/".into() });
}

#[tokio::test]
async fn no_windows_and_no_open_support_is_a_no_op() {
    let log = Arc::new(Recorder::default());
    let router = router(&log, Vec::new(), false);

    let outcome = router
        .route(click(&log, Some(json!({ "route": "/x" }))))
        .await;

    assert_eq!(outcome, RouteOutcome::NoAction { route: "/x".into() });
    assert_eq!(
        log.calls(),
        vec![Call::Close, Call::MatchAll(ClientQuery::ALL_WINDOWS)]
    );
}

#[tokio::test]
async fn missing_or_bad_route_defaults_to_root() {
    let log = Arc::new(Recorder::default());
    let router = router(&log, Vec::new(), true);

    for data in [None, Some(json!({})), Some(json!({ "route": "" })), Some(json!(5))] {
        let outcome = router.route(click(&log, data)).await;
        assert_eq!(outcome, RouteOutcome::Opened { route: "/".into() });
    }
}

#[tokio::test]
async fn repeated_clicks_close_every_time() {
    let log = Arc::new(Recorder::default());
    let router = router(&log, vec![window(&log, "a", true)], false);
    let event = click(&log, Some(json!({ "route": "/post/1" })));

    router.route(event.clone()).await;
    router.route(event).await;

    let closes = log.calls().iter().filter(|c| **c == Call::Close).count();
    let focuses = log
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::Focus(_)))
        .count();
    assert_eq!(closes, 2);
    assert_eq!(focuses, 2);
}

#[tokio::test]
async fn navigation_failure_still_focuses() {
    let log = Arc::new(Recorder::default());
    let stale: Arc<dyn ClientWindow> = Arc::new(FakeWindow {
        log: log.clone(),
        id: "stale",
        focusable: true,
        fail_navigate: true,
    });
    let router = router(&log, vec![stale], true);

    let outcome = router
        .route(click(&log, Some(json!({ "route": "/post/3" }))))
        .await;

    assert!(matches!(outcome, RouteOutcome::Focused { .. }));
    assert!(log.calls().contains(&Call::Focus("stale".into())));
    assert!(!log.calls().iter().any(|c| matches!(c, Call::OpenWindow(_))));
}

#[tokio::test]
async fn enumeration_failure_closes_and_stops() {
    let log = Arc::new(Recorder::default());
    let router = ClickRouter::new(Arc::new(FakeClients {
        log: log.clone(),
        windows: vec![window(&log, "a", true)],
        can_open: true,
        fail_match: true,
    }));

    let outcome = router.route(click(&log, None)).await;
    assert_eq!(outcome, RouteOutcome::Failed { route: "/".into() });
    assert_eq!(
        log.calls(),
        vec![Call::Close, Call::MatchAll(ClientQuery::ALL_WINDOWS)]
    );
}

#[test]
fn select_window_is_first_match() {
    let log = Arc::new(Recorder::default());
    assert!(select_window(&[]).is_none());

    let windows = vec![window(&log, "a", false), window(&log, "b", false)];
    assert!(select_window(&windows).is_none());

    let windows = vec![window(&log, "a", true), window(&log, "b", true)];
    assert_eq!(select_window(&windows).map(|w| w.id()), Some(ClientId("a".into())));
}

#[test]
fn enumeration_query_wire_shape() {
    assert_eq!(
        serde_json::to_value(ClientQuery::ALL_WINDOWS).unwrap(),
        json!({ "type": "window", "includeUncontrolled": true })
    );
}
