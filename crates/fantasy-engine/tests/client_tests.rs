use fantasy_config::Config;
use fantasy_engine::{EngineClient, EngineError, FaSuggestion, FreeAgentSource};
use httpmock::prelude::*;

fn client_for(base_url: String) -> EngineClient {
    EngineClient::new(&Config {
        engine_base_url: base_url,
        ..Config::default()
    })
}

#[tokio::test]
async fn decodes_suggestion_array_on_200() {
    let server = MockServer::start();
    let body = serde_json::json!([
        {
            "player_id": "p-204",
            "delta_value": 4.25,
            "suggested_faab": 13,
            "rationale": "Jaylen Warren (RB) beats your worst RB by +4.25 VORP."
        },
        {
            "player_id": "p-317",
            "delta_value": 1.5,
            "suggested_faab": 5,
            "rationale": "Tyler Boyd (WR) beats your worst WR by +1.50 VORP."
        }
    ]);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/recommend/free-agents")
            .query_param("team_id", "alpha")
            .query_param("limit", "5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });

    let client = client_for(server.base_url());
    let items = client.free_agents("alpha", 5).await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].player_id, "p-204");
    assert_eq!(items[0].suggested_faab, 13);
    assert_eq!(items[1].delta_value, 1.5);
}

#[tokio::test]
async fn empty_array_decodes_to_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recommend/free-agents");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let client = client_for(server.base_url());
    let items = client.free_agents("beta", 5).await.unwrap();
    assert_eq!(items, Vec::<FaSuggestion>::new());
}

#[tokio::test]
async fn non_200_status_maps_to_upstream_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recommend/free-agents");
        then.status(500).body("boom");
    });

    let client = client_for(server.base_url());
    let err = client.free_agents("alpha", 5).await.unwrap_err();

    match err {
        EngineError::UpstreamStatus(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recommend/free-agents");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{not json");
    });

    let client = client_for(server.base_url());
    let err = client.free_agents("alpha", 5).await.unwrap_err();
    assert!(matches!(err, EngineError::Decode(_)));
}

#[tokio::test]
async fn unreachable_engine_maps_to_transport_error() {
    // Port 1 is reserved and nothing listens there.
    let client = client_for("http://127.0.0.1:1".to_string());
    let err = client.free_agents("alpha", 5).await.unwrap_err();
    assert!(matches!(err, EngineError::Transport(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/recommend/free-agents");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let client = client_for(format!("{}/", server.base_url()));
    client.free_agents("alpha", 5).await.unwrap();
    mock.assert();
}
