use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;
use std::sync::Arc;

use bounty_chains::ChainRegistry;
use bounty_relay::api::{
    campaign_leaderboard, connect_wallet, create_campaign, create_submission, get_campaign,
    health, list_campaigns, score_submission, update_campaign, wallet_token_report,
};
use bounty_relay::app::leaderboard_service::LeaderboardService;
use bounty_relay::infrastructure::storage::file_storage::Storage;

struct TestState {
    _dir: tempfile::TempDir,
    storage: Arc<Storage>,
    registry: Arc<ChainRegistry>,
    leaderboard: Arc<LeaderboardService>,
}

fn test_state() -> TestState {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let storage = Arc::new(
        Storage::new(dir.path().to_str().expect("non-utf8 tempdir")).expect("storage init failed"),
    );
    let registry = Arc::new(ChainRegistry::with_defaults());
    let leaderboard = Arc::new(LeaderboardService::new(Arc::clone(&storage)));
    TestState {
        _dir: dir,
        storage,
        registry,
        leaderboard,
    }
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(App::new().service(health)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_campaign_submission_leaderboard_flow() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::clone(&state.storage)))
            .app_data(web::Data::new(Arc::clone(&state.leaderboard)))
            .service(create_campaign)
            .service(get_campaign)
            .service(update_campaign)
            .service(create_submission)
            .service(score_submission)
            .service(campaign_leaderboard),
    )
    .await;

    // create
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/campaigns")
            .set_json(json!({
                "title": "Docs sprint",
                "description": "Write the missing docs",
                "host": "acme",
                "reward_pool": 500.0,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let campaign_id = body["campaign"]["id"].as_str().expect("missing id").to_string();
    assert_eq!(body["campaign"]["status"], "draft");

    // a draft campaign rejects submissions
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/campaigns/{campaign_id}/submissions"))
            .set_json(json!({
                "creator": "alice",
                "content_url": "https://github.com/alice/work",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // activate
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/campaigns/{campaign_id}"))
            .set_json(json!({ "status": "active" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // submit + score
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/campaigns/{campaign_id}/submissions"))
            .set_json(json!({
                "creator": "alice",
                "content_url": "https://github.com/alice/work",
                "notes": "first pass",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let submission_id = body["submission"]["id"].as_str().expect("missing id").to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/submissions/{submission_id}/score"))
            .set_json(json!({ "score": 87 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // score above the maximum is rejected
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/submissions/{submission_id}/score"))
            .set_json(json!({ "score": 101 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // leaderboard reflects the scored submission
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/campaigns/{campaign_id}/leaderboard"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["entries"][0]["creator"], "alice");
    assert_eq!(body["entries"][0]["total_score"], 87);
    assert_eq!(body["entries"][0]["rank"], 1);
}

#[actix_web::test]
async fn test_campaign_validation_rejected() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::clone(&state.storage)))
            .service(create_campaign)
            .service(list_campaigns),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/campaigns")
            .set_json(json!({
                "title": "",
                "description": "d",
                "host": "acme",
                "reward_pool": -1.0,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // nothing was stored
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/campaigns").to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn test_wallet_connect_validation() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::clone(&state.storage)))
            .app_data(web::Data::new(Arc::clone(&state.registry)))
            .service(connect_wallet),
    )
    .await;

    // unsupported chain, suggestion included
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/wallets")
            .set_json(json!({
                "user": "user1",
                "address": "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6",
                "chain": "ethereum-classic",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .expect("missing message")
        .contains("did you mean: ethereum"));

    // malformed address for a supported chain
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/wallets")
            .set_json(json!({
                "user": "user1",
                "address": "0x742d",
                "chain": "ethereum",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // valid connect, then duplicate conflict
    let connect = || {
        test::TestRequest::post()
            .uri("/wallets")
            .set_json(json!({
                "user": "user1",
                "address": "0x742d35CC6634C0532925a3b8D4C9db96C4b4d8b6",
                "chain": "Ethereum",
            }))
            .to_request()
    };
    let resp = test::call_service(&app, connect()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    // stored in normalized form
    assert_eq!(body["wallet"]["chain"], "ethereum");
    assert_eq!(
        body["wallet"]["address"],
        "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6"
    );

    let resp = test::call_service(&app, connect()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_wallet_token_report_endpoint() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::clone(&state.storage)))
            .app_data(web::Data::new(Arc::clone(&state.registry)))
            .service(wallet_token_report),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/wallets/report")
            .set_json(json!({
                "tokens": [
                    {
                        "name": "Ether",
                        "symbol": "ETH",
                        "address": "0x0000000000000000000000000000000000000000",
                        "chain": "ethereum",
                    },
                    {
                        "name": "Mystery",
                        "symbol": "MYS",
                        "address": "0x123",
                        "chain": "unknown-chain",
                    },
                ],
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["partition"]["summary"]["total_tokens"], 2);
    assert_eq!(body["partition"]["summary"]["valid_tokens"], 1);
    assert_eq!(body["partition"]["unsupported_chains"][0], "unknown-chain");
    assert!(body["recommendations"][0]
        .as_str()
        .expect("missing recommendation")
        .contains("unsupported chain"));
    // valid_chains serializes as a map keyed by chain
    assert!(body["partition"]["valid_chains"]["ethereum"].is_array());
}
