//! End-to-end provisioning runs against a wiremock backend

use seed_cli::{LogObserver, OrphanPolicy, Provisioner, SeedReport};
use seed_client::SupabaseClient;
use seed_core::{DEFAULT_EMAIL_DOMAIN, ProfileGenerator};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, path_regex},
};

const KEY: &str = "service-role-key";

fn generator() -> ProfileGenerator<StdRng> {
    ProfileGenerator::new(StdRng::seed_from_u64(42), DEFAULT_EMAIL_DOMAIN, "demoUser123")
}

fn provisioner(
    server: &MockServer,
    policy: OrphanPolicy,
) -> Provisioner<SupabaseClient, LogObserver> {
    let client = SupabaseClient::new(&server.uri(), KEY, "users", None).unwrap();
    Provisioner::new(client, LogObserver, policy)
}

async fn mount_identity_ok(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .and(header("apikey", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "22222222-2222-2222-2222-222222222222",
            "aud": "authenticated"
        })))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_default_run_creates_ten_accounts_in_order() {
    let mock_server = MockServer::start().await;
    mount_identity_ok(&mock_server, 10).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header("Prefer", "return=minimal"))
        .respond_with(ResponseTemplate::new(201))
        .expect(10)
        .mount(&mock_server)
        .await;

    let report = provisioner(&mock_server, OrphanPolicy::Keep)
        .run(&mut generator(), 10)
        .await;

    assert_eq!(
        report,
        SeedReport {
            identities_created: 10,
            profiles_created: 10,
            ..SeedReport::default()
        }
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 20);

    for (i, pair) in requests.chunks(2).enumerate() {
        let email = format!("demo{}@gymovo.com", i + 1);

        assert_eq!(pair[0].url.path(), "/auth/v1/admin/users");
        let identity: Value = serde_json::from_slice(&pair[0].body).unwrap();
        assert_eq!(identity["email"], json!(email));
        assert_eq!(identity["email_confirm"], json!(true));

        assert_eq!(pair[1].url.path(), "/rest/v1/users");
        let rows: Value = serde_json::from_slice(&pair[1].body).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(1));
        assert_eq!(rows[0]["email"], json!(email));
    }
}

#[tokio::test]
async fn test_auth_failures_never_reach_profile_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "email_exists",
            "msg": "A user with this email address has already been registered"
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let report = provisioner(&mock_server, OrphanPolicy::Keep)
        .run(&mut generator(), 3)
        .await;

    assert_eq!(report.identities_failed, 3);
    assert_eq!(report.profiles_created, 0);
}

#[tokio::test]
async fn test_profile_failures_keep_identities_by_default() {
    let mock_server = MockServer::start().await;
    mount_identity_ok(&mock_server, 2).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid API key"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(r"^/auth/v1/admin/users/.+$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let report = provisioner(&mock_server, OrphanPolicy::Keep)
        .run(&mut generator(), 2)
        .await;

    assert_eq!(report.profiles_failed, 2);
    assert_eq!(report.orphans_left(), 2);
}

#[tokio::test]
async fn test_cleanup_policy_deletes_orphaned_identity() {
    let mock_server = MockServer::start().await;
    mount_identity_ok(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"users_email_key\""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/auth/v1/admin/users/22222222-2222-2222-2222-222222222222"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = provisioner(&mock_server, OrphanPolicy::DeleteIdentity)
        .run(&mut generator(), 1)
        .await;

    assert_eq!(report.orphans_removed, 1);
    assert_eq!(report.orphans_left(), 0);
}
