//! Resource endpoint templates against a mock gateway

use httpmock::prelude::*;
use kong_admin::api::error::Error;
use kong_admin::resources::plugin_types::acl::AclConfig;
use kong_admin::resources::plugin_types::key_auth::KeyAuthConfig;
use kong_admin::resources::plugin_types::rate_limiting_advanced::RateLimitingAdvancedConfig;
use kong_admin::{ClientConfig, KongClient, PluginScope};
use serde_json::json;

fn token_client(server: &MockServer) -> KongClient {
    KongClient::new(
        ClientConfig::builder()
            .admin_url(format!("http://127.0.0.1:{}", server.port()))
            .admin_token("test-token")
            .build(),
    )
    .expect("client construction")
}

#[test]
fn service_create_and_get() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/services")
            .json_body(json!({"name": "test-service-1", "url": "http://test-service-1"}));
        then.status(201)
            .json_body(json!({"id": "123", "name": "test-service-1"}));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/default/services/test-service-1");
        then.status(200).json_body(json!({
            "id": "123",
            "name": "test-service-1",
            "path": "/test-url",
        }));
    });

    let client = token_client(&server);

    let created = client
        .services()
        .create("test-service-1", "http://test-service-1")
        .unwrap()
        .expect("created entity");
    assert_eq!(created.get_str("name"), Some("test-service-1"));

    let fetched = client
        .services()
        .get("test-service-1")
        .unwrap()
        .expect("existing entity");
    assert_eq!(fetched.get_str("id"), Some("123"));
    assert_eq!(fetched.get_str("path"), Some("/test-url"));

    create.assert();
    get.assert();
}

#[test]
fn service_update_replace_delete() {
    let server = MockServer::start();
    let update = server.mock(|when, then| {
        when.method(PATCH)
            .path("/default/services/123")
            .json_body(json!({"name": "renamed"}));
        then.status(200).json_body(json!({"id": "123", "name": "renamed"}));
    });
    let replace = server.mock(|when, then| {
        when.method(PUT).path("/default/services/123");
        then.status(200).json_body(json!({"id": "123", "name": "recreated"}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/default/services/123");
        then.status(204);
    });

    let client = token_client(&server);

    let updated = client
        .services()
        .update("123", json!({"name": "renamed"}))
        .unwrap()
        .expect("updated entity");
    assert_eq!(updated.get_str("name"), Some("renamed"));

    client
        .services()
        .replace("123", json!({"name": "recreated"}))
        .unwrap()
        .expect("replaced entity");

    let deleted = client.services().delete("123").unwrap();
    assert!(deleted.is_none());

    update.assert();
    replace.assert();
    delete.assert();
}

#[test]
fn service_list_collects_data_records() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/default/services");
        then.status(200).json_body(json!({
            "data": [{"id": "1", "name": "a"}, {"id": "2", "name": "b"}],
        }));
    });

    let client = token_client(&server);
    let services = client.services().list().unwrap();

    list.assert();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].get_str("id"), Some("1"));
    assert_eq!(services[1].get_str("name"), Some("b"));
}

#[test]
fn route_create_merges_name_into_fields() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/routes")
            .json_body(json!({"name": "test-route-1", "protocols": ["http", "https"]}));
        then.status(201)
            .json_body(json!({"id": "123", "name": "test-route-1"}));
    });

    let client = token_client(&server);
    let route = client
        .routes()
        .create("test-route-1", json!({"protocols": ["http", "https"]}))
        .unwrap()
        .expect("created entity");

    create.assert();
    assert_eq!(route.get_str("name"), Some("test-route-1"));
}

#[test]
fn consumer_create_requires_username_or_custom_id() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.path_matches(r"/default/consumers.*");
        then.status(500);
    });

    let client = token_client(&server);
    let err = client.consumers().create("", "").unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    // Validation fires before any network call.
    assert_eq!(any_request.hits(), 0);
}

#[test]
fn consumer_create_sends_only_supplied_fields() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/consumers")
            .json_body(json!({"username": "test-consumer-1"}));
        then.status(201)
            .json_body(json!({"id": "123", "username": "test-consumer-1"}));
    });

    let client = token_client(&server);
    let consumer = client
        .consumers()
        .create("test-consumer-1", "")
        .unwrap()
        .expect("created entity");

    create.assert();
    assert_eq!(consumer.get_str("username"), Some("test-consumer-1"));
}

#[test]
fn consumer_nested_acl_and_key_auth_paths() {
    let server = MockServer::start();
    let acls = server.mock(|when, then| {
        when.method(GET).path("/default/consumers/123/acls");
        then.status(200)
            .json_body(json!({"data": [{"group": "admin"}]}));
    });
    let grant = server.mock(|when, then| {
        when.method(POST)
            .path("/default/consumers/123/acls")
            .json_body(json!({"group": "admin"}));
        then.status(201).json_body(json!({"id": "a1", "group": "admin"}));
    });
    let credential = server.mock(|when, then| {
        when.method(POST)
            .path("/default/consumers/123/key-auth")
            .json_body(json!({}));
        then.status(201).json_body(json!({"id": "k1", "key": "generated"}));
    });

    let client = token_client(&server);

    let groups = client.consumers().acls("123").unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].get_str("group"), Some("admin"));

    client
        .consumers()
        .add_acl("123", "admin")
        .unwrap()
        .expect("granted group");
    let key = client
        .consumers()
        .add_key_auth_credential("123", "")
        .unwrap()
        .expect("provisioned credential");
    assert_eq!(key.get_str("key"), Some("generated"));

    acls.assert();
    grant.assert();
    credential.assert();
}

#[test]
fn consumer_group_membership_endpoints() {
    let server = MockServer::start();
    let members = server.mock(|when, then| {
        when.method(GET)
            .path("/default/consumer_groups/test-group/consumers");
        then.status(200).json_body(json!({
            "consumers": [
                {"id": "123", "username": "test-consumer-1"},
                {"id": "124", "username": "test-consumer-2"},
            ]
        }));
    });
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/default/consumer_groups/test-group/consumers")
            .json_body(json!({"consumer": "test-consumer-1"}));
        then.status(201)
            .json_body(json!({"consumers": [{"id": "123"}]}));
    });
    let remove_one = server.mock(|when, then| {
        when.method(DELETE)
            .path("/default/consumer_groups/test-group/consumers/test-consumer-1");
        then.status(204);
    });
    let remove_all = server.mock(|when, then| {
        when.method(DELETE)
            .path("/default/consumer_groups/test-group/consumers");
        then.status(204);
    });

    let client = token_client(&server);
    let groups = client.consumer_groups();

    let envelope = groups.consumers("test-group").unwrap().expect("envelope");
    let member_list = envelope.get("consumers").unwrap().as_array().unwrap();
    assert_eq!(member_list.len(), 2);

    groups
        .add_consumer("test-group", "test-consumer-1")
        .unwrap()
        .expect("membership envelope");
    assert!(
        groups
            .remove_consumer("test-group", "test-consumer-1")
            .unwrap()
            .is_none()
    );
    assert!(groups.remove_consumers("test-group").unwrap().is_none());

    members.assert();
    add.assert();
    remove_one.assert();
    remove_all.assert();
}

#[test]
fn consumer_group_rate_limit_override() {
    let server = MockServer::start();
    let configure = server.mock(|when, then| {
        when.method(PUT)
            .path("/default/consumer_groups/test-group/overrides/plugins/rate-limiting-advanced")
            .json_body(json!({
                "config": {
                    "limit": [10],
                    "window_size": [60],
                    "window_type": "sliding",
                    "retry_after_jitter_max": 0,
                }
            }));
        then.status(200).json_body(json!({
            "config": {"limit": [10], "window_size": [60]},
            "group": "456",
            "plugin": "rate-limiting-advanced",
        }));
    });

    let client = token_client(&server);
    let result = client
        .consumer_groups()
        .configure_rate_limit("test-group", &[10], &[60])
        .unwrap()
        .expect("override envelope");

    configure.assert();
    assert_eq!(result.get_str("plugin"), Some("rate-limiting-advanced"));
    assert_eq!(result.get("config").unwrap()["limit"], json!([10]));
}

#[test]
fn plugin_scoped_endpoints() {
    let server = MockServer::start();
    let create_for_route = server.mock(|when, then| {
        when.method(POST)
            .path("/default/routes/test-route/plugins")
            .json_body(json!({"name": "test-plugin"}));
        then.status(201)
            .json_body(json!({"id": "789", "name": "test-plugin", "enabled": true}));
    });
    let delete_for_service = server.mock(|when, then| {
        when.method(DELETE)
            .path("/default/services/test-service/plugins/789");
        then.status(204);
    });
    let list_for_consumer = server.mock(|when, then| {
        when.method(GET).path("/default/consumers/test-consumer/plugins");
        then.status(200).json_body(json!({
            "data": [{"id": "789", "name": "test-plugin", "enabled": true}]
        }));
    });

    let client = token_client(&server);
    let plugins = client.plugins();

    let created = plugins
        .create(PluginScope::Route("test-route"), "test-plugin", None)
        .unwrap()
        .expect("created entity");
    assert_eq!(created.get_str("name"), Some("test-plugin"));

    assert!(
        plugins
            .delete(PluginScope::Service("test-service"), "789")
            .unwrap()
            .is_none()
    );

    let attached = plugins
        .list(PluginScope::Consumer("test-consumer"))
        .unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].get("enabled"), Some(&json!(true)));

    create_for_route.assert();
    delete_for_service.assert();
    list_for_consumer.assert();
}

#[test]
fn acl_plugin_create_builds_config() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/services/123/plugins")
            .json_body(json!({"name": "acl", "config": {"allow": ["admin"]}}));
        then.status(201)
            .json_body(json!({"id": "1", "name": "acl", "enabled": true}));
    });

    let client = token_client(&server);
    let result = client
        .acl()
        .create(
            PluginScope::Service("123"),
            AclConfig::allow(vec!["admin".to_string()]),
        )
        .unwrap()
        .expect("created entity");

    create.assert();
    assert_eq!(result.get_str("name"), Some("acl"));
    assert_eq!(result.get("enabled"), Some(&json!(true)));
}

#[test]
fn key_auth_plugin_lifecycle() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/services/123/plugins")
            .json_body(json!({"name": "key-auth", "config": {"key_names": ["customKey"]}}));
        then.status(201)
            .json_body(json!({"id": "1", "name": "key-auth", "enabled": true}));
    });
    let retrieve = server.mock(|when, then| {
        when.method(GET).path("/default/plugins/2");
        then.status(200)
            .json_body(json!({"id": "2", "name": "key-auth", "enabled": false}));
    });
    let update = server.mock(|when, then| {
        when.method(PATCH)
            .path("/default/plugins/3")
            .json_body(json!({"enabled": false}));
        then.status(200)
            .json_body(json!({"id": "3", "name": "key-auth", "enabled": false}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/default/plugins/4");
        then.status(204);
    });

    let client = token_client(&server);
    let key_auth = client.key_auth();

    key_auth
        .create(
            PluginScope::Service("123"),
            KeyAuthConfig::key_names(vec!["customKey".to_string()]),
        )
        .unwrap()
        .expect("created entity");

    let fetched = key_auth.retrieve("2").unwrap().expect("existing entity");
    assert_eq!(fetched.get("enabled"), Some(&json!(false)));

    key_auth
        .update("3", json!({"enabled": false}))
        .unwrap()
        .expect("updated entity");
    assert!(key_auth.delete("4").unwrap().is_none());

    create.assert();
    retrieve.assert();
    update.assert();
    delete.assert();
}

#[test]
fn rate_limiting_advanced_plugin_create_and_list() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/routes/012/plugins")
            .json_body(json!({
                "name": "rate-limiting-advanced",
                "config": {"limit": [100], "window_size": [60]},
            }));
        then.status(201).json_body(json!({
            "id": "1",
            "name": "rate-limiting-advanced",
            "enabled": true,
        }));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/default/routes/012/plugins");
        then.status(200).json_body(json!({
            "data": [
                {"id": "7", "name": "rate-limiting-advanced", "enabled": true},
                {"id": "8", "name": "rate-limiting-advanced", "enabled": false},
            ]
        }));
    });

    let client = token_client(&server);
    let rla = client.rate_limiting_advanced();

    rla.create(
        PluginScope::Route("012"),
        RateLimitingAdvancedConfig::windows(vec![100], vec![60]),
    )
    .unwrap()
    .expect("created entity");

    let attached = rla.list_for_route("012").unwrap();
    assert_eq!(attached.len(), 2);
    assert_eq!(attached[0].get_str("id"), Some("7"));

    create.assert();
    list.assert();
}

#[test]
fn workspace_endpoints() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/default/workspaces")
            .json_body(json!({"name": "team-a"}));
        then.status(201).json_body(json!({"id": "123", "name": "team-a"}));
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/default/workspaces/123")
            .json_body(json!({"comment": "updated comment"}));
        then.status(200).json_body(json!({
            "id": "123",
            "name": "team-a",
            "comment": "updated comment",
        }));
    });
    let replace = server.mock(|when, then| {
        when.method(PUT)
            .path("/default/workspaces/123")
            .json_body(json!({"name": "team-b"}));
        then.status(200).json_body(json!({"id": "123", "name": "team-b"}));
    });

    let client = token_client(&server);
    let workspaces = client.workspaces();

    workspaces.create("team-a").unwrap().expect("created entity");
    let patched = workspaces
        .update("123", json!({"comment": "updated comment"}))
        .unwrap()
        .expect("updated entity");
    assert_eq!(patched.get_str("comment"), Some("updated comment"));
    let replaced = workspaces
        .replace("123", "team-b")
        .unwrap()
        .expect("replaced entity");
    assert_eq!(replaced.get_str("name"), Some("team-b"));

    create.assert();
    patch.assert();
    replace.assert();
}
