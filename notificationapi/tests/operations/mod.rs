use http::Method;
use notificationapi::*;
use notificationapi_core::hash::{base64_encode, base64_hmac_sha256};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mock::*;

const BASE: &str = "https://api.notificationapi.com/testClientId";

fn user_authorization(user_id: &str) -> String {
    let hashed = base64_hmac_sha256(CLIENT_SECRET.as_bytes(), user_id.as_bytes());
    format!(
        "Basic {}",
        base64_encode(format!("{CLIENT_ID}:{user_id}:{hashed}").as_bytes())
    )
}

fn client_authorization() -> String {
    format!(
        "Basic {}",
        base64_encode(format!("{CLIENT_ID}:{CLIENT_SECRET}").as_bytes())
    )
}

#[tokio::test]
async fn test_send_body_has_no_extra_keys() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let user = User::new("userId")
        .with_email("test+node_server_sdk@notificationapi.com")
        .with_number("08310000");

    client(&mock)
        .send(&SendRequest::new("notifId", user))
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{BASE}/sender"));
    assert_eq!(
        req.json(),
        json!({
            "notificationId": "notifId",
            "user": {
                "id": "userId",
                "email": "test+node_server_sdk@notificationapi.com",
                "number": "08310000"
            }
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_send_forwards_optional_fields() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let mut merge_tags = serde_json::Map::new();
    merge_tags.insert("x".to_string(), json!("y"));
    let mut req = SendRequest::new("notifId", User::new("userId")).with_merge_tags(merge_tags);
    req.replace = Some([("x".to_string(), "y".to_string())].into());
    req.secondary_id = Some("secondary".to_string());
    req.template_id = Some("templateId".to_string());
    req.schedule = Some("2024-02-20T14:38:03.509Z".to_string());
    req.force_channels = Some(vec![Channel::Email]);
    req.options = Some(SendOptions {
        email: Some(EmailOptions {
            reply_to_addresses: Some(vec!["test@test.com".to_string()]),
            cc_addresses: Some(vec!["test@test.com".to_string()]),
            bcc_addresses: Some(vec!["test@test.com".to_string()]),
            attachments: Some(vec![Attachment {
                filename: "Inapp_image_sample".to_string(),
                url: "https://notificationapi.com".to_string(),
            }]),
        }),
    });

    client(&mock).send(&req).await?;

    let body = mock.only_request().json();
    assert_eq!(body["mergeTags"], json!({ "x": "y" }));
    assert_eq!(body["replace"], json!({ "x": "y" }));
    assert_eq!(body["secondaryId"], "secondary");
    assert_eq!(body["templateId"], "templateId");
    assert_eq!(body["schedule"], "2024-02-20T14:38:03.509Z");
    assert_eq!(body["forceChannels"], json!(["EMAIL"]));
    assert_eq!(
        body["options"],
        json!({
            "email": {
                "replyToAddresses": ["test@test.com"],
                "ccAddresses": ["test@test.com"],
                "bccAddresses": ["test@test.com"],
                "attachments": [
                    { "filename": "Inapp_image_sample", "url": "https://notificationapi.com" }
                ]
            }
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_retract() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .retract(&RetractRequest {
            notification_id: "notificationId".to_string(),
            user_id: "userId".to_string(),
            sub_notification_id: Some("subNotificationId".to_string()),
            ..Default::default()
        })
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{BASE}/sender/retract"));
    assert_eq!(
        req.json(),
        json!({
            "notificationId": "notificationId",
            "userId": "userId",
            "subNotificationId": "subNotificationId"
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_query_logs() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let query = QueryLogsRequest {
        date_range_filter: Some(DateRangeFilter {
            start_time: 1715904000000,
            end_time: 1718668799999,
        }),
        notification_filter: Some(vec!["test".to_string()]),
        channel_filter: Some(vec![Channel::Call]),
        user_filter: Some(vec!["test+node_server_sdk@notificationapi.com".to_string()]),
        status_filter: Some(vec!["FAILURE".to_string()]),
        tracking_ids: Some(vec!["e2d6987f-52c".to_string()]),
        env_id_filter: Some(vec![CLIENT_ID.to_string()]),
        ..Default::default()
    };

    client(&mock).query_logs(&query).await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{BASE}/logs/query"));
    assert_eq!(
        req.json(),
        json!({
            "dateRangeFilter": { "startTime": 1715904000000i64, "endTime": 1718668799999i64 },
            "notificationFilter": ["test"],
            "channelFilter": ["CALL"],
            "userFilter": ["test+node_server_sdk@notificationapi.com"],
            "statusFilter": ["FAILURE"],
            "trackingIds": ["e2d6987f-52c"],
            "envIdFilter": ["testClientId"]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_create_sub_notification() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .create_sub_notification(&CreateSubNotificationRequest {
            notification_id: "n".to_string(),
            sub_notification_id: "s".to_string(),
            title: "t".to_string(),
        })
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url, format!("{BASE}/notifications/n/subNotifications/s"));
    assert_eq!(req.body.as_ref(), br#"{"title":"t"}"#);
    assert_eq!(req.header("authorization"), Some(client_authorization().as_str()));
    Ok(())
}

#[tokio::test]
async fn test_delete_sub_notification() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .delete_sub_notification(&DeleteSubNotificationRequest {
            notification_id: "notificationId".to_string(),
            sub_notification_id: "subNotificationId".to_string(),
        })
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(
        req.url,
        format!("{BASE}/notifications/notificationId/subNotifications/subNotificationId")
    );
    assert!(req.body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_set_user_preferences() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let preferences = vec![
        UserPreference {
            notification_id: "notificationId".to_string(),
            ..Default::default()
        },
        UserPreference {
            notification_id: "notificationId".to_string(),
            delivery: Some(Delivery::Weekly),
            ..Default::default()
        },
        UserPreference {
            notification_id: "notificationId".to_string(),
            channel: Some(Channel::Email),
            sub_notification_id: Some("subNotificationId".to_string()),
            ..Default::default()
        },
    ];

    client(&mock)
        .set_user_preferences("testUserId", &preferences)
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{BASE}/user_preferences/testUserId"));
    assert_eq!(req.header("authorization"), Some(client_authorization().as_str()));
    assert_eq!(
        req.json(),
        json!([
            { "notificationId": "notificationId" },
            { "notificationId": "notificationId", "delivery": "weekly" },
            {
                "notificationId": "notificationId",
                "channel": "EMAIL",
                "subNotificationId": "subNotificationId"
            }
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_user_preferences_without_sub_notification() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .delete_user_preferences("testUserId", "testNotificationId", None)
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(
        req.url,
        format!("{BASE}/users/testUserId/preferences?notificationId=testNotificationId")
    );
    assert_eq!(
        req.header("authorization"),
        Some("Basic dGVzdENsaWVudElkOnRlc3RVc2VySWQ6aUpIWVgwRjNYWDQxRkVsd0RoQnlFRmt2dWx4TS9ETmVvckVTcVVHYklYaz0=")
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_user_preferences_with_sub_notification() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .delete_user_preferences(
            "testUserId",
            "testNotificationId",
            Some("testSubNotificationId"),
        )
        .await?;

    let req = mock.only_request();
    assert_eq!(
        req.url,
        format!(
            "{BASE}/users/testUserId/preferences?notificationId=testNotificationId&subNotificationId=testSubNotificationId"
        )
    );
    assert_eq!(
        req.header("authorization"),
        Some(user_authorization("testUserId").as_str())
    );
    Ok(())
}

#[tokio::test]
async fn test_update_in_app_notification() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let patch = InAppNotificationPatchRequest {
        tracking_ids: vec!["testTrackingId".to_string()],
        opened: Some("1970-01-01T00:00:00.000Z".to_string()),
        clicked: Some("1970-01-01T00:00:00.000Z".to_string()),
        archived: Some("1970-01-01T00:00:00.000Z".to_string()),
        actioned1: Some("1970-01-01T00:00:00.000Z".to_string()),
        actioned2: Some("1970-01-01T00:00:00.000Z".to_string()),
        reply: Some(InAppReply {
            date: "1970-01-01T00:00:00.000Z".to_string(),
            message: "nice!".to_string(),
        }),
    };

    client(&mock)
        .update_in_app_notification("testUserId", &patch)
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.url, format!("{BASE}/users/testUserId/notifications/INAPP_WEB"));
    assert_eq!(
        req.header("authorization"),
        Some(user_authorization("testUserId").as_str())
    );
    assert_eq!(
        req.json(),
        json!({
            "trackingIds": ["testTrackingId"],
            "opened": "1970-01-01T00:00:00.000Z",
            "clicked": "1970-01-01T00:00:00.000Z",
            "archived": "1970-01-01T00:00:00.000Z",
            "actioned1": "1970-01-01T00:00:00.000Z",
            "actioned2": "1970-01-01T00:00:00.000Z",
            "reply": { "date": "1970-01-01T00:00:00.000Z", "message": "nice!" }
        })
    );
    assert!(!req.url.contains('?'));
    Ok(())
}

#[tokio::test]
async fn test_identify_user() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let user = User {
        id: "testUserId_identify_user".to_string(),
        email: Some("test+node_server_sdk@notificationapi.com".to_string()),
        number: Some("+15005550006".to_string()),
        push_tokens: Some(vec![PushToken {
            provider: PushProvider::Fcm,
            token: "samplePushToken".to_string(),
            device: Device {
                app_id: Some("sample_app_id".to_string()),
                ad_id: Some("sample_ad_id".to_string()),
                device_id: "sample_device_id".to_string(),
                platform: Some("sample_platform".to_string()),
                manufacturer: Some("sample_manufacturer".to_string()),
                model: Some("sample_model".to_string()),
            },
        }]),
        web_push_tokens: Some(vec![WebPushToken {
            sub: PushSubscription {
                endpoint: "sample_endpoint".to_string(),
                keys: PushSubscriptionKeys {
                    p256dh: "sample_p256dh".to_string(),
                    auth: "sample_auth".to_string(),
                },
            },
        }]),
    };

    client(&mock).identify_user(&user).await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, format!("{BASE}/users/testUserId_identify_user"));
    assert_eq!(
        req.header("authorization"),
        Some(user_authorization("testUserId_identify_user").as_str())
    );
    assert_eq!(
        req.json(),
        json!({
            "email": "test+node_server_sdk@notificationapi.com",
            "number": "+15005550006",
            "pushTokens": [{
                "type": "FCM",
                "token": "samplePushToken",
                "device": {
                    "app_id": "sample_app_id",
                    "ad_id": "sample_ad_id",
                    "device_id": "sample_device_id",
                    "platform": "sample_platform",
                    "manufacturer": "sample_manufacturer",
                    "model": "sample_model"
                }
            }],
            "webPushTokens": [{
                "sub": {
                    "endpoint": "sample_endpoint",
                    "keys": { "p256dh": "sample_p256dh", "auth": "sample_auth" }
                }
            }]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_identify_user_encodes_id() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock)
        .identify_user(&User::new("jane+1@example.com"))
        .await?;

    let req = mock.only_request();
    assert_eq!(req.url, format!("{BASE}/users/jane%2B1%40example.com"));
    assert_eq!(
        req.header("authorization"),
        Some(user_authorization("jane+1@example.com").as_str())
    );
    assert_eq!(req.json(), json!({}));
    Ok(())
}

#[tokio::test]
async fn test_update_schedule() -> Result<()> {
    let mock = MockHttpSend::reply(200);
    let mut merge_tags = serde_json::Map::new();
    merge_tags.insert("x".to_string(), json!("y"));

    client(&mock)
        .update_schedule(
            "trackingId",
            &UpdateScheduleRequest {
                merge_tags: Some(merge_tags),
                schedule: Some("2024-02-20T14:38:03.509Z".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::PATCH);
    assert_eq!(req.url, format!("{BASE}/schedule/trackingId"));
    assert_eq!(
        req.body.as_ref(),
        br#"{"mergeTags":{"x":"y"},"schedule":"2024-02-20T14:38:03.509Z"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_delete_schedule() -> Result<()> {
    let mock = MockHttpSend::reply(200);

    client(&mock).delete_schedule("trackingId").await?;

    let req = mock.only_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.url, format!("{BASE}/schedule/trackingId"));
    assert_eq!(req.header("authorization"), Some(client_authorization().as_str()));
    Ok(())
}
