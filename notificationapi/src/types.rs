// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Payloads accepted by the NotificationAPI endpoints.
//!
//! Every optional field is left out of the JSON body when unset; the service
//! treats a missing key and an explicit `null` differently.

use std::collections::BTreeMap;

use notificationapi_core::time::{format_iso8601, DateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Delivery channels supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    /// Email
    Email,
    /// In-app web inbox
    InappWeb,
    /// Text message
    Sms,
    /// Automated phone call
    Call,
    /// Mobile push
    Push,
    /// Browser push
    WebPush,
}

/// Providers of mobile push tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PushProvider {
    /// Firebase Cloud Messaging
    Fcm,
    /// Apple Push Notification service
    Apn,
}

/// The end user a notification is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The ID of the user in your system.
    pub id: String,
    /// Required for email notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Required for SMS and call notifications, e.g. `+15005550006`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// One token per mobile device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_tokens: Option<Vec<PushToken>>,
    /// One token per browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_push_tokens: Option<Vec<WebPushToken>>,
}

impl User {
    /// Create a user with only its id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Body of the identify call: every user field except `id`, which travels in the path.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push_tokens: Option<&'a [PushToken]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    web_push_tokens: Option<&'a [WebPushToken]>,
}

impl<'a> From<&'a User> for UserData<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            email: user.email.as_deref(),
            number: user.number.as_deref(),
            push_tokens: user.push_tokens.as_deref(),
            web_push_tokens: user.web_push_tokens.as_deref(),
        }
    }
}

/// A mobile push token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushToken {
    /// Provider the token belongs to.
    #[serde(rename = "type")]
    pub provider: PushProvider,
    /// The full token string.
    pub token: String,
    /// Device the token is associated with.
    pub device: Device,
}

/// Device information attached to a push token.
///
/// Keys are snake_case on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Id of the application the token is used for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Advertising identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    /// Id of the device
    pub device_id: String,
    /// Platform, e.g. android or ios
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Device manufacturer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Device model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A browser push token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebPushToken {
    /// Subscription as produced by `pushManager.subscribe()` in the browser.
    pub sub: PushSubscription,
}

/// Web push subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSubscription {
    /// Push service endpoint.
    pub endpoint: String,
    /// Encryption keys of the subscription.
    pub keys: PushSubscriptionKeys,
}

/// Keys of a web push subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSubscriptionKeys {
    /// P-256 ECDH public key.
    pub p256dh: String,
    /// Authentication secret.
    pub auth: String,
}

/// Request of the send operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    /// The ID of the notification.
    pub notification_id: String,
    /// The user to send the notification to.
    pub user: User,
    /// Dynamic values injected into the notification design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_tags: Option<Map<String, Value>>,
    /// Case-sensitive string replacements applied after merge tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<BTreeMap<String, String>>,
    /// Override the channels used for the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_channels: Option<Vec<Channel>>,
    /// Deprecated, prefer `sub_notification_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    /// ISO 8601 datetime to schedule the notification for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Force a specific template instead of the channel default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Subcategory within the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_notification_id: Option<String>,
    /// Per-channel delivery options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
}

impl SendRequest {
    /// Create a send request for `user`.
    pub fn new(notification_id: impl Into<String>, user: User) -> Self {
        Self {
            notification_id: notification_id.into(),
            user,
            ..Default::default()
        }
    }

    /// Set merge_tags
    pub fn with_merge_tags(mut self, merge_tags: Map<String, Value>) -> Self {
        self.merge_tags = Some(merge_tags);
        self
    }

    /// Set sub_notification_id
    pub fn with_sub_notification_id(mut self, sub_notification_id: impl Into<String>) -> Self {
        self.sub_notification_id = Some(sub_notification_id.into());
        self
    }

    /// Schedule the delivery at `at`.
    pub fn with_schedule(mut self, at: DateTime) -> Self {
        self.schedule = Some(format_iso8601(at));
        self
    }
}

/// Partial send request used to update a scheduled notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    /// The ID of the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    /// The user to send the notification to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Dynamic values injected into the notification design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_tags: Option<Map<String, Value>>,
    /// Case-sensitive string replacements applied after merge tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<BTreeMap<String, String>>,
    /// Override the channels used for the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_channels: Option<Vec<Channel>>,
    /// Deprecated, prefer `sub_notification_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    /// ISO 8601 datetime to schedule the notification for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Force a specific template instead of the channel default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Subcategory within the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_notification_id: Option<String>,
    /// Per-channel delivery options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
}

/// Delivery options of a send request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendOptions {
    /// Options of the email channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailOptions>,
}

/// Options of the email channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailOptions {
    /// Addresses used in the reply-to field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_addresses: Option<Vec<String>>,
    /// Addresses CC'ed on the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_addresses: Option<Vec<String>>,
    /// Addresses BCC'ed on the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_addresses: Option<Vec<String>>,
    /// Publicly reachable files attached to the email, 10MB in total at most.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

/// Email attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name including its extension.
    pub filename: String,
    /// URL the file is downloaded from; it only needs to stay valid for a few minutes.
    pub url: String,
}

/// Request of the retract operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetractRequest {
    /// The ID of the notification.
    pub notification_id: String,
    /// The ID of the user in your system.
    pub user_id: String,
    /// Deprecated, prefer `sub_notification_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    /// Subcategory within the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_notification_id: Option<String>,
}

/// Request of the create sub-notification operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubNotificationRequest {
    /// The ID of the parent notification.
    pub notification_id: String,
    /// The ID of the sub-notification.
    pub sub_notification_id: String,
    /// Title of the sub-notification.
    pub title: String,
}

/// Request of the delete sub-notification operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSubNotificationRequest {
    /// The ID of the parent notification.
    pub notification_id: String,
    /// The ID of the sub-notification.
    pub sub_notification_id: String,
}

/// Delivery frequency of a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// Never deliver
    Off,
    /// Deliver right away
    Instant,
    /// Hourly digest
    Hourly,
    /// Daily digest
    Daily,
    /// Weekly digest
    Weekly,
    /// Monthly digest
    Monthly,
}

/// One notification preference of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    /// The ID of the notification.
    pub notification_id: String,
    /// Channel the preference applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// Delivery frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    /// Whether the channel is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<bool>,
    /// Subcategory within the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_notification_id: Option<String>,
}

/// Reply left on an in-app notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InAppReply {
    /// ISO 8601 datetime of the reply.
    pub date: String,
    /// Reply text.
    pub message: String,
}

/// State change applied to in-app notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppNotificationPatchRequest {
    /// Notifications to update.
    pub tracking_ids: Vec<String>,
    /// ISO 8601 datetime the notifications were opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<String>,
    /// ISO 8601 datetime the notifications were clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<String>,
    /// ISO 8601 datetime the notifications were archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<String>,
    /// ISO 8601 datetime the first action button was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actioned1: Option<String>,
    /// ISO 8601 datetime the second action button was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actioned2: Option<String>,
    /// Reply left by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<InAppReply>,
}

/// Time window of a log query, in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeFilter {
    /// Start of the window.
    pub start_time: i64,
    /// End of the window.
    pub end_time: i64,
}

/// Request of the log query operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryLogsRequest {
    /// Time window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range_filter: Option<DateRangeFilter>,
    /// Notification ids to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_filter: Option<Vec<String>>,
    /// Channels to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_filter: Option<Vec<Channel>>,
    /// Users to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_filter: Option<Vec<String>>,
    /// Statuses to keep, e.g. `FAILURE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<Vec<String>>,
    /// Tracking ids to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_ids: Option<Vec<String>>,
    /// Request ids to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_filter: Option<Vec<String>>,
    /// Environments to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_id_filter: Option<Vec<String>>,
    /// Raw query expression; replaces the structured filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_filter: Option<String>,
}
