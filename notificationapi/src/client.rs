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

use bytes::Bytes;
use http::{Method, StatusCode};
use log::{debug, error, warn};
use notificationapi_core::{Context, Error, Result, SignRequest};

use crate::request::encode_segment;
use crate::types::*;
use crate::{ClientSigner, Config, Credential, OutboundRequest, UserSigner};

/// Client of the NotificationAPI service.
///
/// Holds the account credential and base URL set by [`Client::new`] or
/// [`Client::init`]. Operations only read this state, so a client can be shared
/// (or cloned) across tasks freely; re-initialization needs exclusive access.
///
/// Every operation issues exactly one HTTP call and never retries.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    base_url: String,
}

impl Client {
    /// Create a client from `config`.
    ///
    /// Fails without touching the network when the client id or secret is absent
    /// or empty.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = Credential::try_from(&config)?;

        Ok(Self {
            ctx,
            credential,
            base_url: config.resolved_base_url(),
        })
    }

    /// Replace credential and base URL.
    ///
    /// On error the previous state is kept.
    pub fn init(&mut self, config: Config) -> Result<()> {
        self.credential = Credential::try_from(&config)?;
        self.base_url = config.resolved_base_url();
        Ok(())
    }

    /// Client id in use.
    pub fn client_id(&self) -> &str {
        self.credential.client_id()
    }

    /// Base URL in use, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to the service.
    ///
    /// - `202 Accepted` is logged as a warning and still returned.
    /// - Any other non-2xx status is returned as
    ///   [`ErrorKind::RequestFailed`](notificationapi_core::ErrorKind::RequestFailed).
    /// - Every failure, including a request that cannot be built, is logged
    ///   once before it is returned.
    pub async fn request(&self, req: OutboundRequest) -> Result<http::Response<Bytes>> {
        self.execute(Ok(req)).await
    }

    async fn execute(&self, req: Result<OutboundRequest>) -> Result<http::Response<Bytes>> {
        let result = match req {
            Ok(req) => self.dispatch(req).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            match err.body() {
                Some(body) => error!(
                    "NotificationAPI error. {err}, body: {}",
                    String::from_utf8_lossy(body)
                ),
                None => error!("NotificationAPI error. {err:?}"),
            }
        }
        result
    }

    async fn dispatch(&self, req: OutboundRequest) -> Result<http::Response<Bytes>> {
        let has_override = req.authorization.is_some();
        let req = req.into_http(&self.base_url, self.credential.client_id())?;
        let (mut parts, body) = req.into_parts();
        if !has_override {
            ClientSigner.sign_request(&mut parts, &self.credential)?;
        }
        debug!("sending request: {} {}", parts.method, parts.uri);

        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, body))
            .await?;

        let status = resp.status();
        if status == StatusCode::ACCEPTED {
            warn!(
                "NotificationAPI warning. {}",
                String::from_utf8_lossy(resp.body())
            );
        } else if !status.is_success() {
            return Err(Error::request_failed(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
            .with_response(status, resp.into_body()));
        }

        Ok(resp)
    }

    /// Attach the authorization of `user_id` to `req`.
    fn user_scoped(&self, user_id: &str, req: OutboundRequest) -> Result<OutboundRequest> {
        Ok(req.with_authorization(UserSigner::new(user_id).authorization(&self.credential)?))
    }

    /// Send a notification to a user.
    pub async fn send(&self, req: &SendRequest) -> Result<http::Response<Bytes>> {
        self.execute(OutboundRequest::new(Method::POST, "sender").with_json(req))
            .await
    }

    /// Delete already delivered notifications of a user.
    pub async fn retract(&self, req: &RetractRequest) -> Result<http::Response<Bytes>> {
        self.execute(OutboundRequest::new(Method::POST, "sender/retract").with_json(req))
            .await
    }

    /// Query delivery logs.
    pub async fn query_logs(&self, req: &QueryLogsRequest) -> Result<http::Response<Bytes>> {
        self.execute(OutboundRequest::new(Method::POST, "logs/query").with_json(req))
            .await
    }

    /// Create a sub-notification under a notification.
    pub async fn create_sub_notification(
        &self,
        req: &CreateSubNotificationRequest,
    ) -> Result<http::Response<Bytes>> {
        let path = sub_notification_path(&req.notification_id, &req.sub_notification_id);
        let body = serde_json::json!({ "title": req.title });

        self.execute(OutboundRequest::new(Method::PUT, path).with_json(&body))
            .await
    }

    /// Delete a sub-notification.
    pub async fn delete_sub_notification(
        &self,
        req: &DeleteSubNotificationRequest,
    ) -> Result<http::Response<Bytes>> {
        let path = sub_notification_path(&req.notification_id, &req.sub_notification_id);

        self.request(OutboundRequest::new(Method::DELETE, path)).await
    }

    /// Set the notification preferences of a user.
    pub async fn set_user_preferences(
        &self,
        user_id: &str,
        preferences: &[UserPreference],
    ) -> Result<http::Response<Bytes>> {
        let path = format!("user_preferences/{}", encode_segment(user_id));

        self.execute(OutboundRequest::new(Method::POST, path).with_json(preferences))
            .await
    }

    /// Delete the stored preferences of a user for a notification, or only for
    /// one of its sub-notifications.
    pub async fn delete_user_preferences(
        &self,
        user_id: &str,
        notification_id: &str,
        sub_notification_id: Option<&str>,
    ) -> Result<http::Response<Bytes>> {
        let path = format!("users/{}/preferences", encode_segment(user_id));
        let mut req =
            OutboundRequest::new(Method::DELETE, path).with_query("notificationId", notification_id);
        if let Some(sub_notification_id) = sub_notification_id {
            req = req.with_query("subNotificationId", sub_notification_id);
        }

        self.execute(self.user_scoped(user_id, req)).await
    }

    /// Create or update a user.
    ///
    /// The id travels in the path, every other field in the body.
    pub async fn identify_user(&self, user: &User) -> Result<http::Response<Bytes>> {
        let path = format!("users/{}", encode_segment(&user.id));
        let req = OutboundRequest::new(Method::POST, path)
            .with_json(&UserData::from(user))
            .and_then(|req| self.user_scoped(&user.id, req));

        self.execute(req).await
    }

    /// Update the opened, clicked, archived, ... state of in-app notifications.
    pub async fn update_in_app_notification(
        &self,
        user_id: &str,
        req: &InAppNotificationPatchRequest,
    ) -> Result<http::Response<Bytes>> {
        let path = format!("users/{}/notifications/INAPP_WEB", encode_segment(user_id));
        let req = OutboundRequest::new(Method::PATCH, path)
            .with_json(req)
            .and_then(|req| self.user_scoped(user_id, req));

        self.execute(req).await
    }

    /// Update a scheduled notification.
    pub async fn update_schedule(
        &self,
        tracking_id: &str,
        req: &UpdateScheduleRequest,
    ) -> Result<http::Response<Bytes>> {
        let path = format!("schedule/{}", encode_segment(tracking_id));

        self.execute(OutboundRequest::new(Method::PATCH, path).with_json(req))
            .await
    }

    /// Cancel a scheduled notification.
    pub async fn delete_schedule(&self, tracking_id: &str) -> Result<http::Response<Bytes>> {
        let path = format!("schedule/{}", encode_segment(tracking_id));

        self.request(OutboundRequest::new(Method::DELETE, path)).await
    }
}

fn sub_notification_path(notification_id: &str, sub_notification_id: &str) -> String {
    format!(
        "notifications/{}/subNotifications/{}",
        encode_segment(notification_id),
        encode_segment(sub_notification_id)
    )
}
