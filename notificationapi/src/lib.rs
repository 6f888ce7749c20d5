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

//! Server-side SDK for [NotificationAPI](https://www.notificationapi.com).
//!
//! The [`Client`] builds one authenticated HTTP request per operation, sends it
//! through the [`HttpSend`](notificationapi_core::HttpSend) configured on its
//! [`Context`], and classifies the response:
//!
//! - `2xx`: success. `202 Accepted` additionally logs a warning.
//! - anything else: logged, then returned as an [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use notificationapi::{Client, Config, Region, SendRequest, User};
//! use notificationapi_core::Context;
//! use notificationapi_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> notificationapi::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let client = Client::new(
//!         ctx,
//!         Config::new()
//!             .with_client_id("your-client-id")
//!             .with_client_secret("your-client-secret")
//!             .with_region(Region::Eu),
//!     )?;
//!
//!     let user = User::new("user-1").with_email("user@example.com");
//!     client.send(&SendRequest::new("order_shipped", user)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials From Env
//!
//! ```bash
//! export NOTIFICATIONAPI_CLIENT_ID=your-client-id
//! export NOTIFICATIONAPI_CLIENT_SECRET=your-client-secret
//! export NOTIFICATIONAPI_BASE_URL=https://api.ca.notificationapi.com  # Optional
//! ```
//!
//! ```no_run
//! use notificationapi::{Client, Config};
//! use notificationapi_core::{Context, OsEnv};
//!
//! let ctx = Context::new().with_env(OsEnv);
//! let client = Client::new(ctx.clone(), Config::new().from_env(&ctx))?;
//! # Ok::<(), notificationapi::Error>(())
//! ```
//!
//! ## Authorization
//!
//! Application level endpoints are signed by [`ClientSigner`]. Endpoints acting
//! for one end user (identify, delete preferences, in-app state) are signed by
//! [`UserSigner`] with a credential derived from the user id.

mod constants;

mod config;
pub use config::{Config, Region};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{ClientSigner, UserSigner};

mod request;
pub use request::OutboundRequest;

mod client;
pub use client::Client;

mod types;
pub use types::{
    Attachment, Channel, CreateSubNotificationRequest, DateRangeFilter, Delivery,
    DeleteSubNotificationRequest, Device, EmailOptions, InAppNotificationPatchRequest,
    InAppReply, PushProvider, PushSubscription, PushSubscriptionKeys, PushToken,
    QueryLogsRequest, RetractRequest, SendOptions, SendRequest, UpdateScheduleRequest, User,
    UserPreference, WebPushToken,
};

pub use notificationapi_core::{Error, ErrorKind, Result};
