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

//! Core components for the NotificationAPI server SDK.
//!
//! This crate holds the pieces shared by the client and its transports:
//!
//! - **Context**: a container for the HTTP sender and environment access
//! - **Traits**: [`HttpSend`] for transports, [`SignRequest`] for
//!   authorization schemes
//! - **Error**: the [`Error`] type with its [`ErrorKind`] taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use notificationapi_core::{Context, HttpSend, Result};
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct EchoHttpSend;
//!
//! #[async_trait::async_trait]
//! impl HttpSend for EchoHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(req.into_body()))
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(EchoHttpSend);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and HMAC-SHA256 helpers
//! - [`time`]: timestamp formatting for scheduled deliveries
//! - [`utils`]: redaction of credentials in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::SignRequest;

mod error;
pub use error::{Error, ErrorKind, Result};
