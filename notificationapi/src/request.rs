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
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderValue, Method};
use notificationapi_core::Result;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;

use super::constants::{PATH_SEGMENT_ENCODE_SET, USER_AGENT as SDK_USER_AGENT};

/// A single call to the service, built per operation and consumed by
/// [`Client::request`](crate::Client::request).
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to `{base_url}/{client_id}/`.
    pub path: String,
    /// JSON encoded body.
    pub body: Option<Bytes>,
    /// Authorization used verbatim instead of the client credential.
    pub authorization: Option<HeaderValue>,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl OutboundRequest {
    /// Create a request without body, query or authorization override.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            authorization: None,
            query: Vec::new(),
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Use `authorization` instead of the client credential.
    pub fn with_authorization(mut self, authorization: HeaderValue) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Push a new query pair into query list.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Full URL under `base_url` for `client_id`.
    pub fn url(&self, base_url: &str, client_id: &str) -> String {
        let mut url = format!("{base_url}/{}/{}", encode_segment(client_id), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&self.query)
                    .finish(),
            );
        }
        url
    }

    /// Convert into an `http::Request`, leaving authorization to the caller when
    /// no override is set.
    pub(crate) fn into_http(self, base_url: &str, client_id: &str) -> Result<http::Request<Bytes>> {
        let mut builder = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url(base_url, client_id))
            .header(USER_AGENT, SDK_USER_AGENT);
        if self.body.is_some() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(authorization) = self.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        Ok(builder.body(self.body.unwrap_or_default())?)
    }
}

/// Percent encode one path segment taken from caller input.
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, &PATH_SEGMENT_ENCODE_SET).to_string()
}
