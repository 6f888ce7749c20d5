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

use std::fmt::{Debug, Formatter};

use super::constants::*;
use notificationapi_core::{utils::Redact, Context};

/// Hosted regions of the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    /// United States, the default region.
    #[default]
    Us,
    /// European Union.
    Eu,
    /// Canada.
    Ca,
}

impl Region {
    /// Base URL serving this region.
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Us => US_REGION,
            Region::Eu => EU_REGION,
            Region::Ca => CA_REGION,
        }
    }
}

/// Config carries all the configuration needed to initialize a [`Client`](crate::Client).
#[derive(Clone, Default)]
pub struct Config {
    /// `client_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`NOTIFICATIONAPI_CLIENT_ID`]
    pub client_id: Option<String>,
    /// `client_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`NOTIFICATIONAPI_CLIENT_SECRET`]
    pub client_secret: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`NOTIFICATIONAPI_BASE_URL`]
    ///
    /// Falls back to the US region when unset.
    pub base_url: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client_id
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client_secret
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set base_url, for a custom or proxied host.
    ///
    /// The value is used as given except for a trailing `/`, which is dropped
    /// so paths join with exactly one slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set base_url to the host of a hosted region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.base_url = Some(region.base_url().to_string());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(NOTIFICATIONAPI_CLIENT_ID) {
            self.client_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(NOTIFICATIONAPI_CLIENT_SECRET) {
            self.client_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(NOTIFICATIONAPI_BASE_URL) {
            self.base_url.get_or_insert(v);
        }

        self
    }

    /// Base URL the client talks to: the override with any trailing `/`
    /// removed, or the default host when the override is unset or empty.
    pub fn resolved_base_url(&self) -> String {
        match self.base_url.as_deref() {
            Some(v) if !v.is_empty() => v.trim_end_matches('/').to_string(),
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &Redact::from(&self.client_id))
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("base_url", &self.base_url)
            .finish()
    }
}
