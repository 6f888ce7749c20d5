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

use notificationapi_core::{utils::Redact, Error, Result};

use crate::Config;

/// Credential identifying the integrating account.
///
/// Both fields are non-empty: the only way to build one is through
/// [`Credential::new`], which rejects empty values.
#[derive(Clone)]
pub struct Credential {
    client_id: String,
    client_secret: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// The client id is checked first, so a call with both values empty reports
    /// [`ErrorKind::InvalidIdentifier`](notificationapi_core::ErrorKind::InvalidIdentifier).
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        if client_id.is_empty() {
            return Err(Error::invalid_identifier("Bad clientId"));
        }
        if client_secret.is_empty() {
            return Err(Error::invalid_secret("Bad clientSecret"));
        }

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }

    /// Client id of the account.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Client secret of the account.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl TryFrom<&Config> for Credential {
    type Error = Error;

    fn try_from(cfg: &Config) -> Result<Self> {
        Credential::new(
            cfg.client_id.as_deref().unwrap_or_default(),
            cfg.client_secret.as_deref().unwrap_or_default(),
        )
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &Redact::from(&self.client_id))
            .field("client_secret", &Redact::from(&self.client_secret))
            .finish()
    }
}
