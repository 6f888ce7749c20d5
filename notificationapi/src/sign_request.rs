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

//! Authorization schemes of the NotificationAPI endpoints.
use http::header::AUTHORIZATION;
use http::HeaderValue;
use notificationapi_core::hash::{base64_encode, base64_hmac_sha256};
use notificationapi_core::{Result, SignRequest};

use crate::Credential;

/// RequestSigner for application level endpoints.
///
/// ```text
/// Authorization: Basic base64({client_id}:{client_secret})
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientSigner;

impl ClientSigner {
    /// Build the authorization value for the given credential.
    pub fn authorization(&self, cred: &Credential) -> Result<HeaderValue> {
        basic(&format!("{}:{}", cred.client_id(), cred.client_secret()))
    }
}

impl SignRequest for ClientSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut http::request::Parts, cred: &Credential) -> Result<()> {
        req.headers.insert(AUTHORIZATION, self.authorization(cred)?);
        Ok(())
    }
}

/// RequestSigner for endpoints acting on behalf of one end user.
///
/// ```text
/// hashed_user_id = base64(HMAC-SHA256(client_secret, user_id))
/// Authorization: Basic base64({client_id}:{user_id}:{hashed_user_id})
/// ```
///
/// The value is derived for every request and never stored.
#[derive(Debug, Clone)]
pub struct UserSigner {
    user_id: String,
}

impl UserSigner {
    /// Create a signer for `user_id`.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
        }
    }

    /// Build the authorization value for the given credential.
    pub fn authorization(&self, cred: &Credential) -> Result<HeaderValue> {
        let hashed_user_id =
            base64_hmac_sha256(cred.client_secret().as_bytes(), self.user_id.as_bytes());

        basic(&format!(
            "{}:{}:{}",
            cred.client_id(),
            self.user_id,
            hashed_user_id
        ))
    }
}

impl SignRequest for UserSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut http::request::Parts, cred: &Credential) -> Result<()> {
        req.headers.insert(AUTHORIZATION, self.authorization(cred)?);
        Ok(())
    }
}

fn basic(token: &str) -> Result<HeaderValue> {
    let mut value: HeaderValue = format!("Basic {}", base64_encode(token.as_bytes())).parse()?;
    value.set_sensitive(true);

    Ok(value)
}
