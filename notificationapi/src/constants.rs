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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by notificationapi.
pub const NOTIFICATIONAPI_CLIENT_ID: &str = "NOTIFICATIONAPI_CLIENT_ID";
pub const NOTIFICATIONAPI_CLIENT_SECRET: &str = "NOTIFICATIONAPI_CLIENT_SECRET";
pub const NOTIFICATIONAPI_BASE_URL: &str = "NOTIFICATIONAPI_BASE_URL";

// Regional hosts.
pub const US_REGION: &str = "https://api.notificationapi.com";
pub const EU_REGION: &str = "https://api.eu.notificationapi.com";
pub const CA_REGION: &str = "https://api.ca.notificationapi.com";

pub const DEFAULT_BASE_URL: &str = US_REGION;

pub const USER_AGENT: &str = concat!(
    "notificationapi-rust-server-sdk/",
    env!("CARGO_PKG_VERSION")
);

/// AsciiSet for a single path segment.
///
/// Encode every byte except the characters left alone by `encodeURIComponent`:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '_', '.', '!', '~', '*', '\'', '(' and ')'.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
