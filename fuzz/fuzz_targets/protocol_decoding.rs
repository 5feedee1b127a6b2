// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for worker message decoding.
//!
//! Whatever arrives on the request channel, decoding must return a request or
//! a typed error. Errors that carry a request id must turn into an error
//! response for that id; errors without one must stay silent.

#![no_main]

use clipfind::worker::protocol::{decode_request_str, error_response};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    match decode_request_str(json) {
        Ok(request) => {
            // a decoded request survives a trip back to JSON
            let value = request.to_value().unwrap();
            let again = clipfind::decode_request(&value).unwrap();
            assert_eq!(again, request);
        }
        Err(err) => match (err.request_id(), error_response(&err)) {
            (Some(id), Some(response)) => assert_eq!(response.request_id(), Some(id)),
            (None, None) => {}
            (id, response) => panic!("request id {:?} but response {:?}", id, response),
        },
    }
});
