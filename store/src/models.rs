//! Domain models for the users resource.
//!
//! [`User`] is a backend row as it crosses the wire. The id is assigned
//! server-side and is the only identity the client tracks; the client never
//! generates one. [`UserFields`] is the client-writable subset submitted as
//! the body of create and update requests.

use serde::{Deserialize, Serialize};

/// A user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// The writable subset of a user, sent as a request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}
