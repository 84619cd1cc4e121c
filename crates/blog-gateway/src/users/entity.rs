//! RestEntity implementation for the [`User`] domain type.

use crate::model::User;
use rest_actor::RestEntity;

/// Users are read-only through the gateway: nothing is ever created or patched.
impl RestEntity for User {
    type Id = String;
    type Create = ();
    type Update = ();
    const COLLECTION: &'static str = "users";
}
