//! RestEntity implementation for the [`Comment`] domain type.

use crate::model::Comment;
use rest_actor::RestEntity;

/// Comments are only ever listed under their post (`/posts/{id}/comments`).
impl RestEntity for Comment {
    type Id = String;
    type Create = ();
    type Update = ();
    const COLLECTION: &'static str = "comments";
}
