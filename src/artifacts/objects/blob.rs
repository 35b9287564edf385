//! Blob object
//!
//! Blobs store raw file content captured at staging time. They carry no
//! metadata (no filename, no mode); the staging index maps filenames to
//! blob hashes.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;

/// File content captured by `add`
///
/// Never mutated after construction and retained in the content store
/// indefinitely; identical content always hashes to the same blob.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: String,
}

impl Blob {
    pub fn into_content(self) -> String {
        self.content
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn content(&self) -> &str {
        &self.content
    }
}
