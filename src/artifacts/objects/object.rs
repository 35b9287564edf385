use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

/// Compute the content hash for a tagged payload
///
/// The hashed data is `<tag> <len>\0<content>`, so two payloads with the same
/// tag and content always produce the same ID. Pure function, no side effects.
pub fn digest(tag: &str, content: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(format!("{} {}\0", tag, content.len()).as_bytes());
    hasher.update(content);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

/// Digest summarizing a full filename -> content-hash snapshot
///
/// Entries are hashed in lexicographic filename order (the BTreeMap iteration
/// order), so tree identity depends only on the staged content, never on the
/// order files were staged in.
pub fn tree_digest(entries: &BTreeMap<String, ObjectId>) -> Result<ObjectId> {
    let mut content = String::new();
    for (name, oid) in entries {
        content.push_str(name);
        content.push(' ');
        content.push_str(oid.as_ref());
        content.push('\n');
    }

    digest("tree", content.as_bytes())
}

/// An immutable content-addressed value (blob or commit)
///
/// Identity is derived from the typed content; mutation requires constructing
/// a new object.
pub trait Object {
    fn object_type(&self) -> ObjectType;

    /// Canonical content that participates in the hash
    fn content(&self) -> &str;

    fn object_id(&self) -> Result<ObjectId> {
        digest(self.object_type().as_str(), self.content().as_bytes())
    }
}
