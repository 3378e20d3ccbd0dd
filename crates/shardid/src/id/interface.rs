use crate::ShardableId;

/// The closed set of inputs [`ShardableId::massage`] knows how to turn into
/// an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdInput<'a> {
    /// Already an id; passed through unchanged.
    Id(ShardableId),
    /// The 12-byte binary layout.
    Bytes(&'a [u8]),
    /// 24-char hex or 16-char sortable Base64.
    Text(&'a str),
}

impl From<ShardableId> for IdInput<'_> {
    fn from(id: ShardableId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a [u8]> for IdInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for IdInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}
