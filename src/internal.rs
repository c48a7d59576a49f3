use crate::component::{HostKind, KeyVal};

/// The decomposed field set of a [`Url`](crate::Url).
///
/// All text is stored decoded; the builder re-encodes each component
/// with its own allow-list. IPv6 host text is stored without brackets.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fields {
    pub(crate) scheme: String,
    pub(crate) user_info: String,
    pub(crate) host: String,
    pub(crate) host_kind: HostKind,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: Vec<KeyVal>,
    pub(crate) fragment: String,
}

impl Fields {
    /// An authority is present when any of its subcomponents is.
    pub(crate) fn has_authority(&self) -> bool {
        !self.host.is_empty() || !self.user_info.is_empty() || !self.port.is_empty()
    }
}
