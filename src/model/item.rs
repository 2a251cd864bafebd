use serde::Serialize;
use serde::de::DeserializeOwned;

/// Item identifier. Derived from the creation time in milliseconds, so ids
/// are monotonically increasing within a list.
pub type ItemId = i64;

/// One kind of list entry (todo or film).
///
/// The two lists share a single store/ops core; this trait carries what
/// differs between them: the storage key, the editable fields, validation,
/// and the seed injected when nothing has been persisted yet.
pub trait ListItem: Clone + Serialize + DeserializeOwned {
    /// The editable fields of this item kind (everything except id and flags).
    type Fields: Clone;

    /// Fixed key the list is stored under.
    const STORE_KEY: &'static str;

    fn id(&self) -> ItemId;

    /// Build a new item with default flags from trimmed fields.
    /// Returns `None` if any field is blank after trimming.
    fn create(id: ItemId, fields: &Self::Fields) -> Option<Self>;

    /// Copy of this item with the editable fields replaced; id and flags are
    /// kept. Returns `None` if any new field is blank after trimming.
    fn with_fields(&self, fields: &Self::Fields) -> Option<Self>;

    /// Current editable fields, used to initialize an edit draft.
    fn fields(&self) -> Self::Fields;

    /// List injected at load when the store holds no value.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
