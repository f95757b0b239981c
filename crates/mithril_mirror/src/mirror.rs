use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use mithril_json::Translator;
use mithril_reflect::Reflect;
use mithril_reflect::info::CompositeInfo;
use mithril_reflect::ops::Composite;
use serde::{Deserialize, Serialize};

use crate::MirrorError;

// -----------------------------------------------------------------------------
// FieldSnapshot

/// The stored text of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Field name at capture time.
    pub name: String,
    /// Declared type of the field at capture time.
    pub type_path: String,
    /// Encoded value.
    pub text: String,
}

// -----------------------------------------------------------------------------
// MirrorState

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorState {
    /// The host's fields are authoritative.
    #[default]
    Live,
    /// A snapshot exists. It may or may not match the live fields.
    Mirrored,
}

// -----------------------------------------------------------------------------
// Mirror

/// A per-field snapshot of one composite, kept as encoded text.
///
/// A mirror is owned by its host and holds no reference back to it. It is
/// captured before the host's live representation may be discarded, and
/// applied once the host is live again, possibly as a different type.
///
/// - [`capture`](Self::capture) encodes every eligible field and replaces the
///   previous snapshot only when all of them succeeded.
/// - [`apply`](Self::apply) resolves each entry on the target by name, then
///   by alias, and decodes all of them before writing any. The first failure
///   aborts the pass and leaves the target untouched.
/// - [`before_reload`](Self::before_reload) and
///   [`after_reload`](Self::after_reload) are the automatic pair, skipped
///   once after [`suppress_next_cycle`](Self::suppress_next_cycle).
///
/// # Example
///
/// ```
/// use mithril_json::Translator;
/// use mithril_mirror::{Mirror, MirrorState};
/// use mithril_reflect::derive::Reflect;
/// use mithril_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Default)]
/// pub struct Door {
///     pub open: bool,
///     pub code: Option<String>,
/// }
///
/// let registry = TypeRegistry::new();
/// let translator = Translator::new(&registry);
///
/// let mut door = Door { open: true, code: Some("1234".into()) };
/// let mut mirror = Mirror::new();
/// mirror.capture(&mut door, &translator).unwrap();
/// assert_eq!(mirror.entry("code").unwrap().text, r#""1234""#);
///
/// let mut fresh = Door::default();
/// mirror.restore(&mut fresh, &translator).unwrap();
/// assert!(fresh.open);
/// assert_eq!(mirror.state(), MirrorState::Live);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    entries: Vec<FieldSnapshot>,
    state: MirrorState,
    #[serde(default)]
    captured: bool,
    #[serde(skip)]
    suppressed: bool,
}

fn composite_info_of(host: &dyn Composite) -> Result<&'static CompositeInfo, MirrorError> {
    host.composite_info()
        .ok_or_else(|| MirrorError::NotComposite {
            type_path: host.reflect_type_path().into(),
        })
}

/// Encodes every eligible field of `host`, in field-table order.
fn encode_fields(
    host: &dyn Composite,
    translator: &Translator<'_>,
) -> Result<Vec<FieldSnapshot>, MirrorError> {
    let info = composite_info_of(host)?;
    let mut entries = Vec::with_capacity(info.field_len());

    for field in info.iter() {
        let value = host
            .field(field.name())
            .ok_or_else(|| MirrorError::FieldNotFound {
                field: field.name().into(),
                type_path: info.type_path().into(),
            })?;
        let text = translator
            .encode(value)
            .map_err(|source| MirrorError::Encode {
                field: field.name().into(),
                source,
            })?;
        entries.push(FieldSnapshot {
            name: field.name().into(),
            type_path: field.type_info().type_path().into(),
            text,
        });
    }

    Ok(entries)
}

impl Mirror {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            state: MirrorState::Live,
            captured: false,
            suppressed: false,
        }
    }

    #[inline]
    pub fn state(&self) -> MirrorState {
        self.state
    }

    /// Returns the stored entries, in the capturing type's field order.
    #[inline]
    pub fn entries(&self) -> &[FieldSnapshot] {
        &self.entries
    }

    /// Returns the entry stored for the field `name`.
    pub fn entry(&self, name: &str) -> Option<&FieldSnapshot> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Returns `true` once a capture has succeeded, even if it stored no entries.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Returns `true` while the next automatic cycle is suppressed.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Fires the pre-encode hooks of `host`, then snapshots its fields.
    ///
    /// On failure the previous snapshot and state are kept.
    pub fn capture(
        &mut self,
        host: &mut dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<(), MirrorError> {
        mithril_json::fire_before_encode(&mut *host);
        let entries = encode_fields(host, translator)?;

        log::debug!(
            "captured {} field(s) of `{}`",
            entries.len(),
            host.reflect_type_path()
        );
        self.entries = entries;
        self.state = MirrorState::Mirrored;
        self.captured = true;
        Ok(())
    }

    /// Writes the snapshot into `host`, which need not be the capturing type.
    ///
    /// Every entry is resolved and decoded before the first write, so a
    /// failing entry leaves `host` as it was. The host's post-decode hook
    /// fires once all values are written.
    pub fn apply(
        &self,
        host: &mut dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<(), MirrorError> {
        if !self.captured {
            return Err(MirrorError::NotCaptured);
        }
        let info = composite_info_of(host)?;

        let mut decoded: Vec<(&'static str, Box<dyn Reflect>)> =
            Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let field = info
                .resolve_field(&entry.name)
                .ok_or_else(|| MirrorError::FieldNotFound {
                    field: entry.name.clone(),
                    type_path: info.type_path().into(),
                })?;
            if field.name() != entry.name {
                log::debug!(
                    "entry `{}` resolved to `{}::{}` by alias",
                    entry.name,
                    info.type_path(),
                    field.name()
                );
            }
            let value = translator
                .decode(&entry.text, field.type_info())
                .map_err(|source| MirrorError::Decode {
                    field: entry.name.clone(),
                    source,
                })?;
            decoded.push((field.name(), value));
        }

        for (name, value) in decoded {
            let slot = host
                .field_mut(name)
                .ok_or_else(|| MirrorError::FieldNotFound {
                    field: name.into(),
                    type_path: info.type_path().into(),
                })?;
            let expected = slot.reflect_type_path();
            slot.set(value).map_err(|rejected| MirrorError::MismatchedType {
                field: name.into(),
                expected: expected.into(),
                found: (*rejected).reflect_type_path().into(),
            })?;
        }
        host.after_decode();

        log::debug!(
            "applied {} field(s) to `{}`",
            self.entries.len(),
            info.type_path()
        );
        Ok(())
    }

    /// Applies the snapshot and marks the host live again.
    pub fn restore(
        &mut self,
        host: &mut dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<(), MirrorError> {
        self.apply(host, translator)?;
        self.state = MirrorState::Live;
        Ok(())
    }

    /// Skips the next automatic capture and apply.
    ///
    /// Set this while the host is edited directly, so a stale snapshot does
    /// not overwrite the edit and a half-edited state is not captured.
    pub fn suppress_next_cycle(&mut self) {
        log::debug!("suppressing the next mirror cycle");
        self.suppressed = true;
    }

    /// Captures unless the cycle is suppressed. Returns whether it captured.
    pub fn before_reload(
        &mut self,
        host: &mut dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<bool, MirrorError> {
        if self.suppressed {
            log::warn!("skipping capture of `{}`: cycle suppressed", host.reflect_type_path());
            return Ok(false);
        }
        self.capture(host, translator)?;
        Ok(true)
    }

    /// Restores unless the cycle is suppressed, then ends the suppression.
    /// Returns whether it restored.
    ///
    /// A mirror that holds no snapshot has nothing to restore.
    pub fn after_reload(
        &mut self,
        host: &mut dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<bool, MirrorError> {
        if core::mem::take(&mut self.suppressed) {
            log::warn!("skipping restore of `{}`: cycle suppressed", host.reflect_type_path());
            return Ok(false);
        }
        if self.state == MirrorState::Live {
            return Ok(false);
        }
        self.restore(host, translator)?;
        Ok(true)
    }

    /// Returns `true` if re-capturing `host` would store the same entries.
    ///
    /// No hooks fire. A live mirror is never in sync.
    pub fn is_in_sync(
        &self,
        host: &dyn Composite,
        translator: &Translator<'_>,
    ) -> Result<bool, MirrorError> {
        if self.state == MirrorState::Live {
            return Ok(false);
        }
        Ok(encode_fields(host, translator)? == self.entries)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use mithril_json::Translator;
    use mithril_reflect::derive::Reflect;
    use mithril_reflect::registry::TypeRegistry;

    use super::{Mirror, MirrorState};
    use crate::MirrorError;

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_path = "tests::Crate")]
    pub struct Crate {
        pub label: String,
        pub weight: f32,
        pub slots: Vec<u8>,
    }

    #[derive(Reflect, Default)]
    #[reflect(type_path = "tests::Empty")]
    pub struct Empty;

    #[test]
    fn capture_is_stable() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);
        let mut host = Crate {
            label: "ore".into(),
            weight: 2.5,
            slots: vec![1, 2],
        };

        let mut mirror = Mirror::new();
        mirror.capture(&mut host, &translator).unwrap();
        let first = mirror.clone();
        mirror.capture(&mut host, &translator).unwrap();
        assert_eq!(mirror, first);

        let names: Vec<_> = mirror.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["label", "weight", "slots"]);
        assert_eq!(mirror.entry("slots").unwrap().type_path, "alloc::vec::Vec<u8>");
        assert_eq!(mirror.entry("weight").unwrap().text, "2.5");
    }

    #[test]
    fn apply_needs_a_snapshot() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let mirror = Mirror::new();
        let err = mirror.apply(&mut Crate::default(), &translator).unwrap_err();
        assert_eq!(err, MirrorError::NotCaptured);
    }

    #[test]
    fn empty_hosts_round_trip() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let mut mirror = Mirror::new();
        mirror.capture(&mut Empty, &translator).unwrap();
        assert_eq!(mirror.state(), MirrorState::Mirrored);
        assert!(mirror.entries().is_empty());
        mirror.restore(&mut Empty, &translator).unwrap();
        assert_eq!(mirror.state(), MirrorState::Live);
    }

    #[test]
    fn restored_empty_snapshot_still_applies() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let mut mirror = Mirror::new();
        assert!(!mirror.is_captured());
        mirror.capture(&mut Empty, &translator).unwrap();
        mirror.restore(&mut Empty, &translator).unwrap();
        assert!(mirror.is_captured());
        assert_eq!(mirror.state(), MirrorState::Live);

        mirror.apply(&mut Empty, &translator).unwrap();
        mirror.restore(&mut Empty, &translator).unwrap();
    }

    #[test]
    fn sync_tracks_live_edits() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);
        let mut host = Crate::default();

        let mut mirror = Mirror::new();
        assert!(!mirror.is_in_sync(&host, &translator).unwrap());

        mirror.capture(&mut host, &translator).unwrap();
        assert!(mirror.is_in_sync(&host, &translator).unwrap());

        host.slots.push(9);
        assert!(!mirror.is_in_sync(&host, &translator).unwrap());
    }
}
