use core::mem;

use mithril_json::Translator;
use mithril_reflect::ops::Composite;

use crate::{Mirror, MirrorError};

/// A composite that owns its [`Mirror`].
///
/// The mirror field must be excluded from reflection with
/// `#[reflect(skip)]`, otherwise it would try to snapshot itself.
///
/// ```
/// use mithril_json::Translator;
/// use mithril_mirror::{Mirror, MirrorHost, MirrorHostExt};
/// use mithril_reflect::derive::Reflect;
/// use mithril_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Default)]
/// pub struct Lever {
///     pub pulled: bool,
///     #[reflect(skip)]
///     pub mirror: Mirror,
/// }
///
/// impl MirrorHost for Lever {
///     fn mirror(&self) -> &Mirror { &self.mirror }
///     fn mirror_mut(&mut self) -> &mut Mirror { &mut self.mirror }
/// }
///
/// let registry = TypeRegistry::new();
/// let translator = Translator::new(&registry);
///
/// let mut lever = Lever { pulled: true, ..Lever::default() };
/// assert!(lever.before_reload(&translator).unwrap());
/// lever.pulled = false;
/// assert!(lever.after_reload(&translator).unwrap());
/// assert!(lever.pulled);
/// ```
pub trait MirrorHost: Composite {
    fn mirror(&self) -> &Mirror;

    fn mirror_mut(&mut self) -> &mut Mirror;
}

/// Mirror operations on a [`MirrorHost`] that target the host itself.
///
/// Implemented for every sized host.
pub trait MirrorHostExt: MirrorHost {
    /// See [`Mirror::capture`].
    fn capture_mirror(&mut self, translator: &Translator<'_>) -> Result<(), MirrorError>;

    /// See [`Mirror::restore`].
    fn restore_mirror(&mut self, translator: &Translator<'_>) -> Result<(), MirrorError>;

    /// See [`Mirror::before_reload`].
    fn before_reload(&mut self, translator: &Translator<'_>) -> Result<bool, MirrorError>;

    /// See [`Mirror::after_reload`].
    fn after_reload(&mut self, translator: &Translator<'_>) -> Result<bool, MirrorError>;
}

/// Takes the mirror out of `host` for the duration of `f`, so the host can
/// be borrowed mutably next to it.
fn with_mirror<T, R>(host: &mut T, f: impl FnOnce(&mut Mirror, &mut T) -> R) -> R
where
    T: MirrorHost,
{
    let mut mirror = mem::take(host.mirror_mut());
    let result = f(&mut mirror, host);
    *host.mirror_mut() = mirror;
    result
}

impl<T: MirrorHost> MirrorHostExt for T {
    fn capture_mirror(&mut self, translator: &Translator<'_>) -> Result<(), MirrorError> {
        with_mirror(self, |mirror, host| mirror.capture(host, translator))
    }

    fn restore_mirror(&mut self, translator: &Translator<'_>) -> Result<(), MirrorError> {
        with_mirror(self, |mirror, host| mirror.restore(host, translator))
    }

    fn before_reload(&mut self, translator: &Translator<'_>) -> Result<bool, MirrorError> {
        with_mirror(self, |mirror, host| mirror.before_reload(host, translator))
    }

    fn after_reload(&mut self, translator: &Translator<'_>) -> Result<bool, MirrorError> {
        with_mirror(self, |mirror, host| mirror.after_reload(host, translator))
    }
}
