use mithril_json::{DecodeError, Translator};
use mithril_mirror::{Mirror, MirrorError, MirrorHost, MirrorHostExt, MirrorState};
use mithril_reflect::derive::Reflect;
use mithril_reflect::registry::TypeRegistry;
use mithril_reflect::{Reflect, SerializationHooks};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq)]
#[reflect(type_path = "demo::Kind")]
pub enum Kind {
    #[default]
    Wood,
    Stone,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "demo::Chest")]
pub struct Chest {
    pub label: String,
    pub kind: Kind,
    pub slots: Vec<Option<u32>>,
    #[reflect(skip)]
    pub mirror: Mirror,
}

impl MirrorHost for Chest {
    fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    fn mirror_mut(&mut self) -> &mut Mirror {
        &mut self.mirror
    }
}

/// `Chest` after a refactor: `label` became `title`.
#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "demo::Strongbox", formerly = "demo::Chest")]
pub struct Strongbox {
    #[reflect(formerly = "label")]
    pub title: String,
    pub kind: Kind,
    pub slots: Vec<Option<u32>>,
    pub locked: bool,
}

/// Shares a field name with `Chest`, under a different type.
#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "demo::Shelf")]
pub struct Shelf {
    pub label: u8,
    pub kind: Kind,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "demo::Display")]
pub struct Display {
    pub shown: Option<Box<dyn Reflect>>,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "demo::Tally", hooks)]
pub struct Tally {
    pub marks: Vec<u8>,
    pub sum: u32,
    #[reflect(skip)]
    pub restored: u32,
}

impl SerializationHooks for Tally {
    fn before_encode(&mut self) {
        self.sum = self.marks.iter().map(|&m| u32::from(m)).sum();
    }

    fn after_decode(&mut self) {
        self.restored += 1;
    }
}

fn sample_chest() -> Chest {
    Chest {
        label: String::from("loot, \"rare\""),
        kind: Kind::Stone,
        slots: vec![Some(3), None, Some(7)],
        mirror: Mirror::new(),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn capture_then_apply_is_idempotent() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut chest = sample_chest();
    let mut mirror = Mirror::new();
    mirror.capture(&mut chest, &translator).unwrap();
    mirror.apply(&mut chest, &translator).unwrap();
    assert_eq!(chest, sample_chest());

    let first = mirror.clone();
    mirror.capture(&mut chest, &translator).unwrap();
    assert_eq!(mirror.entries(), first.entries());
}

#[test]
fn restore_rebuilds_a_fresh_host() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut mirror = Mirror::new();
    mirror.capture(&mut sample_chest(), &translator).unwrap();
    assert_eq!(mirror.state(), MirrorState::Mirrored);

    let mut fresh = Chest::default();
    mirror.restore(&mut fresh, &translator).unwrap();
    assert_eq!(fresh, sample_chest());
    assert_eq!(mirror.state(), MirrorState::Live);
}

#[test]
fn renamed_fields_resolve_by_alias() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut mirror = Mirror::new();
    mirror.capture(&mut sample_chest(), &translator).unwrap();
    assert!(mirror.entry("label").is_some());

    let mut strongbox = Strongbox {
        locked: true,
        ..Strongbox::default()
    };
    mirror.apply(&mut strongbox, &translator).unwrap();
    assert_eq!(
        strongbox,
        Strongbox {
            title: String::from("loot, \"rare\""),
            kind: Kind::Stone,
            slots: vec![Some(3), None, Some(7)],
            locked: true,
        }
    );
}

#[test]
fn failed_apply_writes_nothing() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut mirror = Mirror::new();
    mirror.capture(&mut sample_chest(), &translator).unwrap();

    // `label` decodes as `u8` on the shelf and fails; `kind` would succeed.
    let mut shelf = Shelf::default();
    let err = mirror.apply(&mut shelf, &translator).unwrap_err();
    let MirrorError::Decode { field, source } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(field, "label");
    assert!(matches!(source, DecodeError::Format { .. }));
    assert_eq!(err.field(), Some("label"));
    assert_eq!(shelf, Shelf::default());

    // `Tally` has no field named or formerly named `label`.
    let err = mirror.apply(&mut Tally::default(), &translator).unwrap_err();
    assert_eq!(
        err,
        MirrorError::FieldNotFound {
            field: "label".into(),
            type_path: "demo::Tally".into(),
        }
    );

    // The other way round, `label` is stored as a number.
    let mut shelf_mirror = Mirror::new();
    shelf_mirror
        .capture(&mut Shelf { label: 1, kind: Kind::Wood }, &translator)
        .unwrap();
    let mut chest = sample_chest();
    let err = shelf_mirror.apply(&mut chest, &translator).unwrap_err();
    assert!(matches!(err, MirrorError::Decode { .. }));
    assert_eq!(chest, sample_chest());
}

#[test]
fn polymorphic_fields_survive() {
    let mut registry = TypeRegistry::new();
    registry.register::<Strongbox>();
    let translator = Translator::new(&registry);

    let mut display = Display {
        shown: Some(Box::new(Strongbox {
            title: "crown".into(),
            ..Strongbox::default()
        })),
    };
    let mut mirror = Mirror::new();
    mirror.capture(&mut display, &translator).unwrap();
    assert!(mirror.entry("shown").unwrap().text.starts_with(r#"{"TYPE":"demo::Strongbox""#));

    let mut fresh = Display::default();
    mirror.restore(&mut fresh, &translator).unwrap();
    let shown = fresh
        .shown
        .as_deref()
        .and_then(|shown| shown.downcast_ref::<Strongbox>())
        .unwrap();
    assert_eq!(shown.title, "crown");
}

#[test]
fn hooks_fire_on_capture_and_apply() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut tally = Tally {
        marks: vec![1, 2, 3],
        ..Tally::default()
    };
    let mut mirror = Mirror::new();
    mirror.capture(&mut tally, &translator).unwrap();
    assert_eq!(mirror.entry("sum").unwrap().text, "6");

    let mut fresh = Tally::default();
    mirror.apply(&mut fresh, &translator).unwrap();
    assert_eq!(fresh.sum, 6);
    assert_eq!(fresh.restored, 1);
}

#[test]
fn suppression_skips_exactly_one_cycle() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut chest = sample_chest();
    assert!(!chest.after_reload(&translator).unwrap());

    assert!(chest.before_reload(&translator).unwrap());
    chest.label = String::from("edited");

    chest.mirror.suppress_next_cycle();
    assert!(chest.mirror.is_suppressed());
    assert!(!chest.before_reload(&translator).unwrap());
    assert!(!chest.after_reload(&translator).unwrap());
    assert!(!chest.mirror.is_suppressed());
    assert_eq!(chest.label, "edited");

    // The suppressed cycle left the earlier snapshot in place.
    assert!(chest.after_reload(&translator).unwrap());
    assert_eq!(chest.label, "loot, \"rare\"");
    assert_eq!(chest.mirror.state(), MirrorState::Live);
}

#[test]
fn host_extension_round_trip() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut chest = sample_chest();
    chest.capture_mirror(&translator).unwrap();
    assert_eq!(chest.mirror().entries().len(), 3);

    chest.kind = Kind::Wood;
    chest.slots.clear();
    assert!(!chest.mirror().is_in_sync(&chest, &translator).unwrap());

    chest.restore_mirror(&translator).unwrap();
    assert_eq!(chest.kind, Kind::Stone);
    assert_eq!(chest.slots, [Some(3), None, Some(7)]);
}

#[test]
fn mirrors_persist_through_serde() {
    let registry = TypeRegistry::new();
    let translator = Translator::new(&registry);

    let mut mirror = Mirror::new();
    mirror.capture(&mut sample_chest(), &translator).unwrap();
    mirror.suppress_next_cycle();

    let json = serde_json::to_string(&mirror).unwrap();
    let from_json: Mirror = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json.entries(), mirror.entries());
    assert_eq!(from_json.state(), MirrorState::Mirrored);
    assert!(from_json.is_captured());
    assert!(!from_json.is_suppressed());

    let text = ron::to_string(&mirror).unwrap();
    let from_ron: Mirror = ron::from_str(&text).unwrap();
    assert_eq!(from_ron.entries(), mirror.entries());

    let mut fresh = Chest::default();
    from_ron.apply(&mut fresh, &translator).unwrap();
    assert_eq!(fresh, sample_chest());
}
