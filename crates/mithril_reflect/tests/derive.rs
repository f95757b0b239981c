use core::any::TypeId;

use mithril_reflect::derive::Reflect;
use mithril_reflect::info::{ReflectKind, TypePath, Typed};
use mithril_reflect::ops::{Composite, Enum, ReflectMut, ReflectRef};
use mithril_reflect::registry::{TypeRegistry, TypeTraitDefault};
use mithril_reflect::{Reflect, SerializationHooks};

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "tests::Pawn")]
pub struct Pawn {
    pub name: String,
    pub health: f32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "tests::Guard", formerly = "tests::Sentry")]
pub struct Guard {
    #[reflect(base)]
    pub pawn: Pawn,
    pub health: f32,
    #[reflect(formerly = "station")]
    pub post: u32,
    #[reflect(serialize)]
    alarm: bool,
    #[reflect(skip)]
    pub scratch: Vec<u8>,
    cache: u64,
}

#[derive(Reflect, Default)]
pub struct Marker;

#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(type_path = "tests::Phase")]
pub enum Phase {
    Idle,
    Running = 5,
    Done,
}

#[derive(Reflect, Default)]
#[reflect(hooks)]
pub struct Counter {
    pub value: i32,
    #[reflect(skip)]
    pub encoded: u32,
    #[reflect(skip)]
    pub decoded: u32,
}

impl SerializationHooks for Counter {
    fn before_encode(&mut self) {
        self.encoded += 1;
    }

    fn after_decode(&mut self) {
        self.decoded += 1;
    }
}

#[test]
fn type_paths() {
    assert_eq!(Guard::type_path(), "tests::Guard");
    assert_eq!(Guard::type_name(), "Guard");
    assert_eq!(Guard::module_path(), Some("tests"));

    assert_eq!(Marker::type_path(), concat!(module_path!(), "::Marker"));
    assert_eq!(Marker::type_ident(), "Marker");
}

#[test]
fn eligible_fields_in_order() {
    let info = Guard::type_info().as_composite().unwrap();
    let names: Vec<_> = info.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["name", "health", "post", "alarm"]);

    assert!(info.field("health").unwrap().type_is::<f32>());
    assert_eq!(info.resolve_field("station").unwrap().name(), "post");
    assert!(info.field("scratch").is_none());
    assert!(info.field("cache").is_none());
    assert!(info.base().unwrap().is::<Pawn>());
    assert_eq!(info.aliases(), ["tests::Sentry"]);
}

#[test]
fn field_access_falls_through_to_base() {
    let mut guard = Guard::default();
    guard.pawn.name = String::from("Ada");

    let name = Composite::field(&guard, "name").unwrap();
    assert_eq!(name.downcast_ref::<String>().unwrap(), "Ada");

    Composite::field_mut(&mut guard, "health")
        .unwrap()
        .set(Box::new(3.0_f32))
        .unwrap();
    assert_eq!(guard.health, 3.0);
    assert_eq!(guard.pawn.health, 0.0);

    Composite::field_mut(&mut guard, "alarm")
        .unwrap()
        .set(Box::new(true))
        .unwrap();
    assert!(guard.alarm);
    assert_eq!(guard.cache, 0);

    let composite: &dyn Composite = &guard;
    assert_eq!(composite.field_len(), 4);
    assert_eq!(composite.iter_fields().count(), 4);
}

#[test]
fn unit_struct_is_empty_composite() {
    let info = Marker::type_info().as_composite().unwrap();
    assert!(info.is_empty());
    assert!(matches!(Marker.reflect_ref(), ReflectRef::Composite(_)));
}

#[test]
fn enum_variants() {
    let info = Phase::type_info().as_enum().unwrap();
    assert_eq!(info.variant_len(), 3);
    assert_eq!(info.variant("Running").unwrap().discriminant(), 5);
    assert_eq!(info.variant_at(2).unwrap().discriminant(), 6);
    assert_eq!(info.index_of_discriminant(0), Some(0));

    let built = info.construct(1).unwrap();
    assert_eq!(built.take::<Phase>().unwrap(), Phase::Running);
    assert!(info.construct(3).is_none());

    let phase = Phase::Done;
    assert_eq!(phase.variant_name(), "Done");
    assert_eq!(phase.variant_index(), 2);
    assert_eq!(Enum::discriminant(&phase), 6);
    assert_eq!(phase.reflect_ref().kind(), ReflectKind::Enum);
}

#[test]
fn hooks_are_forwarded() {
    let mut counter = Counter::default();
    let ReflectMut::Composite(composite) = counter.reflect_mut() else {
        unreachable!()
    };
    composite.before_encode();
    composite.after_decode();
    composite.after_decode();
    assert_eq!((counter.encoded, counter.decoded), (1, 2));

    // Types without the flag keep the default no-op hooks.
    let mut pawn = Pawn::default();
    Composite::after_decode(&mut pawn);
    assert_eq!(pawn, Pawn::default());
}

#[test]
fn registration_pulls_dependencies() {
    let mut registry = TypeRegistry::empty();
    registry.register::<Guard>();

    assert!(registry.contains(TypeId::of::<Pawn>()));
    assert!(registry.contains(TypeId::of::<String>()));
    assert!(registry.contains(TypeId::of::<bool>()));
    // skipped and private fields are not dependencies
    assert!(!registry.contains(TypeId::of::<Vec<u8>>()));
    assert!(!registry.contains(TypeId::of::<u64>()));

    let meta = registry.resolve("tests::Sentry").unwrap();
    let guard = meta.get_trait::<TypeTraitDefault>().unwrap().default();
    assert!(guard.is::<Guard>());

    registry.register::<Phase>();
    assert!(registry.get_with_type_path("tests::Phase").is_some());
}
