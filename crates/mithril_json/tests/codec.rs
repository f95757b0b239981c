use core::fmt::Debug;

use mithril_json::{DecodeError, JsonOverride, MAX_DEPTH, Overrides, Translator};
use mithril_reflect::derive::Reflect;
use mithril_reflect::info::Typed;
use mithril_reflect::registry::TypeRegistry;
use mithril_reflect::{Reflect, SerializationHooks};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(type_path = "game::Mood")]
pub enum Mood {
    #[default]
    Calm,
    Angry = 10,
    Asleep,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "game::Pawn")]
pub struct Pawn {
    pub name: String,
    pub health: f32,
    pub mood: Mood,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "game::Guard", formerly = "game::Sentry")]
pub struct Guard {
    #[reflect(base)]
    pub pawn: Pawn,
    #[reflect(formerly = "station")]
    pub post: u32,
    pub route: Vec<[i16; 2]>,
    pub partner: Option<Pawn>,
    #[reflect(skip)]
    pub scratch: u8,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "game::Token")]
pub struct Token;

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "game::Bag")]
pub struct Bag {
    pub items: Vec<Box<dyn Reflect>>,
    pub held: Option<Box<dyn Reflect>>,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "game::Ledger", hooks)]
pub struct Ledger {
    pub entries: Vec<String>,
    pub total: usize,
    #[reflect(skip)]
    pub rebuilt: bool,
}

impl SerializationHooks for Ledger {
    fn before_encode(&mut self) {
        self.total = self.entries.len();
    }

    fn after_decode(&mut self) {
        self.rebuilt = true;
    }
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "game::Book")]
pub struct Book {
    pub ledger: Ledger,
    pub pages: Vec<Ledger>,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Guard>();
    registry.register::<Token>();
    registry.register::<Bag>();
    registry.register::<Book>();
    registry
}

// -----------------------------------------------------------------------------
// Scalars

fn check<T>(translator: &Translator<'_>, value: T, text: &str)
where
    T: Reflect + Typed + PartialEq + Debug,
{
    assert_eq!(translator.encode(&value).unwrap(), text);
    assert_eq!(translator.decode_as::<T>(text).unwrap(), value);
}

#[test]
fn scalars_round_trip() {
    let registry = registry();
    let translator = Translator::new(&registry);

    check(&translator, true, "true");
    check(&translator, -128_i8, "-128");
    check(&translator, u64::MAX, "18446744073709551615");
    check(&translator, i128::MIN, "-170141183460469231731687303715884105728");
    check(&translator, 30.0_f32, "30");
    check(&translator, -0.125_f64, "-0.125");
    check(&translator, f32::INFINITY, "inf");
    check(&translator, f64::NEG_INFINITY, "-inf");
    check(&translator, 'x', "'x'");
    check(&translator, '\'', r"'\''");
    check(&translator, '\n', r"'\n'");
    check(&translator, String::new(), r#""""#);
    check(&translator, String::from("tab\there"), r#""tab\there""#);
    check(&translator, Mood::Angry, r#""Angry""#);

    let nan: f64 = translator.decode_as(&translator.encode(&f64::NAN).unwrap()).unwrap();
    assert!(nan.is_nan());
}

#[test]
fn enums_decode_by_name_or_discriminant() {
    let registry = registry();
    let translator = Translator::new(&registry);

    assert_eq!(translator.decode_as::<Mood>(r#""Asleep""#).unwrap(), Mood::Asleep);
    assert_eq!(translator.decode_as::<Mood>("11").unwrap(), Mood::Asleep);
    assert_eq!(translator.decode_as::<Mood>("0").unwrap(), Mood::Calm);

    let err = translator.decode_as::<Mood>(r#""Bored""#).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownVariant { .. }));
    let err = translator.decode_as::<Mood>("3").unwrap_err();
    assert!(matches!(err, DecodeError::UnknownVariant { .. }));
}

#[test]
fn escapes_survive_nesting() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let tricky = vec![
        String::from(r#"{"TYPE":"game::Pawn"}"#),
        String::from("a,b],[c"),
        String::from("back\\slash \"quoted\" \r\n\u{8}\u{c}"),
        String::from("ünïcødé ✓"),
    ];
    let text = translator.encode(&tricky).unwrap();
    assert_eq!(translator.decode_as::<Vec<String>>(&text).unwrap(), tricky);

    let three = String::from("\t\n\"");
    let text = translator.encode(&three).unwrap();
    assert_eq!(text, r#""\t\n\"""#);
    assert_eq!(translator.decode_as::<String>(&text).unwrap(), three);

    let chars = vec!['[', ',', '"', '\\', '{'];
    let text = translator.encode(&chars).unwrap();
    assert_eq!(text, r#"['[',',','"','\\','{']"#);
    assert_eq!(translator.decode_as::<Vec<char>>(&text).unwrap(), chars);
}

// -----------------------------------------------------------------------------
// Composites

fn sample_guard() -> Guard {
    Guard {
        pawn: Pawn {
            name: String::from("Ada, the \"Wall\""),
            health: 7.5,
            mood: Mood::Angry,
        },
        post: 4,
        route: vec![[0, 0], [3, -2]],
        partner: Some(Pawn {
            name: String::from("Bo"),
            health: 1.0,
            mood: Mood::Calm,
        }),
        scratch: 0,
    }
}

#[test]
fn composites_round_trip() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let guard = sample_guard();
    let text = translator.encode(&guard).unwrap();
    assert_eq!(
        text,
        concat!(
            r#"{"TYPE":"game::Guard","DATA":{"#,
            r#""name":"Ada, the \"Wall\"","health":7.5,"mood":"Angry","#,
            r#""post":4,"route":[[0,0],[3,-2]],"#,
            r#""partner":{"TYPE":"game::Pawn","DATA":{"name":"Bo","health":1,"mood":"Calm"}}"#,
            r#"}}"#,
        )
    );
    assert_eq!(translator.decode_as::<Guard>(&text).unwrap(), guard);

    let pretty = Translator::new(&registry).pretty();
    let text = pretty.encode(&guard).unwrap();
    assert!(text.contains("\n\t\t\"post\": 4,\n"));
    assert_eq!(pretty.decode_as::<Guard>(&text).unwrap(), guard);
}

#[test]
fn skipped_and_missing_fields_keep_defaults() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let mut guard = sample_guard();
    guard.scratch = 9;
    let decoded: Guard = translator.decode_as(&translator.encode(&guard).unwrap()).unwrap();
    assert_eq!(decoded.scratch, 0);

    let decoded: Guard = translator
        .decode_as(r#"{"TYPE":"game::Guard","DATA":{"post":2}}"#)
        .unwrap();
    assert_eq!(decoded, Guard { post: 2, ..Guard::default() });
}

#[test]
fn renamed_fields_and_types_still_decode() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let decoded: Guard = translator
        .decode_as(r#"{ "DATA": { "station": 12, "name": "Old" }, "TYPE": "game::Sentry" }"#)
        .unwrap();
    assert_eq!(decoded.post, 12);
    assert_eq!(decoded.pawn.name, "Old");
}

#[test]
fn empty_composites() {
    let registry = registry();
    let translator = Translator::new(&registry);

    assert_eq!(translator.encode(&Token).unwrap(), "{}");
    assert_eq!(translator.decode_as::<Token>("{}").unwrap(), Token);
    assert_eq!(translator.decode_as::<Token>(" {  } ").unwrap(), Token);
    assert_eq!(translator.decode_as::<Guard>("{}").unwrap(), Guard::default());
}

#[test]
fn malformed_wrappers() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let cases = [
        (r#"{"TYPE":"game::Guard"}"#, 1),
        (r#"{"a": 1}"#, 1),
        (r#"{"TYPE":"game::Guard","DATA":{},"EXTRA":1}"#, 3),
        (r#"{"KIND":"game::Guard","DATA":{}}"#, 2),
        (r#"{"TYPE":"game::Guard","TYPE":"game::Guard"}"#, 2),
    ];
    for (text, count) in cases {
        let err = translator.decode_as::<Guard>(text).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedWrapper {
                count,
                text: text.into()
            },
            "{text}"
        );
    }

    let err = translator.decode_as::<Guard>(r#"{"TYPE":"game::Guard","DATA":{}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MissingBracket { .. }));

    let err = translator.decode_as::<Guard>(r#"{"TYPE":"game::Nope","DATA":{}}"#).unwrap_err();
    assert_eq!(err, DecodeError::UnknownTypeTag { tag: "game::Nope".into() });

    let err = translator.decode_as::<Guard>(r#"{"TYPE":"game::Pawn","DATA":{}}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MismatchedType { .. }));
}

#[test]
fn field_errors_carry_their_path() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let text = r#"{"TYPE":"game::Guard","DATA":{"route":[[1,2],[3,"x"]]}}"#;
    let err = translator.decode_as::<Guard>(text).unwrap_err();
    let DecodeError::InField { field, type_path, .. } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(field, "route");
    assert_eq!(type_path, "game::Guard");
    assert!(matches!(err.root_cause(), DecodeError::Format { .. }));

    let text = r#"{"TYPE":"game::Guard","DATA":{"wings":2}}"#;
    let err = translator.decode_as::<Guard>(text).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownField {
            field: "wings".into(),
            type_path: "game::Guard".into()
        }
    );
}

// -----------------------------------------------------------------------------
// Polymorphism

#[test]
fn dynamic_slots_restore_concrete_types() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let bag = Bag {
        items: vec![
            Box::new(sample_guard()),
            Box::new(Token),
            Box::new(String::from("loose")),
            Box::new(Mood::Asleep),
        ],
        held: Some(Box::new(3_u8)),
    };
    let text = translator.encode(&bag).unwrap();
    assert!(text.contains(r#"{"TYPE":"game::Token","DATA":{}}"#));
    assert!(text.contains(r#"{"TYPE":"alloc::string::String","DATA":"loose"}"#));
    assert!(text.contains(r#""held":{"TYPE":"u8","DATA":3}"#));

    let decoded: Bag = translator.decode_as(&text).unwrap();
    assert_eq!(decoded.items.len(), 4);
    assert_eq!(decoded.items[0].downcast_ref::<Guard>(), Some(&sample_guard()));
    assert!(decoded.items[1].is::<Token>());
    assert_eq!(decoded.items[2].downcast_ref::<String>().map(String::as_str), Some("loose"));
    assert_eq!(decoded.items[3].downcast_ref::<Mood>(), Some(&Mood::Asleep));
    let held = decoded.held.as_deref().and_then(|held| held.downcast_ref::<u8>());
    assert_eq!(held, Some(&3));

    let text = r#"{"TYPE":"game::Bag","DATA":{"items":[{}],"held":null}}"#;
    let err = translator.decode_as::<Bag>(text).unwrap_err();
    assert!(matches!(err.root_cause(), DecodeError::MissingTypeTag { .. }));
}

#[test]
fn nested_dynamic_wrappers_stop_at_the_depth_limit() {
    const BOXED: &str = "alloc::boxed::Box<dyn mithril_reflect::Reflect>";

    let mut registry = registry();
    registry.register::<Box<dyn Reflect>>();
    let translator = Translator::new(&registry);
    let slot = <Box<dyn Reflect> as Typed>::type_info();

    let nest = |levels: usize| {
        let open = format!(r#"{{"TYPE":"{BOXED}","DATA":"#);
        format!(
            r#"{}{{"TYPE":"u8","DATA":1}}{}"#,
            open.repeat(levels),
            "}".repeat(levels)
        )
    };

    let shallow = translator.decode(&nest(3), slot).unwrap();
    assert!(shallow.is::<Box<dyn Reflect>>());

    let err = translator.decode(&nest(20_000), slot).unwrap_err();
    assert_eq!(err, DecodeError::TooDeep { limit: MAX_DEPTH });

    let text = format!(r#"{{"TYPE":"game::Bag","DATA":{{"items":[],"held":{}}}}}"#, nest(20_000));
    let err = translator.decode_as::<Bag>(&text).unwrap_err();
    assert_eq!(err.root_cause(), &DecodeError::TooDeep { limit: MAX_DEPTH });
}

// -----------------------------------------------------------------------------
// Hooks

#[test]
fn hooks_fire_around_the_codec() {
    let registry = registry();
    let translator = Translator::new(&registry);

    let mut book = Book {
        ledger: Ledger {
            entries: vec!["a".into(), "b".into()],
            ..Ledger::default()
        },
        pages: vec![Ledger {
            entries: vec!["c".into()],
            ..Ledger::default()
        }],
    };

    // Plain encode leaves the stale totals in place.
    let text = translator.encode(&book).unwrap();
    assert!(text.contains(r#""total":0"#));

    let text = translator.encode_mut(&mut book).unwrap();
    assert_eq!(book.ledger.total, 2);
    assert_eq!(book.pages[0].total, 1);

    let decoded: Book = translator.decode_as(&text).unwrap();
    assert!(decoded.ledger.rebuilt);
    assert!(decoded.pages[0].rebuilt);
    assert_eq!(decoded.ledger.total, 2);
}

// -----------------------------------------------------------------------------
// Overrides

fn encode_pawn_name(value: &dyn Reflect) -> Result<String, mithril_json::EncodeError> {
    let pawn = value.downcast_ref::<Pawn>().ok_or_else(|| mithril_json::EncodeError::Override {
        type_path: value.reflect_type_path().into(),
        reason: "not a pawn".into(),
    })?;
    let mut out = String::new();
    mithril_json::escape::write_quoted_str(&mut out, &pawn.name);
    Ok(out)
}

fn decode_pawn_name(text: &str) -> Result<Box<dyn Reflect>, DecodeError> {
    let name = mithril_json::escape::decode_str(text).map_err(|err| DecodeError::Format {
        text: text.into(),
        type_path: "game::Pawn".into(),
        reason: err.to_string(),
    })?;
    Ok(Box::new(Pawn { name, ..Pawn::default() }))
}

#[test]
fn overrides_take_precedence() {
    let registry = registry();
    let mut overrides = Overrides::builtin();
    overrides.insert::<Pawn>(JsonOverride {
        encode: encode_pawn_name,
        decode: decode_pawn_name,
    });
    let translator = Translator::new(&registry).with_overrides(overrides);

    let guard = Guard {
        partner: Some(Pawn {
            name: "Bo".into(),
            ..Pawn::default()
        }),
        ..Guard::default()
    };
    let text = translator.encode(&guard).unwrap();
    assert!(text.ends_with(r#""partner":"Bo"}}"#));

    let decoded: Guard = translator.decode_as(&text).unwrap();
    assert_eq!(decoded.partner.map(|p| p.name).as_deref(), Some("Bo"));
}
