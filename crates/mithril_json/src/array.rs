//! Growable collections and fixed-size arrays, `[e1,e2,...]`.

use alloc::boxed::Box;
use alloc::vec::Vec;

use mithril_reflect::Reflect;
use mithril_reflect::info::{ArrayInfo, ListInfo};
use mithril_reflect::ops::{List, ReflectMut};

use crate::writer::Writer;
use crate::{DecodeError, EncodeError, Translator, scan};

pub(crate) fn encode_list(
    translator: &Translator<'_>,
    list: &dyn List,
    w: &mut Writer<'_>,
) -> Result<(), EncodeError> {
    w.open('[');
    for (index, item) in list.iter().enumerate() {
        w.item(index);
        translator.encode_value(item, w)?;
    }
    w.close(']', list.len());
    Ok(())
}

/// Decodes every item, then pushes them into a fresh collection.
pub(crate) fn decode_list(
    translator: &Translator<'_>,
    text: &str,
    info: &ListInfo,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let interior = scan::unwrap_pair(text, '[', ']')?;
    let item_info = info.item_info();

    let mut value = info.construct();
    let ReflectMut::List(list) = (*value).reflect_mut() else {
        return Err(DecodeError::UnsupportedShape {
            type_path: info.type_path().into(),
        });
    };

    for item in scan::entries(interior) {
        let item = translator.decode_value(item, item_info, depth + 1)?;
        list.push(item)
            .map_err(|item| DecodeError::mismatched(item_info.type_path(), (*item).reflect_type_path()))?;
    }

    Ok(value)
}

/// Decodes every item, then assembles an array of exactly the declared
/// length.
pub(crate) fn decode_array(
    translator: &Translator<'_>,
    text: &str,
    info: &ArrayInfo,
    depth: usize,
) -> Result<Box<dyn Reflect>, DecodeError> {
    let interior = scan::unwrap_pair(text, '[', ']')?;
    let item_info = info.item_info();

    let items = scan::entries(interior)
        .map(|item| translator.decode_value(item, item_info, depth + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if items.len() != info.len() {
        return Err(DecodeError::LengthMismatch {
            type_path: info.type_path().into(),
            expected: info.len(),
            found: items.len(),
        });
    }

    info.assemble(items)
        .ok_or_else(|| DecodeError::mismatched(info.type_path(), item_info.type_path()))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use mithril_reflect::registry::TypeRegistry;

    use crate::{DecodeError, Translator};

    #[test]
    fn lists_round_trip() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let value = vec![vec![1_u8], vec![], vec![2, 3]];
        let text = translator.encode(&value).unwrap();
        assert_eq!(text, "[[1],[],[2,3]]");
        assert_eq!(translator.decode_as::<Vec<Vec<u8>>>(&text).unwrap(), value);

        let queue: VecDeque<String> = translator.decode_as(r#"[ "a", "b,c" ]"#).unwrap();
        assert_eq!(queue, ["a", "b,c"]);

        assert!(translator.decode_as::<Vec<i32>>("[]").unwrap().is_empty());
    }

    #[test]
    fn arrays_check_length() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        assert_eq!(translator.decode_as::<[i32; 3]>("[1,2,3]").unwrap(), [1, 2, 3]);

        let err = translator.decode_as::<[i32; 3]>("[1,2]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::LengthMismatch {
                type_path: "[i32; 3]".into(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn item_failures_abort() {
        let registry = TypeRegistry::new();
        let translator = Translator::new(&registry);

        let err = translator.decode_as::<Vec<u8>>("[1, x, 3]").unwrap_err();
        assert!(matches!(err, DecodeError::Format { .. }));

        let err = translator.decode_as::<Vec<u8>>("1, 2").unwrap_err();
        assert!(matches!(err, DecodeError::MissingBracket { .. }));

        let err = translator.decode_as::<Vec<u8>>("[1, null]").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedNull { .. }));
    }
}
