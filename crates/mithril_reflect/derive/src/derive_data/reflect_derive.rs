use syn::{Data, DeriveInput, Field, Fields, Type, Variant, Visibility, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// ReflectDerive

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields, or a unit struct.
    Composite(ReflectStruct<'a>),
    /// An enum whose variants carry no data.
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`#[derive(Reflect)]` does not support generic types, the type tag must be fixed",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        match &input.data {
            Data::Struct(data) => {
                let fields = match &data.fields {
                    Fields::Named(named) => named
                        .named
                        .iter()
                        .map(StructField::new)
                        .collect::<syn::Result<Vec<_>>>()?,
                    Fields::Unit => Vec::new(),
                    Fields::Unnamed(unnamed) => {
                        return Err(syn::Error::new(
                            unnamed.span(),
                            "tuple structs cannot be reflected, fields need names",
                        ));
                    }
                };
                let meta = ReflectMeta::new(attrs, &input.ident);
                ReflectStruct::new(meta, fields).map(Self::Composite)
            }
            Data::Enum(data) => {
                if let Some(span) = attrs.hooks {
                    return Err(syn::Error::new(span, "`hooks` is only supported on structs"));
                }
                if data.variants.is_empty() {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "an enum without variants cannot be reflected",
                    ));
                }
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new(
                            variant.fields.span(),
                            "only enums without variant data can be reflected",
                        ));
                    }
                    if let Some(attr) = variant.attrs.iter().find(|a| a.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME)) {
                        return Err(syn::Error::new(
                            attr.span(),
                            "`#[reflect]` is not supported on enum variants",
                        ));
                    }
                }
                let meta = ReflectMeta::new(attrs, &input.ident);
                Ok(Self::Enum(ReflectEnum {
                    meta,
                    variants: data.variants.iter().collect(),
                }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "unions cannot be reflected",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A named field of the derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

impl<'a> StructField<'a> {
    fn new(data: &'a Field) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
        Ok(Self { data, attrs })
    }

    /// Public or marked `serialize`, and not marked `skip`.
    pub fn is_eligible(&self) -> bool {
        self.attrs.base.is_none()
            && self.attrs.skip.is_none()
            && (matches!(self.data.vis, Visibility::Public(_)) || self.attrs.serialize.is_some())
    }

    #[inline]
    pub fn ty(&self) -> &'a Type {
        &self.data.ty
    }

    /// The field name without a raw-identifier prefix.
    pub fn name(&self) -> String {
        self.data
            .ident
            .as_ref()
            .map(|ident| ident.to_string().trim_start_matches("r#").to_owned())
            .unwrap_or_default()
    }
}

pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
    base: Option<usize>,
}

impl<'a> ReflectStruct<'a> {
    fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut base = None;
        for (index, field) in fields.iter().enumerate() {
            if let Some(span) = field.attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new(span, "a struct can have at most one `base`"));
                }
                base = Some(index);
            }
        }
        Ok(Self { meta, fields, base })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The serialized local fields, in declaration order.
    pub fn eligible_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_eligible())
    }

    /// The field marked `#[reflect(base)]`.
    #[inline]
    pub fn base(&self) -> Option<&StructField<'a>> {
        self.base.and_then(|index| self.fields.get(index))
    }
}

// -----------------------------------------------------------------------------
// ReflectEnum

pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<&'a Variant>,
}

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[&'a Variant] {
        &self.variants
    }
}
