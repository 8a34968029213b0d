//! Expansion of `#[derive(Bindable)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, GenericArgument, PathArguments, Type};

/// Leaf scalar kinds with a dedicated slot variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    Text,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Timestamp,
}

impl Leaf {
    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "String" => Some(Self::Text),
            "i8" => Some(Self::I8),
            "i16" => Some(Self::I16),
            "i32" => Some(Self::I32),
            "i64" => Some(Self::I64),
            "u8" => Some(Self::U8),
            "u16" => Some(Self::U16),
            "u32" => Some(Self::U32),
            "u64" => Some(Self::U64),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            "bool" => Some(Self::Bool),
            "DateTime" => Some(Self::Timestamp),
            _ => None,
        }
    }

    fn slot(self) -> TokenStream {
        match self {
            Self::Text => quote!(Text),
            Self::I8 => quote!(I8),
            Self::I16 => quote!(I16),
            Self::I32 => quote!(I32),
            Self::I64 => quote!(I64),
            Self::U8 => quote!(U8),
            Self::U16 => quote!(U16),
            Self::U32 => quote!(U32),
            Self::U64 => quote!(U64),
            Self::F32 => quote!(F32),
            Self::F64 => quote!(F64),
            Self::Bool => quote!(Bool),
            Self::Timestamp => quote!(Timestamp),
        }
    }

    fn optional_slot(self) -> TokenStream {
        match self {
            Self::Text => quote!(OptText),
            Self::I8 => quote!(OptI8),
            Self::I16 => quote!(OptI16),
            Self::I32 => quote!(OptI32),
            Self::I64 => quote!(OptI64),
            Self::U8 => quote!(OptU8),
            Self::U16 => quote!(OptU16),
            Self::U32 => quote!(OptU32),
            Self::U64 => quote!(OptU64),
            Self::F32 => quote!(OptF32),
            Self::F64 => quote!(OptF64),
            Self::Bool => quote!(OptBool),
            Self::Timestamp => quote!(OptTimestamp),
        }
    }
}

/// How one field registers in the generated lookup.
enum Registration {
    Leaf(Leaf),
    OptionalLeaf(Leaf),
    Slice,
    Record,
    OptionalRecord,
    Alias,
    Private,
    ReadOnly,
    Skip,
}

#[derive(Default)]
struct BindAttrs {
    rename: Option<String>,
    skip: bool,
    private: bool,
    read_only: bool,
    text: bool,
}

fn parse_attrs(field: &Field) -> syn::Result<BindAttrs> {
    let mut parsed = BindAttrs::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("private") {
                parsed.private = true;
            } else if meta.path.is_ident("read_only") {
                parsed.read_only = true;
            } else if meta.path.is_ident("text") {
                parsed.text = true;
            } else {
                return Err(meta.error("unknown bind attribute"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

/// Returns the final path segment of a type, when the type is a plain path.
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        _ => None,
    }
}

/// Extracts `T` from a single-argument generic like `Option<T>` or `Vec<T>`.
fn single_type_argument(segment: &syn::PathSegment) -> Option<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn classify(field: &Field, attrs: &BindAttrs) -> syn::Result<Registration> {
    if attrs.skip {
        return Ok(Registration::Skip);
    }
    if attrs.private {
        return Ok(Registration::Private);
    }
    if attrs.read_only {
        return Ok(Registration::ReadOnly);
    }
    if attrs.text {
        return Ok(Registration::Alias);
    }

    let segment = last_segment(&field.ty).ok_or_else(|| {
        syn::Error::new_spanned(
            &field.ty,
            "Bindable fields must be named types; use #[bind(skip)] to leave this field out",
        )
    })?;
    let ident = segment.ident.to_string();

    if let Some(leaf) = Leaf::from_ident(&ident) {
        return Ok(Registration::Leaf(leaf));
    }

    if ident == "Option" {
        let inner = single_type_argument(segment).ok_or_else(|| {
            syn::Error::new_spanned(&field.ty, "Option fields need a concrete type argument")
        })?;
        let inner_ident = last_segment(inner).map(|s| s.ident.to_string());
        return Ok(match inner_ident.as_deref().and_then(Leaf::from_ident) {
            Some(leaf) => Registration::OptionalLeaf(leaf),
            None => Registration::OptionalRecord,
        });
    }

    if ident == "Vec" {
        return Ok(Registration::Slice);
    }

    Ok(Registration::Record)
}

/// Expands the derive input into a `Bindable` implementation.
pub fn expand_bindable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Bindable can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "Bindable requires named fields",
        ));
    };

    let mut arms = Vec::new();
    for field in &fields.named {
        let attrs = parse_attrs(field)?;
        let registration = classify(field, &attrs)?;

        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "Bindable requires named fields")
        })?;
        let key = attrs.rename.unwrap_or_else(|| ident.to_string());

        let arm = match registration {
            Registration::Skip => continue,
            Registration::Private => quote! {
                #key => Some(::trellis_bind::Field::Private),
            },
            Registration::ReadOnly => quote! {
                #key => Some(::trellis_bind::Field::ReadOnly),
            },
            Registration::Alias => quote! {
                #key => Some(::trellis_bind::Field::Slot(
                    ::trellis_bind::Slot::Alias(&mut self.#ident),
                )),
            },
            Registration::Leaf(leaf) => {
                let slot = leaf.slot();
                quote! {
                    #key => Some(::trellis_bind::Field::Slot(
                        ::trellis_bind::Slot::#slot(&mut self.#ident),
                    )),
                }
            }
            Registration::OptionalLeaf(leaf) => {
                let slot = leaf.optional_slot();
                quote! {
                    #key => Some(::trellis_bind::Field::Slot(
                        ::trellis_bind::Slot::#slot(&mut self.#ident),
                    )),
                }
            }
            Registration::Slice => quote! {
                #key => Some(::trellis_bind::Field::Slice(&mut self.#ident)),
            },
            Registration::Record => quote! {
                #key => Some(::trellis_bind::Field::Struct(&mut self.#ident)),
            },
            Registration::OptionalRecord => quote! {
                #key => Some(match self.#ident.as_mut() {
                    Some(inner) => ::trellis_bind::Field::Struct(inner),
                    None => ::trellis_bind::Field::Unset,
                }),
            },
        };
        arms.push(arm);
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::trellis_bind::Bindable for #name #ty_generics #where_clause {
            fn field_mut(&mut self, name: &str) -> Option<::trellis_bind::Field<'_>> {
                match name {
                    #(#arms)*
                    _ => None,
                }
            }
        }
    })
}
