//! Declaration parsing for the typed_accessors macro.
//!
//! This module walks the fields of the annotated struct, collects the
//! `#[accessor]` / `#[reader]` / `#[writer]` declarations, merges
//! duplicates, and validates each slot's declared type against its
//! semantic type.

use syn::{Attribute, Fields, GenericArgument, ItemStruct, PathArguments, Type};

/// The fixed set of coercion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    BoolYn,
    Float,
    Int,
    Date,
}

impl SemanticType {
    fn from_ident(ident: &syn::Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "bool_yn" => Ok(SemanticType::BoolYn),
            "float" => Ok(SemanticType::Float),
            "int" => Ok(SemanticType::Int),
            "date" => Ok(SemanticType::Date),
            other => Err(syn::Error::new(
                ident.span(),
                format!(
                    "unknown semantic type `{other}`; expected one of `bool_yn`, `float`, `int`, `date`"
                ),
            )),
        }
    }

    /// The inner type the storage slot must be declared with.
    pub fn slot_type_name(self) -> &'static str {
        match self {
            SemanticType::BoolYn => "bool",
            SemanticType::Float => "f64",
            SemanticType::Int => "i64",
            SemanticType::Date => "NaiveDate",
        }
    }
}

/// A merged (name, semantic type) declaration for one field.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub semantic: SemanticType,
    pub reader: bool,
    pub writer: bool,
}

/// A struct field carrying a declaration, with its slot type validated.
#[derive(Debug, Clone)]
pub struct AccessorField {
    pub ident: syn::Ident,
    pub ty: Type,
    pub declaration: Declaration,
}

/// True for the three declaration attributes the macro consumes.
pub fn is_declaration_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("accessor") || attr.path().is_ident("reader") || attr.path().is_ident("writer")
}

/// Collect and validate the accessor declarations of a struct.
///
/// Repeated declarations for the same field and semantic type merge into
/// one (a `#[reader]` plus a `#[writer]` of the same type is equivalent
/// to `#[accessor]`). Conflicting semantic types on one field and slot
/// types that do not match the declared semantic type are spanned errors.
pub fn collect_declarations(item: &ItemStruct) -> syn::Result<Vec<AccessorField>> {
    let Fields::Named(fields) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "#[typed_accessors] requires a struct with named fields",
        ));
    };

    let mut declared = Vec::new();

    for field in &fields.named {
        let ident = field
            .ident
            .clone()
            .expect("named fields always have idents");

        let mut merged: Option<Declaration> = None;

        for attr in &field.attrs {
            if !is_declaration_attr(attr) {
                continue;
            }

            let semantic_ident: syn::Ident = attr.parse_args()?;
            let semantic = SemanticType::from_ident(&semantic_ident)?;
            let reader = !attr.path().is_ident("writer");
            let writer = !attr.path().is_ident("reader");

            match &mut merged {
                None => {
                    merged = Some(Declaration {
                        semantic,
                        reader,
                        writer,
                    });
                }
                Some(existing) if existing.semantic == semantic => {
                    existing.reader |= reader;
                    existing.writer |= writer;
                }
                Some(existing) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        format!(
                            "`{ident}` is already declared as `{}`; a field has exactly one semantic type",
                            type_keyword(existing.semantic)
                        ),
                    ));
                }
            }
        }

        if let Some(declaration) = merged {
            validate_slot_type(&ident, &field.ty, declaration.semantic)?;
            declared.push(AccessorField {
                ident,
                ty: field.ty.clone(),
                declaration,
            });
        }
    }

    Ok(declared)
}

fn type_keyword(semantic: SemanticType) -> &'static str {
    match semantic {
        SemanticType::BoolYn => "bool_yn",
        SemanticType::Float => "float",
        SemanticType::Int => "int",
        SemanticType::Date => "date",
    }
}

/// Check that a field is declared `Option<T>` with the slot type its
/// semantic type requires.
fn validate_slot_type(ident: &syn::Ident, ty: &Type, semantic: SemanticType) -> syn::Result<()> {
    let expected = semantic.slot_type_name();

    if let Some(inner) = option_inner_type(ty) {
        if last_segment_is(inner, expected) {
            return Ok(());
        }
    }

    Err(syn::Error::new_spanned(
        ty,
        format!(
            "`{ident}` is declared `{}` and must be stored in `Option<{expected}>`",
            type_keyword(semantic)
        ),
    ))
}

/// Extract `T` from an `Option<T>` type, if that is what `ty` is.
fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// True when the last path segment of `ty` is `name`, so both `NaiveDate`
/// and `chrono::NaiveDate` match.
fn last_segment_is(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == name)
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn declarations(item: ItemStruct) -> Vec<AccessorField> {
        collect_declarations(&item).unwrap()
    }

    #[test]
    fn collects_every_semantic_type() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(float)]
                distance: Option<f64>,
                #[accessor(int)]
                count: Option<i64>,
                #[accessor(bool_yn)]
                onfire: Option<bool>,
                #[accessor(date)]
                day: Option<chrono::NaiveDate>,
            }
        };

        let fields = declarations(item);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].declaration.semantic, SemanticType::Float);
        assert_eq!(fields[3].declaration.semantic, SemanticType::Date);
        assert!(fields.iter().all(|f| f.declaration.reader && f.declaration.writer));
    }

    #[test]
    fn reader_and_writer_declarations_are_one_sided() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[reader(float)]
                distance: Option<f64>,
                #[writer(date)]
                day: Option<chrono::NaiveDate>,
            }
        };

        let fields = declarations(item);
        assert!(fields[0].declaration.reader && !fields[0].declaration.writer);
        assert!(!fields[1].declaration.reader && fields[1].declaration.writer);
    }

    #[test]
    fn duplicate_declarations_merge_idempotently() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(float)]
                #[accessor(float)]
                #[reader(float)]
                distance: Option<f64>,
            }
        };

        let fields = declarations(item);
        assert_eq!(fields.len(), 1);
        assert!(fields[0].declaration.reader && fields[0].declaration.writer);
    }

    #[test]
    fn reader_plus_writer_of_one_type_equals_accessor() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[reader(int)]
                #[writer(int)]
                count: Option<i64>,
            }
        };

        let fields = declarations(item);
        assert!(fields[0].declaration.reader && fields[0].declaration.writer);
    }

    #[test]
    fn conflicting_semantic_types_are_rejected() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(float)]
                #[accessor(int)]
                distance: Option<f64>,
            }
        };

        let err = collect_declarations(&item).unwrap_err();
        assert!(err.to_string().contains("exactly one semantic type"));
    }

    #[test]
    fn slot_type_must_match_the_semantic_type() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(float)]
                distance: Option<i64>,
            }
        };

        let err = collect_declarations(&item).unwrap_err();
        assert!(err.to_string().contains("Option<f64>"));
    }

    #[test]
    fn slot_must_be_an_option() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(bool_yn)]
                onfire: bool,
            }
        };

        assert!(collect_declarations(&item).is_err());
    }

    #[test]
    fn unknown_semantic_type_is_rejected() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                #[accessor(decimal)]
                amount: Option<f64>,
            }
        };

        let err = collect_declarations(&item).unwrap_err();
        assert!(err.to_string().contains("unknown semantic type"));
    }

    #[test]
    fn unmarked_fields_are_ignored() {
        let item: ItemStruct = parse_quote! {
            struct Sensor {
                plain: String,
                #[accessor(int)]
                count: Option<i64>,
            }
        };

        assert_eq!(declarations(item).len(), 1);
    }
}
