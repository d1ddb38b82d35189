//! Derive macro for storing fieldless enums as SQLite `SmallInt` values.
//!
//! The enum needs `#[repr(i16)]`, explicit discriminants and a
//! `TryFrom<i16>` implementation (for example from
//! `num_enum::TryFromPrimitive`). The diesel derives `FromSqlRow` and
//! `AsExpression` with `#[diesel(sql_type = SmallInt)]` are also needed.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, ExprLit, Fields, Lit, parse_macro_input, spanned::Spanned};

#[proc_macro_derive(SimpleDieselEnum)]
pub fn simple_diesel_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match impl_simple_diesel_enum(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn impl_simple_diesel_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "SimpleDieselEnum can only be derived for enums",
            ));
        }
    };

    let mut to_sql_arms = vec![];

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "SimpleDieselEnum only supports unit variants",
            ));
        }

        let ident = &variant.ident;
        let Some((_, expr)) = &variant.discriminant else {
            return Err(syn::Error::new(
                variant.span(),
                "Each variant must have a discriminant",
            ));
        };

        let Expr::Lit(ExprLit {
            lit: Lit::Int(lit_int),
            ..
        }) = expr
        else {
            return Err(syn::Error::new(
                expr.span(),
                "Discriminant must be an integer literal",
            ));
        };

        let value: i16 = lit_int.base10_parse()?;
        to_sql_arms.push(quote! {
            #name::#ident => <i16 as diesel::serialize::ToSql<diesel::sql_types::SmallInt, DB>>::to_sql(&#value, out),
        });
    }

    Ok(quote! {
        impl<DB: diesel::backend::Backend>
            diesel::deserialize::FromSql<diesel::sql_types::SmallInt, DB> for #name
        where
            i16: diesel::deserialize::FromSql<diesel::sql_types::SmallInt, DB>,
        {
            fn from_sql(
                value: <DB as diesel::backend::Backend>::RawValue<'_>,
            ) -> diesel::deserialize::Result<Self> {
                let value = <i16 as diesel::deserialize::FromSql<diesel::sql_types::SmallInt, DB>>::from_sql(value)?;
                TryInto::<#name>::try_into(value).map_err(|e| e.into())
            }
        }

        impl<DB> diesel::serialize::ToSql<diesel::sql_types::SmallInt, DB> for #name
        where
            DB: diesel::backend::Backend,
            i16: diesel::serialize::ToSql<diesel::sql_types::SmallInt, DB>,
        {
            fn to_sql<'b>(
                &'b self,
                out: &mut diesel::serialize::Output<'b, '_, DB>,
            ) -> diesel::serialize::Result {
                match *self {
                    #(#to_sql_arms)*
                }
            }
        }
    }
    .into())
}
