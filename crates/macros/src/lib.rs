// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Chronologizer project*
//!
//! This crate contains the Chronologizer procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitInt, Token, parse_macro_input};

/// A year as it would be typed into a date field: `1066`, `-500`, `428 BC` or
/// `2024 AD`
struct YearLiteral {
    value: i64,
}

impl Parse for YearLiteral {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let lit: LitInt = input.parse()?;
        if !lit.suffix().is_empty() {
            return Err(Error::new_spanned(
                lit,
                "Separate the era from the year (e.g. `428 BC`)",
            ));
        }
        let digits = lit.base10_parse::<i64>()?;

        let era: Option<Ident> = input.parse()?;
        let value = match era {
            None if negative => -digits,
            None => digits,
            Some(era) if negative => {
                return Err(Error::new_spanned(era, "A negative year can't have an era"));
            }
            Some(era) => match era.to_string().to_ascii_uppercase().as_str() {
                "BC" | "BCE" => -digits,
                "AD" | "CE" => digits,
                _ => return Err(Error::new_spanned(era, "Expected BC, BCE, AD or CE")),
            },
        };

        if !input.is_empty() {
            return Err(input.error("Unexpected tokens after the year"));
        }
        Ok(Self { value })
    }
}

/// Create a `chronologizer_core::Year`, using `year!(1066)` or
/// `year!(428 BC)`.  The range is checked against `MIN_YEAR` and `MAX_YEAR`
/// when the calling crate is compiled.
#[proc_macro]
pub fn year(input: TokenStream) -> TokenStream {
    let YearLiteral { value } = parse_macro_input!(input as YearLiteral);
    quote! {{
        const _: () = assert!(
            #value >= ::chronologizer_core::MIN_YEAR && #value <= ::chronologizer_core::MAX_YEAR,
            "year must be between MIN_YEAR and MAX_YEAR"
        );
        ::chronologizer_core::Year::try_from(#value).unwrap()
    }}
    .into()
}
