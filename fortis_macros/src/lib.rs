// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
// src/lib.rs
use proc_macro::TokenStream;
use quote::{format_ident, quote};

mod curry;

/// Declares `curry2` up to `curryN`, together with their `Curried2` up to `CurriedN` return
/// type aliases, in the invoking module.
/// Usage:
/// declare_curry_fns!(5);
#[proc_macro]
pub fn declare_curry_fns(input: TokenStream) -> TokenStream {
    use curry::*;
    use syn::*;

    let n = parse_macro_input!(input as LitInt);
    let max_arity = match n.base10_parse::<usize>() {
        Ok(arity) if arity >= 2 => arity,
        Ok(_) => {
            return Error::new_spanned(&n, "currying needs an arity of at least 2")
                .to_compile_error()
                .into();
        }
        Err(error) => return error.to_compile_error().into(),
    };

    let mut generated = quote! {};

    for arity in 2..=max_arity {
        let types = type_params(arity);
        let values = value_params(arity);
        let alias_name = format_ident!("Curried{}", arity);
        let fn_name = format_ident!("curry{}", arity);

        let alias_ty = curried_type(&types, 0);
        let body = curried_body(&types, &values, 0);
        let bounds = arg_bounds(&types);

        let alias_doc = format!("A function of {arity} arguments taken one at a time.");
        let fn_doc = format!(
            "Turns a function of {arity} arguments into a chain of unary functions.\n\n\
             All arguments but the last are cloned each time a later stage is called."
        );

        generated.extend(quote! {
            #[doc = #alias_doc]
            pub type #alias_name<#(#types,)* R> = #alias_ty;

            #[doc = #fn_doc]
            pub fn #fn_name<#(#types,)* R, F>(function: F) -> #alias_name<#(#types,)* R>
            where
                F: ::std::ops::Fn(#(#types),*) -> R + 'static,
                #(#bounds,)*
                R: 'static,
            {
                let function = ::std::rc::Rc::new(function);
                #body
            }
        });
    }

    generated.into()
}
