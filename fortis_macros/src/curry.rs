// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
// src/curry.rs
use quote::format_ident;
use syn::{parse_quote, Expr, Ident, Type, WherePredicate};

pub(crate) fn type_params(arity: usize) -> Vec<Ident> {
    (1..=arity).map(|i| format_ident!("T{}", i)).collect()
}

pub(crate) fn value_params(arity: usize) -> Vec<Ident> {
    (1..=arity).map(|i| format_ident!("t{}", i)).collect()
}

/// Every argument but the last is captured by a later stage and cloned on each call.
pub(crate) fn arg_bounds(types: &[Ident]) -> Vec<WherePredicate> {
    let last = types.len() - 1;
    types
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            if i == last {
                parse_quote! { #ty: 'static }
            } else {
                parse_quote! { #ty: ::std::clone::Clone + 'static }
            }
        })
        .collect()
}

/// The boxed function type taking argument `from` and returning the rest of the chain.
pub(crate) fn curried_type(types: &[Ident], from: usize) -> Type {
    let ty = &types[from];
    let output: Type = if from + 1 == types.len() {
        parse_quote! { R }
    } else {
        curried_type(types, from + 1)
    };
    parse_quote! { ::std::boxed::Box<dyn ::std::ops::Fn(#ty) -> #output> }
}

/// The closure for argument `from`, capturing the function and the arguments before it.
pub(crate) fn curried_body(types: &[Ident], values: &[Ident], from: usize) -> Expr {
    let ty = &types[from];
    let value = &values[from];
    let captured = &values[..from];

    if from + 1 == types.len() {
        parse_quote! {
            ::std::boxed::Box::new(move |#value: #ty| -> R {
                (*function)(#(#captured.clone(),)* #value)
            })
        }
    } else {
        let output = curried_type(types, from + 1);
        let inner = curried_body(types, values, from + 1);
        parse_quote! {
            ::std::boxed::Box::new(move |#value: #ty| -> #output {
                let function = ::std::rc::Rc::clone(&function);
                #(let #captured = #captured.clone();)*
                #inner
            })
        }
    }
}
