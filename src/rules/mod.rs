// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rules layer containing the built-in validators and their combinators.
//!
//! Field validators inspect one key of a map. Combinators compose validators
//! into rule sets, scope them to nested maps, or gate them on a predicate.

pub mod combinators;
pub mod fields;
pub mod patterns;

// Re-export commonly used types
pub use combinators::{
    conditional, nested_rule, rules, validator_fn, Conditional, FnValidator, NestedRule, Rules,
};
pub use fields::{
    is_address, is_email, is_numeric, is_phone, is_postal_code, is_required, is_text, is_truthy,
    length_gt, length_lt, matches, Format, FormatKind, LengthGt, LengthLt, Match, Numeric,
    Required, Truthy,
};
