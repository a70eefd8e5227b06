extern crate proc_macro;
use std::sync::Arc;

use cayley::{BladeBasis, MultiplicationTables, VectorSpace};
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, LitInt, Token};

/// Beyond this the embedded tables (three of `4^dimension` entries each)
/// get too large for a constant.
const MAX_EMBEDDED_DIMENSION: usize = 8;

struct Input {
    basis_vector_squares: Vec<i64>,
}

/// A possibly negated integer literal, e.g. `-1`
struct Square(i64);

impl Parse for Square {
    fn parse(input: ParseStream) -> Result<Self> {
        let negative = input.parse::<Option<Token![-]>>()?.is_some();
        let value = input.parse::<LitInt>()?.base10_parse::<i64>()?;
        Ok(Square(if negative { -value } else { value }))
    }
}

impl Parse for Input {
    fn parse(input: ParseStream) -> Result<Self> {
        let square_list = Punctuated::<Square, Token![,]>::parse_terminated(input)?;
        Ok(Input {
            basis_vector_squares: square_list.into_iter().map(|Square(s)| s).collect(),
        })
    }
}

fn cayley_tables2(input: Input) -> Result<TokenStream> {
    let Input {
        basis_vector_squares,
    } = input;

    let dimension = basis_vector_squares.len();
    if dimension > MAX_EMBEDDED_DIMENSION {
        return Err(syn::Error::new(
            Span::call_site(),
            format!(
                "{} basis vectors is too many to embed, at most {} are supported",
                dimension, MAX_EMBEDDED_DIMENSION
            ),
        ));
    }

    // Blade factors are products of squares, and the dual multiplies by the
    // inverse pseudoscalar once more, so bounding the product by i64 keeps i128 exact
    let magnitude = basis_vector_squares
        .iter()
        .try_fold(1i64, |acc, s| acc.checked_mul(s.checked_abs()?));
    if magnitude.is_none() {
        return Err(syn::Error::new(
            Span::call_site(),
            "the product of the basis vector squares does not fit in an i64",
        ));
    }
    let basis_vector_squares: Vec<i128> =
        basis_vector_squares.into_iter().map(i128::from).collect();

    let engine_error = |e: cayley::Error| syn::Error::new(Span::call_site(), e);

    let space = Arc::new(VectorSpace::diagonal(basis_vector_squares).map_err(engine_error)?);
    let basis = BladeBasis::generate(&space).map_err(engine_error)?;
    let tables = MultiplicationTables::build(basis).map_err(engine_error)?;

    // nalgebra matrices are column-major, so walking the transpose gives rows
    let geometric_product = tables.geometric_product().transpose();
    let inner_product = tables.inner_product().transpose();
    let outer_product = tables.outer_product().transpose();

    let grades = tables.grades().iter();
    let geometric_product = geometric_product.iter();
    let inner_product = inner_product.iter();
    let outer_product = outer_product.iter();
    let vector_inverse = tables.vector_inverse().iter();
    let dual = tables.dual().iter();
    let involution = tables.involution().iter();

    Ok(quote! {
        ::cayley::Precomputed {
            grades: ::core::option::Option::Some(&[#(#grades),*]),
            geometric_product: ::core::option::Option::Some(&[#(#geometric_product),*]),
            inner_product: ::core::option::Option::Some(&[#(#inner_product),*]),
            outer_product: ::core::option::Option::Some(&[#(#outer_product),*]),
            vector_inverse: ::core::option::Option::Some(&[#(#vector_inverse),*]),
            dual: ::core::option::Option::Some(&[#(#dual),*]),
            involution: ::core::option::Option::Some(&[#(#involution),*]),
        }
    })
}

/// Compute the Cayley tables of an algebra at compile time
///
/// The arguments are the squares of the basis vectors,
/// e.g. `cayley_tables!(1, 1, 1, 0)` for 3D projective geometric algebra
/// or `cayley_tables!(1, 1, 1, -1)` for spacetime.
/// The basis is the canonical one from `cayley::BladeBasis::generate`.
///
/// Expands to a `cayley::Precomputed<'static>` with every table filled in,
/// which `cayley::MultiplicationTables::from_precomputed` accepts at runtime
/// without redoing the work.
///
/// ```
/// use cayley_macros::cayley_tables;
///
/// const PLANE: cayley::Precomputed<'static> = cayley_tables!(1, 1);
///
/// // e1 e2 = e12, the 4th basis blade
/// assert_eq!(PLANE.geometric_product.unwrap()[1 * 4 + 2], 4);
/// ```
#[proc_macro]
pub fn cayley_tables(input_tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse input
    let input = parse_macro_input!(input_tokens as Input);

    cayley_tables2(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
