//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, Type, parse_macro_input};

/// The properties accepted by [`macro@solution_runner`], collected while
/// parsing the attribute's arguments.
#[derive(Default)]
struct RunnerProperties {
    /// Expression evaluating to the solution's `&str` display name.
    name: Option<Expr>,
    /// Optional `ParseData` type parsed before solving.
    parsed: Option<Type>,
    /// Type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// Optional type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
}

impl RunnerProperties {
    /// Record one `key = value` property, rejecting duplicates and unknown
    /// keys.
    fn record(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        fn set_once<T: syn::parse::Parse>(
            slot: &mut Option<T>,
            meta: &ParseNestedMeta,
            key: &str,
        ) -> syn::Result<()> {
            if slot.is_some() {
                return Err(meta.error(format!("duplicate '{key}' property")));
            }
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        }

        if meta.path.is_ident("name") {
            set_once(&mut self.name, meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }
}

/// Attribute macro that generates a `SolutionRunner` implementation for a
/// struct or impl block.
///
/// The generated `run` routes to the `aoc_framework::runner` function
/// matching the combination of properties given:
///
/// - `name` (required): expression evaluating to the solution's display
///   name, a `&str`.
/// - `part_one` (required): type implementing `Solution<PartOne>`.
/// - `part_two`: type implementing `Solution<PartTwo>`; omitted for days
///   with only one part.
/// - `parsed`: a `ParseData` type parsed once and shared by the parts;
///   omitted when solutions take the raw input string.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// struct Day01Runner;
///
/// #[solution_runner(name = "Day 3", parsed = Schematic, part_one = Day03, part_two = Day03)]
/// impl AdventOfCodeSolutions<3> {}
/// ```
///
/// # Errors
///
/// Emits a compile error when applied to anything other than a struct or
/// impl block, when `name` or `part_one` is missing, when a property repeats,
/// or when an unknown property appears.
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let property_parser = syn::meta::parser(|meta| properties.record(&meta));
    parse_macro_input!(args with property_parser);

    let Some(name_expr) = properties.name else {
        return missing_property_error("name");
    };
    let Some(part_one_ty) = properties.part_one else {
        return missing_property_error("part_one");
    };

    let solve_call = match (properties.parsed, properties.part_two) {
        (None, None) => quote! {
            aoc_framework::runner::solve_half_solution::<#part_one_ty>(
                #name_expr, input, handler, timed
            )
        },
        (None, Some(part_two_ty)) => quote! {
            aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                #name_expr, input, handler, timed
            )
        },
        (Some(parsed_ty), None) => quote! {
            aoc_framework::runner::solve_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                #name_expr, input, handler, timed
            )
        },
        (Some(parsed_ty), Some(part_two_ty)) => quote! {
            aoc_framework::runner::solve_parsed_full_solution::<
                #parsed_ty,
                #part_one_ty,
                #part_two_ty
            >(#name_expr, input, handler, timed)
        },
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    // the annotated item supplies the type to implement SolutionRunner on
    let self_ty = match item {
        Item::Struct(item_struct) => {
            let ident = item_struct.ident;
            quote! { #ident }
        }
        Item::Impl(item_impl) => {
            let ty = item_impl.self_ty;
            quote! { #ty }
        }
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}

/// Build the compile error for a missing required property.
fn missing_property_error(key: &str) -> TokenStream {
    Error::new(
        proc_macro2::Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}
