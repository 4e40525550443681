mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```
/// use plot_attrs::ErrorKind;
/// use plot_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("the `{}` function does not exist", name),
///     labels = ["this function"],
///     help = "only a fixed set of functions can be used in a formula",
/// )]
/// pub struct UnknownFunction {
///     pub name: String,
/// }
///
/// let kind = UnknownFunction { name: "eval".to_string() };
/// assert_eq!(kind.message(), "the `eval` function does not exist");
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                      |
/// | --------- | -------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error. Required.                         |
/// | `labels`  | An array of label texts. The `i`-th label points at the `i`-th span of the error. |
/// | `help`    | Optional help text describing what the user can do to fix the error.             |
///
/// Each tag accepts an expression that evaluates to something implementing
/// [`ToString`](std::string::ToString). For structs with named fields, the expression is evaluated
/// with the fields of the struct in scope, so they can be used directly in the expression.
///
/// [`ErrorKind`]: https://docs.rs/plot-error/latest/plot_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl plot_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
