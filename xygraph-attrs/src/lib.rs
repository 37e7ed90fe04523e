mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait for the given struct.
///
/// The diagnostic text of the error is customized using the `error` attribute:
/// ```
/// use xygraph_attrs::ErrorKind;
/// use xygraph_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of equation", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to the spans of the error, one per span.   |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression; `labels` accepts an iterable of expressions. For structs with
/// named fields, the expressions are evaluated with `self` in scope, so fields can be used in
/// them (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
