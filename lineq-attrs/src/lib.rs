mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use ariadne::Fmt;
/// use lineq_attrs::ErrorKind;
/// use lineq_error::EXPR;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     category = Syntax,
///     message = "missing `=` sign",
///     labels = [format!("add an {} here", "equals sign".fg(EXPR))],
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `category`  | The [`Category`] variant of the error. This tag is required.                 |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to the spans of the error, in span order.  |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag other than `category` accepts an expression. `message` and `help` should evaluate to
/// something implementing [`ToString`], and `labels` to an iterable of such values. For structs
/// with named fields, the expressions are evaluated with the members of the struct in scope, so
/// they can be used in the expression (tuple structs are not supported).
///
/// [`ErrorKind`]: https://docs.rs/lineq-error/latest/lineq_error/trait.ErrorKind.html
/// [`Category`]: https://docs.rs/lineq-error/latest/lineq_error/enum.Category.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl lineq_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
