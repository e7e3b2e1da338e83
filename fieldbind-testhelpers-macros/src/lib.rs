//! The `#[fieldbind_testhelpers::test]` attribute.

use unsynn::*;

// attributes and signature are every token before the body
unsynn! {
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        signature: Signature,
        body: BraceGroup,
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Marks a test and installs the tracing subscriber before its body runs.
///
/// ```ignore
/// #[fieldbind_testhelpers::test]
/// fn binds_nested_fields() {
///     // binder logs go to the test output
/// }
/// ```
///
/// An argument replaces the default `#[test]`, e.g.
/// `#[fieldbind_testhelpers::test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let TestFn { signature, body } = match tokens.parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(err) => {
            let message = format!("#[fieldbind_testhelpers::test] expects a function: {err:?}");
            return quote::quote! { ::core::compile_error!(#message); }.into();
        }
    };
    let body = body.0.stream();

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #signature {
            ::fieldbind_testhelpers::setup();

            #body
        }
    }
    .into()
}
