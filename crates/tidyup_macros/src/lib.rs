use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Type, parse_macro_input};

/// Maps `#[Event::Xxx]` attribute names to `TidyPlugin` trait method names.
fn event_to_trait_method(event_name: &str) -> Option<&'static str> {
    match event_name {
        "ItemPickedUp" => Some("on_item_picked_up"),
        "ItemDropped" => Some("on_item_dropped"),
        "ItemDeposited" => Some("on_item_deposited"),
        "AvatarRespawned" => Some("on_avatar_respawned"),
        "LevelCleared" => Some("on_level_cleared"),
        _ => None,
    }
}

/// Strips the `#[Event::Xxx]` attribute from a method and returns `Xxx`.
fn take_event_attr(method: &mut ImplItemFn) -> Option<String> {
    let mut event_name = None;
    method.attrs.retain(|attr| {
        let segments: Vec<_> = attr.path().segments.iter().collect();
        if segments.len() == 2 && segments[0].ident == "Event" {
            event_name = Some(segments[1].ident.to_string());
            return false;
        }
        true
    });
    event_name
}

/// The handler's `event: &EventType` parameter type.
fn event_param(method: &ImplItemFn) -> Option<&Type> {
    match method.sig.inputs.iter().nth(1)? {
        FnArg::Typed(pat_type) => Some(&pat_type.ty),
        FnArg::Receiver(_) => None,
    }
}

fn delegate(method: &mut ImplItemFn) -> Option<TokenStream2> {
    let name = take_event_attr(method)?;

    let Some(trait_method_name) = event_to_trait_method(&name) else {
        let message = format!("unknown event `Event::{}`", name);
        return Some(syn::Error::new_spanned(&method.sig.ident, message).to_compile_error());
    };

    let trait_method_ident = syn::Ident::new(trait_method_name, method.sig.ident.span());
    let user_method_ident = &method.sig.ident;

    let Some(event_type) = event_param(method) else {
        return Some(
            syn::Error::new_spanned(
                &method.sig,
                "event handler must take the event as its second parameter",
            )
            .to_compile_error(),
        );
    };

    Some(quote! {
        fn #trait_method_ident(&self, event: #event_type) {
            self.#user_method_ident(event)
        }
    })
}

/// Proc-macro attribute that generates a `TidyPlugin` trait implementation.
///
/// # Usage
/// ```ignore
/// #[tidy_plugin]
/// impl Announcer {
///     #[Event::ItemDeposited]
///     fn on_deposit(&self, event: &ItemDepositedEvent) {
///         info!("{} items left", event.remaining);
///     }
/// }
/// ```
///
/// This expands to the original `impl` block with the event attributes
/// stripped, plus an `impl TidyPlugin` that forwards each trait hook to the
/// annotated method. Unannotated hooks keep their empty default.
#[proc_macro_attribute]
pub fn tidy_plugin(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemImpl);

    let trait_methods: Vec<_> = input
        .items
        .iter_mut()
        .filter_map(|item| match item {
            ImplItem::Fn(method) => delegate(method),
            _ => None,
        })
        .collect();

    let self_ty = &input.self_ty;
    let expanded = quote! {
        #input

        impl crate::events::TidyPlugin for #self_ty {
            #(#trait_methods)*
        }
    };

    expanded.into()
}
