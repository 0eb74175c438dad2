use yew::prelude::*;

use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(80.0)]
    pub header_offset: f64,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that smooth-scrolls to a same-page target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let header_offset = props.header_offset;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(selector) = scroll::anchor_selector(&href) {
                e.prevent_default();
                scroll::smooth_scroll_to(selector, header_offset);
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
