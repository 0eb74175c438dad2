use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config::SiteConfig;
use crate::nav::{NavAction, NavMenu};
use crate::scroll::HeaderStyle;
use crate::surface;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Головна"),
    ("#services", "Послуги"),
    ("#portfolio", "Портфоліо"),
    ("#team", "Команда"),
    ("#reviews", "Відгуки"),
    ("#contact", "Контакти"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub config: SiteConfig,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let SiteConfig {
        header_offset_px,
        header_scroll_threshold_px,
        mobile_breakpoint_px,
        ..
    } = props.config;

    let menu = use_reducer(|| NavMenu::new(mobile_breakpoint_px));
    let header_style = use_state_eq(|| HeaderStyle::for_offset(surface::scroll_y(), header_scroll_threshold_px));

    {
        let menu = menu.clone();
        let header_style = header_style.clone();
        use_effect_with_deps(
            move |_| {
                let scroll = surface::on_scroll(move |scroll_y| {
                    header_style.set(HeaderStyle::for_offset(scroll_y, header_scroll_threshold_px));
                });
                let resize = surface::on_resize(move |width| {
                    menu.dispatch(NavAction::Resized(width));
                });

                move || {
                    drop(scroll);
                    drop(resize);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(NavAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(NavAction::Close))
    };

    html! {
        <header class="header" style={header_style.css()}>
            <div class="container nav-container">
                <AnchorLink href="#home" class={classes!("logo")} header_offset={header_offset_px} on_navigate={close_menu.clone()}>
                    <i class="fas fa-sun"></i>{" Промінь"}
                </AnchorLink>

                <nav>
                    <ul class={menu.links_class()}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <AnchorLink
                                    href={*href}
                                    header_offset={header_offset_px}
                                    on_navigate={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label="Меню"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <i class={menu.icon_class()}></i>
                </button>
            </div>
        </header>
    }
}
