//! Client-side behaviour for the Promin studio landing page.

pub mod config;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod surface;

pub mod contact {
    pub mod form;
    pub mod services;
    pub mod submit;
    pub mod validate;
}
pub mod notification {
    pub mod host;
    pub mod toast;
}
pub mod components {
    pub mod anchor;
    pub mod contact_form;
    pub mod header;
}
pub mod pages {
    pub mod landing;
}
