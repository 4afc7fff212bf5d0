// Landing page sections
// Created by the Terra Precision web team (c)2025

mod about;
mod animation;
mod contact;
mod footer;
mod header;
mod hero;
mod lead_modal;
mod platform;
mod solutions;
mod toast;

pub use about::AboutBenefits;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use lead_modal::LeadModal;
pub use platform::PlatformPreview;
pub use solutions::Solutions;
pub use toast::Toast;
