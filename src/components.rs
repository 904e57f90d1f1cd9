// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod Footer;
pub mod Header;
pub mod Page;

// Section components
pub mod sections {
    pub mod About;
    pub mod Contact;
    pub mod Hero;
    pub mod Portfolio;
    pub mod Services;
}

pub use Footer::*;
pub use Header::*;
pub use Page::*;
