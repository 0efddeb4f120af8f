// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! `egui` parts
//!

mod button;
mod consts;
mod draw;
mod helpers;
mod label;

pub use button::*;
pub use consts::*;
pub use draw::*;
pub use helpers::*;
pub use label::*;
