// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSizes {
    pub main_window: WindowSize,
}

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZES: WindowSizes = WindowSizes {
    main_window: WindowSize {
        width: 900.0,
        height: 600.0,
    },
};
