// SPDX-License-Identifier: MIT

//! Domain layer: pure data types shared between screens, services, and the codec.

pub mod phone;
pub mod theme;
