// SPDX-License-Identifier: MIT

//! Business logic modules.

pub mod phone;
