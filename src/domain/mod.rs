// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core edit types with no infrastructure concerns.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` derives (the server defines the wire shape of edit actions),
//! it depends only on `std`.
//!
//! # Modules
//!
//! - [`editing`]: Edit session types ([`Asset`](editing::Asset),
//!   [`EditAction`](editing::EditAction), [`EditToolType`](editing::EditToolType),
//!   [`RotationAngle`](editing::RotationAngle))

pub mod editing;
