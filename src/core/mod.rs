// src/core/mod.rs

pub mod html;
pub mod langmap;
pub mod net;
pub mod sanitize;
