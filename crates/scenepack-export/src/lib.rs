//! Scenepack Export Pipeline
//!
//! Persists an in-memory scene document to disk and materializes the texture
//! files the scene references:
//! - JSON (structured text, optional 4-space indent, optional float rounding)
//! - MessagePack (compact binary, behind the `msgpack` feature)
//! - Texture copy from source asset directory to the export directory

pub mod io;
pub mod textures;

pub use io::{read, write, Compression, ExportOptions};
pub use textures::{copy_registered_textures, copy_registered_textures_report};
