pub mod code_block;
pub mod footer;
pub mod header;
pub mod icons;
