mod init;
mod render;

pub use init::{cmd_init, cmd_init_with_fs};
pub use render::{cmd_render, cmd_render_with_fs};
