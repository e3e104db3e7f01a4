//! Command-line and render settings.

mod cli;
mod render;

pub use cli::{parse_args, Cli, Command, OutputFormat, RenderArgs, TableArgs};
pub use render::{
    apply_overrides, load_render_config, resolve_render_config, validate_config, RenderConfig,
    DEFAULT_OUTPUT,
};
