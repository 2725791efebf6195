mod commands;
mod handlers;
mod shell;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_delete, handle_get, handle_list, handle_shell, handle_update, parse_id,
};
pub use shell::{run_shell, ShellCommand};
