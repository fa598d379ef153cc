use std::path::PathBuf;

use clap::Parser;

/// Interactive task manager.
///
/// Reads shell commands (`nueva`, `editar`, `estado`, `buscar`, `listar`,
/// `ver`, `eliminar`) one per line from standard input, or from a script
/// file. Type `ayuda` in the shell for the full command reference.
#[derive(Parser)]
#[command(version, about, name = "tareas")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Run the commands in this file instead of reading standard input
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}
