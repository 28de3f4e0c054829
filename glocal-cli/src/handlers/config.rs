//! Configuration command handlers

use crate::commands::ConfigCommands;
use crate::context::GlocalCliContext;
use crate::output::{print_config, print_json};

pub async fn handle_config_command(
    cmd: ConfigCommands,
    ctx: &GlocalCliContext,
    output_format: &str,
) -> glocal::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = ctx.glocal.config();
            if output_format == "json" {
                print_json(config);
            } else {
                print_config(config);
            }
        }
    }

    Ok(())
}
