use crate::graphql::run_server;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let addr = ctx.config.server.socket_addr(port);
    let schema = ctx.schema();

    println!(
        "{} GraphQL server on {}",
        "Starting".green(),
        format!("http://{}", addr).cyan()
    );
    println!("GraphiQL: http://{}", addr);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, addr).await })?;
    Ok(())
}
