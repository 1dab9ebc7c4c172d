use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }, declaring $input when the body uses it
    let query = if mutation.contains("$input") {
        let input_type = input_type_for(&mutation)?;
        format!("mutation($input: {}!) {{ {} }}", input_type, mutation)
    } else {
        format!("mutation {{ {} }}", mutation)
    };
    execute_and_print(&ctx.schema(), &query, variables)
}

/// `addTodo(input: $input) ...` needs `AddTodoInput`.
fn input_type_for(mutation: &str) -> Result<String> {
    let field = mutation
        .trim_start()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Cannot find the mutation field name"))?;
    let mut chars = field.chars();
    let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
    Ok(format!("{}{}Input", first, chars.as_str()))
}
