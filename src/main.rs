//! Terminal entry point for the multiplication-table form.

use bubbletea_rs::Program;
use multtable::form;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<form::Model>::builder().build()?;
    program.run().await?;
    Ok(())
}
