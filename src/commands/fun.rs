//! `--fun`

use anyhow::Result;

pub fn execute() -> Result<()> {
    crate::print_tree_banner();
    Ok(())
}
