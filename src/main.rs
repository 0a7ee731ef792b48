use anyhow::Result;

fn main() -> Result<()> {
    tomlgraft::cli::run()
}
